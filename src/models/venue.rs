//! Venue model.
//!
//! Venues are owned by the location collaborator. Only the identifier takes
//! part in scheduling; name and address ride along for reporting.

use serde::{Deserialize, Serialize};

/// A place where a fixture can be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Postal address.
    pub address: String,
}

impl Venue {
    /// Creates a venue with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            address: String::new(),
        }
    }

    /// Sets the venue name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the venue address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Name for display, falling back to the ID.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            self.name.as_str()
        }
    }
}
