//! Public record shape for pharmacy lookups.

use serde::{Deserialize, Serialize};

/// A pharmacy near the query coordinate, reduced to display fields.
///
/// The ranking distance is internal to the client and dropped before records
/// cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub name: String,
    pub address: String,
    pub map_url: String,
}
