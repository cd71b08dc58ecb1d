//! Database entity models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One database name as reported by the server.
///
/// Serialized as `{"Database": "<name>"}`, matching the column name of
/// `SHOW DATABASES` so the wire format is a direct passthrough of the
/// result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseRecord {
    /// Database name (non-empty).
    #[serde(rename = "Database")]
    pub name: String,
}

impl DatabaseRecord {
    /// Creates a new database record.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
