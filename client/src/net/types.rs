//! Wire DTOs for the client/backend boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One user record as returned by `GET /api/users`.
///
/// Records are never mutated client-side; a new response replaces the whole
/// collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier, unique within a response.
    pub id: i64,
    pub name: String,
    pub email: String,
}
