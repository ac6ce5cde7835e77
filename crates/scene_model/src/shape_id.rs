//! Shape ID representation

use serde::{Deserialize, Serialize};

/// Identifier for a shape on the canvas.
///
/// Ids are caller-supplied integers. Uniqueness is not enforced: several
/// shapes may share an id, and lookups return the first match in pre-order
/// traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(i64);

impl ShapeId {
    /// The canvas root's id. The root is not addressable through lookups.
    pub const ROOT: ShapeId = ShapeId(-1);

    /// Create a ShapeId from a raw integer
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ShapeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ShapeId> for i64 {
    fn from(id: ShapeId) -> Self {
        id.0
    }
}
