//! Limit/offset pagination shared by list operations.

/// Number of records returned when the caller gives no limit.
pub const DEFAULT_LIMIT: u64 = 10;
/// Upper bound applied to caller-supplied limits.
pub const MAX_LIMIT: u64 = 100;

/// Resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    /// Applies defaults and clamps the limit to `MAX_LIMIT`.
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}
