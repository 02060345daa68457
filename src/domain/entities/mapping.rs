//! Mapping entity: a short code bound to a long URL.

/// A persisted short code → long URL mapping.
///
/// Mappings are immutable once stored; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    /// Store-assigned surrogate key, never reused.
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub long_url: String,
    pub short_code: String,
}

impl NewMapping {
    pub fn new(long_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            short_code: short_code.into(),
        }
    }
}
