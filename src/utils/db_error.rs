//! Classification of SQLx errors.

/// Column guarded by the unique index on `url_mappings`.
const SHORT_CODE_COLUMN: &str = "url_mappings.short_code";

/// Returns `true` if `e` is a unique-constraint violation on the short code.
///
/// SQLite reports no constraint name, so the column is matched on the
/// driver message (`UNIQUE constraint failed: url_mappings.short_code`).
/// Unique violations on any other column are not collisions and must not be
/// retried.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains(SHORT_CODE_COLUMN)
}
