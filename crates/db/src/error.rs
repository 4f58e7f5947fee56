//! Mapping from sqlx failures onto the domain error taxonomy.

use heritage_core::error::CoreError;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error raised while operating on `entity`.
///
/// - A unique violation on a `uq_*_slug` constraint is a duplicate slug,
///   reported as a validation error.
/// - Everything else is internal; the original text is kept for the
///   server-side log only.
pub fn classify(entity: &'static str, err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("");
            if constraint.starts_with("uq_") && constraint.ends_with("_slug") {
                return CoreError::duplicate_slug(entity);
            }
        }
    }
    CoreError::Internal(format!("{entity} storage error: {err}"))
}
