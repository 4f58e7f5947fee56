use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every failure that can reach the HTTP boundary is one of these three
/// kinds. The API layer decides how much of each is shown to the client.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by slug or numeric key found no record.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// The client supplied missing, empty or out-of-range input.
    #[error("{entity} validation failed: {reason}")]
    Validation { entity: &'static str, reason: String },

    /// Storage unavailable or an unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for a slug lookup.
    pub fn slug_not_found(entity: &'static str, slug: &str) -> Self {
        CoreError::NotFound {
            entity,
            key: format!("slug '{slug}'"),
        }
    }

    /// Not-found error for a numeric key lookup.
    pub fn id_not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: format!("id {id}"),
        }
    }

    /// Validation error for a slug that is already taken in its collection.
    pub fn duplicate_slug(entity: &'static str) -> Self {
        CoreError::Validation {
            entity,
            reason: "slug already exists".to_string(),
        }
    }
}
