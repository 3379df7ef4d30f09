//! Error types for lesson-engine operations.
//!
//! Only identity-level defects are errors. Parsing-level defects (a malformed
//! time string) degrade to safe defaults in [`crate::clock`], and conflict
//! detection is an ordinary return value, never an `Err`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An update referenced lesson ids that do not exist in the collection.
    /// Carries every missing id so the caller can report all of them at once.
    #[error("no lesson found for id(s): {}", ids.join(", "))]
    NotFound { ids: Vec<String> },

    /// A create was attempted with an id that already exists. Ids in a create
    /// batch must be freshly generated; a collision is a caller bug, not a
    /// recoverable runtime condition.
    #[error("duplicate lesson id on create: {id}")]
    DuplicateId { id: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
