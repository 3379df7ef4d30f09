//! # lesson-engine
//!
//! Scheduling and conflict-resolution engine for a freelance teaching diary.
//!
//! The engine is a pure library: it receives the current lesson and
//! institute collections from the caller, and every operation returns a new
//! collection or a report without touching its inputs. Persistence, calendar
//! rendering, and text import are external collaborators.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:mm` strings to minute offsets, interval overlap
//! - [`conflict`] — find the lessons that collide with a candidate
//! - [`validate`] — batch validation, conflict reports, save policy
//! - [`merge`] — create/update/upsert/delete over the canonical collection
//! - [`stats`] — filtered workload and earnings aggregation
//! - [`freetime`] — free morning/afternoon/day classification
//! - [`query`] — day schedules, busy dates, subject labels
//! - [`model`] — the `Lesson` and `Institute` records
//! - [`error`] — error types

pub mod clock;
pub mod conflict;
pub mod error;
pub mod freetime;
pub mod merge;
pub mod model;
pub mod query;
pub mod stats;
pub mod validate;

pub use conflict::find_conflicts;
pub use error::EngineError;
pub use freetime::{derive_free_slots, FreeSlot, FreeSlotKind};
pub use merge::{apply, MergeOp};
pub use model::{Institute, Lesson, Modality, RateType};
pub use stats::{aggregate, LessonFilter, Summary};
pub use validate::{decide, validate_batch, ConflictReport, SaveDecision, SavePolicy};
