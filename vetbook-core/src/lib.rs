//! VETBOOK Core - Entity Types and Escalation Matching
//!
//! Pure data structures and decision logic with no I/O. All other crates
//! depend on this. The only non-trivial behavior in the system lives in
//! [`matcher`]; everything else is data contracts.

pub mod action;
pub mod entities;
pub mod error;
pub mod matcher;
pub mod templates;

pub use action::{ActionTone, EscalationAction};
pub use entities::{
    new_playbook_id, validate_draft, Contributor, EscalationPath, Playbook, PlaybookPatch,
    Resource, Timestamp, MIN_DESCRIPTION_LEN, MIN_TITLE_LEN,
};
pub use error::{StorageError, ValidationError, VetbookError, VetbookResult};
pub use matcher::{best_match, question_set, short_circuit, DecisionFlow, MatchOutcome};
pub use templates::{builtin_templates, is_builtin_template};
