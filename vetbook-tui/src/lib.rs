//! VETBOOK TUI - Terminal Presentation Layer
//!
//! Lists, views, and edits playbooks and drives the escalation matcher
//! interactively. All storage goes through the [`gateway`] module: the
//! remote API first, with a local filesystem mirror as fallback when the
//! backend is unreachable.

pub mod config;
pub mod error;
pub mod gateway;
pub mod notifications;
pub mod state;
pub mod theme;
pub mod views;

pub use config::{ThemeMode, TuiConfig};
pub use error::TuiError;
