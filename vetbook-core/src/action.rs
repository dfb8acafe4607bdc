//! Escalation action tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Response category attached to an escalation path.
///
/// The tag is an open string on the wire: seven well-known values get
/// dedicated display treatment, anything else is carried verbatim as
/// [`EscalationAction::Custom`] and rendered with a generic style.
/// Recognition is case-insensitive; custom values keep their original
/// spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EscalationAction {
    /// Content should be verified by internal team members.
    Verify,
    /// Content should be reviewed by subject matter experts.
    Consult,
    /// Do not use AI-generated content in these scenarios.
    Avoid,
    /// Route to senior reviewers or leadership.
    Escalate,
    /// Standard review before use.
    Review,
    /// Cleared for use.
    Approve,
    /// Mark for later attention.
    Flag,
    /// Any other tag an author typed in.
    Custom(String),
}

/// Display tone used for color selection in the presentation layer.
///
/// A total function of the action tag; custom values fall back to
/// [`ActionTone::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTone {
    Info,
    Caution,
    Danger,
    Scrutiny,
    Positive,
    Attention,
    Neutral,
}

impl EscalationAction {
    /// Canonical wire string. Custom tags return their raw spelling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Verify => "verify",
            Self::Consult => "consult",
            Self::Avoid => "avoid",
            Self::Escalate => "escalate",
            Self::Review => "review",
            Self::Approve => "approve",
            Self::Flag => "flag",
            Self::Custom(raw) => raw,
        }
    }

    /// Banner label shown on decision result cards.
    pub fn label(&self) -> String {
        match self {
            Self::Verify => "VERIFY INTERNALLY".to_string(),
            Self::Consult => "CONSULT EXPERTS".to_string(),
            Self::Avoid => "AVOID AI CONTENT".to_string(),
            Self::Escalate => "ESCALATE".to_string(),
            Self::Review => "REVIEW".to_string(),
            Self::Approve => "APPROVE".to_string(),
            Self::Flag => "FLAG FOR REVIEW".to_string(),
            Self::Custom(raw) => raw.to_uppercase(),
        }
    }

    pub fn tone(&self) -> ActionTone {
        match self {
            Self::Verify => ActionTone::Info,
            Self::Consult => ActionTone::Caution,
            Self::Avoid | Self::Escalate => ActionTone::Danger,
            Self::Review => ActionTone::Scrutiny,
            Self::Approve => ActionTone::Positive,
            Self::Flag => ActionTone::Attention,
            Self::Custom(_) => ActionTone::Neutral,
        }
    }
}

impl From<String> for EscalationAction {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "verify" => Self::Verify,
            "consult" => Self::Consult,
            "avoid" => Self::Avoid,
            "escalate" => Self::Escalate,
            "review" => Self::Review,
            "approve" => Self::Approve,
            "flag" => Self::Flag,
            _ => Self::Custom(raw),
        }
    }
}

impl From<&str> for EscalationAction {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<EscalationAction> for String {
    fn from(action: EscalationAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for EscalationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
