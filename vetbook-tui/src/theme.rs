//! Theme palettes and action color mapping.
//!
//! The theme is an explicit context value handed to every render
//! function, not ambient global state, so rendering stays a pure
//! function of `(state, theme)`.

use ratatui::style::Color;
use vetbook_core::{ActionTone, EscalationAction};

use crate::config::ThemeMode;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub border_focus: Color,
    pub text: Color,
    pub text_dim: Color,
    pub highlight: Color,

    // Action tones
    pub info: Color,
    pub caution: Color,
    pub danger: Color,
    pub scrutiny: Color,
    pub positive: Color,
    pub attention: Color,
    pub neutral: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(30, 41, 59),
            border: Color::Rgb(51, 65, 85),
            border_focus: Color::Rgb(125, 211, 252),
            text: Color::Rgb(241, 245, 249),
            text_dim: Color::Rgb(148, 163, 184),
            highlight: Color::Rgb(51, 65, 85),
            info: Color::Rgb(96, 165, 250),
            caution: Color::Rgb(251, 146, 60),
            danger: Color::Rgb(248, 113, 113),
            scrutiny: Color::Rgb(34, 211, 238),
            positive: Color::Rgb(74, 222, 128),
            attention: Color::Rgb(250, 204, 21),
            neutral: Color::Rgb(192, 132, 252),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(248, 249, 250),
            border: Color::Rgb(222, 226, 230),
            border_focus: Color::Rgb(2, 132, 199),
            text: Color::Rgb(33, 37, 41),
            text_dim: Color::Rgb(134, 142, 150),
            highlight: Color::Rgb(222, 226, 230),
            info: Color::Rgb(37, 99, 235),
            caution: Color::Rgb(234, 88, 12),
            danger: Color::Rgb(220, 38, 38),
            scrutiny: Color::Rgb(8, 145, 178),
            positive: Color::Rgb(22, 163, 74),
            attention: Color::Rgb(202, 138, 4),
            neutral: Color::Rgb(147, 51, 234),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

/// Badge color for an action tag; total over the open tag set, custom
/// actions get the neutral color.
pub fn action_color(action: &EscalationAction, theme: &Theme) -> Color {
    match action.tone() {
        ActionTone::Info => theme.info,
        ActionTone::Caution => theme.caution,
        ActionTone::Danger => theme.danger,
        ActionTone::Scrutiny => theme.scrutiny,
        ActionTone::Positive => theme.positive,
        ActionTone::Attention => theme.attention,
        ActionTone::Neutral => theme.neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_color_is_total() {
        let theme = Theme::dark();
        let actions = [
            EscalationAction::Verify,
            EscalationAction::Consult,
            EscalationAction::Avoid,
            EscalationAction::Escalate,
            EscalationAction::Review,
            EscalationAction::Approve,
            EscalationAction::Flag,
            EscalationAction::Custom("anything".to_string()),
        ];
        for action in &actions {
            // Every tag maps to some color without panicking.
            let _ = action_color(action, &theme);
        }
        assert_eq!(
            action_color(&EscalationAction::Avoid, &theme),
            action_color(&EscalationAction::Escalate, &theme)
        );
    }
}
