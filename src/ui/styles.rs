// Ratatui styling and color palette
//
// Status and category styling is kept behind pure lookup functions so the
// token mapping can be tested without a rendering environment. Unknown
// values always resolve to a neutral default.

use crate::portal::categories::category_slug;
use crate::portal::models::{ExpenseStatus, TransactionDirection, UrgencyLevel};
use ratatui::style::{Color, Modifier, Style};

// Color palette
pub const PRIMARY: Color = Color::Cyan;
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
pub const MUTED: Color = Color::Gray;
pub const NEUTRAL: Color = Color::White;

// Common styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn help_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn selected_style() -> Style {
    Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
}

/// Dimmed style for controls whose guard does not hold (disabled "Next",
/// disabled "Submit"); validation failures are surfaced this way only
pub fn disabled_style() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
}

pub fn enabled_style() -> Style {
    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

/// Color for an expense status
pub fn status_color(status: ExpenseStatus) -> Color {
    match status {
        ExpenseStatus::Pending => WARNING,
        ExpenseStatus::Categorized => PRIMARY,
        ExpenseStatus::Approved => SUCCESS,
        ExpenseStatus::Rejected => ERROR,
    }
}

/// Icon for an expense status
pub fn status_icon(status: ExpenseStatus) -> &'static str {
    match status {
        ExpenseStatus::Pending => "◐",
        ExpenseStatus::Categorized => "◆",
        ExpenseStatus::Approved => "●",
        ExpenseStatus::Rejected => "✗",
    }
}

/// Color for an expense category, accepted in display or slug form via the
/// canonical mapping. Unknown categories fall back to the neutral default
/// rather than failing or rendering blank.
pub fn category_color(category: &str) -> Color {
    match category_slug(category).as_str() {
        "office-expenses" => Color::Blue,
        "software" => Color::Cyan,
        "travel" => Color::Magenta,
        "meals" => Color::Yellow,
        "payroll" => Color::Green,
        "professional-services" => Color::LightBlue,
        "other" => MUTED,

        // Default - neutral
        _ => NEUTRAL,
    }
}

/// Color for a request urgency level
pub fn urgency_color(urgency: UrgencyLevel) -> Color {
    match urgency {
        UrgencyLevel::Immediate => ERROR,
        UrgencyLevel::Urgent => WARNING,
        UrgencyLevel::Moderate => PRIMARY,
        UrgencyLevel::Flexible => MUTED,
    }
}

/// Color for a transaction direction
pub fn direction_color(direction: TransactionDirection) -> Color {
    match direction {
        TransactionDirection::Inflow => SUCCESS,
        TransactionDirection::Outflow => ERROR,
    }
}

/// Sign prefix for a transaction direction
pub fn direction_sign(direction: TransactionDirection) -> &'static str {
    match direction {
        TransactionDirection::Inflow => "+",
        TransactionDirection::Outflow => "-",
    }
}
