// UI module - TUI components

pub mod dashboard;
pub mod detail;
pub mod expense_form;
pub mod help;
pub mod styles;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use dashboard::{DashboardState, DashboardTab, FilterType};
pub use detail::{DetailAction, DetailState, ExpenseActions};
pub use expense_form::ExpenseForm;
pub use help::HelpState;
pub use styles::*;
pub use wizard::RequestWizard;
