// Event handling for the TUI application

use crate::portal::models::PortalData;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// Portal dataset loaded from the backend client
    PortalLoaded(Box<PortalData>),

    /// User input event
    Input(CrosstermEvent),

    /// Status message for user feedback
    StatusMessage(String),

    /// Result of re-probing a receipt asset from the detail panel
    ReceiptProbed { expense: String, available: bool },

    /// Error occurred
    Error(anyhow::Error),

    /// Request to quit
    Quit,

    /// Show help
    ShowHelp,
}

/// User actions derived from input events
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,
    Select,
    GoBack,

    // Tab switching
    NextTab,
    PrevTab,
    GotoTab(usize),

    // Expense list filtering
    ToggleFilter(FilterAction),

    // Modal openers
    NewRequest,
    NewExpense,

    Refresh,
    ShowHelp,

    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    All,
    Pending,
    Approved,
    Rejected,
}

/// Convert keyboard input to actions
pub fn key_event_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::MoveTop,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::MoveBottom,

        // Selection
        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Esc, _) => Action::GoBack,

        // Tabs
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextTab,
        (KeyCode::BackTab, _) => Action::PrevTab,
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextTab,
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevTab,
        (KeyCode::Char(c @ '1'..='8'), KeyModifiers::NONE) => {
            Action::GotoTab(c as usize - '1' as usize)
        }

        // Expense filters
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleFilter(FilterAction::All),
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::ToggleFilter(FilterAction::Pending),
        (KeyCode::Char('v'), KeyModifiers::NONE) => Action::ToggleFilter(FilterAction::Approved),
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::ToggleFilter(FilterAction::Rejected),

        // Modal openers; the raised overlay consumes its own submit keys
        // before this mapping runs
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NewRequest,
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::NewExpense,

        // Other actions
        (KeyCode::F(5), _) => Action::Refresh,
        (KeyCode::Char('?'), KeyModifiers::NONE) => Action::ShowHelp,

        _ => Action::None,
    }
}

/// Spawn input event handler task
pub async fn spawn_input_handler(tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        loop {
            if crossterm::event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if tx.send(AppEvent::Input(event)).await.is_err() {
                        break;
                    }
                }
            }
        }
    });
}
