#[cfg(test)]
mod tests {
    use crate::app::*;
    use crate::config::Config;
    use crate::error::Result;
    use crate::events::{key_event_to_action, Action, AppEvent, FilterAction};
    use crate::portal::models::{ExpenseRecord, ExpenseStatus, PortalData, ReceiptRef};
    use crate::ui::DashboardTab;
    use chrono::NaiveDate;
    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn sample_data() -> PortalData {
        PortalData {
            company_name: "Test Co".to_string(),
            expenses: vec![ExpenseRecord {
                id: "exp-1".to_string(),
                title: "Laptop stand".to_string(),
                amount_cents: 8_900,
                category: "Office Expenses".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
                status: ExpenseStatus::Pending,
                description: None,
                vendor: None,
                payment_method: None,
                receipt: Some(ReceiptRef {
                    reference: "rcpt-9".to_string(),
                    available: false,
                }),
                submitted_by: None,
                approved_by: None,
            }],
            ..PortalData::default()
        }
    }

    #[tokio::test]
    async fn test_app_creation() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let app = App::new(tx, Config::default());
        assert!(!app.should_quit);
        assert!(matches!(app.overlay, Overlay::None));
        assert_eq!(app.dashboard.tab, DashboardTab::Overview);
        Ok(())
    }

    #[tokio::test]
    async fn test_config_shapes_dashboard() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let config = Config {
            currency_symbol: "€".to_string(),
            default_tab: "expenses".to_string(),
            overview_recent_limit: 3,
            ..Config::default()
        };
        let app = App::new(tx, config);
        assert_eq!(app.dashboard.currency, "€");
        assert_eq!(app.dashboard.tab, DashboardTab::Expenses);
        assert_eq!(app.dashboard.recent_limit, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_portal_loaded_event() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let mut app = App::new(tx, Config::default());

        app.handle_event(AppEvent::PortalLoaded(Box::new(sample_data())))
            .await?;
        assert_eq!(app.dashboard.data.expenses.len(), 1);
        assert_eq!(app.dashboard.data.company_name, "Test Co");

        Ok(())
    }

    #[tokio::test]
    async fn test_quit_and_status_events() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let mut app = App::new(tx, Config::default());

        app.handle_event(AppEvent::StatusMessage("✓ Done".to_string()))
            .await?;
        assert_eq!(app.status_message.as_deref(), Some("✓ Done"));

        app.handle_event(AppEvent::Quit).await?;
        assert!(app.should_quit);

        Ok(())
    }

    #[tokio::test]
    async fn test_overlay_open_and_close() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let mut app = App::new(tx, Config::default());

        // 'n' raises the wizard
        app.handle_event(key(KeyCode::Char('n'))).await?;
        assert!(matches!(app.overlay, Overlay::Wizard(_)));

        // Esc drops back to the dashboard
        app.handle_event(key(KeyCode::Esc)).await?;
        assert!(matches!(app.overlay, Overlay::None));
        assert!(!app.should_quit);

        // 'e' raises the expense form
        app.handle_event(key(KeyCode::Char('e'))).await?;
        assert!(matches!(app.overlay, Overlay::ExpenseForm(_)));
        app.handle_event(key(KeyCode::Esc)).await?;
        assert!(matches!(app.overlay, Overlay::None));

        // '?' raises help
        app.handle_event(key(KeyCode::Char('?'))).await?;
        assert!(matches!(app.overlay, Overlay::Help(_)));
        app.handle_event(key(KeyCode::Esc)).await?;
        assert!(matches!(app.overlay, Overlay::None));

        Ok(())
    }

    #[tokio::test]
    async fn test_detail_opens_with_record() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let mut app = App::new(tx, Config::default());
        app.handle_event(AppEvent::PortalLoaded(Box::new(sample_data())))
            .await?;

        // Jump to the expenses tab and open the selected row
        app.handle_event(key(KeyCode::Char('4'))).await?;
        assert_eq!(app.dashboard.tab, DashboardTab::Expenses);
        app.handle_event(key(KeyCode::Enter)).await?;

        // The overlay arrives already holding its record
        match &app.overlay {
            Overlay::Detail(detail) => {
                assert_eq!(detail.record.id, "exp-1");
                assert!(detail.receipt_broken);
            }
            other => panic!("expected detail overlay, got {:?}", other),
        }

        app.handle_event(key(KeyCode::Esc)).await?;
        assert!(matches!(app.overlay, Overlay::None));

        Ok(())
    }

    #[tokio::test]
    async fn test_receipt_probe_updates_detail() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let mut app = App::new(tx, Config::default());
        app.handle_event(AppEvent::PortalLoaded(Box::new(sample_data())))
            .await?;
        app.handle_event(key(KeyCode::Char('4'))).await?;
        app.handle_event(key(KeyCode::Enter)).await?;

        app.handle_event(AppEvent::ReceiptProbed {
            expense: "exp-1".to_string(),
            available: true,
        })
        .await?;

        match &app.overlay {
            Overlay::Detail(detail) => assert!(!detail.receipt_broken),
            other => panic!("expected detail overlay, got {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_error_event_sets_status() -> Result<()> {
        let (tx, _rx) = tokio::sync::mpsc::channel(100);
        let mut app = App::new(tx, Config::default());

        app.handle_event(AppEvent::Error(anyhow::anyhow!("backend unreachable")))
            .await?;
        let message = app.status_message.expect("status should be set");
        assert!(message.starts_with('✗'));
        assert!(message.contains("backend unreachable"));

        Ok(())
    }

    #[test]
    fn test_action_conversions() {
        // Test quit actions
        let quit_action = key_event_to_action(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(quit_action, Action::Quit);

        let ctrl_c_action =
            key_event_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ctrl_c_action, Action::Quit);

        // Test navigation
        let up_action = key_event_to_action(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(up_action, Action::MoveUp);

        let k_action = key_event_to_action(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE));
        assert_eq!(k_action, Action::MoveUp);

        // Test tab switching
        let tab_action = key_event_to_action(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(tab_action, Action::NextTab);

        let digit_action =
            key_event_to_action(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));
        assert_eq!(digit_action, Action::GotoTab(2));

        // Test filtering
        let all_action = key_event_to_action(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(all_action, Action::ToggleFilter(FilterAction::All));

        let pending_action =
            key_event_to_action(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));
        assert_eq!(pending_action, Action::ToggleFilter(FilterAction::Pending));

        // Test modal openers
        let request_action =
            key_event_to_action(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert_eq!(request_action, Action::NewRequest);

        let expense_action =
            key_event_to_action(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
        assert_eq!(expense_action, Action::NewExpense);
    }

    #[test]
    fn test_filter_action_equality() {
        assert_eq!(FilterAction::All, FilterAction::All);
        assert_ne!(FilterAction::All, FilterAction::Pending);

        let filter1 = FilterAction::Rejected;
        let filter2 = FilterAction::Rejected;
        assert_eq!(filter1, filter2);
    }

    #[tokio::test]
    async fn test_event_channel() -> Result<()> {
        let (tx, mut rx) = tokio::sync::mpsc::channel(10);

        // Test sending different event types
        assert!(tx.send(AppEvent::Quit).await.is_ok());
        assert!(tx
            .send(AppEvent::StatusMessage("Test".to_string()))
            .await
            .is_ok());

        // Test receiving events
        if let Some(event) = rx.recv().await {
            match event {
                AppEvent::Quit => {
                    // Expected
                }
                AppEvent::StatusMessage(msg) => {
                    assert_eq!(msg, "Test");
                }
                _ => panic!("Unexpected event type"),
            }
        } else {
            panic!("No event received");
        }

        Ok(())
    }
}
