#[cfg(test)]
mod tests {
    use crate::events::{Action, FilterAction};
    use crate::portal::models::{
        ExpenseRecord, ExpenseStatus, PortalData, ReceiptRef,
    };
    use crate::portal::{default_catalog, WizardEffect, WizardStep};
    use crate::ui::{
        DashboardState, DashboardTab, DetailAction, DetailState, ExpenseActions, ExpenseForm,
        FilterType, RequestWizard,
    };
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn expense(id: &str, status: ExpenseStatus) -> ExpenseRecord {
        ExpenseRecord {
            id: id.to_string(),
            title: format!("Expense {}", id),
            amount_cents: 12_500,
            category: "Office Expenses".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            status,
            description: Some("Test expense".to_string()),
            vendor: None,
            payment_method: None,
            receipt: None,
            submitted_by: None,
            approved_by: None,
        }
    }

    fn portal_with(expenses: Vec<ExpenseRecord>) -> PortalData {
        PortalData {
            company_name: "Test Co".to_string(),
            expenses,
            ..PortalData::default()
        }
    }

    #[test]
    fn test_dashboard_state_creation() {
        let state = DashboardState::new();
        assert!(state.data.expenses.is_empty());
        assert!(matches!(state.filter, FilterType::All));
        assert_eq!(state.tab, DashboardTab::Overview);
        assert!(state.table_state.selected().is_some());
    }

    #[test]
    fn test_dashboard_filtering() {
        let mut state = DashboardState::new();
        state.set_data(portal_with(vec![
            expense("exp-1", ExpenseStatus::Pending),
            expense("exp-2", ExpenseStatus::Approved),
            expense("exp-3", ExpenseStatus::Rejected),
        ]));

        // Test All filter
        assert_eq!(state.filtered_expenses().len(), 3);

        // Test Pending filter
        state.filter = FilterType::Pending;
        assert_eq!(state.filtered_expenses().len(), 1);
        assert_eq!(state.filtered_expenses()[0].id, "exp-1");

        // Test Approved filter
        state.filter = FilterType::Approved;
        assert_eq!(state.filtered_expenses().len(), 1);
        assert_eq!(state.filtered_expenses()[0].id, "exp-2");

        // Test Rejected filter
        state.filter = FilterType::Rejected;
        assert_eq!(state.filtered_expenses().len(), 1);
        assert_eq!(state.filtered_expenses()[0].id, "exp-3");
    }

    #[test]
    fn test_dashboard_navigation() {
        let mut state = DashboardState::new();
        state.set_data(portal_with(vec![
            expense("exp-1", ExpenseStatus::Pending),
            expense("exp-2", ExpenseStatus::Approved),
        ]));

        // Initial selection should be first item
        assert_eq!(state.table_state.selected(), Some(0));

        // Move down
        state.handle_action(Action::MoveDown);
        assert_eq!(state.table_state.selected(), Some(1));

        // Move up
        state.handle_action(Action::MoveUp);
        assert_eq!(state.table_state.selected(), Some(0));

        // Move to bottom
        state.handle_action(Action::MoveBottom);
        assert_eq!(state.table_state.selected(), Some(1));

        // Move to top
        state.handle_action(Action::MoveTop);
        assert_eq!(state.table_state.selected(), Some(0));
    }

    #[test]
    fn test_dashboard_select_on_expenses_tab() {
        let mut state = DashboardState::new();
        state.set_data(portal_with(vec![expense("exp-1", ExpenseStatus::Pending)]));

        // Select is a no-op everywhere except the expenses tab
        assert!(state.handle_action(Action::Select).is_none());

        state.tab = DashboardTab::Expenses;
        let selected = state.handle_action(Action::Select);
        assert_eq!(selected.map(|e| e.id), Some("exp-1".to_string()));
    }

    #[test]
    fn test_dashboard_filter_actions_only_on_expenses_tab() {
        let mut state = DashboardState::new();

        // Filter keys do nothing on other tabs
        state.handle_action(Action::ToggleFilter(FilterAction::Pending));
        assert!(matches!(state.filter, FilterType::All));

        state.tab = DashboardTab::Expenses;
        state.handle_action(Action::ToggleFilter(FilterAction::Pending));
        assert!(matches!(state.filter, FilterType::Pending));

        state.handle_action(Action::ToggleFilter(FilterAction::Approved));
        assert!(matches!(state.filter, FilterType::Approved));

        state.handle_action(Action::ToggleFilter(FilterAction::Rejected));
        assert!(matches!(state.filter, FilterType::Rejected));

        state.handle_action(Action::ToggleFilter(FilterAction::All));
        assert!(matches!(state.filter, FilterType::All));
    }

    #[test]
    fn test_filter_change_keeps_selection_in_bounds() {
        let mut state = DashboardState::new();
        state.tab = DashboardTab::Expenses;
        state.set_data(portal_with(vec![
            expense("exp-1", ExpenseStatus::Approved),
            expense("exp-2", ExpenseStatus::Approved),
            expense("exp-3", ExpenseStatus::Pending),
        ]));

        state.handle_action(Action::MoveBottom);
        assert_eq!(state.table_state.selected(), Some(2));

        // Narrowing the filter must not leave the cursor past the end
        state.handle_action(Action::ToggleFilter(FilterAction::Pending));
        assert_eq!(state.filtered_expenses().len(), 1);
        assert_eq!(state.table_state.selected(), Some(0));
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut tab = DashboardTab::Overview;
        for _ in 0..DashboardTab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, DashboardTab::Overview);

        assert_eq!(DashboardTab::Overview.prev(), DashboardTab::Payroll);
        assert_eq!(DashboardTab::Payroll.next(), DashboardTab::Overview);
    }

    #[test]
    fn test_goto_tab() {
        let mut state = DashboardState::new();
        state.handle_action(Action::GotoTab(3));
        assert_eq!(state.tab, DashboardTab::Expenses);

        // Out-of-range index keeps the current tab
        state.handle_action(Action::GotoTab(42));
        assert_eq!(state.tab, DashboardTab::Expenses);
    }

    #[test]
    fn test_tab_from_slug_falls_back_to_overview() {
        assert_eq!(DashboardTab::from_slug("expenses"), DashboardTab::Expenses);
        assert_eq!(DashboardTab::from_slug("Reports"), DashboardTab::Reports);
        assert_eq!(DashboardTab::from_slug("bogus"), DashboardTab::Overview);
        assert_eq!(DashboardTab::from_slug(""), DashboardTab::Overview);
    }

    #[test]
    fn test_detail_capability_gating() {
        let record = expense("exp-1", ExpenseStatus::Pending);

        // No capabilities granted: every action key is a no-op
        let state = DetailState::new(record.clone(), ExpenseActions::default(), "$".to_string());
        assert_eq!(state.handle_key('e'), DetailAction::None);
        assert_eq!(state.handle_key('x'), DetailAction::None);
        assert_eq!(state.handle_key('d'), DetailAction::None);

        // All capabilities granted
        let state = DetailState::new(record, ExpenseActions::all(), "$".to_string());
        assert_eq!(state.handle_key('e'), DetailAction::Edit("exp-1".to_string()));
        assert_eq!(state.handle_key('x'), DetailAction::Delete("exp-1".to_string()));
        // Download still needs a receipt on the record
        assert_eq!(state.handle_key('d'), DetailAction::None);
    }

    #[test]
    fn test_detail_receipt_download_and_retry() {
        let mut record = expense("exp-1", ExpenseStatus::Approved);
        record.receipt = Some(ReceiptRef {
            reference: "rcpt-771".to_string(),
            available: true,
        });

        let state = DetailState::new(record.clone(), ExpenseActions::all(), "$".to_string());
        assert!(!state.receipt_broken);
        assert_eq!(
            state.handle_key('d'),
            DetailAction::DownloadReceipt("exp-1".to_string())
        );
        // Retry only applies to a broken receipt
        assert_eq!(state.handle_key('r'), DetailAction::None);

        record.receipt = Some(ReceiptRef {
            reference: "rcpt-771".to_string(),
            available: false,
        });
        let mut state = DetailState::new(record, ExpenseActions::all(), "$".to_string());
        assert!(state.receipt_broken);
        assert_eq!(
            state.handle_key('r'),
            DetailAction::RetryReceipt("exp-1".to_string())
        );

        // A successful retry clears the placeholder
        state.set_receipt_available(true);
        assert!(!state.receipt_broken);
        assert_eq!(state.handle_key('r'), DetailAction::None);
    }

    #[test]
    fn test_expense_form_presence_validation() {
        let mut form = ExpenseForm::new();
        assert!(!form.can_submit());

        form.amount = "45000".to_string();
        form.category_selected = Some(0); // office-expenses
        assert!(!form.can_submit()); // Description still empty

        form.description = "Paper".to_string();
        assert!(form.can_submit());

        // Whitespace does not count as presence
        form.description = "   ".to_string();
        assert!(!form.can_submit());
    }

    #[test]
    fn test_expense_form_submit_requires_validity() {
        let mut form = ExpenseForm::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        // Invalid form swallows the submit key
        assert!(form.handle_key(ctrl_s).is_none());

        form.amount = "45000".to_string();
        form.category_selected = Some(0);
        form.description = "Paper".to_string();

        let draft = form.handle_key(ctrl_s).expect("valid form should submit");
        assert_eq!(draft.amount, "45000");
        assert_eq!(draft.category.as_deref(), Some("office-expenses"));
        assert_eq!(draft.description, "Paper");
        assert!(draft.receipt_path.is_none());
    }

    #[test]
    fn test_expense_form_draft_date_parsing() {
        let mut form = ExpenseForm::new();
        form.date_text = "2026-05-01".to_string();
        assert_eq!(
            form.draft().date,
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
        );

        // Garbage falls back to the date the form was opened
        form.date_text = "next tuesday".to_string();
        let fallback = form.draft().date;
        assert_eq!(fallback, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_expense_form_reopen_resets() {
        let mut form = ExpenseForm::new();
        form.amount = "45000".to_string();
        form.category_selected = Some(2);
        form.description = "Flight".to_string();
        assert!(form.can_submit());

        // A fresh form starts blank with today's date
        let form = ExpenseForm::new();
        assert!(form.amount.is_empty());
        assert!(form.category_selected.is_none());
        assert!(form.description.is_empty());
        assert_eq!(
            form.date_text,
            chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn test_wizard_keys_drive_machine() {
        let mut wizard = RequestWizard::new(default_catalog());
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);

        // Step 1 guard holds: Next is ignored while nothing is selected
        assert!(wizard.handle_key(ctrl_n).is_none());
        assert_eq!(wizard.machine.step, WizardStep::Challenges);

        // Toggle the first challenge, pick an urgency
        wizard.handle_key(enter);
        wizard.handle_key(tab);
        wizard.handle_key(enter);
        assert!(wizard.machine.step_valid());

        wizard.handle_key(ctrl_n);
        assert_eq!(wizard.machine.step, WizardStep::Needs);

        // Step 2 guard: a service type is required
        assert!(wizard.handle_key(ctrl_n).is_none());
        assert_eq!(wizard.machine.step, WizardStep::Needs);
        wizard.handle_key(enter);
        wizard.handle_key(ctrl_n);
        assert_eq!(wizard.machine.step, WizardStep::Review);

        // Submit drains the draft and resets to step 1
        let effect = wizard.handle_key(ctrl_s);
        assert!(effect.is_some());
        assert_eq!(wizard.machine.step, WizardStep::Challenges);
        assert!(wizard.machine.draft.is_empty());
    }

    #[test]
    fn test_wizard_review_step_keys_leave_draft_alone() {
        let mut wizard = RequestWizard::new(default_catalog());
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);

        // Select a challenge and an urgency, then a service type
        wizard.handle_key(enter);
        wizard.handle_key(tab);
        wizard.handle_key(enter);
        wizard.handle_key(ctrl_n);
        wizard.handle_key(enter);
        wizard.handle_key(ctrl_n);
        assert_eq!(wizard.machine.step, WizardStep::Review);

        // Review has no selectable groups: selection and navigation keys
        // must not touch the draft the earlier guards admitted
        let before = wizard.machine.draft.clone();
        for key in [
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        ] {
            assert!(wizard.handle_key(key).is_none());
            assert_eq!(wizard.machine.step, WizardStep::Review);
            assert_eq!(wizard.machine.draft, before);
        }

        // Submit still works and carries the intact selections
        let Some(WizardEffect::Submitted(draft)) = wizard.handle_key(ctrl_s) else {
            panic!("expected submitted effect");
        };
        assert_eq!(draft, before);
        assert!(!draft.selected_challenges.is_empty());
        assert!(!draft.selected_service_types.is_empty());
    }

    #[test]
    fn test_styles() {
        assert_eq!(status_color(ExpenseStatus::Approved), SUCCESS);
        assert_eq!(status_color(ExpenseStatus::Rejected), ERROR);
        assert_eq!(status_color(ExpenseStatus::Pending), WARNING);
        assert_eq!(status_color(ExpenseStatus::Categorized), PRIMARY);

        assert_eq!(status_icon(ExpenseStatus::Approved), "●");
        assert_eq!(status_icon(ExpenseStatus::Rejected), "✗");

        assert_eq!(category_color("Payroll"), ratatui::style::Color::Green);
        // Unknown categories resolve to the neutral default
        assert_eq!(category_color("Marketing"), NEUTRAL);
        assert_eq!(category_color(""), NEUTRAL);
    }

    #[test]
    fn test_dashboard_rendering() {
        let mut state = DashboardState::new();
        state.set_data(portal_with(vec![expense("exp-1", ExpenseStatus::Pending)]));

        // Create a test backend and terminal
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        // Every tab should render without panicking
        for tab in DashboardTab::ALL {
            state.tab = tab;
            let _ = terminal.draw(|f| {
                state.render(f, f.area(), true);
            });
        }

        let buffer = terminal.backend().buffer();
        assert!(buffer.area.width > 0 && buffer.area.height > 0);
    }

    #[test]
    fn test_payroll_tab_renders_coming_soon() {
        let mut state = DashboardState::new();
        state.set_data(portal_with(vec![expense("exp-1", ExpenseStatus::Pending)]));
        state.tab = DashboardTab::Payroll;

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                state.render(f, f.area(), true);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Payroll is coming soon."));
    }

    #[test]
    fn test_overlay_rendering() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut record = expense("exp-1", ExpenseStatus::Pending);
        record.receipt = Some(ReceiptRef {
            reference: "rcpt-1".to_string(),
            available: false,
        });
        let detail = DetailState::new(record, ExpenseActions::all(), "$".to_string());
        let wizard = RequestWizard::new(default_catalog());
        let form = ExpenseForm::new();

        let _ = terminal.draw(|f| {
            detail.render(f, f.area());
        });
        let _ = terminal.draw(|f| {
            wizard.render(f, f.area());
        });
        let _ = terminal.draw(|f| {
            form.render(f, f.area());
        });
    }

    #[test]
    fn test_filter_type_label() {
        assert_eq!(FilterType::All.label(), "All");
        assert_eq!(FilterType::Pending.label(), "Pending");
        assert_eq!(FilterType::Approved.label(), "Approved");
        assert_eq!(FilterType::Rejected.label(), "Rejected");
    }

    // Import styles for testing
    use crate::ui::styles::*;
}
