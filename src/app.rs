// Main application state and overlay routing

use crate::config::Config;
use crate::error::Result;
use crate::events::{key_event_to_action, Action, AppEvent};
use crate::portal::{default_catalog, PortalClient, WizardEffect};
use crate::ui::{
    DashboardState, DashboardTab, DetailAction, DetailState, ExpenseActions, ExpenseForm,
    HelpState, RequestWizard,
};
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
};
use tokio::sync::mpsc;

/// Modal overlays raised above the dashboard. The dashboard itself is always
/// alive underneath; closing an overlay drops straight back to it.
#[derive(Debug)]
pub enum Overlay {
    None,
    Help(HelpState),
    Wizard(RequestWizard),
    ExpenseForm(ExpenseForm),
    Detail(Box<DetailState>),
}

/// Main application state
pub struct App {
    pub dashboard: DashboardState,
    pub overlay: Overlay,
    pub should_quit: bool,
    pub client: PortalClient,
    pub tx: mpsc::Sender<AppEvent>,
    pub status_message: Option<String>,
    pub needs_full_redraw: bool,
    pub config: Config,
}

impl App {
    pub fn new(tx: mpsc::Sender<AppEvent>, config: Config) -> Self {
        let mut dashboard = DashboardState::new();
        dashboard.currency = config.currency_symbol.clone();
        dashboard.recent_limit = config.overview_recent_limit;
        dashboard.show_rejected = config.show_rejected;
        dashboard.tab = DashboardTab::from_slug(&config.default_tab);

        Self {
            dashboard,
            overlay: Overlay::None,
            should_quit: false,
            client: PortalClient::new(),
            tx,
            status_message: None,
            needs_full_redraw: true,
            config,
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Input(crossterm_event) => {
                self.handle_input(crossterm_event)?;
            }
            AppEvent::PortalLoaded(data) => {
                self.dashboard.set_data(*data);
            }
            AppEvent::StatusMessage(message) => {
                self.status_message = Some(message.clone());
                tracing::info!("Status: {}", message);
            }
            AppEvent::ReceiptProbed { expense, available } => {
                if let Overlay::Detail(detail) = &mut self.overlay {
                    if detail.record.id == expense {
                        detail.set_receipt_available(available);
                        self.status_message = Some(if available {
                            "✓ Receipt preview recovered".to_string()
                        } else {
                            "✗ Receipt still unavailable".to_string()
                        });
                    }
                }
            }
            AppEvent::Error(err) => {
                tracing::error!("Error: {}", err);
                self.status_message = Some(format!("✗ {}", err));
            }
            AppEvent::Quit => {
                self.should_quit = true;
            }
            AppEvent::ShowHelp => {
                self.needs_full_redraw = true;
                self.overlay = Overlay::Help(HelpState::new());
            }
        }

        Ok(())
    }

    fn handle_input(&mut self, event: CrosstermEvent) -> Result<()> {
        if let CrosstermEvent::Key(key_event) = event {
            // Overlays take the keyboard before global action mapping
            match &mut self.overlay {
                Overlay::Wizard(wizard) => {
                    if key_event.code == KeyCode::Esc {
                        self.close_overlay();
                        return Ok(());
                    }
                    if let Some(WizardEffect::Submitted(draft)) = wizard.handle_key(key_event) {
                        self.close_overlay();
                        let client = self.client.clone();
                        let tx = self.tx.clone();
                        tokio::spawn(async move {
                            match client.submit_request(&draft).await {
                                Ok(message) => {
                                    tx.send(AppEvent::StatusMessage(format!("✓ {}", message)))
                                        .await
                                        .ok();
                                }
                                Err(e) => {
                                    tx.send(AppEvent::Error(e)).await.ok();
                                }
                            }
                        });
                    }
                    return Ok(());
                }
                Overlay::ExpenseForm(form) => {
                    if key_event.code == KeyCode::Esc {
                        self.close_overlay();
                        return Ok(());
                    }
                    if let Some(draft) = form.handle_key(key_event) {
                        self.close_overlay();
                        let client = self.client.clone();
                        let tx = self.tx.clone();
                        tokio::spawn(async move {
                            match client.submit_expense(&draft).await {
                                Ok(message) => {
                                    tx.send(AppEvent::StatusMessage(format!("✓ {}", message)))
                                        .await
                                        .ok();
                                }
                                Err(e) => {
                                    tx.send(AppEvent::Error(e)).await.ok();
                                }
                            }
                        });
                    }
                    return Ok(());
                }
                Overlay::Detail(_) => {
                    self.handle_detail_key(key_event);
                    return Ok(());
                }
                Overlay::Help(_) => {
                    if matches!(
                        key_event.code,
                        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                    ) {
                        self.close_overlay();
                    }
                    return Ok(());
                }
                Overlay::None => {}
            }

            let action = key_event_to_action(key_event);

            match action {
                Action::Quit => {
                    self.should_quit = true;
                }
                Action::GoBack => {
                    // Esc with nothing open quits, matching q
                    self.should_quit = true;
                }
                Action::ShowHelp => {
                    self.needs_full_redraw = true;
                    self.overlay = Overlay::Help(HelpState::new());
                }
                Action::NewRequest => {
                    self.status_message = None;
                    self.needs_full_redraw = true;
                    self.overlay = Overlay::Wizard(RequestWizard::new(default_catalog()));
                }
                Action::NewExpense => {
                    self.status_message = None;
                    self.needs_full_redraw = true;
                    self.overlay = Overlay::ExpenseForm(ExpenseForm::new());
                }
                Action::Refresh => {
                    self.reload_portal();
                }
                _ => {
                    if let Some(record) = self.dashboard.handle_action(action) {
                        self.open_detail(record);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_detail_key(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Esc {
            self.close_overlay();
            return;
        }

        let detail_action = match (&self.overlay, key_event.code) {
            (Overlay::Detail(detail), KeyCode::Char(c)) => detail.handle_key(c),
            _ => DetailAction::None,
        };

        match detail_action {
            DetailAction::Edit(id) => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    match client.edit_expense(&id).await {
                        Ok(message) => {
                            tx.send(AppEvent::StatusMessage(format!("✓ {}", message)))
                                .await
                                .ok();
                        }
                        Err(e) => {
                            tx.send(AppEvent::Error(e)).await.ok();
                        }
                    }
                });
            }
            DetailAction::Delete(id) => {
                // Drop the record locally so the table reflects the delete
                self.dashboard.data.expenses.retain(|e| e.id != id);
                self.dashboard.smart_select();
                self.close_overlay();

                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    match client.delete_expense(&id).await {
                        Ok(message) => {
                            tx.send(AppEvent::StatusMessage(format!("✓ {}", message)))
                                .await
                                .ok();
                        }
                        Err(e) => {
                            tx.send(AppEvent::Error(e)).await.ok();
                        }
                    }
                });
            }
            DetailAction::DownloadReceipt(_) => {
                if let Overlay::Detail(detail) = &self.overlay {
                    if let Some(receipt) = detail.record.receipt.clone() {
                        let client = self.client.clone();
                        let tx = self.tx.clone();
                        tokio::spawn(async move {
                            match client.download_receipt(&receipt).await {
                                Ok(message) => {
                                    tx.send(AppEvent::StatusMessage(format!("✓ {}", message)))
                                        .await
                                        .ok();
                                }
                                Err(e) => {
                                    tx.send(AppEvent::Error(e)).await.ok();
                                }
                            }
                        });
                    }
                }
            }
            DetailAction::RetryReceipt(id) => {
                if let Overlay::Detail(detail) = &self.overlay {
                    if let Some(receipt) = detail.record.receipt.clone() {
                        let client = self.client.clone();
                        let tx = self.tx.clone();
                        tokio::spawn(async move {
                            match client.probe_receipt(&receipt).await {
                                Ok(available) => {
                                    tx.send(AppEvent::ReceiptProbed {
                                        expense: id,
                                        available,
                                    })
                                    .await
                                    .ok();
                                }
                                Err(e) => {
                                    tx.send(AppEvent::Error(e)).await.ok();
                                }
                            }
                        });
                    }
                }
            }
            DetailAction::None => {}
        }
    }

    /// Raise the detail overlay for one expense; the record rides in with
    /// the overlay so it can never render without its subject
    fn open_detail(&mut self, record: crate::portal::ExpenseRecord) {
        self.status_message = None;
        self.needs_full_redraw = true;
        self.overlay = Overlay::Detail(Box::new(DetailState::new(
            record,
            ExpenseActions::all(),
            self.config.currency_symbol.clone(),
        )));
    }

    fn close_overlay(&mut self) {
        self.needs_full_redraw = true;
        self.overlay = Overlay::None;
    }

    /// Kick off a portal reload in the background
    pub fn reload_portal(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.load_portal().await {
                Ok(data) => {
                    tx.send(AppEvent::PortalLoaded(Box::new(data))).await.ok();
                }
                Err(e) => {
                    tx.send(AppEvent::Error(e)).await.ok();
                }
            }
        });
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Reserve space for status message if present
        let (content_area, status_area) = if self.status_message.is_some() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(4), // Status bar height: 1 top border + 2 content lines + 1 bottom border
                ])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        // Dashboard footer only shows when the status bar is absent
        let show_dashboard_footer = status_area.is_none();
        self.dashboard
            .render(frame, content_area, show_dashboard_footer);

        match &mut self.overlay {
            Overlay::None => {}
            Overlay::Help(help) => {
                help.render(frame, content_area);
            }
            Overlay::Wizard(wizard) => {
                wizard.render(frame, content_area);
            }
            Overlay::ExpenseForm(form) => {
                form.render(frame, content_area);
            }
            Overlay::Detail(detail) => {
                detail.render(frame, content_area);
            }
        }

        // Render status message if present
        if let Some(status_area) = status_area {
            if let Some(message) = &self.status_message {
                use ratatui::text::{Line, Span};
                use ratatui::widgets::{Paragraph, Wrap};

                // Color based on message content
                let (color, prefix) = if message.contains("✓") {
                    (ratatui::style::Color::Green, "✓")
                } else if message.contains("✗") {
                    (ratatui::style::Color::Red, "✗")
                } else {
                    (ratatui::style::Color::Yellow, "ℹ")
                };

                let status_line = Line::from(vec![
                    Span::styled(
                        prefix,
                        Style::default()
                            .fg(color)
                            .add_modifier(ratatui::style::Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        message.trim_start_matches("✓ ").trim_start_matches("✗ "),
                        Style::default().fg(color),
                    ),
                ]);

                let status_bar = Paragraph::new(status_line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" Status ")
                            .border_style(Style::default().fg(color)),
                    )
                    .wrap(Wrap { trim: true });

                frame.render_widget(status_bar, status_area);
            }
        }
    }
}
