// Dashboard view - tabbed operations overview

use crate::events::{Action, FilterAction};
use crate::portal::models::{
    format_amount, format_size, ExpenseRecord, PortalData, TransactionDirection,
};
use crate::ui::{
    category_color, direction_color, direction_sign, help_style, selected_style, status_color,
    status_icon, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame,
};

/// Fixed set of dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Documents,
    Transactions,
    Expenses,
    Messages,
    Reports,
    Matching,
    Payroll,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 8] = [
        DashboardTab::Overview,
        DashboardTab::Documents,
        DashboardTab::Transactions,
        DashboardTab::Expenses,
        DashboardTab::Messages,
        DashboardTab::Reports,
        DashboardTab::Matching,
        DashboardTab::Payroll,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Documents => "Documents",
            DashboardTab::Transactions => "Transactions",
            DashboardTab::Expenses => "Expenses",
            DashboardTab::Messages => "Messages",
            DashboardTab::Reports => "Reports",
            DashboardTab::Matching => "Matching",
            DashboardTab::Payroll => "Payroll",
        }
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_position(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a config tab slug; unknown slugs land on Overview
    pub fn from_slug(slug: &str) -> Self {
        match slug.to_ascii_lowercase().as_str() {
            "documents" => DashboardTab::Documents,
            "transactions" => DashboardTab::Transactions,
            "expenses" => DashboardTab::Expenses,
            "messages" => DashboardTab::Messages,
            "reports" => DashboardTab::Reports,
            "matching" => DashboardTab::Matching,
            "payroll" => DashboardTab::Payroll,
            _ => DashboardTab::Overview,
        }
    }

    pub fn next(&self) -> Self {
        let idx = (self.position() + 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    pub fn prev(&self) -> Self {
        let idx = (self.position() + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL[idx]
    }
}

/// Expense list filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterType {
    All,
    Pending,
    Approved,
    Rejected,
}

impl FilterType {
    pub fn label(&self) -> &'static str {
        match self {
            FilterType::All => "All",
            FilterType::Pending => "Pending",
            FilterType::Approved => "Approved",
            FilterType::Rejected => "Rejected",
        }
    }
}

#[derive(Debug)]
pub struct DashboardState {
    pub data: PortalData,
    pub tab: DashboardTab,
    pub filter: FilterType,
    pub table_state: TableState,
    pub currency: String,
    pub recent_limit: usize,
    /// When false, rejected expenses are hidden from the All listing and
    /// only show under the explicit Rejected filter
    pub show_rejected: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            data: PortalData::default(),
            tab: DashboardTab::Overview,
            filter: FilterType::All,
            table_state,
            currency: "$".to_string(),
            recent_limit: 5,
            show_rejected: true,
        }
    }

    pub fn set_data(&mut self, data: PortalData) {
        self.data = data;
        self.smart_select();
    }

    /// Keep the current expense selection when still valid, otherwise fall
    /// back to the first row
    pub fn smart_select(&mut self) {
        let len = self.filtered_expenses().len();
        if len == 0 {
            self.table_state.select(Some(0));
            return;
        }
        match self.table_state.selected() {
            Some(idx) if idx < len => {}
            _ => self.table_state.select(Some(0)),
        }
    }

    /// Handle an action; Select on the expenses tab yields the record to
    /// open in the detail overlay
    pub fn handle_action(&mut self, action: Action) -> Option<ExpenseRecord> {
        match action {
            Action::NextTab => {
                self.tab = self.tab.next();
                None
            }
            Action::PrevTab => {
                self.tab = self.tab.prev();
                None
            }
            Action::GotoTab(index) => {
                if let Some(tab) = DashboardTab::from_position(index) {
                    self.tab = tab;
                }
                None
            }
            Action::MoveUp => {
                self.move_selection(-1);
                None
            }
            Action::MoveDown => {
                self.move_selection(1);
                None
            }
            Action::MoveTop => {
                self.table_state.select(Some(0));
                None
            }
            Action::MoveBottom => {
                let len = self.filtered_expenses().len();
                if len > 0 {
                    self.table_state.select(Some(len - 1));
                }
                None
            }
            Action::ToggleFilter(filter_action) => {
                if self.tab == DashboardTab::Expenses {
                    self.filter = match filter_action {
                        FilterAction::All => FilterType::All,
                        FilterAction::Pending => FilterType::Pending,
                        FilterAction::Approved => FilterType::Approved,
                        FilterAction::Rejected => FilterType::Rejected,
                    };
                    self.smart_select();
                }
                None
            }
            Action::Select => {
                if self.tab == DashboardTab::Expenses {
                    self.selected_expense().cloned()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.filtered_expenses().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let new_index = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            (current + delta as usize).min(len - 1)
        };
        self.table_state.select(Some(new_index));
    }

    pub fn filtered_expenses(&self) -> Vec<&ExpenseRecord> {
        self.data
            .expenses
            .iter()
            .filter(|e| match self.filter {
                FilterType::All => self.show_rejected || !e.is_rejected(),
                FilterType::Pending => e.is_pending(),
                FilterType::Approved => e.is_approved(),
                FilterType::Rejected => e.is_rejected(),
            })
            .collect()
    }

    pub fn selected_expense(&self) -> Option<&ExpenseRecord> {
        let filtered = self.filtered_expenses();
        self.table_state
            .selected()
            .and_then(|i| filtered.get(i).copied())
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, show_footer: bool) {
        let constraints = if show_footer {
            vec![
                Constraint::Length(3), // Header
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Tab content
                Constraint::Length(1), // Help footer
            ]
        } else {
            vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ]
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_tab_bar(frame, chunks[1]);
        self.render_content(frame, chunks[2]);

        if show_footer {
            self.render_help(frame, chunks[3]);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        use crate::version;

        let build = version::build_info();
        let version_text = format!("v{}  ", build.version);

        let company = if self.data.company_name.is_empty() {
            "Fincrew".to_string()
        } else {
            self.data.company_name.clone()
        };
        let title = format!("💼 {} - Finance Portal", company);

        let title_para = Paragraph::new(title)
            .style(title_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title_para, area);

        // Version in the top-right corner, inside the border
        let version_x = area.x + area.width.saturating_sub(version_text.len() as u16 + 2);
        let version_area = Rect {
            x: version_x,
            y: area.y + 1,
            width: version_text.len() as u16,
            height: 1,
        };
        let version_para = Paragraph::new(version_text).style(help_style());
        frame.render_widget(version_para, version_area);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = DashboardTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), help_style()),
                    Span::raw(tab.label()),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.tab.position())
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");

        frame.render_widget(tabs, area);
    }

    /// Total content lookup over the tab enum; tabs without dedicated
    /// content fall through to the coming-soon branch
    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.tab {
            DashboardTab::Overview => self.render_overview(frame, area),
            DashboardTab::Documents => self.render_documents(frame, area),
            DashboardTab::Transactions => self.render_transactions(frame, area),
            DashboardTab::Expenses => self.render_expenses(frame, area),
            DashboardTab::Messages => self.render_messages(frame, area),
            DashboardTab::Reports => self.render_reports(frame, area),
            DashboardTab::Matching => self.render_matching(frame, area),
            _ => self.render_coming_soon(frame, area),
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = match self.tab {
            DashboardTab::Expenses => {
                "[Enter] Details | [e] New Expense | [a/p/v/x] Filter | [↑↓/jk] Navigate | [Tab/1-8] Tabs | [?] Help | [q] Quit"
            }
            DashboardTab::Matching => {
                "[n] New Officer Request | [Tab/1-8] Tabs | [?] Help | [q] Quit"
            }
            _ => "[Tab/←→/1-8] Switch tab | [e] New Expense | [n] New Request | [?] Help | [q] Quit",
        };
        let help = Paragraph::new(help_text)
            .style(help_style())
            .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }

    fn render_overview(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        // Headline stats
        let expenses = &self.data.expenses;
        let pending = expenses.iter().filter(|e| e.is_pending()).count();
        let approved_total: i64 = expenses
            .iter()
            .filter(|e| e.is_approved())
            .map(|e| e.amount_cents)
            .sum();
        let pending_total: i64 = expenses
            .iter()
            .filter(|e| e.is_pending())
            .map(|e| e.amount_cents)
            .sum();
        let unread = self.data.threads.iter().filter(|t| t.unread).count();

        let stats_lines = vec![
            Line::from(vec![
                Span::styled("Expenses:        ", Style::default().fg(Color::Cyan)),
                Span::raw(format!(
                    "{} total, {} pending ({})",
                    expenses.len(),
                    pending,
                    format_amount(pending_total, &self.currency)
                )),
            ]),
            Line::from(vec![
                Span::styled("Approved spend:  ", Style::default().fg(Color::Cyan)),
                Span::raw(format_amount(approved_total, &self.currency)),
            ]),
            Line::from(vec![
                Span::styled("Unread messages: ", Style::default().fg(Color::Cyan)),
                Span::raw(unread.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Documents:       ", Style::default().fg(Color::Cyan)),
                Span::raw(self.data.documents.len().to_string()),
            ]),
        ];

        let stats = Paragraph::new(stats_lines)
            .block(Block::default().borders(Borders::ALL).title(" At a Glance "))
            .wrap(Wrap { trim: false });
        frame.render_widget(stats, chunks[0]);

        // Recent transactions
        let mut lines = vec![];
        for txn in self.data.transactions.iter().take(self.recent_limit) {
            lines.push(Line::from(vec![
                Span::styled(txn.date.format("%b %d").to_string(), help_style()),
                Span::raw("  "),
                Span::styled(
                    format!(
                        "{}{}",
                        direction_sign(txn.direction),
                        format_amount(txn.amount_cents, &self.currency)
                    ),
                    Style::default().fg(direction_color(txn.direction)),
                ),
                Span::raw("  "),
                Span::raw(txn.description.clone()),
            ]));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled("No transactions yet", help_style())));
        }

        let recent = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Recent Transactions "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(recent, chunks[1]);
    }

    fn render_documents(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .data
            .documents
            .iter()
            .map(|doc| {
                Row::new(vec![
                    Cell::from(format!("📄 {}", doc.name)),
                    Cell::from(doc.kind.clone()),
                    Cell::from(doc.uploaded.format("%Y-%m-%d").to_string()),
                    Cell::from(format_size(doc.size_bytes)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(45),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(vec!["Document", "Kind", "Uploaded", "Size"]))
            .block(Block::default().title(" Documents ").borders(Borders::ALL));

        frame.render_widget(table, area);
    }

    fn render_transactions(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .data
            .transactions
            .iter()
            .map(|txn| {
                Row::new(vec![
                    Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                    Cell::from(txn.description.clone()),
                    Cell::from(txn.counterparty.clone()),
                    Cell::from(format!(
                        "{}{}",
                        direction_sign(txn.direction),
                        format_amount(txn.amount_cents, &self.currency)
                    ))
                    .style(Style::default().fg(direction_color(txn.direction))),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(14),
            Constraint::Percentage(38),
            Constraint::Percentage(28),
            Constraint::Percentage(20),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(vec!["Date", "Description", "Counterparty", "Amount"]))
            .block(
                Block::default()
                    .title(" Transactions ")
                    .borders(Borders::ALL),
            );

        frame.render_widget(table, area);
    }

    fn render_expenses(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let filtered = self.filtered_expenses();

        let filter_line = Paragraph::new(format!(
            "Filter: {} | Showing: {} of {}",
            self.filter.label(),
            filtered.len(),
            self.data.expenses.len()
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        frame.render_widget(filter_line, chunks[0]);

        let currency = self.currency.clone();
        let rows: Vec<Row> = filtered
            .iter()
            .map(|expense| {
                let icon = status_icon(expense.status);
                Row::new(vec![
                    Cell::from(format!("{} {}", icon, expense.title)),
                    Cell::from(format_amount(expense.amount_cents, &currency)),
                    Cell::from(expense.category.clone())
                        .style(Style::default().fg(category_color(&expense.category))),
                    Cell::from(expense.date.format("%Y-%m-%d").to_string()),
                    Cell::from(expense.status.label())
                        .style(Style::default().fg(status_color(expense.status))),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(34),
            Constraint::Percentage(14),
            Constraint::Percentage(22),
            Constraint::Percentage(14),
            Constraint::Percentage(16),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(vec!["Expense", "Amount", "Category", "Date", "Status"]))
            .block(Block::default().title(" Expenses ").borders(Borders::ALL))
            .highlight_style(selected_style())
            .highlight_symbol(">> ");

        frame.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![];
        for thread in &self.data.threads {
            let marker = if thread.unread { "●" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    thread.sender.clone(),
                    if thread.unread {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
                Span::raw("  "),
                Span::styled(thread.sent.format("%b %d").to_string(), help_style()),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(thread.subject.clone(), Style::default().fg(Color::Yellow)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(thread.preview.clone(), help_style()),
            ]));
            lines.push(Line::from(""));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled("No messages", help_style())));
        }

        let messages = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Messages "))
            .wrap(Wrap { trim: false });
        frame.render_widget(messages, area);
    }

    fn render_reports(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .data
            .reports
            .iter()
            .map(|report| {
                let net_color = if report.net_cents >= 0 {
                    Color::Green
                } else {
                    Color::Red
                };
                Row::new(vec![
                    Cell::from(report.period.clone()),
                    Cell::from(format_amount(report.revenue_cents, &self.currency)),
                    Cell::from(format_amount(report.expenses_cents, &self.currency)),
                    Cell::from(format_amount(report.net_cents, &self.currency))
                        .style(Style::default().fg(net_color)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ];

        let table = Table::new(rows, widths)
            .header(header_row(vec!["Period", "Revenue", "Expenses", "Net"]))
            .block(
                Block::default()
                    .title(" Financial Reports ")
                    .borders(Borders::ALL),
            );

        frame.render_widget(table, area);
    }

    fn render_matching(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Fractional Finance Officer Matching",
                title_style(),
            )),
            Line::from(""),
            Line::from(
                "Tell us about your current challenges and we'll match you with a vetted fractional CFO or controller.",
            ),
            Line::from(""),
            Line::from(vec![
                Span::raw("A short three-step request covers "),
                Span::styled("challenges", Style::default().fg(Color::Yellow)),
                Span::raw(", "),
                Span::styled("service needs", Style::default().fg(Color::Yellow)),
                Span::raw(" and a final review."),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("[n]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" Start a new officer request"),
            ]),
        ];

        let matching = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Officer Matching "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(matching, area);
    }

    fn render_coming_soon(&self, frame: &mut Frame, area: Rect) {
        let text = format!("{} is coming soon.", self.tab.label());
        let placeholder = Paragraph::new(text)
            .style(help_style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Coming Soon "));
        frame.render_widget(placeholder, area);
    }
}

fn header_row(titles: Vec<&'static str>) -> Row<'static> {
    Row::new(titles)
        .style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1)
}
