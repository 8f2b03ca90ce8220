// Detail overlay - read-only projection of one expense record

use crate::portal::models::ExpenseRecord;
use crate::ui::{category_color, help_style, status_color, status_icon};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Capabilities granted by the host; an absent capability hides its control
/// and makes the corresponding action a no-op
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseActions {
    pub edit: bool,
    pub delete: bool,
    pub download: bool,
}

impl ExpenseActions {
    pub fn all() -> Self {
        Self {
            edit: true,
            delete: true,
            download: true,
        }
    }
}

/// Outcomes the app forwards to the portal client
#[derive(Debug, Clone, PartialEq)]
pub enum DetailAction {
    None,
    Edit(String),
    Delete(String),
    DownloadReceipt(String),
    RetryReceipt(String),
}

#[derive(Debug, Clone)]
pub struct DetailState {
    pub record: ExpenseRecord,
    pub actions: ExpenseActions,
    /// The receipt asset failed to load; recovered locally with a placeholder
    pub receipt_broken: bool,
    pub currency: String,
}

impl DetailState {
    pub fn new(record: ExpenseRecord, actions: ExpenseActions, currency: String) -> Self {
        let receipt_broken = matches!(&record.receipt, Some(r) if !r.available);
        Self {
            record,
            actions,
            receipt_broken,
            currency,
        }
    }

    /// Map a key pressed while the overlay is raised to a detail action.
    /// Keys for capabilities the host did not grant are ignored.
    pub fn handle_key(&self, key: char) -> DetailAction {
        match key {
            'e' if self.actions.edit => DetailAction::Edit(self.record.id.clone()),
            'x' if self.actions.delete => DetailAction::Delete(self.record.id.clone()),
            'd' if self.actions.download && self.record.receipt.is_some() => {
                DetailAction::DownloadReceipt(self.record.id.clone())
            }
            'r' if self.receipt_broken => DetailAction::RetryReceipt(self.record.id.clone()),
            _ => DetailAction::None,
        }
    }

    /// Record the outcome of a receipt retry
    pub fn set_receipt_available(&mut self, available: bool) {
        self.receipt_broken = !available;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Centered panel over the dashboard
        let panel_width = 70.min(area.width.saturating_sub(4));
        let panel_height = 24.min(area.height.saturating_sub(2));
        let panel_area = Rect {
            x: area.x + (area.width.saturating_sub(panel_width)) / 2,
            y: area.y + (area.height.saturating_sub(panel_height)) / 2,
            width: panel_width,
            height: panel_height,
        };

        frame.render_widget(Clear, panel_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Expense Detail ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(8), // Fields
                Constraint::Min(3),    // Description + receipt
                Constraint::Length(1), // Help
            ])
            .split(inner);

        self.render_header(frame, chunks[0]);
        self.render_fields(frame, chunks[1]);
        self.render_body(frame, chunks[2]);
        self.render_help(frame, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let record = &self.record;
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::raw(format!("{} ", status_icon(record.status))),
                Span::styled(
                    record.title.clone(),
                    Style::default()
                        .fg(status_color(record.status))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("{} - {}", record.status.label(), record.id),
                help_style(),
            )),
        ]);
        frame.render_widget(header, area);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect) {
        use crate::portal::models::format_amount;

        let record = &self.record;
        let mut lines = vec![
            field_line(
                "Amount:      ",
                format_amount(record.amount_cents, &self.currency),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            field_line(
                "Category:    ",
                record.category.clone(),
                Style::default().fg(category_color(&record.category)),
            ),
            field_line(
                "Date:        ",
                record.date.format("%Y-%m-%d").to_string(),
                Style::default().fg(Color::White),
            ),
        ];

        if let Some(vendor) = &record.vendor {
            lines.push(field_line(
                "Vendor:      ",
                vendor.clone(),
                Style::default().fg(Color::White),
            ));
        }
        if let Some(method) = &record.payment_method {
            lines.push(field_line(
                "Paid via:    ",
                method.clone(),
                Style::default().fg(Color::White),
            ));
        }
        if let Some(submitter) = &record.submitted_by {
            lines.push(field_line(
                "Submitted by:",
                format!(" {}", submitter),
                Style::default().fg(Color::Gray),
            ));
        }
        if let Some(approver) = &record.approved_by {
            lines.push(field_line(
                "Reviewed by: ",
                approver.clone(),
                Style::default().fg(Color::Gray),
            ));
        }

        let fields = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(fields, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(4)])
            .split(area);

        let description = self
            .record
            .description
            .clone()
            .unwrap_or_else(|| "(no description)".to_string());
        let description_widget = Paragraph::new(description)
            .block(Block::default().borders(Borders::ALL).title(" Description "))
            .wrap(Wrap { trim: true });
        frame.render_widget(description_widget, chunks[0]);

        self.render_receipt(frame, chunks[1]);
    }

    fn render_receipt(&self, frame: &mut Frame, area: Rect) {
        let (lines, border_color) = match &self.record.receipt {
            None => (
                vec![Line::from(Span::styled("No receipt attached", help_style()))],
                Color::DarkGray,
            ),
            Some(_) if self.receipt_broken => (
                vec![
                    Line::from(vec![
                        Span::styled("⚠ ", Style::default().fg(Color::Yellow)),
                        Span::raw("Receipt preview unavailable"),
                    ]),
                    Line::from(vec![
                        Span::styled("[r]", Style::default().fg(Color::Cyan)),
                        Span::raw(" Retry"),
                        if self.actions.download {
                            Span::raw("  [d] Download original")
                        } else {
                            Span::raw("")
                        },
                    ]),
                ],
                Color::Yellow,
            ),
            Some(receipt) => (
                vec![Line::from(vec![
                    Span::raw("🧾 "),
                    Span::styled(receipt.reference.clone(), Style::default().fg(Color::White)),
                ])],
                Color::DarkGray,
            ),
        };

        let receipt_widget = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Receipt ")
                    .border_style(Style::default().fg(border_color)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(receipt_widget, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![];

        if self.actions.edit {
            spans.push(Span::styled("[e] Edit | ", help_style()));
        }
        if self.actions.delete {
            spans.push(Span::styled("[x] Delete | ", help_style()));
        }
        if self.actions.download && self.record.receipt.is_some() {
            spans.push(Span::styled("[d] Download receipt | ", help_style()));
        }
        spans.push(Span::styled("[Esc] Close", help_style()));

        let help = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}

fn field_line(label: &'static str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(value, style),
    ])
}
