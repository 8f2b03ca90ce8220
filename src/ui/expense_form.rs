// Expense entry form overlay

use crate::portal::categories::{category_label, category_slugs};
use crate::portal::models::ExpenseDraft;
use crate::ui::{disabled_style, enabled_style, help_style};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Amount,
    Category,
    Description,
    Date,
    Receipt,
}

#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub date_text: String,
    pub receipt_path: String,
    /// Index into the slug vocabulary; None until the user picks one
    pub category_selected: Option<usize>,

    categories: Vec<&'static str>,
    current_field: FormField,
    /// Date the form was (re)opened; the draft falls back to it when the
    /// date text does not parse
    opened_on: NaiveDate,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseForm {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            amount: String::new(),
            description: String::new(),
            date_text: today.format("%Y-%m-%d").to_string(),
            receipt_path: String::new(),
            category_selected: None,
            categories: category_slugs(),
            current_field: FormField::Amount,
            opened_on: today,
        }
    }

    /// Presence checks only: amount, category, and description must all be
    /// non-empty for submit to be enabled
    pub fn can_submit(&self) -> bool {
        !self.amount.trim().is_empty()
            && self.category_selected.is_some()
            && !self.description.trim().is_empty()
    }

    pub fn selected_category(&self) -> Option<&'static str> {
        self.category_selected.and_then(|i| self.categories.get(i).copied())
    }

    /// Build the draft handed to the portal client
    pub fn draft(&self) -> ExpenseDraft {
        let date = NaiveDate::parse_from_str(self.date_text.trim(), "%Y-%m-%d")
            .unwrap_or(self.opened_on);
        let receipt = self.receipt_path.trim();
        ExpenseDraft {
            amount: self.amount.trim().to_string(),
            category: self.selected_category().map(|s| s.to_string()),
            description: self.description.trim().to_string(),
            date,
            receipt_path: if receipt.is_empty() {
                None
            } else {
                Some(receipt.to_string())
            },
        }
    }

    /// Handle a key while the form overlay is raised. Returns the draft
    /// when a valid submit happens; Esc/cancel is handled by the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ExpenseDraft> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                if self.can_submit() {
                    return Some(self.draft());
                }
                None
            }
            (KeyCode::Tab, _) | (KeyCode::Enter, _) => {
                self.next_field();
                None
            }
            (KeyCode::Up, _) => {
                if self.current_field == FormField::Category {
                    self.category_selected = match self.category_selected {
                        None => Some(0),
                        Some(i) => Some(i.saturating_sub(1)),
                    };
                } else {
                    self.prev_field();
                }
                None
            }
            (KeyCode::Down, _) => {
                if self.current_field == FormField::Category {
                    self.category_selected = match self.category_selected {
                        None => Some(0),
                        Some(i) => Some((i + 1).min(self.categories.len() - 1)),
                    };
                } else {
                    self.next_field();
                }
                None
            }
            (KeyCode::Backspace, _) => {
                self.delete_char();
                None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if !c.is_control() {
                    self.insert_char(c);
                }
                None
            }
            _ => None,
        }
    }

    fn insert_char(&mut self, c: char) {
        match self.current_field {
            FormField::Amount => self.amount.push(c),
            FormField::Category => {} // Picked with up/down arrows
            FormField::Description => self.description.push(c),
            FormField::Date => self.date_text.push(c),
            FormField::Receipt => self.receipt_path.push(c),
        }
    }

    fn delete_char(&mut self) {
        match self.current_field {
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Category => {}
            FormField::Description => {
                self.description.pop();
            }
            FormField::Date => {
                self.date_text.pop();
            }
            FormField::Receipt => {
                self.receipt_path.pop();
            }
        }
    }

    fn next_field(&mut self) {
        self.current_field = match self.current_field {
            FormField::Amount => FormField::Category,
            FormField::Category => FormField::Description,
            FormField::Description => FormField::Date,
            FormField::Date => FormField::Receipt,
            FormField::Receipt => FormField::Amount, // Loop back
        };
    }

    fn prev_field(&mut self) {
        self.current_field = match self.current_field {
            FormField::Amount => FormField::Receipt,
            FormField::Category => FormField::Amount,
            FormField::Description => FormField::Category,
            FormField::Date => FormField::Description,
            FormField::Receipt => FormField::Date,
        };
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let panel_width = 60.min(area.width.saturating_sub(4));
        let panel_height = 20.min(area.height.saturating_sub(2));
        let panel_area = Rect {
            x: area.x + (area.width.saturating_sub(panel_width)) / 2,
            y: area.y + (area.height.saturating_sub(panel_height)) / 2,
            width: panel_width,
            height: panel_height,
        };

        frame.render_widget(Clear, panel_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Form fields
                Constraint::Length(3), // Footer
            ])
            .split(panel_area);

        let title = Paragraph::new("🧾 New Expense")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        self.render_form(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![];

        lines.push(self.field_label("Amount", FormField::Amount));
        lines.push(self.field_value(&self.amount, FormField::Amount, "450.00"));
        lines.push(Line::from(""));

        lines.push(self.field_label("Category", FormField::Category));
        let category_line = match self.selected_category() {
            Some(slug) if self.current_field == FormField::Category => Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("< {} >", category_label(slug)),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" (use ↑↓ to change)", help_style()),
            ]),
            Some(slug) => Line::from(vec![
                Span::raw("  "),
                Span::styled(category_label(slug).to_string(), Style::default().fg(Color::White)),
            ]),
            None if self.current_field == FormField::Category => Line::from(vec![
                Span::raw("  "),
                Span::styled("< pick with ↑↓ >", Style::default().fg(Color::Yellow)),
            ]),
            None => Line::from(vec![
                Span::raw("  "),
                Span::styled("(none)", help_style()),
            ]),
        };
        lines.push(category_line);
        lines.push(Line::from(""));

        lines.push(self.field_label("Description", FormField::Description));
        lines.push(self.field_value(&self.description, FormField::Description, "Printer paper"));
        lines.push(Line::from(""));

        lines.push(self.field_label("Date", FormField::Date));
        lines.push(self.field_value(&self.date_text, FormField::Date, "2026-08-25"));
        lines.push(Line::from(""));

        lines.push(self.field_label("Receipt path (optional)", FormField::Receipt));
        lines.push(self.field_value(&self.receipt_path, FormField::Receipt, "~/receipts/scan.pdf"));

        let form = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Expense "))
            .wrap(Wrap { trim: false });
        frame.render_widget(form, area);
    }

    fn field_label(&self, label: &'static str, field: FormField) -> Line<'static> {
        let is_current = self.current_field == field;
        let style = if is_current {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        Line::from(vec![
            if is_current {
                Span::styled("▶ ", Style::default().fg(Color::Green))
            } else {
                Span::raw("  ")
            },
            Span::styled(label, style),
        ])
    }

    fn field_value(&self, value: &str, field: FormField, placeholder: &str) -> Line<'static> {
        let is_current = self.current_field == field;

        if value.is_empty() {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ),
                if is_current {
                    Span::styled("█", Style::default().fg(Color::Green))
                } else {
                    Span::raw("")
                },
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    value.to_string(),
                    if is_current {
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
                if is_current {
                    Span::styled("█", Style::default().fg(Color::Green))
                } else {
                    Span::raw("")
                },
            ])
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        // Submit stays dimmed until amount, category, and description are set
        let submit_style = if self.can_submit() {
            enabled_style()
        } else {
            disabled_style()
        };

        let help_text = Line::from(vec![
            Span::styled("[Tab/Enter]", Style::default().fg(Color::Cyan)),
            Span::raw(" Next field | "),
            Span::styled("[Ctrl+S]", submit_style),
            Span::raw(" Submit | "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]);

        let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}
