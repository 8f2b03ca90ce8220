// Officer request wizard overlay
//
// Thin interaction shell over portal::wizard::WizardMachine: keys map to
// reducer actions, the machine owns every draft/step decision.

use crate::portal::catalog::RequestCatalog;
use crate::portal::models::UrgencyLevel;
use crate::portal::wizard::{WizardAction, WizardEffect, WizardMachine, WizardStep};
use crate::ui::{disabled_style, enabled_style, help_style, title_style, urgency_color};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Which option group holds keyboard focus on the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusGroup {
    Challenges,
    Urgency,
    ServiceTypes,
    Experience,
    Timeframe,
    Notes,
}

#[derive(Debug)]
pub struct RequestWizard {
    pub machine: WizardMachine,
    catalog: RequestCatalog,
    focus: FocusGroup,
    cursor: usize,
}

impl RequestWizard {
    pub fn new(catalog: RequestCatalog) -> Self {
        Self {
            machine: WizardMachine::new(),
            catalog,
            focus: FocusGroup::Challenges,
            cursor: 0,
        }
    }

    fn step_groups(step: WizardStep) -> &'static [FocusGroup] {
        match step {
            WizardStep::Challenges => &[FocusGroup::Challenges, FocusGroup::Urgency],
            WizardStep::Needs => &[
                FocusGroup::ServiceTypes,
                FocusGroup::Experience,
                FocusGroup::Timeframe,
                FocusGroup::Notes,
            ],
            WizardStep::Review => &[],
        }
    }

    fn group_len(&self, group: FocusGroup) -> usize {
        match group {
            FocusGroup::Challenges => self.catalog.challenges.len(),
            FocusGroup::Urgency => UrgencyLevel::ALL.len(),
            FocusGroup::ServiceTypes => self.catalog.service_types.len(),
            FocusGroup::Experience => self.catalog.experience_levels.len(),
            FocusGroup::Timeframe => self.catalog.timeframes.len(),
            FocusGroup::Notes => 0,
        }
    }

    fn reset_focus(&mut self) {
        self.focus = Self::step_groups(self.machine.step)
            .first()
            .copied()
            .unwrap_or(FocusGroup::Challenges);
        self.cursor = 0;
    }

    fn cycle_focus(&mut self) {
        let groups = Self::step_groups(self.machine.step);
        if groups.is_empty() {
            return;
        }
        let current = groups.iter().position(|g| *g == self.focus).unwrap_or(0);
        self.focus = groups[(current + 1) % groups.len()];
        self.cursor = 0;
    }

    fn select_current(&mut self) {
        let action = match self.focus {
            FocusGroup::Challenges => self
                .catalog
                .challenges
                .get(self.cursor)
                .map(|c| WizardAction::ToggleChallenge((*c).to_string())),
            FocusGroup::Urgency => UrgencyLevel::ALL
                .get(self.cursor)
                .map(|u| WizardAction::SetUrgency(*u)),
            FocusGroup::ServiceTypes => self
                .catalog
                .service_types
                .get(self.cursor)
                .map(|s| WizardAction::ToggleServiceType((*s).to_string())),
            FocusGroup::Experience => self
                .catalog
                .experience_levels
                .get(self.cursor)
                .map(|e| WizardAction::ToggleExperience((*e).to_string())),
            FocusGroup::Timeframe => self
                .catalog
                .timeframes
                .get(self.cursor)
                .map(|t| WizardAction::SetTimeframe((*t).to_string())),
            FocusGroup::Notes => None,
        };

        if let Some(action) = action {
            self.machine.apply(action);
        }
    }

    /// Handle a key while the wizard overlay is raised. Esc/cancel is
    /// handled by the caller; everything else lands here.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<WizardEffect> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
                let before = self.machine.step;
                self.machine.apply(WizardAction::NextStep);
                if self.machine.step != before {
                    self.reset_focus();
                }
                None
            }
            (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
                let before = self.machine.step;
                self.machine.apply(WizardAction::PrevStep);
                if self.machine.step != before {
                    self.reset_focus();
                }
                None
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                let effect = self.machine.apply(WizardAction::Submit);
                if effect.is_some() {
                    self.reset_focus();
                }
                effect
            }
            // Review has no option groups; anything below would fall back to
            // step-1 focus and mutate a draft the guards already admitted
            _ if self.machine.step == WizardStep::Review => None,
            (KeyCode::Tab, _) => {
                self.cycle_focus();
                None
            }
            (KeyCode::Up, _) => {
                if self.focus != FocusGroup::Notes {
                    self.cursor = self.cursor.saturating_sub(1);
                }
                None
            }
            (KeyCode::Down, _) => {
                let len = self.group_len(self.focus);
                if self.focus != FocusGroup::Notes && len > 0 && self.cursor < len - 1 {
                    self.cursor += 1;
                }
                None
            }
            (KeyCode::Enter, _) => {
                if self.focus == FocusGroup::Notes {
                    self.cycle_focus();
                } else {
                    self.select_current();
                }
                None
            }
            (KeyCode::Backspace, _) => {
                if self.focus == FocusGroup::Notes {
                    self.machine.apply(WizardAction::NotesBackspace);
                }
                None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if self.focus == FocusGroup::Notes {
                    self.machine.apply(WizardAction::NotesChar(c));
                } else if c == ' ' {
                    self.select_current();
                }
                None
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let panel_width = 76.min(area.width.saturating_sub(4));
        let panel_height = 26.min(area.height.saturating_sub(2));
        let panel_area = Rect {
            x: area.x + (area.width.saturating_sub(panel_width)) / 2,
            y: area.y + (area.height.saturating_sub(panel_height)) / 2,
            width: panel_width,
            height: panel_height,
        };

        frame.render_widget(Clear, panel_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Request a Finance Officer ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Step header
                Constraint::Min(0),    // Step content
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        self.render_step_header(frame, chunks[0]);
        match self.machine.step {
            WizardStep::Challenges => self.render_challenges_step(frame, chunks[1]),
            WizardStep::Needs => self.render_needs_step(frame, chunks[1]),
            WizardStep::Review => self.render_review_step(frame, chunks[1]),
        }
        self.render_footer(frame, chunks[2]);
    }

    fn render_step_header(&self, frame: &mut Frame, area: Rect) {
        let step = self.machine.step;
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Step {} of {}: {}", step.index(), WizardStep::TOTAL, step.title()),
                title_style(),
            )),
            Line::from(Span::styled(
                "─".repeat(area.width as usize),
                help_style(),
            )),
        ]);
        frame.render_widget(header, area);
    }

    fn render_challenges_step(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let challenge_lines: Vec<Line> = self
            .catalog
            .challenges
            .iter()
            .enumerate()
            .map(|(i, challenge)| {
                let selected = self
                    .machine
                    .draft
                    .selected_challenges
                    .iter()
                    .any(|c| c == challenge);
                self.option_line(
                    FocusGroup::Challenges,
                    i,
                    if selected { "[x]" } else { "[ ]" },
                    challenge,
                    Style::default().fg(Color::White),
                )
            })
            .collect();

        let challenges = Paragraph::new(challenge_lines).block(
            self.group_block(" What challenges are you facing? ", FocusGroup::Challenges),
        );
        frame.render_widget(challenges, columns[0]);

        let urgency_lines: Vec<Line> = UrgencyLevel::ALL
            .iter()
            .enumerate()
            .map(|(i, level)| {
                let selected = self.machine.draft.urgency == Some(*level);
                self.option_line(
                    FocusGroup::Urgency,
                    i,
                    if selected { "(•)" } else { "( )" },
                    level.label(),
                    Style::default().fg(urgency_color(*level)),
                )
            })
            .collect();

        let urgency = Paragraph::new(urgency_lines)
            .block(self.group_block(" How urgent is this? ", FocusGroup::Urgency));
        frame.render_widget(urgency, columns[1]);
    }

    fn render_needs_step(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let service_lines: Vec<Line> = self
            .catalog
            .service_types
            .iter()
            .enumerate()
            .map(|(i, service)| {
                let selected = self
                    .machine
                    .draft
                    .selected_service_types
                    .iter()
                    .any(|s| s == service);
                self.option_line(
                    FocusGroup::ServiceTypes,
                    i,
                    if selected { "[x]" } else { "[ ]" },
                    service,
                    Style::default().fg(Color::White),
                )
            })
            .collect();
        frame.render_widget(
            Paragraph::new(service_lines)
                .block(self.group_block(" Services needed ", FocusGroup::ServiceTypes)),
            left[0],
        );

        let experience_lines: Vec<Line> = self
            .catalog
            .experience_levels
            .iter()
            .enumerate()
            .map(|(i, exp)| {
                let selected = self
                    .machine
                    .draft
                    .selected_experience
                    .iter()
                    .any(|e| e == exp);
                self.option_line(
                    FocusGroup::Experience,
                    i,
                    if selected { "[x]" } else { "[ ]" },
                    exp,
                    Style::default().fg(Color::White),
                )
            })
            .collect();
        frame.render_widget(
            Paragraph::new(experience_lines)
                .block(self.group_block(" Experience wanted ", FocusGroup::Experience)),
            right[0],
        );

        let timeframe_lines: Vec<Line> = self
            .catalog
            .timeframes
            .iter()
            .enumerate()
            .map(|(i, timeframe)| {
                let selected = self.machine.draft.timeframe.as_deref() == Some(*timeframe);
                self.option_line(
                    FocusGroup::Timeframe,
                    i,
                    if selected { "(•)" } else { "( )" },
                    timeframe,
                    Style::default().fg(Color::White),
                )
            })
            .collect();
        frame.render_widget(
            Paragraph::new(timeframe_lines)
                .block(self.group_block(" Engagement timeframe ", FocusGroup::Timeframe)),
            left[1],
        );

        let notes_focused = self.focus == FocusGroup::Notes;
        let mut notes_spans = vec![Span::styled(
            self.machine.draft.notes.clone(),
            Style::default().fg(Color::White),
        )];
        if notes_focused {
            notes_spans.push(Span::styled("█", Style::default().fg(Color::Green)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(notes_spans))
                .block(self.group_block(" Notes (optional) ", FocusGroup::Notes))
                .wrap(Wrap { trim: false }),
            right[1],
        );
    }

    fn render_review_step(&self, frame: &mut Frame, area: Rect) {
        let draft = &self.machine.draft;
        let mut lines = vec![
            review_line("Challenges:  ", draft.selected_challenges.join(", ")),
            review_line(
                "Urgency:     ",
                draft
                    .urgency
                    .map(|u| u.label().to_string())
                    .unwrap_or_else(|| "(not set)".to_string()),
            ),
            review_line("Services:    ", draft.selected_service_types.join(", ")),
        ];
        if !draft.selected_experience.is_empty() {
            lines.push(review_line("Experience:  ", draft.selected_experience.join(", ")));
        }
        if let Some(timeframe) = &draft.timeframe {
            lines.push(review_line("Timeframe:   ", timeframe.clone()));
        }
        if !draft.notes.is_empty() {
            lines.push(review_line("Notes:       ", draft.notes.clone()));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Submitting sends this request to the matching team.",
            help_style(),
        )));

        let review = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Review "))
            .wrap(Wrap { trim: false });
        frame.render_widget(review, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let step = self.machine.step;
        let valid = self.machine.step_valid();

        let mut spans = vec![];
        if step != WizardStep::Review {
            // Validation failure surfaces only as the dimmed Next control
            let next_style = if valid { enabled_style() } else { disabled_style() };
            spans.push(Span::styled("[Ctrl+N] Next", next_style));
            spans.push(Span::styled(" | ", help_style()));
        } else {
            spans.push(Span::styled("[Ctrl+S] Submit", enabled_style()));
            spans.push(Span::styled(" | ", help_style()));
        }
        if step != WizardStep::Challenges {
            spans.push(Span::styled("[Ctrl+P] Previous | ", help_style()));
        }
        if step != WizardStep::Review {
            spans.push(Span::styled("[Tab] Group | [Space] Toggle | ", help_style()));
        }
        spans.push(Span::styled("[Esc] Cancel", help_style()));

        let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }

    fn option_line(
        &self,
        group: FocusGroup,
        index: usize,
        marker: &str,
        label: &str,
        label_style: Style,
    ) -> Line<'static> {
        let is_cursor = self.focus == group && self.cursor == index;
        let cursor = if is_cursor { "▶ " } else { "  " };
        Line::from(vec![
            Span::styled(cursor.to_string(), Style::default().fg(Color::Green)),
            Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
            Span::styled(
                label.to_string(),
                if is_cursor {
                    label_style.add_modifier(Modifier::BOLD)
                } else {
                    label_style
                },
            ),
        ])
    }

    fn group_block(&self, title: &'static str, group: FocusGroup) -> Block<'static> {
        let focused = self.focus == group;
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            })
    }
}

fn review_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
