// Officer-matching request wizard state machine
//
// Expressed as a reducer so the step/guard logic is unit-testable without a
// rendering environment: every action maps deterministically to a new draft
// and step, and submit surfaces as an effect for the caller.

use crate::portal::models::{RequestDraft, UrgencyLevel};

/// Wizard steps, linear with no branching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Challenges,
    Needs,
    Review,
}

impl WizardStep {
    pub const TOTAL: usize = 3;

    /// 1-based step index, always within [1, TOTAL]
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Challenges => 1,
            WizardStep::Needs => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Challenges => "Challenges & Urgency",
            WizardStep::Needs => "Service Needs",
            WizardStep::Review => "Review & Submit",
        }
    }

    fn next(&self) -> Self {
        match self {
            WizardStep::Challenges => WizardStep::Needs,
            WizardStep::Needs | WizardStep::Review => WizardStep::Review,
        }
    }

    fn prev(&self) -> Self {
        match self {
            WizardStep::Challenges | WizardStep::Needs => WizardStep::Challenges,
            WizardStep::Review => WizardStep::Needs,
        }
    }
}

/// Everything a user can do to the wizard
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    ToggleChallenge(String),
    SetUrgency(UrgencyLevel),
    SetTimeframe(String),
    ToggleServiceType(String),
    ToggleExperience(String),
    NotesChar(char),
    NotesBackspace,
    NextStep,
    PrevStep,
    Submit,
    Reset,
}

/// Terminal outcome handed back to the caller
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEffect {
    /// The accumulated draft; the machine has already reset itself
    Submitted(RequestDraft),
}

#[derive(Debug, Clone)]
pub struct WizardMachine {
    pub step: WizardStep,
    pub draft: RequestDraft,
}

impl Default for WizardMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardMachine {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Challenges,
            draft: RequestDraft::default(),
        }
    }

    /// Guard for advancing past the current step. Review is always valid;
    /// its terminal action is Submit rather than NextStep.
    pub fn step_valid(&self) -> bool {
        match self.step {
            WizardStep::Challenges => {
                !self.draft.selected_challenges.is_empty() && self.draft.urgency.is_some()
            }
            WizardStep::Needs => !self.draft.selected_service_types.is_empty(),
            WizardStep::Review => true,
        }
    }

    /// Apply one action. Guarded transitions that fail are no-ops; Submit on
    /// the review step returns the draft and resets the machine.
    pub fn apply(&mut self, action: WizardAction) -> Option<WizardEffect> {
        match action {
            WizardAction::ToggleChallenge(value) => {
                toggle(&mut self.draft.selected_challenges, value);
            }
            WizardAction::SetUrgency(level) => {
                self.draft.urgency = Some(level);
            }
            WizardAction::SetTimeframe(value) => {
                self.draft.timeframe = Some(value);
            }
            WizardAction::ToggleServiceType(value) => {
                toggle(&mut self.draft.selected_service_types, value);
            }
            WizardAction::ToggleExperience(value) => {
                toggle(&mut self.draft.selected_experience, value);
            }
            WizardAction::NotesChar(c) => {
                if !c.is_control() {
                    self.draft.notes.push(c);
                }
            }
            WizardAction::NotesBackspace => {
                self.draft.notes.pop();
            }
            WizardAction::NextStep => {
                if self.step_valid() {
                    self.step = self.step.next();
                }
            }
            WizardAction::PrevStep => {
                self.step = self.step.prev();
            }
            WizardAction::Submit => {
                if self.step == WizardStep::Review {
                    let draft = std::mem::take(&mut self.draft);
                    self.step = WizardStep::Challenges;
                    return Some(WizardEffect::Submitted(draft));
                }
            }
            WizardAction::Reset => {
                self.step = WizardStep::Challenges;
                self.draft = RequestDraft::default();
            }
        }

        None
    }
}

/// Multi-select toggle: add if absent, remove if present. Remaining items
/// keep the insertion order of their first selection.
fn toggle(list: &mut Vec<String>, value: String) {
    if let Some(pos) = list.iter().position(|v| *v == value) {
        list.remove(pos);
    } else {
        list.push(value);
    }
}
