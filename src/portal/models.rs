// Portal data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review status of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    Pending,
    Categorized,
    Approved,
    Rejected,
}

impl ExpenseStatus {
    /// Display label for the status
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Categorized => "Categorized",
            ExpenseStatus::Approved => "Approved",
            ExpenseStatus::Rejected => "Rejected",
        }
    }

    /// Parse a status from its wire/display string; unknown strings map to Pending
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "categorized" => ExpenseStatus::Categorized,
            "approved" => ExpenseStatus::Approved,
            "rejected" => ExpenseStatus::Rejected,
            _ => ExpenseStatus::Pending,
        }
    }
}

/// Reference to a stored receipt asset. `available: false` models an asset
/// that fails to load; the detail panel recovers with a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRef {
    pub reference: String,
    pub available: bool,
}

/// One expense, supplied by the portal backend. Identity is `id`; records are
/// never mutated in place, edits and deletes go through the portal client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub title: String,
    /// Amount in currency minor units (cents)
    pub amount_cents: i64,
    /// Display-form category, e.g. "Office Expenses"
    pub category: String,
    pub date: NaiveDate,
    pub status: ExpenseStatus,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub payment_method: Option<String>,
    pub receipt: Option<ReceiptRef>,
    pub submitted_by: Option<String>,
    pub approved_by: Option<String>,
}

impl ExpenseRecord {
    pub fn is_pending(&self) -> bool {
        self.status == ExpenseStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == ExpenseStatus::Approved
    }

    pub fn is_rejected(&self) -> bool {
        self.status == ExpenseStatus::Rejected
    }
}

/// Direction of a bank transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionDirection {
    Inflow,
    Outflow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub counterparty: String,
    pub amount_cents: i64,
    pub direction: TransactionDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub uploaded: NaiveDate,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageThread {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub preview: String,
    pub sent: NaiveDate,
    pub unread: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    pub id: String,
    pub period: String,
    pub revenue_cents: i64,
    pub expenses_cents: i64,
    pub net_cents: i64,
}

/// Urgency of an officer-matching request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Immediate,
    Urgent,
    Moderate,
    Flexible,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Immediate,
        UrgencyLevel::Urgent,
        UrgencyLevel::Moderate,
        UrgencyLevel::Flexible,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Immediate => "Immediate (this week)",
            UrgencyLevel::Urgent => "Urgent (within 2 weeks)",
            UrgencyLevel::Moderate => "Moderate (within a month)",
            UrgencyLevel::Flexible => "Flexible (no fixed date)",
        }
    }
}

/// Accumulated officer-matching request, built across the wizard steps and
/// handed to the portal client on submit. Never persisted by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    /// Multi-select; order is insertion order of first selection
    pub selected_challenges: Vec<String>,
    pub urgency: Option<UrgencyLevel>,
    pub timeframe: Option<String>,
    pub selected_service_types: Vec<String>,
    pub selected_experience: Vec<String>,
    pub notes: String,
}

impl RequestDraft {
    pub fn is_empty(&self) -> bool {
        self.selected_challenges.is_empty()
            && self.urgency.is_none()
            && self.timeframe.is_none()
            && self.selected_service_types.is_empty()
            && self.selected_experience.is_empty()
            && self.notes.is_empty()
    }
}

/// Transient expense-entry form draft, handed to the portal client on submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Raw amount text as typed, validated for presence only
    pub amount: String,
    /// Slug-form category, e.g. "office-expenses"
    pub category: Option<String>,
    pub description: String,
    pub date: NaiveDate,
    pub receipt_path: Option<String>,
}

/// Everything the dashboard renders, loaded in one shot from the data source
#[derive(Debug, Clone, Default)]
pub struct PortalData {
    pub company_name: String,
    pub expenses: Vec<ExpenseRecord>,
    pub transactions: Vec<TransactionRecord>,
    pub documents: Vec<DocumentRecord>,
    pub threads: Vec<MessageThread>,
    pub reports: Vec<FinancialReport>,
}

/// Format minor units as a display amount, e.g. 123456 -> "$1,234.56"
pub fn format_amount(cents: i64, symbol: &str) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let whole = abs / 100;
    let frac = abs % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}{}.{:02}", symbol, grouped, frac)
    } else {
        format!("{}{}.{:02}", symbol, grouped, frac)
    }
}

/// Format a byte count for the documents table
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
