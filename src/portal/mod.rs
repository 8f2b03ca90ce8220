// Portal domain layer - data models, vocabularies, fixtures, backend client

pub mod catalog;
pub mod categories;
pub mod client;
pub mod fixtures;
pub mod models;
pub mod wizard;

pub use catalog::{default_catalog, RequestCatalog};
pub use client::PortalClient;
pub use models::{
    DocumentRecord, ExpenseDraft, ExpenseRecord, ExpenseStatus, FinancialReport, MessageThread,
    PortalData, ReceiptRef, RequestDraft, TransactionDirection, TransactionRecord, UrgencyLevel,
};
pub use wizard::{WizardAction, WizardEffect, WizardMachine, WizardStep};
