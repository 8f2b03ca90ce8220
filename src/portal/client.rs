// Portal backend client
//
// Every method here is a delegated effect: the real implementations live in
// the host backend. The stubs log the payload they would send and answer with
// a confirmation so the UI flow can be exercised end to end.

use crate::error::{FincrewError, Result};
use crate::portal::fixtures;
use crate::portal::models::{ExpenseDraft, PortalData, ReceiptRef, RequestDraft};

#[derive(Debug, Clone, Default)]
pub struct PortalClient;

impl PortalClient {
    pub fn new() -> Self {
        Self
    }

    /// Load the full portal dataset. Backed by fixtures until a real API
    /// client is wired in.
    pub async fn load_portal(&self) -> Result<PortalData> {
        let data = fixtures::sample_portal();
        tracing::info!(
            expenses = data.expenses.len(),
            transactions = data.transactions.len(),
            documents = data.documents.len(),
            "portal data loaded"
        );
        Ok(data)
    }

    /// Submit an officer-matching request
    pub async fn submit_request(&self, draft: &RequestDraft) -> Result<String> {
        tracing::info!(
            challenges = ?draft.selected_challenges,
            urgency = ?draft.urgency,
            service_types = ?draft.selected_service_types,
            "submitting officer-matching request"
        );
        Ok("Officer-matching request submitted".to_string())
    }

    /// Submit a new expense entry
    pub async fn submit_expense(&self, draft: &ExpenseDraft) -> Result<String> {
        tracing::info!(
            amount = %draft.amount,
            category = ?draft.category,
            date = %draft.date,
            "submitting expense entry"
        );
        Ok(format!("Expense '{}' submitted for review", draft.description))
    }

    /// Request an edit session for an expense
    pub async fn edit_expense(&self, id: &str) -> Result<String> {
        tracing::info!(expense = %id, "edit requested");
        Ok(format!("Edit requested for expense {}", id))
    }

    /// Delete an expense
    pub async fn delete_expense(&self, id: &str) -> Result<String> {
        tracing::info!(expense = %id, "delete requested");
        Ok(format!("Delete requested for expense {}", id))
    }

    /// Download a receipt asset. Fails when the asset is unavailable, which
    /// the detail panel surfaces as its placeholder state.
    pub async fn download_receipt(&self, receipt: &ReceiptRef) -> Result<String> {
        if !receipt.available {
            return Err(FincrewError::ReceiptUnavailable {
                reference: receipt.reference.clone(),
            }
            .into());
        }
        tracing::info!(reference = %receipt.reference, "receipt download requested");
        Ok(format!("Receipt {} queued for download", receipt.reference))
    }

    /// Re-check whether a receipt asset can be loaded
    pub async fn probe_receipt(&self, receipt: &ReceiptRef) -> Result<bool> {
        tracing::debug!(reference = %receipt.reference, available = receipt.available, "receipt probe");
        Ok(receipt.available)
    }
}
