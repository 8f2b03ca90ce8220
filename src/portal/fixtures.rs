// Sample portal datasets
//
// Stands in for the real backend: the dashboard never embeds these literals
// itself, it renders whatever PortalData it is handed.

use crate::portal::models::{
    DocumentRecord, ExpenseRecord, ExpenseStatus, FinancialReport, MessageThread, PortalData,
    ReceiptRef, TransactionDirection, TransactionRecord,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn sample_portal() -> PortalData {
    PortalData {
        company_name: "Meridian Coffee Roasters".to_string(),
        expenses: sample_expenses(),
        transactions: sample_transactions(),
        documents: sample_documents(),
        threads: sample_threads(),
        reports: sample_reports(),
    }
}

pub fn sample_expenses() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord {
            id: "exp-1001".to_string(),
            title: "Quarterly accounting software".to_string(),
            amount_cents: 45000,
            category: "Software & Subscriptions".to_string(),
            date: date(2026, 7, 28),
            status: ExpenseStatus::Approved,
            description: Some("Annual plan, billed quarterly".to_string()),
            vendor: Some("LedgerWorks".to_string()),
            payment_method: Some("Company card".to_string()),
            receipt: Some(ReceiptRef {
                reference: "receipts/2026/07/ledgerworks-q3.pdf".to_string(),
                available: true,
            }),
            submitted_by: Some("Dana Ruiz".to_string()),
            approved_by: Some("Sam Okafor".to_string()),
        },
        ExpenseRecord {
            id: "exp-1002".to_string(),
            title: "Printer paper and toner".to_string(),
            amount_cents: 8735,
            category: "Office Expenses".to_string(),
            date: date(2026, 8, 2),
            status: ExpenseStatus::Pending,
            description: Some("Restock for the front office".to_string()),
            vendor: Some("OfficeDepot".to_string()),
            payment_method: Some("Company card".to_string()),
            receipt: Some(ReceiptRef {
                reference: "receipts/2026/08/officedepot-0802.jpg".to_string(),
                available: false,
            }),
            submitted_by: Some("Priya Shah".to_string()),
            approved_by: None,
        },
        ExpenseRecord {
            id: "exp-1003".to_string(),
            title: "Client lunch, Hartwell account".to_string(),
            amount_cents: 12650,
            category: "Meals & Entertainment".to_string(),
            date: date(2026, 8, 5),
            status: ExpenseStatus::Categorized,
            description: None,
            vendor: Some("Blue Door Bistro".to_string()),
            payment_method: Some("Reimbursement".to_string()),
            receipt: None,
            submitted_by: Some("Sam Okafor".to_string()),
            approved_by: None,
        },
        ExpenseRecord {
            id: "exp-1004".to_string(),
            title: "Flight to supplier visit".to_string(),
            amount_cents: 68420,
            category: "Travel".to_string(),
            date: date(2026, 8, 9),
            status: ExpenseStatus::Pending,
            description: Some("Portland roastery audit, round trip".to_string()),
            vendor: Some("Cascade Air".to_string()),
            payment_method: Some("Company card".to_string()),
            receipt: Some(ReceiptRef {
                reference: "receipts/2026/08/cascade-air-0809.pdf".to_string(),
                available: true,
            }),
            submitted_by: Some("Dana Ruiz".to_string()),
            approved_by: None,
        },
        ExpenseRecord {
            id: "exp-1005".to_string(),
            title: "Trade show booth deposit".to_string(),
            amount_cents: 150000,
            category: "Marketing".to_string(),
            date: date(2026, 8, 12),
            status: ExpenseStatus::Rejected,
            description: Some("Deposit exceeded pre-approved budget".to_string()),
            vendor: Some("ExpoNorth".to_string()),
            payment_method: Some("Wire transfer".to_string()),
            receipt: None,
            submitted_by: Some("Priya Shah".to_string()),
            approved_by: Some("Sam Okafor".to_string()),
        },
        ExpenseRecord {
            id: "exp-1006".to_string(),
            title: "Contract bookkeeper, July".to_string(),
            amount_cents: 210000,
            category: "Professional Services".to_string(),
            date: date(2026, 8, 14),
            status: ExpenseStatus::Approved,
            description: Some("July close and reconciliation".to_string()),
            vendor: Some("Norgaard Books LLC".to_string()),
            payment_method: Some("ACH".to_string()),
            receipt: Some(ReceiptRef {
                reference: "receipts/2026/08/norgaard-july.pdf".to_string(),
                available: true,
            }),
            submitted_by: Some("Sam Okafor".to_string()),
            approved_by: Some("Sam Okafor".to_string()),
        },
    ]
}

pub fn sample_transactions() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord {
            id: "txn-2001".to_string(),
            date: date(2026, 8, 18),
            description: "Wholesale order payment".to_string(),
            counterparty: "Harborview Cafes".to_string(),
            amount_cents: 482500,
            direction: TransactionDirection::Inflow,
        },
        TransactionRecord {
            id: "txn-2002".to_string(),
            date: date(2026, 8, 17),
            description: "Green bean shipment".to_string(),
            counterparty: "Altura Importers".to_string(),
            amount_cents: 317800,
            direction: TransactionDirection::Outflow,
        },
        TransactionRecord {
            id: "txn-2003".to_string(),
            date: date(2026, 8, 15),
            description: "Payroll run".to_string(),
            counterparty: "Gusto".to_string(),
            amount_cents: 1264000,
            direction: TransactionDirection::Outflow,
        },
        TransactionRecord {
            id: "txn-2004".to_string(),
            date: date(2026, 8, 14),
            description: "Online store settlement".to_string(),
            counterparty: "Shopify Payments".to_string(),
            amount_cents: 158230,
            direction: TransactionDirection::Inflow,
        },
        TransactionRecord {
            id: "txn-2005".to_string(),
            date: date(2026, 8, 12),
            description: "Rent, roastery unit 4".to_string(),
            counterparty: "Eastside Properties".to_string(),
            amount_cents: 420000,
            direction: TransactionDirection::Outflow,
        },
        TransactionRecord {
            id: "txn-2006".to_string(),
            date: date(2026, 8, 11),
            description: "Subscription box renewals".to_string(),
            counterparty: "Stripe".to_string(),
            amount_cents: 96410,
            direction: TransactionDirection::Inflow,
        },
    ]
}

pub fn sample_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord {
            id: "doc-3001".to_string(),
            name: "2025 Federal Tax Return".to_string(),
            kind: "Tax filing".to_string(),
            uploaded: date(2026, 4, 11),
            size_bytes: 2_418_000,
        },
        DocumentRecord {
            id: "doc-3002".to_string(),
            name: "Q2 2026 P&L Statement".to_string(),
            kind: "Financial statement".to_string(),
            uploaded: date(2026, 7, 8),
            size_bytes: 184_320,
        },
        DocumentRecord {
            id: "doc-3003".to_string(),
            name: "Equipment Lease - Probat Roaster".to_string(),
            kind: "Contract".to_string(),
            uploaded: date(2026, 5, 22),
            size_bytes: 912_400,
        },
        DocumentRecord {
            id: "doc-3004".to_string(),
            name: "Business Insurance Policy 2026".to_string(),
            kind: "Insurance".to_string(),
            uploaded: date(2026, 1, 15),
            size_bytes: 1_204_000,
        },
    ]
}

pub fn sample_threads() -> Vec<MessageThread> {
    vec![
        MessageThread {
            id: "msg-4001".to_string(),
            sender: "Avery Lindqvist (CFO)".to_string(),
            subject: "August close checklist".to_string(),
            preview: "I've attached the updated checklist for the August close. Two items need...".to_string(),
            sent: date(2026, 8, 19),
            unread: true,
        },
        MessageThread {
            id: "msg-4002".to_string(),
            sender: "Avery Lindqvist (CFO)".to_string(),
            subject: "Cash runway update".to_string(),
            preview: "Runway looks healthier after the Harborview payment landed. Projection...".to_string(),
            sent: date(2026, 8, 16),
            unread: true,
        },
        MessageThread {
            id: "msg-4003".to_string(),
            sender: "Dana Ruiz".to_string(),
            subject: "Re: Trade show budget".to_string(),
            preview: "Understood, we'll resubmit with a smaller booth footprint next quarter.".to_string(),
            sent: date(2026, 8, 13),
            unread: false,
        },
        MessageThread {
            id: "msg-4004".to_string(),
            sender: "Norgaard Books LLC".to_string(),
            subject: "July reconciliation complete".to_string(),
            preview: "All accounts reconciled. One flagged duplicate charge from the card feed...".to_string(),
            sent: date(2026, 8, 10),
            unread: false,
        },
    ]
}

pub fn sample_reports() -> Vec<FinancialReport> {
    vec![
        FinancialReport {
            id: "rpt-5001".to_string(),
            period: "July 2026".to_string(),
            revenue_cents: 9_845_200,
            expenses_cents: 8_112_600,
            net_cents: 1_732_600,
        },
        FinancialReport {
            id: "rpt-5002".to_string(),
            period: "June 2026".to_string(),
            revenue_cents: 9_210_900,
            expenses_cents: 8_540_300,
            net_cents: 670_600,
        },
        FinancialReport {
            id: "rpt-5003".to_string(),
            period: "May 2026".to_string(),
            revenue_cents: 8_975_100,
            expenses_cents: 9_130_800,
            net_cents: -155_700,
        },
    ]
}
