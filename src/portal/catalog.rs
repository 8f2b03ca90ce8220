// Selectable option vocabularies for the officer-matching request wizard.
// Injected into the wizard rather than read from inside it so tests can
// supply their own catalogs.

#[derive(Debug, Clone, Copy)]
pub struct RequestCatalog {
    pub challenges: &'static [&'static str],
    pub service_types: &'static [&'static str],
    pub experience_levels: &'static [&'static str],
    pub timeframes: &'static [&'static str],
}

pub const CHALLENGES: &[&str] = &[
    "Cash Flow Management",
    "Fundraising Strategy",
    "Financial Reporting",
    "Budgeting & Forecasting",
    "Tax Planning",
    "Cost Reduction",
    "Audit Preparation",
    "Pricing Strategy",
];

pub const SERVICE_TYPES: &[&str] = &[
    "Fractional CFO",
    "Controller Services",
    "Bookkeeping Oversight",
    "Board Reporting",
    "Due Diligence Support",
    "Systems & Process Setup",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Startup / Pre-seed",
    "Venture-backed Growth",
    "Small Business / Family-owned",
    "E-commerce & Retail",
    "SaaS & Subscription",
    "Professional Services",
];

pub const TIMEFRAMES: &[&str] = &[
    "One-off project",
    "1-3 months",
    "3-6 months",
    "6-12 months",
    "Ongoing",
];

/// The production catalog
pub fn default_catalog() -> RequestCatalog {
    RequestCatalog {
        challenges: CHALLENGES,
        service_types: SERVICE_TYPES,
        experience_levels: EXPERIENCE_LEVELS,
        timeframes: TIMEFRAMES,
    }
}
