// Expense category vocabulary
//
// The expense-entry form selects slug categories while records carry display
// strings; this table is the single declared mapping between the two.

/// Canonical (slug, display label) pairs
pub const CATEGORIES: [(&str, &str); 7] = [
    ("office-expenses", "Office Expenses"),
    ("software", "Software & Subscriptions"),
    ("travel", "Travel"),
    ("meals", "Meals & Entertainment"),
    ("payroll", "Payroll"),
    ("professional-services", "Professional Services"),
    ("other", "Other"),
];

/// Display label for a slug. Unknown slugs are passed through unchanged so a
/// record sourced from an out-of-date vocabulary still renders.
pub fn category_label(slug: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, label)| *label)
        .unwrap_or(slug)
}

/// Slug for a display label. Unknown labels are lowercased and hyphenated
/// rather than rejected.
pub fn category_slug(label: &str) -> String {
    if let Some((slug, _)) = CATEGORIES.iter().find(|(_, l)| *l == label) {
        return (*slug).to_string();
    }
    label
        .trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// All slugs, in picker order
pub fn category_slugs() -> Vec<&'static str> {
    CATEGORIES.iter().map(|(s, _)| *s).collect()
}
