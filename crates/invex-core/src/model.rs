use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pattern tier recognized a line item.
///
/// Tiers are tried in this order; more specific dialects come before the
/// generic fallback so a relaxed pattern cannot capture a line that a
/// vendor-tailored pattern describes better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Six-column layout: code, description, quantity, price, tax, total.
    General,
    /// Compound fuel code (`LSD : EL`) with a descriptive phrase and no tax column.
    CompoundStandard,
    /// Compound fuel code where the description was replaced by item numbers.
    CompoundAlternate,
    /// Relaxed three-amount fallback, disambiguated arithmetically.
    Legacy,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::General => write!(f, "general"),
            Tier::CompoundStandard => write!(f, "compound-standard"),
            Tier::CompoundAlternate => write!(f, "compound-alternate"),
            Tier::Legacy => write!(f, "legacy"),
        }
    }
}

/// Arithmetic self-check for one line item.
///
/// `total_expected` is recomputed from quantity, price and tax; it is kept
/// alongside the printed `total` for diagnostics and never replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCheck {
    pub total_expected: Decimal,
    pub discrepancy_abs: Decimal,
    pub discrepancy_rel: Decimal,
    pub flagged: bool,
}

/// One itemized row of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_code: Option<String>,
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub price: Decimal,
    /// Zero for dialects without a tax column.
    pub tax: Decimal,
    /// The total as printed on the source line (tax-excluded).
    pub total: Decimal,
    pub tier: Tier,
    pub check: ItemCheck,
}

/// Document-level aggregate of the per-item checks plus cross-checks
/// against the declared invoice totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCheck {
    /// Sum of the printed item totals.
    pub items_total: Decimal,
    /// Sum of printed item totals plus tax.
    pub items_total_incl: Decimal,
    pub flagged_items: usize,
    pub flagged: bool,
}

/// One extracted invoice. Built once per input document and read-only
/// afterwards; every header field is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub source_id: String,
    pub date: Option<String>,
    pub reference: Option<String>,
    pub total_excl: Option<Decimal>,
    pub total_incl: Option<Decimal>,
    /// Items in order of appearance in the source text.
    pub items: Vec<LineItem>,
    pub check: RecordCheck,
}

impl InvoiceRecord {
    /// True when no header field matched and no line item was recognized.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.reference.is_none()
            && self.total_excl.is_none()
            && self.total_incl.is_none()
            && self.items.is_empty()
    }
}
