use crate::model::Tier;
use crate::parsing::values::parse_amount;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// A line recognized as an item by one tier, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TierMatch {
    pub item_code: Option<String>,
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub price: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub tier: Tier,
}

type TierFn = fn(&str) -> Option<TierMatch>;

/// Priority-ordered pattern cascade. The first tier to return `Some` wins,
/// so vendor-tailored patterns must stay ahead of the relaxed fallback:
/// reordering this table changes which dialect captures ambiguous lines.
pub const TIERS: &[(Tier, TierFn)] = &[
    (Tier::General, tier_general),
    (Tier::CompoundStandard, tier_compound_standard),
    (Tier::CompoundAlternate, tier_compound_alternate),
    (Tier::Legacy, tier_legacy),
];

/// Run one line through the cascade.
///
/// Returns None for anything that is not an item line (headers, footers,
/// totals rows, free text). Never fails: a tier whose numeric fields do not
/// parse simply does not apply and the next tier is tried.
pub fn match_line(line: &str) -> Option<TierMatch> {
    if is_column_header(line) {
        return None;
    }
    TIERS.iter().find_map(|(_, tier)| tier(line))
}

/// Column-header rows of the item table are never items themselves.
fn is_column_header(line: &str) -> bool {
    line.contains("Item Code") || line.contains("Item Description")
}

// Tier 1: code, description, quantity, price, tax, total.
static GENERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\S+)\s+(.+?)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)$",
    )
    .unwrap()
});

// Tier 2a: compound code with "EL" suffix, uppercase descriptive phrase
// (digits allowed mid-phrase, e.g. "UNLEADED 95"), then qty/price/total.
static COMPOUND_STANDARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z]+\s*:\s*EL)\s+([A-Z][A-Z0-9\s:]*?)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)$",
    )
    .unwrap()
});

// Tier 2b: compound code with "E" or "EL" suffix followed by item-number
// identifiers instead of a description (dropped by upstream extraction).
static COMPOUND_ALTERNATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z]+\s*:\s*EL?)\s+([A-Z0-9][A-Z0-9,]*)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)$",
    )
    .unwrap()
});

// Tier 3: relaxed fallback, anywhere in the line.
static LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Z\s:]*)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)\s+([\d,]+\.?\d*)").unwrap()
});

const FUEL_KEYWORDS: &[&str] = &["DIESEL", "PETROL", "PARAFFIN", "EL"];

fn tier_general(line: &str) -> Option<TierMatch> {
    let caps = GENERAL_RE.captures(line)?;
    let quantity = parse_amount(&caps[3])?;
    let price = parse_amount(&caps[4])?;
    let tax = parse_amount(&caps[5])?;
    let total = parse_amount(&caps[6])?;

    // Plausibility gate: a six-column regex alone also captures compound-code
    // lines (code "PETROL", description ": EL ..."), so the generic tier only
    // claims a line whose columns are arithmetically coherent.
    let expected = quantity * price;
    if (total - expected).abs() >= expected * Decimal::new(10, 2) {
        return None;
    }

    Some(TierMatch {
        item_code: Some(caps[1].to_string()),
        description: Some(caps[2].trim().to_string()),
        quantity,
        unit: None,
        price,
        tax,
        total,
        tier: Tier::General,
    })
}

fn tier_compound_standard(line: &str) -> Option<TierMatch> {
    let caps = COMPOUND_STANDARD_RE.captures(line)?;
    let quantity = parse_amount(&caps[3])?;
    let price = parse_amount(&caps[4])?;
    let total = parse_amount(&caps[5])?;

    if !product_matches(quantity, price, total) {
        return None;
    }

    Some(TierMatch {
        item_code: Some(caps[1].trim().to_string()),
        description: Some(caps[2].trim().to_string()),
        quantity,
        unit: None,
        price,
        // This dialect prints no tax column.
        tax: Decimal::ZERO,
        total,
        tier: Tier::CompoundStandard,
    })
}

fn tier_compound_alternate(line: &str) -> Option<TierMatch> {
    let caps = COMPOUND_ALTERNATE_RE.captures(line)?;
    let quantity = parse_amount(&caps[3])?;
    let price = parse_amount(&caps[4])?;
    let total = parse_amount(&caps[5])?;

    if !product_matches(quantity, price, total) {
        return None;
    }

    Some(TierMatch {
        item_code: Some(caps[1].trim().to_string()),
        // The middle field holds item numbers, not a description.
        description: None,
        quantity,
        unit: None,
        price,
        tax: Decimal::ZERO,
        total,
        tier: Tier::CompoundAlternate,
    })
}

fn tier_legacy(line: &str) -> Option<TierMatch> {
    let caps = LEGACY_RE.captures(line)?;
    let phrase = caps[1].trim().to_string();

    if !FUEL_KEYWORDS.iter().any(|kw| phrase.contains(kw)) {
        return None;
    }

    let v1 = parse_amount(&caps[2])?;
    let v2 = parse_amount(&caps[3])?;
    let v3 = parse_amount(&caps[4])?;

    // The three amounts may appear in any of the orientations seen in the
    // wild; keep the first that is arithmetically consistent. If none is,
    // this is a subtotal or footer row, not an item: discard the line.
    let (quantity, price, total) = if product_matches(v1, v2, v3) {
        (v1, v2, v3)
    } else if product_matches(v2, v3, v1) {
        (v2, v3, v1)
    } else if product_matches(v1, v3, v2) {
        (v1, v3, v2)
    } else {
        return None;
    };

    Some(TierMatch {
        item_code: None,
        description: Some(phrase),
        quantity,
        unit: None,
        price,
        tax: Decimal::ZERO,
        total,
        tier: Tier::Legacy,
    })
}

/// quantity * price equals total within 1% of the total or one cent,
/// whichever is larger.
fn product_matches(quantity: Decimal, price: Decimal, total: Decimal) -> bool {
    let cent = Decimal::new(1, 2);
    let slack = std::cmp::max(total * cent, cent);
    (quantity * price - total).abs() < slack
}
