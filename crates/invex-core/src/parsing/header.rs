use crate::parsing::values::parse_amount;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Document-level fields extracted from invoice text.
///
/// Each field is searched for independently with a fixed pattern; first
/// match wins and absence is not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub date: Option<String>,
    pub reference: Option<String>,
    pub total_excl: Option<Decimal>,
    pub total_incl: Option<Decimal>,
}

// Strict dd-mm-yyyy grouping; no locale inference, no multi-date handling.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2}-\d{2}-\d{4})\b").unwrap());

// Invoice-number token. The prefix is pinned to INV: a generic
// uppercase+digits pattern would swallow item codes like "A100".
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bINV\d+\b").unwrap());

static TOTAL_EXCL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total \(Excl\)\s+([\d,]+\.?\d*)").unwrap());

static TOTAL_INCL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total \(Incl\)\s+([\d,]+\.?\d*)").unwrap());

/// Extract header fields from the full document text.
pub fn parse_header(text: &str) -> Header {
    Header {
        date: DATE_RE
            .captures(text)
            .map(|caps| caps[1].to_string()),
        reference: REFERENCE_RE
            .find(text)
            .map(|m| m.as_str().to_string()),
        total_excl: labeled_amount(&TOTAL_EXCL_RE, text),
        total_incl: labeled_amount(&TOTAL_INCL_RE, text),
    }
}

/// First amount following a label pattern, if it parses.
fn labeled_amount(re: &Regex, text: &str) -> Option<Decimal> {
    re.captures(text).and_then(|caps| parse_amount(&caps[1]))
}
