//! Purpose/price resolution and currency formatting
//!
//! Given a listing's purpose and term category, picks which price field to
//! display and how to format it. Backend price fields arrive as numbers or
//! strings; absent values default to 0 while unparsable strings render as
//! "N/A" instead of erroring.

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{parse_price, Purpose, TermCategory};

/// Fixed currency marker prefixed to every amount
pub const CURRENCY_MARKER: &str = "K";

/// A price field exactly as the backend sent it
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            RawPrice::Number(n) => Decimal::from_f64_retain(*n),
            RawPrice::Text(s) => parse_price(s),
        }
    }
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        RawPrice::Number(value)
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        RawPrice::Text(value.to_string())
    }
}

/// Precision used when rendering amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFormat {
    /// List summaries: trailing zero decimals omitted
    #[default]
    Compact,
    /// Detail views: exactly two decimal places
    Detailed,
}

/// A display-ready price with its unit suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrice {
    pub price: String,
    pub unit: String,
}

impl std::fmt::Display for ResolvedPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.price, self.unit)
    }
}

/// Resolve the display price for a listing (list-view precision)
pub fn resolve_price(
    purpose: Purpose,
    term_category: TermCategory,
    rental_price: Option<&RawPrice>,
    sale_price: Option<&RawPrice>,
) -> ResolvedPrice {
    resolve_price_with(
        purpose,
        term_category,
        rental_price,
        sale_price,
        PriceFormat::Compact,
    )
}

/// Resolve the display price for a listing at a chosen precision
pub fn resolve_price_with(
    purpose: Purpose,
    term_category: TermCategory,
    rental_price: Option<&RawPrice>,
    sale_price: Option<&RawPrice>,
    format: PriceFormat,
) -> ResolvedPrice {
    let unit = rent_unit(term_category);
    match purpose {
        Purpose::Rent => ResolvedPrice {
            price: money(rental_price, format),
            unit: unit.to_string(),
        },
        Purpose::Buy => ResolvedPrice {
            price: money(sale_price, format),
            unit: String::new(),
        },
        // Rental component takes display priority and carries the term unit;
        // the sale component is a one-off total.
        Purpose::RentBuy => ResolvedPrice {
            price: format!(
                "{}{} | {}",
                money(rental_price, format),
                unit,
                money(sale_price, format)
            ),
            unit: String::new(),
        },
    }
}

fn rent_unit(term_category: TermCategory) -> &'static str {
    match term_category {
        TermCategory::Short => "/night",
        TermCategory::Long => "/month",
    }
}

fn money(price: Option<&RawPrice>, format: PriceFormat) -> String {
    match price {
        None => format!("{}{}", CURRENCY_MARKER, format_amount(Decimal::ZERO, format)),
        Some(raw) => match raw.to_decimal() {
            Some(amount) => format!("{}{}", CURRENCY_MARKER, format_amount(amount, format)),
            None => "N/A".to_string(),
        },
    }
}

fn format_amount(amount: Decimal, format: PriceFormat) -> String {
    match format {
        PriceFormat::Compact => amount.normalize().to_string(),
        PriceFormat::Detailed => format!("{:.2}", amount),
    }
}
