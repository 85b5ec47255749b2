//! Market quote entity - one snapshot of reference commodity prices.
//!
//! The quote table is append-only and insertion order is the authority:
//! "current price" is the last row appended, even if an operator appends a
//! quote carrying an older calendar date.

use super::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the market reference table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Quote date as entered by the operator (informational; insertion
    /// order, not this field, decides which quote is current)
    pub date: NaiveDate,
    /// Cattle price per standard weight unit of live weight
    pub cattle_price_per_unit: f64,
    /// Flat price per unweaned calf, independent of weight
    pub calf_price_per_head: f64,
    /// Feed price per unit, informational only, not used in valuation
    pub feed_price: f64,
}

// Quotes have no id; the table is append-only and existing rows are never
// edited, so the whole row serves as the identity.
impl Record for MarketQuote {
    fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.date, self.cattle_price_per_unit, self.calf_price_per_head, self.feed_price
        )
    }
}
