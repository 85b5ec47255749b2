//! Market reference - append-only commodity price history.
//!
//! Insertion order is the authority for "current price": the last row
//! appended wins, even when an operator appends a quote carrying an older
//! calendar date than the one before it.

use crate::entities::MarketQuote;
use crate::errors::{Error, Result};
use crate::store::{Entity, RecordStore};
use chrono::{Local, NaiveDate};
use tracing::info;

/// Appends one price quote. `date` defaults to today when not given.
///
/// Negative prices are rejected with [`Error::Validation`].
pub fn append_quote(
    store: &RecordStore,
    actor: &str,
    cattle_price_per_unit: f64,
    calf_price_per_head: f64,
    feed_price: f64,
    date: Option<NaiveDate>,
) -> Result<MarketQuote> {
    for (label, value) in [
        ("cattle_price_per_unit", cattle_price_per_unit),
        ("calf_price_per_head", calf_price_per_head),
        ("feed_price", feed_price),
    ] {
        if value < 0.0 {
            return Err(Error::Validation {
                message: format!("{label} must be non-negative, got {value}"),
            });
        }
    }

    let quote = MarketQuote {
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        cattle_price_per_unit,
        calf_price_per_head,
        feed_price,
    };

    store.update(Entity::Market, |quotes: &mut Vec<MarketQuote>| {
        quotes.push(quote.clone());
    })?;

    info!(actor, date = %quote.date, cattle_price_per_unit, "quote appended");
    Ok(quote)
}

/// The current quote: the last row by insertion order, not max-by-date.
///
/// Seeding guarantees one row exists on a fresh data directory, so
/// [`Error::EmptyHistory`] should be unreachable in practice; it is still
/// a defined error rather than an index fault.
pub fn latest(store: &RecordStore) -> Result<MarketQuote> {
    let quotes: Vec<MarketQuote> = store.load(Entity::Market)?;
    quotes.into_iter().last().ok_or_else(|| Error::EmptyHistory {
        entity: Entity::Market.key().to_string(),
    })
}

/// Full quote history, oldest first.
pub fn history(store: &RecordStore) -> Result<Vec<MarketQuote>> {
    store.load(Entity::Market)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::seeded_store;

    #[test]
    fn test_seeded_store_already_has_a_current_quote() {
        let (_dir, _config, store) = seeded_store();
        let quote = latest(&store).unwrap();
        assert_eq!(quote.cattle_price_per_unit, 320.0);
        assert_eq!(quote.calf_price_per_head, 3000.0);
    }

    #[test]
    fn test_latest_is_insertion_order_not_date_order() {
        let (_dir, _config, store) = seeded_store();
        let later_date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let earlier_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        append_quote(&store, "test-operator", 330.0, 3100.0, 61.0, Some(later_date)).unwrap();
        append_quote(
            &store,
            "test-operator",
            340.0,
            3200.0,
            62.0,
            Some(earlier_date),
        )
        .unwrap();

        // The out-of-order date still wins: it was appended last.
        let current = latest(&store).unwrap();
        assert_eq!(current.date, earlier_date);
        assert_eq!(current.cattle_price_per_unit, 340.0);
    }

    #[test]
    fn test_append_quote_rejects_negative_prices() {
        let (_dir, _config, store) = seeded_store();
        let before = history(&store).unwrap().len();

        let result = append_quote(&store, "test-operator", -1.0, 3000.0, 60.0, None);
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert_eq!(history(&store).unwrap().len(), before);
    }

    #[test]
    fn test_empty_history_is_a_defined_error() {
        let (_dir, _config, store) = seeded_store();
        store.save::<MarketQuote>(Entity::Market, &[]).unwrap();

        let result = latest(&store);
        assert!(matches!(result, Err(Error::EmptyHistory { .. })));
    }
}
