//! Herd valuation and profitability engine.
//!
//! A pure function of its inputs: the active herd, the current market
//! quote, the accumulated day-labor cost, and the pricing constants.
//! There is no caching; callers pass fresh snapshots and the whole thing
//! is recomputed per display request, which is fine at herd-book scale.

use crate::config::PricingConfig;
use crate::entities::{Animal, MarketQuote};

/// Derived profitability metrics for one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationSnapshot {
    /// Number of active animals
    pub active_count: usize,
    /// Sum of current estimated sale value across active animals
    pub herd_value: f64,
    /// Sum of recorded purchase cost across active animals
    pub acquisition_cost: f64,
    /// `herd_value - acquisition_cost`
    pub gross_margin: f64,
    /// Total day-labor cost fed in by the payroll ledger
    pub payroll_total: f64,
    /// `gross_margin - payroll_total`
    pub net_result: f64,
}

/// Current estimated sale value of one animal under the given quote.
///
/// Per-head categories (unweaned calves) are worth the flat calf price
/// regardless of weight; everything else is priced by live weight in
/// units of `pricing.weight_unit_kg` kilograms.
#[must_use]
pub fn current_value(animal: &Animal, quote: &MarketQuote, pricing: &PricingConfig) -> f64 {
    if animal.category.is_priced_per_head() {
        quote.calf_price_per_head
    } else {
        (animal.weight_kg / pricing.weight_unit_kg) * quote.cattle_price_per_unit
    }
}

/// Computes the full profitability snapshot.
///
/// Inactive rows in `animals` are ignored. With zero active animals every
/// herd metric is zero and the net result is `-payroll_total`; payroll
/// keeps accruing whether or not there is livestock to set against it.
#[must_use]
pub fn compute_snapshot(
    animals: &[Animal],
    quote: &MarketQuote,
    payroll_total: f64,
    pricing: &PricingConfig,
) -> ValuationSnapshot {
    let active: Vec<&Animal> = animals.iter().filter(|a| a.is_active()).collect();

    let herd_value: f64 = active
        .iter()
        .map(|a| current_value(a, quote, pricing))
        .sum();
    let acquisition_cost: f64 = active.iter().map(|a| a.purchase_cost).sum();
    let gross_margin = herd_value - acquisition_cost;

    ValuationSnapshot {
        active_count: active.len(),
        herd_value,
        acquisition_cost,
        gross_margin,
        payroll_total,
        net_result: gross_margin - payroll_total,
    }
}
