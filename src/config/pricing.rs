//! Valuation constants.
//!
//! The weight-to-price-unit divisor encodes a carcass-yield assumption
//! (the observed deployments price cattle per 30 kg of live weight).
//! Different installations tune it, so it is a configuration value rather
//! than a literal in the valuation engine.

use serde::Deserialize;

/// Constants consumed by the valuation engine.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Kilograms of live weight per priced unit. A 300 kg steer at the
    /// default 30.0 is worth ten units of the quoted cattle price.
    #[serde(default = "default_weight_unit_kg")]
    pub weight_unit_kg: f64,
}

fn default_weight_unit_kg() -> f64 {
    30.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            weight_unit_kg: default_weight_unit_kg(),
        }
    }
}
