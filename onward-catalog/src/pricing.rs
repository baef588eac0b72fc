use onward_core::{FareBundle, Flight, PriceBreakdown, SelectedSeat};
use serde::{Deserialize, Serialize};

const BPS_SCALE: i64 = 10_000;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("Invalid tax rate: {0} (expected 0.0..=1.0)")]
    InvalidTaxRate(f64),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    /// Tax rate in basis points (1500 = 15%).
    pub tax_rate_bps: u32,
}

impl PricingConfig {
    pub fn from_rate(rate: f64) -> Result<Self, PricingError> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(PricingError::InvalidTaxRate(rate));
        }
        Ok(Self {
            tax_rate_bps: (rate * BPS_SCALE as f64).round() as u32,
        })
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { tax_rate_bps: 1500 }
    }
}

/// Fare totals for the review and confirmation steps.
///
/// Review display and the submitted booking both go through
/// [`PricingEngine::compute_total`] so the two figures always agree.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PricingConfig {
        self.config
    }

    /// Base fare is the fare bundle price, else the flight's base price, else 0.
    pub fn compute_total(
        &self,
        fare_bundle: Option<&FareBundle>,
        flight: Option<&Flight>,
        seats: &[SelectedSeat],
    ) -> PriceBreakdown {
        let base_fare = fare_bundle
            .map(|f| f.price)
            .or_else(|| flight.map(|f| f.base_price))
            .unwrap_or(0);
        let seat_charges: i32 = seats.iter().map(|s| s.price).sum();
        let taxes_and_fees = self.tax_on(base_fare + seat_charges);

        PriceBreakdown {
            base_fare,
            seat_charges,
            taxes_and_fees,
            total: base_fare + seat_charges + taxes_and_fees,
        }
    }

    /// Tax rounded to the nearest whole unit, halves rounding up.
    pub fn tax_on(&self, subtotal: i32) -> i32 {
        let raw = subtotal as i64 * self.config.tax_rate_bps as i64;
        (raw + BPS_SCALE / 2).div_euclid(BPS_SCALE) as i32
    }
}
