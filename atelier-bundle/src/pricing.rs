use crate::selection::Selection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One step of the volume-discount schedule: selections of at least
/// `min_services` services earn `rate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_services: usize,
    pub rate: f64,
}

/// Discount schedule and commitment threshold.
///
/// Business content (the 10%/15% tiers) lives in configuration, not code;
/// this default mirrors the studio's standing schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Smallest selection that may be committed as a bundle
    #[serde(default = "default_min_bundle_size")]
    pub min_bundle_size: usize,

    #[serde(default = "default_tiers")]
    pub tiers: Vec<DiscountTier>,
}

fn default_min_bundle_size() -> usize {
    2
}

fn default_tiers() -> Vec<DiscountTier> {
    vec![
        DiscountTier {
            min_services: 3,
            rate: 0.15,
        },
        DiscountTier {
            min_services: 2,
            rate: 0.10,
        },
    ]
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_bundle_size: default_min_bundle_size(),
            tiers: default_tiers(),
        }
    }
}

/// Priced view of a selection. Derived and read-only: any change to the
/// selection produces a fresh quote, never a mutation of an old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleQuote {
    pub original_price_usd: f64,
    pub service_count: usize,
    pub discount_rate: f64,
    pub savings_usd: f64,
    pub final_price_usd: f64,
    pub created_at: DateTime<Utc>,
    pub name: Option<String>,
}

/// Bundle pricing engine: pure arithmetic over a selection and the
/// configured discount schedule
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Discount rate for a selection of `service_count` services: the best
    /// rate among tiers whose threshold is met, 0.0 when none is
    pub fn discount_rate(&self, service_count: usize) -> f64 {
        self.config
            .tiers
            .iter()
            .filter(|tier| service_count >= tier.min_services)
            .map(|tier| tier.rate)
            .fold(0.0, f64::max)
    }

    /// Price a selection. Total function: works for any selection size,
    /// including empty (0% tier). Plain f64 arithmetic; display rounding is
    /// the caller's concern.
    pub fn price_bundle(&self, selection: &Selection) -> BundleQuote {
        let original_price_usd = selection.total_usd();
        let service_count = selection.len();
        let discount_rate = self.discount_rate(service_count);

        BundleQuote {
            original_price_usd,
            service_count,
            discount_rate,
            savings_usd: original_price_usd * discount_rate,
            final_price_usd: original_price_usd * (1.0 - discount_rate),
            created_at: Utc::now(),
            name: None,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
