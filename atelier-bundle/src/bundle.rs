use crate::pricing::{BundleQuote, PricingEngine};
use crate::selection::Selection;
use atelier_catalog::ServiceOffering;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("A bundle needs at least {min} services, selection has {got}")]
    InsufficientServices { min: usize, got: usize },
}

/// Snapshot of one selected service at commit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleItem {
    pub service_id: Uuid,
    pub code: String,
    pub name: String,
    pub price_usd: f64,
}

impl From<&ServiceOffering> for BundleItem {
    fn from(service: &ServiceOffering) -> Self {
        Self {
            service_id: service.id,
            code: service.code.clone(),
            name: service.name.clone(),
            price_usd: service.price_usd,
        }
    }
}

/// The record handed to the cart collaborator once a selection is committed.
/// Read-only from here on; the engine never stores or re-emits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommittedBundle {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<BundleItem>,
    pub quote: BundleQuote,
    pub created_at: DateTime<Utc>,
}

impl PricingEngine {
    /// Commit a selection as a named bundle.
    ///
    /// Rejects selections below the configured minimum (an undersized
    /// selection is reported, never coerced into a zero-discount "bundle").
    /// Without a caller-supplied name the bundle is named
    /// `"Custom Bundle {n} Services"`.
    pub fn create_bundle(
        &self,
        selection: &Selection,
        name: Option<&str>,
    ) -> Result<CommittedBundle, BundleError> {
        let min = self.config().min_bundle_size;
        if selection.len() < min {
            return Err(BundleError::InsufficientServices {
                min,
                got: selection.len(),
            });
        }

        let name = match name {
            Some(given) => given.to_string(),
            None => format!("Custom Bundle {} Services", selection.len()),
        };

        let mut quote = self.price_bundle(selection);
        quote.name = Some(name.clone());

        Ok(CommittedBundle {
            id: Uuid::new_v4(),
            name,
            items: selection.services().iter().map(BundleItem::from).collect(),
            created_at: quote.created_at,
            quote,
        })
    }
}
