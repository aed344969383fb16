use crate::bundle::{BundleError, CommittedBundle};
use crate::pricing::{BundleQuote, PricingEngine};
use crate::selection::Selection;
use atelier_catalog::ServiceOffering;
use uuid::Uuid;

/// One bundle-composition session.
///
/// Stands in for the drag-and-drop surface: it owns the mutable selection
/// while the pricing engine stays pure. Closing the session without
/// committing simply drops the selection; nothing is persisted.
pub struct BundleBuilder {
    engine: PricingEngine,
    selection: Selection,
}

impl BundleBuilder {
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            engine,
            selection: Selection::new(),
        }
    }

    pub fn add_service(&mut self, service: ServiceOffering) {
        self.selection = self.selection.add(service);
    }

    pub fn remove_service(&mut self, id: &Uuid) {
        self.selection = self.selection.remove(id);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Fresh quote for the current selection
    pub fn quote(&self) -> BundleQuote {
        self.engine.price_bundle(&self.selection)
    }

    /// Commit the current selection. On success the selection is cleared so
    /// the session starts over; on rejection it is left as-is for the
    /// visitor to keep editing. Forwarding the returned bundle to the cart
    /// is the caller's responsibility.
    pub fn commit(&mut self, name: Option<&str>) -> Result<CommittedBundle, BundleError> {
        let bundle = self.engine.create_bundle(&self.selection, name)?;
        self.selection = Selection::new();
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_catalog::{ServiceCategory, ServiceOffering};

    fn offering(code: &str, price: f64) -> ServiceOffering {
        ServiceOffering::new(
            code,
            code,
            ServiceCategory::WebDevelopment,
            price,
            "2 weeks",
            "code",
        )
    }

    #[test]
    fn quote_follows_the_live_selection() {
        let mut builder = BundleBuilder::new(PricingEngine::default());
        builder.add_service(offering("A", 1000.0));
        assert!((builder.quote().final_price_usd - 1000.0).abs() < 1e-9);

        builder.add_service(offering("B", 1200.0));
        assert!((builder.quote().final_price_usd - 1980.0).abs() < 1e-9);
    }

    #[test]
    fn failed_commit_keeps_the_selection_editable() {
        let mut builder = BundleBuilder::new(PricingEngine::default());
        builder.add_service(offering("A", 1000.0));

        assert!(builder.commit(None).is_err());
        assert_eq!(builder.selection().len(), 1);

        builder.add_service(offering("B", 1200.0));
        let bundle = builder.commit(None).unwrap();
        assert_eq!(bundle.items.len(), 2);
        assert!(builder.selection().is_empty());
    }

    #[test]
    fn dropping_a_dragged_in_card_twice_adds_it_once() {
        let mut builder = BundleBuilder::new(PricingEngine::default());
        let a = offering("A", 1000.0);
        builder.add_service(a.clone());
        builder.add_service(a);

        assert_eq!(builder.selection().len(), 1);
    }

    #[test]
    fn remove_then_requote() {
        let mut builder = BundleBuilder::new(PricingEngine::default());
        let a = offering("A", 1000.0);
        let a_id = a.id;
        builder.add_service(a);
        builder.add_service(offering("B", 1200.0));
        builder.add_service(offering("C", 1800.0));
        assert!((builder.quote().final_price_usd - 3400.0).abs() < 1e-9);

        builder.remove_service(&a_id);
        let quote = builder.quote();
        assert_eq!(quote.service_count, 2);
        assert!((quote.final_price_usd - 3000.0 * 0.9).abs() < 1e-9);
    }
}
