use atelier_catalog::ServiceOffering;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The transient set of services a visitor is composing into a bundle.
///
/// Ordered by insertion, unique by offering id. The builder UI owns the
/// mutable reference; every operation here returns a new value and leaves
/// the input untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    services: Vec<ServiceOffering>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from an arbitrary list, keeping the first entry for
    /// any repeated id
    pub fn from_services(services: Vec<ServiceOffering>) -> Self {
        services
            .into_iter()
            .fold(Self::new(), |selection, service| selection.add(service))
    }

    /// New selection with `service` appended. Adding an id that is already
    /// present is an idempotent no-op, not an error.
    pub fn add(&self, service: ServiceOffering) -> Selection {
        if self.contains(&service.id) {
            return self.clone();
        }
        let mut services = self.services.clone();
        services.push(service);
        Selection { services }
    }

    /// New selection with the matching entry removed; an absent id is a no-op
    pub fn remove(&self, id: &Uuid) -> Selection {
        Selection {
            services: self
                .services
                .iter()
                .filter(|s| s.id != *id)
                .cloned()
                .collect(),
        }
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.services.iter().any(|s| s.id == *id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    /// Sum of unit prices before any discount
    pub fn total_usd(&self) -> f64 {
        self.services.iter().map(|s| s.price_usd).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_catalog::ServiceCategory;

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
    fn add_preserves_insertion_order() {
        let a = offering("A", 100.0);
        let b = offering("B", 200.0);
        let selection = Selection::new().add(a.clone()).add(b.clone());

        let codes: Vec<&str> = selection.services().iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
        assert_eq!(selection.total_usd(), 300.0);
    }

    #[test]
    fn duplicate_add_is_idempotent() {
        let a = offering("A", 100.0);
        let once = Selection::new().add(a.clone());
        let twice = once.add(a.clone());

        assert_eq!(twice.len(), 1);
        assert_eq!(twice.total_usd(), once.total_usd());
    }

    #[test]
    fn removing_an_absent_id_changes_nothing() {
        let a = offering("A", 100.0);
        let selection = Selection::new().add(a);
        let after = selection.remove(&Uuid::new_v4());

        assert_eq!(after.len(), 1);
    }

    #[test]
    fn remove_drops_only_the_matching_entry() {
        let a = offering("A", 100.0);
        let b = offering("B", 200.0);
        let a_id = a.id;
        let selection = Selection::new().add(a).add(b);
        let after = selection.remove(&a_id);

        assert_eq!(after.len(), 1);
        assert!(!after.contains(&a_id));
        // the input selection is untouched
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn from_services_deduplicates_by_id() {
        let a = offering("A", 100.0);
        let selection = Selection::from_services(vec![a.clone(), a.clone()]);
        assert_eq!(selection.len(), 1);
    }
}
