use atelier_bundle::CommittedBundle;
use atelier_catalog::ServiceOffering;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cart lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartStatus {
    Open,
    Submitted,
    Abandoned,
}

/// A single service added to the cart outside any bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service_id: Uuid,
    pub code: String,
    pub name: String,
    pub price_usd: f64,
}

impl From<&ServiceOffering> for ServiceLine {
    fn from(service: &ServiceOffering) -> Self {
        Self {
            service_id: service.id,
            code: service.code.clone(),
            name: service.name.clone(),
            price_usd: service.price_usd,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CartLine {
    Service(ServiceLine),
    Bundle(CommittedBundle),
}

/// One line in the cart, either a single service or a committed bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub line: CartLine,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn service(service: &ServiceOffering) -> Self {
        Self {
            id: Uuid::new_v4(),
            line: CartLine::Service(ServiceLine::from(service)),
            added_at: Utc::now(),
        }
    }

    pub fn bundle(bundle: CommittedBundle) -> Self {
        Self {
            id: Uuid::new_v4(),
            line: CartLine::Bundle(bundle),
            added_at: Utc::now(),
        }
    }

    /// What this line contributes to the cart total: a service's unit price,
    /// or a bundle's already-discounted final price
    pub fn price_usd(&self) -> f64 {
        match &self.line {
            CartLine::Service(service) => service.price_usd,
            CartLine::Bundle(bundle) => bundle.quote.final_price_usd,
        }
    }

    pub fn label(&self) -> &str {
        match &self.line {
            CartLine::Service(service) => &service.name,
            CartLine::Bundle(bundle) => &bundle.name,
        }
    }
}

/// A visitor's cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub customer_id: Option<String>,
    pub items: Vec<CartItem>,
    pub status: CartStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(customer_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            items: Vec::new(),
            status: CartStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
        self.updated_at = Utc::now();
    }

    pub fn update_status(&mut self, new_status: CartStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }

    pub fn total_usd(&self) -> f64 {
        self.items.iter().map(|item| item.price_usd()).sum()
    }

    pub fn is_open(&self) -> bool {
        self.status == CartStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_bundle::{PricingEngine, Selection};
    use atelier_catalog::ServiceCategory;

    fn offering(code: &str, price: f64) -> ServiceOffering {
        ServiceOffering::new(
            code,
            code,
            ServiceCategory::Seo,
            price,
            "4 weeks",
            "search",
        )
    }

    #[test]
    fn bundle_lines_contribute_their_discounted_price() {
        let engine = PricingEngine::default();
        let selection = Selection::new()
            .add(offering("A", 1000.0))
            .add(offering("B", 1200.0));
        let bundle = engine.create_bundle(&selection, None).unwrap();

        let mut cart = Cart::new(None);
        cart.add_item(CartItem::bundle(bundle));
        cart.add_item(CartItem::service(&offering("C", 600.0)));

        assert!((cart.total_usd() - (1980.0 + 600.0)).abs() < 1e-9);
    }

    #[test]
    fn labels_come_from_the_underlying_line() {
        let service = offering("SEO-FOUNDATION", 600.0);
        let item = CartItem::service(&service);
        assert_eq!(item.label(), "SEO-FOUNDATION");
    }
}
