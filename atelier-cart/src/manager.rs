use crate::models::{Cart, CartItem, CartStatus};
use atelier_bundle::CommittedBundle;
use atelier_catalog::ServiceOffering;
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory cart collaborator. Receives committed bundles and single
/// services from the storefront and tracks each cart's lifecycle.
pub struct CartManager {
    carts: HashMap<Uuid, Cart>,
}

impl CartManager {
    pub fn new() -> Self {
        Self {
            carts: HashMap::new(),
        }
    }

    pub fn create_cart(&mut self, customer_id: Option<String>) -> Cart {
        let cart = Cart::new(customer_id);
        self.carts.insert(cart.id, cart.clone());
        cart
    }

    pub fn get_cart(&self, cart_id: &Uuid) -> Option<&Cart> {
        self.carts.get(cart_id)
    }

    /// Add a committed bundle. The ≥2-service rule is enforced upstream at
    /// commit time, so every bundle arriving here is already valid.
    pub fn add_bundle(
        &mut self,
        cart_id: &Uuid,
        bundle: CommittedBundle,
    ) -> Result<Uuid, CartError> {
        let cart = self.get_open_cart_mut(cart_id)?;
        let item = CartItem::bundle(bundle);
        let item_id = item.id;
        cart.add_item(item);
        Ok(item_id)
    }

    /// Add a single service line
    pub fn add_service(
        &mut self,
        cart_id: &Uuid,
        service: &ServiceOffering,
    ) -> Result<Uuid, CartError> {
        let cart = self.get_open_cart_mut(cart_id)?;
        let item = CartItem::service(service);
        let item_id = item.id;
        cart.add_item(item);
        Ok(item_id)
    }

    /// Remove a line; an id that is not in the cart is a no-op
    pub fn remove_item(&mut self, cart_id: &Uuid, item_id: &Uuid) -> Result<(), CartError> {
        let cart = self.get_open_cart_mut(cart_id)?;
        let before = cart.items.len();
        cart.items.retain(|item| item.id != *item_id);
        if cart.items.len() != before {
            cart.updated_at = Utc::now();
        }
        Ok(())
    }

    /// Drop every line, keeping the cart open
    pub fn clear(&mut self, cart_id: &Uuid) -> Result<(), CartError> {
        let cart = self.get_open_cart_mut(cart_id)?;
        cart.items.clear();
        cart.updated_at = Utc::now();
        Ok(())
    }

    /// Transition: Open → Submitted
    pub fn submit(&mut self, cart_id: &Uuid) -> Result<(), CartError> {
        let cart = self.get_cart_mut(cart_id)?;

        if cart.status != CartStatus::Open {
            return Err(CartError::InvalidTransition {
                from: format!("{:?}", cart.status),
                to: "SUBMITTED".to_string(),
            });
        }

        cart.update_status(CartStatus::Submitted);
        Ok(())
    }

    /// Transition: Open → Abandoned
    pub fn abandon(&mut self, cart_id: &Uuid) -> Result<(), CartError> {
        let cart = self.get_cart_mut(cart_id)?;

        if cart.status != CartStatus::Open {
            return Err(CartError::InvalidTransition {
                from: format!("{:?}", cart.status),
                to: "ABANDONED".to_string(),
            });
        }

        cart.update_status(CartStatus::Abandoned);
        Ok(())
    }

    fn get_cart_mut(&mut self, cart_id: &Uuid) -> Result<&mut Cart, CartError> {
        self.carts
            .get_mut(cart_id)
            .ok_or_else(|| CartError::NotFound(cart_id.to_string()))
    }

    fn get_open_cart_mut(&mut self, cart_id: &Uuid) -> Result<&mut Cart, CartError> {
        let cart = self.get_cart_mut(cart_id)?;
        if !cart.is_open() {
            return Err(CartError::Closed(*cart_id));
        }
        Ok(cart)
    }
}

impl Default for CartManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    NotFound(String),

    #[error("Cart {0} is no longer open")]
    Closed(Uuid),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}
