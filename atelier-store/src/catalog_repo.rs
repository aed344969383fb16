use async_trait::async_trait;
use atelier_catalog::{
    default_services, CatalogError, CatalogProvider, ServiceCategory, ServiceOffering,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory catalog backing the storefront. Listing calls return active
/// offerings only, sorted by code so output is deterministic.
pub struct InMemoryCatalog {
    services: RwLock<HashMap<Uuid, ServiceOffering>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(HashMap::new()),
        }
    }

    /// Catalog seeded with the studio's standing offerings
    pub fn with_defaults() -> Self {
        let services = default_services()
            .into_iter()
            .map(|service| (service.id, service))
            .collect();
        Self {
            services: RwLock::new(services),
        }
    }

    /// Insert or replace an offering
    pub async fn upsert(&self, service: ServiceOffering) {
        tracing::debug!("Upserting catalog entry {}", service.code);
        self.services.write().await.insert(service.id, service);
    }

    /// Withdraw an offering from sale without deleting its record
    pub async fn deactivate(&self, id: Uuid) -> Result<(), CatalogError> {
        let mut services = self.services.write().await;
        let service = services
            .get_mut(&id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        service.is_active = false;
        Ok(())
    }

    fn sorted_active(services: &HashMap<Uuid, ServiceOffering>) -> Vec<ServiceOffering> {
        let mut active: Vec<ServiceOffering> = services
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.code.cmp(&b.code));
        active
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, CatalogError> {
        let services = self.services.read().await;
        Ok(Self::sorted_active(&services))
    }

    async fn get_service(&self, id: Uuid) -> Result<ServiceOffering, CatalogError> {
        let services = self.services.read().await;
        let service = services
            .get(&id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        if !service.is_active {
            return Err(CatalogError::Inactive(service.code.clone()));
        }
        Ok(service.clone())
    }

    async fn services_by_category(
        &self,
        category: ServiceCategory,
    ) -> Result<Vec<ServiceOffering>, CatalogError> {
        let services = self.services.read().await;
        Ok(Self::sorted_active(&services)
            .into_iter()
            .filter(|s| s.category == category)
            .collect())
    }
}
