use crate::service::{CatalogError, ServiceCategory, ServiceOffering};
use async_trait::async_trait;
use uuid::Uuid;

/// Read-side seam to whatever supplies the service catalog.
///
/// The storefront only ever reads offerings; publishing and maintenance
/// happen behind this trait.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All currently offered (active) services
    async fn list_services(&self) -> Result<Vec<ServiceOffering>, CatalogError>;

    /// Look up one offering by id, active or not
    async fn get_service(&self, id: Uuid) -> Result<ServiceOffering, CatalogError>;

    /// Active offerings within a single practice area
    async fn services_by_category(
        &self,
        category: ServiceCategory,
    ) -> Result<Vec<ServiceOffering>, CatalogError>;
}
