pub mod provider;
pub mod recommendation;
pub mod service;

pub use provider::CatalogProvider;
pub use recommendation::{QuizProfile, RecommendationEngine};
pub use service::{default_services, CatalogError, ServiceCategory, ServiceOffering};
