use atelier_shared::format_usd;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Practice areas offered by the studio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    WebDevelopment,
    MobileApps,
    UiUxDesign,
    DigitalMarketing,
    Seo,
    ContentCreation,
    VideoProduction,
    Branding,
}

/// A single purchasable service from the studio catalog.
///
/// Catalog rows are immutable once published; pricing reads only
/// `id`, `price_usd` and `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub category: ServiceCategory,
    pub description: Option<String>,
    pub price_usd: f64,
    /// Delivery window shown on the service card, e.g. "4-6 weeks"
    pub timeline: String,
    /// Icon reference used by the storefront card
    pub icon: String,
    pub is_active: bool,
    pub metadata: serde_json::Value,
}

impl ServiceOffering {
    pub fn new(
        code: &str,
        name: &str,
        category: ServiceCategory,
        price_usd: f64,
        timeline: &str,
        icon: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: name.to_string(),
            category,
            description: None,
            price_usd,
            timeline: timeline.to_string(),
            icon: icon.to_string(),
            is_active: true,
            metadata: serde_json::json!({}),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl fmt::Display for ServiceOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name,
            format_usd(self.price_usd),
            self.timeline
        )
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Service not found: {0}")]
    NotFound(String),

    #[error("Service not currently offered: {0}")]
    Inactive(String),
}

/// The studio's standing offerings, used to seed an in-memory catalog.
pub fn default_services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering::new(
            "WEB-LANDING",
            "Landing Page Development",
            ServiceCategory::WebDevelopment,
            1000.0,
            "2-3 weeks",
            "code",
        )
        .with_description("Single-page marketing site with responsive layout and CMS hookup"),
        ServiceOffering::new(
            "WEB-APP",
            "Web Application Development",
            ServiceCategory::WebDevelopment,
            1800.0,
            "6-8 weeks",
            "layout",
        )
        .with_description("Custom web application built on a modern SPA stack"),
        ServiceOffering::new(
            "MOB-APP",
            "Mobile App Development",
            ServiceCategory::MobileApps,
            2400.0,
            "8-12 weeks",
            "smartphone",
        ),
        ServiceOffering::new(
            "UX-DESIGN",
            "UI/UX Design Package",
            ServiceCategory::UiUxDesign,
            1200.0,
            "3-4 weeks",
            "pen-tool",
        )
        .with_description("Research, wireframes and a full high-fidelity design system"),
        ServiceOffering::new(
            "MKT-CAMPAIGN",
            "Digital Marketing Campaign",
            ServiceCategory::DigitalMarketing,
            900.0,
            "4 weeks",
            "trending-up",
        ),
        ServiceOffering::new(
            "SEO-FOUNDATION",
            "SEO Foundation",
            ServiceCategory::Seo,
            600.0,
            "4-6 weeks",
            "search",
        ),
        ServiceOffering::new(
            "CONTENT-PACK",
            "Content Writing Pack",
            ServiceCategory::ContentCreation,
            450.0,
            "2 weeks",
            "file-text",
        ),
        ServiceOffering::new(
            "VIDEO-PROMO",
            "Promo Video Production",
            ServiceCategory::VideoProduction,
            1500.0,
            "3-5 weeks",
            "video",
        ),
        ServiceOffering::new(
            "BRAND-IDENTITY",
            "Brand Identity Package",
            ServiceCategory::Branding,
            1100.0,
            "4-6 weeks",
            "layers",
        )
        .with_description("Logo, typography, color system and brand guidelines"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_catalog_has_unique_ids_and_codes() {
        let services = default_services();
        let ids: HashSet<Uuid> = services.iter().map(|s| s.id).collect();
        let codes: HashSet<&str> = services.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(ids.len(), services.len());
        assert_eq!(codes.len(), services.len());
    }

    #[test]
    fn default_catalog_is_all_active_with_non_negative_prices() {
        for service in default_services() {
            assert!(service.is_active, "{} should start active", service.code);
            assert!(service.price_usd >= 0.0);
        }
    }

    #[test]
    fn display_includes_price_and_timeline() {
        let service = ServiceOffering::new(
            "UX-DESIGN",
            "UI/UX Design Package",
            ServiceCategory::UiUxDesign,
            1200.0,
            "3-4 weeks",
            "pen-tool",
        );
        assert_eq!(
            service.to_string(),
            "UI/UX Design Package ($1200.00, 3-4 weeks)"
        );
    }

    #[test]
    fn category_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ServiceCategory::UiUxDesign).unwrap();
        assert_eq!(json, "\"UI_UX_DESIGN\"");
    }
}
