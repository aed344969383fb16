use atelier_bundle::{PricingConfig, PricingEngine};
use atelier_core::identity::DemoCredentialStore;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub pricing: PricingConfig,
    pub auth: AuthConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub session_ttl_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    /// Sender address stamped on outbound mail
    pub from_address: String,
    /// Inbox that receives quote requests
    pub sales_inbox: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of ATELIER)
            .add_source(config::Environment::with_prefix("ATELIER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Pricing engine wired to the configured discount schedule
    pub fn pricing_engine(&self) -> PricingEngine {
        PricingEngine::new(self.pricing.clone())
    }

    /// Demo credential store with the configured session TTL
    pub fn credential_store(&self) -> DemoCredentialStore {
        DemoCredentialStore::new(self.auth.session_ttl_seconds as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const SAMPLE: &str = r#"
        [pricing]
        min_bundle_size = 2

        [[pricing.tiers]]
        min_services = 2
        rate = 0.10

        [[pricing.tiers]]
        min_services = 3
        rate = 0.15

        [auth]
        session_ttl_seconds = 86400

        [notifications]
        from_address = "no-reply@atelier.studio"
        sales_inbox = "hello@atelier.studio"
    "#;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn discount_schedule_comes_from_configuration() {
        let config = parse(SAMPLE);
        let engine = config.pricing_engine();

        assert_eq!(config.pricing.tiers.len(), 2);
        assert!((engine.discount_rate(2) - 0.10).abs() < 1e-9);
        assert!((engine.discount_rate(3) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn pricing_section_falls_back_to_the_standing_schedule() {
        let config = parse(
            r#"
            [pricing]

            [auth]
            session_ttl_seconds = 60

            [notifications]
            from_address = "no-reply@atelier.studio"
            sales_inbox = "hello@atelier.studio"
        "#,
        );

        assert_eq!(config.pricing.min_bundle_size, 2);
        assert!((config.pricing_engine().discount_rate(3) - 0.15).abs() < 1e-9);
    }
}
