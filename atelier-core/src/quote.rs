use atelier_shared::{format_usd, pii::Masked};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::notify::EmailMessage;
use crate::{CoreError, CoreResult};

/// A quote request submitted through the contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub email: Masked<String>,
    pub company: Option<String>,
    /// Catalog code the visitor asked about, if they picked one
    pub service_code: Option<String>,
    pub budget_usd: Option<f64>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl QuoteRequest {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: Masked::new(email.to_string()),
            company: None,
            service_code: None,
            budget_usd: None,
            message: message.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError("name is required".to_string()));
        }
        let email = self.email.inner().trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::ValidationError(
                "a valid email address is required".to_string(),
            ));
        }
        if self.message.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "message is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Render a quote request as the email the sales inbox receives
pub fn render_email(request: &QuoteRequest, sales_inbox: &str, from_address: &str) -> EmailMessage {
    let mut lines = vec![
        format!("From: {} <{}>", request.name, request.email.inner()),
    ];
    if let Some(company) = &request.company {
        lines.push(format!("Company: {}", company));
    }
    if let Some(code) = &request.service_code {
        lines.push(format!("Service: {}", code));
    }
    if let Some(budget) = request.budget_usd {
        lines.push(format!("Budget: {}", format_usd(budget)));
    }
    lines.push(String::new());
    lines.push(request.message.clone());

    EmailMessage {
        to: sales_inbox.to_string(),
        from: from_address.to_string(),
        subject: format!("New quote request from {}", request.name),
        body: lines.join("\n"),
    }
}
