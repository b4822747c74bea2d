use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::AppConfig;
use crate::services::email_service::Notifier;
use crate::services::payment::interface::PaymentOperations;

use super::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check<P, M>(state: web::Data<AppState<P, M>>) -> impl Responder
where
    P: PaymentOperations + 'static,
    M: Notifier + 'static,
{
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Only key presence is checked; no API call is made
    let stripe_result = check_stripe_key(&state.config);
    health
        .services
        .insert("stripe".to_string(), stripe_result.clone());

    let email_result = check_email(&state.config, state.notifier.is_some());
    health
        .services
        .insert("email".to_string(), email_result.clone());

    // Demo bookings still work without Stripe; a missing key degrades live payments
    if stripe_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}

fn check_stripe_key(config: &AppConfig) -> ServiceStatus {
    match &config.stripe_secret_key {
        Some(key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("API key configured: {}", mask_key(key))),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("STRIPE_SECRET_KEY not set".to_string()),
        },
    }
}

fn check_email(config: &AppConfig, notifier_ready: bool) -> ServiceStatus {
    if notifier_ready {
        ServiceStatus {
            status: "ok".to_string(),
            details: config
                .from_email
                .as_ref()
                .map(|from| format!("Sending as {}", from)),
        }
    } else {
        ServiceStatus {
            status: "disabled".to_string(),
            details: Some("Confirmation emails are not sent".to_string()),
        }
    }
}
