use serde::{Deserialize, Serialize};

use crate::models::booking::BookingDetails;
use crate::services::fee_service::FeeService;

const SENDGRID_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridEmail {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridPersonalization {
    pub to: Vec<SendGridEmail>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendGridRequest {
    pub personalizations: Vec<SendGridPersonalization>,
    pub from: SendGridEmail,
    pub subject: String,
    pub content: Vec<SendGridContent>,
}

#[derive(Debug)]
pub enum EmailError {
    RequestError(String),
    ApiError(String),
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailError::RequestError(err) => write!(f, "Request error: {}", err),
            EmailError::ApiError(err) => write!(f, "API error: {}", err),
        }
    }
}

impl std::error::Error for EmailError {}

/// Sends a single HTML message. Implemented by the SendGrid client and by test doubles.
pub trait Notifier {
    async fn send_html(&self, to_email: &str, subject: &str, html: &str)
        -> Result<(), EmailError>;
}

pub struct EmailService {
    api_key: String,
    from_email: String,
    client: reqwest::Client,
}

impl EmailService {
    pub fn new(api_key: impl Into<String>, from_email: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            from_email: from_email.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Notifier for EmailService {
    async fn send_html(
        &self,
        to_email: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), EmailError> {
        let request = SendGridRequest {
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridEmail {
                    email: to_email.to_string(),
                }],
            }],
            from: SendGridEmail {
                email: self.from_email.clone(),
            },
            subject: subject.to_string(),
            content: vec![SendGridContent {
                content_type: "text/html".to_string(),
                value: html.to_string(),
            }],
        };

        let response = self
            .client
            .post(SENDGRID_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::RequestError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(EmailError::ApiError(format!(
                "Status: {}, Body: {}",
                status, body
            )))
        }
    }
}

pub fn booking_confirmation_subject(details: &BookingDetails) -> String {
    format!("Booking Confirmation - {}", details.room_name)
}

/// Confirmation body. `demo` adds the banner shown for simulated bookings.
pub fn booking_confirmation_html(
    details: &BookingDetails,
    total: i64,
    fee: i64,
    transaction_id: &str,
    demo: bool,
) -> String {
    let guests = details.guests.map(|g| g.to_string()).unwrap_or_default();
    let nights = details.nights.map(|n| n.to_string()).unwrap_or_default();

    let closing = if demo {
        r#"<div style="background: #fef3c7; padding: 15px; border-radius: 8px; margin: 20px 0;">
                <p><strong>Note:</strong> This is a demo booking for educational purposes.</p>
            </div>
            <p>Thank you for choosing our platform!</p>"#
    } else {
        "<p>We look forward to hosting you!</p>"
    };

    format!(
        r#"
        <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
            <h1 style="color: #2563eb;">Booking Confirmed!</h1>
            <div style="background: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
                <h2>Booking Details</h2>
                <p><strong>Room:</strong> {room}</p>
                <p><strong>Check-in:</strong> {check_in}</p>
                <p><strong>Check-out:</strong> {check_out}</p>
                <p><strong>Guests:</strong> {guests}</p>
                <p><strong>Total Nights:</strong> {nights}</p>
            </div>
            <div style="background: #ecfdf5; padding: 20px; border-radius: 8px; margin: 20px 0;">
                <h2>Payment Summary</h2>
                <p><strong>Room Total:</strong> ${total}</p>
                <p><strong>Service Fee:</strong> ${fee}</p>
                <p><strong>Transaction ID:</strong> {transaction_id}</p>
            </div>
            {closing}
        </div>
        "#,
        room = details.room_name,
        check_in = details.check_in,
        check_out = details.check_out,
        guests = guests,
        nights = nights,
        total = FeeService::to_decimal(total),
        fee = FeeService::to_decimal(fee),
        transaction_id = transaction_id,
        closing = closing,
    )
}
