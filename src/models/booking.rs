use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/stripe/process-payment` as sent by the booking UI.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentInput {
    pub email: Option<String>,
    // number or numeric string
    pub amount: Option<Value>,
    pub property_owner_id: Option<String>,
    pub booking_details: Option<BookingDetails>,
    pub platform_fee_percent: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDetails {
    pub room_name: String,
    pub room_type: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub guests: Option<u32>,
    pub nights: Option<u32>,
    pub location: Option<String>,
}

/// A validated booking, amounts in cents.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub email: String,
    pub amount: i64,
    pub property_owner_id: Option<String>,
    pub details: BookingDetails,
    pub platform_fee_percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentRoute {
    Simulated,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentResult {
    pub id: String,
    pub status: String,
    pub amount: i64,
    pub application_fee_amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub success: bool,
    pub message: String,
    pub payment_intent_id: String,
    pub booking_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub platform_fee: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            code: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }
}
