use std::collections::HashMap;

use crate::models::{
    booking::PaymentResult,
    connect::{ConnectedAccount, ConnectedAccountType},
};

/// Failure reported by the payment processor, carried back to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentError {
    pub message: String,
    pub code: Option<String>,
}

impl PaymentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for PaymentError {}

/// A charge on a connected account where the platform keeps `application_fee_amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedAccountCharge {
    pub amount: i64,
    pub application_fee_amount: i64,
    pub connected_account_id: String,
    pub receipt_email: String,
    pub description: String,
    pub metadata: HashMap<String, String>,
}

pub trait PaymentOperations {
    async fn create_booking_payment(
        &self,
        charge: ConnectedAccountCharge,
    ) -> Result<PaymentResult, PaymentError>;

    async fn create_connected_account(
        &self,
        account_type: ConnectedAccountType,
        email: &str,
    ) -> Result<ConnectedAccount, PaymentError>;

    async fn create_onboarding_link(
        &self,
        account_id: &str,
        refresh_url: &str,
        return_url: &str,
    ) -> Result<String, PaymentError>;

    async fn get_connected_account(&self, account_id: &str)
        -> Result<ConnectedAccount, PaymentError>;
}
