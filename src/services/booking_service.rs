use std::collections::HashMap;

use log::{error, info, warn};
use rand::{distributions::Alphanumeric, Rng};

use crate::models::booking::{
    BookingConfirmation, BookingRequest, PaymentResult, PaymentRoute, ProcessPaymentInput,
};
use crate::services::email_service::{
    booking_confirmation_html, booking_confirmation_subject, Notifier,
};
use crate::services::fee_service::{FeeBreakdown, FeeService, DEFAULT_PLATFORM_FEE_PERCENT};
use crate::services::payment::interface::{ConnectedAccountCharge, PaymentError, PaymentOperations};

pub const DEMO_ACCOUNT_PREFIX: &str = "acct_demo";
/// Account ids shorter than this are assumed to be placeholders, not real connected accounts.
pub const MIN_LIVE_ACCOUNT_ID_LEN: usize = 20;

const TOKEN_LEN: usize = 9;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required booking information";
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid booking amount";
pub const INVALID_FEE_MESSAGE: &str = "Invalid platform fee percentage";

#[derive(Debug)]
pub enum BookingError {
    Validation(&'static str),
    Processor(PaymentError),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::Validation(message) => write!(f, "{}", message),
            BookingError::Processor(err) => write!(f, "Payment processor error: {}", err),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<PaymentError> for BookingError {
    fn from(err: PaymentError) -> Self {
        BookingError::Processor(err)
    }
}

impl TryFrom<ProcessPaymentInput> for BookingRequest {
    type Error = BookingError;

    fn try_from(input: ProcessPaymentInput) -> Result<Self, Self::Error> {
        let email = input.email.filter(|e| !e.trim().is_empty());
        let amount = input.amount.filter(|a| !is_blank_amount(a));

        let (email, amount, details) = match (email, amount, input.booking_details) {
            (Some(email), Some(amount), Some(details)) => (email, amount, details),
            _ => return Err(BookingError::Validation(MISSING_FIELDS_MESSAGE)),
        };

        let amount = FeeService::parse_amount(&amount)
            .map_err(|_| BookingError::Validation(INVALID_AMOUNT_MESSAGE))?;

        let platform_fee_percent = input
            .platform_fee_percent
            .unwrap_or(DEFAULT_PLATFORM_FEE_PERCENT);

        Ok(BookingRequest {
            email,
            amount,
            property_owner_id: input.property_owner_id,
            details,
            platform_fee_percent,
        })
    }
}

/// `null`, `""` and `0` count as a missing amount.
fn is_blank_amount(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

pub fn is_simulated_account(property_owner_id: Option<&str>) -> bool {
    match property_owner_id {
        None => true,
        Some(id) => {
            id.starts_with(DEMO_ACCOUNT_PREFIX) || id.chars().count() < MIN_LIVE_ACCOUNT_ID_LEN
        }
    }
}

pub fn route_for(request: &BookingRequest) -> PaymentRoute {
    if is_simulated_account(request.property_owner_id.as_deref()) {
        PaymentRoute::Simulated
    } else {
        PaymentRoute::Live
    }
}

fn random_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

pub struct BookingService<'a, P, M> {
    payments: &'a P,
    notifier: Option<&'a M>,
}

impl<'a, P, M> BookingService<'a, P, M>
where
    P: PaymentOperations,
    M: Notifier,
{
    pub fn new(payments: &'a P, notifier: Option<&'a M>) -> Self {
        Self { payments, notifier }
    }

    pub async fn process(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, BookingError> {
        let breakdown = FeeService::split_total(request.amount, request.platform_fee_percent)
            .map_err(|_| BookingError::Validation(INVALID_FEE_MESSAGE))?;

        info!(
            "Payment breakdown: total={} platform_fee={} owner_receives={}",
            FeeService::to_decimal(breakdown.total),
            FeeService::to_decimal(breakdown.fee),
            FeeService::to_decimal(breakdown.recipient)
        );

        match route_for(&request) {
            PaymentRoute::Simulated => Ok(self.simulate(&request, &breakdown).await),
            PaymentRoute::Live => self.charge(&request, &breakdown).await,
        }
    }

    async fn simulate(
        &self,
        request: &BookingRequest,
        breakdown: &FeeBreakdown,
    ) -> BookingConfirmation {
        info!("Demo mode - simulating room rental payment");

        let payment = PaymentResult {
            id: format!("pi_rental_{}", random_token()),
            status: "succeeded".to_string(),
            amount: breakdown.total,
            application_fee_amount: breakdown.fee,
        };

        self.notify(request, &payment, true).await;

        BookingConfirmation {
            success: true,
            message: "Room booking confirmed (Demo)".to_string(),
            payment_intent_id: payment.id,
            booking_id: format!("booking_{}", random_token()),
            amount_paid: FeeService::to_decimal(breakdown.total),
            platform_fee: FeeService::to_decimal(breakdown.fee),
            note: Some("This was a simulated booking for demo purposes".to_string()),
        }
    }

    async fn charge(
        &self,
        request: &BookingRequest,
        breakdown: &FeeBreakdown,
    ) -> Result<BookingConfirmation, BookingError> {
        let owner = request.property_owner_id.clone().unwrap_or_default();
        info!("Processing Stripe Connect payment for account {}", owner);

        let payment = self
            .payments
            .create_booking_payment(connected_account_charge(request, breakdown, owner))
            .await
            .map_err(|e| {
                error!("Booking payment failed: {}", e);
                BookingError::Processor(e)
            })?;

        self.notify(request, &payment, false).await;

        Ok(BookingConfirmation {
            success: true,
            message: "Room booking confirmed".to_string(),
            payment_intent_id: payment.id,
            booking_id: format!("booking_{}", random_token()),
            amount_paid: FeeService::to_decimal(breakdown.total),
            platform_fee: FeeService::to_decimal(breakdown.fee),
            note: None,
        })
    }

    async fn notify(&self, request: &BookingRequest, payment: &PaymentResult, demo: bool) {
        let Some(notifier) = self.notifier else {
            return;
        };

        let subject = booking_confirmation_subject(&request.details);
        let html = booking_confirmation_html(
            &request.details,
            payment.amount,
            payment.application_fee_amount,
            &payment.id,
            demo,
        );

        match notifier.send_html(&request.email, &subject, &html).await {
            Ok(()) => info!("Booking confirmation email sent to {}", request.email),
            Err(e) => warn!("Booking confirmation email failed: {}", e),
        }
    }
}

fn connected_account_charge(
    request: &BookingRequest,
    breakdown: &FeeBreakdown,
    owner: String,
) -> ConnectedAccountCharge {
    let details = &request.details;
    let guests = details.guests.map(|g| g.to_string()).unwrap_or_default();
    let nights = details.nights.map(|n| n.to_string()).unwrap_or_default();

    let metadata = HashMap::from([
        ("booking_type".to_string(), "room_rental".to_string()),
        ("room_name".to_string(), details.room_name.clone()),
        ("check_in".to_string(), details.check_in.clone()),
        ("check_out".to_string(), details.check_out.clone()),
        ("guests".to_string(), guests),
        ("nights".to_string(), nights.clone()),
        ("property_owner".to_string(), owner.clone()),
    ]);

    ConnectedAccountCharge {
        amount: breakdown.total,
        application_fee_amount: breakdown.fee,
        connected_account_id: owner,
        receipt_email: request.email.clone(),
        description: format!("Room rental: {} ({} nights)", details.room_name, nights),
        metadata,
    }
}
