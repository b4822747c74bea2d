#![allow(dead_code)]

use actix_web::{web, App};
use std::sync::Mutex;

use room_rental_api::{
    config::AppConfig,
    models::{
        booking::PaymentResult,
        connect::{ConnectedAccount, ConnectedAccountType},
    },
    routes::{self, AppState},
    services::{
        email_service::{EmailError, Notifier},
        payment::interface::{ConnectedAccountCharge, PaymentError, PaymentOperations},
    },
};

pub const LIVE_ACCOUNT_ID: &str = "acct_1NqQ2cFz8mJk3LpXyZ";

/// Stands in for Stripe: records every call and answers from canned data.
#[derive(Default)]
pub struct FakeProcessor {
    pub charges: Mutex<Vec<ConnectedAccountCharge>>,
    pub created_accounts: Mutex<Vec<(ConnectedAccountType, String)>>,
    pub links: Mutex<Vec<(String, String, String)>>,
    pub fail_with: Option<PaymentError>,
}

impl FakeProcessor {
    pub fn failing(error: PaymentError) -> Self {
        Self {
            fail_with: Some(error),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), PaymentError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl PaymentOperations for FakeProcessor {
    async fn create_booking_payment(
        &self,
        charge: ConnectedAccountCharge,
    ) -> Result<PaymentResult, PaymentError> {
        self.charges.lock().unwrap().push(charge.clone());
        self.check()?;
        Ok(PaymentResult {
            id: "pi_3PqLiveIntent".to_string(),
            status: "requires_payment_method".to_string(),
            amount: charge.amount,
            application_fee_amount: charge.application_fee_amount,
        })
    }

    async fn create_connected_account(
        &self,
        account_type: ConnectedAccountType,
        email: &str,
    ) -> Result<ConnectedAccount, PaymentError> {
        self.created_accounts
            .lock()
            .unwrap()
            .push((account_type, email.to_string()));
        self.check()?;
        Ok(ConnectedAccount {
            id: LIVE_ACCOUNT_ID.to_string(),
            account_type: Some(
                serde_json::to_value(account_type)
                    .unwrap()
                    .as_str()
                    .unwrap()
                    .to_string(),
            ),
            country: Some("US".to_string()),
            email: Some(email.to_string()),
            charges_enabled: false,
            details_submitted: false,
            created: Some(1_700_000_000),
            requirements: Some(serde_json::json!({ "currently_due": ["external_account"] })),
        })
    }

    async fn create_onboarding_link(
        &self,
        account_id: &str,
        refresh_url: &str,
        return_url: &str,
    ) -> Result<String, PaymentError> {
        self.links.lock().unwrap().push((
            account_id.to_string(),
            refresh_url.to_string(),
            return_url.to_string(),
        ));
        self.check()?;
        Ok(format!("https://connect.stripe.com/setup/e/{}/onboard", account_id))
    }

    async fn get_connected_account(
        &self,
        account_id: &str,
    ) -> Result<ConnectedAccount, PaymentError> {
        self.check()?;
        Ok(ConnectedAccount {
            id: account_id.to_string(),
            account_type: Some("express".to_string()),
            country: Some("US".to_string()),
            email: Some("owner@example.com".to_string()),
            charges_enabled: true,
            details_submitted: true,
            created: Some(1_700_000_000),
            requirements: Some(serde_json::json!({ "currently_due": [] })),
        })
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    pub sent: Mutex<Vec<(String, String, String)>>,
    pub fail: bool,
}

impl Notifier for FakeNotifier {
    async fn send_html(&self, to_email: &str, subject: &str, html: &str) -> Result<(), EmailError> {
        self.sent
            .lock()
            .unwrap()
            .push((to_email.to_string(), subject.to_string(), html.to_string()));
        if self.fail {
            return Err(EmailError::RequestError("connection refused".to_string()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub state: web::Data<AppState<FakeProcessor, FakeNotifier>>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(FakeProcessor::default(), Some(FakeNotifier::default()))
    }

    pub fn with(processor: FakeProcessor, notifier: Option<FakeNotifier>) -> Self {
        Self::with_config(processor, notifier, Self::config())
    }

    pub fn config() -> AppConfig {
        AppConfig {
            base_url: "https://rooms.example.com".to_string(),
            stripe_secret_key: Some("sk_test_51FakeKeyForTests".to_string()),
            ..Default::default()
        }
    }

    pub fn with_config(
        processor: FakeProcessor,
        notifier: Option<FakeNotifier>,
        config: AppConfig,
    ) -> Self {
        Self {
            state: web::Data::new(AppState::new(processor, notifier, config)),
        }
    }

    pub fn charges(&self) -> Vec<ConnectedAccountCharge> {
        self.state.payments.charges.lock().unwrap().clone()
    }

    pub fn sent_emails(&self) -> Vec<(String, String, String)> {
        match &self.state.notifier {
            Some(notifier) => notifier.sent.lock().unwrap().clone(),
            None => Vec::new(),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::configure::<FakeProcessor, FakeNotifier>)
    }
}
