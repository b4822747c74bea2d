use std::str::FromStr;

use log::{error, info};
use stripe::{
    AccountId, AccountLink, AccountLinkType, CreateAccount, CreateAccountLink,
    CreatePaymentIntent, Currency, PaymentIntent, StripeError,
};

use crate::models::{
    booking::PaymentResult,
    connect::{ConnectedAccount, ConnectedAccountType},
};
use crate::services::payment::interface::{ConnectedAccountCharge, PaymentError, PaymentOperations};

const ACCOUNT_COUNTRY: &str = "US";

pub struct StripeProvider {
    pub client: stripe::Client,
}

impl StripeProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: stripe::Client::new(api_key.into()),
        }
    }
}

fn parse_account_id(account_id: &str) -> Result<AccountId, PaymentError> {
    AccountId::from_str(account_id).map_err(|_| {
        PaymentError::new(format!("Invalid connected account id: {}", account_id))
            .with_code("resource_missing")
    })
}

impl From<StripeError> for PaymentError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Stripe(request_error) => {
                let message = request_error
                    .message
                    .clone()
                    .unwrap_or_else(|| request_error.to_string());
                // ErrorCode serializes to the processor's snake_case code
                let code = request_error
                    .code
                    .and_then(|code| serde_json::to_value(code).ok())
                    .and_then(|value| value.as_str().map(str::to_string))
                    .or(request_error.decline_code);

                PaymentError { message, code }
            }
            other => PaymentError::new(other.to_string()),
        }
    }
}

impl PaymentOperations for StripeProvider {
    async fn create_booking_payment(
        &self,
        charge: ConnectedAccountCharge,
    ) -> Result<PaymentResult, PaymentError> {
        let account_id = parse_account_id(&charge.connected_account_id)?;

        let mut create_intent = CreatePaymentIntent::new(charge.amount, Currency::USD);
        create_intent.application_fee_amount = Some(charge.application_fee_amount);
        create_intent.receipt_email = Some(charge.receipt_email.as_str());
        create_intent.description = Some(charge.description.as_str());
        create_intent.metadata = Some(charge.metadata.clone());

        // Request is made on behalf of the connected account
        let client = self.client.clone().with_stripe_account(account_id);

        match PaymentIntent::create(&client, create_intent).await {
            Ok(intent) => {
                info!("Payment intent created: {}", intent.id);
                Ok(PaymentResult {
                    id: intent.id.to_string(),
                    status: intent.status.as_str().to_string(),
                    amount: intent.amount,
                    application_fee_amount: intent
                        .application_fee_amount
                        .unwrap_or(charge.application_fee_amount),
                })
            }
            Err(e) => {
                error!("Error creating payment intent: {:?}", e);
                Err(e.into())
            }
        }
    }

    async fn create_connected_account(
        &self,
        account_type: ConnectedAccountType,
        email: &str,
    ) -> Result<ConnectedAccount, PaymentError> {
        let mut create_account = CreateAccount::new();
        create_account.type_ = Some(account_type.into());
        create_account.country = Some(ACCOUNT_COUNTRY);
        create_account.email = Some(email);

        match stripe::Account::create(&self.client, create_account).await {
            Ok(account) => Ok(account.into()),
            Err(e) => {
                error!("Error creating account: {:?}", e);
                Err(e.into())
            }
        }
    }

    async fn create_onboarding_link(
        &self,
        account_id: &str,
        refresh_url: &str,
        return_url: &str,
    ) -> Result<String, PaymentError> {
        let account_id = parse_account_id(account_id)?;

        let mut create_link = CreateAccountLink::new(account_id, AccountLinkType::AccountOnboarding);
        create_link.refresh_url = Some(refresh_url);
        create_link.return_url = Some(return_url);

        match AccountLink::create(&self.client, create_link).await {
            Ok(link) => Ok(link.url),
            Err(e) => {
                error!("Error creating account link: {:?}", e);
                Err(e.into())
            }
        }
    }

    async fn get_connected_account(
        &self,
        account_id: &str,
    ) -> Result<ConnectedAccount, PaymentError> {
        let account_id = parse_account_id(account_id)?;

        match stripe::Account::retrieve(&self.client, &account_id, &[]).await {
            Ok(account) => Ok(account.into()),
            Err(e) => {
                error!("Error retrieving account: {:?}", e);
                Err(e.into())
            }
        }
    }
}
