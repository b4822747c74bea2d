use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::{error, info};

use crate::models::booking::ErrorResponse;
use crate::models::connect::{
    AccountIdInput, AccountLinkResponse, AccountResponse, ConnectedAccountType, CreateAccountInput,
};
use crate::services::email_service::Notifier;
use crate::services::payment::interface::PaymentOperations;

use super::AppState;

const ACCOUNT_ID_REQUIRED: &str = "Account ID is required";

fn account_id(input: AccountIdInput) -> Option<String> {
    input.account_id.filter(|id| !id.trim().is_empty())
}

// POST /api/stripe/create-account
pub async fn create_account<P, M>(
    state: web::Data<AppState<P, M>>,
    input: web::Json<CreateAccountInput>,
) -> HttpResponse
where
    P: PaymentOperations + 'static,
    M: Notifier + 'static,
{
    let Some(account_type) = ConnectedAccountType::parse(input.account_type.as_deref()) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Unsupported account type"));
    };

    // Placeholder contact until the owner completes onboarding
    let email = format!("test-{}@example.com", Utc::now().timestamp_millis());

    match state
        .payments
        .create_connected_account(account_type, &email)
        .await
    {
        Ok(mut account) => {
            info!("Connected account created: {}", account.id);
            account.requirements = None;
            HttpResponse::Ok().json(AccountResponse {
                success: true,
                account,
            })
        }
        Err(e) => {
            error!("Error creating account: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.message))
        }
    }
}

// POST /api/stripe/create-account-link
pub async fn create_account_link<P, M>(
    state: web::Data<AppState<P, M>>,
    input: web::Json<AccountIdInput>,
) -> HttpResponse
where
    P: PaymentOperations + 'static,
    M: Notifier + 'static,
{
    let Some(account_id) = account_id(input.into_inner()) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(ACCOUNT_ID_REQUIRED));
    };

    let (refresh_url, return_url) = match state.config.onboarding_urls() {
        Ok(urls) => urls,
        Err(e) => {
            error!("Invalid BASE_URL {}: {}", state.config.base_url, e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Invalid onboarding URL configuration"));
        }
    };

    match state
        .payments
        .create_onboarding_link(&account_id, &refresh_url, &return_url)
        .await
    {
        Ok(url) => HttpResponse::Ok().json(AccountLinkResponse { success: true, url }),
        Err(e) => {
            error!("Error creating account link: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.message))
        }
    }
}

// GET /api/stripe/account-status?accountId=
pub async fn account_status<P, M>(
    state: web::Data<AppState<P, M>>,
    query: web::Query<AccountIdInput>,
) -> HttpResponse
where
    P: PaymentOperations + 'static,
    M: Notifier + 'static,
{
    let Some(account_id) = account_id(query.into_inner()) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(ACCOUNT_ID_REQUIRED));
    };

    match state.payments.get_connected_account(&account_id).await {
        Ok(mut account) => {
            account.created = None;
            HttpResponse::Ok().json(AccountResponse {
                success: true,
                account,
            })
        }
        Err(e) => {
            error!("Error retrieving account: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.message))
        }
    }
}
