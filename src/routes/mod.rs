use actix_web::{error::InternalError, web, HttpResponse};

use crate::config::AppConfig;
use crate::models::booking::ErrorResponse;
use crate::services::email_service::Notifier;
use crate::services::payment::interface::PaymentOperations;

pub mod booking;
pub mod connect;
pub mod health;
pub mod rooms;

/// Shared, read-only state handed to every handler.
pub struct AppState<P, M> {
    pub payments: P,
    pub notifier: Option<M>,
    pub config: AppConfig,
}

impl<P, M> AppState<P, M> {
    pub fn new(payments: P, notifier: Option<M>, config: AppConfig) -> Self {
        Self {
            payments,
            notifier,
            config,
        }
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new("Invalid request body").with_details(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Registers every route. Generic so tests can swap in fake collaborators.
pub fn configure<P, M>(cfg: &mut web::ServiceConfig)
where
    P: PaymentOperations + 'static,
    M: Notifier + 'static,
{
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check::<P, M>))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/stripe")
                        .route(
                            "/process-payment",
                            web::post().to(booking::process_payment::<P, M>),
                        )
                        .route(
                            "/create-account",
                            web::post().to(connect::create_account::<P, M>),
                        )
                        .route(
                            "/create-account-link",
                            web::post().to(connect::create_account_link::<P, M>),
                        )
                        .route(
                            "/account-status",
                            web::get().to(connect::account_status::<P, M>),
                        ),
                )
                .service(
                    web::scope("/rooms")
                        .route("", web::get().to(rooms::list_rooms))
                        .route("/{id}/quote", web::post().to(rooms::quote_room)),
                ),
        );
}
