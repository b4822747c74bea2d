use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use room_rental_api::{
    config::AppConfig,
    routes::{self, AppState},
    services::{email_service::EmailService, stripe::provider::StripeProvider},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = AppConfig::from_env();

    let stripe_key = match &config.stripe_secret_key {
        Some(key) => key.clone(),
        None => {
            warn!("STRIPE_SECRET_KEY not set; only demo bookings will succeed");
            String::new()
        }
    };
    let payments = StripeProvider::new(stripe_key);

    let notifier = match (&config.sendgrid_api_key, &config.from_email) {
        (Some(api_key), Some(from_email)) => Some(EmailService::new(api_key, from_email)),
        _ => {
            info!("SENDGRID_API_KEY or FROM_EMAIL not set; confirmation emails disabled");
            None
        }
    };

    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(AppState::new(payments, notifier, config));

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure::<StripeProvider, EmailService>)
    })
    .bind((host, port))?
    .run()
    .await
}
