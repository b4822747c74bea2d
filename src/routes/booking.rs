use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::models::booking::{BookingRequest, ErrorResponse, ProcessPaymentInput};
use crate::services::booking_service::{BookingError, BookingService};
use crate::services::email_service::Notifier;
use crate::services::payment::interface::PaymentOperations;

use super::AppState;

pub async fn process_payment<P, M>(
    state: web::Data<AppState<P, M>>,
    input: web::Json<ProcessPaymentInput>,
) -> HttpResponse
where
    P: PaymentOperations + 'static,
    M: Notifier + 'static,
{
    let input = input.into_inner();
    info!("Room rental payment request: {:?}", input);

    let request = match BookingRequest::try_from(input) {
        Ok(request) => request,
        Err(e) => return booking_error_response(e),
    };

    let service = BookingService::new(&state.payments, state.notifier.as_ref());

    match service.process(request).await {
        Ok(confirmation) => HttpResponse::Ok().json(confirmation),
        Err(e) => booking_error_response(e),
    }
}

fn booking_error_response(err: BookingError) -> HttpResponse {
    match err {
        BookingError::Validation(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        BookingError::Processor(e) => {
            error!(
                "Booking error: message={} code={}",
                e.message,
                e.code.as_deref().unwrap_or("none")
            );
            HttpResponse::InternalServerError().json(
                ErrorResponse::new("Booking processing failed")
                    .with_details(e.message)
                    .with_code(e.code),
            )
        }
    }
}
