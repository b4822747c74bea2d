use actix_web::{web, HttpResponse, Responder};

use crate::models::booking::ErrorResponse;
use crate::models::room::{find_room, QuoteInput, QuoteResponse, ROOMS};
use crate::services::fee_service::{FeeService, DEFAULT_PLATFORM_FEE_PERCENT};

pub async fn list_rooms() -> impl Responder {
    HttpResponse::Ok().json(&ROOMS)
}

// POST /api/rooms/{id}/quote
pub async fn quote_room(path: web::Path<u32>, input: web::Json<QuoteInput>) -> HttpResponse {
    let Some(room) = find_room(path.into_inner()) else {
        return HttpResponse::NotFound().json(ErrorResponse::new("Room not found"));
    };

    let input = input.into_inner();

    if let Some(guests) = input.guests {
        if guests == 0 || guests > room.max_guests {
            return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
                "Guest count must be between 1 and {}",
                room.max_guests
            )));
        }
    }

    let nights = match FeeService::nights_between(&input.check_in, &input.check_out) {
        Ok(nights) => nights,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                "Please select valid check-in and check-out dates",
            ))
        }
    };

    let fee_percent = input
        .platform_fee_percent
        .unwrap_or(DEFAULT_PLATFORM_FEE_PERCENT);

    match FeeService::quote_stay(room.nightly_rate_cents(), nights, fee_percent) {
        Ok(quote) => HttpResponse::Ok().json(QuoteResponse {
            success: true,
            room_id: room.id,
            nights: quote.nights,
            subtotal: FeeService::to_decimal(quote.subtotal),
            service_fee: FeeService::to_decimal(quote.fee),
            total: FeeService::to_decimal(quote.total),
        }),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())),
    }
}
