pub mod booking_service;
pub mod email_service;
pub mod fee_service;
pub mod payment;
pub mod stripe;
