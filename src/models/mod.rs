pub mod booking;
pub mod connect;
pub mod room;
