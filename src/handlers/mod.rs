pub mod bookings;
pub mod health;
pub mod service_estimates;
