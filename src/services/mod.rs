pub mod bookings;
pub mod service_estimates;
