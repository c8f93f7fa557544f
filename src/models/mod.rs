pub mod booking;
pub mod estimate;
pub mod service_estimate;
pub mod validation;

pub use booking::{Booking, BookingDetails, BookingPayload, Location, NewBooking, ServiceType};
pub use estimate::ComponentEstimate;
pub use service_estimate::{NewServiceEstimate, ServiceEstimate, ServiceEstimatePayload};
pub use validation::{FieldIssue, ValidationError};
