pub mod aggregate;
pub mod draft;
pub mod dto;
pub mod pricing;
pub mod schedule;

pub use aggregate::{
    InvalidTransition, PaymentMethod, ReservationStatus, ReservationSummary, StatusChangeRequest,
    UpdateReservationDto,
};
pub use draft::{DraftError, ReservationDraft};
pub use dto::*;
pub use pricing::{compute_quote, PriceBreakdown, PriceQuote};
