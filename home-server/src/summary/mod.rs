//! Response summarizer.
//!
//! Turns the trip patterns returned by the journey planner into three
//! pieces of text: a short SMS line, the details of the next trip, and the
//! details of every candidate trip.

mod error;
mod render;

pub use error::SummaryError;
pub use render::{ARRIVED_MARKER, Summarizer, TravelSummary};
