//! Reusable UI components

mod message_card;
mod nav;
mod submission_details;

pub use message_card::*;
pub use nav::*;
pub use submission_details::*;
