//! Manager portal views

mod action_confirmation;
mod approval_email;

pub use action_confirmation::*;
pub use approval_email::*;
