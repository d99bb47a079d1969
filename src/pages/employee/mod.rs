//! Employee portal views

mod expense_form;
mod final_notification;
mod holiday_form;
mod submission_confirmation;

pub use expense_form::*;
pub use final_notification::*;
pub use holiday_form::*;
pub use submission_confirmation::*;
