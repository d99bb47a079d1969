//! Detail list for the active submission
//!
//! Shared by the two email previews, which both list the key fields of the
//! submission in the message body.

use dioxus::prelude::*;

use crate::types::{SubmissionPayload, SubmissionRecord};

/// Render optional free text, falling back to "None" when blank.
pub(crate) fn or_none(text: &str) -> &str {
    if text.trim().is_empty() {
        "None"
    } else {
        text
    }
}

#[component]
pub fn SubmissionDetailList(record: SubmissionRecord) -> Element {
    match &record.payload {
        SubmissionPayload::Holiday(data) => {
            let notes = or_none(&data.reason).to_string();
            rsx! {
                ul {
                    li { "Dates: {data.start_date} to {data.end_date}" }
                    li { "Department: {data.department}" }
                    li { "Notes: {notes}" }
                }
            }
        }
        SubmissionPayload::Expense(data) => {
            let amount = data.formatted_amount();
            let notes = or_none(&data.notes).to_string();
            rsx! {
                ul {
                    li { "Date: {data.expense_date}" }
                    li { "Category: {data.category}" }
                    li { "Amount: {amount}" }
                    li { "Notes: {notes}" }
                }
            }
        }
    }
}
