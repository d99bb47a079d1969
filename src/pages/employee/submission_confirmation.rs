//! Submission confirmation page

use dioxus::prelude::*;

use crate::components::{or_none, MessageCard};
use crate::state::use_workflow;
use crate::types::SubmissionPayload;
use crate::workflow::EmployeeView;

#[component]
pub fn SubmissionConfirmationPage() -> Element {
    let ctx = use_workflow();

    let record = ctx.workflow.read().submission.clone();
    let Some(record) = record else {
        return rsx! {
            MessageCard {
                title: "No Submission Yet",
                body: "Select a form to get started, then submit it to see the confirmation."
            }
        };
    };

    let kind_label = record.kind().label();
    let reference = record.id.to_string();
    let submitted_at = record.submitted_at.format("%b %-d, %Y %-I:%M %p UTC").to_string();

    let summary = match &record.payload {
        SubmissionPayload::Holiday(data) => {
            let notes = or_none(&data.reason).to_string();
            rsx! {
                div {
                    class: "summary",
                    h3 { "Holiday summary" }
                    dl {
                        div {
                            dt { "Employee" }
                            dd { "{data.employee_name}" }
                        }
                        div {
                            dt { "Department" }
                            dd { "{data.department}" }
                        }
                        div {
                            dt { "Dates" }
                            dd { "{data.start_date} to {data.end_date}" }
                        }
                        div {
                            dt { "Notes" }
                            dd { "{notes}" }
                        }
                    }
                }
            }
        }
        SubmissionPayload::Expense(data) => {
            let amount = data.formatted_amount();
            let notes = or_none(&data.notes).to_string();
            rsx! {
                div {
                    class: "summary",
                    h3 { "Expense summary" }
                    dl {
                        div {
                            dt { "Claimant" }
                            dd { "{data.claimant_name}" }
                        }
                        div {
                            dt { "Date" }
                            dd { "{data.expense_date}" }
                        }
                        div {
                            dt { "Category" }
                            dd { "{data.category}" }
                        }
                        div {
                            dt { "Amount" }
                            dd { "{amount}" }
                        }
                        div {
                            dt { "Notes" }
                            dd { "{notes}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "card message-card",
            h2 { "Submission Received" }
            p {
                "Thanks for sending your {kind_label}. We've packaged the details below and will notify you when your manager acts on it."
            }

            {summary}

            p {
                class: "submission-meta",
                "Reference {reference}, submitted {submitted_at}."
            }

            footer {
                class: "form-card__footer",
                button {
                    r#type: "button",
                    onclick: move |_| ctx.start_new_submission(),
                    "Submit another form"
                }
                button {
                    r#type: "button",
                    class: "primary",
                    onclick: move |_| ctx.select_employee_view(EmployeeView::FinalNotification),
                    "View final notification email"
                }
            }
        }
    }
}
