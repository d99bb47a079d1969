//! Approval request email preview
//!
//! The manager's inbox view: a preview of the email asking for a decision,
//! with the decision controls inline.

use dioxus::prelude::*;

use crate::components::{MessageCard, SubmissionDetailList};
use crate::state::use_workflow;
use crate::types::Decision;

#[component]
pub fn ApprovalRequestEmailView() -> Element {
    let ctx = use_workflow();
    let mut manager_name = use_signal(|| "Alex Johnson".to_string());
    let mut note = use_signal(String::new);

    let record = ctx.workflow.read().submission.clone();
    let Some(record) = record else {
        return rsx! {
            MessageCard {
                title: "Nothing to Review",
                body: "Once an employee submits a request, it will appear here for your review and action."
            }
        };
    };

    let decide = move |decision: Decision| {
        ctx.record_decision(decision, &manager_name(), &note());
    };

    let greeting = {
        let name = manager_name();
        if name.trim().is_empty() {
            "there".to_string()
        } else {
            name
        }
    };
    let subject = record.approval_subject();
    let requester = record.submitter_name().to_string();
    let kind_label = record.kind().label();

    rsx! {
        article {
            class: "card email-card",
            header {
                h2 { "Approval Request Email (Preview)" }
                p { "This is the email sent to the manager asking for a decision." }
            }

            section {
                class: "email-card__meta",
                div {
                    span { class: "meta-label", "To" }
                    input {
                        r#type: "text",
                        value: "{manager_name}",
                        oninput: move |e| manager_name.set(e.value())
                    }
                }
                div {
                    span { class: "meta-label", "Subject" }
                    span { "{subject}" }
                }
            }

            section {
                class: "email-card__body",
                p { "Hello {greeting}," }
                p {
                    "{requester} has submitted a {kind_label} for your review. The key details are below."
                }

                SubmissionDetailList { record: record.clone() }

                p {
                    "Please approve or decline the request. An optional note will be shared with the submitter."
                }

                label {
                    class: "form-field form-field--full",
                    span { "Optional note to submitter" }
                    textarea {
                        rows: "3",
                        value: "{note}",
                        oninput: move |e| note.set(e.value()),
                        placeholder: "Let the submitter know why you approved or declined."
                    }
                }
            }

            footer {
                class: "form-card__footer",
                button {
                    r#type: "button",
                    onclick: move |_| decide(Decision::Declined),
                    "Decline"
                }
                button {
                    r#type: "button",
                    class: "primary",
                    onclick: move |_| decide(Decision::Approved),
                    "Approve"
                }
            }
        }
    }
}
