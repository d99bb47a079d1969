//! Final notification email preview

use dioxus::prelude::*;

use crate::components::{MessageCard, SubmissionDetailList};
use crate::state::use_workflow;
use crate::types::notification_headline;

#[component]
pub fn FinalNotificationEmailView() -> Element {
    let ctx = use_workflow();

    let workflow = ctx.workflow.read();
    let Some(record) = workflow.submission.clone() else {
        return rsx! {
            MessageCard {
                title: "No Submission Yet",
                body: "Submit a holiday request or expense claim to generate the final notification that your employee receives."
            }
        };
    };
    let decision = workflow.decision.clone();
    drop(workflow);

    let to = record.submitter_name().to_string();
    let subject = record.notification_subject();
    let headline = notification_headline(decision.as_ref().map(|d| d.decision));
    let note = decision.and_then(|d| d.note);

    rsx! {
        article {
            class: "card email-card",
            header {
                h2 { "Final Notification Email (Preview)" }
                p { "This is the message the submitter receives after the workflow completes." }
            }

            section {
                class: "email-card__meta",
                div {
                    span { class: "meta-label", "To" }
                    span { "{to}" }
                }
                div {
                    span { class: "meta-label", "Subject" }
                    span { "{subject}" }
                }
            }

            section {
                class: "email-card__body",
                p { "{headline}" }

                if let Some(note) = note {
                    blockquote {
                        strong { "Manager note:" }
                        " {note}"
                    }
                }

                p { "Submission details:" }
                SubmissionDetailList { record: record.clone() }

                p {
                    "If anything looks incorrect, reply directly to this message so your manager can follow up with you."
                }
            }

            footer {
                class: "form-card__footer",
                button {
                    r#type: "button",
                    onclick: move |_| ctx.start_new_submission(),
                    "Start a new submission"
                }
            }
        }
    }
}
