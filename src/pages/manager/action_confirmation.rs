//! Action confirmation page

use dioxus::prelude::*;

use crate::components::MessageCard;
use crate::state::use_workflow;

#[component]
pub fn ActionConfirmationPage() -> Element {
    let ctx = use_workflow();

    let workflow = ctx.workflow.read();
    let Some(decision) = workflow.decision.clone() else {
        return rsx! {
            MessageCard {
                title: "No Action Recorded",
                body: "Approve or decline a request to see the confirmation the manager view shows after taking action."
            }
        };
    };
    let submitter = workflow
        .submitter_name()
        .unwrap_or("the submitter")
        .to_string();
    drop(workflow);

    let outcome = decision.decision.label();
    let decided_at = decision.decided_at.format("%b %-d, %Y %-I:%M %p UTC").to_string();

    rsx! {
        section {
            class: "card message-card",
            h2 { "Action Recorded" }
            p {
                strong { "{decision.decided_by}" }
                " {outcome} the request for {submitter} on {decided_at}."
            }

            if let Some(note) = decision.note.clone() {
                p {
                    strong { "Shared note:" }
                    " {note}"
                }
            }

            p {
                "The final notification email is ready for the employee. You can return to the approval queue to review other requests."
            }

            footer {
                class: "form-card__footer",
                button {
                    r#type: "button",
                    onclick: move |_| ctx.back_to_approvals(),
                    "Back to approval requests"
                }
            }
        }
    }
}
