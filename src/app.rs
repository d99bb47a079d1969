//! Root application component

use dioxus::prelude::*;

use crate::components::{EmployeeTabs, ManagerTabs, PortalToggle};
use crate::pages::employee::{
    ExpenseClaimForm, FinalNotificationEmailView, HolidayRequestForm, SubmissionConfirmationPage,
};
use crate::pages::manager::{ActionConfirmationPage, ApprovalRequestEmailView};
use crate::state::{use_workflow, WorkflowProvider};
use crate::workflow::{EmployeeView, ManagerView, Portal};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Workflow context provider wraps the entire app
        WorkflowProvider {
            Shell {}
        }
    }
}

/// Page shell: header with the portal toggle, the active portal's tabs and
/// view, and the footer showing who the current submitter is.
#[component]
fn Shell() -> Element {
    let ctx = use_workflow();
    let workflow = ctx.workflow.read();
    let portal = workflow.portal;
    let employee_view = workflow.employee_view;
    let manager_view = workflow.manager_view;
    let submitter = match workflow.submitter_name() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => "- no submission recorded -".to_string(),
    };
    drop(workflow);

    let active_view = match portal {
        Portal::Employee => match employee_view {
            EmployeeView::HolidayForm => rsx! { HolidayRequestForm {} },
            EmployeeView::ExpenseForm => rsx! { ExpenseClaimForm {} },
            EmployeeView::SubmissionConfirmation => rsx! { SubmissionConfirmationPage {} },
            EmployeeView::FinalNotification => rsx! { FinalNotificationEmailView {} },
        },
        Portal::Manager => match manager_view {
            ManagerView::ApprovalEmail => rsx! { ApprovalRequestEmailView {} },
            ManagerView::ActionConfirmation => rsx! { ActionConfirmationPage {} },
        },
    };

    rsx! {
        div {
            class: "app-shell",

            header {
                class: "app-header",
                h1 { "Auto-Approve Workflow Sandbox" }
                p {
                    "Explore the employee submission and manager approval journey in a single-page prototype."
                }
                PortalToggle {}
            }

            main {
                if portal == Portal::Employee {
                    EmployeeTabs {}
                } else {
                    ManagerTabs {}
                }
                {active_view}
            }

            footer {
                class: "app-footer",
                p {
                    "Current submitter: "
                    strong { "{submitter}" }
                }
            }
        }
    }
}
