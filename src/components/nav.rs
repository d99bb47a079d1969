//! Portal and view-tab navigation

use dioxus::prelude::*;

use crate::state::use_workflow;
use crate::workflow::{EmployeeView, ManagerView, Portal};

/// Two-button toggle between the employee and manager portals.
#[component]
pub fn PortalToggle() -> Element {
    let ctx = use_workflow();
    let active = ctx.workflow.read().portal;

    rsx! {
        nav {
            class: "portal-toggle",
            for portal in Portal::variants().iter().copied() {
                button {
                    r#type: "button",
                    class: if portal == active { "active" } else { "" },
                    onclick: move |_| ctx.switch_portal(portal),
                    {portal.label()}
                }
            }
        }
    }
}

/// Tab row for the employee portal's views.
#[component]
pub fn EmployeeTabs() -> Element {
    rsx! {
        nav {
            class: "view-tabs",
            for view in EmployeeView::variants().iter().copied() {
                EmployeeTab { view }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EmployeeTabProps {
    view: EmployeeView,
}

#[component]
fn EmployeeTab(props: EmployeeTabProps) -> Element {
    let ctx = use_workflow();
    let view = props.view;
    let workflow = ctx.workflow.read();
    let is_active = workflow.employee_view == view;
    let enabled = workflow.employee_view_enabled(view);
    drop(workflow);

    rsx! {
        button {
            r#type: "button",
            class: if is_active { "tab active" } else { "tab" },
            disabled: !enabled,
            onclick: move |_| ctx.select_employee_view(view),
            {view.label()}
        }
    }
}

/// Tab row for the manager portal's views.
#[component]
pub fn ManagerTabs() -> Element {
    rsx! {
        nav {
            class: "view-tabs",
            for view in ManagerView::variants().iter().copied() {
                ManagerTab { view }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ManagerTabProps {
    view: ManagerView,
}

#[component]
fn ManagerTab(props: ManagerTabProps) -> Element {
    let ctx = use_workflow();
    let view = props.view;
    let workflow = ctx.workflow.read();
    let is_active = workflow.manager_view == view;
    let enabled = workflow.manager_view_enabled(view);
    drop(workflow);

    rsx! {
        button {
            r#type: "button",
            class: if is_active { "tab active" } else { "tab" },
            disabled: !enabled,
            onclick: move |_| ctx.select_manager_view(view),
            {view.label()}
        }
    }
}
