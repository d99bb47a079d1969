//! Global state management
//!
//! One [`Workflow`] lives in a signal and is provided to the whole tree via
//! context. Components mutate it through the methods here, which also log
//! the transitions.

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::types::{Decision, ExpenseClaimData, HolidayRequestData, ManagerDecision};
use crate::workflow::{EmployeeView, ManagerView, Portal, Workflow};

/// Shared handle to the session state. Copy, like the signal it wraps.
#[derive(Clone, Copy)]
pub struct WorkflowContext {
    pub workflow: Signal<Workflow>,
}

impl WorkflowContext {
    pub fn new() -> Self {
        Self {
            workflow: Signal::new(Workflow::new()),
        }
    }

    pub fn switch_portal(&self, portal: Portal) {
        let mut workflow = self.workflow;
        workflow.with_mut(|w| w.switch_portal(portal));
    }

    pub fn submit_holiday(&self, data: HolidayRequestData) {
        let mut workflow = self.workflow;
        workflow.with_mut(|w| {
            let record = w.submit_holiday(data);
            info!(id = %record.id, submitter = record.submitter_name(), "holiday request submitted");
        });
    }

    pub fn submit_expense(&self, data: ExpenseClaimData) {
        let mut workflow = self.workflow;
        workflow.with_mut(|w| {
            let record = w.submit_expense(data);
            info!(id = %record.id, submitter = record.submitter_name(), "expense claim submitted");
        });
    }

    /// Record the manager's decision from the approval email form. The
    /// decision buttons only render when a submission exists, so a guard
    /// rejection here is logged and otherwise ignored.
    pub fn record_decision(&self, decision: Decision, decided_by: &str, note: &str) {
        let decision = ManagerDecision::record(decision, decided_by, note);
        let mut workflow = self.workflow;
        workflow.with_mut(|w| match w.record_decision(decision) {
            Ok(()) => info!("manager decision recorded"),
            Err(err) => warn!(%err, "decision rejected"),
        });
    }

    pub fn select_employee_view(&self, view: EmployeeView) {
        let mut workflow = self.workflow;
        workflow.with_mut(|w| {
            if let Err(err) = w.select_employee_view(view) {
                warn!(%err, ?view, "employee view rejected");
            }
        });
    }

    pub fn select_manager_view(&self, view: ManagerView) {
        let mut workflow = self.workflow;
        workflow.with_mut(|w| {
            if let Err(err) = w.select_manager_view(view) {
                warn!(%err, ?view, "manager view rejected");
            }
        });
    }

    pub fn start_new_submission(&self) {
        let mut workflow = self.workflow;
        workflow.with_mut(|w| w.start_new_submission());
    }

    pub fn back_to_approvals(&self) {
        let mut workflow = self.workflow;
        workflow.with_mut(|w| w.back_to_approvals());
    }
}

/// Provider component that wraps the app.
#[component]
pub fn WorkflowProvider(children: Element) -> Element {
    use_context_provider(WorkflowContext::new);
    children
}

/// Hook to access the workflow context.
pub fn use_workflow() -> WorkflowContext {
    use_context::<WorkflowContext>()
}
