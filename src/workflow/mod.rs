//! The view-state machine behind the sandbox
//!
//! Two independent sub-machines, one per portal, share the submission and
//! decision data. Everything here is synchronous and pure so the transition
//! rules are testable without a DOM; the component layer is thin glue over
//! this struct (see `crate::state`).

use thiserror::Error;

use crate::types::{
    Decision, ExpenseClaimData, HolidayRequestData, ManagerDecision, SubmissionPayload,
    SubmissionRecord,
};

/// Top-level audience context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Portal {
    #[default]
    Employee,
    Manager,
}

impl Portal {
    pub fn label(&self) -> &'static str {
        match self {
            Portal::Employee => "Employee views",
            Portal::Manager => "Manager views",
        }
    }

    pub fn variants() -> &'static [Portal] {
        &[Portal::Employee, Portal::Manager]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmployeeView {
    #[default]
    HolidayForm,
    ExpenseForm,
    SubmissionConfirmation,
    FinalNotification,
}

impl EmployeeView {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeView::HolidayForm => "Holiday Request Form",
            EmployeeView::ExpenseForm => "Expense Claim Form",
            EmployeeView::SubmissionConfirmation => "Submission Confirmation",
            EmployeeView::FinalNotification => "Final Notification Email",
        }
    }

    pub fn variants() -> &'static [EmployeeView] {
        &[
            EmployeeView::HolidayForm,
            EmployeeView::ExpenseForm,
            EmployeeView::SubmissionConfirmation,
            EmployeeView::FinalNotification,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ManagerView {
    #[default]
    ApprovalEmail,
    ActionConfirmation,
}

impl ManagerView {
    pub fn label(&self) -> &'static str {
        match self {
            ManagerView::ApprovalEmail => "Approval Request Email",
            ManagerView::ActionConfirmation => "Action Confirmation Page",
        }
    }

    pub fn variants() -> &'static [ManagerView] {
        &[ManagerView::ApprovalEmail, ManagerView::ActionConfirmation]
    }
}

/// Rejected transitions. The UI disables the controls that would trigger
/// these, so they only surface when the machine is driven directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("view requires an active submission")]
    NoSubmission,
    #[error("view requires a recorded decision")]
    NoDecision,
}

/// Whole-session state: the selected portal, each portal's active view, and
/// the shared submission/decision slots.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Workflow {
    pub portal: Portal,
    pub employee_view: EmployeeView,
    pub manager_view: ManagerView,
    pub submission: Option<SubmissionRecord>,
    pub decision: Option<ManagerDecision>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Portal switching only changes which sub-machine is displayed.
    pub fn switch_portal(&mut self, portal: Portal) {
        self.portal = portal;
    }

    pub fn submit_holiday(&mut self, data: HolidayRequestData) -> &SubmissionRecord {
        self.submit(SubmissionPayload::Holiday(data))
    }

    pub fn submit_expense(&mut self, data: ExpenseClaimData) -> &SubmissionRecord {
        self.submit(SubmissionPayload::Expense(data))
    }

    /// Replace the active submission. Any prior decision is for the old
    /// record, so it is cleared, and the manager portal is reset to the
    /// approval inbox.
    fn submit(&mut self, payload: SubmissionPayload) -> &SubmissionRecord {
        self.decision = None;
        self.employee_view = EmployeeView::SubmissionConfirmation;
        self.manager_view = ManagerView::ApprovalEmail;
        self.submission.insert(SubmissionRecord::new(payload))
    }

    /// Record the manager's decision on the active submission and push both
    /// portals to their post-decision views.
    pub fn record_decision(&mut self, decision: ManagerDecision) -> Result<(), WorkflowError> {
        if self.submission.is_none() {
            return Err(WorkflowError::NoSubmission);
        }
        self.decision = Some(decision);
        self.manager_view = ManagerView::ActionConfirmation;
        self.employee_view = EmployeeView::FinalNotification;
        Ok(())
    }

    pub fn select_employee_view(&mut self, view: EmployeeView) -> Result<(), WorkflowError> {
        if !self.employee_view_enabled(view) {
            return Err(WorkflowError::NoSubmission);
        }
        self.employee_view = view;
        Ok(())
    }

    pub fn select_manager_view(&mut self, view: ManagerView) -> Result<(), WorkflowError> {
        if !self.manager_view_enabled(view) {
            return Err(WorkflowError::NoDecision);
        }
        self.manager_view = view;
        Ok(())
    }

    /// Guard: confirmation and notification views need a submission.
    pub fn employee_view_enabled(&self, view: EmployeeView) -> bool {
        match view {
            EmployeeView::HolidayForm | EmployeeView::ExpenseForm => true,
            EmployeeView::SubmissionConfirmation | EmployeeView::FinalNotification => {
                self.submission.is_some()
            }
        }
    }

    /// Guard: the action confirmation view needs a recorded decision.
    pub fn manager_view_enabled(&self, view: ManagerView) -> bool {
        match view {
            ManagerView::ApprovalEmail => true,
            ManagerView::ActionConfirmation => self.decision.is_some(),
        }
    }

    pub fn start_new_submission(&mut self) {
        self.employee_view = EmployeeView::HolidayForm;
    }

    pub fn back_to_approvals(&mut self) {
        self.manager_view = ManagerView::ApprovalEmail;
    }

    /// Prior holiday payload, used to pre-fill the form when the employee
    /// returns to it. An expense submission does not pre-fill it.
    pub fn holiday_draft(&self) -> Option<&HolidayRequestData> {
        match self.submission.as_ref()?.payload {
            SubmissionPayload::Holiday(ref data) => Some(data),
            SubmissionPayload::Expense(_) => None,
        }
    }

    pub fn expense_draft(&self) -> Option<&ExpenseClaimData> {
        match self.submission.as_ref()?.payload {
            SubmissionPayload::Expense(ref data) => Some(data),
            SubmissionPayload::Holiday(_) => None,
        }
    }

    pub fn decision_outcome(&self) -> Option<Decision> {
        self.decision.as_ref().map(|d| d.decision)
    }

    /// Submitter of the active submission, for the shell footer.
    pub fn submitter_name(&self) -> Option<&str> {
        self.submission.as_ref().map(|s| s.submitter_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::notification_headline;

    fn holiday(name: &str, start: &str, end: &str) -> HolidayRequestData {
        HolidayRequestData {
            employee_name: name.to_string(),
            department: "Customer Success".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            reason: "Time off".to_string(),
        }
    }

    fn expense(name: &str) -> ExpenseClaimData {
        ExpenseClaimData {
            claimant_name: name.to_string(),
            expense_date: "2024-02-10".to_string(),
            category: "travel".to_string(),
            amount: "120.50".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_fresh_session_shows_forms_only() {
        let workflow = Workflow::new();
        assert_eq!(workflow.portal, Portal::Employee);
        assert_eq!(workflow.employee_view, EmployeeView::HolidayForm);
        assert_eq!(workflow.manager_view, ManagerView::ApprovalEmail);
        assert!(workflow.employee_view_enabled(EmployeeView::ExpenseForm));
        assert!(!workflow.employee_view_enabled(EmployeeView::SubmissionConfirmation));
        assert!(!workflow.employee_view_enabled(EmployeeView::FinalNotification));
        assert!(!workflow.manager_view_enabled(ManagerView::ActionConfirmation));
    }

    #[test]
    fn test_submit_moves_both_portals() {
        let mut workflow = Workflow::new();
        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));

        assert_eq!(workflow.employee_view, EmployeeView::SubmissionConfirmation);
        assert_eq!(workflow.manager_view, ManagerView::ApprovalEmail);
        assert_eq!(workflow.submitter_name(), Some("Jane Doe"));
    }

    #[test]
    fn test_submit_clears_prior_decision() {
        let mut workflow = Workflow::new();
        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));
        workflow
            .record_decision(ManagerDecision::record(Decision::Approved, "Alex", ""))
            .unwrap();
        assert!(workflow.decision.is_some());

        workflow.submit_expense(expense("John Smith"));
        assert!(workflow.decision.is_none());
        assert_eq!(workflow.manager_view, ManagerView::ApprovalEmail);
        assert_eq!(workflow.submitter_name(), Some("John Smith"));
    }

    #[test]
    fn test_submission_is_single_slot() {
        let mut workflow = Workflow::new();
        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));
        let first_id = workflow.submission.as_ref().unwrap().id;

        workflow.submit_holiday(holiday("Jane Doe", "2024-03-04", "2024-03-08"));
        let record = workflow.submission.as_ref().unwrap();
        assert_ne!(record.id, first_id);
        assert_eq!(
            workflow.holiday_draft().unwrap().start_date,
            "2024-03-04",
        );
    }

    #[test]
    fn test_decision_requires_submission() {
        let mut workflow = Workflow::new();
        let result =
            workflow.record_decision(ManagerDecision::record(Decision::Approved, "Alex", ""));
        assert_eq!(result, Err(WorkflowError::NoSubmission));
        assert!(workflow.decision.is_none());
        assert_eq!(workflow.manager_view, ManagerView::ApprovalEmail);
    }

    #[test]
    fn test_decision_forces_employee_to_notification() {
        let mut workflow = Workflow::new();
        workflow.submit_expense(expense("John Smith"));
        workflow.switch_portal(Portal::Manager);
        workflow
            .record_decision(ManagerDecision::record(Decision::Declined, "Alex", "No budget"))
            .unwrap();

        assert_eq!(workflow.manager_view, ManagerView::ActionConfirmation);
        assert_eq!(workflow.employee_view, EmployeeView::FinalNotification);
    }

    #[test]
    fn test_guarded_tabs_reject_selection() {
        let mut workflow = Workflow::new();
        assert_eq!(
            workflow.select_employee_view(EmployeeView::FinalNotification),
            Err(WorkflowError::NoSubmission)
        );
        assert_eq!(
            workflow.select_manager_view(ManagerView::ActionConfirmation),
            Err(WorkflowError::NoDecision)
        );

        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));
        workflow.select_employee_view(EmployeeView::FinalNotification).unwrap();
        assert_eq!(workflow.employee_view, EmployeeView::FinalNotification);

        // A submission alone does not unlock the manager confirmation tab.
        assert_eq!(
            workflow.select_manager_view(ManagerView::ActionConfirmation),
            Err(WorkflowError::NoDecision)
        );
    }

    #[test]
    fn test_switching_portals_never_mutates_data() {
        let mut workflow = Workflow::new();
        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));
        workflow
            .record_decision(ManagerDecision::record(Decision::Approved, "Alex", "Enjoy!"))
            .unwrap();

        let submission = workflow.submission.clone();
        let decision = workflow.decision.clone();
        workflow.switch_portal(Portal::Manager);
        workflow.switch_portal(Portal::Employee);

        assert_eq!(workflow.submission, submission);
        assert_eq!(workflow.decision, decision);
        assert_eq!(workflow.employee_view, EmployeeView::FinalNotification);
        assert_eq!(workflow.manager_view, ManagerView::ActionConfirmation);
    }

    #[test]
    fn test_start_new_and_back_to_approvals() {
        let mut workflow = Workflow::new();
        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));
        workflow
            .record_decision(ManagerDecision::record(Decision::Approved, "Alex", ""))
            .unwrap();

        workflow.start_new_submission();
        assert_eq!(workflow.employee_view, EmployeeView::HolidayForm);

        workflow.back_to_approvals();
        assert_eq!(workflow.manager_view, ManagerView::ApprovalEmail);
    }

    #[test]
    fn test_drafts_only_prefill_matching_form() {
        let mut workflow = Workflow::new();
        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));
        assert!(workflow.holiday_draft().is_some());
        assert!(workflow.expense_draft().is_none());

        workflow.submit_expense(expense("John Smith"));
        assert!(workflow.holiday_draft().is_none());
        assert_eq!(workflow.expense_draft().unwrap().amount, "120.50");
    }

    // End-to-end walkthrough: holiday submission, approval with a note, and
    // the resulting notification content.
    #[test]
    fn test_holiday_approval_walkthrough() {
        let mut workflow = Workflow::new();
        workflow.submit_holiday(holiday("Jane Doe", "2024-01-01", "2024-01-03"));

        let record = workflow.submission.as_ref().unwrap();
        assert_eq!(record.submitter_name(), "Jane Doe");
        let data = workflow.holiday_draft().unwrap();
        assert_eq!(data.start_date, "2024-01-01");
        assert_eq!(data.end_date, "2024-01-03");
        assert_eq!(notification_headline(workflow.decision_outcome()),
            "We have received your submission and will notify you once your manager responds.");

        workflow
            .record_decision(ManagerDecision::record(Decision::Approved, "Alex Johnson", "Enjoy!"))
            .unwrap();

        assert_eq!(
            notification_headline(workflow.decision_outcome()),
            "Good news: your manager has approved your request."
        );
        assert_eq!(
            workflow.decision.as_ref().unwrap().note.as_deref(),
            Some("Enjoy!")
        );
        assert_eq!(workflow.employee_view, EmployeeView::FinalNotification);
    }
}
