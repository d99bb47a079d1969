//! Data model for the submission / approval workflow
//!
//! These are the shapes the views exchange: the two form payloads, the
//! single active submission, and the manager's decision on it. Serialized
//! names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Form Payloads
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRequestData {
    pub employee_name: String,
    pub department: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClaimData {
    pub claimant_name: String,
    pub expense_date: String,
    pub category: String,
    /// Kept as entered; the amount field is numeric-as-text.
    pub amount: String,
    pub notes: String,
}

impl ExpenseClaimData {
    /// Dollar rendering of the raw amount field. Empty or unparseable
    /// input renders as `$0.00`.
    pub fn formatted_amount(&self) -> String {
        let value = self.amount.trim().parse::<f64>().unwrap_or(0.0);
        format!("${value:.2}")
    }
}

/// Fixed option list for the expense category select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpenseCategory {
    Travel,
    Meals,
    Office,
    Other,
}

impl ExpenseCategory {
    pub fn value(&self) -> &'static str {
        match self {
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Meals => "meals",
            ExpenseCategory::Office => "office",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Meals => "Meals & Entertainment",
            ExpenseCategory::Office => "Office Supplies",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn variants() -> &'static [ExpenseCategory] {
        &[
            ExpenseCategory::Travel,
            ExpenseCategory::Meals,
            ExpenseCategory::Office,
            ExpenseCategory::Other,
        ]
    }
}

// ============================================================================
// Submission Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Holiday,
    Expense,
}

impl SubmissionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionKind::Holiday => "holiday request",
            SubmissionKind::Expense => "expense claim",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum SubmissionPayload {
    Holiday(HolidayRequestData),
    Expense(ExpenseClaimData),
}

/// The single active submission awaiting (or having received) a decision.
/// Submitting a new form replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: SubmissionPayload,
}

impl SubmissionRecord {
    pub fn new(payload: SubmissionPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            payload,
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        match self.payload {
            SubmissionPayload::Holiday(_) => SubmissionKind::Holiday,
            SubmissionPayload::Expense(_) => SubmissionKind::Expense,
        }
    }

    pub fn submitter_name(&self) -> &str {
        match &self.payload {
            SubmissionPayload::Holiday(data) => &data.employee_name,
            SubmissionPayload::Expense(data) => &data.claimant_name,
        }
    }

    /// Subject line of the approval email sent to the manager.
    pub fn approval_subject(&self) -> &'static str {
        match self.kind() {
            SubmissionKind::Holiday => "Holiday request awaiting approval",
            SubmissionKind::Expense => "Expense claim requires your review",
        }
    }

    /// Subject line of the final notification email sent to the submitter.
    pub fn notification_subject(&self) -> &'static str {
        match self.kind() {
            SubmissionKind::Holiday => "Your holiday request update",
            SubmissionKind::Expense => "Expense claim decision",
        }
    }
}

// ============================================================================
// Manager Decision
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Declined,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Declined => "declined",
        }
    }
}

/// Outcome recorded by a manager for the active submission. Only meaningful
/// relative to the current [`SubmissionRecord`]; a new submission clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDecision {
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub decided_by: String,
    pub decided_at: DateTime<Utc>,
}

impl ManagerDecision {
    /// Build a decision from raw form input: blank notes are dropped and a
    /// blank manager name falls back to "Manager".
    pub fn record(decision: Decision, decided_by: &str, note: &str) -> Self {
        let decided_by = decided_by.trim();
        let note = note.trim();
        Self {
            decision,
            note: (!note.is_empty()).then(|| note.to_string()),
            decided_by: if decided_by.is_empty() {
                "Manager".to_string()
            } else {
                decided_by.to_string()
            },
            decided_at: Utc::now(),
        }
    }
}

/// Headline of the final notification email, a pure function of the
/// decision state.
pub fn notification_headline(decision: Option<Decision>) -> &'static str {
    match decision {
        Some(Decision::Approved) => {
            "Good news: your manager has approved your request."
        }
        Some(Decision::Declined) => {
            "Your manager has reviewed your request but was unable to approve it."
        }
        None => {
            "We have received your submission and will notify you once your manager responds."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_amount_handles_raw_input() {
        let mut claim = ExpenseClaimData {
            amount: "12".to_string(),
            ..Default::default()
        };
        assert_eq!(claim.formatted_amount(), "$12.00");

        claim.amount = " 120.5 ".to_string();
        assert_eq!(claim.formatted_amount(), "$120.50");

        claim.amount = String::new();
        assert_eq!(claim.formatted_amount(), "$0.00");

        claim.amount = "not a number".to_string();
        assert_eq!(claim.formatted_amount(), "$0.00");
    }

    #[test]
    fn test_notification_headline_covers_all_decision_states() {
        assert!(notification_headline(None).contains("received your submission"));
        assert!(notification_headline(Some(Decision::Approved)).contains("approved"));
        assert!(notification_headline(Some(Decision::Declined)).contains("unable to approve"));
    }

    #[test]
    fn test_decision_record_normalizes_form_input() {
        let decision = ManagerDecision::record(Decision::Approved, "  ", "   ");
        assert_eq!(decision.decided_by, "Manager");
        assert_eq!(decision.note, None);

        let decision = ManagerDecision::record(Decision::Declined, " Alex Johnson ", " Too busy ");
        assert_eq!(decision.decided_by, "Alex Johnson");
        assert_eq!(decision.note.as_deref(), Some("Too busy"));
    }

    #[test]
    fn test_submission_record_wire_shape_is_camel_case() {
        let record = SubmissionRecord::new(SubmissionPayload::Holiday(HolidayRequestData {
            employee_name: "Jane Doe".to_string(),
            department: "Customer Success".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-03".to_string(),
            reason: "Family trip".to_string(),
        }));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "holiday");
        assert_eq!(json["payload"]["employeeName"], "Jane Doe");
        assert_eq!(json["payload"]["startDate"], "2024-01-01");
        assert!(json["submittedAt"].is_string());

        let decision = ManagerDecision::record(Decision::Approved, "Alex", "");
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["decision"], "approved");
        assert_eq!(json["decidedBy"], "Alex");
        assert!(json.get("note").is_none());
    }
}
