use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::payments::PaymentScheduleEntry;

/// unique identifier for a statement (loan application)
pub type StatementId = Uuid;

/// unique identifier for a client
pub type ClientId = Uuid;

/// unique identifier for a finalized credit
pub type CreditId = Uuid;

/// statement lifecycle status
///
/// CC_DENIED is absorbing: once a statement reaches it, every further
/// business mutation is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Preapproval,
    Approved,
    CcDenied,
    CcApproved,
    PrepareDocuments,
    DocumentCreated,
    DocumentSigned,
    CreditIssued,
}

/// origin of a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    Automatic,
    Manual,
}

/// lifecycle status of a finalized credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    Calculated,
    Issued,
}

/// employment status of an applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    NotEmployed,
    Employed,
    SelfEmployed,
    Employer,
}

/// position seniority at the applicant's employer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkPosition {
    Junior,
    Middle,
    Senior,
    TeamLead,
    TopManager,
}

/// marital status of an applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    NotMarried,
    Married,
    Divorced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

/// employment details supplied with the finish-registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub status: EmploymentStatus,
    pub employer_tax_id: String,
    pub salary: Money,
    pub position: Option<WorkPosition>,
    pub total_experience_months: u32,
    pub current_experience_months: u32,
}

/// one entry of a statement's append-only status trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status: ApplicationStatus,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub change_type: ChangeType,
}

/// merged pricing input: applied offer + client record + finish-registration
/// form, assembled by the workflow before scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringData {
    pub amount: Money,
    pub term: u32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub gender: Gender,
    pub birth_date: chrono::NaiveDate,
    pub passport_series: String,
    pub passport_number: String,
    pub passport_issue_date: Option<chrono::NaiveDate>,
    pub passport_issue_branch: Option<String>,
    pub marital_status: MaritalStatus,
    pub dependent_amount: u32,
    pub employment: Employment,
    pub account_number: String,
    pub is_insurance_enabled: bool,
    pub is_salary_client: bool,
}

/// finalized credit terms plus the binding payment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub credit_id: CreditId,
    /// the disclosed requested amount; the insurance premium is amortized
    /// but never added here
    pub amount: Money,
    pub term: u32,
    pub monthly_payment: Money,
    pub rate: Rate,
    /// total cost of credit (monthly payment × term)
    pub psk: Money,
    pub is_insurance_enabled: bool,
    pub is_salary_client: bool,
    pub payment_schedule: Vec<PaymentScheduleEntry>,
    pub credit_status: CreditStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn statuses_serialize_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::CcDenied).unwrap(),
            "\"CC_DENIED\""
        );
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::PrepareDocuments).unwrap(),
            "\"PREPARE_DOCUMENTS\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentStatus::NotEmployed).unwrap(),
            "\"NOT_EMPLOYED\""
        );
    }

    #[test]
    fn history_entry_round_trips() {
        let entry = StatusHistoryEntry {
            status: ApplicationStatus::Approved,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            change_type: ChangeType::Manual,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"APPROVED\""));
        assert!(json.contains("\"MANUAL\""));
        let back: StatusHistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
