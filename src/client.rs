use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::types::{ClientId, Employment, Gender, MaritalStatus};

/// a submitted loan request; immutable once accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: Money,
    pub term: u32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub birth_date: NaiveDate,
    pub passport_series: String,
    pub passport_number: String,
}

/// passport details; issue data arrives later with the finish-registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passport {
    pub series: String,
    pub number: String,
    pub issue_date: Option<NaiveDate>,
    pub issue_branch: Option<String>,
}

/// supplementary applicant data needed for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishRegistration {
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub dependent_amount: u32,
    pub passport_issue_date: NaiveDate,
    pub passport_issue_branch: String,
    pub employment: Employment,
    pub account_number: String,
}

/// the applicant record referenced by statements
///
/// Created from a loan request with only identity fields; the scoring
/// fields stay empty until the finish-registration form enriches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub birth_date: NaiveDate,
    pub passport: Passport,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub dependent_amount: Option<u32>,
    pub employment: Option<Employment>,
    pub account_number: Option<String>,
}

impl Client {
    /// create a client record from an accepted loan request
    pub fn from_request(request: &LoanRequest) -> Self {
        Self {
            client_id: Uuid::new_v4(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            middle_name: request.middle_name.clone(),
            email: request.email.clone(),
            birth_date: request.birth_date,
            passport: Passport {
                series: request.passport_series.clone(),
                number: request.passport_number.clone(),
                issue_date: None,
                issue_branch: None,
            },
            gender: None,
            marital_status: None,
            dependent_amount: None,
            employment: None,
            account_number: None,
        }
    }

    /// fill in the scoring fields from the finish-registration form
    pub fn enrich(&mut self, form: &FinishRegistration) {
        self.gender = Some(form.gender);
        self.marital_status = Some(form.marital_status);
        self.dependent_amount = Some(form.dependent_amount);
        self.passport.issue_date = Some(form.passport_issue_date);
        self.passport.issue_branch = Some(form.passport_issue_branch.clone());
        self.employment = Some(form.employment.clone());
        self.account_number = Some(form.account_number.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmploymentStatus;
    use rust_decimal_macros::dec;

    fn request() -> LoanRequest {
        LoanRequest {
            amount: Money::from_decimal(dec!(100000)),
            term: 6,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            middle_name: None,
            email: "john@doe.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            passport_series: "1234".to_string(),
            passport_number: "123456".to_string(),
        }
    }

    #[test]
    fn client_starts_without_scoring_fields() {
        let client = Client::from_request(&request());
        assert_eq!(client.email, "john@doe.com");
        assert_eq!(client.passport.series, "1234");
        assert!(client.gender.is_none());
        assert!(client.employment.is_none());
    }

    #[test]
    fn enrich_fills_scoring_fields() {
        let mut client = Client::from_request(&request());
        client.enrich(&FinishRegistration {
            gender: Gender::Male,
            marital_status: MaritalStatus::NotMarried,
            dependent_amount: 0,
            passport_issue_date: NaiveDate::from_ymd_opt(2004, 1, 1).unwrap(),
            passport_issue_branch: "Central branch".to_string(),
            employment: Employment {
                status: EmploymentStatus::Employed,
                employer_tax_id: "9921242264".to_string(),
                salary: Money::from_decimal(dec!(50000)),
                position: Some(crate::types::WorkPosition::Middle),
                total_experience_months: 30,
                current_experience_months: 19,
            },
            account_number: "1235456".to_string(),
        });

        assert_eq!(client.gender, Some(Gender::Male));
        assert_eq!(client.marital_status, Some(MaritalStatus::NotMarried));
        assert!(client.passport.issue_date.is_some());
        assert_eq!(
            client.employment.as_ref().map(|e| e.status),
            Some(EmploymentStatus::Employed)
        );
    }
}
