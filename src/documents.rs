use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::types::{Credit, StatementId};

/// everything the renderer needs: applicant identity plus the final terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentData {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub birth_date: NaiveDate,
    pub credit: Credit,
}

/// rendering seam consumed by the document-step collaborator
///
/// Returns the credit document and the schedule document; the delivery
/// channel (files, email attachments) stays outside the core.
pub trait DocumentRenderer {
    fn render(&self, statement_id: StatementId, data: &DocumentData) -> (String, String);
}

/// plain-text renderer producing one block per document
#[derive(Debug, Default)]
pub struct TextDocumentRenderer;

impl TextDocumentRenderer {
    pub fn new() -> Self {
        Self
    }

    fn credit_document(&self, data: &DocumentData) -> String {
        let mut full_name = format!("{} {}", data.last_name, data.first_name);
        if let Some(middle) = &data.middle_name {
            full_name.push(' ');
            full_name.push_str(middle);
        }

        let birth_date = format!(
            "{:02}.{:02}.{}",
            data.birth_date.day(),
            data.birth_date.month(),
            data.birth_date.year()
        );

        let credit = &data.credit;
        format!(
            "Full name: {full_name}\n\
             Birth date: {birth_date}\n\
             Loan amount: {}\n\
             Term: {} months\n\
             Annual rate: {}\n\
             Total cost of credit: {}\n\
             Insurance enabled: {}\n\
             Salary client: {}\n",
            credit.amount,
            credit.term,
            credit.rate,
            credit.psk,
            yes_no(credit.is_insurance_enabled),
            yes_no(credit.is_salary_client),
        )
    }

    fn schedule_document(&self, data: &DocumentData) -> String {
        let mut body = String::new();
        for entry in &data.credit.payment_schedule {
            let _ = write!(
                body,
                "Payment number: {}\n\
                 Payment date: {}\n\
                 Total payment: {}\n\
                 Interest payment: {}\n\
                 Principal payment: {}\n\
                 Remaining debt: {}\n\n",
                entry.number,
                entry.date,
                entry.total_payment,
                entry.interest_payment,
                entry.debt_payment,
                entry.remaining_debt,
            );
        }
        body
    }
}

impl DocumentRenderer for TextDocumentRenderer {
    fn render(&self, statement_id: StatementId, data: &DocumentData) -> (String, String) {
        tracing::info!(%statement_id, "rendering credit documents");
        (self.credit_document(data), self.schedule_document(data))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
