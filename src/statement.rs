use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::LoanOffer;
use crate::types::{
    ApplicationStatus, ChangeType, ClientId, CreditId, StatementId, StatusHistoryEntry,
};

/// one loan application and its authoritative status trail
///
/// The statement is mutated only through the operations below; every status
/// change appends one history entry and history entries are never edited or
/// removed. The operations themselves perform no denied-guard check —
/// callers check `is_denied` before mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub statement_id: StatementId,
    pub client_id: ClientId,
    pub credit_id: Option<CreditId>,
    pub status: ApplicationStatus,
    pub creation_date: DateTime<Utc>,
    pub applied_offer: Option<LoanOffer>,
    pub sign_date: Option<DateTime<Utc>>,
    pub ses_code: Option<String>,
    pub status_history: Vec<StatusHistoryEntry>,
}

impl Statement {
    /// create a statement in PREAPPROVAL with its first history entry
    pub fn create(client_id: ClientId, time: &SafeTimeProvider) -> Self {
        let mut statement = Self {
            statement_id: Uuid::new_v4(),
            client_id,
            credit_id: None,
            status: ApplicationStatus::Preapproval,
            creation_date: time.now(),
            applied_offer: None,
            sign_date: None,
            ses_code: None,
            status_history: Vec::new(),
        };
        statement.transition(ApplicationStatus::Preapproval, time);
        statement
    }

    /// overwrite the current status and append one history entry
    ///
    /// Writing the same status twice is harmless: the status is unchanged
    /// and the history grows by one entry, which keeps duplicate event
    /// deliveries idempotent at the state level.
    pub fn transition(&mut self, status: ApplicationStatus, time: &SafeTimeProvider) {
        let old_status = self.status;
        self.status = status;
        self.status_history.push(StatusHistoryEntry {
            status,
            timestamp: time.now(),
            change_type: ChangeType::Automatic,
        });
        tracing::info!(
            statement_id = %self.statement_id,
            ?old_status,
            new_status = ?status,
            "changed statement status"
        );
    }

    /// store the chosen offer and advance to APPROVED
    pub fn apply_offer(&mut self, offer: LoanOffer, time: &SafeTimeProvider) {
        self.applied_offer = Some(offer);
        self.transition(ApplicationStatus::Approved, time);
    }

    /// link the finalized credit; does not transition status
    pub fn attach_credit(&mut self, credit_id: CreditId) {
        self.credit_id = Some(credit_id);
    }

    /// advance to CREDIT_ISSUED and stamp the signing timestamp
    pub fn issue(&mut self, time: &SafeTimeProvider) {
        self.transition(ApplicationStatus::CreditIssued, time);
        self.sign_date = Some(time.now());
    }

    /// denied statements are permanently read-only for business mutations
    pub fn is_denied(&self) -> bool {
        self.status == ApplicationStatus::CcDenied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hourglass_rs::TimeSource;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn create_starts_in_preapproval_with_one_history_entry() {
        let time = test_time();
        let statement = Statement::create(Uuid::new_v4(), &time);

        assert_eq!(statement.status, ApplicationStatus::Preapproval);
        assert_eq!(statement.status_history.len(), 1);
        assert_eq!(
            statement.status_history[0].status,
            ApplicationStatus::Preapproval
        );
        assert_eq!(
            statement.status_history[0].change_type,
            ChangeType::Automatic
        );
        assert!(statement.credit_id.is_none());
        assert!(statement.sign_date.is_none());
    }

    #[test]
    fn transition_appends_and_overwrites() {
        let time = test_time();
        let mut statement = Statement::create(Uuid::new_v4(), &time);

        statement.transition(ApplicationStatus::Approved, &time);

        assert_eq!(statement.status, ApplicationStatus::Approved);
        assert_eq!(statement.status_history.len(), 2);
        assert_eq!(
            statement.status_history.last().unwrap().status,
            ApplicationStatus::Approved
        );
    }

    #[test]
    fn repeated_transition_is_idempotent_on_status_but_grows_history() {
        let time = test_time();
        let mut statement = Statement::create(Uuid::new_v4(), &time);

        statement.transition(ApplicationStatus::PrepareDocuments, &time);
        statement.transition(ApplicationStatus::PrepareDocuments, &time);

        assert_eq!(statement.status, ApplicationStatus::PrepareDocuments);
        assert_eq!(statement.status_history.len(), 3);
    }

    #[test]
    fn issue_stamps_sign_date() {
        let time = test_time();
        let mut statement = Statement::create(Uuid::new_v4(), &time);

        statement.issue(&time);

        assert_eq!(statement.status, ApplicationStatus::CreditIssued);
        assert_eq!(statement.sign_date, Some(time.now()));
    }

    #[test]
    fn only_cc_denied_counts_as_denied() {
        let time = test_time();
        let mut statement = Statement::create(Uuid::new_v4(), &time);
        assert!(!statement.is_denied());

        statement.transition(ApplicationStatus::CcDenied, &time);
        assert!(statement.is_denied());
    }
}
