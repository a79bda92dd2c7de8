use hourglass_rs::SafeTimeProvider;
use uuid::Uuid;

use crate::client::{Client, FinishRegistration, LoanRequest};
use crate::config::RateConfig;
use crate::documents::DocumentData;
use crate::errors::{OriginationError, Result};
use crate::events::{Notification, NotificationSink, Topic};
use crate::pricing::{check_eligibility, Calculator, LoanOffer};
use crate::statement::Statement;
use crate::store::ApplicationStore;
use crate::types::{ApplicationStatus, Credit, CreditStatus, ScoringData, StatementId};

/// the pricing seam: may be an in-process calculator or a remote service
pub trait PricingService {
    fn price_all(&self, request: &LoanRequest) -> Result<Vec<LoanOffer>>;
    fn price_one(&self, data: &ScoringData, time: &SafeTimeProvider) -> Result<Credit>;
}

/// in-process pricing over the calculation engines: the eligibility gate
/// runs first, then the credit calculation
pub struct LocalPricingService {
    calculator: Calculator,
}

impl LocalPricingService {
    pub fn new(config: RateConfig) -> Self {
        Self {
            calculator: Calculator::new(config),
        }
    }
}

impl PricingService for LocalPricingService {
    fn price_all(&self, request: &LoanRequest) -> Result<Vec<LoanOffer>> {
        Ok(self.calculator.offers(request))
    }

    fn price_one(&self, data: &ScoringData, time: &SafeTimeProvider) -> Result<Credit> {
        check_eligibility(data, time.now().date_naive())?;
        self.calculator.credit(data, time)
    }
}

/// generate a 6-digit signature code
pub fn generate_signature_code() -> String {
    let random = u128::from_le_bytes(*Uuid::new_v4().as_bytes());
    format!("{:06}", random % 1_000_000)
}

/// the origination saga
///
/// Each operation is a stateless request handler: it re-reads the statement
/// from the store, re-checks the denied guard first, performs its one piece
/// of work and persists the result. State lives in the store, never in this
/// struct, so steps for different statements can run concurrently and
/// duplicate deliveries of the same step stay harmless.
pub struct OriginationService<S, P, N> {
    store: S,
    pricing: P,
    notifier: N,
}

impl<S, P, N> OriginationService<S, P, N>
where
    S: ApplicationStore,
    P: PricingService,
    N: NotificationSink,
{
    pub fn new(store: S, pricing: P, notifier: N) -> Self {
        Self {
            store,
            pricing,
            notifier,
        }
    }

    /// read access to the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// offer step: persist the applicant and a PREAPPROVAL statement, price
    /// the four offers and stamp the statement id onto each
    pub fn create_statement(
        &mut self,
        request: &LoanRequest,
        time: &SafeTimeProvider,
    ) -> Result<Vec<LoanOffer>> {
        let client = Client::from_request(request);
        let client_id = client.client_id;
        self.store.save_client(client);

        let statement = Statement::create(client_id, time);
        let statement_id = statement.statement_id;
        self.store.save_statement(statement);
        tracing::info!(%statement_id, "created statement for a new loan request");

        let mut offers = self.pricing.price_all(request)?;
        for offer in &mut offers {
            offer.statement_id = statement_id;
        }
        tracing::info!(%statement_id, "priced {} offers", offers.len());

        Ok(offers)
    }

    /// selection step: store the chosen offer, advance to APPROVED, ask the
    /// client to finish registration
    pub fn apply_offer(&mut self, offer: &LoanOffer, time: &SafeTimeProvider) -> Result<()> {
        self.ensure_not_denied(offer.statement_id)?;

        let mut statement = self.store.statement(offer.statement_id)?;
        let client = self.store.client(statement.client_id)?;

        statement.apply_offer(offer.clone(), time);
        self.store.save_statement(statement);

        self.notify(
            Topic::FinishRegistration,
            offer.statement_id,
            &client.email,
            "Please finish registration.",
        )
    }

    /// scoring step: enrich the applicant, run pricing, and either attach
    /// the calculated credit (CC_APPROVED) or deny the statement
    ///
    /// A denial — including an upstream 403 from a remote pricing service —
    /// performs exactly one compensating transition to CC_DENIED and one
    /// statement-denied emission before the error is re-raised. Any other
    /// failure propagates without touching the statement.
    pub fn finish_registration(
        &mut self,
        statement_id: StatementId,
        form: &FinishRegistration,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.ensure_not_denied(statement_id)?;

        let statement = self.store.statement(statement_id)?;
        let mut client = self.store.client(statement.client_id)?;

        client.enrich(form);
        self.store.save_client(client.clone());

        let data = scoring_data(&statement, &client)?;

        let credit = match self.pricing.price_one(&data, time) {
            Ok(credit) => credit,
            Err(error) => return Err(self.deny(statement, &client.email, error, time)),
        };

        let credit_id = credit.credit_id;
        self.store.save_credit(credit);

        let mut statement = self.store.statement(statement_id)?;
        statement.attach_credit(credit_id);
        statement.transition(ApplicationStatus::CcApproved, time);
        self.store.save_statement(statement);
        tracing::info!(%statement_id, "credit calculated and attached, statement is CC_APPROVED");

        self.notify(
            Topic::CreateDocuments,
            statement_id,
            &client.email,
            "Do you wish to proceed to create documents?",
        )
    }

    /// document step: advance to PREPARE_DOCUMENTS and hand off to the
    /// document collaborator
    pub fn prepare_documents(
        &mut self,
        statement_id: StatementId,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.ensure_not_denied(statement_id)?;

        let mut statement = self.store.statement(statement_id)?;
        let client = self.store.client(statement.client_id)?;

        statement.transition(ApplicationStatus::PrepareDocuments, time);
        self.store.save_statement(statement);

        self.notify(
            Topic::SendDocuments,
            statement_id,
            &client.email,
            "Your loan documents are here:",
        )
    }

    /// callback from the document collaborator once documents went out
    pub fn document_created(
        &mut self,
        statement_id: StatementId,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.ensure_not_denied(statement_id)?;

        let mut statement = self.store.statement(statement_id)?;
        statement.transition(ApplicationStatus::DocumentCreated, time);
        self.store.save_statement(statement);

        Ok(())
    }

    /// signing step: issue and persist a fresh signature code
    pub fn send_signature_code(
        &mut self,
        statement_id: StatementId,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.ensure_not_denied(statement_id)?;

        let mut statement = self.store.statement(statement_id)?;
        let client = self.store.client(statement.client_id)?;

        let code = generate_signature_code();
        statement.ses_code = Some(code.clone());
        self.store.save_statement(statement);
        tracing::info!(%statement_id, "issued a new signature code");

        self.notify(
            Topic::SendCode,
            statement_id,
            &client.email,
            &format!("Sign documents with the code. Your signature code is {code}"),
        )
    }

    /// verification step: a matching code issues the credit; a mismatch
    /// denies the statement
    pub fn verify_signature_code(
        &mut self,
        statement_id: StatementId,
        code: &str,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.ensure_not_denied(statement_id)?;

        let statement = self.store.statement(statement_id)?;
        let client = self.store.client(statement.client_id)?;

        let issued = statement
            .ses_code
            .clone()
            .ok_or_else(|| OriginationError::Prescoring {
                message: "no signature code has been issued".to_string(),
            })?;

        if issued != code {
            tracing::error!(%statement_id, "signature code provided by the client is not valid");
            return Err(self.deny(
                statement,
                &client.email,
                OriginationError::SignatureMismatch,
                time,
            ));
        }

        let credit_id = statement
            .credit_id
            .ok_or_else(|| OriginationError::Prescoring {
                message: "statement has no credit attached".to_string(),
            })?;
        let mut credit = self.store.credit(credit_id)?;
        credit.credit_status = CreditStatus::Issued;
        self.store.save_credit(credit);

        let mut statement = self.store.statement(statement_id)?;
        statement.transition(ApplicationStatus::DocumentSigned, time);
        statement.issue(time);
        self.store.save_statement(statement);
        tracing::info!(%statement_id, "credit issued");

        self.notify(
            Topic::CreditIssued,
            statement_id,
            &client.email,
            "Credit issued, congratulations",
        )
    }

    /// assemble the renderer input for the document collaborator
    pub fn document_data(&self, statement_id: StatementId) -> Result<DocumentData> {
        self.ensure_not_denied(statement_id)?;

        let statement = self.store.statement(statement_id)?;
        let client = self.store.client(statement.client_id)?;
        let credit_id = statement
            .credit_id
            .ok_or_else(|| OriginationError::Prescoring {
                message: "statement has no credit attached".to_string(),
            })?;
        let credit = self.store.credit(credit_id)?;

        Ok(DocumentData {
            first_name: client.first_name,
            last_name: client.last_name,
            middle_name: client.middle_name,
            birth_date: client.birth_date,
            credit,
        })
    }

    /// fetch one statement
    pub fn statement(&self, statement_id: StatementId) -> Result<Statement> {
        self.store.statement(statement_id)
    }

    /// fetch every statement, oldest first
    pub fn statements(&self) -> Vec<Statement> {
        self.store.statements()
    }

    /// denied guard, re-checked as the first action of every mutating step
    fn ensure_not_denied(&self, statement_id: StatementId) -> Result<()> {
        if self.store.statement(statement_id)?.is_denied() {
            tracing::warn!(%statement_id, "statement had been denied earlier, changes are blocked");
            return Err(OriginationError::ChangeBlocked { id: statement_id });
        }
        Ok(())
    }

    /// the single compensation path: one CC_DENIED transition, one
    /// statement-denied emission, then the translated error
    fn deny(
        &mut self,
        mut statement: Statement,
        email: &str,
        error: OriginationError,
        time: &SafeTimeProvider,
    ) -> OriginationError {
        let translated = match error {
            // a remote pricing service signals a denial as 403
            OriginationError::Upstream {
                status: 403,
                message,
                ..
            } => OriginationError::Denied { reason: message },
            denial @ (OriginationError::Denied { .. } | OriginationError::SignatureMismatch) => {
                denial
            }
            // unrelated failures do not touch the statement
            other => return other,
        };

        let statement_id = statement.statement_id;
        tracing::warn!(%statement_id, "denying statement: {translated}");
        statement.transition(ApplicationStatus::CcDenied, time);
        self.store.save_statement(statement);

        if let Err(emit_error) = self.notify(
            Topic::StatementDenied,
            statement_id,
            email,
            "Sorry, we can not loan you that amount of money.",
        ) {
            tracing::error!(%statement_id, "failed to emit denial notification: {emit_error}");
        }

        translated
    }

    fn notify(
        &mut self,
        topic: Topic,
        statement_id: StatementId,
        address: &str,
        text: &str,
    ) -> Result<()> {
        tracing::info!(%statement_id, topic = %topic, "emitting notification");
        self.notifier.emit(Notification {
            topic,
            statement_id,
            address: address.to_string(),
            text: text.to_string(),
        })
    }
}

/// merge the applied offer, the client record and the enrichment fields
/// into the pricing input
fn scoring_data(statement: &Statement, client: &Client) -> Result<ScoringData> {
    let offer = statement
        .applied_offer
        .as_ref()
        .ok_or_else(|| OriginationError::Prescoring {
            message: "statement has no applied offer".to_string(),
        })?;

    let missing = |field: &str| OriginationError::Prescoring {
        message: format!("client record is missing {field}"),
    };

    Ok(ScoringData {
        amount: offer.requested_amount,
        term: offer.term,
        first_name: client.first_name.clone(),
        last_name: client.last_name.clone(),
        middle_name: client.middle_name.clone(),
        gender: client.gender.ok_or_else(|| missing("gender"))?,
        birth_date: client.birth_date,
        passport_series: client.passport.series.clone(),
        passport_number: client.passport.number.clone(),
        passport_issue_date: client.passport.issue_date,
        passport_issue_branch: client.passport.issue_branch.clone(),
        marital_status: client
            .marital_status
            .ok_or_else(|| missing("marital status"))?,
        dependent_amount: client
            .dependent_amount
            .ok_or_else(|| missing("dependent amount"))?,
        employment: client
            .employment
            .clone()
            .ok_or_else(|| missing("employment"))?,
        account_number: client
            .account_number
            .clone()
            .ok_or_else(|| missing("account number"))?,
        is_insurance_enabled: offer.is_insurance_enabled,
        is_salary_client: offer.is_salary_client,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::events::RecordingSink;
    use crate::store::InMemoryStore;
    use crate::types::{Employment, EmploymentStatus, Gender, MaritalStatus, WorkPosition};
    use chrono::{NaiveDate, TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    type Service<P> = OriginationService<InMemoryStore, P, RecordingSink>;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        ))
    }

    fn local_service() -> Service<LocalPricingService> {
        OriginationService::new(
            InMemoryStore::new(),
            LocalPricingService::new(RateConfig::standard()),
            RecordingSink::new(),
        )
    }

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

    fn form() -> FinishRegistration {
        FinishRegistration {
            gender: Gender::Male,
            marital_status: MaritalStatus::NotMarried,
            dependent_amount: 0,
            passport_issue_date: NaiveDate::from_ymd_opt(2004, 1, 1).unwrap(),
            passport_issue_branch: "Central branch".to_string(),
            employment: Employment {
                status: EmploymentStatus::Employed,
                employer_tax_id: "9921242264".to_string(),
                salary: Money::from_decimal(dec!(50000)),
                position: Some(WorkPosition::Middle),
                total_experience_months: 30,
                current_experience_months: 19,
            },
            account_number: "1235456".to_string(),
        }
    }

    /// drive a statement up to DOCUMENT_CREATED with a code issued
    fn advance_to_signing(
        service: &mut Service<LocalPricingService>,
        time: &SafeTimeProvider,
    ) -> StatementId {
        let offers = service.create_statement(&request(), time).unwrap();
        let chosen = offers.last().unwrap().clone();
        let statement_id = chosen.statement_id;

        service.apply_offer(&chosen, time).unwrap();
        service.finish_registration(statement_id, &form(), time).unwrap();
        service.prepare_documents(statement_id, time).unwrap();
        service.document_created(statement_id, time).unwrap();
        service.send_signature_code(statement_id, time).unwrap();
        statement_id
    }

    #[test]
    fn signature_code_is_six_digits() {
        for _ in 0..32 {
            let code = generate_signature_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn offer_step_creates_statement_and_stamps_its_id() {
        let mut service = local_service();
        let time = test_time();

        let offers = service.create_statement(&request(), &time).unwrap();

        assert_eq!(offers.len(), 4);
        let statement_id = offers[0].statement_id;
        assert!(offers.iter().all(|o| o.statement_id == statement_id));

        let statement = service.statement(statement_id).unwrap();
        assert_eq!(statement.status, ApplicationStatus::Preapproval);
        assert_eq!(statement.status_history.len(), 1);
    }

    #[test]
    fn full_workflow_reaches_credit_issued() {
        let mut service = local_service();
        let time = test_time();

        let statement_id = advance_to_signing(&mut service, &time);
        let code = service
            .statement(statement_id)
            .unwrap()
            .ses_code
            .unwrap();
        service
            .verify_signature_code(statement_id, &code, &time)
            .unwrap();

        let statement = service.statement(statement_id).unwrap();
        assert_eq!(statement.status, ApplicationStatus::CreditIssued);
        assert!(statement.sign_date.is_some());

        let statuses: Vec<ApplicationStatus> = statement
            .status_history
            .iter()
            .map(|entry| entry.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                ApplicationStatus::Preapproval,
                ApplicationStatus::Approved,
                ApplicationStatus::CcApproved,
                ApplicationStatus::PrepareDocuments,
                ApplicationStatus::DocumentCreated,
                ApplicationStatus::DocumentSigned,
                ApplicationStatus::CreditIssued,
            ]
        );

        let credit = service
            .store()
            .credit(statement.credit_id.unwrap())
            .unwrap();
        assert_eq!(credit.credit_status, CreditStatus::Issued);
        assert_eq!(credit.rate, Rate::from_decimal(dec!(0.19)));

        let topics: Vec<Topic> = service
            .notifier
            .notifications()
            .iter()
            .map(|n| n.topic)
            .collect();
        assert_eq!(
            topics,
            vec![
                Topic::FinishRegistration,
                Topic::CreateDocuments,
                Topic::SendDocuments,
                Topic::SendCode,
                Topic::CreditIssued,
            ]
        );
    }

    #[test]
    fn ineligible_applicant_is_denied_and_frozen() {
        let mut service = local_service();
        let time = test_time();

        let offers = service.create_statement(&request(), &time).unwrap();
        let chosen = offers.last().unwrap().clone();
        let statement_id = chosen.statement_id;
        service.apply_offer(&chosen, &time).unwrap();

        let mut denied_form = form();
        denied_form.employment.status = EmploymentStatus::NotEmployed;

        let result = service.finish_registration(statement_id, &denied_form, &time);
        assert!(matches!(result, Err(OriginationError::Denied { .. })));

        let statement = service.statement(statement_id).unwrap();
        assert_eq!(statement.status, ApplicationStatus::CcDenied);
        assert!(statement.credit_id.is_none());
        assert_eq!(
            service.notifier.notifications().last().unwrap().topic,
            Topic::StatementDenied
        );

        // every further mutation fails fast with no new history entry
        let history_len = statement.status_history.len();
        assert!(matches!(
            service.prepare_documents(statement_id, &time),
            Err(OriginationError::ChangeBlocked { .. })
        ));
        assert!(matches!(
            service.apply_offer(&chosen, &time),
            Err(OriginationError::ChangeBlocked { .. })
        ));
        assert!(matches!(
            service.send_signature_code(statement_id, &time),
            Err(OriginationError::ChangeBlocked { .. })
        ));
        assert!(matches!(
            service.verify_signature_code(statement_id, "000000", &time),
            Err(OriginationError::ChangeBlocked { .. })
        ));
        assert!(matches!(
            service.document_data(statement_id),
            Err(OriginationError::ChangeBlocked { .. })
        ));
        assert_eq!(
            service
                .statement(statement_id)
                .unwrap()
                .status_history
                .len(),
            history_len
        );
    }

    #[test]
    fn wrong_signature_code_denies_the_statement() {
        let mut service = local_service();
        let time = test_time();

        let statement_id = advance_to_signing(&mut service, &time);
        let issued = service
            .statement(statement_id)
            .unwrap()
            .ses_code
            .unwrap();
        let wrong = if issued == "000000" { "000001" } else { "000000" };

        let result = service.verify_signature_code(statement_id, wrong, &time);
        assert!(matches!(result, Err(OriginationError::SignatureMismatch)));

        let statement = service.statement(statement_id).unwrap();
        assert_eq!(statement.status, ApplicationStatus::CcDenied);
        assert!(statement.sign_date.is_none());
        assert_eq!(
            service.notifier.notifications().last().unwrap().topic,
            Topic::StatementDenied
        );
    }

    #[test]
    fn verification_before_a_code_is_issued_mutates_nothing() {
        let mut service = local_service();
        let time = test_time();

        let offers = service.create_statement(&request(), &time).unwrap();
        let chosen = offers.last().unwrap().clone();
        let statement_id = chosen.statement_id;
        service.apply_offer(&chosen, &time).unwrap();

        let before = service.statement(statement_id).unwrap();
        let result = service.verify_signature_code(statement_id, "123456", &time);
        assert!(matches!(result, Err(OriginationError::Prescoring { .. })));
        assert_eq!(service.statement(statement_id).unwrap(), before);
    }

    #[test]
    fn duplicate_document_event_is_tolerated() {
        let mut service = local_service();
        let time = test_time();

        let statement_id = advance_to_signing(&mut service, &time);
        let before = service.statement(statement_id).unwrap();

        // a redelivered send-documents event re-runs the document step
        service.prepare_documents(statement_id, &time).unwrap();

        let after = service.statement(statement_id).unwrap();
        assert_eq!(after.status, ApplicationStatus::PrepareDocuments);
        assert_eq!(
            after.status_history.len(),
            before.status_history.len() + 1
        );
    }

    #[test]
    fn unknown_statement_id_is_not_found_not_blocked() {
        let mut service = local_service();
        let time = test_time();
        let missing = Uuid::new_v4();

        assert!(matches!(
            service.prepare_documents(missing, &time),
            Err(OriginationError::StatementNotFound { .. })
        ));
    }

    #[test]
    fn document_data_collects_client_and_credit() {
        let mut service = local_service();
        let time = test_time();

        let statement_id = advance_to_signing(&mut service, &time);
        let data = service.document_data(statement_id).unwrap();

        assert_eq!(data.first_name, "John");
        assert_eq!(data.credit.payment_schedule.len(), 6);
    }

    // stub pricing used to exercise the upstream translation rules
    struct FailingPricing {
        status: u16,
    }

    impl PricingService for FailingPricing {
        fn price_all(&self, _request: &LoanRequest) -> Result<Vec<LoanOffer>> {
            Err(OriginationError::Upstream {
                service: "pricing".to_string(),
                status: self.status,
                message: "unavailable".to_string(),
            })
        }

        fn price_one(&self, _data: &ScoringData, _time: &SafeTimeProvider) -> Result<Credit> {
            Err(OriginationError::Upstream {
                service: "pricing".to_string(),
                status: self.status,
                message: "scoring rejected the application".to_string(),
            })
        }
    }

    fn statement_via_local(
        store: &mut InMemoryStore,
        time: &SafeTimeProvider,
    ) -> (StatementId, LoanOffer) {
        let mut service = local_service();
        let offers = service.create_statement(&request(), time).unwrap();
        let chosen = offers.last().unwrap().clone();
        service.apply_offer(&chosen, time).unwrap();
        service.finish_registration(chosen.statement_id, &form(), time).ok();

        // move the prepared entities into the caller's store
        for statement in service.store().statements() {
            store.save_statement(statement.clone());
            if let Ok(client) = service.store().client(statement.client_id) {
                store.save_client(client);
            }
        }
        (chosen.statement_id, chosen)
    }

    #[test]
    fn upstream_forbidden_translates_to_denial() {
        let time = test_time();
        let mut store = InMemoryStore::new();
        let (statement_id, _) = statement_via_local(&mut store, &time);
        // reset to the pre-scoring state for the remote variant
        let mut statement = store.statement(statement_id).unwrap();
        statement.credit_id = None;
        store.save_statement(statement);

        let mut service = OriginationService::new(
            store,
            FailingPricing { status: 403 },
            RecordingSink::new(),
        );

        let result = service.finish_registration(statement_id, &form(), &time);
        assert!(matches!(result, Err(OriginationError::Denied { .. })));
        assert_eq!(
            service.statement(statement_id).unwrap().status,
            ApplicationStatus::CcDenied
        );
        assert_eq!(
            service.notifier.notifications().last().unwrap().topic,
            Topic::StatementDenied
        );
    }

    #[test]
    fn other_upstream_failures_propagate_without_mutation() {
        let time = test_time();
        let mut store = InMemoryStore::new();
        let (statement_id, _) = statement_via_local(&mut store, &time);
        let mut statement = store.statement(statement_id).unwrap();
        statement.credit_id = None;
        store.save_statement(statement);
        let history_before = store.statement(statement_id).unwrap().status_history.len();

        let mut service = OriginationService::new(
            store,
            FailingPricing { status: 500 },
            RecordingSink::new(),
        );

        let result = service.finish_registration(statement_id, &form(), &time);
        assert!(matches!(
            result,
            Err(OriginationError::Upstream { status: 500, .. })
        ));

        let statement = service.statement(statement_id).unwrap();
        assert_ne!(statement.status, ApplicationStatus::CcDenied);
        assert_eq!(statement.status_history.len(), history_before);
        assert!(service.notifier.notifications().is_empty());
    }
}
