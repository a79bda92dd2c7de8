pub mod eligibility;

use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::LoanRequest;
use crate::config::RateConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::payments::{annuity_payment, build_schedule, total_cost};
use crate::types::{Credit, CreditStatus, ScoringData, StatementId};

pub use eligibility::{check_eligibility, rate_adjustment};

/// a priced, non-binding loan quote; four are generated per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub statement_id: StatementId,
    /// the amount the client asked for, untouched by insurance premiums
    pub requested_amount: Money,
    /// total repayable over the loan's life
    pub total_amount: Money,
    pub term: u32,
    pub monthly_payment: Money,
    pub rate: Rate,
    pub is_insurance_enabled: bool,
    pub is_salary_client: bool,
}

/// the pricing engine: flag-based offer rates, the four-offer fan, and the
/// full credit calculation
///
/// Pure and stateless apart from the injected configuration; safe to call
/// concurrently.
pub struct Calculator {
    config: RateConfig,
}

impl Calculator {
    pub fn new(config: RateConfig) -> Self {
        Self { config }
    }

    /// rate for one flag combination: base minus the enabled decrements
    fn flag_rate(&self, is_insurance_enabled: bool, is_salary_client: bool) -> Rate {
        let mut rate = self.config.base_rate;
        if is_insurance_enabled {
            rate = rate - self.config.insurance_rate_decrement;
        }
        if is_salary_client {
            rate = rate - self.config.salary_client_rate_decrement;
        }
        rate
    }

    /// insurance premium added to the amortized principal when insured
    fn insurance_premium(
        &self,
        amount: Money,
        is_insurance_enabled: bool,
        is_salary_client: bool,
    ) -> Money {
        if !is_insurance_enabled {
            return Money::ZERO;
        }
        let premium_rate = if is_salary_client {
            self.config.client_insurance_rate
        } else {
            self.config.insurance_rate
        };
        amount * premium_rate.as_decimal()
    }

    /// price one offer for a single flag combination
    pub fn offer(
        &self,
        request: &LoanRequest,
        is_insurance_enabled: bool,
        is_salary_client: bool,
    ) -> LoanOffer {
        let rate = self.flag_rate(is_insurance_enabled, is_salary_client);
        let premium = self.insurance_premium(request.amount, is_insurance_enabled, is_salary_client);
        let insured_amount = request.amount + premium;

        let payment = annuity_payment(insured_amount, rate.monthly(), request.term);
        let total = total_cost(payment, request.term);

        LoanOffer {
            statement_id: Uuid::new_v4(),
            requested_amount: request.amount.present(),
            total_amount: total.present(),
            term: request.term,
            monthly_payment: payment.present(),
            rate,
            is_insurance_enabled,
            is_salary_client,
        }
    }

    /// price all four flag combinations, sorted by descending rate
    ///
    /// The generation order is fixed so that equal-rate ties stay
    /// deterministic under the stable sort.
    pub fn offers(&self, request: &LoanRequest) -> Vec<LoanOffer> {
        let mut offers = vec![
            self.offer(request, false, false),
            self.offer(request, false, true),
            self.offer(request, true, false),
            self.offer(request, true, true),
        ];
        offers.sort_by(|a, b| b.rate.cmp(&a.rate));
        offers
    }

    /// calculate the binding credit for scored applicant data
    ///
    /// The caller is expected to have run the eligibility checks; the rate
    /// adjustment itself can still deny (missing position).
    pub fn credit(&self, data: &ScoringData, time: &SafeTimeProvider) -> Result<Credit> {
        let today = time.now().date_naive();

        let adjustment = rate_adjustment(data, today)?;
        let rate = self.flag_rate(data.is_insurance_enabled, data.is_salary_client) + adjustment;

        let premium =
            self.insurance_premium(data.amount, data.is_insurance_enabled, data.is_salary_client);
        let insured_amount = data.amount + premium;

        let monthly_rate = rate.monthly();
        let payment = annuity_payment(insured_amount, monthly_rate, data.term);
        let psk = total_cost(payment, data.term);

        tracing::info!(
            yearly_rate = %rate.present(),
            monthly_payment = %payment.present(),
            psk = %psk.present(),
            "calculated credit terms"
        );

        let payment_schedule = build_schedule(insured_amount, monthly_rate, payment, data.term, today);

        Ok(Credit {
            credit_id: Uuid::new_v4(),
            amount: data.amount.present(),
            term: data.term,
            monthly_payment: payment.present(),
            rate,
            psk: psk.present(),
            is_insurance_enabled: data.is_insurance_enabled,
            is_salary_client: data.is_salary_client,
            payment_schedule,
            credit_status: CreditStatus::Calculated,
        })
    }
}
