use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// one row of the binding payment schedule
///
/// All money fields carry the presented 2-dp half-up values; the schedule
/// walk itself runs on unrounded balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    pub number: u32,
    pub date: NaiveDate,
    pub total_payment: Money,
    pub interest_payment: Money,
    pub debt_payment: Money,
    pub remaining_debt: Money,
}

/// annuity payment: `amount × r / (1 − (1+r)^−n)`
///
/// The division chain stays at full working precision; callers present the
/// result separately. A zero rate degrades to straight-line repayment.
pub fn annuity_payment(amount: Money, monthly_rate: Rate, term: u32) -> Money {
    if term == 0 {
        return amount;
    }

    let r = monthly_rate.as_decimal();
    if r.is_zero() {
        return amount / Decimal::from(term);
    }

    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..term {
        compound *= base;
    }

    let dividend = amount.as_decimal() * r;
    let divisor = Decimal::ONE - (Decimal::ONE / compound);

    Money::from_decimal(dividend / divisor)
}

/// total cost of credit: the raw monthly payment multiplied by the term
///
/// Known approximation: this is NOT the sum of the presented schedule rows
/// and can diverge from it by a cent. Disclosed figures are built against
/// this formula, so it stays.
pub fn total_cost(payment: Money, term: u32) -> Money {
    payment * Decimal::from(term)
}

/// walk the schedule for months 1..=term
///
/// Each month: interest = balance × monthly rate, principal portion =
/// payment − interest, balance −= principal portion. On the final month a
/// naive balance ≤ 0 is clamped to exactly zero; a positive residual is
/// carried as-is. Due dates run monthly starting one month after
/// `calculated_on`.
pub fn build_schedule(
    amount: Money,
    monthly_rate: Rate,
    payment: Money,
    term: u32,
    calculated_on: NaiveDate,
) -> Vec<PaymentScheduleEntry> {
    let r = monthly_rate.as_decimal();
    let pay = payment.as_decimal();

    let mut entries = Vec::with_capacity(term as usize);
    let mut remaining = amount.as_decimal();

    for number in 1..=term {
        let interest = remaining * r;
        let debt = pay - interest;
        let mut next = remaining - debt;
        if number == term && next <= Decimal::ZERO {
            next = Decimal::ZERO;
        }

        entries.push(PaymentScheduleEntry {
            number,
            date: due_date(calculated_on, number),
            total_payment: Money::from_decimal(pay).present_half_up(),
            interest_payment: Money::from_decimal(interest).present_half_up(),
            debt_payment: Money::from_decimal(debt).present_half_up(),
            remaining_debt: Money::from_decimal(next).present_half_up(),
        });

        remaining = next;
    }

    entries
}

fn due_date(calculated_on: NaiveDate, months_ahead: u32) -> NaiveDate {
    calculated_on
        .checked_add_months(Months::new(months_ahead))
        .unwrap_or(calculated_on)
}
