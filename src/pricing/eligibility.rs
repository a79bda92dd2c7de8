use chrono::{Datelike, NaiveDate};
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;

use crate::decimal::Rate;
use crate::errors::{OriginationError, Result};
use crate::types::{EmploymentStatus, Gender, MaritalStatus, ScoringData, WorkPosition};

/// hard eligibility checks, evaluated in order; the first failure is the
/// reported denial reason
pub fn check_eligibility(data: &ScoringData, today: NaiveDate) -> Result<()> {
    if data.employment.status == EmploymentStatus::NotEmployed {
        return Err(denial("Must be employed to get a loan."));
    }

    if data.employment.total_experience_months < 18 {
        return Err(denial(
            "Must be working over 18 months in total to get a loan.",
        ));
    }

    if data.employment.current_experience_months < 3 {
        return Err(denial(
            "Must be working at a current job at least for full 3 months.",
        ));
    }

    let age = age_in_years(data.birth_date, today);
    if age < 20 {
        return Err(denial("Must be at least 20 years old to get a loan."));
    }
    if age > 65 {
        return Err(denial("Must be at most 65 years old to get a loan."));
    }

    let ceiling = data.employment.salary * dec!(24);
    if data.amount > ceiling {
        let mut presented = ceiling
            .round_dp_with(1, RoundingStrategy::MidpointNearestEven)
            .as_decimal();
        presented.rescale(1);
        return Err(denial(&format!(
            "The requested amount must be at most {presented}"
        )));
    }

    Ok(())
}

/// additive rate adjustment: the sum of independent rules keyed by
/// employment status, position, marital status, and a gender×age bracket
///
/// A missing position is a denial, not a silent zero.
pub fn rate_adjustment(data: &ScoringData, today: NaiveDate) -> Result<Rate> {
    let position = data
        .employment
        .position
        .ok_or_else(|| denial("Employment position must be provided."))?;

    let age = age_in_years(data.birth_date, today);

    let mut adjustment = dec!(0);

    adjustment += match data.employment.status {
        EmploymentStatus::SelfEmployed => dec!(0.02),
        EmploymentStatus::Employer => dec!(0.01),
        _ => dec!(0),
    };

    adjustment += match position {
        WorkPosition::Junior => dec!(0.01),
        WorkPosition::Senior => dec!(-0.01),
        WorkPosition::TeamLead => dec!(-0.02),
        WorkPosition::TopManager => dec!(-0.03),
        _ => dec!(0),
    };

    adjustment += match data.marital_status {
        MaritalStatus::Married => dec!(-0.03),
        MaritalStatus::Divorced => dec!(0.01),
        _ => dec!(0),
    };

    let discounted_bracket = match data.gender {
        Gender::Female => (32..=60).contains(&age),
        Gender::Male => (30..=55).contains(&age),
        Gender::NonBinary => false,
    };
    if discounted_bracket {
        adjustment -= dec!(0.03);
    }

    Ok(Rate::from_decimal(adjustment))
}

/// whole years between the birth date and today
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

fn denial(reason: &str) -> OriginationError {
    OriginationError::Denied {
        reason: reason.to_string(),
    }
}
