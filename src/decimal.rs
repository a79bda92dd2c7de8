use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// Money amount carried at full working precision.
///
/// Arithmetic never rounds; calculation chains (annuity division, the
/// schedule walk) run on the full precision the underlying decimal carries,
/// and values are reduced to 2 fractional digits only at presentation
/// boundaries. Rates, payments and totals present with round-half-to-even;
/// schedule rows present with round-half-up. The asymmetry is part of the
/// disclosed figures and must not be unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?))
    }

    /// create from integer amount (whole currency units)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// presented value: 2 fractional digits, round half to even
    pub fn present(&self) -> Self {
        self.round_dp_with(2, RoundingStrategy::MidpointNearestEven)
    }

    /// presented schedule-row value: 2 fractional digits, round half up
    pub fn present_half_up(&self) -> Self {
        self.round_dp_with(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// round to the given fractional digits with an explicit strategy
    pub fn round_dp_with(&self, dp: u32, strategy: RoundingStrategy) -> Self {
        Money(self.0.round_dp_with_strategy(dp, strategy))
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i64> for Money {
    fn from(i: i64) -> Self {
        Money::from_major(i)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(self.0 / other)
    }
}

/// rate type for annual/monthly interest rates and additive adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.25 for 25% annual)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }

    /// monthly rate from annual rate
    pub fn monthly(&self) -> Rate {
        Rate(self.0 / dec!(12))
    }

    /// presented value: 2 fractional digits, round half to even
    pub fn present(&self) -> Rate {
        Rate(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

impl Add for Rate {
    type Output = Rate;

    fn add(self, other: Rate) -> Rate {
        Rate(self.0 + other.0)
    }
}

impl Sub for Rate {
    type Output = Rate;

    fn sub(self, other: Rate) -> Rate {
        Rate(self.0 - other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keeps_full_precision() {
        let third = Money::from_major(1) / dec!(3);
        assert_ne!(third * dec!(3), Money::from_major(1));
        // presentation is where precision is dropped
        assert_eq!((third * dec!(3)).present(), Money::from_decimal(dec!(1.00)));
    }

    #[test]
    fn presentation_rounds_half_to_even() {
        assert_eq!(
            Money::from_decimal(dec!(2.125)).present(),
            Money::from_decimal(dec!(2.12))
        );
        assert_eq!(
            Money::from_decimal(dec!(2.135)).present(),
            Money::from_decimal(dec!(2.14))
        );
    }

    #[test]
    fn schedule_presentation_rounds_half_up() {
        assert_eq!(
            Money::from_decimal(dec!(2.125)).present_half_up(),
            Money::from_decimal(dec!(2.13))
        );
        assert_eq!(
            Money::from_decimal(dec!(2.135)).present_half_up(),
            Money::from_decimal(dec!(2.14))
        );
    }

    #[test]
    fn monthly_rate_is_annual_over_twelve() {
        let annual = Rate::from_decimal(dec!(0.12));
        assert_eq!(annual.monthly(), Rate::from_decimal(dec!(0.01)));
    }

    #[test]
    fn rate_adjustments_are_additive() {
        let base = Rate::from_decimal(dec!(0.25));
        let adjusted = base + Rate::from_decimal(dec!(-0.03));
        assert_eq!(adjusted, Rate::from_decimal(dec!(0.22)));
    }
}
