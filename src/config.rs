use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{OriginationError, Result};

/// pricing configuration, injected into the calculator at construction
///
/// Every offer starts from `base_rate`; each enabled flag subtracts its
/// decrement. The two insurance rates price the premium that is added to
/// the amortized principal when insurance is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// annual rate before any discount
    pub base_rate: Rate,
    /// premium per unit of principal for regular applicants
    pub insurance_rate: Rate,
    /// premium per unit of principal for salary clients
    pub client_insurance_rate: Rate,
    /// rate discount when insurance is enabled
    pub insurance_rate_decrement: Rate,
    /// rate discount for salary clients
    pub salary_client_rate_decrement: Rate,
}

impl RateConfig {
    /// validated construction
    pub fn new(
        base_rate: Rate,
        insurance_rate: Rate,
        client_insurance_rate: Rate,
        insurance_rate_decrement: Rate,
        salary_client_rate_decrement: Rate,
    ) -> Result<Self> {
        let config = Self {
            base_rate,
            insurance_rate,
            client_insurance_rate,
            insurance_rate_decrement,
            salary_client_rate_decrement,
        };
        config.validate()?;
        Ok(config)
    }

    /// standard retail configuration
    pub fn standard() -> Self {
        Self {
            base_rate: Rate::from_decimal(dec!(0.25)),
            insurance_rate: Rate::from_decimal(dec!(0.05)),
            client_insurance_rate: Rate::from_decimal(dec!(0.025)),
            insurance_rate_decrement: Rate::from_decimal(dec!(0.02)),
            salary_client_rate_decrement: Rate::from_decimal(dec!(0.01)),
        }
    }

    fn validate(&self) -> Result<()> {
        let rates = [
            ("base_rate", self.base_rate),
            ("insurance_rate", self.insurance_rate),
            ("client_insurance_rate", self.client_insurance_rate),
            ("insurance_rate_decrement", self.insurance_rate_decrement),
            ("salary_client_rate_decrement", self.salary_client_rate_decrement),
        ];
        for (name, rate) in rates {
            if rate.as_decimal().is_sign_negative() {
                return Err(OriginationError::InvalidConfiguration {
                    message: format!("{name} must not be negative"),
                });
            }
        }

        let combined = self.insurance_rate_decrement + self.salary_client_rate_decrement;
        if combined.as_decimal() >= self.base_rate.as_decimal() {
            return Err(OriginationError::InvalidConfiguration {
                message: "combined rate decrements must stay below the base rate".to_string(),
            });
        }

        Ok(())
    }
}
