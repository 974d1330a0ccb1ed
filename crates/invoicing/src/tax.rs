//! Taxes and the policies that compute them.

use serde::{Deserialize, Serialize};

use salesbook_core::{DomainError, DomainResult, Money, ValueObject};
use salesbook_products::ProductType;

/// 100% expressed in basis points.
const MAX_RATE_BASIS_POINTS: u32 = 10_000;

pub const ENV_TAX_RATE_DRUG: &str = "SALESBOOK_TAX_RATE_DRUG";
pub const ENV_TAX_RATE_FOOD: &str = "SALESBOOK_TAX_RATE_FOOD";
pub const ENV_TAX_RATE_STANDARD: &str = "SALESBOOK_TAX_RATE_STANDARD";

/// Tax computed for one invoice line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for Tax {}

/// Tax rule applied to every line during issuance.
///
/// Called once per request item, in request order. An error aborts issuance
/// and is returned to the caller as-is.
pub trait TaxPolicy {
    fn calculate_tax(&self, net: Money, product_type: ProductType) -> DomainResult<Tax>;
}

impl<P: TaxPolicy + ?Sized> TaxPolicy for &P {
    fn calculate_tax(&self, net: Money, product_type: ProductType) -> DomainResult<Tax> {
        (**self).calculate_tax(net, product_type)
    }
}

/// Tax rate per product classification, in basis points (2300 = 23%).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTaxRates")]
pub struct TaxRates {
    drug: u32,
    food: u32,
    standard: u32,
}

impl TaxRates {
    pub fn new(drug: u32, food: u32, standard: u32) -> DomainResult<Self> {
        for (kind, rate) in [("drug", drug), ("food", food), ("standard", standard)] {
            if rate > MAX_RATE_BASIS_POINTS {
                return Err(DomainError::validation(format!(
                    "{kind} tax rate must be at most {MAX_RATE_BASIS_POINTS} basis points (got {rate})"
                )));
            }
        }
        Ok(Self {
            drug,
            food,
            standard,
        })
    }

    /// Rates from `SALESBOOK_TAX_RATE_{DRUG,FOOD,STANDARD}`, defaulting per
    /// variable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TaxRates::from_env`] over an arbitrary key lookup.
    ///
    /// Missing keys keep the default rate. Unusable values keep the default
    /// too, with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, fallback: u32| -> u32 {
            let Some(raw) = lookup(key) else {
                return fallback;
            };
            match raw.trim().parse::<u32>() {
                Ok(rate) if rate <= MAX_RATE_BASIS_POINTS => rate,
                _ => {
                    tracing::warn!(key, value = %raw, fallback, "invalid tax rate; using default");
                    fallback
                }
            }
        };

        Self {
            drug: read(ENV_TAX_RATE_DRUG, defaults.drug),
            food: read(ENV_TAX_RATE_FOOD, defaults.food),
            standard: read(ENV_TAX_RATE_STANDARD, defaults.standard),
        }
    }

    pub fn rate_for(&self, product_type: ProductType) -> u32 {
        match product_type {
            ProductType::Drug => self.drug,
            ProductType::Food => self.food,
            ProductType::Standard => self.standard,
        }
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            drug: 500,
            food: 700,
            standard: 2300,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawTaxRates {
    drug: u32,
    food: u32,
    standard: u32,
}

impl Default for RawTaxRates {
    fn default() -> Self {
        let rates = TaxRates::default();
        Self {
            drug: rates.drug,
            food: rates.food,
            standard: rates.standard,
        }
    }
}

impl TryFrom<RawTaxRates> for TaxRates {
    type Error = DomainError;

    fn try_from(raw: RawTaxRates) -> Result<Self, Self::Error> {
        TaxRates::new(raw.drug, raw.food, raw.standard)
    }
}

/// Flat-rate tax per product classification.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DefaultTaxPolicy {
    rates: TaxRates,
}

impl DefaultTaxPolicy {
    pub fn new(rates: TaxRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }
}

impl TaxPolicy for DefaultTaxPolicy {
    fn calculate_tax(&self, net: Money, product_type: ProductType) -> DomainResult<Tax> {
        let rate = self.rates.rate_for(product_type);
        let amount = net.apply_rate(rate)?;
        Ok(Tax::new(
            amount,
            format!("{} ({product_type})", format_percent(rate)),
        ))
    }
}

/// 2300 -> "23%", 750 -> "7.5%", 5 -> "0.05%".
fn format_percent(basis_points: u32) -> String {
    let whole = basis_points / 100;
    let fraction = basis_points % 100;
    if fraction == 0 {
        format!("{whole}%")
    } else {
        let fraction = format!("{fraction:02}");
        format!("{whole}.{}%", fraction.trim_end_matches('0'))
    }
}
