use super::compounding::CompoundingConvention;
use crate::error::{LoanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two loans the calculator prices side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    /// Term entered in years.
    Mortgage,
    /// Term entered in months.
    #[serde(alias = "car_loan", alias = "carloan")]
    Car,
}

impl LoanKind {
    /// Number of payment periods in one unit of the term this loan is entered in.
    pub fn periods_per_term_unit(&self) -> f64 {
        match self {
            LoanKind::Mortgage => 12.0,
            LoanKind::Car => 1.0,
        }
    }
}

impl fmt::Display for LoanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanKind::Mortgage => "mortgage",
            LoanKind::Car => "car",
        };
        write!(f, "{name}")
    }
}

/// Inputs to a single payment calculation.
///
/// Built through [`LoanParameters::new`] (or the per-kind helpers), which
/// rejects inputs the amortization formula has no meaningful answer for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanParameters {
    principal: f64,
    annual_rate_percent: f64,
    term_in_payment_periods: f64,
    compounding: CompoundingConvention,
}

impl LoanParameters {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_in_payment_periods: f64,
        compounding: CompoundingConvention,
    ) -> Result<Self> {
        if !principal.is_finite() || principal < 0.0 {
            return Err(LoanError::InvalidPrincipal(principal));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(LoanError::InvalidRate(annual_rate_percent));
        }
        if !term_in_payment_periods.is_finite() || term_in_payment_periods < 1.0 {
            return Err(LoanError::InvalidTerm(term_in_payment_periods));
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            term_in_payment_periods,
            compounding,
        })
    }

    pub fn mortgage(
        principal: f64,
        annual_rate_percent: f64,
        term_in_years: f64,
        compounding: CompoundingConvention,
    ) -> Result<Self> {
        Self::for_kind(
            LoanKind::Mortgage,
            principal,
            annual_rate_percent,
            term_in_years,
            compounding,
        )
    }

    pub fn car_loan(
        principal: f64,
        annual_rate_percent: f64,
        term_in_months: f64,
        compounding: CompoundingConvention,
    ) -> Result<Self> {
        Self::for_kind(
            LoanKind::Car,
            principal,
            annual_rate_percent,
            term_in_months,
            compounding,
        )
    }

    /// Converts a term in the loan's own unit (years or months) into payment periods.
    pub fn for_kind(
        kind: LoanKind,
        principal: f64,
        annual_rate_percent: f64,
        term: f64,
        compounding: CompoundingConvention,
    ) -> Result<Self> {
        Self::new(
            principal,
            annual_rate_percent,
            term * kind.periods_per_term_unit(),
            compounding,
        )
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn term_in_payment_periods(&self) -> f64 {
        self.term_in_payment_periods
    }

    pub fn compounding(&self) -> CompoundingConvention {
        self.compounding
    }
}

/// Level payment and what it adds up to over the whole term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentResult {
    pub monthly_payment: f64,
    pub total_cost: f64,
}

impl PaymentResult {
    pub fn new(monthly_payment: f64, term_in_payment_periods: f64) -> Self {
        Self {
            monthly_payment,
            total_cost: monthly_payment * term_in_payment_periods,
        }
    }
}
