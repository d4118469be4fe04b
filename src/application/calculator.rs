use crate::domain::amortization;
use crate::domain::compounding::CompoundingConvention;
use crate::domain::loan::{LoanKind, LoanParameters, PaymentResult};
use crate::error::Result;
use crate::settings::{LoanDefaults, Settings};
use serde::Serialize;

/// Raw text for one loan, as typed by the user.
///
/// A field left as `None` was never filled in and takes the configured default
/// (the amount has no default and becomes zero).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanForm {
    pub amount: Option<String>,
    pub annual_rate_percent: Option<String>,
    pub term: Option<String>,
    pub compounding: Option<String>,
}

/// Parses numeric form text, treating empty, unparsable or non-finite text as zero.
pub fn parse_number_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !text.trim().is_empty() {
                tracing::warn!(input = text, "unparsable number, using 0");
            }
            0.0
        }
    }
}

/// The priced loan together with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanQuote {
    pub kind: LoanKind,
    pub parameters: LoanParameters,
    #[serde(flatten)]
    pub result: PaymentResult,
}

impl LoanQuote {
    pub fn has_principal(&self) -> bool {
        self.parameters.principal() > 0.0
    }

    /// Headline shown for the loan, or a hint when no amount was entered.
    pub fn payment_message(&self) -> String {
        match (self.kind, self.has_principal()) {
            (LoanKind::Mortgage, true) => format!(
                "Monthly Mortgage Payment: ${:.2}",
                self.result.monthly_payment
            ),
            (LoanKind::Car, true) => {
                format!("Monthly Car Payment: ${:.2}", self.result.monthly_payment)
            }
            (LoanKind::Mortgage, false) => "No mortgage loan amount entered".to_string(),
            (LoanKind::Car, false) => "No car loan amount entered".to_string(),
        }
    }

    pub fn total_message(&self) -> String {
        match self.kind {
            LoanKind::Mortgage => format!("Total Mortgage Cost: {:.2}", self.result.total_cost),
            LoanKind::Car => format!("Total Car Loan Cost: {:.2}", self.result.total_cost),
        }
    }
}

/// Turns loan forms into quotes.
///
/// This is the boundary where free text becomes typed loan parameters; the
/// amortization functions behind it only ever see sanitized numbers.
pub struct LoanCalculator {
    mortgage: LoanDefaults,
    car_loan: LoanDefaults,
}

impl LoanCalculator {
    pub fn new(settings: &Settings) -> Self {
        Self {
            mortgage: settings.mortgage,
            car_loan: settings.car_loan,
        }
    }

    fn defaults(&self, kind: LoanKind) -> &LoanDefaults {
        match kind {
            LoanKind::Mortgage => &self.mortgage,
            LoanKind::Car => &self.car_loan,
        }
    }

    /// Sanitizes `form` into validated parameters for a loan of `kind`.
    pub fn parameters(&self, kind: LoanKind, form: &LoanForm) -> Result<LoanParameters> {
        let defaults = self.defaults(kind);

        let principal = form.amount.as_deref().map_or(0.0, parse_number_or_zero);
        let rate = form
            .annual_rate_percent
            .as_deref()
            .map_or(defaults.annual_rate_percent, parse_number_or_zero);
        let term = form.term.as_deref().map_or(defaults.term, parse_number_or_zero);
        let compounding = form
            .compounding
            .as_deref()
            .map_or(defaults.compounding, CompoundingConvention::parse_or_default);

        LoanParameters::for_kind(kind, principal, rate, term, compounding)
    }

    pub fn calculate(&self, kind: LoanKind, form: &LoanForm) -> Result<LoanQuote> {
        let parameters = self.parameters(kind, form)?;
        let result = amortization::quote(&parameters)?;

        tracing::debug!(
            %kind,
            principal = parameters.principal(),
            rate = parameters.annual_rate_percent(),
            periods = parameters.term_in_payment_periods(),
            compounding = %parameters.compounding(),
            monthly_payment = result.monthly_payment,
            "loan quoted"
        );

        Ok(LoanQuote {
            kind,
            parameters,
            result,
        })
    }

    /// Prices the mortgage and the car loan independently.
    ///
    /// A form that cannot be priced does not keep the other loan from being quoted.
    pub fn calculate_loans(
        &self,
        mortgage: &LoanForm,
        car_loan: &LoanForm,
    ) -> (Result<LoanQuote>, Result<LoanQuote>) {
        (
            self.calculate(LoanKind::Mortgage, mortgage),
            self.calculate(LoanKind::Car, car_loan),
        )
    }
}
