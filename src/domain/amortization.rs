//! Level-payment amortization for fixed-rate, fixed-term loans.
//!
//! Every function here is a pure computation over `f64`. Inputs are not
//! validated: a zero term divides by zero and negative inputs produce whatever
//! the arithmetic produces. Use [`LoanParameters::new`] and [`quote`] when the
//! inputs come from outside the program.
//!
//! [`LoanParameters::new`]: crate::domain::loan::LoanParameters::new

use super::compounding::CompoundingConvention;
use super::loan::{LoanParameters, PaymentResult};
use crate::error::{LoanError, Result};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts a nominal annual rate (in percent) into an effective monthly rate.
///
/// The nominal rate is first compounded into an effective annual rate using the
/// chosen convention, then that annual rate is taken back down to a monthly one.
/// A zero rate yields exactly `0.0`.
pub fn effective_periodic_rate(annual_rate_percent: f64, compounding: CompoundingConvention) -> f64 {
    let nominal = annual_rate_percent / 100.0;
    let periods = f64::from(compounding.periods_per_year());
    let effective_annual = (1.0 + nominal / periods).powf(periods) - 1.0;
    (1.0 + effective_annual).powf(1.0 / MONTHS_PER_YEAR) - 1.0
}

/// Level monthly payment that repays `principal` over `term_in_payment_periods`.
///
/// The term is a floating count so fractional periods are kept as given.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_in_payment_periods: f64,
    compounding: CompoundingConvention,
) -> f64 {
    let rate = effective_periodic_rate(annual_rate_percent, compounding);

    // Exact comparison: only a true zero rate takes the straight-line path.
    if rate == 0.0 {
        return principal / term_in_payment_periods;
    }

    let growth = (1.0 + rate).powf(term_in_payment_periods);
    let discount_factor = (growth - 1.0) / (rate * growth);
    principal / discount_factor
}

/// Monthly payment for a mortgage whose term is expressed in years.
pub fn mortgage_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_in_years: f64,
    compounding: CompoundingConvention,
) -> f64 {
    monthly_payment(
        principal,
        annual_rate_percent,
        term_in_years * MONTHS_PER_YEAR,
        compounding,
    )
}

/// Monthly payment for a car loan whose term is expressed in months.
pub fn car_loan_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_in_months: f64,
    compounding: CompoundingConvention,
) -> f64 {
    monthly_payment(principal, annual_rate_percent, term_in_months, compounding)
}

/// Prices a validated set of loan parameters.
///
/// Unlike [`monthly_payment`], this never hands back a non-finite figure: when
/// `rate * (1 + rate)^n` overflows, the payment is computed from the equivalent
/// `rate / (1 - (1 + rate)^-n)` form, and a payment that still cannot be
/// represented is reported as [`LoanError::PaymentOverflow`].
pub fn quote(parameters: &LoanParameters) -> Result<PaymentResult> {
    let principal = parameters.principal();
    let periods = parameters.term_in_payment_periods();
    let rate = effective_periodic_rate(
        parameters.annual_rate_percent(),
        parameters.compounding(),
    );

    let payment = if rate == 0.0 {
        principal / periods
    } else if (rate * (1.0 + rate).powf(periods)).is_finite() {
        monthly_payment(
            principal,
            parameters.annual_rate_percent(),
            periods,
            parameters.compounding(),
        )
    } else {
        principal * rate / (1.0 - (1.0 + rate).powf(-periods))
    };

    let result = PaymentResult::new(payment, periods);
    if !result.monthly_payment.is_finite() || !result.total_cost.is_finite() {
        return Err(LoanError::PaymentOverflow);
    }
    Ok(result)
}
