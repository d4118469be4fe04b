use crate::error::LoanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often interest compounds before the nominal rate is annualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompoundingConvention {
    /// 365 compounding periods per year.
    Daily,
    /// 12 compounding periods per year.
    #[default]
    Monthly,
}

impl CompoundingConvention {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingConvention::Daily => 365,
            CompoundingConvention::Monthly => 12,
        }
    }

    /// Parses free text coming from a form or a CSV cell.
    ///
    /// Anything that is not a recognized label (including empty text) falls back
    /// to `Monthly`, which is what the selector shows before the user touches it.
    pub fn parse_or_default(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl FromStr for CompoundingConvention {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("daily") {
            Ok(CompoundingConvention::Daily)
        } else if label.eq_ignore_ascii_case("monthly") {
            Ok(CompoundingConvention::Monthly)
        } else {
            Err(LoanError::UnknownCompounding(label.to_string()))
        }
    }
}

impl fmt::Display for CompoundingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingConvention::Daily => "Daily",
            CompoundingConvention::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
