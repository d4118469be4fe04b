//! Domain layer: loan and budget value types plus the amortization math.

pub mod amortization;
pub mod budget;
pub mod compounding;
pub mod loan;
pub mod ports;
