use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a batch file with `rows` car loans of increasing principal.
pub fn generate_loans_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["kind", "principal", "rate", "term", "compounding"])?;

    for i in 1..=rows {
        wtr.write_record(["car", &(i * 1000).to_string(), "5", "36", "Monthly"])?;
    }

    wtr.flush()?;
    Ok(())
}

/// A random (principal, rate percent, term in months) triple in everyday ranges.
pub fn random_loan(rng: &mut impl Rng) -> (f64, f64, f64) {
    let principal = rng.gen_range(1_000.0..1_000_000.0);
    let rate = rng.gen_range(0.1..15.0);
    let term = f64::from(rng.gen_range(1u32..=480));
    (principal, rate, term)
}
