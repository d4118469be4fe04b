mod common;

use loanwise::domain::amortization::{
    car_loan_payment, effective_periodic_rate, monthly_payment, mortgage_payment,
};
use loanwise::domain::compounding::CompoundingConvention;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;
const CONVENTIONS: [CompoundingConvention; 2] =
    [CompoundingConvention::Daily, CompoundingConvention::Monthly];

#[test]
fn test_zero_rate_is_straight_line() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let (principal, _, term) = common::random_loan(&mut rng);
        for convention in CONVENTIONS {
            assert_eq!(
                monthly_payment(principal, 0.0, term, convention),
                principal / term
            );
        }
    }
}

#[test]
fn test_zero_principal_pays_nothing() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let (_, rate, term) = common::random_loan(&mut rng);
        for convention in CONVENTIONS {
            assert_eq!(monthly_payment(0.0, rate, term, convention), 0.0);
        }
    }
}

#[test]
fn test_payment_increases_with_rate() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..SAMPLES {
        let (principal, rate, term) = common::random_loan(&mut rng);
        let higher = rate + rng.gen_range(0.05..5.0);
        for convention in CONVENTIONS {
            let low = monthly_payment(principal, rate, term, convention);
            let high = monthly_payment(principal, higher, term, convention);
            assert!(high > low, "{principal} over {term}: {rate}% -> {low}, {higher}% -> {high}");
        }
    }
}

#[test]
fn test_payment_decreases_with_term() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SAMPLES {
        let (principal, rate, term) = common::random_loan(&mut rng);
        let longer = term + f64::from(rng.gen_range(1u32..=120));
        for convention in CONVENTIONS {
            let short = monthly_payment(principal, rate, term, convention);
            let long = monthly_payment(principal, rate, longer, convention);
            assert!(long < short, "{principal} at {rate}%: {term} -> {short}, {longer} -> {long}");
        }
    }
}

#[test]
fn test_payment_is_finite_and_non_negative() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..SAMPLES {
        let (principal, rate, term) = common::random_loan(&mut rng);
        for convention in CONVENTIONS {
            let payment = monthly_payment(principal, rate, term, convention);
            assert!(payment.is_finite() && payment >= 0.0);
        }
    }
}

#[test]
fn test_daily_compounding_beats_monthly() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..SAMPLES {
        let rate = rng.gen_range(0.1..30.0);
        assert!(
            effective_periodic_rate(rate, CompoundingConvention::Daily)
                > effective_periodic_rate(rate, CompoundingConvention::Monthly)
        );
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..SAMPLES {
        let (principal, rate, term) = common::random_loan(&mut rng);
        let first = mortgage_payment(principal, rate, term / 12.0, CompoundingConvention::Daily);
        let second = mortgage_payment(principal, rate, term / 12.0, CompoundingConvention::Daily);
        assert_eq!(first.to_bits(), second.to_bits());

        let first = car_loan_payment(principal, rate, term, CompoundingConvention::Monthly);
        let second = car_loan_payment(principal, rate, term, CompoundingConvention::Monthly);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn test_generated_batch_is_priced_in_order() {
    use assert_cmd::cargo_bin;
    use std::process::Command;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("generated.csv");
    common::generate_loans_csv(&input, 25).expect("Failed to generate CSV");

    let output = Command::new(cargo_bin!("loanwise"))
        .arg("batch")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let payments: Vec<f64> = reader
        .records()
        .map(|record| record.unwrap()[5].parse().unwrap())
        .collect();

    // Header + 25 rows in, 25 quotes out
    assert_eq!(payments.len(), 25);
    assert!(payments.windows(2).all(|pair| pair[0] < pair[1]));
    assert!((payments[4] - 149.85).abs() < 0.005);
}
