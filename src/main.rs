use clap::{Args, Parser, Subcommand, ValueEnum};
use loanwise::application::calculator::{LoanCalculator, LoanForm, LoanQuote};
use loanwise::application::ledger::BudgetLedger;
use loanwise::domain::budget::EntryKind;
use loanwise::domain::loan::LoanKind;
use loanwise::infrastructure::in_memory::InMemoryEntryStore;
use loanwise::interfaces::csv::budget_reader::EntryReader;
use loanwise::interfaces::csv::loan_reader::LoanRequestReader;
use loanwise::interfaces::csv::quote_writer::QuoteWriter;
use loanwise::settings::Settings;
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML). `config/loanwise.toml` is read when present.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly payment and total cost for a mortgage and a car loan
    Quote(QuoteArgs),
    /// Price every loan in a CSV file (kind, principal, rate, term, compounding)
    Batch {
        /// Input loan requests CSV file
        input: PathBuf,
    },
    /// Monthly income, expenses and net from a CSV file (kind, name, amount)
    Budget {
        /// Input budget entries CSV file
        input: PathBuf,
    },
}

#[derive(Args)]
struct QuoteArgs {
    /// Mortgage loan amount
    #[arg(long)]
    mortgage_amount: Option<String>,
    /// Mortgage nominal annual interest rate, in percent
    #[arg(long)]
    mortgage_rate: Option<String>,
    /// Mortgage term in years
    #[arg(long)]
    mortgage_years: Option<String>,
    /// Mortgage compounding (Daily or Monthly)
    #[arg(long)]
    mortgage_compounding: Option<String>,
    /// Car loan amount
    #[arg(long)]
    car_amount: Option<String>,
    /// Car loan nominal annual interest rate, in percent
    #[arg(long)]
    car_rate: Option<String>,
    /// Car loan term in months
    #[arg(long)]
    car_months: Option<String>,
    /// Car loan compounding (Daily or Monthly)
    #[arg(long)]
    car_compounding: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).into_diagnostic()?;
    if let Some(log_level) = cli.log_level {
        settings.log_level = log_level;
    }
    init_tracing(&settings.log_level);

    match cli.command {
        Command::Quote(args) => run_quote(&settings, args),
        Command::Batch { input } => run_batch(&settings, input),
        Command::Budget { input } => run_budget(input),
    }
}

fn run_quote(settings: &Settings, args: QuoteArgs) -> Result<()> {
    let calculator = LoanCalculator::new(settings);
    let mortgage = LoanForm {
        amount: args.mortgage_amount,
        annual_rate_percent: args.mortgage_rate,
        term: args.mortgage_years,
        compounding: args.mortgage_compounding,
    };
    let car_loan = LoanForm {
        amount: args.car_amount,
        annual_rate_percent: args.car_rate,
        term: args.car_months,
        compounding: args.car_compounding,
    };

    let (mortgage, car_loan) = calculator.calculate_loans(&mortgage, &car_loan);
    let mut quotes = Vec::with_capacity(2);
    let mut rejected = 0usize;
    for (kind, result) in [(LoanKind::Mortgage, mortgage), (LoanKind::Car, car_loan)] {
        match result {
            Ok(quote) => quotes.push(quote),
            Err(e) => {
                eprintln!("Error pricing {} loan: {}", kind, e);
                rejected += 1;
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => write_text(&mut out, &quotes).into_diagnostic()?,
        OutputFormat::Csv => QuoteWriter::new(out)
            .write_quotes(&quotes)
            .into_diagnostic()?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &quotes).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    if rejected > 0 {
        return Err(miette!("{} of 2 loans could not be quoted", rejected));
    }
    Ok(())
}

fn write_text(out: &mut impl Write, quotes: &[LoanQuote]) -> io::Result<()> {
    for quote in quotes {
        writeln!(out, "{}", quote.payment_message())?;
        writeln!(out, "{}", quote.total_message())?;
    }
    Ok(())
}

fn run_batch(settings: &Settings, input: PathBuf) -> Result<()> {
    let calculator = LoanCalculator::new(settings);
    let file = File::open(input).into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(stdout.lock());
    let (mut priced, mut rejected) = (0usize, 0usize);

    for request in LoanRequestReader::new(file).requests() {
        match request {
            Ok(request) => match calculator.calculate(request.kind, &request.form()) {
                Ok(quote) => {
                    writer.write_quote(&quote).into_diagnostic()?;
                    priced += 1;
                }
                Err(e) => {
                    eprintln!("Error pricing loan: {}", e);
                    rejected += 1;
                }
            },
            Err(e) => {
                eprintln!("Error reading loan request: {}", e);
                rejected += 1;
            }
        }
    }
    writer.flush().into_diagnostic()?;

    tracing::info!(priced, rejected, "batch complete");
    Ok(())
}

fn run_budget(input: PathBuf) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let mut ledger = BudgetLedger::new(Box::new(InMemoryEntryStore::new()));

    for record in EntryReader::new(file).entries() {
        match record {
            Ok(record) => {
                if let Err(e) = ledger.add(record.kind, &record.name, &record.amount) {
                    eprintln!("Error adding budget entry: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading budget entry: {}", e);
            }
        }
    }

    let entries = ledger.entries().into_diagnostic()?;
    let totals = ledger.totals();
    tracing::info!(entries = entries.len(), "budget loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (heading, kind) in [
        ("Sources of Income", EntryKind::Income),
        ("Subscriptions", EntryKind::Expense),
    ] {
        writeln!(out, "{heading}").into_diagnostic()?;
        for entry in entries.iter().filter(|e| e.kind == kind) {
            writeln!(out, "  {}: ${:.2}", entry.name, entry.amount.value()).into_diagnostic()?;
        }
    }
    writeln!(out, "Monthly Income: ${:.2}", totals.monthly_income.value()).into_diagnostic()?;
    writeln!(out, "Monthly Expenses: ${:.2}", totals.monthly_expenses.value()).into_diagnostic()?;
    writeln!(out, "Net: ${:.2}", totals.net().value()).into_diagnostic()?;

    Ok(())
}
