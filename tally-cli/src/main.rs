use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tally_app::{Action, AppState};
use tally_core::{CoachInput, Expense, WeekSnapshot};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod render;

use render::Renderer;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Gentle expense awareness from the command line")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ~/.tally/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Weekly reflection: totals, top category and a coaching message
    Summary {
        /// JSON array of expenses
        #[arg(long)]
        file: PathBuf,
    },

    /// This week against previous weeks
    Overview {
        #[arg(long)]
        file: PathBuf,

        /// JSON array of week snapshots, most recent first (defaults to sample weeks)
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Drill into one category, or all expenses
    Insights {
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        category: Option<String>,
    },

    /// Print just the coaching message
    Coach {
        #[arg(long)]
        file: PathBuf,

        /// Previous period total
        #[arg(long)]
        previous: Option<Decimal>,
    },

    /// Trend text between two totals
    Trend { current: Decimal, previous: Decimal },

    /// Progress text for a number of tracked weeks
    Progress { weeks: u32 },

    /// Simulate scanning a receipt and add its items
    Scan {
        /// Start from these expenses instead of the sample state
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List expenses with dates in the configured timezone
    List {
        #[arg(long)]
        file: PathBuf,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the config file with defaults
    Init,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG > --verbose > info
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    let cfg = config::load_config(&config_path)?;
    let renderer = Renderer {
        currency: cfg.display.currency_symbol.clone(),
        tz: cfg.timezone(),
        now: Utc::now(),
    };

    match cli.command {
        Command::Summary { file } => {
            let expenses = read_expenses(&file)?;
            print!("{}", renderer.reflection(&tally_core::weekly_reflection(&expenses)));
        }

        Command::Overview { file, history } => {
            let expenses = read_expenses(&file)?;
            let weeks = match history {
                Some(p) => read_history(&p)?,
                None => tally_core::demo_history(),
            };
            print!("{}", renderer.overview(&tally_core::spending_overview(&expenses, &weeks)));
        }

        Command::Insights { file, category } => {
            let expenses = read_expenses(&file)?;
            let insight = tally_core::category_insight(&expenses, category.as_deref());
            print!("{}", renderer.insight(&insight));
        }

        Command::Coach { file, previous } => {
            let expenses = read_expenses(&file)?;
            let mut input = CoachInput::from_expenses(&expenses);
            if let Some(prev) = previous {
                input = input.with_previous_total(prev);
            }
            println!("{}", renderer.coach(&tally_core::coach::select(&input)));
            if let Some(trend) = input.trend() {
                println!("{trend}");
            }
        }

        Command::Trend { current, previous } => {
            println!("{}", tally_core::trend_message(current, previous));
        }

        Command::Progress { weeks } => {
            println!("{}", tally_core::progress_message(weeks));
        }

        Command::Scan { file } => {
            let state = match file {
                Some(p) => AppState::with_data(read_expenses(&p)?, tally_core::demo_history()),
                None => AppState::demo(renderer.now),
            };
            run_scan(state, &renderer, cfg.scan.processing_delay_ms)?;
        }

        Command::List { file } => {
            let expenses = read_expenses(&file)?;
            if expenses.is_empty() {
                println!("No expenses.");
            } else {
                print!("{}", renderer.expenses(&expenses));
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                if config::init_config(&config_path)? {
                    println!("Wrote {}", config_path.display());
                } else {
                    println!("Config already exists: {}", config_path.display());
                }
            }
            ConfigCommand::Show => {
                println!("# {}\n", config_path.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn run_scan(state: AppState, renderer: &Renderer, delay_ms: u64) -> Result<()> {
    let state = state.dispatch(Action::ScanReceipt)?;
    println!("Processing receipt...");

    // The processing delay belongs to the caller; the state only records the reveal.
    std::thread::sleep(std::time::Duration::from_millis(delay_ms));
    let state = state.dispatch(Action::RevealExtractedItems)?;

    if let Some(scan) = &state.receipt {
        println!("\nFound {} items:\n", scan.items.len());
        print!("{}", renderer.extracted(&scan.items));
    }

    let state = state.dispatch(Action::AcceptExtractedItems { at: Utc::now() })?;
    info!(expenses = state.expenses.len(), "receipt accepted");

    println!();
    print!("{}", renderer.expenses(&state.expenses));
    println!();
    print!("{}", renderer.reflection(&state.weekly_reflection()));
    Ok(())
}

fn read_expenses(path: &Path) -> Result<Vec<Expense>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let expenses: Vec<Expense> =
        serde_json::from_str(&s).with_context(|| format!("parse expenses in {}", path.display()))?;
    info!(count = expenses.len(), file = %path.display(), "loaded expenses");
    Ok(expenses)
}

fn read_history(path: &Path) -> Result<Vec<WeekSnapshot>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse week history in {}", path.display()))
}
