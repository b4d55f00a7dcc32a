//! pipcalc: forex position sizing and profit/loss projection.
//!
//! Two calculators behind one terminal surface: a lot-size calculator that
//! sizes a position to risk a fixed percentage of the account, and a
//! profit/loss projector for a planned entry with both exits.

mod calc;
mod form;
mod overlay;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::calc::{PositionSizeInputs, ProfitLossInputs, PIPS_PER_PRICE_UNIT};
use crate::form::{LotSizePanel, ProfitLossPanel};
use crate::overlay::{Overlay, OverlayConfig};
use crate::session::{FormSession, SessionConfig};

/// pipcalc CLI.
#[derive(Parser)]
#[command(name = "pipcalc")]
#[command(about = "Position sizing and profit/loss calculator", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a lot size from account risk parameters
    LotSize {
        /// Account size in currency units
        #[arg(short, long)]
        account: f64,

        /// Percent of the account to risk
        #[arg(short, long)]
        risk: f64,

        /// Stop-loss distance in pips
        #[arg(short, long)]
        stop_loss: f64,

        /// Currency value of one pip per lot
        #[arg(short, long, default_value = "10")]
        pip_value: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Run the celebration overlay after the result
        #[arg(long)]
        celebrate: bool,
    },

    /// Project profit/loss for a planned trade
    Pnl {
        /// Account balance in currency units
        #[arg(short, long, default_value = "10000")]
        balance: f64,

        /// Entry price
        #[arg(short, long)]
        entry: f64,

        /// Take-profit price
        #[arg(short, long)]
        take_profit: f64,

        /// Stop-loss price
        #[arg(short, long)]
        stop_loss: f64,

        /// Position size in lots
        #[arg(short, long)]
        lot: f64,

        /// Currency value of one pip per lot
        #[arg(short, long, default_value = "10")]
        pip_value: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Run the celebration overlay after the result
        #[arg(long)]
        celebrate: bool,
    },

    /// Start the interactive two-panel form
    Form {
        /// Skip the celebration overlay after calculations
        #[arg(long)]
        no_celebrate: bool,
    },

    /// Show default field values and overlay configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::LotSize {
            account,
            risk,
            stop_loss,
            pip_value,
            json,
            celebrate,
        } => {
            let inputs = PositionSizeInputs {
                account_size: account,
                risk_percent: risk,
                stop_loss_pips: stop_loss,
                pip_value,
            };

            let report = inputs.compute();
            info!(
                lot_size = report.lot_size,
                risk_amount = report.risk_amount,
                "Lot size calculated"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\n{}", report);
                println!("Risk Amount: ${:.2}", report.risk_amount);
            }

            if celebrate {
                // Await the overlay so the process does not exit mid-animation.
                Overlay::new(OverlayConfig::default()).trigger().await?;
            }
        }

        Commands::Pnl {
            balance,
            entry,
            take_profit,
            stop_loss,
            lot,
            pip_value,
            json,
            celebrate,
        } => {
            let inputs = ProfitLossInputs {
                account_balance: balance,
                entry,
                take_profit,
                stop_loss,
                lot_size: lot,
                pip_value,
            };

            let report = inputs.compute();
            info!(
                profit = report.profit,
                loss = report.loss,
                "Profit/loss projected"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\n{}", report);
            }

            if celebrate {
                Overlay::new(OverlayConfig::profit()).trigger().await?;
            }
        }

        Commands::Form { no_celebrate } => {
            info!(celebrate = !no_celebrate, "Starting interactive form");

            let mut session = FormSession::new(SessionConfig {
                celebrate: !no_celebrate,
            });
            session.run().await?;
        }

        Commands::Config => {
            let overlay = OverlayConfig::default();

            println!("\n=== Panel Defaults ===\n");
            println!("Lot Size panel:");
            for field in LotSizePanel::new().fields.iter() {
                println!("  {:<18} {}", field.label, display_default(&field.value));
            }

            println!("\nCalculator panel:");
            for field in ProfitLossPanel::new().fields.iter() {
                println!("  {:<18} {}", field.label, display_default(&field.value));
            }

            println!("\n=== Conversion ===\n");
            println!("  Pips per price unit:  {}", PIPS_PER_PRICE_UNIT);

            println!("\n=== Overlay ===\n");
            println!("  Duration:             {:?}", overlay.duration);
            println!("  Max spawn delay:      {:?}", overlay.max_spawn_delay);
            println!("  Columns:              {}", overlay.columns);
            println!("  Tokens:               {}", overlay.tokens.join(" "));
            println!(
                "  Profit tokens:        {}",
                OverlayConfig::profit().tokens.join(" ")
            );
        }
    }

    Ok(())
}

/// Render an empty default as an explicit placeholder.
fn display_default(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}
