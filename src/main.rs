use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod logging;
mod tui;

use wa_checkout::checkout::{CheckoutRequest, PaymentMethod};
use wa_checkout::commands;
use wa_checkout::config::CheckoutConfig;
use wa_checkout::handoff::SystemLauncher;

use logging::Verbosity;

#[derive(Parser)]
#[command(name = "wa-checkout")]
#[command(about = "Checkout for digital products, completed over WhatsApp", long_about = None)]
struct Cli {
    /// JSON file overriding the product and WhatsApp recipient
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write logs to this file (the only way to get logs from the TUI)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive checkout in the terminal
    Tui,

    /// Check the order form and print every error
    Validate(OrderArgs),

    /// Print the WhatsApp message for a valid order
    Summary(OrderArgs),

    /// Print the wa.me link for a valid order
    Link(OrderArgs),

    /// Open WhatsApp with the order message
    Buy(OrderArgs),
}

#[derive(Args)]
struct OrderArgs {
    /// Buyer email (required)
    #[arg(long, default_value = "")]
    email: String,

    /// Buyer name (required)
    #[arg(long, default_value = "")]
    name: String,

    /// Buyer phone number (required)
    #[arg(long, default_value = "")]
    phone: String,

    /// Extra notes for the seller
    #[arg(long, default_value = "")]
    notes: String,

    /// Number of items (3 or more unlocks every bonus)
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Payment method
    #[arg(long, value_enum, default_value_t = PaymentMethod::Dana)]
    payment: PaymentMethod,

    /// Agree to the Terms of Use (required)
    #[arg(long)]
    agree_terms: bool,

    /// Agree to receive newsletters and marketing messages
    #[arg(long)]
    agree_marketing: bool,
}

impl From<OrderArgs> for CheckoutRequest {
    fn from(args: OrderArgs) -> Self {
        CheckoutRequest {
            quantity: args.quantity,
            email: args.email,
            name: args.name,
            phone: args.phone,
            notes: args.notes,
            payment_method: args.payment,
            agreed_to_terms: args.agree_terms,
            agreed_to_marketing: args.agree_marketing,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Tui);
    logging::init_subscriber(
        Verbosity::from_flags(cli.verbose, cli.quiet),
        cli.log_file.as_deref(),
        interactive,
    )?;

    let config = CheckoutConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load checkout config")?;

    match cli.command {
        Commands::Tui => {
            tui::run_tui(config, Box::new(SystemLauncher))?;
        }
        Commands::Validate(args) => {
            if !commands::validate(&config, &args.into())? {
                std::process::exit(1);
            }
        }
        Commands::Summary(args) => {
            commands::summary(&config, &args.into())?;
        }
        Commands::Link(args) => {
            commands::link(&config, &args.into())?;
        }
        Commands::Buy(args) => {
            commands::buy(&config, &args.into(), &SystemLauncher)?;
        }
    }

    Ok(())
}
