//! Springboard demo binary
//!
//! Drives the trampoline pool end to end: generates data, binds one
//! ascending and one descending comparator, sorts with both entry points,
//! and reports pool occupancy.
//!
//! # Examples
//!
//! ```bash
//! # Sort 20 pseudo-random values both ways
//! springboard sort --count 20 --seed 42
//!
//! # Machine-readable output
//! springboard sort --count 20 --json
//!
//! # Pool capacity and occupancy
//! springboard capacity
//! ```

use clap::{Args, Parser, Subcommand};
use springboard::{
    pseudo_random_values, sort_by_callback, CallbackHandle, OrderComparator, SlotPool,
    SortDirection,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Springboard - instance methods as C-style sort callbacks
#[derive(Parser, Debug)]
#[command(name = "springboard")]
#[command(version = springboard::VERSION)]
#[command(about = "Trampoline pool demo - instance methods as C-style sort callbacks", long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort pseudo-random data with pooled comparator callbacks
    Sort(SortArgs),

    /// Show pool capacity and occupancy
    Capacity {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version
    Version,
}

/// Sort command arguments
#[derive(Args, Debug)]
struct SortArgs {
    /// Number of values to sort
    #[arg(short, long, default_value = "20", env = "SPRINGBOARD_COUNT")]
    count: usize,

    /// Seed for the value generator
    #[arg(short, long, default_value = "42", env = "SPRINGBOARD_SEED")]
    seed: u64,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli);

    match cli.command {
        Commands::Sort(args) => sort_command(args),
        Commands::Capacity { json } => capacity_command(json),
        Commands::Version => {
            println!("springboard {}", springboard::VERSION);
            Ok(())
        }
    }
}

/// Setup console logging
fn setup_logging(cli: &Cli) {
    let log_level = cli
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color),
        )
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();
}

/// Sort command - sort the same data ascending and descending
fn sort_command(args: SortArgs) -> anyhow::Result<()> {
    let pool = SlotPool::global();

    let before = pseudo_random_values(args.seed, args.count);
    info!("Generated {} values from seed {}", args.count, args.seed);

    let ascending = Arc::new(OrderComparator::new(SortDirection::Ascending));
    let descending = Arc::new(OrderComparator::new(SortDirection::Descending));

    // Two concurrent bindings, one per direction.
    let ascending_handle =
        CallbackHandle::bind(pool, &ascending, OrderComparator::compare_i32)?;
    let descending_handle =
        CallbackHandle::bind(pool, &descending, OrderComparator::compare_i32)?;
    info!(
        "Bound {} (ascending) and {} (descending)",
        ascending_handle.slot_index(),
        descending_handle.slot_index()
    );

    let mut sorted_ascending = before.clone();
    sort_by_callback(&mut sorted_ascending, ascending_handle.entry_point());

    let mut sorted_descending = before.clone();
    sort_by_callback(&mut sorted_descending, descending_handle.entry_point());

    let stats = pool.stats();
    if args.json {
        let output = serde_json::json!({
            "before": before,
            "ascending": sorted_ascending,
            "descending": sorted_descending,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("before:     {:?}", before);
        println!("ascending:  {:?}", sorted_ascending);
        println!("descending: {:?}", sorted_descending);
        println!("pool: {} of {} slots bound", stats.bound, stats.capacity);
    }

    Ok(())
}

/// Capacity command - print pool capacity and occupancy
fn capacity_command(json: bool) -> anyhow::Result<()> {
    let stats = SlotPool::global().stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("capacity: {}", stats.capacity);
        println!("bound:    {}", stats.bound);
        println!("free:     {}", stats.free);
    }

    Ok(())
}
