// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `belyi` command.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `belyi_monodromy=info`);
//! results go to stdout.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("belyi_monodromy=info,belyi=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            degree,
            show,
            all,
            strategy,
            export_dir,
            format,
            json,
        } => commands::run_search(commands::SearchArgs {
            degree,
            show: if all { None } else { Some(show) },
            strategy: strategy.into(),
            export_dir,
            format: format.into(),
            json,
        }),

        Commands::Compose { a, b } => commands::run_compose(&a, &b),

        Commands::Cycles { permutation, json } => commands::run_cycles(&permutation, json),

        Commands::Dessin {
            sigma_0,
            sigma_1,
            sigma_inf,
            format,
        } => commands::run_dessin(sigma_0, sigma_1, sigma_inf, format.into()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
