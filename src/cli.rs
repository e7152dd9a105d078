// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use belyi_monodromy::dessin::export::ExportFormat;
use belyi_monodromy::{Permutation, SearchStrategy};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "belyi",
    about = "Monodromy triples of Belyi maps and their dessins d'enfants",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate triples (σ₀, σ₁, σ∞) of degree n with σ₀·σ₁·σ∞ = 1
    Search {
        /// Number of sheets n (practical up to 4)
        degree: usize,

        /// How many triples to print
        #[arg(long, default_value_t = 5)]
        show: usize,

        /// Print every triple
        #[arg(long, conflicts_with = "show")]
        all: bool,

        /// Candidate generation
        #[arg(long, value_enum, default_value_t = StrategyArg::Exhaustive)]
        strategy: StrategyArg,

        /// Write the dessin of each printed triple into this directory
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Format for exported dessins
        #[arg(long, value_enum, default_value_t = FormatArg::Graphml)]
        format: FormatArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose two permutations, applying B first: (A∘B)(i) = A(B(i))
    Compose {
        /// Left operand in one-line notation, e.g. 2,3,1
        a: Permutation,

        /// Right operand in one-line notation
        b: Permutation,
    },

    /// Cycle decomposition of a permutation
    Cycles {
        /// Permutation in one-line notation, e.g. 3,2,1
        permutation: Permutation,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a triple and print its dessin
    Dessin {
        /// σ₀ in one-line notation
        sigma_0: Permutation,

        /// σ₁ in one-line notation
        sigma_1: Permutation,

        /// σ∞ in one-line notation
        sigma_inf: Permutation,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Graphml)]
        format: FormatArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Try all (n!)³ candidates
    Exhaustive,
    /// Compute σ∞ from σ₀ and σ₁: (n!)² candidates
    InverseElimination,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => SearchStrategy::Exhaustive,
            StrategyArg::InverseElimination => SearchStrategy::InverseElimination,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Graphml,
    Dot,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Graphml => ExportFormat::GraphMl,
            FormatArg::Dot => ExportFormat::Dot,
        }
    }
}
