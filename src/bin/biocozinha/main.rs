// ABOUTME: BioCozinha CLI - browse, search and expand the functional recipe catalog
// ABOUTME: Renders dashboard, results, detail and toolkit views as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha
//!
//! Usage:
//! ```bash
//! # Show the natural pharmacy pillar and the featured recipes
//! biocozinha dashboard
//!
//! # Search by text, optionally narrowed by a health goal
//! biocozinha search gengibre --goal pain
//!
//! # Show every recipe for a goal
//! biocozinha goal bloat
//!
//! # Open a recipe with prev/next ids for the list it came from
//! biocozinha show dr2
//!
//! # Ask Gemini for three more recipes (needs GEMINI_API_KEY)
//! biocozinha generate desinflama
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use biocozinha::config::LogLevel;
use biocozinha::logging::LoggingConfig;
use biocozinha::models::PillarType;
use biocozinha::session::Session;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "biocozinha",
    version,
    about = "BioCozinha functional recipe catalog",
    long_about = "Browse the functional recipe catalog by pillar, search text or health goal, and expand subcategories with AI-generated recipes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (`RUST_LOG` takes precedence when set)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show a pillar with its subcategories and the featured recipes
    Dashboard {
        /// Pillar to show
        #[arg(long, value_enum, default_value_t = PillarArg::Pharmacy)]
        pillar: PillarArg,
    },

    /// Search recipe names and functional actions
    Search {
        /// Search text (case-insensitive substring)
        query: String,

        /// Health goal id to narrow the results
        #[arg(long)]
        goal: Option<String>,
    },

    /// List the recipes matching a health goal
    Goal {
        /// Health goal id (weight, pain, bloat, energy, gut)
        id: String,
    },

    /// Show one recipe and its neighbours
    Show {
        /// Recipe id
        id: String,

        /// Search text the recipe was found with
        #[arg(long)]
        query: Option<String>,

        /// Health goal the recipe was found with
        #[arg(long)]
        goal: Option<String>,
    },

    /// Show the pantry checklist
    Toolkit,

    /// Generate more recipes for a subcategory
    Generate {
        /// Subcategory id
        subcategory: String,
    },
}

/// Pillar names accepted on the command line
#[derive(Clone, Copy, ValueEnum)]
enum PillarArg {
    Pharmacy,
    Chronometer,
    Economist,
}

impl From<PillarArg> for PillarType {
    fn from(arg: PillarArg) -> Self {
        match arg {
            PillarArg::Pharmacy => Self::Pharmacy,
            PillarArg::Chronometer => Self::Chronometer,
            PillarArg::Economist => Self::Economist,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    let mut session = Session::from_seed()?;
    session.enter_dashboard();

    match cli.command {
        Command::Dashboard { pillar } => commands::browse::dashboard(&mut session, pillar.into()),
        Command::Search { query, goal } => {
            commands::browse::search(&mut session, &query, goal.as_deref())?;
        }
        Command::Goal { id } => commands::browse::search(&mut session, "", Some(&id))?,
        Command::Show { id, query, goal } => {
            commands::browse::show(&mut session, &id, query.as_deref(), goal.as_deref())?;
        }
        Command::Toolkit => commands::browse::toolkit(&mut session),
        Command::Generate { subcategory } => {
            commands::generate::generate(&mut session, &subcategory).await?;
        }
    }

    Ok(())
}
