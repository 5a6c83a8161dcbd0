// ABOUTME: Ingredient seeding utility for BakeBase
// ABOUTME: Loads the bundled baking ingredient dataset into the configured database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Ingredient seeder for BakeBase.
//!
//! Replaces the ingredient table with the bundled dataset. API keys are left
//! untouched.
//!
//! Usage:
//! ```bash
//! # Seed using DATABASE_URL from environment
//! cargo run --bin seed-ingredients
//!
//! # Override database URL
//! cargo run --bin seed-ingredients -- --database-url sqlite:./data/bakebase.db
//!
//! # Append instead of replacing existing rows
//! cargo run --bin seed-ingredients -- --keep-existing
//! ```

use std::env;

use anyhow::Result;
use bakebase::{
    constants::network, database::Database, seed::seed_ingredients, store::IngredientStore,
};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-ingredients",
    about = "BakeBase Ingredient Seeder",
    long_about = "Load the bundled baking ingredient dataset into the BakeBase database"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Keep existing ingredients instead of clearing them first
    #[arg(long)]
    keep_existing: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== BakeBase Ingredient Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| network::DEFAULT_DATABASE_URL.to_owned());

    info!("Connecting to database: {database_url}");
    let database = Database::new(&database_url).await?;

    let inserted = seed_ingredients(&database, !args.keep_existing).await?;
    let total = database.count_ingredients().await?;

    info!("=== Seeding Complete ===");
    info!("Inserted {inserted} ingredients ({total} total)");
    Ok(())
}
