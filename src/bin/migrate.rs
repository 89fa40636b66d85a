//! Schema migrator for blog-api.
//!
//! Creates the tables described by the declarative schema, one statement at
//! a time, before the API is started.
//!
//! # Usage
//!
//! ```bash
//! # Create all tables of the built-in schema
//! cargo run --bin blog-migrate -- up
//!
//! # Print the DDL without connecting
//! cargo run --bin blog-migrate -- sql
//!
//! # Use a custom JSON schema
//! cargo run --bin blog-migrate -- --schema schema.json up
//!
//! # Drop all tables (asks for confirmation)
//! cargo run --bin blog-migrate -- down
//!
//! # Check database connection
//! cargo run --bin blog-migrate -- check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `BLOG_DB_*`).

use blog_api::config::{self, mask_connection_string};
use blog_api::infrastructure::database;
use blog_api::migrator;
use blog_api::schema::Schema;
use blog_api::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;

/// Creates and drops blog-api tables.
#[derive(Parser)]
#[command(name = "blog-migrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON schema file (defaults to the built-in blog schema)
    #[arg(short, long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create every table, in declaration order
    Up,

    /// Drop every table, in reverse declaration order
    Down {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the CREATE TABLE statements without connecting
    Sql,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let schema = match &cli.schema {
        Some(path) => Schema::from_path(path)
            .with_context(|| format!("Failed to load schema from {}", path.display()))?,
        None => Schema::blog(),
    };

    match cli.command {
        Commands::Sql => print_sql(&schema),
        command => run_against_database(command, &schema).await,
    }
}

async fn run_against_database(command: Commands, schema: &Schema) -> Result<()> {
    let config = config::load_from_env()?;
    telemetry::init(&config.log_level, &config.log_format);

    let pool = database::connect(&config).await?;

    match command {
        Commands::Up => {
            let created = migrator::create_tables(&pool, schema).await?;
            for table in &created {
                println!("  {} {}", "+".green(), table);
            }
            println!("{}", "tables created.".green().bold());
        }
        Commands::Down { yes } => {
            let names = schema.table_names().join(", ");
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Drop tables {names}? All data will be lost"))
                    .default(false)
                    .interact()?;

            if !confirmed {
                println!("{}", "Aborted.".yellow());
                return Ok(());
            }

            let dropped = migrator::drop_tables(&pool, schema).await?;
            for table in &dropped {
                println!("  {} {}", "-".red(), table);
            }
            println!("{}", "tables dropped.".green().bold());
        }
        Commands::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await
                .context("Database query failed")?;

            println!(
                "{} {}",
                "Connected:".green().bold(),
                mask_connection_string(&config.effective_database_url())
            );
            println!("  {}", version.dimmed());
        }
        Commands::Sql => print_sql(schema)?,
    }

    pool.close().await;
    Ok(())
}

fn print_sql(schema: &Schema) -> Result<()> {
    for (_, sql) in migrator::create_statements(schema)? {
        println!("{sql};\n");
    }
    Ok(())
}
