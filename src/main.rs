use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use configuration::{Config, load_config};
use core_types::{ComparisonRequest, ReportFilter};
use database::{DbRepository, connect, run_migrations};
use reporter::ComparativeReporter;
use std::path::PathBuf;

mod render;

/// The main entry point for the AgriMarket reporting tool.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    // Keep the guard alive so file logs are flushed on exit.
    let _log_guard = configuration::init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve => web_server::run_server(&config).await,
        Commands::Migrate => handle_migrate(&config).await,
        Commands::Compare(args) => handle_compare(args, &config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Period-over-period sales reporting for the AgriMarket marketplace.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the report API over HTTP.
    Serve,
    /// Apply pending database migrations.
    Migrate,
    /// Compare two periods and print the report.
    Compare(CompareArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Order totals, order count and average order value.
    Sales,
    /// Best-selling products.
    Products,
    /// Sales per category.
    Categories,
}

#[derive(Parser)]
struct CompareArgs {
    /// Which comparison to run.
    #[arg(value_enum)]
    report: ReportKind,

    /// First day of the current period (format: YYYY-MM-DD).
    #[arg(long)]
    current_start: NaiveDate,

    /// Last day of the current period, included (format: YYYY-MM-DD).
    #[arg(long)]
    current_end: NaiveDate,

    /// First day of the previous period. Defaults to the period of equal
    /// length right before the current one.
    #[arg(long, requires = "previous_end")]
    previous_start: Option<NaiveDate>,

    /// Last day of the previous period, included.
    #[arg(long, requires = "previous_start")]
    previous_end: Option<NaiveDate>,

    /// Only count products sold by this vendor.
    #[arg(long)]
    vendor_id: Option<i64>,

    /// Only count products in this category.
    #[arg(long)]
    category_id: Option<i64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

impl CompareArgs {
    fn request(&self) -> anyhow::Result<ComparisonRequest> {
        let request = ComparisonRequest::from_dates(
            self.current_start,
            self.current_end,
            self.previous_start,
            self.previous_end,
            ReportFilter::new(self.vendor_id, self.category_id),
        )?;
        Ok(request)
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn open_repository(config: &Config) -> anyhow::Result<DbRepository> {
    let pool = connect(
        &config.database.url,
        config.database.max_connections,
        config.database.acquire_timeout(),
    )
    .await?;
    Ok(DbRepository::new(pool))
}

async fn handle_migrate(config: &Config) -> anyhow::Result<()> {
    let repo = open_repository(config).await?;
    run_migrations(repo.pool()).await?;
    println!("Migrations applied.");
    Ok(())
}

/// Runs one comparison and prints it.
async fn handle_compare(args: CompareArgs, config: &Config) -> anyhow::Result<()> {
    let request = args.request()?;
    tracing::info!(
        report = ?args.report,
        current = %request.current,
        previous = %request.previous,
        "Running comparison."
    );

    let repo = open_repository(config).await?;
    let reporter = ComparativeReporter::new(repo, config.reports.top_products_limit);

    let output = match args.report {
        ReportKind::Sales => {
            let comparison = reporter.sales_comparison(&request).await?;
            if args.json {
                serde_json::to_string_pretty(&comparison)?
            } else {
                render::sales_table(&request, &comparison).to_string()
            }
        }
        ReportKind::Products => {
            let comparison = reporter.product_comparison(&request).await?;
            if args.json {
                serde_json::to_string_pretty(&comparison)?
            } else {
                render::entity_report(&request, &comparison)
            }
        }
        ReportKind::Categories => {
            let comparison = reporter.category_comparison(&request).await?;
            if args.json {
                serde_json::to_string_pretty(&comparison)?
            } else {
                render::entity_report(&request, &comparison)
            }
        }
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_without_previous_period_uses_the_preceding_one() {
        let cli = Cli::try_parse_from([
            "agrimarket",
            "compare",
            "sales",
            "--current-start",
            "2024-01-01",
            "--current-end",
            "2024-01-31",
        ])
        .unwrap();

        let Commands::Compare(args) = cli.command else {
            panic!("expected the compare command");
        };
        let request = args.request().unwrap();
        assert_eq!(request.previous.start().to_string(), "2023-12-01");
        assert_eq!(request.previous.end().to_string(), "2023-12-31");
    }

    #[test]
    fn previous_start_requires_previous_end() {
        let parsed = Cli::try_parse_from([
            "agrimarket",
            "compare",
            "products",
            "--current-start",
            "2024-01-01",
            "--current-end",
            "2024-01-31",
            "--previous-start",
            "2023-12-01",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn filters_and_config_path_are_parsed() {
        let cli = Cli::try_parse_from([
            "agrimarket",
            "--config",
            "prod.toml",
            "compare",
            "categories",
            "--current-start",
            "2024-01-01",
            "--current-end",
            "2024-01-31",
            "--vendor-id",
            "9",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("prod.toml"));
        let Commands::Compare(args) = cli.command else {
            panic!("expected the compare command");
        };
        assert_eq!(args.report, ReportKind::Categories);
        assert!(args.json);
        assert_eq!(args.request().unwrap().filter.vendor_id, Some(9));
    }
}
