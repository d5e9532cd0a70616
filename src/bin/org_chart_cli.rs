//! Org chart command line interface
//!
//! Builds, searches and inspects business-unit hierarchies from tabular
//! input.
//!
//! # Usage
//!
//! ```bash
//! # Build the chart and print the tree
//! org_chart_cli --config org_chart.yaml build --table units.json
//!
//! # Search units by name, unit or BEBL code
//! org_chart_cli search --table units.json finance
//!
//! # Parse a single level string
//! org_chart_cli parse "Cambridge (100)-CAM"
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use org_chart::{
    build_from_files, init_tracing, parse_level, ChartConfig, ConfigLoader, OrgChart, OrgNode,
};

#[derive(Parser)]
#[command(name = "org_chart_cli")]
#[command(version = "0.1.0")]
#[command(about = "Build and search business-unit org charts from tabular data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Chart config file (falls back to ORG_CHART_CONFIG, then org_chart.yaml)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Output format: json, text, or pretty (default)
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the hierarchy and print it with subordinate counts
    Build {
        /// Table file (JSON: object of columns or array of row objects)
        #[arg(short, long)]
        table: PathBuf,
    },

    /// Case-insensitive search over name, business unit and BEBL code
    Search {
        #[arg(short, long)]
        table: PathBuf,

        /// Search term (trimmed; empty matches nothing)
        term: String,
    },

    /// Parse one level string into its components
    Parse {
        /// e.g. "Cambridge (100)-CAM"
        level: String,
    },
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Build { table } => load_config(&cli).and_then(|c| cmd_build(&c, table, cli.format)),
        Commands::Search { table, term } => {
            load_config(&cli).and_then(|c| cmd_search(&c, table, term, cli.format))
        }
        Commands::Parse { level } => cmd_parse(level, cli.format),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "error": format!("{:#}", e) }));
            } else {
                eprintln!("{}: {:#}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<ChartConfig> {
    ConfigLoader::resolve(cli.config.clone()).load()
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_build(config: &ChartConfig, table: &Path, format: OutputFormat) -> Result<()> {
    let chart = build_from_files(config, table)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        OutputFormat::Text => {
            for node in chart.nodes() {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    node.id,
                    node.parent_id.as_deref().unwrap_or("-"),
                    node.name,
                    node.direct_subordinates,
                    node.total_subordinates
                );
            }
        }
        OutputFormat::Pretty => {
            print_tree(&chart);
            print_diagnostics(&chart);
        }
    }

    Ok(())
}

fn cmd_search(config: &ChartConfig, table: &Path, term: &str, format: OutputFormat) -> Result<()> {
    if !config.search_enabled {
        bail!("Search is disabled in the chart configuration");
    }

    let chart = build_from_files(config, table)?;
    let hits = chart.search_results(term);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        OutputFormat::Text => {
            for hit in &hits {
                println!("{}\t{}", hit.node_id, hit.name);
            }
        }
        OutputFormat::Pretty => {
            if hits.is_empty() {
                println!("{} No units match '{}'", "--".yellow(), term.trim());
            } else {
                println!("{} {} match(es)", "OK".green(), hits.len());
            }
            for hit in &hits {
                let code = hit.bebl_code.as_deref().unwrap_or("-");
                println!(
                    "  {} {} {}",
                    hit.name.bold(),
                    format!("[{}]", hit.business_unit).cyan(),
                    code.dimmed()
                );
            }
        }
    }

    Ok(())
}

fn cmd_parse(level: &str, format: OutputFormat) -> Result<()> {
    let parsed = parse_level(Some(level))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        OutputFormat::Text | OutputFormat::Pretty => {
            println!("{} Parsed level", "OK".green());
            println!("  name:               {}", parsed.name);
            println!("  business unit code: {}", parsed.business_unit_code);
            println!("  BEBL code:          {}", parsed.bebl_code);
        }
    }

    Ok(())
}

// =============================================================================
// RENDERING
// =============================================================================

/// Depth-first tree print, iterative so deep charts do not overflow.
fn print_tree(chart: &OrgChart) {
    let mut stack: Vec<(&OrgNode, usize)> = chart.roots().map(|n| (n, 0)).collect();
    stack.reverse();

    while let Some((node, depth)) = stack.pop() {
        let counts = format!("({} direct, {} total)", node.direct_subordinates, node.total_subordinates);
        println!(
            "{}{} {} {}",
            "  ".repeat(depth),
            node.name.bold(),
            format!("[{}]", node.business_unit).cyan(),
            counts.dimmed()
        );

        let mut children: Vec<_> = chart.children(&node.id).map(|c| (c, depth + 1)).collect();
        children.reverse();
        stack.extend(children);
    }
}

fn print_diagnostics(chart: &OrgChart) {
    let diagnostics = chart.diagnostics();
    if diagnostics.is_clean() {
        println!("\n{} {}", "OK".green().bold(), diagnostics.summary());
        return;
    }

    println!("\n{} {}", "WARN".yellow().bold(), diagnostics.summary());
    for rejection in &diagnostics.rejections {
        println!(
            "  row {} level {}: {} ({})",
            rejection.row,
            rejection.level,
            rejection.raw.red(),
            rejection.reason.code()
        );
    }
}
