//! Cohort CLI — run the social network analysis on a dataset file
//!
//! Reads the textual dataset format from a file or stdin and prints the
//! staged report, JSON, or tables.

use anyhow::{bail, Context, Result};
use clap::Parser;
use cohort::{
    analyze, read_input, render_json, render_text, AnalysisReport, ClassifierConfig,
    CohortConfig,
};
use comfy_table::{ContentArrangement, Table};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "cohort", version, about = "Core users and shared topics in a social network")]
struct Cli {
    /// Dataset file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, env = "COHORT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Strength a friend must exceed to count as close (overrides the input)
    #[arg(long)]
    strength_threshold: Option<f64>,

    /// Close-friend count a user must exceed to be core (overrides the input)
    #[arg(long)]
    core_threshold: Option<usize>,

    /// Maximum population (overrides the configuration)
    #[arg(long)]
    max_users: Option<usize>,

    /// More log output on stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Table,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => CohortConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CohortConfig::default(),
    };
    if let Some(max_users) = cli.max_users {
        config.limits.max_users = max_users;
    }

    let parsed = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            info!("Reading dataset from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_input(BufReader::new(file), &config.limits)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        _ => {
            info!("Reading dataset from stdin");
            read_input(std::io::stdin().lock(), &config.limits)
                .context("failed to load dataset from stdin")?
        }
    };

    let thresholds = resolve_thresholds(cli, parsed.thresholds)?;
    let report = analyze(&parsed.dataset, &thresholds);

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report, &config.report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Table => print_tables(&report, config.report.precision),
    }

    Ok(())
}

fn resolve_thresholds(cli: &Cli, from_input: Option<ClassifierConfig>) -> Result<ClassifierConfig> {
    let strength_threshold = cli
        .strength_threshold
        .or(from_input.map(|t| t.strength_threshold));
    let core_threshold = cli.core_threshold.or(from_input.map(|t| t.core_threshold));

    match (strength_threshold, core_threshold) {
        (Some(s), Some(c)) => {
            if !s.is_finite() {
                bail!("strength threshold must be finite, got {}", s);
            }
            Ok(ClassifierConfig::new(s, c))
        }
        _ => bail!(
            "no thresholds in the input; pass --strength-threshold and --core-threshold"
        ),
    }
}

fn print_tables(report: &AnalysisReport, precision: usize) {
    let n = report.strength.user_count();

    let mut matrix = Table::new();
    matrix.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec![String::new()];
    header.extend((0..n).map(|u| format!("u{}", u)));
    matrix.set_header(header);
    for (u, row) in report.strength.to_rows().into_iter().enumerate() {
        let mut cells = vec![format!("u{}", u)];
        cells.extend(row.iter().map(|s| format!("{:.*}", precision, s)));
        matrix.add_row(cells);
    }
    println!("{}", matrix);
    println!("{} user(s)", n);

    if report.cores.is_empty() {
        println!("(no core users)");
        return;
    }

    let mut cores = Table::new();
    cores.set_content_arrangement(ContentArrangement::Dynamic);
    cores.set_header(vec!["Core user", "Close friends", "Hashtags"]);
    for core in &report.cores {
        let friends: Vec<String> = core.close_friends.iter().map(|f| format!("u{}", f)).collect();
        cores.add_row(vec![
            format!("u{}", core.user),
            friends.join(" "),
            core.tags.to_string(),
        ]);
    }
    println!("{}", cores);
    println!("{} core user(s)", report.cores.len());
}
