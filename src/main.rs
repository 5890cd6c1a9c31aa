//! Textscore: article sentiment and readability CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use textscore::config::{
    build_ignore_set, default_config_json, load_config, CliOverrides, Config, CONFIG_FILENAME,
};
use textscore::corpus::{collect_article_files, load_documents};
use textscore::reporter::{ConsoleReporter, JsonReporter};
use textscore::{DocumentReport, Lexicon, MetricsEngine};
use tracing::Level;

/// Number of documents above which analysis runs in parallel
const PARALLEL_THRESHOLD: usize = 10;

/// Textscore: sentiment and readability metrics for article text
#[derive(Parser, Debug)]
#[command(name = "textscore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Article file or directory to analyze (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one line per article)
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .textscorerc.json in article dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding positive-words.txt and negative-words.txt
    #[arg(long, value_name = "DIR")]
    master_dict_dir: Option<PathBuf>,

    /// Directory of stop-word lists
    #[arg(long, value_name = "DIR")]
    stopwords_dir: Option<PathBuf>,

    /// Maximum fog index (exit 1 if any article is above)
    #[arg(long, value_name = "X")]
    max_fog: Option<f64>,

    /// Decimal places for reported ratios
    #[arg(long, value_name = "N")]
    precision: Option<u32>,

    /// Run analysis in parallel (default for more than 10 articles)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Score the first line of each article instead of treating it as a title
    #[arg(long)]
    keep_title: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .textscorerc.json with sensible defaults
    Init {
        /// Maximum fog index to record in the config
        #[arg(long)]
        max_fog: Option<f64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Init { max_fog, dir } => run_init(max_fog, dir.as_deref()),
        };
    }

    init_tracing(args.quiet, args.verbose);

    let Some(path) = args.path.clone() else {
        anyhow::bail!("an article path is required");
    };

    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    // Config search starts at the article location
    let search_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    let config = load_config(search_dir, args.config.as_deref())?.merge_with_cli(CliOverrides {
        master_dictionary_dir: args.master_dict_dir.clone(),
        stop_words_dir: args.stopwords_dir.clone(),
        max_fog_index: args.max_fog,
        precision: args.precision,
        keep_title: args.keep_title,
    });

    let master_dir = config.master_dictionary_dir(&cwd);
    let stop_dir = config.stop_words_dir(&cwd);

    let lexicon = match Lexicon::from_dirs(&master_dir, &stop_dir) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            return Ok(ExitCode::from(2));
        }
    };

    let overlap = lexicon.overlap();
    if !overlap.is_empty() && !args.quiet {
        eprintln!(
            "{}: {} word(s) are both positive and negative and count toward both: {}",
            "Warning".yellow(),
            overlap.len(),
            overlap.join(", ")
        );
    }

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let extensions = config.get_article_extensions();
    let article_files: Vec<PathBuf> =
        collect_article_files(&path, &extensions, ignore_set.as_ref())?
            .into_iter()
            .filter(|file| !is_dictionary_file(file, &master_dir, &stop_dir))
            .collect();

    if article_files.is_empty() {
        eprintln!("{}: No article files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let (loaded, had_errors) =
        load_documents(&article_files, |p| config.effective_for_file(p).skip_title_line);
    let (loaded_paths, documents): (Vec<PathBuf>, Vec<_>) = loaded.into_iter().unzip();

    if documents.is_empty() {
        eprintln!("{}: All articles failed to load", "Error".red());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let engine = MetricsEngine::new(&lexicon);
    let use_parallel = args.parallel || documents.len() > PARALLEL_THRESHOLD;
    let reports = if use_parallel {
        engine.analyze_parallel(&documents)
    } else {
        engine.analyze_many(&documents)
    };

    let stats = MetricsEngine::aggregate_stats(&reports);

    if args.json {
        let reporter = JsonReporter::new().pretty().with_precision(config.precision);
        if reports.len() == 1 {
            println!("{}", reporter.report(&reports[0]));
        } else {
            println!("{}", reporter.report_with_summary(&reports, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new().with_precision(config.precision);
        for report in &reports {
            reporter.report_quiet(report);
        }
    } else {
        let mut reporter = ConsoleReporter::new().with_precision(config.precision);
        if args.verbose {
            reporter = reporter.verbose();
        }

        if reports.len() == 1 {
            reporter.report(&reports[0]);
        } else {
            reporter.report_many(&reports, &stats);
        }
    }

    // Reports come back in input order, so they line up with the loaded paths
    let too_hard = articles_over_fog(&config, &reports, &loaded_paths);
    if !too_hard.is_empty() {
        if !args.quiet && !args.json {
            for (id, fog, max) in &too_hard {
                eprintln!(
                    "\n{}: {} has fog index {:.2}, above maximum {}",
                    "Failed".red().bold(),
                    id,
                    fog,
                    max
                );
            }
        }
        return Ok(ExitCode::from(1));
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Articles whose fog index exceeds the maximum configured for their path
fn articles_over_fog(
    config: &Config,
    reports: &[DocumentReport],
    paths: &[PathBuf],
) -> Vec<(String, f64, f64)> {
    reports
        .iter()
        .zip(paths)
        .filter_map(|(report, path)| {
            let max = config.effective_for_file(path).max_fog_index?;
            (report.metrics.fog_index > max).then(|| (report.id.clone(), report.metrics.fog_index, max))
        })
        .collect()
}

/// Dictionary lists living under the article root are not articles
fn is_dictionary_file(file: &Path, master_dir: &Path, stop_dir: &Path) -> bool {
    let within = |dir: &Path| match (file.canonicalize(), dir.canonicalize()) {
        (Ok(f), Ok(d)) => f.starts_with(d),
        _ => false,
    };
    within(master_dir) || within(stop_dir)
}

fn run_init(max_fog: Option<f64>, dir: Option<&Path>) -> Result<ExitCode> {
    if let Some(max) = max_fog.filter(|m| !m.is_finite()) {
        anyhow::bail!("--max-fog must be a finite number, got {}", max);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    std::fs::write(&config_path, default_config_json(max_fog))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    eprintln!("{}: Created {}", "Info".blue(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
