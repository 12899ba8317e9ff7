use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use neardup::{compare_with_config, NearDupConfig, PairReport};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: neardup [--config <path>] [<file_a> <file_b>]";

/// Pairs compared when no files are given, with an optional threshold override.
const DEMO_PAIRS: &[(&str, &str, &str, Option<f64>)] = &[
    (
        "short",
        "do not worry about your difficulties in mathematics",
        "i would not worry about your difficulties you can easily learn what is needed",
        None,
    ),
    (
        "long",
        "do not worry about your difficulties in mathematics you can easily learn what is needed blah blah whatever some words to make this text longer much much longer because either i screwed up or the jaccard similarity is really strict",
        "do not worry about your difficulties in physics you can easily learn what is needed blah blah whatever some words to make this text longer much much longer because either i screwed up or the jaccard similarity is really strict",
        Some(0.8),
    ),
];

struct Args {
    config_path: Option<PathBuf>,
    files: Vec<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut config_path = None;
    let mut files = Vec::new();
    let mut args = env::args_os().skip(1);

    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--config") => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            Some("-h") | Some("--help") => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if !files.is_empty() && files.len() != 2 {
        bail!("expected exactly two files\n{USAGE}");
    }

    Ok(Args { config_path, files })
}

fn init_tracing(config: &NearDupConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_report(label: &str, report: &PairReport) {
    let score = report
        .score()
        .map(|s| format!("{s:.4}"))
        .unwrap_or_else(|| "n/a".to_string());
    println!(
        "{label}: near_duplicate={} score={score} algorithm={}",
        report.is_near_duplicate(),
        report.algorithm()
    );
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    let config_path = args
        .config_path
        .or_else(|| env::var_os("NEARDUP_CONFIG").map(PathBuf::from));
    let config = match &config_path {
        Some(path) => NearDupConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => NearDupConfig::default(),
    };

    init_tracing(&config);
    tracing::debug!(config = ?config_path, "config_loaded");

    if let [file_a, file_b] = args.files.as_slice() {
        let text_a = fs::read_to_string(file_a)
            .with_context(|| format!("reading {}", file_a.display()))?;
        let text_b = fs::read_to_string(file_b)
            .with_context(|| format!("reading {}", file_b.display()))?;
        let report = compare_with_config(&text_a, &text_b, &config)?;
        print_report(
            &format!("{} vs {}", file_a.display(), file_b.display()),
            &report,
        );
        return Ok(());
    }

    for (label, text_a, text_b, threshold) in DEMO_PAIRS {
        let mut pair_config = config.clone();
        if let Some(threshold) = threshold {
            pair_config.similarity.threshold = *threshold;
        }
        let report = compare_with_config(text_a, text_b, &pair_config)?;
        print_report(label, &report);
    }

    Ok(())
}
