//! examsense CLI
//!
//! Builds the exam-performance dataset from a recording corpus and a
//! grade report.

use clap::{Parser, Subcommand};
use examsense::{dataset, Config, DatasetBuilder, Exam, VERSION};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "examsense")]
#[command(version = VERSION)]
#[command(about = "Links wearable physiological recordings to exam performance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dataset and write the JSON artifact
    Build {
        /// Corpus root (one folder per subject)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Path to the grade report
        #[arg(long)]
        grades: Option<PathBuf>,

        /// Output path for the JSON dataset
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Write indented JSON instead of the compact form
        #[arg(long)]
        pretty: bool,
    },

    /// Parse the grade report and print the recovered table
    Grades {
        /// Path to the grade report
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show configuration
    Config,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            corpus,
            grades,
            output,
            pretty,
        } => {
            cmd_build(corpus, grades, output, pretty);
        }
        Commands::Grades { report } => {
            cmd_grades(report);
        }
        Commands::Config => {
            cmd_config();
        }
    }
}

fn cmd_build(
    corpus: Option<PathBuf>,
    grades: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
) {
    println!("examsense v{VERSION}");
    println!();

    let mut config = Config::load().unwrap_or_default();
    if let Some(corpus) = corpus {
        config.corpus_root = corpus;
    }
    if let Some(grades) = grades {
        config.grade_report = grades;
    }
    if let Some(output) = output {
        config.output_path = output;
    }

    println!("Building dataset...");
    println!("  Corpus root: {}", config.corpus_root.display());
    println!("  Grade report: {}", config.grade_report.display());
    println!("  Output: {}", config.output_path.display());
    println!();

    let builder = DatasetBuilder::from_config(&config);
    println!("Run ID: {}", builder.log().run_id());

    let records = match builder.build() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error building dataset: {e}");
            std::process::exit(1);
        }
    };

    let stats = builder.log().stats();
    println!("Found {} subject folders", stats.subjects_discovered);
    println!("Found grades for {} students", stats.grade_entries);

    if let Err(e) = dataset::write_dataset(&records, &config.output_path, pretty) {
        eprintln!("Error writing dataset: {e}");
        std::process::exit(1);
    }
    println!(
        "Processed data saved: {} data points to {}",
        records.len(),
        config.output_path.display()
    );

    println!();
    println!("{}", builder.log().summary());
}

fn cmd_grades(report: Option<PathBuf>) {
    let config = Config::load().unwrap_or_default();
    let report_path = report.unwrap_or(config.grade_report);

    let table = examsense::load_report(&report_path);
    if table.is_empty() {
        println!("No grades recovered from {}", report_path.display());
        return;
    }

    println!("Recovered grades for {} students:", table.len());
    for (student_id, exams) in &table {
        let scores: Vec<String> = Exam::ALL
            .iter()
            .filter_map(|exam| exams.get(exam).map(|grade| format!("{exam}: {grade}")))
            .collect();
        println!("  {student_id}  {}", scores.join(", "));
    }
}

fn cmd_config() {
    let config = Config::load().unwrap_or_default();

    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", Config::config_path());
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_else(|_| "Error".to_string())
    );
}
