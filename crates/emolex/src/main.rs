//! `emolex` - Emotion classification for short conversations
//!
//! Classifies text as angry, happy, sad or others and evaluates classifiers
//! against a labeled corpus.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod settings;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emolex_core::{Classifier, Emotion, LexiconClassifier, MultinomialNb, Report};
use emolex_corpus::Corpus;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings::{Model, Settings};

/// Lexicon-based emotion classifier.
#[derive(Parser, Debug)]
#[command(name = "emolex", version, about, long_about = None)]
struct Cli {
    /// Settings file (default: <config dir>/emolex/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify each TEXT argument with the lexicon classifier
    Classify {
        /// Also print the per-emotion scores
        #[arg(long)]
        scores: bool,

        /// Print one JSON object per text
        #[arg(long, conflicts_with = "scores")]
        json: bool,

        /// Texts to classify
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Score a classifier against a labeled test corpus
    Evaluate {
        /// Labeled test corpus
        #[arg(long)]
        test: Option<PathBuf>,

        /// Labeled training corpus (bayes only)
        #[arg(long)]
        train: Option<PathBuf>,

        /// Classifier to evaluate
        #[arg(short, long, value_enum)]
        model: Option<Model>,

        /// Naive Bayes smoothing
        #[arg(long)]
        alpha: Option<f64>,

        /// Print per-label scores and the confusion matrix
        #[arg(long)]
        report: bool,
    },

    /// Write the current settings (defaults if none exist) to the settings file
    InitSettings {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Append labels from a JSON labels file to an unlabeled corpus
    JoinLabels {
        /// JSON labels file (`{"Label": {"0": "others", ...}}`)
        #[arg(long)]
        labels: PathBuf,

        /// Unlabeled tab-separated corpus
        #[arg(long)]
        input: PathBuf,

        /// Where to write the labeled corpus
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emolex=info,emolex_core=info,emolex_corpus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings_path = cli.config.unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path)?;

    match cli.command {
        Command::Classify { scores, json, text } => {
            if json {
                classify_json(&text)
            } else {
                classify(&text, scores);
                Ok(())
            }
        }
        Command::Evaluate {
            test,
            train,
            model,
            alpha,
            report,
        } => {
            let settings = settings.with_overrides(test, train, model, alpha);
            evaluate(&settings, report)
        }
        Command::InitSettings { force } => {
            if settings_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    settings_path.display()
                );
            }
            settings.save(&settings_path)?;
            println!("wrote {}", settings_path.display());
            Ok(())
        }
        Command::JoinLabels {
            labels,
            input,
            output,
        } => {
            let rows = emolex_corpus::join_label_files(&labels, &input, &output).with_context(
                || format!("failed to join {} into {}", labels.display(), input.display()),
            )?;
            println!("wrote {rows} rows to {}", output.display());
            Ok(())
        }
    }
}

/// Prints `<label>\t<text>` for every text.
fn classify(texts: &[String], show_scores: bool) {
    let classifier = LexiconClassifier::default();
    for text in texts {
        let scores = classifier.scores(text);
        if show_scores {
            println!("{}\t{text}\t[{scores}]", scores.best());
        } else {
            println!("{}\t{text}", scores.best());
        }
    }
}

/// One line of `classify --json` output.
#[derive(Debug, serde::Serialize)]
struct Prediction<'a> {
    text: &'a str,
    label: Emotion,
    scores: [u32; Emotion::COUNT],
}

/// Prints a JSON object per text.
fn classify_json(texts: &[String]) -> Result<()> {
    let classifier = LexiconClassifier::default();
    for text in texts {
        let scores = classifier.scores(text);
        let prediction = Prediction {
            text,
            label: scores.best(),
            scores: scores.as_array(),
        };
        println!("{}", serde_json::to_string(&prediction)?);
    }
    Ok(())
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    Corpus::open(path).with_context(|| format!("failed to load corpus {}", path.display()))
}

/// Runs the configured model over the test corpus and prints its scores.
fn evaluate(settings: &Settings, show_report: bool) -> Result<()> {
    let test = load_corpus(&settings.test_path)?;

    let classifier: Box<dyn Classifier> = match settings.model {
        Model::Lexicon => Box::new(LexiconClassifier::default()),
        Model::Bayes => {
            let start = Instant::now();
            let train = load_corpus(&settings.train_path)?;
            let model = MultinomialNb::fit(&train.texts(), &train.labels(), settings.alpha)
                .context("failed to train naive bayes")?;
            println!("training time: {:.2} seconds", start.elapsed().as_secs_f64());
            Box::new(model)
        }
    };

    info!(model = ?settings.model, examples = test.len(), "evaluating");

    let start = Instant::now();
    let predicted = classifier.classify_all(&test.texts());
    println!("prediction time: {:.4} seconds", start.elapsed().as_secs_f64());

    let report = Report::compute(&test.labels(), &predicted).context("failed to score predictions")?;
    write_scores(&mut std::io::stdout().lock(), &report, show_report)?;
    Ok(())
}

/// Writes the accuracy and F1 lines, then the full report if asked for.
fn write_scores<W: Write>(out: &mut W, report: &Report, show_report: bool) -> std::io::Result<()> {
    writeln!(out, "Accuracy: {:.2}", report.accuracy)?;
    writeln!(out, "f1: {:.2}", report.f1_weighted)?;
    if show_report {
        writeln!(out)?;
        write!(out, "{report}")?;
    }
    Ok(())
}
