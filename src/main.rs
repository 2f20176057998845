use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ferrite_perceptron::{engine, logging, ClassCatalogue, TestingSettings, TrainStatus, TrainingSettings};

/// Single-layer bipolar perceptron for pixel-grid character recognition.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train on a dataset file and save the weights
    Train {
        /// Training dataset file
        #[arg(short, long, value_name = "PATH")]
        data: PathBuf,
        /// JSON training settings; replaces the individual flags below
        #[arg(
            long,
            value_name = "PATH",
            conflicts_with_all = ["weights_out", "zero_weights", "max_epochs", "learning_rate", "theta", "weight_change_threshold", "seed"]
        )]
        config: Option<PathBuf>,
        /// Where to write the trained weights
        #[arg(short, long, value_name = "PATH", required_unless_present = "config")]
        weights_out: Option<PathBuf>,
        /// Start from zero weights instead of random values in [-0.5, 0.5)
        #[arg(long)]
        zero_weights: bool,
        #[arg(long, value_name = "INT", default_value_t = 1000)]
        max_epochs: usize,
        /// Learning rate alpha, in (0, 1]
        #[arg(long, value_name = "FLOAT", default_value_t = 1.0)]
        learning_rate: f64,
        /// Activation threshold theta
        #[arg(long, value_name = "FLOAT", default_value_t = 0.0, allow_hyphen_values = true)]
        theta: f64,
        /// Smallest weight change that still counts as a change
        #[arg(long, value_name = "FLOAT", default_value_t = 0.0)]
        weight_change_threshold: f64,
        /// Seed for the random initial weights
        #[arg(long, value_name = "INT")]
        seed: Option<u64>,
        /// Also write the effective settings as JSON, usable with --config
        #[arg(long, value_name = "PATH")]
        save_config: Option<PathBuf>,
    },
    /// Classify a dataset file with previously trained weights
    Test {
        /// JSON testing settings; replaces the path and theta flags below
        #[arg(
            long,
            value_name = "PATH",
            conflicts_with_all = ["weights", "data", "results", "theta"]
        )]
        config: Option<PathBuf>,
        /// Trained weight file
        #[arg(short, long, value_name = "PATH", required_unless_present = "config")]
        weights: Option<PathBuf>,
        /// Testing dataset file
        #[arg(short, long, value_name = "PATH", required_unless_present = "config")]
        data: Option<PathBuf>,
        /// Where to write the results report
        #[arg(short, long, value_name = "PATH", required_unless_present = "config")]
        results: Option<PathBuf>,
        /// Override the threshold stored in the weight file
        #[arg(long, value_name = "FLOAT", allow_hyphen_values = true)]
        theta: Option<f64>,
        /// JSON class catalogue; derived from the testing dataset when absent
        #[arg(long, value_name = "PATH")]
        catalogue: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Command::Train {
            data,
            config,
            weights_out,
            zero_weights,
            max_epochs,
            learning_rate,
            theta,
            weight_change_threshold,
            seed,
            save_config,
        } => {
            let settings = match config {
                Some(path) => TrainingSettings::load_json(path)?,
                None => TrainingSettings {
                    set_weights_to_zero: zero_weights,
                    max_epochs,
                    learning_rate,
                    theta,
                    weight_change_threshold,
                    output_weights_path: weights_out.ok_or("--weights-out is required")?,
                    seed,
                },
            };
            settings.validate()?;
            if let Some(path) = save_config {
                settings.save_json(path)?;
            }

            let run = engine::train(&data, &settings)?;
            match run.outcome.status {
                TrainStatus::Converged => {
                    println!("Training converged after {} epochs.", run.outcome.epochs_run)
                }
                _ => println!(
                    "Training reached max epochs ({}) before converging.",
                    settings.max_epochs
                ),
            }
            run.persisted?;
            println!("Weights saved to {}", settings.output_weights_path.display());
        }
        Command::Test { config, weights, data, results, theta, catalogue } => {
            let catalogue = catalogue.map(ClassCatalogue::load_json).transpose()?;
            let settings = match config {
                Some(path) => TestingSettings::load_json(path)?,
                None => TestingSettings {
                    weights_path: weights.ok_or("--weights is required")?,
                    dataset_path: data.ok_or("--data is required")?,
                    results_path: results.ok_or("--results is required")?,
                    theta,
                },
            };

            let classifications = engine::test(&settings, catalogue.as_ref())?;
            let recognized = classifications.iter().filter(|c| c.is_correct()).count();
            println!(
                "Recognized {} of {} samples; results saved to {}",
                recognized,
                classifications.len(),
                settings.results_path.display()
            );
        }
    }
    Ok(())
}
