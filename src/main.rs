// Command-line front end. File discovery is left to the shell; ground-truth
// labels are read from file names ("...female..." / "...male...").
//
//   ferrite-gender [--config cfg.json] train <weights.bin> <file>...
//   ferrite-gender [--config cfg.json] test <weights.bin> <file>...
//   ferrite-gender [--config cfg.json] validate <file>...
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ferrite_gender::train::classify_sources;
use ferrite_gender::{train_until, validate, Config, Error, LabeledSample, Network, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

const USAGE: &str = "usage: ferrite-gender [--config cfg.json] \
    <train <weights> <file>... | test <weights> <file>... | validate <file>...>";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the arguments don't form a command.
fn run(args: &[String]) -> Result<bool> {
    let (config, rest) = match args {
        [flag, path, rest @ ..] if flag == "--config" => (Config::load_json(path)?, rest),
        _ => (Config::default(), args),
    };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match rest {
        [command, weights, files @ ..] if command == "train" && !files.is_empty() => {
            let samples = labeled_samples(files)?;
            let mut network = Network::new(&config.network, &mut rng)?;
            let summary = train_until(&mut network, &samples, &config.train, &mut rng)?;
            let note = if summary.reached_target {
                ""
            } else {
                " (target not reached)"
            };
            println!(
                "Trained {} epochs, accuracy {:.4}{}",
                summary.epochs, summary.accuracy, note
            );
            let mut writer = BufWriter::new(File::create(weights)?);
            network.save_weights(&mut writer)?;
        }
        [command, weights, files @ ..] if command == "test" && !files.is_empty() => {
            let mut network = Network::new(&config.network, &mut rng)?;
            network.load_weights(&mut BufReader::new(File::open(weights)?))?;

            let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
            let classifications = classify_sources(&mut network, &paths)?;
            let mut matched = 0usize;
            for (path, classification) in paths.iter().zip(&classifications) {
                let predicted = classification.is_positive();
                if label_from_file_name(path) == Some(predicted) {
                    matched += 1;
                }
                println!(
                    "{}: {} {:.2}",
                    display_name(path),
                    if predicted { "MALE" } else { "FEMALE" },
                    classification.confidence()
                );
            }
            println!(
                "Matched {} for {} files = {:.2}",
                matched,
                paths.len(),
                matched as f64 / paths.len() as f64
            );
        }
        [command, files @ ..] if command == "validate" && !files.is_empty() => {
            let samples = labeled_samples(files)?;
            let mut network = Network::new(&config.network, &mut rng)?;
            let reports = validate(
                &mut network,
                &samples,
                &config.validation,
                &config.train,
                &mut rng,
            )?;
            for report in reports {
                println!("TEST {} RESULTS", report.repetition);
                println!(
                    "Training Mean: {} Training Standard Deviation: {}",
                    report.training.mean, report.training.std_dev
                );
                println!(
                    "Test Mean: {} Test Standard Deviation: {}",
                    report.test.mean, report.test.std_dev
                );
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// `false` for names containing "female", `true` for other names containing
/// "male", `None` otherwise. Case-insensitive.
fn label_from_file_name(path: &Path) -> Option<bool> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    if name.contains("female") {
        Some(false)
    } else if name.contains("male") {
        Some(true)
    } else {
        None
    }
}

fn labeled_samples(files: &[String]) -> Result<Vec<LabeledSample>> {
    files
        .iter()
        .map(|file| {
            let path = PathBuf::from(file);
            let label = label_from_file_name(&path).ok_or_else(|| {
                Error::InvalidConfig(format!("cannot tell the label of {file} from its name"))
            })?;
            Ok(LabeledSample::new(path, label))
        })
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
