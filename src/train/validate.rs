use std::ops::Range;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::{FeatureSource, LabeledSample};
use crate::error::{Error, Result};
use crate::network::Network;
use crate::train::running_stat::RunningStat;
use crate::train::train_config::{TrainConfig, ValidationConfig};
use crate::train::trainer::{test_network, train_network};

/// Accuracies measured on one held-out fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldReport {
    /// 0-based fold index.
    pub fold: usize,
    /// Indices, into the shuffled order of this repetition, of the held-out samples.
    pub test_range: Range<usize>,
    pub training_accuracy: f64,
    pub test_accuracy: f64,
}

/// Mean and sample standard deviation of one accuracy series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub mean: f64,
    pub std_dev: f64,
}

impl StatSummary {
    fn from_stat(stat: &RunningStat) -> StatSummary {
        StatSummary {
            mean: stat.mean().unwrap_or_default(),
            std_dev: stat.sample_std_dev().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepetitionReport {
    /// 1-based repetition number.
    pub repetition: usize,
    pub folds: Vec<FoldReport>,
    pub training: StatSummary,
    pub test: StatSummary,
}

/// Splits `0..len` into `folds` contiguous ranges of `len / folds` items;
/// the last range also takes the remainder.
pub fn fold_ranges(len: usize, folds: usize) -> Vec<Range<usize>> {
    if folds == 0 {
        return Vec::new();
    }
    let fold_size = len / folds;
    (0..folds)
        .map(|j| {
            let end = if j == folds - 1 {
                len
            } else {
                (j + 1) * fold_size
            };
            j * fold_size..end
        })
        .collect()
}

/// Repeated k-fold cross-validation.
///
/// Every repetition shuffles the samples with `rng`, then for each fold
/// trains one epoch on the remaining folds and tests on the held-out one.
/// Unless `reinitialize_per_fold` is set, the same network keeps learning
/// across folds and repetitions.
pub fn validate<S, R>(
    network: &mut Network,
    samples: &[LabeledSample<S>],
    validation: &ValidationConfig,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<RepetitionReport>>
where
    S: FeatureSource,
    R: Rng + ?Sized,
{
    validation.validate()?;
    config.validate()?;
    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if samples.len() < validation.folds {
        return Err(Error::InsufficientSamples { needed: validation.folds, found: samples.len() });
    }

    let ranges = fold_ranges(samples.len(), validation.folds);
    let mut reports = Vec::with_capacity(validation.repetitions);

    for repetition in 1..=validation.repetitions {
        let mut order: Vec<&LabeledSample<S>> = samples.iter().collect();
        order.shuffle(rng);

        let mut training_stat = RunningStat::new();
        let mut test_stat = RunningStat::new();
        let mut folds = Vec::with_capacity(ranges.len());

        for (fold, range) in ranges.iter().enumerate() {
            if validation.reinitialize_per_fold {
                let network_config = network.config().clone();
                *network = Network::new(&network_config, rng)?;
            }

            let training = order[..range.start].iter().chain(order[range.end..].iter()).copied();
            let training_accuracy = train_network(network, training, config)?;
            let test_accuracy = test_network(network, order[range.clone()].iter().copied())?;
            debug!(repetition, fold, training_accuracy, test_accuracy, "fold finished");

            training_stat.push(training_accuracy);
            test_stat.push(test_accuracy);
            folds.push(FoldReport {
                fold,
                test_range: range.clone(),
                training_accuracy,
                test_accuracy,
            });
        }

        let training = StatSummary::from_stat(&training_stat);
        let test = StatSummary::from_stat(&test_stat);
        info!(
            "repetition {}: training mean {:.4} sd {:.4}, test mean {:.4} sd {:.4}",
            repetition, training.mean, training.std_dev, test.mean, test.std_dev
        );
        reports.push(RepetitionReport {
            repetition,
            folds,
            training,
            test,
        });
    }

    Ok(reports)
}
