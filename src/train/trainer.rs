use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::{FeatureSource, LabeledSample};
use crate::error::{Error, Result};
use crate::network::{Classification, Network};
use crate::train::train_config::TrainConfig;

/// One epoch of online training over `samples`, in the order given.
///
/// Each sample is classified before its update, and the returned value is
/// the fraction classified correctly during the pass.
pub fn train_network<'a, S, I>(
    network: &mut Network,
    samples: I,
    config: &TrainConfig,
) -> Result<f64>
where
    S: FeatureSource + 'a,
    I: IntoIterator<Item = &'a LabeledSample<S>>,
{
    let optimizer = config.optimizer();
    let input_size = network.config().input_size;
    let mut matches = 0usize;
    let mut total = 0usize;

    for sample in samples {
        let input = sample.source().read_features(input_size)?;
        let target = config.target_for(sample.label());
        let classification = network.train_step(&input, target, &optimizer)?;
        if sample.label() == classification.is_positive() {
            matches += 1;
        }
        total += 1;
    }

    accuracy(matches, total)
}

/// Outcome of [`train_until`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub epochs: usize,
    /// Training accuracy of the last epoch run.
    pub accuracy: f64,
    pub reached_target: bool,
}

/// Repeats [`train_network`] until an epoch reaches `config.target_accuracy`
/// or `config.max_epochs` have run. Sample order is reshuffled with `rng`
/// before every epoch.
pub fn train_until<S, R>(
    network: &mut Network,
    samples: &[LabeledSample<S>],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainingSummary>
where
    S: FeatureSource,
    R: Rng + ?Sized,
{
    config.validate()?;
    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut order: Vec<&LabeledSample<S>> = samples.iter().collect();
    let mut summary = TrainingSummary {
        epochs: 0,
        accuracy: 0.0,
        reached_target: false,
    };

    for epoch in 1..=config.max_epochs {
        order.shuffle(rng);
        let accuracy = train_network(network, order.iter().copied(), config)?;
        debug!(epoch, accuracy, "training epoch finished");

        summary = TrainingSummary {
            epochs: epoch,
            accuracy,
            reached_target: accuracy >= config.target_accuracy,
        };
        if summary.reached_target {
            return Ok(summary);
        }
    }

    warn!(
        "stopped after {} epochs at accuracy {:.4}, target was {:.4}",
        summary.epochs, summary.accuracy, config.target_accuracy
    );
    Ok(summary)
}

/// Forward-only results over a labelled set. Only [`evaluate`] builds one,
/// so it always covers at least one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    predictions: Vec<Classification>,
    matches: usize,
}

impl Evaluation {
    /// One classification per sample, in input order.
    pub fn predictions(&self) -> &[Classification] {
        &self.predictions
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn total(&self) -> usize {
        self.predictions.len()
    }

    pub fn accuracy(&self) -> f64 {
        self.matches as f64 / self.total() as f64
    }
}

/// Classifies every sample without touching any weight.
pub fn evaluate<'a, S, I>(network: &mut Network, samples: I) -> Result<Evaluation>
where
    S: FeatureSource + 'a,
    I: IntoIterator<Item = &'a LabeledSample<S>>,
{
    let input_size = network.config().input_size;
    let mut predictions = Vec::new();
    let mut matches = 0usize;

    for sample in samples {
        let input = sample.source().read_features(input_size)?;
        network.compute_output(&input)?;
        let classification = network.classify();
        if sample.label() == classification.is_positive() {
            matches += 1;
        }
        predictions.push(classification);
    }

    if predictions.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(Evaluation {
        predictions,
        matches,
    })
}

/// Fraction of `samples` classified correctly.
pub fn test_network<'a, S, I>(network: &mut Network, samples: I) -> Result<f64>
where
    S: FeatureSource + 'a,
    I: IntoIterator<Item = &'a LabeledSample<S>>,
{
    Ok(evaluate(network, samples)?.accuracy())
}

/// Classifies unlabelled sources, in order.
pub fn classify_sources<'a, S, I>(
    network: &mut Network,
    sources: I,
) -> Result<Vec<Classification>>
where
    S: FeatureSource + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let input_size = network.config().input_size;
    let mut classifications = Vec::new();
    for source in sources {
        let input = source.read_features(input_size)?;
        network.compute_output(&input)?;
        classifications.push(network.classify());
    }

    if classifications.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(classifications)
}

fn accuracy(matches: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(Error::EmptyDataset);
    }
    Ok(matches as f64 / total as f64)
}
