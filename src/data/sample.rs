use std::path::PathBuf;

use crate::data::input::FeatureSource;

/// A feature source paired with its ground-truth label.
///
/// `true` is the class trained toward the high soft target, `false` toward
/// the low one.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample<S = PathBuf> {
    source: S,
    label: bool,
}

impl<S: FeatureSource> LabeledSample<S> {
    pub fn new(source: S, label: bool) -> Self {
        LabeledSample { source, label }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn label(&self) -> bool {
        self.label
    }
}
