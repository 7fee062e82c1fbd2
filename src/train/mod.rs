pub mod trainer;
pub mod train_config;
pub mod running_stat;
pub mod validate;

pub use trainer::{
    classify_sources, evaluate, test_network, train_network, train_until, Evaluation,
    TrainingSummary,
};
pub use train_config::{TrainConfig, ValidationConfig};
pub use running_stat::RunningStat;
pub use validate::{fold_ranges, validate, FoldReport, RepetitionReport, StatSummary};
