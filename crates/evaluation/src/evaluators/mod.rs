//! Evaluator implementations for the evaluation pipeline.

pub mod distance;
pub mod fairness;

// Re-export for convenience
pub use distance::DistanceEvaluator;
pub use fairness::FairnessEvaluator;
