//! Evaluation of ranked meeting candidates.
//!
//! This crate provides:
//! - Evaluator trait for attaching derived scores to candidates
//! - FairnessEvaluator (availability/interest blend) and DistanceEvaluator
//!   (location-diversity heuristic)
//! - EvaluationPipeline for composing evaluators
//!
//! ## Architecture
//! Evaluation runs after ranking, and only on the candidates that survive
//! it (the best option and its runner-ups):
//! 1. FairnessEvaluator sets `fairness_score`
//! 2. DistanceEvaluator sets `avg_distance`
//!
//! ## Example Usage
//! ```ignore
//! use evaluation::EvaluationPipeline;
//!
//! let pipeline = EvaluationPipeline::standard();
//! let best = pipeline.evaluate(ranked[0].clone(), participants, &context);
//! ```

pub mod evaluation_pipeline;
pub mod evaluators;
pub mod traits;

// Re-export main types
pub use evaluation_pipeline::EvaluationPipeline;
pub use evaluators::{DistanceEvaluator, FairnessEvaluator};
pub use traits::Evaluator;
