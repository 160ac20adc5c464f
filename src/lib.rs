#![doc = include_str!("../README.md")]

mod exercise;
mod layout;
mod output;
mod pdf;
mod rng;
mod sampler;
mod weights;

pub use exercise::{BuildError, Exercise, build_exercise_set};
pub use layout::{A4, PageLayout, PlacedExercise, TextMeasure};
pub use output::resolve_output_path;
pub use pdf::{FontMetrics, Worksheet, render_worksheet};
pub use rng::SeededRng;
pub use sampler::sample_factor;
pub use weights::WeightTable;
