pub mod annealer;
pub mod options;

pub use annealer::{Annealer, AnnealingResult};
pub use options::{AnnealingOptions, AnnealingOptionsBuilder, LogLevel};
