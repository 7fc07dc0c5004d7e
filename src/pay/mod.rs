pub mod calculator;

pub use calculator::{PayBreakdown, PayError, PayInput, compute};
