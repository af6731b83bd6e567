use crate::domain::model::{NumberBase, OutputFormat, Presets};

/// Source of uniformly distributed integers.
///
/// Injected into the generator so callers pick between the process-wide
/// default, a seeded generator for reproducible runs, or a fixed sequence
/// in tests.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` is always positive.
    fn next_below(&mut self, bound: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: i64) -> i64 {
        (**self).next_below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_below(&mut self, bound: i64) -> i64 {
        (**self).next_below(bound)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn presets(&self, base: NumberBase) -> &Presets;
    fn failure_prefix(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn seed(&self) -> Option<u64>;
}
