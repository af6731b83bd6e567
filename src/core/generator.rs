use crate::core::numeral::{format_padded, upper_bound};
use crate::domain::model::{GenerationRequest, NumberBase};
use crate::domain::ports::RandomSource;
use crate::utils::error::{RandomizerError, Result};

impl GenerationRequest {
    /// Builds a request from raw host text such as a selected list entry.
    pub fn parse(base: NumberBase, digit_width: &str, count: &str) -> Result<Self> {
        let digit_width = digit_width.trim().parse::<u32>().map_err(|_| {
            RandomizerError::invalid_parameter("digit_width", digit_width, "not a positive integer")
        })?;
        let count = count.trim().parse::<usize>().map_err(|_| {
            RandomizerError::invalid_parameter("count", count, "not a positive integer")
        })?;
        Ok(Self::new(base, digit_width, count))
    }

    /// Checks both parameters and returns the exclusive sampling bound.
    pub fn bound(&self) -> Result<i64> {
        if self.digit_width == 0 {
            return Err(RandomizerError::invalid_parameter(
                "digit_width",
                self.digit_width,
                "must be at least 1",
            ));
        }
        if self.count == 0 {
            return Err(RandomizerError::invalid_parameter(
                "count",
                self.count,
                "must be at least 1",
            ));
        }
        upper_bound(self.base, self.digit_width).ok_or(RandomizerError::OutOfRange {
            base: self.base,
            digit_width: self.digit_width,
            max_digit_width: self.base.max_digit_width(),
        })
    }
}

/// Draws `count` independent values from `[0, radix^digit_width)` and formats
/// each as exactly `digit_width` zero-padded digits, in draw order.
pub fn generate<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Vec<String>> {
    let max = request.bound()?;
    let width = request.digit_width as usize;

    tracing::debug!(
        "Generating {} {} numbers of width {} (bound {})",
        request.count,
        request.base,
        request.digit_width,
        max
    );

    let numbers = (0..request.count)
        .map(|_| format_padded(rng.next_below(max), width, request.base))
        .collect();
    Ok(numbers)
}
