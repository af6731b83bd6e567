use crate::core::numeral::{parse, render};
use crate::domain::model::{ConversionResult, NumberBase};

/// Converts each line from `base` into the opposite base.
///
/// Lines are handled independently and in order; a line that does not parse
/// becomes a `Failed` entry carrying the original text and never stops the batch.
pub fn convert<S: AsRef<str>>(base: NumberBase, lines: &[S]) -> Vec<ConversionResult> {
    let target = base.opposite();
    lines
        .iter()
        .map(|line| convert_line(base, target, line.as_ref()))
        .collect()
}

fn convert_line(base: NumberBase, target: NumberBase, line: &str) -> ConversionResult {
    match parse(line, base) {
        Some(value) => ConversionResult::Converted {
            input: line.to_string(),
            output: render(value, target),
        },
        None => {
            tracing::warn!("Could not parse '{}' as a {} number", line, base);
            ConversionResult::Failed {
                input: line.to_string(),
            }
        }
    }
}
