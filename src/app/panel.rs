use crate::core::{convert, generate};
use crate::domain::model::{ConversionResult, GenerationRequest, NumberBase, Presets};
use crate::domain::ports::RandomSource;
use crate::utils::error::{RandomizerError, Result};

/// Host-side state of one base's tab: two option lists, the current
/// selections and both displays.
#[derive(Debug, Clone)]
pub struct Panel {
    base: NumberBase,
    presets: Presets,
    selected_width: Option<u32>,
    selected_count: Option<usize>,
    generated: Vec<String>,
    converted: Vec<ConversionResult>,
}

impl Panel {
    pub fn new(base: NumberBase, presets: Presets) -> Self {
        Self {
            base,
            presets,
            selected_width: None,
            selected_count: None,
            generated: Vec::new(),
            converted: Vec::new(),
        }
    }

    pub fn base(&self) -> NumberBase {
        self.base
    }

    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    pub fn selected_width(&self) -> Option<u32> {
        self.selected_width
    }

    pub fn selected_count(&self) -> Option<usize> {
        self.selected_count
    }

    pub fn generated(&self) -> &[String] {
        &self.generated
    }

    pub fn converted(&self) -> &[ConversionResult] {
        &self.converted
    }

    /// Selects a digit width; only values from the width list are accepted.
    pub fn select_width(&mut self, text: &str) -> Result<u32> {
        let width = text.trim().parse::<u32>().map_err(|_| {
            RandomizerError::invalid_parameter("digit_width", text, "not a positive integer")
        })?;
        if !self.presets.allows_width(width) {
            return Err(RandomizerError::invalid_parameter(
                "digit_width",
                width,
                format!("not one of the offered widths {:?}", self.presets.digit_widths),
            ));
        }
        self.selected_width = Some(width);
        Ok(width)
    }

    /// Selects a count; only values from the count list are accepted.
    pub fn select_count(&mut self, text: &str) -> Result<usize> {
        let count = text.trim().parse::<usize>().map_err(|_| {
            RandomizerError::invalid_parameter("count", text, "not a positive integer")
        })?;
        if !self.presets.allows_count(count) {
            return Err(RandomizerError::invalid_parameter(
                "count",
                count,
                format!("not one of the offered counts {:?}", self.presets.counts),
            ));
        }
        self.selected_count = Some(count);
        Ok(count)
    }

    /// Replaces the generated display. Returns `Ok(None)` without touching
    /// anything when either selection is missing.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Option<&[String]>> {
        let (Some(width), Some(count)) = (self.selected_width, self.selected_count) else {
            return Ok(None);
        };

        let request = GenerationRequest::new(self.base, width, count);
        self.generated = generate(&request, rng)?;
        self.converted.clear();
        Ok(Some(self.generated.as_slice()))
    }

    /// Converts whatever the generated display currently holds.
    pub fn convert(&mut self) -> &[ConversionResult] {
        self.converted = convert(self.base, &self.generated);
        &self.converted
    }
}
