use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    Decimal,
    Hexadecimal,
}

impl NumberBase {
    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }

    /// The base a conversion renders into.
    pub fn opposite(self) -> Self {
        match self {
            NumberBase::Decimal => NumberBase::Hexadecimal,
            NumberBase::Hexadecimal => NumberBase::Decimal,
        }
    }

    /// Largest width whose bound `radix^width` still fits in an `i64`.
    pub fn max_digit_width(self) -> u32 {
        let radix = i64::from(self.radix());
        let mut width = 0;
        while radix.checked_pow(width + 1).is_some() {
            width += 1;
        }
        width
    }

    pub fn short_name(self) -> &'static str {
        match self {
            NumberBase::Decimal => "dec",
            NumberBase::Hexadecimal => "hex",
        }
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberBase::Decimal => write!(f, "decimal"),
            NumberBase::Hexadecimal => write!(f, "hexadecimal"),
        }
    }
}

impl FromStr for NumberBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dec" | "decimal" | "10" => Ok(NumberBase::Decimal),
            "hex" | "hexadecimal" | "16" => Ok(NumberBase::Hexadecimal),
            other => Err(format!("unknown number base '{}' (use dec or hex)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub base: NumberBase,
    pub digit_width: u32,
    pub count: usize,
}

impl GenerationRequest {
    pub fn new(base: NumberBase, digit_width: u32, count: usize) -> Self {
        Self {
            base,
            digit_width,
            count,
        }
    }
}

/// Outcome of converting one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConversionResult {
    Converted { input: String, output: String },
    Failed { input: String },
}

impl ConversionResult {
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionResult::Converted { .. })
    }

    pub fn input(&self) -> &str {
        match self {
            ConversionResult::Converted { input, .. } | ConversionResult::Failed { input } => {
                input
            }
        }
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            ConversionResult::Converted { output, .. } => Some(output),
            ConversionResult::Failed { .. } => None,
        }
    }

    /// Display form: the converted numeral, or `failure_prefix` followed by
    /// the untouched input line.
    pub fn render(&self, failure_prefix: &str) -> String {
        match self {
            ConversionResult::Converted { output, .. } => output.clone(),
            ConversionResult::Failed { input } => format!("{}{}", failure_prefix, input),
        }
    }
}

/// Option lists a host offers for one base, mirroring the two selection lists of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presets {
    pub digit_widths: Vec<u32>,
    pub counts: Vec<usize>,
}

impl Presets {
    pub fn default_for(base: NumberBase) -> Self {
        let digit_widths = match base {
            NumberBase::Decimal => (1..=10).collect(),
            NumberBase::Hexadecimal => vec![1, 2, 4, 8],
        };
        Self {
            digit_widths,
            counts: vec![1, 3, 5, 10],
        }
    }

    pub fn allows_width(&self, width: u32) -> bool {
        self.digit_widths.contains(&width)
    }

    pub fn allows_count(&self, count: usize) -> bool {
        self.counts.contains(&count)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub base: NumberBase,
    pub digit_width: u32,
    pub count: usize,
    pub numbers: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub from: NumberBase,
    pub to: NumberBase,
    pub results: Vec<ConversionResult>,
}

impl ConvertReport {
    pub fn new(from: NumberBase, results: Vec<ConversionResult>) -> Self {
        Self {
            from,
            to: from.opposite(),
            results,
        }
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_converted()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_digit_width() {
        assert_eq!(NumberBase::Decimal.max_digit_width(), 18);
        assert_eq!(NumberBase::Hexadecimal.max_digit_width(), 15);
    }

    #[test]
    fn test_parse_base_names() {
        assert_eq!("dec".parse::<NumberBase>().unwrap(), NumberBase::Decimal);
        assert_eq!("HEX".parse::<NumberBase>().unwrap(), NumberBase::Hexadecimal);
        assert_eq!("16".parse::<NumberBase>().unwrap(), NumberBase::Hexadecimal);
        assert!("octal".parse::<NumberBase>().is_err());
    }

    #[test]
    fn test_failed_result_keeps_original_line() {
        let failed = ConversionResult::Failed {
            input: "not-a-number".to_string(),
        };
        assert_eq!(failed.render("Conversion failed: "), "Conversion failed: not-a-number");
        assert_eq!(failed.output(), None);
    }

    #[test]
    fn test_conversion_result_json_shape() {
        let ok = ConversionResult::Converted {
            input: "255".to_string(),
            output: "FF".to_string(),
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "converted");
        assert_eq!(json["output"], "FF");
    }
}
