use crate::domain::model::{NumberBase, OutputFormat, Presets};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RandomizerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FAILURE_PREFIX: &str = "Conversion failed: ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub decimal: Presets,
    pub hexadecimal: Presets,
    pub output: OutputConfig,
    pub random: RandomConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub failure_prefix: String,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            decimal: Presets::default_for(NumberBase::Decimal),
            hexadecimal: Presets::default_for(NumberBase::Hexadecimal),
            output: OutputConfig::default(),
            random: RandomConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            failure_prefix: DEFAULT_FAILURE_PREFIX.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RandomizerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RandomizerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RANDOMIZER_SEED})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RandomizerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn presets_for(&self, base: NumberBase) -> &Presets {
        match base {
            NumberBase::Decimal => &self.decimal,
            NumberBase::Hexadecimal => &self.hexadecimal,
        }
    }

    fn validate_presets(&self, base: NumberBase) -> Result<()> {
        let section = match base {
            NumberBase::Decimal => "decimal",
            NumberBase::Hexadecimal => "hexadecimal",
        };
        let presets = self.presets_for(base);

        let widths_field = format!("{}.digit_widths", section);
        validation::validate_option_list(&widths_field, &presets.digit_widths)?;
        for &width in &presets.digit_widths {
            validation::validate_range(&widths_field, width, 1, base.max_digit_width())?;
        }

        let counts_field = format!("{}.counts", section);
        validation::validate_option_list(&counts_field, &presets.counts)?;
        for &count in &presets.counts {
            validation::validate_positive_number(&counts_field, count, 1)?;
        }

        Ok(())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.validate_presets(NumberBase::Decimal)?;
        self.validate_presets(NumberBase::Hexadecimal)?;
        validation::validate_non_empty_string("output.failure_prefix", &self.output.failure_prefix)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn presets(&self, base: NumberBase) -> &Presets {
        self.presets_for(base)
    }

    fn failure_prefix(&self) -> &str {
        &self.output.failure_prefix
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn seed(&self) -> Option<u64> {
        self.random.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
