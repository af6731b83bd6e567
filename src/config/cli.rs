use crate::config::toml_config::TomlConfig;
use crate::domain::model::{NumberBase, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "randomizer")]
#[command(about = "Generate fixed-width decimal/hexadecimal random numbers and convert between the two")]
pub struct CliConfig {
    /// Path to a TOML file with presets and output settings
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Seed for reproducible output (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate random zero-padded numbers
    Generate {
        #[arg(short, long, default_value = "dec")]
        base: NumberBase,

        /// Number of digits in each value
        #[arg(short, long)]
        digits: u32,

        /// How many values to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Convert numbers into the other base, one per line
    Convert {
        /// Base the input is written in
        #[arg(short, long, default_value = "dec")]
        base: NumberBase,

        /// Read input lines from this file instead of stdin
        #[arg(short, long, conflicts_with = "values")]
        input: Option<String>,

        /// Values to convert; stdin is read when none are given
        values: Vec<String>,
    },
    /// Interactive two-tab session
    Interactive,
    /// Print the configured option lists
    Presets,
}

impl CliConfig {
    /// 讀取配置檔 (若有) 並套用命令列覆蓋設定
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(seed) = self.seed {
            settings.random.seed = Some(seed);
            tracing::debug!("🔧 Seed overridden to: {}", seed);
        }
        if let Some(format) = self.format {
            settings.output.format = format;
            tracing::debug!("🔧 Output format overridden to: {:?}", format);
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Command::Convert {
            input: Some(path), ..
        } = &self.command
        {
            validate_path("input", path)?;
        }
        Ok(())
    }
}
