use anyhow::Context;
use clap::Parser;
use randomizer::adapters::random;
use randomizer::domain::model::{ConvertReport, GenerateReport};
use randomizer::utils::error::ErrorSeverity;
use randomizer::utils::{logger, validation::Validate};
use randomizer::{
    CliConfig, Command, ConfigProvider, GenerationRequest, NumberBase, RandomizerError, Session,
    TomlConfig,
};
use std::io;
use std::path::Path;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        let Some(error) = e.downcast_ref::<RandomizerError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            error,
            error.category(),
            error.severity()
        );
        eprintln!("❌ {}", error.user_friendly_message());
        eprintln!("💡 {}", error.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match error.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let settings = cli.load_settings()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Generate {
            base,
            digits,
            count,
        } => {
            let request = GenerationRequest::new(*base, *digits, *count);
            let mut rng = random::from_seed(settings.seed());
            let numbers = randomizer::generate(&request, &mut rng)?;
            tracing::info!("✅ Generated {} {} numbers", numbers.len(), base);

            let report = GenerateReport {
                base: *base,
                digit_width: *digits,
                count: *count,
                numbers,
            };
            randomizer::output::write_generate(&mut out, &report, settings.output_format())?;
        }
        Command::Convert {
            base,
            input,
            values,
        } => {
            let lines = if !values.is_empty() {
                values.clone()
            } else {
                let path = input.as_deref().map(Path::new);
                randomizer::input::read_lines_from(path).with_context(|| match input {
                    Some(path) => format!("Failed to read input file '{}'", path),
                    None => "Failed to read stdin".to_string(),
                })?
            };

            let report = ConvertReport::new(*base, randomizer::convert(*base, &lines));
            let failures = report.failure_count();
            if failures > 0 {
                tracing::warn!("⚠️ {} of {} lines could not be converted", failures, lines.len());
            } else {
                tracing::info!("✅ Converted {} lines to {}", lines.len(), base.opposite());
            }
            randomizer::output::write_convert(
                &mut out,
                &report,
                settings.output_format(),
                settings.failure_prefix(),
            )?;
        }
        Command::Interactive => {
            let rng = random::from_seed(settings.seed());
            let mut session = Session::new(&settings, rng);
            session.run(io::stdin().lock(), &mut out)?;
        }
        Command::Presets => display_presets(&settings),
    }

    Ok(())
}

fn display_presets(settings: &TomlConfig) {
    println!("📋 Presets:");
    for base in [NumberBase::Decimal, NumberBase::Hexadecimal] {
        let presets = settings.presets(base);
        println!("  {} (max {} digits)", base, base.max_digit_width());
        println!("    Digits: {:?}", presets.digit_widths);
        println!("    Counts: {:?}", presets.counts);
    }
    println!("  Failure prefix: {:?}", settings.failure_prefix());
    match settings.seed() {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: (random)"),
    }
}
