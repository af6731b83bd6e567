//! Line-oriented interactive session with a decimal tab and a hexadecimal tab.

use crate::app::panel::Panel;
use crate::domain::model::NumberBase;
use crate::domain::ports::{ConfigProvider, RandomSource};
use crate::utils::error::{RandomizerError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Commands:
  tab dec|hex     switch between the decimal and hexadecimal tab
  digits N        select the number of digits (see 'options')
  count N         select how many numbers to generate
  generate        generate numbers with the current selection
  convert         convert the generated numbers to the other base
  show            print both displays of the current tab
  options         list the selectable widths and counts
  help            print this help
  quit            leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Tab(NumberBase),
    Digits(String),
    Count(String),
    Generate,
    Convert,
    Show,
    Options,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
        let argument = parts.next();

        let command = match (keyword.as_str(), argument) {
            ("tab", Some(base)) => SessionCommand::Tab(base.parse()?),
            ("digits", Some(value)) => SessionCommand::Digits(value.to_string()),
            ("count", Some(value)) => SessionCommand::Count(value.to_string()),
            ("tab" | "digits" | "count", None) => {
                return Err(format!("'{}' needs a value", keyword));
            }
            ("generate" | "gen", None) => SessionCommand::Generate,
            ("convert", None) => SessionCommand::Convert,
            ("show", None) => SessionCommand::Show,
            ("options", None) => SessionCommand::Options,
            ("help" | "?", None) => SessionCommand::Help,
            ("quit" | "exit", None) => SessionCommand::Quit,
            _ => return Err(format!("unknown command '{}' (try 'help')", line.trim())),
        };

        if parts.next().is_some() {
            return Err(format!("too many arguments in '{}'", line.trim()));
        }
        Ok(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<R: RandomSource> {
    decimal: Panel,
    hexadecimal: Panel,
    active: NumberBase,
    failure_prefix: String,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C, rng: R) -> Self {
        Self {
            decimal: Panel::new(NumberBase::Decimal, config.presets(NumberBase::Decimal).clone()),
            hexadecimal: Panel::new(
                NumberBase::Hexadecimal,
                config.presets(NumberBase::Hexadecimal).clone(),
            ),
            active: NumberBase::Decimal,
            failure_prefix: config.failure_prefix().to_string(),
            rng,
        }
    }

    pub fn active(&self) -> NumberBase {
        self.active
    }

    pub fn panel(&self, base: NumberBase) -> &Panel {
        match base {
            NumberBase::Decimal => &self.decimal,
            NumberBase::Hexadecimal => &self.hexadecimal,
        }
    }

    fn active_panel_mut(&mut self) -> &mut Panel {
        match self.active {
            NumberBase::Decimal => &mut self.decimal,
            NumberBase::Hexadecimal => &mut self.hexadecimal,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, out: &mut W) -> Result<()> {
        tracing::info!("🎲 Interactive session started");
        writeln!(out, "Type 'help' for the list of commands.")?;
        self.prompt(out)?;

        for chunk in input.split(b'\n') {
            let mut bytes = chunk?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let Ok(line) = String::from_utf8(bytes) else {
                tracing::warn!("Ignoring a command line that is not valid UTF-8");
                writeln!(out, "Input is not valid UTF-8, line ignored")?;
                self.prompt(out)?;
                continue;
            };
            if !line.trim().is_empty() && self.execute(&line, out)? == Flow::Quit {
                break;
            }
            self.prompt(out)?;
        }

        writeln!(out)?;
        tracing::info!("👋 Interactive session finished");
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "[{}]> ", self.active.short_name())?;
        out.flush()?;
        Ok(())
    }

    /// Runs one command line. User mistakes are reported to `out`; only
    /// output failures are returned as errors.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!("Session command: {:?}", command);

        match self.dispatch(command, out) {
            Ok(flow) => Ok(flow),
            Err(e @ (RandomizerError::InvalidParameter { .. } | RandomizerError::OutOfRange { .. })) => {
                writeln!(out, "❌ {}", e.user_friendly_message())?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        match command {
            SessionCommand::Tab(base) => {
                self.active = base;
                writeln!(out, "Switched to the {} tab", base)?;
            }
            SessionCommand::Digits(value) => {
                let width = self.active_panel_mut().select_width(&value)?;
                writeln!(out, "Digits: {}", width)?;
            }
            SessionCommand::Count(value) => {
                let count = self.active_panel_mut().select_count(&value)?;
                writeln!(out, "Count: {}", count)?;
            }
            SessionCommand::Generate => {
                let panel = match self.active {
                    NumberBase::Decimal => &mut self.decimal,
                    NumberBase::Hexadecimal => &mut self.hexadecimal,
                };
                match panel.generate(&mut self.rng)? {
                    Some(numbers) => {
                        for number in numbers {
                            writeln!(out, "{}", number)?;
                        }
                    }
                    None => writeln!(out, "Select digits and count first")?,
                }
            }
            SessionCommand::Convert => {
                let prefix = self.failure_prefix.clone();
                let results = self.active_panel_mut().convert();
                for result in results {
                    writeln!(out, "{}", result.render(&prefix))?;
                }
            }
            SessionCommand::Show => self.show(out)?,
            SessionCommand::Options => {
                let presets = self.panel(self.active).presets();
                writeln!(out, "Digits: {:?}", presets.digit_widths)?;
                writeln!(out, "Counts: {:?}", presets.counts)?;
            }
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let panel = self.panel(self.active);
        let selection = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{} tab (digits: {}, count: {})",
            panel.base(),
            selection(panel.selected_width().map(|w| w.to_string())),
            selection(panel.selected_count().map(|c| c.to_string()))
        )?;
        writeln!(out, "Generated:")?;
        for number in panel.generated() {
            writeln!(out, "  {}", number)?;
        }
        writeln!(out, "Converted:")?;
        for result in panel.converted() {
            writeln!(out, "  {}", result.render(&self.failure_prefix))?;
        }
        Ok(())
    }
}
