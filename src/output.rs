//! Renders generate/convert reports as text, JSON or CSV.

use crate::domain::model::{ConvertReport, GenerateReport, OutputFormat};
use crate::utils::error::Result;
use std::io::Write;

pub fn write_generate<W: Write>(out: &mut W, report: &GenerateReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for number in &report.numbers {
                writeln!(out, "{}", number)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["index", "value"])?;
            for (index, number) in report.numbers.iter().enumerate() {
                writer.write_record([(index + 1).to_string().as_str(), number.as_str()])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_convert<W: Write>(
    out: &mut W,
    report: &ConvertReport,
    format: OutputFormat,
    failure_prefix: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in &report.results {
                writeln!(out, "{}", result.render(failure_prefix))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["input", "status", "output"])?;
            for result in &report.results {
                let status = if result.is_converted() { "converted" } else { "failed" };
                writer.write_record([result.input(), status, result.output().unwrap_or("")])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert;
    use crate::domain::model::NumberBase;

    fn sample_generate() -> GenerateReport {
        GenerateReport {
            base: NumberBase::Decimal,
            digit_width: 3,
            count: 2,
            numbers: vec!["007".to_string(), "420".to_string()],
        }
    }

    fn render_convert(format: OutputFormat) -> String {
        let report = ConvertReport::new(NumberBase::Decimal, convert(NumberBase::Decimal, &["255", "oops"]));
        let mut buf = Vec::new();
        write_convert(&mut buf, &report, format, "Conversion failed: ").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_generate_text() {
        let mut buf = Vec::new();
        write_generate(&mut buf, &sample_generate(), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "007\n420\n");
    }

    #[test]
    fn test_generate_json() {
        let mut buf = Vec::new();
        write_generate(&mut buf, &sample_generate(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["base"], "decimal");
        assert_eq!(value["digit_width"], 3);
        assert_eq!(value["numbers"][0], "007");
    }

    #[test]
    fn test_generate_csv() {
        let mut buf = Vec::new();
        write_generate(&mut buf, &sample_generate(), OutputFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "index,value\n1,007\n2,420\n");
    }

    #[test]
    fn test_convert_text_marks_failures() {
        assert_eq!(render_convert(OutputFormat::Text), "FF\nConversion failed: oops\n");
    }

    #[test]
    fn test_convert_json() {
        let value: serde_json::Value = serde_json::from_str(&render_convert(OutputFormat::Json)).unwrap();
        assert_eq!(value["from"], "decimal");
        assert_eq!(value["to"], "hexadecimal");
        assert_eq!(value["results"][0]["output"], "FF");
        assert_eq!(value["results"][1]["status"], "failed");
        assert_eq!(value["results"][1]["input"], "oops");
    }

    #[test]
    fn test_convert_csv() {
        assert_eq!(
            render_convert(OutputFormat::Csv),
            "input,status,output\n255,converted,FF\noops,failed,\n"
        );
    }
}
