use crate::core::ConversionResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `value_out`, `overflow=<0|1>`, `saturated=<0|1>`, one per line
    #[default]
    Plain,
    /// The full result as pretty-printed JSON
    Json,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &ConversionResult) -> anyhow::Result<()>;
}

pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for PlainWriter<W> {
    fn write_result(&mut self, result: &ConversionResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", result.value_out)?;
        writeln!(self.writer, "overflow={}", result.overflow_bit())?;
        writeln!(self.writer, "saturated={}", result.saturated_bit())?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &ConversionResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(style: OutputStyle, writer: W) -> Box<dyn OutputWriter + 'a> {
    match style {
        OutputStyle::Plain => Box::new(PlainWriter::new(writer)),
        OutputStyle::Json => Box::new(JsonWriter::new(writer)),
    }
}
