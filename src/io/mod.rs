pub mod output;

pub use output::{create_writer, JsonWriter, OutputStyle, OutputWriter, PlainWriter};
