use anyhow::Result;
use sat32::cli::{self, Cli};
use sat32::config::{load_config, load_config_file, Sat32Config};
use sat32::{convert, create_writer, FormatSelector};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    let config = load_run_config(&cli)?;
    let settings = cli::resolve_settings(&cli, &config);

    // The selector is validated before any numeric work
    let format: FormatSelector = cli.format.parse()?;
    let result = convert(&cli.value, format, settings.hex_prefix)?;
    tracing::info!(
        format = %format,
        overflow = result.overflow,
        saturated = result.saturated,
        "conversion complete"
    );

    let stdout = std::io::stdout();
    let mut writer = create_writer(settings.style, stdout.lock());
    writer.write_result(&result)?;
    Ok(())
}

// Side effect function for config loading (I/O at edges)
fn load_run_config(cli: &Cli) -> Result<Sat32Config> {
    match &cli.config {
        Some(path) => load_config_file(path),
        None => Ok(load_config()),
    }
}
