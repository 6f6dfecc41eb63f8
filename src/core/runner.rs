//! Application runner logic
//!
//! The binary acts as the host: it loads the UFO through norad, hands the
//! in-memory model to the checker and prints the report.

use crate::core::config::{CliArgs, ConfigFile};
use crate::font_source::Font;
use crate::logging;
use crate::qa::ZoneChecker;
use anyhow::{anyhow, Context, Result};
use tracing::info;

/// Run the reporter with the given CLI arguments.
/// Handles special CLI flags and delegates to the checker.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args.validate().map_err(|message| anyhow!(message))?;
    let _guard = logging::init_logging(cli_args.verbose, cli_args.log_file)?;

    let config = ConfigFile::load();
    let settings = cli_args.check_settings(config.as_ref());

    let path = cli_args
        .font_source
        .as_ref()
        .ok_or_else(|| anyhow!("No font source given"))?;
    info!("Loading font source {}", path.display());
    let ufo = norad::Font::load(path)
        .with_context(|| format!("Failed to load UFO {}", path.display()))?;
    let font = Font::from_norad_font(&ufo);

    let checker = ZoneChecker::new(settings);
    let report = if cli_args.glyphs.is_empty() {
        checker.font_report(&font)
    } else {
        checker.report_for_glyphs(&font, &cli_args.glyphs)
    };

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
        if !report.is_clean() {
            println!("{}", report.review_tab().text);
        }
    }

    Ok(())
}
