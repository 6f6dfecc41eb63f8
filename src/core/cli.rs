//! Command line interface for the zonecheck reporter
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::config::ConfigFile;
use crate::core::settings::CheckSettings;
use crate::geometry::NeighborLookup;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// zonecheck CLI arguments
///
/// Examples:
///   zonecheck --font MyFont.ufo                 # Report every glyph
///   zonecheck --font MyFont.ufo -g a -g o       # Only check 'a' and 'o'
///   zonecheck --font MyFont.ufo --json          # Machine-readable report
///   zonecheck --font MyFont.ufo --circular      # Wrap neighbors at contour ends
///   zonecheck --new-config                      # Write ~/.config/zonecheck
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "zonecheck",
    version,
    about = "Find outline nodes close to, but not on, alignment zones",
    long_about = "zonecheck reads a UFO font source and reports on-curve nodes that sit just outside an alignment zone edge (within the tolerance band), where they were most likely meant to sit on the edge."
)]
pub struct CliArgs {
    /// Path to a UFO font source to check
    #[clap(
        long = "font",
        short = 'f',
        help = "UFO font source to check",
        long_help = "Path to a UFO directory. Alignment zones come from postscriptBlueValues and postscriptOtherBlues, stem widths from postscriptStemSnapH/V."
    )]
    pub font_source: Option<PathBuf>,

    /// Restrict the check to these glyphs
    #[clap(long = "glyph", short = 'g', help = "Only check this glyph (repeatable)")]
    pub glyphs: Vec<String>,

    #[clap(
        long = "tolerance",
        help = "Default near-zone tolerance in font units",
        long_help = "Upper bound for the near-zone tolerance. Masters with thin stems use a smaller band derived from their mean stem width. Default: 4."
    )]
    pub tolerance: Option<f64>,

    #[clap(
        long = "circular",
        help = "Wrap neighbor lookup at both ends of a contour",
        long_help = "Look up the last node's successor circularly. By default only the first node's predecessor wraps, matching the established reporter behavior."
    )]
    pub circular: bool,

    #[clap(long = "dedupe", help = "Report a node once even if it is near several zones")]
    pub dedupe: bool,

    #[clap(long = "json", help = "Print the report as JSON")]
    pub json: bool,

    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,

    #[clap(
        long = "log-file",
        help = "Also write logs to ~/.config/zonecheck/logs/",
        long_help = "Write logs to a daily log file in the zonecheck config directory in addition to stderr."
    )]
    pub log_file: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/zonecheck directory with a settings.json file holding the built-in defaults, and a logs directory."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(tolerance) = self.tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(format!(
                    "Invalid tolerance: {tolerance}\nThe tolerance must be a positive number of font units."
                ));
            }
        }

        if self.new_config {
            return Ok(());
        }

        let Some(path) = &self.font_source else {
            return Err("No font source given.\nUse --font <path/to/font.ufo>.".to_string());
        };

        if !path.exists() {
            return Err(format!(
                "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
                path.display()
            ));
        }

        if !path.is_dir() || !path.join("metainfo.plist").exists() {
            return Err(format!(
                "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                path.display()
            ));
        }

        Ok(())
    }

    /// Resolve the check settings
    ///
    /// Priority order:
    /// 1. CLI arguments
    /// 2. Config file setting (~/.config/zonecheck/settings.json)
    /// 3. Built-in defaults
    pub fn check_settings(&self, config: Option<&ConfigFile>) -> CheckSettings {
        let mut settings = CheckSettings::default();

        if let Some(config) = config {
            config.apply_to(&mut settings);
            debug!("Applied config file settings: {:?}", settings);
        }

        if let Some(tolerance) = self.tolerance {
            settings.default_tolerance = tolerance;
        }
        if self.circular {
            settings.neighbor_lookup = NeighborLookup::Circular;
        }
        if self.dedupe {
            settings.deduplicate = true;
        }

        settings
    }
}
