//! Alignment zone QA
//!
//! Flags on-curve nodes that lie just outside an alignment zone edge, where
//! they were most likely meant to sit on it.

pub mod classifier;
pub mod markers;
pub mod preprocess;
pub mod report;
pub mod scan;

pub use classifier::node_has_issues;
pub use markers::{issue_markers, IssueMarker};
pub use preprocess::{effective_tolerance, prepare_layer, OutlineOps, Passthrough, PreparedLayer};
pub use report::{FontReport, GlyphLayerRef, GlyphReport, LayerReport, ReportSummary, ReviewTab};
pub use scan::{flag_nodes, glyphs_with_issues, nodes_with_issues, FlaggedNode};

use crate::core::settings::CheckSettings;
use crate::font_source::{Font, FontMaster, Glyph, Layer};
use tracing::{info, warn};

/// Settings plus the host's geometry operations
pub struct ZoneChecker<O: OutlineOps = Passthrough> {
    settings: CheckSettings,
    ops: O,
}

impl Default for ZoneChecker {
    fn default() -> Self {
        Self::new(CheckSettings::default())
    }
}

impl ZoneChecker {
    pub fn new(settings: CheckSettings) -> Self {
        Self {
            settings,
            ops: Passthrough,
        }
    }
}

impl<O: OutlineOps> ZoneChecker<O> {
    pub fn with_ops(settings: CheckSettings, ops: O) -> Self {
        Self { settings, ops }
    }

    pub fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    pub fn nodes_with_issues(&self, layer: &Layer, master: &FontMaster) -> Vec<FlaggedNode> {
        scan::nodes_with_issues(layer, master, &self.settings, &self.ops)
    }

    pub fn markers(&self, layer: &Layer, master: &FontMaster) -> Vec<IssueMarker> {
        issue_markers(&self.nodes_with_issues(layer, master))
    }

    pub fn glyphs_with_issues(&self, font: &Font) -> Vec<String> {
        scan::glyphs_with_issues(font, &self.settings, &self.ops)
    }

    /// Full report over every layer of every glyph in `font`
    pub fn font_report(&self, font: &Font) -> FontReport {
        self.report_for(font, font.glyphs.iter())
    }

    /// Report restricted to the named glyphs; unknown names are skipped
    pub fn report_for_glyphs(&self, font: &Font, names: &[String]) -> FontReport {
        let glyphs = names.iter().filter_map(|name| {
            let glyph = font.glyph(name);
            if glyph.is_none() {
                warn!("Glyph '{}' not found in font", name);
            }
            glyph
        });
        self.report_for(font, glyphs)
    }

    fn report_for<'a>(&self, font: &'a Font, glyphs: impl Iterator<Item = &'a Glyph>) -> FontReport {
        let mut summary = ReportSummary::default();
        let mut glyph_reports = Vec::new();

        for glyph in glyphs {
            summary.glyphs_checked += 1;
            let mut layer_reports = Vec::new();

            for layer in &glyph.layers {
                let Some(master) = font.master_for(layer) else {
                    warn!(
                        "Skipping layer '{}' of '{}': unknown master '{}'",
                        layer.name, glyph.name, layer.master_id
                    );
                    continue;
                };
                summary.layers_checked += 1;

                let prepared = prepare_layer(layer, master, &self.settings, &self.ops);
                let issues = flag_nodes(&prepared, &master.alignment_zones, &self.settings);
                if issues.is_empty() {
                    continue;
                }
                summary.layers_with_issues += 1;
                summary.flagged_nodes += issues.len();
                layer_reports.push(LayerReport {
                    layer_name: layer.name.clone(),
                    master_id: layer.master_id.clone(),
                    tolerance: prepared.tolerance,
                    issues,
                });
            }

            if !layer_reports.is_empty() {
                summary.glyphs_with_issues += 1;
                glyph_reports.push(GlyphReport {
                    glyph_name: glyph.name.clone(),
                    layers: layer_reports,
                });
            }
        }

        info!(
            "Checked {} glyphs: {} with nodes close to alignment zones",
            summary.glyphs_checked, summary.glyphs_with_issues
        );

        FontReport {
            family_name: font.family_name.clone(),
            timestamp: chrono::Utc::now(),
            glyphs: glyph_reports,
            summary,
        }
    }
}
