//! Zone check reports
//!
//! A [`FontReport`] holds every flagged node per glyph and layer. A
//! [`ReviewTab`] is the compact listing a host opens for review: one
//! `/glyphName` entry per affected glyph and a reference back to the layer
//! to navigate to.

use crate::qa::scan::FlaggedNode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontReport {
    pub family_name: String,
    pub timestamp: DateTime<Utc>,
    /// Only glyphs with at least one flagged node
    pub glyphs: Vec<GlyphReport>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphReport {
    pub glyph_name: String,
    /// Only layers with at least one flagged node
    pub layers: Vec<LayerReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerReport {
    pub layer_name: String,
    pub master_id: String,
    pub tolerance: f64,
    pub issues: Vec<FlaggedNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub glyphs_checked: usize,
    pub layers_checked: usize,
    pub glyphs_with_issues: usize,
    pub layers_with_issues: usize,
    pub flagged_nodes: usize,
}

/// Reference from a review entry back to the layer that needs attention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphLayerRef {
    pub glyph_name: String,
    pub layer_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTab {
    /// Glyph names in `/name` notation, ready to paste into an edit view
    pub text: String,
    pub entries: Vec<GlyphLayerRef>,
}

impl FontReport {
    pub fn is_clean(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph_names(&self) -> Vec<&str> {
        self.glyphs.iter().map(|g| g.glyph_name.as_str()).collect()
    }

    /// One entry per affected glyph, pointing at its first affected layer
    pub fn review_tab(&self) -> ReviewTab {
        let entries: Vec<GlyphLayerRef> = self
            .glyphs
            .iter()
            .filter_map(|glyph| {
                glyph.layers.first().map(|layer| GlyphLayerRef {
                    glyph_name: glyph.glyph_name.clone(),
                    layer_name: layer.layer_name.clone(),
                })
            })
            .collect();
        let text = entries
            .iter()
            .map(|entry| format!("/{}", entry.glyph_name))
            .collect();

        ReviewTab { text, entries }
    }

    /// Plain text listing for terminals
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for glyph in &self.glyphs {
            for layer in &glyph.layers {
                out.push_str(&format!(
                    "{} [{}]: {} node(s) close to alignment zones (tolerance {})\n",
                    glyph.glyph_name,
                    layer.layer_name,
                    layer.issues.len(),
                    layer.tolerance
                ));
                for issue in &layer.issues {
                    out.push_str(&format!(
                        "    contour {} node {} at ({}, {}) near zone {}{:+}\n",
                        issue.contour_index,
                        issue.node_index,
                        issue.node.x(),
                        issue.node.y(),
                        issue.zone.position,
                        issue.zone.size
                    ));
                }
            }
        }
        let s = &self.summary;
        out.push_str(&format!(
            "{} of {} glyphs ({} of {} layers) with {} flagged node(s)\n",
            s.glyphs_with_issues, s.glyphs_checked, s.layers_with_issues, s.layers_checked, s.flagged_nodes
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{AlignmentZone, Node};

    fn layer_report(name: &str) -> LayerReport {
        LayerReport {
            layer_name: name.to_string(),
            master_id: "m".to_string(),
            tolerance: 4.0,
            issues: vec![FlaggedNode {
                contour_index: 0,
                node_index: 2,
                node: Node::line(200.0, 498.0),
                zone: AlignmentZone::new(500.0, 16.0),
            }],
        }
    }

    fn report() -> FontReport {
        FontReport {
            family_name: "Test".to_string(),
            timestamp: Utc::now(),
            glyphs: vec![
                GlyphReport {
                    glyph_name: "n".to_string(),
                    layers: vec![layer_report("Bold"), layer_report("Regular")],
                },
                GlyphReport {
                    glyph_name: "o".to_string(),
                    layers: vec![layer_report("Regular")],
                },
            ],
            summary: ReportSummary {
                glyphs_checked: 3,
                layers_checked: 5,
                glyphs_with_issues: 2,
                layers_with_issues: 3,
                flagged_nodes: 3,
            },
        }
    }

    #[test]
    fn test_review_tab() {
        let tab = report().review_tab();
        assert_eq!(tab.text, "/n/o");
        assert_eq!(
            tab.entries[0],
            GlyphLayerRef {
                glyph_name: "n".to_string(),
                layer_name: "Bold".to_string(),
            }
        );
        assert_eq!(tab.entries.len(), 2);
    }

    #[test]
    fn test_text_listing() {
        let text = report().to_text();
        assert!(text.contains("n [Bold]: 1 node(s)"));
        assert!(text.contains("contour 0 node 2 at (200, 498) near zone 500+16"));
        assert!(text.ends_with("2 of 3 glyphs (3 of 5 layers) with 3 flagged node(s)\n"));
    }

    #[test]
    fn test_json_round_trip_keeps_issues() {
        let original = report();
        let json = serde_json::to_string_pretty(&original).unwrap();
        assert!(json.contains("\"kind\": \"line\""));
        let parsed: FontReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.glyph_names(), vec!["n", "o"]);
        assert_eq!(parsed.summary, original.summary);
        assert_eq!(parsed.glyphs[1].layers[0].issues, original.glyphs[1].layers[0].issues);
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = FontReport {
            family_name: "Test".to_string(),
            timestamp: Utc::now(),
            glyphs: Vec::new(),
            summary: ReportSummary::default(),
        };
        assert!(report.is_clean());
        assert_eq!(report.review_tab(), ReviewTab::default());
    }
}
