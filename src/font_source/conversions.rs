//! UFO format conversion utilities
//!
//! Converts an in-memory norad font into the checker's model. This is pure
//! data transformation; reading the UFO from disk is the caller's business.
//!
//! A UFO is a single master. Its PostScript hinting data supplies the
//! alignment zones and stem widths:
//! - the first `postscriptBlueValues` pair is the baseline zone, anchored at
//!   its top edge and extending downward
//! - the remaining blue-value pairs extend upward from their lower edge
//! - `postscriptOtherBlues` pairs extend downward from their upper edge

use crate::font_source::data::{Font, FontMaster, Glyph, Layer};
use crate::geometry::{AlignmentZone, Contour, Node, NodeKind};
use tracing::debug;

/// Master id given to the single master of a UFO
pub const UFO_MASTER_ID: &str = "ufo";

impl Font {
    /// Extract the checker model from a norad Font
    ///
    /// Glyphs follow the default layer's order. Every UFO layer that holds a
    /// glyph of the same name becomes one of that glyph's layers.
    pub fn from_norad_font(font: &norad::Font) -> Self {
        let master = FontMaster::from_norad_font_info(&font.font_info);
        let glyphs: Vec<Glyph> = font
            .default_layer()
            .iter()
            .map(|norad_glyph| {
                let name = norad_glyph.name().to_string();
                let layers = font
                    .layers
                    .iter()
                    .filter_map(|norad_layer| {
                        norad_layer.get_glyph(&name).map(|glyph| {
                            Layer::from_norad_glyph(glyph, &norad_layer.name().to_string(), &master.id)
                        })
                    })
                    .collect();
                Glyph { name, layers }
            })
            .collect();

        debug!(
            "Converted UFO with {} glyphs and {} zones",
            glyphs.len(),
            master.alignment_zones.len()
        );

        Self {
            family_name: font
                .font_info
                .family_name
                .clone()
                .unwrap_or_else(|| "Untitled".to_string()),
            masters: vec![master],
            glyphs,
        }
    }
}

impl FontMaster {
    pub fn from_norad_font_info(info: &norad::FontInfo) -> Self {
        let mut alignment_zones = Vec::new();

        if let Some(blues) = &info.postscript_blue_values {
            for (i, pair) in blues.chunks_exact(2).enumerate() {
                let (bottom, top) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
                if i == 0 {
                    alignment_zones.push(AlignmentZone::new(top, bottom - top));
                } else {
                    alignment_zones.push(AlignmentZone::new(bottom, top - bottom));
                }
            }
        }
        if let Some(other_blues) = &info.postscript_other_blues {
            for pair in other_blues.chunks_exact(2) {
                let (bottom, top) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
                alignment_zones.push(AlignmentZone::new(top, bottom - top));
            }
        }

        let stem_widths = info
            .postscript_stem_snap_h
            .iter()
            .chain(info.postscript_stem_snap_v.iter())
            .flatten()
            .copied()
            .collect();

        Self {
            id: UFO_MASTER_ID.to_string(),
            name: info
                .style_name
                .clone()
                .unwrap_or_else(|| "Regular".to_string()),
            alignment_zones,
            stem_widths,
        }
    }
}

impl Layer {
    pub fn from_norad_glyph(glyph: &norad::Glyph, layer_name: &str, master_id: &str) -> Self {
        Self {
            name: layer_name.to_string(),
            master_id: master_id.to_string(),
            contours: glyph.contours.iter().map(Contour::from_norad_contour).collect(),
            corner_components: Vec::new(),
        }
    }
}

impl Contour {
    pub fn from_norad_contour(contour: &norad::Contour) -> Self {
        contour.points.iter().map(Node::from_norad_point).collect()
    }
}

impl Node {
    pub fn from_norad_point(point: &norad::ContourPoint) -> Self {
        Self::new(point.x, point.y, NodeKind::from_norad_point_type(&point.typ))
    }
}

impl NodeKind {
    pub fn from_norad_point_type(typ: &norad::PointType) -> Self {
        match typ {
            norad::PointType::Move | norad::PointType::Line => NodeKind::Line,
            norad::PointType::Curve | norad::PointType::QCurve => NodeKind::Curve,
            norad::PointType::OffCurve => NodeKind::OffCurve,
        }
    }
}
