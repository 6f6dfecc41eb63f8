//! In-memory font model consumed by the zone checks
//!
//! These are plain owned snapshots handed over by the host. Nothing in the
//! checker mutates them; preprocessing works on copies.

use crate::geometry::{AlignmentZone, Contour};
use serde::{Deserialize, Serialize};

/// One design instance (e.g. one weight) with its vertical metrics
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontMaster {
    pub id: String,
    pub name: String,
    pub alignment_zones: Vec<AlignmentZone>,
    /// Measured stem thicknesses, empty if the master does not define any
    pub stem_widths: Vec<f64>,
}

impl FontMaster {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            alignment_zones: Vec::new(),
            stem_widths: Vec::new(),
        }
    }

    pub fn with_zone(mut self, position: f64, size: f64) -> Self {
        self.alignment_zones.push(AlignmentZone::new(position, size));
        self
    }

    pub fn with_stem_widths(mut self, stems: impl IntoIterator<Item = f64>) -> Self {
        self.stem_widths.extend(stems);
        self
    }

    /// Arithmetic mean of the stem widths, if there are any
    pub fn mean_stem_width(&self) -> Option<f64> {
        if self.stem_widths.is_empty() {
            return None;
        }
        let sum: f64 = self.stem_widths.iter().sum();
        Some(sum / self.stem_widths.len() as f64)
    }
}

/// A corner component attached to a node of the layer's outline
///
/// The checker never expands corners itself; it hands layers carrying them
/// to the host's geometry collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerComponent {
    pub name: String,
    pub contour_index: usize,
    pub node_index: usize,
}

/// The outline of one glyph in one master (or a master's extra layer)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    /// Id of the associated master, resolved through [`Font::master`]
    pub master_id: String,
    pub contours: Vec<Contour>,
    pub corner_components: Vec<CornerComponent>,
}

impl Layer {
    pub fn new(name: impl Into<String>, master_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            master_id: master_id.into(),
            contours: Vec::new(),
            corner_components: Vec::new(),
        }
    }

    pub fn with_contour(mut self, contour: Contour) -> Self {
        self.contours.push(contour);
        self
    }

    pub fn has_corner_components(&self) -> bool {
        !self.corner_components.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub name: String,
    pub layers: Vec<Layer>,
}

impl Glyph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
        }
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }
}

/// Masters plus glyphs in font order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family_name: String,
    pub masters: Vec<FontMaster>,
    pub glyphs: Vec<Glyph>,
}

impl Font {
    pub fn master(&self, id: &str) -> Option<&FontMaster> {
        self.masters.iter().find(|master| master.id == id)
    }

    /// The master a layer is associated with
    pub fn master_for(&self, layer: &Layer) -> Option<&FontMaster> {
        self.master(&layer.master_id)
    }

    pub fn glyph(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.iter().find(|glyph| glyph.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Node;

    #[test]
    fn test_mean_stem_width() {
        let master = FontMaster::new("m01").with_stem_widths([80.0, 90.0, 100.0]);
        assert_eq!(master.mean_stem_width(), Some(90.0));
        assert_eq!(FontMaster::new("m02").mean_stem_width(), None);
    }

    #[test]
    fn test_master_lookup_by_layer() {
        let font = Font {
            family_name: "Test".to_string(),
            masters: vec![FontMaster::new("light"), FontMaster::new("bold")],
            glyphs: Vec::new(),
        };
        let layer = Layer::new("Bold", "bold");
        assert_eq!(font.master_for(&layer).map(|m| m.id.as_str()), Some("bold"));
        assert!(font.master_for(&Layer::new("Black", "black")).is_none());
    }

    #[test]
    fn test_layer_node_count() {
        let layer = Layer::new("Regular", "m01")
            .with_contour(Contour::new(vec![Node::line(0.0, 0.0), Node::line(10.0, 0.0)]))
            .with_contour(Contour::new(vec![Node::line(0.0, 0.0)]));
        assert_eq!(layer.node_count(), 3);
        assert!(!layer.has_corner_components());
    }
}
