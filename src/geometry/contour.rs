//! Closed contours and neighbor lookup
//!
//! Contours are circular: the node after the last one is the first. How a
//! node's neighbors are found at the two ends of the node list is selectable
//! through [`NeighborLookup`], because the established reporter behavior is
//! not circular at the end of the list.

use crate::geometry::node::Node;
use serde::{Deserialize, Serialize};

/// How neighbors are resolved at the ends of a contour's node list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborLookup {
    /// Index-based lookup: the first node's predecessor wraps to the last
    /// node, but the last node has no successor.
    #[default]
    Linear,
    /// True circular lookup in both directions
    Circular,
}

impl NeighborLookup {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "circular" => Some(Self::Circular),
            _ => None,
        }
    }
}

/// An ordered, circular sequence of nodes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub nodes: Vec<Node>,
}

impl Contour {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// The node before `index`, if any
    ///
    /// A node is never its own neighbor, so a single-node contour has no
    /// predecessor under either lookup.
    pub fn predecessor(&self, index: usize, _lookup: NeighborLookup) -> Option<&Node> {
        let len = self.nodes.len();
        if index >= len || len < 2 {
            return None;
        }
        // Both lookups wrap at the start
        let prev_idx = if index > 0 { index - 1 } else { len - 1 };
        self.nodes.get(prev_idx)
    }

    /// The node after `index`, if any
    pub fn successor(&self, index: usize, lookup: NeighborLookup) -> Option<&Node> {
        let len = self.nodes.len();
        if index >= len || len < 2 {
            return None;
        }
        match lookup {
            NeighborLookup::Linear => self.nodes.get(index + 1),
            NeighborLookup::Circular => self.nodes.get((index + 1) % len),
        }
    }

    /// Returns (predecessor, successor) where either or both can be None
    pub fn neighbors(&self, index: usize, lookup: NeighborLookup) -> (Option<&Node>, Option<&Node>) {
        (self.predecessor(index, lookup), self.successor(index, lookup))
    }

    /// On-curve nodes with their index in the contour
    pub fn on_curve_nodes(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_on_curve())
    }
}

impl FromIterator<Node> for Contour {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
