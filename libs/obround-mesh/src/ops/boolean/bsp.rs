//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Storage
//!
//! Nodes live in a flat arena and refer to their children by index. Every
//! traversal is an explicit work stack or a plain loop over the arena, so
//! deep trees never recurse and no raw pointers are needed.

use std::mem;

use super::plane::Plane;
use super::polygon::{Polygon, SplitResult};

/// Index of a node in [`BspTree::nodes`].
type NodeId = usize;

#[derive(Debug, Clone, Default)]
struct BspNode {
    /// Dividing plane, `None` until the first polygon arrives
    plane: Option<Plane>,
    /// Polygons coplanar with `plane`
    polygons: Vec<Polygon>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

/// A BSP tree over a polygon soup describing one closed solid.
///
/// # Example
///
/// ```rust,ignore
/// let mut tree = BspTree::new(polygons_a);
/// tree.clip_to(&BspTree::new(polygons_b));
/// let outside_b = tree.into_polygons();
/// ```
#[derive(Debug, Clone)]
pub struct BspTree {
    nodes: Vec<BspNode>,
}

impl BspTree {
    const ROOT: NodeId = 0;

    /// Builds a tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut tree = Self {
            nodes: vec![BspNode::default()],
        };
        tree.build(polygons);
        tree
    }

    /// Inserts polygons into the tree, splitting them as they descend.
    ///
    /// The first polygon reaching an empty node donates its plane.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(NodeId, Vec<Polygon>)> = vec![(Self::ROOT, polygons)];

        while let Some((id, polys)) = stack.pop() {
            let Some(first) = polys.first() else {
                continue;
            };
            let plane = *self.nodes[id].plane.get_or_insert(*first.plane());

            let mut split = SplitResult::default();
            for poly in polys {
                poly.split(&plane, &mut split);
            }

            let node = &mut self.nodes[id];
            node.polygons.append(&mut split.coplanar_front);
            node.polygons.append(&mut split.coplanar_back);

            if !split.front.is_empty() {
                let child = self.child(id, true);
                stack.push((child, split.front));
            }
            if !split.back.is_empty() {
                let child = self.child(id, false);
                stack.push((child, split.back));
            }
        }
    }

    /// Returns the front or back child of `id`, creating it when missing.
    fn child(&mut self, id: NodeId, front: bool) -> NodeId {
        let existing = if front {
            self.nodes[id].front
        } else {
            self.nodes[id].back
        };
        if let Some(child) = existing {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(BspNode::default());
        if front {
            self.nodes[id].front = Some(child);
        } else {
            self.nodes[id].back = Some(child);
        }
        child
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            for poly in &mut node.polygons {
                poly.flip();
            }
            if let Some(plane) = node.plane.as_mut() {
                plane.flip();
            }
            mem::swap(&mut node.front, &mut node.back);
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, Vec<Polygon>)> = vec![(Self::ROOT, polygons)];

        while let Some((id, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            let node = &self.nodes[id];
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut split = SplitResult::default();
            for poly in polys {
                poly.split(&plane, &mut split);
            }

            let mut front = split.front;
            front.append(&mut split.coplanar_front);
            let mut back = split.back;
            back.append(&mut split.coplanar_back);

            match node.front {
                Some(child) => stack.push((child, front)),
                None => result.extend(front),
            }
            // Without a back subtree the back side is solid; those pieces go.
            if let Some(child) = node.back {
                stack.push((child, back));
            }
        }

        result
    }

    /// Removes the parts of this tree's polygons inside `other`.
    pub fn clip_to(&mut self, other: &BspTree) {
        for node in &mut self.nodes {
            node.polygons = other.clip_polygons(mem::take(&mut node.polygons));
        }
    }

    /// Consumes the tree, returning every polygon.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.nodes
            .into_iter()
            .flat_map(|node| node.polygons)
            .collect()
    }

    /// Number of polygons stored in the tree.
    #[cfg(test)]
    pub fn polygon_count(&self) -> usize {
        self.nodes.iter().map(|node| node.polygons.len()).sum()
    }
}
