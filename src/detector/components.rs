//! Connected components over a binary ink mask
//!
//! Finds ink regions and reports their bounding boxes and pixel counts,
//! which downstream stages use for shape filtering and ink measurement.

use crate::models::BinaryMask;
use std::collections::HashMap;

/// Union-Find data structure
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
        }
    }

    fn find(&mut self, x: u32) -> u32 {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.find(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x != root_y {
            self.parent[root_x as usize] = root_y;
        }
    }
}

/// One connected ink region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Leftmost ink pixel column.
    pub min_x: usize,
    /// Topmost ink pixel row.
    pub min_y: usize,
    /// Rightmost ink pixel column (inclusive).
    pub max_x: usize,
    /// Bottommost ink pixel row (inclusive).
    pub max_y: usize,
    /// Number of ink pixels in the component.
    pub pixels: u32,
}

impl Component {
    /// Bounding box width.
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    /// Bounding box height.
    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

/// Find connected ink regions (8-connectivity) with their bounding boxes
/// and pixel counts.
pub fn find_components(mask: &BinaryMask) -> Vec<Component> {
    let width = mask.width();
    let height = mask.height();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut labels = vec![0u32; width * height];
    let mut next_label = 1u32;
    let mut uf = UnionFind::new(width * height);

    // First pass: label pixels, merging with already-labeled neighbors.
    for y in 0..height {
        for x in 0..width {
            if !mask.get(x, y) {
                continue;
            }

            let idx = y * width + x;
            let mut neighbor_labels = [0u32; 4];
            let mut n = 0usize;

            // Left
            if x > 0 && mask.get(x - 1, y) {
                neighbor_labels[n] = labels[idx - 1];
                n += 1;
            }
            // Above
            if y > 0 && mask.get(x, y - 1) {
                neighbor_labels[n] = labels[idx - width];
                n += 1;
            }
            // Upper-left diagonal
            if x > 0 && y > 0 && mask.get(x - 1, y - 1) {
                neighbor_labels[n] = labels[idx - width - 1];
                n += 1;
            }
            // Upper-right diagonal
            if x + 1 < width && y > 0 && mask.get(x + 1, y - 1) {
                neighbor_labels[n] = labels[idx - width + 1];
                n += 1;
            }

            if n == 0 {
                labels[idx] = next_label;
                next_label += 1;
            } else {
                let neighbors = &neighbor_labels[..n];
                let min_label = *neighbors.iter().min().unwrap_or(&0);
                labels[idx] = min_label;
                for &l in neighbors {
                    if l != min_label {
                        uf.union(min_label, l);
                    }
                }
            }
        }
    }

    // Second pass: accumulate bounding boxes and pixel counts per root.
    let mut components: HashMap<u32, Component> = HashMap::new();
    for y in 0..height {
        for x in 0..width {
            let label = labels[y * width + x];
            if label == 0 {
                continue;
            }
            let root = uf.find(label);

            let entry = components.entry(root).or_insert(Component {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
                pixels: 0,
            });
            entry.min_x = entry.min_x.min(x);
            entry.min_y = entry.min_y.min(y);
            entry.max_x = entry.max_x.max(x);
            entry.max_y = entry.max_y.max(y);
            entry.pixels += 1;
        }
    }

    components.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_square_region() {
        let mut mask = BinaryMask::new(10, 10);
        // 2x2 ink square at (2,2)
        mask.set(2, 2, true);
        mask.set(3, 2, true);
        mask.set(2, 3, true);
        mask.set(3, 3, true);

        let regions = find_components(&mask);
        assert_eq!(regions.len(), 1);
        let region = regions[0];
        assert_eq!((region.min_x, region.min_y, region.max_x, region.max_y), (2, 2, 3, 3));
        assert_eq!(region.pixels, 4);
        assert_eq!(region.width(), 2);
        assert_eq!(region.height(), 2);
    }

    #[test]
    fn test_separate_regions_stay_separate() {
        let mut mask = BinaryMask::new(10, 10);
        mask.set(0, 0, true);
        mask.set(8, 8, true);

        let mut regions = find_components(&mask);
        regions.sort_by_key(|r| r.min_x);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].pixels, 1);
        assert_eq!(regions[1].pixels, 1);
    }

    #[test]
    fn test_diagonal_pixels_connect() {
        let mut mask = BinaryMask::new(5, 5);
        mask.set(1, 1, true);
        mask.set(2, 2, true);
        mask.set(3, 1, true);

        let regions = find_components(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].pixels, 3);
    }

    #[test]
    fn test_hollow_ring_counts_only_ink() {
        // 6x6 ring, 1 px thick: interior hole pixels are not counted.
        let mut mask = BinaryMask::new(10, 10);
        for i in 2..8 {
            mask.set(i, 2, true);
            mask.set(i, 7, true);
            mask.set(2, i, true);
            mask.set(7, i, true);
        }

        let regions = find_components(&mask);
        assert_eq!(regions.len(), 1);
        let region = regions[0];
        assert_eq!(region.width(), 6);
        assert_eq!(region.height(), 6);
        assert_eq!(region.pixels, 20); // perimeter only, not 36
    }
}
