//! Tile-grid primitives shared by the cellular automaton and region pruning.

use std::collections::VecDeque;

use crate::map::TileKind;

pub(super) fn is_border(width: usize, height: usize, x: usize, y: usize) -> bool {
    x == 0 || y == 0 || x == width - 1 || y == height - 1
}

/// Walls among the eight neighbours. Cells past the edge count as walls.
pub(super) fn wall_neighbors(
    tiles: &[TileKind],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
) -> u8 {
    let mut count = 0;
    for dy in -1_i64..=1 {
        for dx in -1_i64..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                count += 1;
                continue;
            }
            if tiles[(ny as usize) * width + (nx as usize)] == TileKind::Wall {
                count += 1;
            }
        }
    }
    count
}

/// Labels every 4-connected floor region. Returns one index list per
/// region in discovery order (row-major scan).
pub(super) fn floor_regions(tiles: &[TileKind], width: usize, height: usize) -> Vec<Vec<usize>> {
    let mut seen = vec![false; tiles.len()];
    let mut regions = Vec::new();

    for start in 0..tiles.len() {
        if seen[start] || tiles[start] != TileKind::Floor {
            continue;
        }
        let mut region = Vec::new();
        let mut open = VecDeque::from([start]);
        seen[start] = true;

        while let Some(idx) = open.pop_front() {
            region.push(idx);
            let x = idx % width;
            let y = idx / width;
            let mut neighbors = Vec::with_capacity(4);
            if y > 0 {
                neighbors.push(idx - width);
            }
            if x + 1 < width {
                neighbors.push(idx + 1);
            }
            if y + 1 < height {
                neighbors.push(idx + width);
            }
            if x > 0 {
                neighbors.push(idx - 1);
            }
            for next in neighbors {
                if !seen[next] && tiles[next] == TileKind::Floor {
                    seen[next] = true;
                    open.push_back(next);
                }
            }
        }
        regions.push(region);
    }

    regions
}

/// Fills every floor region except the largest. Ties keep the region found
/// first. Returns the number of floor tiles left.
pub(super) fn keep_largest_region(tiles: &mut [TileKind], width: usize, height: usize) -> usize {
    let regions = floor_regions(tiles, width, height);
    let Some(largest) = regions
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| a.len().cmp(&b.len()).then(ib.cmp(ia)))
        .map(|(index, _)| index)
    else {
        return 0;
    };

    for (index, region) in regions.iter().enumerate() {
        if index == largest {
            continue;
        }
        for &idx in region {
            tiles[idx] = TileKind::Wall;
        }
    }
    regions[largest].len()
}
