//! Turning a closed loop into a cell to start filling from

use tracing::debug;

use super::traversal::{Closure, ClosureKind};
use crate::claims::ClaimStore;
use crate::grid::GridPoint;

/// Pick an unclaimed cell inside the loop next to `start`
///
/// The closure suggests a first candidate; if that one is outside the loop
/// or already claimed, the other three directions (or corners) are tried in
/// rotation. `None` means the loop encloses nothing reachable from start,
/// which happens for tight shapes such as a 2x2 block.
pub fn resolve_seed(
    closure: &Closure,
    start: GridPoint,
    store: &dyn ClaimStore,
    level: &str,
) -> Option<GridPoint> {
    let candidates: [GridPoint; 4] = match closure.kind {
        ClosureKind::Parallel { along, .. } => {
            let mut dir = along;
            [0; 4].map(|_| {
                let point = start.step(dir);
                dir = dir.next();
                point
            })
        }
        ClosureKind::Perpendicular { corner } => {
            let mut corner = corner;
            [0; 4].map(|_| {
                let point = start.diagonal(corner);
                corner = corner.next();
                point
            })
        }
    };

    for candidate in candidates {
        if !point_in_path(&closure.path, candidate) {
            debug!("Seed {} is outside the loop, rotating", candidate);
            continue;
        }
        if store.is_claimed(candidate, level) {
            debug!("Seed {} is already claimed, rotating", candidate);
            continue;
        }
        return Some(candidate);
    }

    debug!("No seed inside the loop around {}", start);
    None
}

/// Discrete point-in-polygon test against a closed cell path
///
/// Casts a ray from `point` toward -z along its column. Consecutive path
/// cells in that column form one run, taken cyclically since the path is
/// closed. A run below the point counts as one crossing when the path enters
/// it from one side and leaves toward the other; entering and leaving on the
/// same side only grazes the ray. Cells on the path are not inside.
pub fn point_in_path(path: &[GridPoint], point: GridPoint) -> bool {
    if path.contains(&point) {
        return false;
    }
    // Scan from a cell off the column so no run wraps around the end
    let Some(anchor) = path.iter().position(|p| p.x != point.x) else {
        return false;
    };

    let len = path.len();
    let at = |offset: usize| path[(anchor + offset) % len];
    let mut crossings = 0;
    let mut offset = 1;

    while offset < len {
        if at(offset).x != point.x {
            offset += 1;
            continue;
        }

        let entered_from = at(offset - 1).x;
        let below = at(offset).z < point.z;
        let mut end = offset;
        while at(end).x == point.x {
            end += 1;
        }
        let left_toward = at(end).x;

        if below && entered_from != left_toward {
            crossings += 1;
        }
        offset = end;
    }

    crossings % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{Claim, ClaimMap};
    use crate::core::types::FactionId;
    use crate::grid::{Corner, Direction};
    use proptest::prelude::*;

    fn points(cells: &[(i32, i32)]) -> Vec<GridPoint> {
        cells.iter().map(|&(x, z)| GridPoint::new(x, z)).collect()
    }

    /// Perimeter of the rectangle spanning (x0, z0)..=(x1, z1), counter-clockwise
    fn rectangle(x0: i32, z0: i32, x1: i32, z1: i32) -> Vec<GridPoint> {
        let mut path = Vec::new();
        for x in x0..x1 {
            path.push(GridPoint::new(x, z0));
        }
        for z in z0..z1 {
            path.push(GridPoint::new(x1, z));
        }
        for x in (x0 + 1..=x1).rev() {
            path.push(GridPoint::new(x, z1));
        }
        for z in (z0 + 1..=z1).rev() {
            path.push(GridPoint::new(x0, z));
        }
        path
    }

    #[test]
    fn test_rectangle_perimeter_shape() {
        let path = rectangle(0, 0, 2, 2);
        assert_eq!(path.len(), 8);
        for (i, p) in path.iter().enumerate() {
            let next = path[(i + 1) % path.len()];
            assert_eq!(p.distance(&next), 1);
        }
    }

    #[test]
    fn test_ring_center_is_inside() {
        let path = rectangle(0, 0, 2, 2);
        assert!(point_in_path(&path, GridPoint::new(1, 1)));
    }

    #[test]
    fn test_outside_points() {
        let path = rectangle(0, 0, 2, 2);
        for p in [(1, 3), (1, -1), (3, 1), (-1, 1), (5, 5)] {
            assert!(!point_in_path(&path, GridPoint::new(p.0, p.1)), "{:?}", p);
        }
    }

    #[test]
    fn test_path_cells_are_not_inside() {
        let path = rectangle(0, 0, 2, 2);
        for p in &path {
            assert!(!point_in_path(&path, *p));
        }
    }

    #[test]
    fn test_grazing_column_is_not_a_crossing() {
        // 2x2 block: the column above (1, 1) runs along the wall
        let path = points(&[(1, 1), (1, 0), (0, 0), (0, 1)]);
        assert!(!point_in_path(&path, GridPoint::new(1, 2)));
        assert!(!point_in_path(&path, GridPoint::new(0, 5)));
    }

    #[test]
    fn test_concave_notch() {
        // U shape opening north: the notch at (2, 3) is outside
        let path = points(&[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
            (4, 1), (4, 2), (4, 3), (4, 4),
            (3, 4), (3, 3), (3, 2),
            (2, 2),
            (1, 2), (1, 3), (1, 4),
            (0, 4), (0, 3), (0, 2), (0, 1),
        ]);
        assert!(point_in_path(&path, GridPoint::new(2, 1)));
        assert!(point_in_path(&path, GridPoint::new(1, 1)));
        assert!(!point_in_path(&path, GridPoint::new(2, 3)));
        assert!(!point_in_path(&path, GridPoint::new(2, 5)));
    }

    #[test]
    fn test_resolve_seed_rotates_past_claimed_and_outside() {
        let mut map = ClaimMap::new();
        let faction = FactionId::new();
        let path = rectangle(0, 0, 2, 2);
        for p in &path {
            map.insert(Claim::at(*p, "overworld", faction));
        }
        // Start at the bottom middle; the first guess points east (claimed)
        let closure = Closure {
            kind: ClosureKind::Parallel {
                along: Direction::East,
                corner: Corner::NorthEast,
            },
            path,
        };
        let seed = resolve_seed(&closure, GridPoint::new(1, 0), &map, "overworld");
        assert_eq!(seed, Some(GridPoint::new(1, 1)));
    }

    #[test]
    fn test_resolve_seed_gives_up_on_tight_block() {
        let mut map = ClaimMap::new();
        let faction = FactionId::new();
        let path = points(&[(1, 1), (1, 0), (0, 0), (0, 1)]);
        for p in &path {
            map.insert(Claim::at(*p, "overworld", faction));
        }
        let closure = Closure {
            kind: ClosureKind::Perpendicular {
                corner: Corner::SouthEast,
            },
            path,
        };
        assert_eq!(
            resolve_seed(&closure, GridPoint::new(0, 1), &map, "overworld"),
            None
        );
    }

    #[test]
    fn test_resolve_seed_skips_other_faction_interior() {
        let mut map = ClaimMap::new();
        let ours = FactionId::new();
        let path = rectangle(0, 0, 2, 2);
        for p in &path {
            map.insert(Claim::at(*p, "overworld", ours));
        }
        map.insert(Claim::new(1, 1, "overworld", FactionId::new()));
        let closure = Closure {
            kind: ClosureKind::Parallel {
                along: Direction::North,
                corner: Corner::NorthEast,
            },
            path,
        };
        assert_eq!(
            resolve_seed(&closure, GridPoint::new(1, 0), &map, "overworld"),
            None
        );
    }

    proptest! {
        #[test]
        fn prop_rotation_does_not_change_containment(
            x0 in -5i32..5,
            z0 in -5i32..5,
            width in 1i32..6,
            height in 1i32..6,
            shift in 0usize..64,
            px in -8i32..12,
            pz in -8i32..12,
        ) {
            let path = rectangle(x0, z0, x0 + width, z0 + height);
            let point = GridPoint::new(px, pz);
            let mut rotated = path.clone();
            rotated.rotate_left(shift % path.len());

            prop_assert_eq!(point_in_path(&path, point), point_in_path(&rotated, point));
        }

        #[test]
        fn prop_rectangle_containment_matches_bounds(
            x0 in -5i32..5,
            z0 in -5i32..5,
            width in 1i32..6,
            height in 1i32..6,
            px in -8i32..12,
            pz in -8i32..12,
        ) {
            let (x1, z1) = (x0 + width, z0 + height);
            let path = rectangle(x0, z0, x1, z1);
            let inside = px > x0 && px < x1 && pz > z0 && pz < z1;
            prop_assert_eq!(point_in_path(&path, GridPoint::new(px, pz)), inside);
        }

        #[test]
        fn prop_reversal_does_not_change_containment(
            width in 1i32..6,
            height in 1i32..6,
            px in -3i32..9,
            pz in -3i32..9,
        ) {
            let path = rectangle(0, 0, width, height);
            let mut reversed = path.clone();
            reversed.reverse();
            let point = GridPoint::new(px, pz);
            prop_assert_eq!(point_in_path(&path, point), point_in_path(&reversed, point));
        }
    }
}
