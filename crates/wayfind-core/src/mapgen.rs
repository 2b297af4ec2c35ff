//! Random obstacle scattering for demo and test maps.

use rand::Rng;
use rand::RngExt;

use crate::geom::Point;
use crate::map::GridMap;

/// Block a random fraction of the map's cells.
///
/// `fill` is clamped to 0.0–1.0 and interpreted as a target fraction of the
/// total cell count. The start and goal cells are never blocked. Returns
/// the number of cells actually blocked, which may fall short of the target
/// on crowded maps (placement attempts are bounded).
pub fn scatter<R: Rng>(map: &mut GridMap, rng: &mut R, fill: f64) -> usize {
    let bounds = map.bounds();
    if bounds.is_empty() {
        return 0;
    }
    let total = bounds.len();
    let target = (total as f64 * fill.clamp(0.0, 1.0)) as usize;
    let mut blocked = 0;
    let mut attempts = 0;
    while blocked < target && attempts < total * 10 {
        attempts += 1;
        let p = Point::new(
            rng.random_range(bounds.min.x..bounds.max.x),
            rng.random_range(bounds.min.y..bounds.max.y),
        );
        if p == map.start() || p == map.goal() || !map.is_open(p) {
            continue;
        }
        map.block(p);
        blocked += 1;
    }
    blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_respects_start_and_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut map = GridMap::open(10, 10);
        let blocked = scatter(&mut map, &mut rng, 0.3);
        assert!(blocked > 0);
        assert!(blocked <= 30);
        assert!(map.is_open(map.start()));
        assert!(map.is_open(map.goal()));
        assert_eq!(map.count_open(), 100 - blocked);
    }

    #[test]
    fn scatter_zero_fill_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut map = GridMap::open(6, 6);
        assert_eq!(scatter(&mut map, &mut rng, 0.0), 0);
        assert_eq!(map.count_open(), 36);
    }

    #[test]
    fn scatter_full_fill_leaves_endpoints() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut map = GridMap::open(4, 4);
        let blocked = scatter(&mut map, &mut rng, 1.0);
        // Everything except start and goal is fair game.
        assert!(blocked <= 14);
        assert!(map.is_open(map.start()));
        assert!(map.is_open(map.goal()));
    }
}
