//! Mock self-organizing map generator
//!
//! Emits one node per grid cell with a random one-dimensional weight and an
//! independent Bernoulli outbreak flag. No training happens; the grid is the
//! whole result.

use rand::Rng;

use crate::models::{SomMap, SomNode};

/// Probability that a node is flagged as an outbreak cluster
const OUTBREAK_NODE_PROBABILITY: f64 = 0.2;

/// Generate a `grid_size` x `grid_size` map, one node per (x, y) cell.
pub fn generate<R: Rng>(grid_size: usize, rng: &mut R) -> SomMap {
    let mut data = Vec::with_capacity(grid_size * grid_size);

    for x in 0..grid_size {
        for y in 0..grid_size {
            data.push(SomNode {
                x,
                y,
                weight: vec![rng.gen::<f64>()],
                is_outbreak: rng.gen_bool(OUTBREAK_NODE_PROBABILITY),
            });
        }
    }

    SomMap { grid_size, data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_grid_covers_every_cell_exactly_once() {
        let map = generate(10, &mut rng());
        assert_eq!(map.grid_size, 10);
        assert_eq!(map.data.len(), 100);

        let cells: HashSet<(usize, usize)> = map.data.iter().map(|n| (n.x, n.y)).collect();
        assert_eq!(cells.len(), 100);
        for x in 0..10 {
            for y in 0..10 {
                assert!(cells.contains(&(x, y)));
            }
        }
    }

    #[test]
    fn test_weights_are_one_dimensional_unit_values() {
        let map = generate(5, &mut rng());
        for node in &map.data {
            assert_eq!(node.weight.len(), 1);
            assert!((0.0..=1.0).contains(&node.weight[0]));
        }
    }

    #[test]
    fn test_zero_dimension_yields_empty_map() {
        let map = generate(0, &mut rng());
        assert_eq!(map.grid_size, 0);
        assert!(map.data.is_empty());
    }

    #[test]
    fn test_outbreak_flags_are_mixed() {
        // 100 independent draws at p = 0.2; this seed produces both kinds
        let map = generate(10, &mut rng());
        assert!(map.data.iter().any(|n| n.is_outbreak));
        assert!(map.data.iter().any(|n| !n.is_outbreak));
    }
}
