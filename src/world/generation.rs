//! Blocked-cell generation
//!
//! Enumerates every cell, shuffles with Fisher-Yates and keeps a prefix.
//! Sampling is exact and duplicate-free even when the whole board is blocked.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::config::clamp_blocked_count;
use crate::core::types::{Cell, EntityId, EntityKind, PlacedEntity};
use crate::world::occupancy::OccupancyMap;

/// Choose `desired` distinct cells uniformly at random
pub fn sample_blocked_cells<R: Rng + ?Sized>(grid_size: u32, desired: u32, rng: &mut R) -> Vec<Cell> {
    let count = clamp_blocked_count(desired, grid_size) as usize;

    let mut cells: Vec<Cell> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Cell::new(x, y)))
        .collect();
    cells.shuffle(rng);
    cells.truncate(count);
    cells
}

/// Build a fresh occupancy map holding only blocked cells
pub fn generate_blocked<R: Rng + ?Sized>(grid_size: u32, desired: u32, rng: &mut R) -> OccupancyMap {
    sample_blocked_cells(grid_size, desired, rng)
        .into_iter()
        .map(|cell| PlacedEntity::new(EntityId::blocked(cell), EntityKind::Blocked, cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_exact_count_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let map = generate_blocked(10, 10, &mut rng);

        assert_eq!(map.len(), 10);
        assert_eq!(map.blocked_count(), 10);
        assert!(map.iter().all(|e| e.position.in_bounds(10)));
    }

    #[test]
    fn test_clamped_to_board() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cells = sample_blocked_cells(5, 1000, &mut rng);

        assert_eq!(cells.len(), 25);
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn test_ids_derived_from_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let map = generate_blocked(8, 12, &mut rng);

        for entity in map.iter() {
            assert_eq!(entity.id, EntityId::blocked(entity.position));
            assert_eq!(entity.kind(), EntityKind::Blocked);
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = generate_blocked(20, 30, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate_blocked(20, 30, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_requested() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(generate_blocked(10, 0, &mut rng).is_empty());
    }
}
