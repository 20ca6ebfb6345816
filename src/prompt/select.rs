use rand::Rng;
use rand::seq::IndexedRandom;

use crate::pools::{Field, Pool};

/// Pick one candidate of `field` uniformly at random
/// Returns None if the field is missing or has no candidates.
pub fn pick<R: Rng + ?Sized>(pool: &Pool, field: Field, rng: &mut R) -> Option<&'static str> {
    pool.get(field)?.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_missing_field_is_none() {
        let pool = Pool::new().with(Field::Subject, &["cat"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&pool, Field::Mood, &mut rng), None);
    }

    #[test]
    fn test_pick_empty_field_is_none() {
        let pool = Pool::new().with(Field::Mood, &[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&pool, Field::Mood, &mut rng), None);
    }

    #[test]
    fn test_pick_returns_member() {
        let candidates = ["a", "b", "c"];
        let pool = Pool::new().with(Field::Style, &candidates);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = pick(&pool, Field::Style, &mut rng);
            assert!(picked.is_some_and(|p| candidates.contains(&p)));
        }
    }

    #[test]
    fn test_pick_draws_with_replacement() {
        let pool = Pool::new().with(Field::Detail, &["x", "y"]);
        let mut rng = StdRng::seed_from_u64(3);
        let draws: Vec<_> = (0..200).filter_map(|_| pick(&pool, Field::Detail, &mut rng)).collect();
        assert_eq!(draws.len(), 200);
        // Both candidates show up, each in a roughly even share
        let xs = draws.iter().filter(|d| **d == "x").count();
        let ys = draws.len() - xs;
        assert!(xs > 50 && ys > 50, "x={xs} y={ys}");
    }
}
