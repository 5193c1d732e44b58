//! Fisher–Yates shuffle

use rand::Rng;

/// Return a uniformly shuffled copy of `items`
///
/// The input is left untouched. Walks from the last index down to 1, swapping
/// each element with a uniformly chosen one at or below it.
///
/// # Examples
/// ```
/// use word_elimination::game::shuffled;
///
/// let items = vec![1, 2, 3, 4];
/// let mut out = shuffled(&items, &mut rand::rng());
/// out.sort_unstable();
/// assert_eq!(out, items);
/// ```
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn output_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..50).collect();
        for _ in 0..20 {
            let mut out = shuffled(&items, &mut rng);
            assert_eq!(out.len(), items.len());
            out.sort_unstable();
            assert_eq!(out, items);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = vec!["a", "b", "c", "d"];
        let _ = shuffled(&items, &mut rng);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn short_inputs_are_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: Vec<i32> = Vec::new();
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&[42], &mut rng), vec![42]);
    }

    #[test]
    fn positions_are_roughly_uniform() {
        // Each of 4 values should land in position 0 about a quarter of the time
        let mut rng = StdRng::seed_from_u64(2024);
        let items = [0usize, 1, 2, 3];
        let trials = 8000;
        let mut first_counts = [0usize; 4];
        for _ in 0..trials {
            first_counts[shuffled(&items, &mut rng)[0]] += 1;
        }
        for count in first_counts {
            let share = count as f64 / trials as f64;
            assert!((share - 0.25).abs() < 0.04, "share {share} too far from 0.25");
        }
    }
}
