//! Panel builder: which contents a round shows, and where

use super::shuffle::shuffled;
use crate::core::WordPair;
use rand::Rng;

/// Build the shuffled tile contents for one round
///
/// Takes up to `pair_count` pairs starting at pair `start_index / 2`
/// (`start_index` counts tiles), flattens each into front then back, and
/// shuffles the result. Running past the end of the list just yields a
/// shorter round.
pub fn build_round<R: Rng + ?Sized>(
    words: &[WordPair],
    start_index: usize,
    pair_count: usize,
    rng: &mut R,
) -> Vec<String> {
    shuffled(&round_contents(words, start_index, pair_count), rng)
}

/// Unshuffled contents of the round: front, back, front, back, ...
fn round_contents(words: &[WordPair], start_index: usize, pair_count: usize) -> Vec<String> {
    let first = start_index / 2;
    words
        .iter()
        .skip(first)
        .take(pair_count)
        .flat_map(|pair| [pair.front().to_string(), pair.back().to_string()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(n: usize) -> Vec<WordPair> {
        (0..n)
            .map(|i| WordPair::new(format!("w{i}"), format!("t{i}")).unwrap())
            .collect()
    }

    #[test]
    fn empty_list_gives_no_tiles() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(build_round(&[], 0, 10, &mut rng).is_empty());
    }

    #[test]
    fn contents_come_in_front_back_order() {
        assert_eq!(
            round_contents(&words(3), 2, 2),
            vec!["w1", "t1", "w2", "t2"]
        );
    }

    #[test]
    fn round_is_shorter_at_end_of_list() {
        let contents = round_contents(&words(7), 10, 5);
        assert_eq!(contents, vec!["w5", "t5", "w6", "t6"]);
        assert!(round_contents(&words(7), 14, 5).is_empty());
    }

    #[test]
    fn shuffle_keeps_round_membership() {
        let mut rng = StdRng::seed_from_u64(11);
        let list = words(20);
        let mut built = build_round(&list, 10, 5, &mut rng);
        let mut expected = round_contents(&list, 10, 5);
        assert_eq!(built.len(), 10);
        built.sort();
        expected.sort();
        assert_eq!(built, expected);
    }
}
