//! Worst-case elimination analysis and min-max guess selection
//!
//! For a guess word, the adversary picks whichever hidden word leaves the
//! largest surviving candidate group; the guaranteed elimination is what the
//! guess removes even then. Selection maximizes that guarantee over the
//! whole dictionary.

use crate::core::{FeedbackPattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Compute the guaranteed number of eliminations a guess word achieves
///
/// Defined as `|candidates|` minus the size of the largest group obtained by
/// partitioning `candidates` on the feedback pattern each would produce if it
/// were the hidden word. Computed in a single pass over the candidate set
/// rather than by re-filtering per hypothesis, which is equivalent and
/// removes a factor of `|candidates|`.
///
/// The result is within `[0, |candidates| - 1]` for a non-empty set, and 0
/// for an empty one.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::worst_case_elimination;
///
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let guess = Word::new("slate").unwrap();
///
/// // 'slate' distinguishes the two, so one is always eliminated
/// assert_eq!(worst_case_elimination(&candidates, &guess), 1);
/// ```
#[must_use]
pub fn worst_case_elimination(candidates: &[Word], guess: &Word) -> usize {
    let largest_group = group_by_pattern(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0);

    candidates.len() - largest_group
}

/// Partition candidates by the pattern each would yield as the hidden word
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<FeedbackPattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = FeedbackPattern::evaluate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// One dictionary word with its position and guaranteed elimination count
#[derive(Clone, Copy)]
struct Scored<'a> {
    index: usize,
    word: &'a Word,
    eliminated: usize,
}

/// Select the dictionary word that maximizes worst-case elimination
///
/// Scans the entire dictionary, not just the candidate set; the best probe
/// need not itself be a possible answer. Ties go to the earliest word in
/// dictionary order, and a word must eliminate strictly more than zero
/// candidates to be selected at all: `None` means no improving guess exists,
/// which callers treat as a terminal condition (only expected once the
/// candidate set has size <= 1).
///
/// The scan is parallelized over the dictionary; each word is scored against
/// the same immutable candidate snapshot and the reduction re-applies the
/// dictionary-order tie-break, so the result does not depend on scheduling.
#[must_use]
pub fn select_next_guess<'a>(
    candidates: &[Word],
    dictionary: &'a [Word],
) -> Option<(&'a Word, usize)> {
    let best = dictionary
        .par_iter()
        .enumerate()
        .map(|(index, word)| Scored {
            index,
            word,
            eliminated: worst_case_elimination(candidates, word),
        })
        .reduce_with(|a, b| {
            if b.eliminated > a.eliminated || (b.eliminated == a.eliminated && b.index < a.index) {
                b
            } else {
                a
            }
        })?;

    (best.eliminated > 0).then_some((best.word, best.eliminated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    #[test]
    fn elimination_zero_for_undiscriminating_guess() {
        // 'rough' shares no letters with either candidate, so both land in
        // the all-absent group and nothing is guaranteed eliminated
        let candidates = words(&["slate", "plate"]);
        assert_eq!(worst_case_elimination(&candidates, &word("rough")), 0);
    }

    #[test]
    fn elimination_counts_against_largest_group() {
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let guess = word("crane");

        let groups = group_by_pattern(&guess, &candidates);
        let largest = groups.values().max().copied().unwrap();
        assert_eq!(
            worst_case_elimination(&candidates, &guess),
            candidates.len() - largest
        );
    }

    #[test]
    fn elimination_within_bounds() {
        let candidates = words(&["slate", "irate", "crate", "grate", "trace"]);
        for probe in ["crane", "slate", "rough", "sassy"] {
            let eliminated = worst_case_elimination(&candidates, &word(probe));
            assert!(eliminated < candidates.len(), "{probe}");
        }
    }

    #[test]
    fn elimination_empty_set_is_zero() {
        assert_eq!(worst_case_elimination(&[], &word("crane")), 0);
    }

    #[test]
    fn elimination_singleton_set_is_zero() {
        let candidates = words(&["slate"]);
        assert_eq!(worst_case_elimination(&candidates, &word("crane")), 0);
        assert_eq!(worst_case_elimination(&candidates, &word("slate")), 0);
    }

    #[test]
    fn groups_cover_every_candidate() {
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let groups = group_by_pattern(&word("crane"), &candidates);
        assert_eq!(groups.values().sum::<usize>(), candidates.len());
    }

    #[test]
    fn selects_the_most_discriminating_word() {
        let candidates = words(&["audio", "solar"]);
        // 'empty' shares no letter with either candidate, so it groups both
        // under all-absent and guarantees nothing; guessing either candidate
        // splits them apart
        let dictionary = words(&["empty", "audio", "solar"]);

        let (best, eliminated) = select_next_guess(&candidates, &dictionary).unwrap();
        assert_ne!(best.text(), "empty");
        assert_eq!(eliminated, 1);
    }

    #[test]
    fn tie_break_prefers_earliest_dictionary_word() {
        // Both candidates split the pair equally well; the scan must keep
        // the first maximal word and discard later ties
        let candidates = words(&["audio", "solar"]);
        let dictionary = words(&["audio", "solar"]);

        let (best, _) = select_next_guess(&candidates, &dictionary).unwrap();
        assert_eq!(best.text(), "audio");

        let reversed = words(&["solar", "audio"]);
        let (best, _) = select_next_guess(&candidates, &reversed).unwrap();
        assert_eq!(best.text(), "solar");
    }

    #[test]
    fn no_improving_guess_on_singleton_candidates() {
        let candidates = words(&["slate"]);
        let dictionary = words(&["crane", "slate", "irate"]);
        assert!(select_next_guess(&candidates, &dictionary).is_none());
    }

    #[test]
    fn no_improving_guess_on_degenerate_dictionary() {
        // No dictionary word tells the two candidates apart
        let candidates = words(&["audio", "solar"]);
        let dictionary = words(&["empty"]);
        assert!(select_next_guess(&candidates, &dictionary).is_none());
    }

    #[test]
    fn empty_dictionary_yields_no_guess() {
        let candidates = words(&["audio", "solar"]);
        assert!(select_next_guess(&candidates, &[]).is_none());
    }

    #[test]
    fn selection_is_deterministic_across_runs() {
        let candidates = words(&["slate", "irate", "crate", "grate", "trace"]);
        let dictionary = words(&["crane", "slate", "irate", "crate", "grate", "trace", "rough"]);

        let first = select_next_guess(&candidates, &dictionary).unwrap();
        for _ in 0..10 {
            let again = select_next_guess(&candidates, &dictionary).unwrap();
            assert_eq!(first.0, again.0);
            assert_eq!(first.1, again.1);
        }
    }
}
