use crate::util::{char_len, levenshtein};

/// Shortest head kept in front of a decomposed tail.
const MIN_HEAD_LEN: usize = 2;

/// Shortest tail looked up during affix decomposition.
const MIN_TAIL_LEN: usize = 4;

/// Parameters of the greedy reductions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Greedy {
    /// Maximum number of hops along the form-to-lemma chain.
    pub steps: usize,

    /// Maximum edit distance accepted for a single hop.
    pub distance: usize,
}

impl Default for Greedy {
    fn default() -> Self {
        Self {
            steps: 1,
            distance: 5,
        }
    }
}

impl Greedy {
    /// Follows `lookup` from `candidate` while each hop does not lengthen the
    /// word and stays within `distance` edits.
    pub fn refine<'d, F>(&self, candidate: String, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'d str>,
    {
        let mut candidate = candidate;

        for _ in 0..self.steps {
            let next = match lookup(&candidate) {
                Some(next) if next != candidate => next,
                _ => break,
            };

            if char_len(next) > char_len(&candidate) || levenshtein(next, &candidate) > self.distance {
                break;
            }

            candidate = next.to_string();
        }

        candidate
    }

    /// Splits `token` into a head and the longest tail `lookup` knows, and
    /// rebuilds it as head + lemma of the tail.
    pub fn decompose<'d, F>(&self, token: &str, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<&'d str>,
    {
        let boundaries = token.char_indices().map(|(index, _)| index).collect::<Vec<_>>();
        let total = boundaries.len();

        if total < MIN_HEAD_LEN + MIN_TAIL_LEN {
            return None;
        }

        // Shortest head first, so the longest known tail wins.
        for &split in &boundaries[MIN_HEAD_LEN..=total - MIN_TAIL_LEN] {
            let (head, tail) = token.split_at(split);

            let lemma = lookup(tail).or_else(|| {
                let lowered = tail.to_lowercase();
                (lowered != tail).then(|| lookup(&lowered)).flatten()
            });

            if let Some(lemma) = lemma {
                return Some(format!("{head}{}", lemma.to_lowercase()));
            }
        }

        None
    }
}
