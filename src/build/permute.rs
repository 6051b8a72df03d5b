//! Symmetry-distinct orderings of six ligand labels.
//!
//! Labels are first encoded as small integer ids in sorted label order, so
//! that comparing id sequences compares the label sequences. Distinct
//! orderings of the multiset are then walked in ascending lexicographic order
//! and reduced to one representative per `Oh` class.

use super::config::DedupStrategy;
use super::error::Error;
use super::symmetry::{OCTAHEDRAL_GROUP, canonical_image};
use crate::model::assignment::SiteAssignment;
use crate::model::site::Site;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

type Key = [u8; Site::COUNT];

/// Every symmetry-distinct arrangement of `labels`, using the default
/// [`DedupStrategy`].
///
/// The result is sorted in ascending lexicographic order of labels, which is
/// the order structures are numbered in.
pub fn enumerate_distinct_arrangements<S: AsRef<str>>(
    labels: &[S],
) -> Result<Vec<SiteAssignment>, Error> {
    enumerate_arrangements_with(labels, DedupStrategy::default())
}

pub fn enumerate_arrangements_with<S: AsRef<str>>(
    labels: &[S],
    strategy: DedupStrategy,
) -> Result<Vec<SiteAssignment>, Error> {
    let (alphabet, key) = encode(labels)?;

    let orderings = distinct_orderings(key);
    let kept = match strategy {
        DedupStrategy::Canonical => reduce_canonical(&orderings),
        DedupStrategy::Pairwise => reduce_pairwise(&orderings),
    };
    debug!(
        "{} distinct orderings of {} labels reduced to {} arrangements ({:?})",
        orderings.len(),
        alphabet.len(),
        kept.len(),
        strategy
    );

    Ok(kept
        .into_iter()
        .map(|ids| SiteAssignment::new(ids.map(|id| alphabet[id as usize].clone())))
        .collect())
}

/// Sorted distinct labels and the sorted id sequence of the input.
fn encode<S: AsRef<str>>(labels: &[S]) -> Result<(Vec<String>, Key), Error> {
    if labels.len() != Site::COUNT {
        return Err(Error::LigandCount(labels.len()));
    }

    let distinct: BTreeSet<&str> = labels.iter().map(|l| l.as_ref()).collect();
    let ids: BTreeMap<&str, u8> = distinct.iter().zip(0u8..).map(|(&l, id)| (l, id)).collect();

    let mut key: Key = std::array::from_fn(|i| ids[labels[i].as_ref()]);
    key.sort_unstable();

    let alphabet = distinct.into_iter().map(str::to_string).collect();
    Ok((alphabet, key))
}

/// All distinct orderings of the multiset `start`, in ascending order.
fn distinct_orderings(start: Key) -> Vec<Key> {
    let mut current = start;
    current.sort_unstable();
    let mut out = vec![current];
    while next_permutation(&mut current) {
        out.push(current);
    }
    out
}

/// Advances `items` to the next lexicographic permutation; returns `false`
/// (leaving `items` sorted descending) when it was already the last one.
fn next_permutation(items: &mut [u8]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let successor = items
        .iter()
        .rposition(|&x| x > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

fn reduce_canonical(orderings: &[Key]) -> Vec<Key> {
    orderings
        .iter()
        .map(canonical_image)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn reduce_pairwise(orderings: &[Key]) -> Vec<Key> {
    let mut kept: Vec<Key> = Vec::new();

    for ordering in orderings {
        let redundant = kept
            .iter()
            .any(|rep| OCTAHEDRAL_GROUP.iter().any(|op| op.apply(rep) == *ordering));
        if !redundant {
            kept.push(*ordering);
        }
    }

    kept.sort_unstable();
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pattern: &str) -> Vec<String> {
        pattern.chars().map(|c| c.to_string()).collect()
    }

    fn count(pattern: &str) -> usize {
        enumerate_distinct_arrangements(&labels(pattern))
            .unwrap()
            .len()
    }

    #[test]
    fn next_permutation_walks_multiset_in_order() {
        let mut items = [0u8, 0, 1];
        assert!(next_permutation(&mut items));
        assert_eq!(items, [0, 1, 0]);
        assert!(next_permutation(&mut items));
        assert_eq!(items, [1, 0, 0]);
        assert!(!next_permutation(&mut items));
    }

    #[test]
    fn distinct_ordering_counts_are_multinomial() {
        assert_eq!(distinct_orderings([0, 1, 2, 3, 4, 5]).len(), 720);
        assert_eq!(distinct_orderings([0, 0, 1, 1, 2, 2]).len(), 90);
        assert_eq!(distinct_orderings([0, 0, 0, 0, 1, 1]).len(), 15);
        assert_eq!(distinct_orderings([3; 6]).len(), 1);

        let all = distinct_orderings([0, 0, 1, 1, 2, 2]);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn six_different_ligands_give_fifteen_isomers() {
        assert_eq!(count("ABCDEF"), 15);
    }

    #[test]
    fn homoleptic_complex_has_one_arrangement() {
        assert_eq!(count("AAAAAA"), 1);
    }

    #[test]
    fn classic_isomer_counts() {
        assert_eq!(count("AAAAAB"), 1);
        assert_eq!(count("AAAABB"), 2); // cis, trans
        assert_eq!(count("AAABBB"), 2); // fac, mer
        assert_eq!(count("AABBCC"), 5);
        assert_eq!(count("AAAABC"), 2);
        assert_eq!(count("AAABBC"), 3);
        assert_eq!(count("AAABCD"), 4);
        assert_eq!(count("AABBCD"), 6);
        assert_eq!(count("AABCDE"), 9);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = enumerate_distinct_arrangements(&labels("BABAAA")).unwrap();
        let b = enumerate_distinct_arrangements(&labels("AAAABB")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cis_and_trans_representatives_are_lexicographic_minima() {
        let kept = enumerate_distinct_arrangements(&["Cl", "Cl", "Cl", "Cl", "NH3", "NH3"])
            .unwrap();
        let rendered: Vec<_> = kept.iter().map(|a| a.ligands().to_vec()).collect();
        assert_eq!(
            rendered,
            vec![
                vec!["Cl", "Cl", "Cl", "Cl", "NH3", "NH3"],
                vec!["Cl", "Cl", "Cl", "NH3", "Cl", "NH3"],
            ]
        );
    }

    #[test]
    fn distinct_orderings_never_repeat() {
        for (pattern, expected) in [("AAAAAA", 1), ("AAABBC", 60), ("AABBCC", 90), ("ABCDEF", 720)] {
            let (_, key) = encode(&labels(pattern)).unwrap();
            let orderings = distinct_orderings(key);
            let unique: BTreeSet<Key> = orderings.iter().copied().collect();
            assert_eq!(orderings.len(), expected, "{pattern}");
            assert_eq!(unique.len(), expected, "{pattern}");
        }
    }

    #[test]
    fn strategies_agree() {
        for pattern in ["ABCDEF", "AAAAAA", "AABBCC", "AAABBB", "AABCDE", "AAABCD"] {
            let canonical =
                enumerate_arrangements_with(&labels(pattern), DedupStrategy::Canonical).unwrap();
            let pairwise =
                enumerate_arrangements_with(&labels(pattern), DedupStrategy::Pairwise).unwrap();
            assert_eq!(canonical, pairwise, "{pattern}");
        }
    }

    #[test]
    fn every_ordering_matches_exactly_one_representative() {
        let (_, key) = encode(&labels("AABCDE")).unwrap();
        let reps = reduce_canonical(&distinct_orderings(key));

        for ordering in distinct_orderings(key) {
            let matches = reps
                .iter()
                .filter(|rep| OCTAHEDRAL_GROUP.iter().any(|op| op.apply(*rep) == ordering))
                .count();
            assert_eq!(matches, 1, "{ordering:?}");
        }
    }

    #[test]
    fn representatives_are_sorted_and_pairwise_distinct() {
        let kept = enumerate_distinct_arrangements(&labels("ABCDEF")).unwrap();
        assert!(kept.windows(2).all(|w| w[0] < w[1]));
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                assert!(!a.is_equivalent_to(b));
            }
        }
    }

    #[test]
    fn wrong_label_count_is_rejected() {
        assert_eq!(
            enumerate_distinct_arrangements(&labels("ABCDE")).unwrap_err(),
            Error::LigandCount(5)
        );
        assert_eq!(
            enumerate_distinct_arrangements(&labels("ABCDEFG")).unwrap_err(),
            Error::LigandCount(7)
        );
    }
}
