use crate::{
    Error, GroupSet, GroupSize, group, group_with_rng, normalize_names, partition,
    shuffle_into_groups,
};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashMap;

fn size(n: usize) -> GroupSize {
    GroupSize::new(n).unwrap()
}

fn roster(n: usize) -> String {
    (0..n)
        .map(|i| format!("Student {i:03}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn counts<'a>(names: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }
    counts
}

/// Concatenation is a permutation of the normalized roster, every group but
/// the last is full, and the last holds `n mod g` (or `g`).
fn assert_partition_invariant(groups: &GroupSet, input: &str, g: usize) {
    let expected = normalize_names(input).unwrap();
    let n = expected.len();

    assert_eq!(groups.total_members(), n);
    assert_eq!(
        counts(groups.names()),
        counts(expected.iter().map(String::as_str))
    );

    let (last, full) = groups.groups().split_last().unwrap();
    for group in full {
        assert_eq!(group.len(), g);
    }
    let remainder = n % g;
    assert_eq!(last.len(), if remainder == 0 { g } else { remainder });
    assert_eq!(groups.len(), n.div_ceil(g));
}

#[test]
fn normalize_trims_and_drops_blank_lines() {
    let names = normalize_names("Alice\nBob\n\n  Carol  \nDave").unwrap();
    assert_eq!(names, ["Alice", "Bob", "Carol", "Dave"]);
}

#[test]
fn normalize_handles_crlf_and_tabs() {
    let names = normalize_names("\tAlice\r\n\r\nBob \r\n   \r\n").unwrap();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize_names("  Alice \n\n Bob\n").unwrap();
    let twice = normalize_names(&once.join("\n")).unwrap();
    assert_eq!(once, twice);
    for name in &twice {
        assert_eq!(name.trim(), name);
    }
}

#[test]
fn normalize_rejects_empty_input() {
    assert_eq!(normalize_names(""), Err(Error::NoNames));
    assert_eq!(normalize_names("   \n\t\n \r\n"), Err(Error::NoNames));
}

#[test]
fn group_rejects_empty_input() {
    assert_eq!(group("\n\n", GroupSize::DEFAULT), Err(Error::NoNames));
}

#[test]
fn four_names_in_pairs() {
    let input = "Alice\nBob\n\n  Carol  \nDave";
    let groups = group(input, size(2)).unwrap();

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.len() == 2));
    assert_partition_invariant(&groups, input, 2);
}

#[test]
fn partition_preserves_order() {
    let names: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).into();
    let groups = partition(names, size(2));
    let cut: Vec<Vec<&str>> = groups
        .iter()
        .map(|g| g.iter().map(String::as_str).collect())
        .collect();
    assert_eq!(cut, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
}

#[test]
fn partition_of_nothing_is_empty() {
    assert!(partition(Vec::new(), size(3)).is_empty());
}

#[test]
fn group_size_larger_than_roster_gives_one_group() {
    let input = roster(7);
    let groups = group(&input, size(50)).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.groups()[0].len(), 7);
}

#[test]
fn group_size_one_gives_singletons() {
    let input = roster(5);
    let groups = group(&input, size(1)).unwrap();
    assert_eq!(groups.len(), 5);
    assert_partition_invariant(&groups, &input, 1);
}

#[test]
fn partition_invariant_holds_across_sizes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in [1, 2, 9, 10, 11, 31, 100] {
        let input = roster(n);
        for g in [1, 2, 3, 7, 10, 64] {
            let groups = group_with_rng(&input, size(g), &mut rng).unwrap();
            assert_partition_invariant(&groups, &input, g);
        }
    }
}

#[test]
fn shuffle_into_groups_matches_group_with_rng() {
    let input = roster(23);
    let names = normalize_names(&input).unwrap();
    let a = shuffle_into_groups(names, size(5), &mut StdRng::seed_from_u64(9));
    let b = group_with_rng(&input, size(5), &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
    assert_partition_invariant(&a, &input, 5);
}

#[test]
fn duplicate_names_are_kept() {
    let input = "Sam\nSam\nAlex\nSam";
    let groups = group(input, size(3)).unwrap();
    assert_partition_invariant(&groups, input, 3);
    assert_eq!(groups.names().filter(|n| *n == "Sam").count(), 3);
}

#[test]
fn seeded_rng_is_reproducible() {
    let input = roster(40);
    let a = group_with_rng(&input, size(4), &mut StdRng::seed_from_u64(7)).unwrap();
    let b = group_with_rng(&input, size(4), &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shuffle_actually_reorders() {
    let input = roster(40);
    let original = normalize_names(&input).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    // 40! orderings; a few draws staying sorted would mean no shuffle at all.
    let reordered = (0..5).any(|_| {
        let groups = group_with_rng(&input, size(40), &mut rng).unwrap();
        !groups.names().eq(original.iter().map(String::as_str))
    });
    assert!(reordered);
}

#[test]
fn every_position_is_reachable() {
    // Each of 4 names should land first at least once over many shuffles.
    let input = "a\nb\nc\nd";
    let mut rng = StdRng::seed_from_u64(1);
    let mut firsts = HashMap::new();
    for _ in 0..400 {
        let groups = group_with_rng(input, size(4), &mut rng).unwrap();
        let first = groups.names().next().unwrap().to_owned();
        *firsts.entry(first).or_insert(0usize) += 1;
    }
    assert_eq!(firsts.len(), 4);
    for count in firsts.values() {
        assert!(*count > 50, "skewed first-position counts: {firsts:?}");
    }
}

#[test]
fn parse_or_accepts_integers() {
    let fallback = GroupSize::DEFAULT;
    assert_eq!(GroupSize::parse_or("3", fallback).get(), 3);
    assert_eq!(GroupSize::parse_or(" 12\n", fallback).get(), 12);
    assert_eq!(GroupSize::parse_or("+5", fallback).get(), 5);
}

#[test]
fn parse_or_falls_back_on_garbage() {
    let fallback = GroupSize::DEFAULT;
    assert_eq!(GroupSize::parse_or("abc", fallback).get(), 10);
    assert_eq!(GroupSize::parse_or("", fallback).get(), 10);
    assert_eq!(GroupSize::parse_or("4.5", fallback).get(), 10);
    assert_eq!(GroupSize::parse_or("99999999999999999999", fallback).get(), 10);
}

#[test]
fn parse_or_falls_back_on_non_positive() {
    let fallback = size(6);
    assert_eq!(GroupSize::parse_or("0", fallback), fallback);
    assert_eq!(GroupSize::parse_or("-1", fallback), fallback);
}

#[test]
fn from_str_is_strict() {
    assert_eq!("8".parse::<GroupSize>(), Ok(size(8)));
    assert_eq!(
        "0".parse::<GroupSize>(),
        Err(Error::InvalidGroupSize("0".into()))
    );
    assert!("ten".parse::<GroupSize>().is_err());
}

#[test]
fn from_nested_vecs_drops_empty_groups() {
    let set = GroupSet::from(vec![
        vec!["Alice".to_owned()],
        vec![],
        vec!["Bob".to_owned(), "Carol".to_owned()],
    ]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.total_members(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn group_set_serializes_as_nested_arrays() {
    let set = GroupSet::from(vec![
        vec!["Alice".to_owned(), "Bob".to_owned()],
        vec!["Carol".to_owned()],
    ]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"[["Alice","Bob"],["Carol"]]"#);

    let back: GroupSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}
