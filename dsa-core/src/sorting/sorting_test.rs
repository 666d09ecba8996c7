use super::*;
use crate::test_utils::{random_int_vec, sorted_clone};
use pretty_assertions::assert_eq;

const SORTS: [(&str, fn(&mut [i32])); 3] = [
    ("insertion", insertion_sort::<i32>),
    ("bubble", bubble_sort::<i32>),
    ("merge", merge_sort::<i32>),
];

fn check_all(input: &[i32]) {
    let expected = sorted_clone(input);
    for (name, sort) in SORTS {
        let mut actual = input.to_vec();
        sort(&mut actual);
        assert_eq!(actual, expected, "{} sort failed on {:?}", name, input);
    }
}

#[test]
fn test_documented_examples() {
    let mut values = vec![3, 1, 2];
    insertion_sort(&mut values);
    assert_eq!(values, vec![1, 2, 3]);

    let mut values: Vec<i32> = vec![];
    merge_sort(&mut values);
    assert!(values.is_empty());

    let mut values = vec![2, 2, 1];
    bubble_sort(&mut values);
    assert_eq!(values, vec![1, 2, 2]);
}

#[test]
fn test_empty_and_singleton() {
    check_all(&[]);
    check_all(&[42]);
    check_all(&[-7]);
}

#[test]
fn test_already_sorted_and_reversed() {
    let ascending: Vec<i32> = (0..100).collect();
    let descending: Vec<i32> = (0..100).rev().collect();
    check_all(&ascending);
    check_all(&descending);
}

#[test]
fn test_duplicates_and_negatives() {
    check_all(&[5, 5, 5, 5]);
    check_all(&[0, -1, 1, -1, 0, 1]);
    check_all(&[i32::MAX, i32::MIN, 0, i32::MIN, i32::MAX]);
}

#[test]
fn test_random_arrays() {
    for size in [2, 3, 7, 20, 64, 257] {
        check_all(&random_int_vec(size, -10, 10));
    }
}

#[test]
fn test_merge_worst_case_rotations() {
    // Every right-half element belongs in front of the whole left half
    let mut values: Vec<i32> = (50..100).chain(0..50).collect();
    merge_by_rotation(&mut values, 50);
    assert_eq!(values, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_merge_by_rotation_interleaved() {
    let mut values = vec![1, 4, 6, 2, 3, 5, 7];
    merge_by_rotation(&mut values, 3);
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyed {
    key: i32,
    tag: usize,
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn test_sorts_are_stable() {
    let input: Vec<Keyed> = [3, 1, 3, 2, 1, 3, 2]
        .into_iter()
        .enumerate()
        .map(|(tag, key)| Keyed { key, tag })
        .collect();

    let mut expected = input.clone();
    expected.sort();

    for algorithm in [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Merge,
    ] {
        let mut actual = input.clone();
        algorithm.sort(&mut actual);
        let tags: Vec<usize> = actual.iter().map(|k| k.tag).collect();
        let expected_tags: Vec<usize> = expected.iter().map(|k| k.tag).collect();
        assert_eq!(tags, expected_tags, "{} sort is not stable", algorithm);
    }
}

#[test]
fn test_is_sorted() {
    assert!(is_sorted::<i32>(&[]));
    assert!(is_sorted(&[1]));
    assert!(is_sorted(&[1, 1, 2, 3]));
    assert!(!is_sorted(&[2, 1]));
}

#[test]
fn test_algorithm_parsing() {
    assert_eq!("merge".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Merge);
    assert_eq!(" Bubble ".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Bubble);
    assert_eq!("reference".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Std);

    let err = "quick".parse::<SortAlgorithm>().unwrap_err();
    assert!(matches!(err, DsaError::Config(_)));
}

#[test]
fn test_algorithm_names_round_trip_through_display() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.to_string().parse::<SortAlgorithm>().unwrap(), algorithm);
    }
}
