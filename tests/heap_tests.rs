use labeled_sssp::{Error, IndexedMinHeap};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

type IntHeap = IndexedMinHeap<i32, fn(&i32, &i32) -> Ordering>;

fn ascending(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

fn int_heap() -> IntHeap {
    IndexedMinHeap::new(ascending as fn(&i32, &i32) -> Ordering)
}

fn heap_of(values: &[i32]) -> IntHeap {
    let mut heap = int_heap();
    for &v in values {
        heap.add(v).unwrap();
    }
    heap
}

const TEN: [i32; 10] = [5, 3, 7, 2, 1, 8, 6, 9, 10, 4];

fn assert_heap_property(values: &[i32]) {
    for i in 1..values.len() {
        assert!(
            values[(i - 1) / 2] <= values[i],
            "heap property broken at {} in {:?}",
            i,
            values
        );
    }
}

#[test]
fn test_size_empty() {
    assert_eq!(int_heap().size(), 0);
    assert!(int_heap().is_empty());
}

#[test]
fn test_remove_from_empty() {
    let mut heap = int_heap();
    assert!(matches!(heap.remove(), Err(Error::EmptyHeap)));
}

#[test]
fn test_add_one_element() {
    let heap = heap_of(&[1]);
    assert_eq!(heap.size(), 1);
    assert_eq!(heap.to_array(), vec![1]);
}

#[test]
fn test_add_two_elements() {
    assert_eq!(heap_of(&[2, 1]).to_array(), vec![1, 2]);
}

#[test]
fn test_add_ten_elements() {
    assert_eq!(heap_of(&TEN).to_array(), vec![1, 2, 6, 5, 3, 8, 7, 9, 10, 4]);
}

#[test]
fn test_add_duplicate() {
    let mut heap = heap_of(&[1, 2, 3]);
    assert!(matches!(heap.add(2), Err(Error::DuplicateElement)));
    assert_eq!(heap.size(), 3);
}

#[test]
fn test_relatives_in_ten_element_heap() {
    let heap = heap_of(&TEN);
    // 1 is the root: its parent is itself
    assert_eq!(*heap.parent(&1), 1);
    // 4 is the last slot: no right child
    assert_eq!(*heap.right(&4), 4);
    // 5 sits at index 3, its left child at index 7
    assert_eq!(*heap.left(&5), 9);
    assert_eq!(*heap.right(&5), 10);
    assert_eq!(*heap.parent(&3), 2);
}

#[test]
fn test_remove_only_element() {
    let mut heap = heap_of(&[1]);
    assert_eq!(heap.remove().unwrap(), 1);
    assert!(heap.to_array().is_empty());
}

#[test]
fn test_remove_from_three() {
    let mut heap = heap_of(&[3, 2, 1]);
    assert_eq!(heap.remove().unwrap(), 1);
    assert_eq!(heap.to_array(), vec![2, 3]);
}

#[test]
fn test_remove_root_of_ten() {
    let mut heap = heap_of(&TEN);
    assert_eq!(heap.remove().unwrap(), 1);
    assert_eq!(heap.to_array(), vec![2, 3, 6, 5, 4, 8, 7, 9, 10]);
}

#[test]
fn test_removals_come_out_sorted() {
    let mut heap = heap_of(&TEN);
    let mut drained = Vec::new();
    while !heap.is_empty() {
        drained.push(heap.remove().unwrap());
    }
    assert_eq!(drained, (1..=10).collect::<Vec<_>>());
    assert!(matches!(heap.remove(), Err(Error::EmptyHeap)));
}

#[test]
fn test_decrease_root_to_larger_value() {
    let mut heap = heap_of(&[1, 2, 3]);
    heap.decrease(&1, 4).unwrap();
    assert_eq!(heap.to_array(), vec![2, 4, 3]);
    assert!(!heap.contains(&1));
    assert_eq!(heap.position(&4), Some(1));
}

#[test]
fn test_decrease_missing_element() {
    let mut heap = heap_of(&[1, 2, 3]);
    assert!(matches!(heap.decrease(&10, 1), Err(Error::NotFound)));
    assert_eq!(heap.to_array(), vec![1, 2, 3]);
}

#[test]
fn test_decrease_leaf_to_new_minimum() {
    let mut heap = heap_of(&TEN);
    heap.decrease(&9, 0).unwrap();
    assert_eq!(heap.to_array(), vec![0, 1, 6, 2, 3, 8, 7, 5, 10, 4]);
}

#[test]
fn test_comparator_decides_the_order() {
    let mut heap = IndexedMinHeap::new(|a: &i32, b: &i32| b.cmp(a));
    for v in TEN {
        heap.add(v).unwrap();
    }
    assert_eq!(heap.remove().unwrap(), 10);
    assert_eq!(heap.remove().unwrap(), 9);
}

#[test]
fn test_random_adds_keep_heap_property() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..50 {
        let mut values: Vec<i32> = (0..200).collect();
        values.shuffle(&mut rng);
        let len = rng.gen_range(1..values.len());

        let mut heap = int_heap();
        for &v in &values[..len] {
            heap.add(v).unwrap();
            assert_heap_property(heap.as_slice());
        }
        for (i, v) in heap.as_slice().iter().enumerate() {
            assert_eq!(heap.position(v), Some(i));
        }
    }
}

#[test]
fn test_random_decrease_keeps_heap_property() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut values: Vec<i32> = (0..100).map(|v| v * 10).collect();
    values.shuffle(&mut rng);

    let mut heap = heap_of(&values);
    let mut present = values.clone();

    // replacements smaller, equal and greater than the old value
    for step in 0..300 {
        let idx = rng.gen_range(0..present.len());
        let old = present[idx];
        let new = match step % 3 {
            0 => old,
            _ => loop {
                let candidate = rng.gen_range(-5_000..5_000);
                if !present.contains(&candidate) {
                    break candidate;
                }
            },
        };

        heap.decrease(&old, new).unwrap();
        present[idx] = new;
        assert_heap_property(heap.as_slice());
        assert_eq!(heap.size(), present.len());
    }

    present.sort();
    let mut drained = Vec::new();
    while let Ok(v) = heap.remove() {
        drained.push(v);
    }
    assert_eq!(drained, present);
}
