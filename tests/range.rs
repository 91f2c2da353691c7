pub mod common;

use common::counted;
use lazylist::{Error, LazyList};

#[test]
fn get_range_bounded_consumption() {
    // strided reads must not consume past the highest touched offset,
    // even on an infinite producer
    let (src, pulls) = counted(0..);
    let mut lazy = LazyList::new(src);
    assert_eq!(lazy.get_range(Some(2), Some(9), 3), Ok(vec![2, 5, 8]));
    assert_eq!(pulls.get(), 9);
    assert_eq!(lazy.get_range(Some(0), Some(4), 1), Ok(vec![0, 1, 2, 3]));
    assert_eq!(pulls.get(), 9);
    assert_eq!(lazy.get_range(Some(5), Some(2), 1), Ok(vec![]));
    assert_eq!(pulls.get(), 9);
}

#[test]
fn get_range_open_and_negative() {
    let mut lazy = LazyList::new(0..6);
    assert_eq!(lazy.get_range(None, None, -1), Ok(vec![5, 4, 3, 2, 1, 0]));
    assert!(lazy.is_exhausted());
    assert_eq!(lazy.get_range(Some(-2), None, 1), Ok(vec![4, 5]));
    assert_eq!(lazy.get_range(Some(4), Some(0), -2), Ok(vec![4, 2]));
    assert_eq!(lazy.get_range(None, None, 0), Err(Error::Step));
}

#[test]
fn set_range_matches_eager_splice() {
    let mut lazy = LazyList::new(0..8);
    lazy.set_range(Some(2), Some(5), 1, [10, 20, 30, 40, 50, 60])
        .unwrap();

    let mut eager: Vec<i32> = (0..8).collect();
    eager.splice(2..5, [10, 20, 30, 40, 50, 60]);

    // element-by-element read must match the eager equivalent
    let mut i = 0;
    while let Ok(&x) = lazy.get(i) {
        assert_eq!(x, eager[i as usize]);
        i += 1;
    }
    assert_eq!(lazy.len(), eager.len());
}

#[test]
fn set_range_insertion_point() {
    let mut lazy = LazyList::new(0..4);
    lazy.set_range(Some(2), Some(2), 1, [9, 9]).unwrap();
    assert_eq!(lazy.realized(), [0, 1, 9, 9, 2]);
    assert_eq!(lazy.len(), 6);
    assert_eq!(lazy.realized(), [0, 1, 9, 9, 2, 3]);
}

#[test]
fn set_range_strided() {
    let mut lazy = LazyList::new(0..6);
    lazy.set_range(Some(0), None, 2, [10, 20, 30]).unwrap();
    assert_eq!(lazy.realized(), [10, 1, 20, 3, 30, 5]);
    assert_eq!(
        lazy.set_range(Some(0), None, 2, [1, 2]),
        Err(Error::SliceLen(3, 2))
    );
}

#[test]
fn delete_range_keeps_tail() {
    let mut lazy = LazyList::new(0..8);
    lazy.delete_range(Some(1), Some(7), 2).unwrap();
    assert_eq!(lazy.realized(), [0, 2, 4]);
    assert_eq!(lazy.len(), 5);
    assert_eq!(lazy.realized(), [0, 2, 4, 6, 7]);

    let mut lazy = LazyList::new(0..5);
    lazy.delete_range(None, None, -1).unwrap();
    assert_eq!(lazy.len(), 0);
}

#[test]
fn index_of_negative_bounds_force_full_realization() {
    let (src, pulls) = counted(0..10);
    let mut lazy = LazyList::new(src);
    assert_eq!(lazy.index_of(&7, -9, None), Ok(7));
    assert_eq!(pulls.get(), 10);
    assert_eq!(lazy.index_of(&0, -11, None), Err(Error::OutOfRange(-11)));
}
