#![cfg(test)]

use rand::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{ContainerEmpty, KeyNotFound};

#[test]
fn test_singly_front_and_back() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.delete_front(), Err(ContainerEmpty));
    assert_eq!(list.delete_back(), Err(ContainerEmpty));

    list.insert_back(2);
    list.insert_front(1);
    list.insert_back(3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!((list.front(), list.back()), (Some(&1), Some(&3)));

    assert_eq!(list.delete_back(), Ok(3));
    assert_eq!(list.delete_front(), Ok(1));
    assert_eq!(list.delete_back(), Ok(2));
    assert!(list.is_empty(), "Removing the only node should leave no head behind.");

    list.insert_back(4);
    assert_eq!(
        list.front(),
        Some(&4),
        "Inserting at the back of an emptied list should set the head."
    );
}

#[test]
fn test_singly_delete_cases() {
    let mut list = SinglyLinkedList::from_iter([10, 20, 30, 40]);

    assert_eq!(list.delete(&10), Ok(10), "First node should be removable.");
    assert_eq!(list.delete(&30), Ok(30), "Middle node should be removable.");
    assert_eq!(list.delete(&40), Ok(40), "Last node should be removable.");
    assert_eq!(list.delete(&99), Err(KeyNotFound));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [20]);

    list.insert_back(50);
    assert_eq!(
        list.back(),
        Some(&50),
        "The old second-to-last node should have been relinked as the end."
    );
}

#[test]
fn test_singly_insert_after_search_and_sort() {
    let mut list = SinglyLinkedList::from_iter([5, 1, 4]);
    list.insert_after(&1, 3).expect("1 is in the list");
    list.insert_after(&4, 2).expect("4 is in the list");
    assert_eq!(list.insert_after(&7, 0), Err(KeyNotFound));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 1, 3, 4, 2]);

    assert!(list.search(&3));
    assert!(!list.search(&6));
    assert_eq!(list.index_of(&4), Some(3));

    list.sort();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);

    list.reverse();
    assert_eq!(list.to_string(), "(5) -> (4) -> (3) -> (2) -> (1)");
}

#[test]
fn test_singly_releases_nodes() {
    let counter = CountedDrop::counter();
    let mut list = SinglyLinkedList::from_iter((0..5).map(|_| CountedDrop::new(&counter)));

    drop(list.delete_back());
    drop(list.delete_front());
    assert_eq!(counter.get(), 2, "Each removed node should be dropped once.");

    drop(list);
    assert_eq!(counter.get(), 5, "Dropping the list should drop the remaining nodes.");
}

#[test]
fn test_doubly_operations() {
    let mut list = DoublyLinkedList::new();
    list.insert_back(2);
    list.insert_front(1);
    list.insert_back(4);
    list.insert_after(&2, 3).expect("2 is in the list");
    list.insert_after(&4, 5).expect("4 is in the list");

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(
        list.reverse_iter().copied().collect::<Vec<_>>(),
        [5, 4, 3, 2, 1],
        "Following prev links should visit the list backwards."
    );
    assert_eq!(list.back(), Some(&5), "Inserting after the tail should move the tail.");
    assert!(list.verify_links());

    assert_eq!(list.delete(&1), Ok(1));
    assert_eq!(list.delete(&3), Ok(3));
    assert_eq!(list.delete(&5), Ok(5));
    assert_eq!(list.delete(&5), Err(KeyNotFound));
    assert!(list.verify_links());
    assert_eq!(list.to_string(), "(2) <-> (4)");

    assert_eq!(list.delete_back(), Ok(4));
    assert_eq!(list.delete_back(), Ok(2));
    assert_eq!(list.delete_front(), Err(ContainerEmpty));
    assert!(list.verify_links(), "An empty list should have neither head nor tail.");
}

#[test]
fn test_doubly_sort_keeps_links() {
    let mut list = DoublyLinkedList::from_iter([4, 1, 3, 5, 2]);
    list.sort();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(
        list.reverse_iter().copied().collect::<Vec<_>>(),
        [5, 4, 3, 2, 1],
        "Sorting swaps values, so the prev links should still mirror the order."
    );
    assert!(list.verify_links());
    assert_eq!((list.front(), list.back()), (Some(&1), Some(&5)));

    let mut empty = DoublyLinkedList::<i32>::new();
    empty.sort();
    assert!(empty.is_empty());
}

#[test]
fn test_doubly_iter_meets_in_the_middle() {
    let list = DoublyLinkedList::from_iter(1..=4);
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let mut owned = list.into_iter();
    assert_eq!(owned.next_back(), Some(4));
    assert_eq!(owned.collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_doubly_links_stay_symmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut list = DoublyLinkedList::new();
    let mut model = std::collections::VecDeque::new();

    for _ in 0..2_000 {
        let value = rng.random_range(0..50);
        match rng.random_range(0..6) {
            0 => {
                list.insert_front(value);
                model.push_front(value);
            },
            1 => {
                list.insert_back(value);
                model.push_back(value);
            },
            2 => assert_eq!(list.delete_front().ok(), model.pop_front()),
            3 => assert_eq!(list.delete_back().ok(), model.pop_back()),
            4 => {
                let expected = model.iter().position(|v| *v == value).map(|i| model.remove(i));
                assert_eq!(list.delete(&value).ok(), expected.flatten());
            },
            _ => {
                let position = model.iter().position(|v| *v == value);
                let result = list.insert_after(&value, value + 100);
                assert_eq!(result.is_ok(), position.is_some());
                if let Some(i) = position {
                    model.insert(i + 1, value + 100);
                }
            },
        }
        assert!(list.verify_links(), "Every next link should be mirrored by a prev link.");
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), Vec::from(model));
}

#[test]
fn test_circular_single_node() {
    let mut list = CircularList::new();
    assert_eq!(list.iter().count(), 0);

    list.insert_back(7);
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        [&7],
        "A single node links to itself but should still be visited exactly once."
    );
    assert_eq!((list.front(), list.back()), (Some(&7), Some(&7)));

    assert_eq!(list.delete_back(), Ok(7));
    assert!(list.is_empty());
    assert_eq!(list.delete_front(), Err(ContainerEmpty));
}

#[test]
fn test_circular_operations() {
    let mut list = CircularList::new();
    list.insert_back(2);
    list.insert_back(3);
    list.insert_front(1);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(list.to_string(), "(1) -> (2) -> (3) -> ...");

    list.insert_after(&3, 4).expect("3 is in the list");
    assert_eq!(list.back(), Some(&4), "Inserting after the last node should extend the lap.");

    list.rotate();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 1]);

    assert_eq!(list.delete(&2), Ok(2), "Deleting the head should reconnect the tail.");
    assert_eq!(list.delete(&1), Ok(1), "Deleting the tail should move the tail back.");
    assert_eq!(list.delete(&9), Err(KeyNotFound));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 4]);
    assert_eq!(list.back(), Some(&4));

    assert_eq!(list.delete_back(), Ok(4));
    assert_eq!(list.delete_front(), Ok(3));
    assert!(list.is_empty());
}

#[test]
fn test_circular_sort_and_search() {
    let mut list = CircularList::from_iter([4, 2, 5, 1, 3]);
    assert!(list.search(&5));
    assert!(!list.contains(&6), "Searching for a missing key should stop after one lap.");

    list.sort();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_circular_releases_nodes() {
    let counter = CountedDrop::counter();
    let mut list = CircularList::from_iter((0..4).map(|_| CountedDrop::new(&counter)));

    drop(list.delete_front());
    assert_eq!(counter.get(), 1);

    list.clear();
    assert_eq!(counter.get(), 4, "Clearing should drop every remaining node.");
}
