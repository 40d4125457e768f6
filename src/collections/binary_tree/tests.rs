#![cfg(test)]

use rand::prelude::*;

use super::*;
use crate::util::error::KeyNotFound;

/// Checks the ordering property over whole subtrees, not just between parents and children.
fn is_ordered<T: Ord>(branch: &Branch<T>, lower: Option<&T>, upper: Option<&T>) -> bool {
    match &branch.0 {
        Some(node) => {
            lower.is_none_or(|lower| &node.value >= lower)
                && upper.is_none_or(|upper| &node.value < upper)
                && is_ordered(&node.left, lower, Some(&node.value))
                && is_ordered(&node.right, Some(&node.value), upper)
        },
        None => true,
    }
}

#[test]
fn test_scenario() {
    let tree = BinarySearchTree::from_iter([10, 5, 20, 15]);

    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [5, 10, 15, 20]);
    assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [10, 5, 20, 15]);
    assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [5, 15, 20, 10]);

    assert_eq!((tree.min(), tree.max()), (Some(&5), Some(&20)));
    assert_eq!(tree.height(), Some(2));
    assert_eq!(tree.count(), 4);
    assert!(tree.search(&15));
    assert!(!tree.search(&12));
    assert_eq!(tree.to_string(), "{5, 10, 15, 20}");
}

#[test]
fn test_empty_tree_signals() {
    let tree = BinarySearchTree::<i32>::new();
    assert_eq!(tree.height(), None, "An empty tree should have no height rather than zero.");
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.count(), 0);
    assert_eq!(tree.inorder().next(), None);

    let single = BinarySearchTree::from_iter([1]);
    assert_eq!(single.height(), Some(0));
}

#[test]
fn test_traversals_are_restartable() {
    let tree = BinarySearchTree::from_iter([4, 2, 6, 1, 3, 5, 7]);
    let first = tree.inorder().collect::<Vec<_>>();
    let second = tree.inorder().collect::<Vec<_>>();
    assert_eq!(first, second, "Traversal should not change the tree.");

    for order in [Order::Inorder, Order::Preorder, Order::Postorder] {
        let lazy = match order {
            Order::Inorder => tree.inorder().collect::<Vec<_>>(),
            Order::Preorder => tree.preorder().collect(),
            Order::Postorder => tree.postorder().collect(),
        };
        assert_eq!(
            lazy,
            tree.traverse(order),
            "The explicit-stack and recursive traversals should agree for {order:?}."
        );
    }
}

#[test]
fn test_duplicates_route_right() {
    let mut tree = BinarySearchTree::from_iter([5, 3, 5, 5]);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 5, 5, 5]);
    assert_eq!(
        tree.preorder().copied().collect::<Vec<_>>(),
        [5, 3, 5, 5],
        "Each duplicate should become the right child of the copy before it."
    );
    assert_eq!(tree.height(), Some(2));

    assert_eq!(tree.remove(&5), Ok(5));
    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 5, 5]);
    assert!(is_ordered(&tree.root, None, None));
}

#[test]
fn test_remove_cases() {
    let mut tree = BinarySearchTree::from_iter([50, 30, 70, 20, 40, 60, 80, 65]);

    assert_eq!(tree.remove(&20), Ok(20), "A leaf should be detached.");
    assert_eq!(tree.remove(&60), Ok(60), "A node with one child should be replaced by it.");
    assert_eq!(
        tree.remove(&50),
        Ok(50),
        "The root with two children should take its successor."
    );
    assert_eq!(tree.remove(&50), Err(KeyNotFound));

    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [30, 40, 65, 70, 80]);
    assert_eq!(tree.preorder().next(), Some(&65), "The successor of 50 is 65.");
    assert_eq!((tree.len(), tree.count()), (5, 5));
    assert!(is_ordered(&tree.root, None, None));
}

#[test]
fn test_random_inserts_stay_sorted() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let values = (0..rng.random_range(0..200))
            .map(|_| rng.random_range(-100..100))
            .collect::<Vec<i32>>();
        let mut tree = BinarySearchTree::from_iter(values.iter().copied());

        let inorder = tree.inorder().copied().collect::<Vec<_>>();
        assert!(
            inorder.windows(2).all(|pair| pair[0] <= pair[1]),
            "Inorder traversal should be non-decreasing."
        );
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(inorder, sorted);
        assert!(is_ordered(&tree.root, None, None));

        for value in values.iter().step_by(3) {
            assert_eq!(tree.remove(value), Ok(*value));
            assert!(is_ordered(&tree.root, None, None));
        }
        assert_eq!(tree.len(), tree.count());
    }
}

#[test]
fn test_degenerate_tree() {
    const SIZE: usize = 5_000;

    // A small stack makes any per-level recursion over this tree overflow.
    let worker = std::thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(|| {
            let mut tree = BinarySearchTree::new();
            for value in 0..SIZE {
                tree.insert(value);
            }
            assert_eq!(tree.height(), Some(SIZE - 1));
            assert_eq!(tree.count(), SIZE);
            assert!(tree.search(&(SIZE - 1)), "The deepest value should be found.");
            assert!(!tree.search(&SIZE));
            assert_eq!((tree.min(), tree.max()), (Some(&0), Some(&(SIZE - 1))));

            assert_eq!(tree.inorder().count(), SIZE);
            assert_eq!(tree.postorder().next(), Some(&(SIZE - 1)));
            assert_eq!(tree.traverse(Order::Preorder).len(), SIZE);

            assert_eq!(tree.remove(&(SIZE - 1)), Ok(SIZE - 1), "The deepest leaf should detach.");
            assert_eq!(tree.remove(&0), Ok(0), "The root should be replaced by its only child.");
            assert_eq!(tree.min(), Some(&1));
            assert_eq!(tree.len(), SIZE - 2);

            tree.clear();
            assert!(tree.is_empty());
        })
        .expect("worker thread should spawn");

    assert!(worker.join().is_ok(), "A degenerate tree should not exhaust the call stack.");
}
