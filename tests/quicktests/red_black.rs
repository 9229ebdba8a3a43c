use rbt::{Error, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes the tree agrees with the set and is still a valid tree.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
            Op::Delete(k) => tree.delete(k) == set.remove(k),
            Op::Search(k) => tree.search(k) == set.contains(k),
        };
        if !agrees || !tree.assert_bst_property() || !tree.assert_rbt_property() {
            return false;
        }
    }

    tree.iter().eq(set.iter())
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
}

#[quickcheck]
fn fuzz_multiple_operations_i32(ops: Vec<Op<i32>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
}

#[quickcheck]
fn sorted_after_any_insert_order(xs: Vec<i16>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    sorted.dedup();

    tree.in_order_walk() == sorted && tree.len() == sorted.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
        if tree.validate().is_err() {
            return false;
        }
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn repeated_insert_and_delete_are_no_ops(xs: Vec<i8>, x: i8) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.insert(x);
    let before = tree.dump().to_string();

    let reinserted = tree.insert(x);
    let unchanged_after_insert = tree.dump().to_string() == before;

    tree.delete(&x);
    let after_delete = tree.dump().to_string();
    let deleted_again = tree.delete(&x);

    !reinserted
        && unchanged_after_insert
        && !deleted_again
        && tree.dump().to_string() == after_delete
}

#[quickcheck]
fn neighbors_match_sorted_order(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let sorted: Vec<_> = tree.iter().copied().collect();

    sorted.iter().enumerate().all(|(i, x)| {
        let successor = sorted.get(i + 1);
        let predecessor = i.checked_sub(1).map(|i| &sorted[i]);
        tree.successor(x) == Ok(successor) && tree.predecessor(x) == Ok(predecessor)
    })
}

#[quickcheck]
fn missing_keys_have_no_neighbors(xs: Vec<i8>, probe: i8) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    if tree.search(&probe) {
        return true;
    }

    tree.successor(&probe) == Err(Error::KeyNotFound)
        && tree.predecessor(&probe) == Err(Error::KeyNotFound)
}

#[quickcheck]
fn extremes_have_no_outer_neighbors(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    match (tree.minimum(), tree.maximum()) {
        (Some(min), Some(max)) => {
            tree.predecessor(min) == Ok(None)
                && tree.successor(max) == Ok(None)
                && Some(min) == xs.iter().min()
                && Some(max) == xs.iter().max()
        }
        (None, None) => xs.is_empty(),
        _ => false,
    }
}

#[test]
fn scenario() {
    init_logging();
    let mut tree = Tree::new();
    for key in [9, 5, 1, 0, 6, 3, 2, 4, 7, 8] {
        assert!(tree.insert(key));
        assert!(tree.assert_bst_property());
        assert!(tree.assert_rbt_property());
    }

    assert_eq!(tree.in_order_walk(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(!tree.search(&10));
    assert!(tree.search(&9));
    assert_eq!((tree.minimum(), tree.maximum()), (Some(&0), Some(&9)));
    assert_eq!(tree.predecessor(&5), Ok(Some(&4)));
    assert_eq!(tree.successor(&5), Ok(Some(&6)));

    assert!(tree.insert(10));
    assert!(tree.delete(&5));
    assert!(tree.assert_bst_property());
    assert!(tree.assert_rbt_property());
    assert_eq!(tree.in_order_walk(), vec![0, 1, 2, 3, 4, 6, 7, 8, 9, 10]);
}
