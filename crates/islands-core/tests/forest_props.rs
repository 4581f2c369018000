use islands_core::{DisjointForest, IslandId};
use proptest::prelude::*;

/// Naive partition: every id carries a class tag, unions relabel a whole class.
fn naive_classes(len: usize, unions: &[(usize, usize)]) -> Vec<usize> {
    let mut class: Vec<usize> = (0..len).collect();
    for &(a, b) in unions {
        let (from, to) = (class[a].max(class[b]), class[a].min(class[b]));
        for c in class.iter_mut() {
            if *c == from {
                *c = to;
            }
        }
    }
    class
}

fn arb_unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..40).prop_flat_map(|len| {
        (
            Just(len),
            prop::collection::vec((0..len, 0..len), 0..60),
        )
    })
}

proptest! {
    #[test]
    fn root_count_matches_naive_partition((len, unions) in arb_unions()) {
        let mut forest = DisjointForest::with_roots(len);
        for &(a, b) in &unions {
            forest.coalesce(IslandId(a as u32), IslandId(b as u32)).unwrap();
        }
        let classes = naive_classes(len, &unions);
        let mut distinct = classes.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(forest.count_roots(), distinct.len());
    }

    #[test]
    fn canonical_root_is_class_minimum((len, unions) in arb_unions()) {
        let mut forest = DisjointForest::with_roots(len);
        for &(a, b) in &unions {
            forest.coalesce(IslandId(a as u32), IslandId(b as u32)).unwrap();
        }
        let classes = naive_classes(len, &unions);
        for (id, &class) in classes.iter().enumerate() {
            prop_assert_eq!(
                forest.trace_root(IslandId(id as u32)).unwrap(),
                IslandId(class as u32)
            );
        }
    }

    #[test]
    fn union_order_does_not_change_roots((len, unions) in arb_unions()) {
        let mut forward = DisjointForest::with_roots(len);
        let mut backward = DisjointForest::with_roots(len);
        for &(a, b) in &unions {
            forward.coalesce(IslandId(a as u32), IslandId(b as u32)).unwrap();
        }
        for &(a, b) in unions.iter().rev() {
            backward.coalesce(IslandId(b as u32), IslandId(a as u32)).unwrap();
        }
        for id in 0..len as u32 {
            prop_assert_eq!(
                forward.trace_root(IslandId(id)).unwrap(),
                backward.trace_root(IslandId(id)).unwrap()
            );
        }
    }
}

#[test]
fn growing_forest_keeps_existing_unions() {
    let mut forest = DisjointForest::new();
    let a = forest.add_new();
    let b = forest.add_new();
    forest.coalesce(b, a).unwrap();
    let c = forest.add_new();
    assert_eq!(forest.trace_root(b).unwrap(), a);
    assert_eq!(forest.trace_root(c).unwrap(), c);
    assert_eq!(forest.count_roots(), 2);
}
