pub mod fixtures;

use fixtures::*;
use proptest::prelude::*;
use skit_kernel::prelude::*;

proptest! {
    #[test]
    fn resolution_is_sorted_by_priority_then_sequence(priorities in prop::collection::vec(-5i32..5, 0..24)) {
        let (registry, graph) = setup("area", "ctx");
        for (i, priority) in priorities.iter().enumerate() {
            add(&registry, &graph, &format!("n{i}"), "area", Entry::with_priority(*priority));
        }

        let ids = Resolver::new(&registry, &graph).resolve("area", "ctx").into_ids().unwrap();
        prop_assert_eq!(ids.len(), priorities.len());

        let keys: Vec<(i32, usize)> = ids
            .iter()
            .map(|id| {
                let seq: usize = id[1..].parse().unwrap();
                (priorities[seq], seq)
            })
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn duplicates_never_replace_the_first(first in 0i32..100, second in 0i32..100) {
        let registry = Registry::new("widget");
        registry.register("dup", Entry::with_priority(first)).unwrap();
        registry.register("dup", Entry::with_priority(second)).unwrap();
        prop_assert_eq!(registry.get("dup").unwrap().priority, first);
        prop_assert_eq!(registry.len(), 1);
    }
}
