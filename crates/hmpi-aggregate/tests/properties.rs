use hmpi_aggregate::{describe, group_by};
use proptest::prelude::*;

proptest! {
    #[test]
    fn grouping_is_a_stable_partition(keys in proptest::collection::vec(0u8..6, 0..64)) {
        let items: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let groups = group_by(&items, |item: &(u8, usize)| item.0);

        let total: usize = groups.iter().map(|group| group.rows.len()).sum();
        prop_assert_eq!(total, items.len());

        let mut firsts = Vec::new();
        for group in &groups {
            prop_assert!(group.rows.iter().all(|item| item.0 == group.key));
            prop_assert!(group.rows.windows(2).all(|pair| pair[0].1 < pair[1].1));
            firsts.push(group.rows[0].1);
        }
        prop_assert!(firsts.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn descriptive_bounds_hold(values in proptest::collection::vec(0.0f64..1.0e3, 1..40)) {
        let stats = describe(&values).expect("non-empty input");
        prop_assert_eq!(stats.count, values.len());
        prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
        prop_assert!(stats.min <= stats.mean + 1e-9 && stats.mean <= stats.max + 1e-9);
        prop_assert_eq!(stats.std_dev.is_some(), values.len() > 1);
    }
}
