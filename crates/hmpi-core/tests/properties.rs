use hmpi_core::{compute_ci, compute_hei, compute_hpi, evaluate};
use hmpi_model::{ConcentrationSample, MetalKey};
use hmpi_standards::{base_standards, scale};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = ConcentrationSample> {
    proptest::collection::vec(0.0f64..10.0, MetalKey::COUNT).prop_map(|values| {
        ConcentrationSample::try_from_pairs(MetalKey::ALL.into_iter().zip(values))
            .expect("non-negative values")
    })
}

proptest! {
    #[test]
    fn ci_is_the_largest_ratio(sample in sample_strategy(), factor in 0.1f64..10.0) {
        let profile = scale(&base_standards(), factor).expect("valid factor");
        let result = compute_ci(&sample, &profile);
        prop_assert!(result.ci >= 0.0);
        let mut max = 0.0f64;
        for metal in MetalKey::ALL {
            let ratio = sample.get(metal) / profile.limit(metal);
            prop_assert!(result.ci >= ratio);
            max = max.max(ratio);
        }
        prop_assert_eq!(result.ci, max);
    }

    #[test]
    fn hei_is_the_sum_of_ratios_in_any_order(sample in sample_strategy()) {
        let profile = base_standards();
        let result = compute_hei(&sample, &profile);
        let forward: f64 = MetalKey::ALL
            .into_iter()
            .map(|metal| sample.get(metal) / profile.limit(metal))
            .sum();
        let reverse: f64 = MetalKey::ALL
            .into_iter()
            .rev()
            .map(|metal| sample.get(metal) / profile.limit(metal))
            .sum();
        prop_assert!((result.hei - forward).abs() <= 1e-9 * forward.max(1.0));
        prop_assert!((result.hei - reverse).abs() <= 1e-9 * reverse.max(1.0));
    }

    #[test]
    fn hpi_is_non_negative_weighted_mean(sample in sample_strategy()) {
        let profile = base_standards();
        let result = compute_hpi(&sample, &profile);
        prop_assert!(result.hpi >= 0.0);
        let max_qi = result
            .details
            .iter()
            .map(|detail| detail.qi)
            .fold(0.0f64, f64::max);
        prop_assert!(result.hpi <= max_qi * (1.0 + 1e-12));
        for pair in result.details.windows(2) {
            prop_assert!(pair[0].contribution >= pair[1].contribution);
        }
    }

    #[test]
    fn evaluation_is_idempotent(sample in sample_strategy()) {
        let profile = base_standards();
        let first = evaluate(&sample, &profile);
        let second = evaluate(&sample, &profile);
        prop_assert_eq!(first.hpi.to_bits(), second.hpi.to_bits());
        prop_assert_eq!(first.hei.to_bits(), second.hei.to_bits());
        prop_assert_eq!(first.ci.to_bits(), second.ci.to_bits());
        prop_assert_eq!(first, second);
    }
}
