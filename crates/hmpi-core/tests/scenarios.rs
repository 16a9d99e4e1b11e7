use hmpi_core::{
    categorize_ci, categorize_hei, categorize_hpi, compute_ci, compute_hei, compute_hpi, evaluate,
};
use hmpi_model::{Category, ConcentrationSample, IndexKind, MetalKey};
use hmpi_standards::{StandardsRegistry, base_standards};

fn at_limit_sample() -> ConcentrationSample {
    ConcentrationSample::try_from_pairs([
        (MetalKey::Cd, 0.003),
        (MetalKey::Cr, 0.05),
        (MetalKey::Cu, 0.05),
        (MetalKey::Pb, 0.01),
        (MetalKey::Mn, 0.1),
        (MetalKey::Ni, 0.02),
        (MetalKey::Fe, 0.3),
        (MetalKey::Zn, 5.0),
    ])
    .expect("valid sample")
}

#[test]
fn every_metal_at_its_limit() {
    let profile = base_standards();
    let sample = at_limit_sample();

    let hpi = compute_hpi(&sample, &profile);
    for detail in &hpi.details {
        assert!((detail.qi - 100.0).abs() < 1e-9, "{:?}", detail);
    }
    assert!((hpi.hpi - 100.0).abs() < 1e-9);

    let hei = compute_hei(&sample, &profile);
    assert!((hei.hei - 8.0).abs() < 1e-9);

    let ci = compute_ci(&sample, &profile);
    assert!((ci.ci - 1.0).abs() < 1e-12);

    assert_eq!(categorize_hpi(100.0), Category::Critical);
    // Eight unit ratios sit well inside the lowest HEI band.
    assert_eq!(categorize_hei(hei.hei), Category::Good);
    assert_eq!(categorize_ci(1.0), Category::Good);

    let result = evaluate(&sample, &profile);
    assert_eq!(result.categories.hpi, Category::Critical);
    assert_eq!(result.categories.hei, Category::Good);
    assert_eq!(result.categories.ci, Category::Good);
    assert_eq!(result.overall(), Category::Critical);
    assert_eq!(result.categories.overall.index, IndexKind::Hpi);
}

#[test]
fn all_zero_sample_is_good_for_every_profile() {
    let registry = StandardsRegistry::builtin();
    for named in registry.profiles() {
        let result = evaluate(&ConcentrationSample::zero(), &named.profile);
        assert_eq!(result.hpi, 0.0);
        assert_eq!(result.hei, 0.0);
        assert_eq!(result.ci, 0.0);
        assert_eq!(result.categories.hpi, Category::Good);
        assert_eq!(result.categories.hei, Category::Good);
        assert_eq!(result.categories.ci, Category::Good);
        assert_eq!(result.overall(), Category::Good);
    }
}

#[test]
fn top_contributors_follow_contribution() {
    let sample = ConcentrationSample::try_from_pairs([
        (MetalKey::Zn, 4.0),
        (MetalKey::Pb, 0.05),
        (MetalKey::Cd, 0.002),
    ])
    .expect("valid sample");
    let result = evaluate(&sample, &base_standards());
    let top: Vec<MetalKey> = result
        .top_contributors(3)
        .iter()
        .map(|detail| detail.metal)
        .collect();
    // Wi * Qi: Pb 100 * 500, Cd 333.3 * 66.7, Zn 0.2 * 80
    assert_eq!(top, vec![MetalKey::Pb, MetalKey::Cd, MetalKey::Zn]);
    assert_eq!(result.top_contributors(8).len(), 3);
    let direct = compute_hpi(&sample, &base_standards());
    assert_eq!(direct.top_contributors(2), result.top_contributors(2));
}

#[test]
fn permissive_profile_halves_ratios() {
    let registry = StandardsRegistry::builtin();
    let permissible = &registry.resolve("BIS (Permissible)").expect("builtin").profile;
    let sample = at_limit_sample();
    let ci = compute_ci(&sample, permissible);
    assert!((ci.ci - 0.5).abs() < 1e-12);
    let hei = compute_hei(&sample, permissible);
    assert!((hei.hei - 4.0).abs() < 1e-9);
}
