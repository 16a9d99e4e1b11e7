//! HPI, HEI and CI computation.
//!
//! All three indices treat the ideal concentration of a heavy metal as 0, so
//! the sub-index of metal `i` reduces to `Mi / Si`. Every metal in
//! [`MetalKey::ALL`] is evaluated; a metal missing from the sample counts as 0.

use std::cmp::Ordering;

use serde::Serialize;

use hmpi_model::{ConcentrationSample, MetalKey};
use hmpi_standards::StandardsProfile;

/// Per-metal terms of the HPI sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HpiDetail {
    pub metal: MetalKey,
    /// Standard limit `Si` (mg/L).
    pub si: f64,
    /// Measured concentration `Mi` (mg/L).
    pub mi: f64,
    /// Unit weight `Wi = 1 / Si`.
    pub wi: f64,
    /// Sub-index `Qi = 100 * Mi / Si`.
    pub qi: f64,
    /// `Wi * Qi`.
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HpiResult {
    pub hpi: f64,
    pub sum_w: f64,
    pub sum_wq: f64,
    /// Sorted by descending contribution; equal contributions keep
    /// [`MetalKey::ALL`] order.
    pub details: Vec<HpiDetail>,
}

impl HpiResult {
    pub fn top_contributors(&self, n: usize) -> Vec<HpiDetail> {
        top_contributors(&self.details, n)
    }
}

/// The first `n` of `details`, skipping metals that contribute nothing.
///
/// `details` must already be in descending contribution order.
pub fn top_contributors(details: &[HpiDetail], n: usize) -> Vec<HpiDetail> {
    details
        .iter()
        .take(n)
        .filter(|detail| detail.contribution > 0.0)
        .copied()
        .collect()
}

/// Concentration-to-standard ratio for one metal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioDetail {
    pub metal: MetalKey,
    pub si: f64,
    pub mi: f64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeiResult {
    pub hei: f64,
    /// In [`MetalKey::ALL`] order.
    pub details: Vec<RatioDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CiResult {
    pub ci: f64,
    /// In [`MetalKey::ALL`] order.
    pub details: Vec<RatioDetail>,
}

impl CiResult {
    /// The first metal whose ratio equals the CI, or `None` for a zero sample.
    pub fn dominant_metal(&self) -> Option<MetalKey> {
        if self.ci <= 0.0 {
            return None;
        }
        self.details
            .iter()
            .find(|detail| detail.ratio == self.ci)
            .map(|detail| detail.metal)
    }
}

/// Heavy-metal Pollution Index: `Σ(Wi·Qi) / Σ(Wi)` with `Wi = 1/Si` and
/// `Qi = 100·Mi/Si`.
pub fn compute_hpi(sample: &ConcentrationSample, profile: &StandardsProfile) -> HpiResult {
    let mut sum_w = 0.0;
    let mut sum_wq = 0.0;
    let mut details: Vec<HpiDetail> = MetalKey::ALL
        .into_iter()
        .map(|metal| {
            let si = profile.limit(metal);
            let mi = sample.get(metal);
            let wi = 1.0 / si;
            let qi = (mi / si) * 100.0;
            let contribution = wi * qi;
            sum_w += wi;
            sum_wq += contribution;
            HpiDetail {
                metal,
                si,
                mi,
                wi,
                qi,
                contribution,
            }
        })
        .collect();
    let hpi = if sum_w > 0.0 { sum_wq / sum_w } else { 0.0 };
    // Stable: ties stay in display order.
    details.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(Ordering::Equal)
    });
    HpiResult {
        hpi,
        sum_w,
        sum_wq,
        details,
    }
}

/// Heavy-metal Evaluation Index: `Σ(Mi/Si)`.
pub fn compute_hei(sample: &ConcentrationSample, profile: &StandardsProfile) -> HeiResult {
    let details = ratio_details(sample, profile);
    let hei = details.iter().map(|detail| detail.ratio).sum();
    HeiResult { hei, details }
}

/// Contamination Index: `max(Mi/Si)`.
pub fn compute_ci(sample: &ConcentrationSample, profile: &StandardsProfile) -> CiResult {
    let details = ratio_details(sample, profile);
    let ci = details
        .iter()
        .fold(0.0_f64, |max, detail| if detail.ratio > max { detail.ratio } else { max });
    CiResult { ci, details }
}

fn ratio_details(sample: &ConcentrationSample, profile: &StandardsProfile) -> Vec<RatioDetail> {
    MetalKey::ALL
        .into_iter()
        .map(|metal| {
            let si = profile.limit(metal);
            let mi = sample.get(metal);
            RatioDetail {
                metal,
                si,
                mi,
                ratio: mi / si,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmpi_standards::base_standards;

    #[test]
    fn single_metal_hpi_matches_formula() {
        let profile = base_standards();
        let sample = ConcentrationSample::zero()
            .with(MetalKey::Pb, 0.02)
            .expect("valid sample");
        let result = compute_hpi(&sample, &profile);

        let sum_w: f64 = MetalKey::ALL
            .into_iter()
            .map(|metal| 1.0 / profile.limit(metal))
            .sum();
        let expected = (1.0 / 0.01) * 200.0 / sum_w;
        assert!((result.hpi - expected).abs() < 1e-9);
        assert!((result.sum_w - sum_w).abs() < 1e-9);

        let lead = result.details[0];
        assert_eq!(lead.metal, MetalKey::Pb);
        assert!((lead.qi - 200.0).abs() < 1e-9);
    }

    #[test]
    fn zero_contribution_ties_keep_display_order() {
        let result = compute_hpi(&ConcentrationSample::zero(), &base_standards());
        let order: Vec<MetalKey> = result.details.iter().map(|detail| detail.metal).collect();
        assert_eq!(order, MetalKey::ALL.to_vec());
        assert!(result.top_contributors(3).is_empty());
        assert!(top_contributors(&result.details, 8).is_empty());
    }

    #[test]
    fn ci_reports_dominant_metal() {
        let sample = ConcentrationSample::try_from_pairs([
            (MetalKey::Fe, 0.6),
            (MetalKey::Cd, 0.003),
        ])
        .expect("valid sample");
        let result = compute_ci(&sample, &base_standards());
        assert_eq!(result.ci, 0.6 / 0.3);
        assert_eq!(result.dominant_metal(), Some(MetalKey::Fe));
    }
}
