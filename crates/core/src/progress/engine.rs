//! Progress engine
//!
//! Maps a project's five milestone dates to a bounded completion percentage
//! and the percentage to a status tier. Everything here is a pure function
//! of its arguments: the reference date is always passed in, never read from
//! a clock.

use chrono::NaiveDate;
use projboard_domain::constants::{
    AT_RISK_THRESHOLD, COMPLETE_THRESHOLD, MAX_PROGRESS, NEAR_COMPLETE_THRESHOLD,
    ON_TRACK_THRESHOLD,
};
use projboard_domain::{CountingPolicy, MilestoneDates, Project, ProgressTier};
use serde::Serialize;

/// Completion percentage for a set of milestone dates.
///
/// Sums the weight of every milestone whose date counts under `policy`
/// (see [`CountingPolicy`]) and clamps the result to 100. Absent dates
/// contribute nothing.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use projboard_core::compute_progress;
/// use projboard_domain::{CountingPolicy, Milestone, MilestoneDates};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let dates = MilestoneDates::default().with(Milestone::PartsArrival, today);
/// assert_eq!(compute_progress(&dates, today, CountingPolicy::WhenSet), 30);
/// ```
pub fn compute_progress(
    milestones: &MilestoneDates,
    as_of: NaiveDate,
    policy: CountingPolicy,
) -> u8 {
    let total: u32 = milestones
        .iter()
        .filter(|(_, date)| date.is_some_and(|date| milestone_counts(date, as_of, policy)))
        .map(|(milestone, _)| u32::from(milestone.weight()))
        .sum();

    clamp_percentage(total)
}

/// Status tier for a percentage.
///
/// Lower bounds are inclusive and checked high-to-low, so 30 is `AtRisk`
/// and 29 is `Behind`. Input outside 0..=100 is clamped first.
pub fn progress_tier(percentage: i32) -> ProgressTier {
    let pct = percentage.clamp(0, i32::from(MAX_PROGRESS));

    if pct >= i32::from(COMPLETE_THRESHOLD) {
        ProgressTier::Complete
    } else if pct >= i32::from(NEAR_COMPLETE_THRESHOLD) {
        ProgressTier::NearComplete
    } else if pct >= i32::from(ON_TRACK_THRESHOLD) {
        ProgressTier::OnTrack
    } else if pct >= i32::from(AT_RISK_THRESHOLD) {
        ProgressTier::AtRisk
    } else {
        ProgressTier::Behind
    }
}

fn milestone_counts(date: NaiveDate, as_of: NaiveDate, policy: CountingPolicy) -> bool {
    match policy {
        CountingPolicy::WhenSet => true,
        CountingPolicy::WhenPassed => date <= as_of,
    }
}

fn clamp_percentage(total: u32) -> u8 {
    u8::try_from(total.min(u32::from(MAX_PROGRESS))).unwrap_or(MAX_PROGRESS)
}

/// Percentage plus tier for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectProgress {
    /// Weighted completion, 0..=100.
    pub percentage: u8,
    /// Tier the percentage falls into.
    pub tier: ProgressTier,
}

impl ProjectProgress {
    /// CSS color of the tier.
    pub const fn color_hex(&self) -> &'static str {
        self.tier.color_hex()
    }
}

/// Progress engine configured with a counting policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressEngine {
    policy: CountingPolicy,
}

impl ProgressEngine {
    /// Create an engine using `policy`.
    pub const fn new(policy: CountingPolicy) -> Self {
        Self { policy }
    }

    /// The configured counting policy.
    pub const fn policy(&self) -> CountingPolicy {
        self.policy
    }

    /// Completion percentage of `project` as of `as_of`.
    pub fn percentage(&self, project: &Project, as_of: NaiveDate) -> u8 {
        compute_progress(&project.milestones, as_of, self.policy)
    }

    /// Percentage and tier of `project` as of `as_of`.
    pub fn evaluate(&self, project: &Project, as_of: NaiveDate) -> ProjectProgress {
        let percentage = self.percentage(project, as_of);
        ProjectProgress { percentage, tier: progress_tier(i32::from(percentage)) }
    }
}

#[cfg(test)]
mod tests {
    use projboard_domain::{Milestone, ProjectType};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates_for_mask(mask: u8, on: NaiveDate) -> MilestoneDates {
        Milestone::ALL.iter().enumerate().fold(MilestoneDates::default(), |acc, (i, m)| {
            if mask & (1 << i) != 0 {
                acc.with(*m, on)
            } else {
                acc
            }
        })
    }

    #[test]
    fn every_subset_scores_the_sum_of_its_weights() {
        let today = date(2024, 6, 1);
        for mask in 0u8..32 {
            let expected: u32 = Milestone::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, m)| u32::from(m.weight()))
                .sum();
            let pct = compute_progress(&dates_for_mask(mask, today), today, CountingPolicy::WhenSet);
            assert_eq!(u32::from(pct), expected, "mask {mask:05b}");
            assert!(pct <= 100);
        }
    }

    #[test]
    fn empty_and_full_are_bounds() {
        let today = date(2024, 6, 1);
        assert_eq!(compute_progress(&MilestoneDates::default(), today, CountingPolicy::WhenSet), 0);
        assert_eq!(compute_progress(&dates_for_mask(0b11111, today), today, CountingPolicy::WhenSet), 100);
    }

    #[test]
    fn setting_a_date_never_lowers_progress() {
        let today = date(2024, 6, 1);
        for mask in 0u8..32 {
            let before = compute_progress(&dates_for_mask(mask, today), today, CountingPolicy::WhenSet);
            for bit in 0..5 {
                let after = compute_progress(
                    &dates_for_mask(mask | (1 << bit), today),
                    today,
                    CountingPolicy::WhenSet,
                );
                assert!(after >= before, "mask {mask:05b} bit {bit}");
            }
        }
    }

    #[test]
    fn when_passed_ignores_future_dates() {
        let today = date(2024, 6, 1);
        let dates = MilestoneDates::default()
            .with(Milestone::PartsArrival, date(2024, 5, 1))
            .with(Milestone::InstallationComplete, date(2024, 7, 1));

        assert_eq!(compute_progress(&dates, today, CountingPolicy::WhenSet), 70);
        assert_eq!(compute_progress(&dates, today, CountingPolicy::WhenPassed), 30);
    }

    #[test]
    fn when_passed_counts_the_reference_day_itself() {
        let today = date(2024, 6, 1);
        let dates = MilestoneDates::default().with(Milestone::TestingComplete, today);
        assert_eq!(compute_progress(&dates, today, CountingPolicy::WhenPassed), 10);
        assert_eq!(compute_progress(&dates, date(2024, 5, 31), CountingPolicy::WhenPassed), 0);
    }

    #[test]
    fn tier_boundaries() {
        let cases = [
            (-5, ProgressTier::Behind),
            (0, ProgressTier::Behind),
            (29, ProgressTier::Behind),
            (30, ProgressTier::AtRisk),
            (69, ProgressTier::AtRisk),
            (70, ProgressTier::OnTrack),
            (89, ProgressTier::OnTrack),
            (90, ProgressTier::NearComplete),
            (99, ProgressTier::NearComplete),
            (100, ProgressTier::Complete),
            (250, ProgressTier::Complete),
        ];
        for (pct, tier) in cases {
            assert_eq!(progress_tier(pct), tier, "pct {pct}");
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let today = date(2024, 6, 1);
        let mut project = Project::new("P-1", ProjectType::Enclosure, 2024, 1);
        project.milestones.set(Milestone::DeliveryComplete, Some(today));
        let engine = ProgressEngine::default();

        assert_eq!(engine.evaluate(&project, today), engine.evaluate(&project, today));
    }

    #[test]
    fn parts_arrival_alone_is_at_risk() {
        let today = date(2024, 6, 1);
        let mut project = Project::new("P-2", ProjectType::Scania, 2024, 2);
        project.milestones.set(Milestone::PartsArrival, Some(date(2024, 3, 1)));

        let progress = ProgressEngine::new(CountingPolicy::WhenSet).evaluate(&project, today);
        assert_eq!(progress.percentage, 30);
        assert_eq!(progress.tier, ProgressTier::AtRisk);
        assert_eq!(progress.color_hex(), "#FFB300");
    }
}
