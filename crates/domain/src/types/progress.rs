//! Progress vocabulary: milestones, weights, tiers and counting policy
//!
//! The arithmetic lives in `projboard-core`; this module only defines the
//! fixed tables the arithmetic reads.

use serde::{Deserialize, Serialize};

use crate::constants::{
    COLOR_AT_RISK, COLOR_BEHIND, COLOR_COMPLETE, COLOR_NEAR_COMPLETE, COLOR_ON_TRACK,
};

// ============================================================================
// Milestones
// ============================================================================

/// One of the five fixed milestones tracked on every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    PartsArrival,
    InstallationComplete,
    TestingComplete,
    CleaningComplete,
    DeliveryComplete,
}

crate::impl_domain_status_conversions!(Milestone {
    PartsArrival => "parts_arrival",
    InstallationComplete => "installation_complete",
    TestingComplete => "testing_complete",
    CleaningComplete => "cleaning_complete",
    DeliveryComplete => "delivery_complete",
});

impl Milestone {
    /// All milestones in their fixed evaluation order.
    pub const ALL: [Self; 5] = [
        Self::PartsArrival,
        Self::InstallationComplete,
        Self::TestingComplete,
        Self::CleaningComplete,
        Self::DeliveryComplete,
    ];

    /// Progress weight contributed when this milestone counts.
    ///
    /// The five weights sum to exactly 100.
    pub const fn weight(self) -> u8 {
        match self {
            Self::PartsArrival => 30,
            Self::InstallationComplete => 40,
            Self::TestingComplete | Self::CleaningComplete | Self::DeliveryComplete => 10,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PartsArrival => "Parts Arrival",
            Self::InstallationComplete => "Installation Complete",
            Self::TestingComplete => "Testing Complete",
            Self::CleaningComplete => "Cleaning Complete",
            Self::DeliveryComplete => "Delivery Complete",
        }
    }
}

// ============================================================================
// Counting policy
// ============================================================================

/// When a milestone date starts counting toward progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingPolicy {
    /// A milestone counts as soon as its date is recorded.
    #[default]
    WhenSet,
    /// A milestone counts once its date is on or before the reference date.
    WhenPassed,
}

crate::impl_domain_status_conversions!(CountingPolicy {
    WhenSet => "when_set",
    WhenPassed => "when_passed",
});

// ============================================================================
// Tiers
// ============================================================================

/// Discrete status tier derived from a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    /// 100%
    Complete,
    /// 90-99%
    NearComplete,
    /// 70-89%
    OnTrack,
    /// 30-69%
    AtRisk,
    /// Below 30%
    Behind,
}

crate::impl_domain_status_conversions!(ProgressTier {
    Complete => "complete",
    NearComplete => "near_complete",
    OnTrack => "on_track",
    AtRisk => "at_risk",
    Behind => "behind",
});

impl ProgressTier {
    /// CSS hex color used to paint the tier.
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Complete => COLOR_COMPLETE,
            Self::NearComplete => COLOR_NEAR_COMPLETE,
            Self::OnTrack => COLOR_ON_TRACK,
            Self::AtRisk => COLOR_AT_RISK,
            Self::Behind => COLOR_BEHIND,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::NearComplete => "Near complete",
            Self::OnTrack => "On track",
            Self::AtRisk => "At risk",
            Self::Behind => "Behind",
        }
    }
}

// ============================================================================
// Checklist status
// ============================================================================

/// Tri-state completion status of a project's checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    /// No real (non-blank) items.
    Empty,
    /// Every item has a matching done entry.
    AllDone,
    /// At least one item lacks a matching done entry.
    Missing,
}

crate::impl_domain_status_conversions!(ChecklistStatus {
    Empty => "empty",
    AllDone => "all_done",
    Missing => "missing",
});
