//! Project records
//!
//! A project is keyed by its `name`; everything else is mutable. Milestone
//! dates are independently nullable and deserialised leniently, so records
//! read from a store never fail on a malformed date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::progress::Milestone;
use crate::constants::{MAX_PROJECT_YEAR, MIN_PROJECT_YEAR};
use crate::errors::{ProjBoardError, Result};
use crate::utils::dates::lenient_date;
use crate::utils::values::{lenient_number, lenient_optional_text, lenient_text};

/// Product family a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ProjectType {
    Enclosure,
    OpenSet,
    Scania,
    Marine,
    K50G3,
}

crate::impl_domain_status_conversions!(ProjectType {
    Enclosure => "enclosure",
    OpenSet => "openset",
    Scania => "scania",
    Marine => "marine",
    K50G3 => "k50g3",
});

impl ProjectType {
    /// All project types.
    pub const ALL: [Self; 5] = [Self::Enclosure, Self::OpenSet, Self::Scania, Self::Marine, Self::K50G3];

    /// Display label as shown on the dashboard.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enclosure => "Enclosure",
            Self::OpenSet => "Open Set",
            Self::Scania => "Scania",
            Self::Marine => "Marine",
            Self::K50G3 => "K50G3",
        }
    }
}

impl TryFrom<String> for ProjectType {
    type Error = String;

    /// Accepts any casing and ignores spaces, dashes and underscores, so
    /// `"Open Set"`, `"open-set"` and `"OPENSET"` all parse.
    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let compact: String =
            value.chars().filter(|c| !matches!(c, ' ' | '-' | '_')).collect();
        compact.parse().map_err(|_| format!("Invalid ProjectType: {value}"))
    }
}

/// The five milestone dates read by the progress engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDates {
    #[serde(default, with = "lenient_date")]
    pub parts_arrival: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub installation_complete: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub testing_complete: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub cleaning_complete: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub delivery_complete: Option<NaiveDate>,
}

impl MilestoneDates {
    /// Date recorded for `milestone`, if any.
    pub const fn get(&self, milestone: Milestone) -> Option<NaiveDate> {
        match milestone {
            Milestone::PartsArrival => self.parts_arrival,
            Milestone::InstallationComplete => self.installation_complete,
            Milestone::TestingComplete => self.testing_complete,
            Milestone::CleaningComplete => self.cleaning_complete,
            Milestone::DeliveryComplete => self.delivery_complete,
        }
    }

    /// Record or clear the date for `milestone`.
    pub fn set(&mut self, milestone: Milestone, date: Option<NaiveDate>) {
        let slot = match milestone {
            Milestone::PartsArrival => &mut self.parts_arrival,
            Milestone::InstallationComplete => &mut self.installation_complete,
            Milestone::TestingComplete => &mut self.testing_complete,
            Milestone::CleaningComplete => &mut self.cleaning_complete,
            Milestone::DeliveryComplete => &mut self.delivery_complete,
        };
        *slot = date;
    }

    /// Builder-style variant of [`MilestoneDates::set`].
    #[must_use]
    pub fn with(mut self, milestone: Milestone, date: NaiveDate) -> Self {
        self.set(milestone, Some(date));
        self
    }

    /// Milestones paired with their dates, in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Milestone, Option<NaiveDate>)> + '_ {
        Milestone::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// One tracked manufacturing/engineering job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub name: String,
    #[serde(deserialize_with = "lenient_number::deserialize")]
    pub year: i32,
    /// Promised delivery date.
    #[serde(default, with = "lenient_date")]
    pub lead_time: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub customer: String,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub supervisor: String,
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub specification: String,
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub description: String,
    /// Free-text status hint, independent of computed progress.
    #[serde(default, deserialize_with = "lenient_optional_text::deserialize")]
    pub reminder_text: Option<String>,
    #[serde(flatten)]
    pub milestones: MilestoneDates,
}

impl Project {
    /// Create a project with the required fields; everything else empty.
    pub fn new(name: impl Into<String>, project_type: ProjectType, year: i32, quantity: u32) -> Self {
        Self {
            project_type,
            name: name.into(),
            year,
            lead_time: None,
            customer: String::new(),
            supervisor: String::new(),
            quantity,
            specification: String::new(),
            description: String::new(),
            reminder_text: None,
            milestones: MilestoneDates::default(),
        }
    }

    /// Validate the record before it is written to a store.
    ///
    /// # Errors
    /// Returns `ProjBoardError::InvalidInput` for a blank name, a zero
    /// quantity or a year outside the supported range.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProjBoardError::InvalidInput("project name must not be blank".into()));
        }
        if self.quantity == 0 {
            return Err(ProjBoardError::InvalidInput(format!(
                "project '{}': quantity must be a positive integer",
                self.name
            )));
        }
        if !(MIN_PROJECT_YEAR..=MAX_PROJECT_YEAR).contains(&self.year) {
            return Err(ProjBoardError::InvalidInput(format!(
                "project '{}': year {} outside {MIN_PROJECT_YEAR}..={MAX_PROJECT_YEAR}",
                self.name, self.year
            )));
        }
        Ok(())
    }
}
