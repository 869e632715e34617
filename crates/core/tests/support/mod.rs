//! Shared test helpers for `projboard-core` integration tests.
//!
//! These helpers provide fixtures and in-memory store mocks so that service
//! tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod repositories;

use chrono::NaiveDate;
use projboard_domain::{Milestone, Project, ProjectType};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// A project with only the required fields set.
pub fn project(name: &str, project_type: ProjectType, quantity: u32) -> Project {
    Project::new(name, project_type, 2024, quantity)
}

/// A project with the given milestones dated `on`.
pub fn project_with_milestones(name: &str, milestones: &[Milestone], on: NaiveDate) -> Project {
    let mut project = project(name, ProjectType::Enclosure, 1);
    for milestone in milestones {
        project.milestones.set(*milestone, Some(on));
    }
    project
}
