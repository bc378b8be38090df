//! Sub-documents embedded in a teacher profile.
//!
//! Every leaf is a string and defaults to `""` when absent from the stored
//! document, so partially filled entries decode without loss.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the education history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[schema(example = "M.Tech")]
    pub degree: String,
    pub institution: String,
    pub specialization: String,
    #[schema(example = "2014")]
    pub year: String,
    pub grade: String,
}

/// Teaching appointment held at an institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TeachingExperience {
    pub institution: String,
    pub designation: String,
    pub from: String,
    pub to: String,
    pub subjects: String,
}

/// Administrative responsibility (head of department, coordinator, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminExperience {
    pub role: String,
    pub institution: String,
    pub from: String,
    pub to: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub authors: String,
    /// Journal or conference name.
    pub venue: String,
    pub year: String,
    pub doi: String,
    /// `journal`, `conference`, `book chapter`, ...
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub funding_agency: String,
    pub amount: String,
    pub role: String,
    pub status: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Award {
    pub title: String,
    pub awarded_by: String,
    pub year: String,
    pub description: String,
}

/// Workshop, seminar or conference attended or organised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub role: String,
    pub organiser: String,
    pub date: String,
    pub description: String,
}

/// Professional body membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Membership {
    pub organisation: String,
    pub membership_type: String,
    pub membership_id: String,
    pub since: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentInteraction {
    pub mentoring: String,
    pub guest_lectures: String,
    pub industrial_visits: String,
    pub student_projects: String,
    pub counselling: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinks {
    pub linkedin: String,
    pub google_scholar: String,
    pub research_gate: String,
    pub website: String,
    pub github: String,
}
