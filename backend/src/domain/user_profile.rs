//! Normalised profile view served to the profile page and admin dashboard.
//!
//! Built only by [`crate::domain::profile_merge::merge_profile`]. Every field
//! is concrete: strings default to `""`, counters to `0`, lists to `[]` and
//! nested objects to empty-leaf objects, so consumers never see `null`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::teacher_profile::{
    AdminExperience, Award, EducationEntry, Event, Membership, Project, Publication, SocialLinks,
    StudentInteraction, TeachingExperience,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    pub is_admin: bool,

    #[schema(example = "CSE")]
    pub program: String,
    pub designation: String,
    pub department: String,
    pub date_of_joining: String,
    pub date_of_birth: String,
    pub gender: String,
    pub blood_group: String,
    pub nationality: String,
    pub highest_qualification: String,
    pub specialization: String,
    pub about: String,
    pub photo_url: String,

    #[schema(example = "jane@college.edu")]
    pub official_email: String,
    pub personal_email: String,
    pub phone: String,
    pub alternate_phone: String,

    pub communication_address: String,
    pub permanent_address: String,

    pub pan_number: String,
    pub aadhaar_number: String,
    pub orcid_id: String,
    pub scopus_id: String,
    pub vidwan_id: String,

    pub teaching_experience_years: u32,
    pub industry_experience_years: u32,
    pub research_experience_years: u32,

    pub education: Vec<EducationEntry>,
    pub experience_teaching: Vec<TeachingExperience>,
    pub experience_admin: Vec<AdminExperience>,
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub awards: Vec<Award>,
    pub events: Vec<Event>,
    pub memberships: Vec<Membership>,

    pub student_interaction: StudentInteraction,
    pub social_links: SocialLinks,
}
