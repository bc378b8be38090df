//! Stored teacher profile record.
//!
//! The record is sparse: every scalar is optional and lists or nested objects
//! may be missing entirely. Older rows carry the legacy `email` and `address`
//! columns instead of the split contact/address fields. The merge in
//! `profile_merge` reads through to them; edits retire them once the matching
//! split field is written.

mod sections;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use self::sections::{
    AdminExperience, Award, EducationEntry, Event, Membership, Project, Publication, SocialLinks,
    StudentInteraction, TeachingExperience,
};

/// Trimmed, non-empty view of an optional string field.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Teacher profile as persisted, keyed externally by employee id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TeacherProfile {
    // Identity
    pub full_name: Option<String>,
    #[schema(example = "CSE")]
    pub program: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub date_of_joining: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub nationality: Option<String>,
    pub highest_qualification: Option<String>,
    pub specialization: Option<String>,
    pub about: Option<String>,
    pub photo_url: Option<String>,

    // Contact
    pub official_email: Option<String>,
    /// Legacy single email column, superseded by `official_email`.
    pub email: Option<String>,
    pub personal_email: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,

    // Address
    /// Legacy single address column, superseded by the split fields.
    pub address: Option<String>,
    pub communication_address: Option<String>,
    pub permanent_address: Option<String>,

    // Government and researcher identifiers
    pub pan_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub vidwan_id: Option<String>,

    pub teaching_experience_years: Option<u32>,
    pub industry_experience_years: Option<u32>,
    pub research_experience_years: Option<u32>,

    pub education: Option<Vec<EducationEntry>>,
    pub experience_teaching: Option<Vec<TeachingExperience>>,
    pub experience_admin: Option<Vec<AdminExperience>>,
    pub publications: Option<Vec<Publication>>,
    pub projects: Option<Vec<Project>>,
    pub awards: Option<Vec<Award>>,
    pub events: Option<Vec<Event>>,
    pub memberships: Option<Vec<Membership>>,

    pub student_interaction: Option<StudentInteraction>,
    pub social_links: Option<SocialLinks>,
}

macro_rules! overlay_fields {
    ($target:expr, $patch:expr; $($field:ident),* $(,)?) => {
        $(
            if $patch.$field.is_some() {
                $target.$field = $patch.$field;
            }
        )*
    };
}

impl TeacherProfile {
    /// Minimal record written when an admin creates an employee.
    pub fn stub(full_name: &str, program: Option<&str>) -> Self {
        Self {
            full_name: Some(full_name.to_owned()),
            program: program.map(str::to_owned),
            ..Self::default()
        }
    }

    /// A profile is complete once `program` is set to a non-blank value.
    pub fn is_complete(&self) -> bool {
        present(&self.program).is_some()
    }

    /// Replace every field that `patch` supplies; absent fields are kept.
    ///
    /// Lists and nested objects are replaced wholesale, never merged. Writing
    /// a split field retires its legacy counterpart so a blank value stays
    /// blank on read: `official_email` clears `email`, and either address
    /// clears `address` after copying it into the address the patch leaves
    /// untouched.
    pub fn apply_patch(&mut self, patch: TeacherProfile) {
        if patch.official_email.is_some() && patch.email.is_none() {
            self.email = None;
        }
        let writes_communication = patch.communication_address.is_some();
        let writes_permanent = patch.permanent_address.is_some();
        if (writes_communication || writes_permanent) && patch.address.is_none() {
            if let Some(legacy) = self.address.take().filter(|a| !a.trim().is_empty()) {
                if !writes_communication && present(&self.communication_address).is_none() {
                    self.communication_address = Some(legacy.clone());
                }
                if !writes_permanent && present(&self.permanent_address).is_none() {
                    self.permanent_address = Some(legacy);
                }
            }
        }
        overlay_fields!(self, patch;
            full_name, program, designation, department, date_of_joining,
            date_of_birth, gender, blood_group, nationality, highest_qualification,
            specialization, about, photo_url,
            official_email, email, personal_email, phone, alternate_phone,
            address, communication_address, permanent_address,
            pan_number, aadhaar_number, orcid_id, scopus_id, vidwan_id,
            teaching_experience_years, industry_experience_years, research_experience_years,
            education, experience_teaching, experience_admin, publications, projects,
            awards, events, memberships,
            student_interaction, social_links,
        );
    }

    /// Drop the legacy `email`/`address` columns so writes only populate the
    /// split fields.
    #[must_use]
    pub fn without_legacy_fields(mut self) -> Self {
        self.email = None;
        self.address = None;
        self
    }
}
