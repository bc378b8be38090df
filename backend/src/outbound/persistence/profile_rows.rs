//! Conversion between [`TeacherProfile`] and its table row.
//!
//! Scalars map column for column. Lists and nested objects are JSONB; a
//! document that no longer decodes is reported with its column name rather
//! than silently dropped.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::ports::TeacherProfileRepositoryError;
use crate::domain::{EmployeeId, TeacherProfile};

use super::models::TeacherProfileRow;

type RowResult<T> = Result<T, TeacherProfileRepositoryError>;

fn encode<T: Serialize>(field: &'static str, value: Option<&T>) -> RowResult<Option<Value>> {
    value
        .map(serde_json::to_value)
        .transpose()
        .map_err(|err| TeacherProfileRepositoryError::document(field, err.to_string()))
}

fn decode<T: DeserializeOwned>(field: &'static str, value: Option<Value>) -> RowResult<Option<T>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(document) => serde_json::from_value(document)
            .map(Some)
            .map_err(|err| TeacherProfileRepositoryError::document(field, err.to_string())),
    }
}

fn years_to_db(field: &'static str, years: Option<u32>) -> RowResult<Option<i32>> {
    years
        .map(i32::try_from)
        .transpose()
        .map_err(|_| TeacherProfileRepositoryError::document(field, "value out of range"))
}

fn years_from_db(field: &'static str, years: Option<i32>) -> RowResult<Option<u32>> {
    years
        .map(u32::try_from)
        .transpose()
        .map_err(|_| TeacherProfileRepositoryError::document(field, "negative year count"))
}

/// Row for `employee_id` carrying every field of `profile`.
pub(crate) fn profile_to_row(
    employee_id: &EmployeeId,
    profile: &TeacherProfile,
) -> RowResult<TeacherProfileRow> {
    let p = profile.clone();
    Ok(TeacherProfileRow {
        employee_id: employee_id.as_ref().to_owned(),
        teaching_experience_years: years_to_db(
            "teachingExperienceYears",
            p.teaching_experience_years,
        )?,
        industry_experience_years: years_to_db(
            "industryExperienceYears",
            p.industry_experience_years,
        )?,
        research_experience_years: years_to_db(
            "researchExperienceYears",
            p.research_experience_years,
        )?,
        education: encode("education", p.education.as_ref())?,
        experience_teaching: encode("experienceTeaching", p.experience_teaching.as_ref())?,
        experience_admin: encode("experienceAdmin", p.experience_admin.as_ref())?,
        publications: encode("publications", p.publications.as_ref())?,
        projects: encode("projects", p.projects.as_ref())?,
        awards: encode("awards", p.awards.as_ref())?,
        events: encode("events", p.events.as_ref())?,
        memberships: encode("memberships", p.memberships.as_ref())?,
        student_interaction: encode("studentInteraction", p.student_interaction.as_ref())?,
        social_links: encode("socialLinks", p.social_links.as_ref())?,
        full_name: p.full_name,
        program: p.program,
        designation: p.designation,
        department: p.department,
        date_of_joining: p.date_of_joining,
        date_of_birth: p.date_of_birth,
        gender: p.gender,
        blood_group: p.blood_group,
        nationality: p.nationality,
        highest_qualification: p.highest_qualification,
        specialization: p.specialization,
        about: p.about,
        photo_url: p.photo_url,
        official_email: p.official_email,
        email: p.email,
        personal_email: p.personal_email,
        phone: p.phone,
        alternate_phone: p.alternate_phone,
        address: p.address,
        communication_address: p.communication_address,
        permanent_address: p.permanent_address,
        pan_number: p.pan_number,
        aadhaar_number: p.aadhaar_number,
        orcid_id: p.orcid_id,
        scopus_id: p.scopus_id,
        vidwan_id: p.vidwan_id,
    })
}

/// Owner and profile decoded from a stored row.
pub(crate) fn row_to_profile(row: TeacherProfileRow) -> RowResult<(EmployeeId, TeacherProfile)> {
    let employee_id = EmployeeId::new(&row.employee_id).map_err(|err| {
        TeacherProfileRepositoryError::query(format!("stored employee id is invalid: {err}"))
    })?;
    let profile = TeacherProfile {
        teaching_experience_years: years_from_db(
            "teachingExperienceYears",
            row.teaching_experience_years,
        )?,
        industry_experience_years: years_from_db(
            "industryExperienceYears",
            row.industry_experience_years,
        )?,
        research_experience_years: years_from_db(
            "researchExperienceYears",
            row.research_experience_years,
        )?,
        education: decode("education", row.education)?,
        experience_teaching: decode("experienceTeaching", row.experience_teaching)?,
        experience_admin: decode("experienceAdmin", row.experience_admin)?,
        publications: decode("publications", row.publications)?,
        projects: decode("projects", row.projects)?,
        awards: decode("awards", row.awards)?,
        events: decode("events", row.events)?,
        memberships: decode("memberships", row.memberships)?,
        student_interaction: decode("studentInteraction", row.student_interaction)?,
        social_links: decode("socialLinks", row.social_links)?,
        full_name: row.full_name,
        program: row.program,
        designation: row.designation,
        department: row.department,
        date_of_joining: row.date_of_joining,
        date_of_birth: row.date_of_birth,
        gender: row.gender,
        blood_group: row.blood_group,
        nationality: row.nationality,
        highest_qualification: row.highest_qualification,
        specialization: row.specialization,
        about: row.about,
        photo_url: row.photo_url,
        official_email: row.official_email,
        email: row.email,
        personal_email: row.personal_email,
        phone: row.phone,
        alternate_phone: row.alternate_phone,
        address: row.address,
        communication_address: row.communication_address,
        permanent_address: row.permanent_address,
        pan_number: row.pan_number,
        aadhaar_number: row.aadhaar_number,
        orcid_id: row.orcid_id,
        scopus_id: row.scopus_id,
        vidwan_id: row.vidwan_id,
    };
    Ok((employee_id, profile))
}
