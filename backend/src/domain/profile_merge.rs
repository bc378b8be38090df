//! Profile merge: the single place that reconciles the employee record, the
//! sparse teacher profile and admin membership into a [`UserProfile`].
//!
//! The function is pure. It performs no I/O, reads no clock and yields the
//! same output for the same inputs, so callers may invoke it per request or
//! per directory row without caching.

use std::fmt;

use super::teacher_profile::present;
use super::{AdminSet, Employee, TeacherProfile, UserProfile};

/// Why a profile cannot be rendered yet; callers route to onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileIncomplete {
    /// No teacher profile row exists for the employee.
    Missing,
    /// The row exists but `program` is absent or blank.
    ProgramMissing,
}

impl fmt::Display for ProfileIncomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "teacher profile has not been created"),
            Self::ProgramMissing => write!(f, "teacher profile has no program"),
        }
    }
}

impl std::error::Error for ProfileIncomplete {}

fn text(value: &Option<String>) -> String {
    present(value).map(str::to_owned).unwrap_or_default()
}

fn first_present(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .find_map(|candidate| present(candidate))
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Best contact address for a profile: `official_email`, then legacy
/// `email`.
///
/// Also usable on incomplete profiles, e.g. when emailing an employee who has
/// not finished onboarding.
pub fn contact_email(profile: &TeacherProfile) -> Option<&str> {
    present(&profile.official_email).or_else(|| present(&profile.email))
}

/// Merge the stored records for one employee.
///
/// Field precedence:
/// - `official_email`: `official_email`, then legacy `email`.
/// - `communication_address` and `permanent_address`: the split field, then
///   legacy `address`.
/// - `full_name`: profile, then employee record.
///
/// A value counts as present only when it is non-blank after trimming, so a
/// blank new field falls through to its legacy counterpart.
///
/// # Examples
/// ```
/// use backend::domain::{merge_profile, AdminSet, Employee, TeacherProfile};
///
/// let employee = Employee::try_from_strings("EMP001", "Jane").unwrap();
/// let profile = TeacherProfile {
///     program: Some("CSE".into()),
///     email: Some("jane@x.com".into()),
///     ..TeacherProfile::default()
/// };
/// let admins: AdminSet = [employee.employee_id().clone()].into_iter().collect();
///
/// let merged = merge_profile(&employee, Some(&profile), &admins).unwrap();
/// assert_eq!(merged.official_email, "jane@x.com");
/// assert!(merged.is_admin);
/// assert!(merged.education.is_empty());
/// ```
pub fn merge_profile(
    employee: &Employee,
    profile: Option<&TeacherProfile>,
    admins: &AdminSet,
) -> Result<UserProfile, ProfileIncomplete> {
    let profile = profile.ok_or(ProfileIncomplete::Missing)?;
    let program = present(&profile.program).ok_or(ProfileIncomplete::ProgramMissing)?;

    let full_name = present(&profile.full_name)
        .unwrap_or_else(|| employee.full_name().as_ref())
        .to_owned();

    Ok(UserProfile {
        employee_id: employee.employee_id().to_string(),
        full_name,
        is_admin: admins.contains(employee.employee_id()),

        program: program.to_owned(),
        designation: text(&profile.designation),
        department: text(&profile.department),
        date_of_joining: text(&profile.date_of_joining),
        date_of_birth: text(&profile.date_of_birth),
        gender: text(&profile.gender),
        blood_group: text(&profile.blood_group),
        nationality: text(&profile.nationality),
        highest_qualification: text(&profile.highest_qualification),
        specialization: text(&profile.specialization),
        about: text(&profile.about),
        photo_url: text(&profile.photo_url),

        official_email: contact_email(profile).map(str::to_owned).unwrap_or_default(),
        personal_email: text(&profile.personal_email),
        phone: text(&profile.phone),
        alternate_phone: text(&profile.alternate_phone),

        communication_address: first_present(&[&profile.communication_address, &profile.address]),
        permanent_address: first_present(&[&profile.permanent_address, &profile.address]),

        pan_number: text(&profile.pan_number),
        aadhaar_number: text(&profile.aadhaar_number),
        orcid_id: text(&profile.orcid_id),
        scopus_id: text(&profile.scopus_id),
        vidwan_id: text(&profile.vidwan_id),

        teaching_experience_years: profile.teaching_experience_years.unwrap_or_default(),
        industry_experience_years: profile.industry_experience_years.unwrap_or_default(),
        research_experience_years: profile.research_experience_years.unwrap_or_default(),

        education: profile.education.clone().unwrap_or_default(),
        experience_teaching: profile.experience_teaching.clone().unwrap_or_default(),
        experience_admin: profile.experience_admin.clone().unwrap_or_default(),
        publications: profile.publications.clone().unwrap_or_default(),
        projects: profile.projects.clone().unwrap_or_default(),
        awards: profile.awards.clone().unwrap_or_default(),
        events: profile.events.clone().unwrap_or_default(),
        memberships: profile.memberships.clone().unwrap_or_default(),

        student_interaction: profile.student_interaction.clone().unwrap_or_default(),
        social_links: profile.social_links.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests;
