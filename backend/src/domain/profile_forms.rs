//! Validation of onboarding submissions and profile edits.
//!
//! Both forms travel as a [`TeacherProfile`] document. Validation failures are
//! reported per field so the UI can render them inline.

use super::teacher_profile::present;
use super::{FieldError, TeacherProfile};

/// Longest value accepted for any single-line text field.
pub const PROFILE_TEXT_MAX: usize = 500;
/// Longest free-form `about` text.
pub const ABOUT_MAX: usize = 5000;

fn required(field: &'static str, value: &Option<String>) -> Result<(), FieldError> {
    present(value).map(|_| ()).ok_or(FieldError {
        field,
        code: "required",
    })
}

fn email_shaped(field: &'static str, value: &Option<String>) -> Result<(), FieldError> {
    match present(value) {
        Some(email) if !email.contains('@') => Err(FieldError {
            field,
            code: "invalid_email",
        }),
        _ => Ok(()),
    }
}

fn bounded(
    field: &'static str,
    value: &Option<String>,
    max: usize,
) -> Result<(), FieldError> {
    match value {
        Some(text) if text.chars().count() > max => Err(FieldError {
            field,
            code: "too_long",
        }),
        _ => Ok(()),
    }
}

fn check_lengths(profile: &TeacherProfile) -> Result<(), FieldError> {
    let single_line = [
        ("fullName", &profile.full_name),
        ("program", &profile.program),
        ("designation", &profile.designation),
        ("department", &profile.department),
        ("officialEmail", &profile.official_email),
        ("personalEmail", &profile.personal_email),
        ("phone", &profile.phone),
        ("alternatePhone", &profile.alternate_phone),
        ("communicationAddress", &profile.communication_address),
        ("permanentAddress", &profile.permanent_address),
        ("photoUrl", &profile.photo_url),
    ];
    for (field, value) in single_line {
        bounded(field, value, PROFILE_TEXT_MAX)?;
    }
    bounded("about", &profile.about, ABOUT_MAX)
}

/// Onboarding wizard submission.
///
/// Required steps: `program`, `designation`, `department`, `officialEmail`
/// and `phone`. Everything else is optional. Legacy `email`/`address` values
/// are discarded so new rows only use the split fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSubmission(TeacherProfile);

impl OnboardingSubmission {
    pub fn try_new(profile: TeacherProfile) -> Result<Self, FieldError> {
        required("program", &profile.program)?;
        required("designation", &profile.designation)?;
        required("department", &profile.department)?;
        required("officialEmail", &profile.official_email)?;
        email_shaped("officialEmail", &profile.official_email)?;
        required("phone", &profile.phone)?;
        email_shaped("personalEmail", &profile.personal_email)?;
        check_lengths(&profile)?;
        Ok(Self(profile.without_legacy_fields()))
    }

    pub fn into_profile(self) -> TeacherProfile {
        self.0
    }
}

/// Partial profile edit; only supplied fields change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate(TeacherProfile);

impl ProfileUpdate {
    pub fn try_new(patch: TeacherProfile) -> Result<Self, FieldError> {
        if patch.program.is_some() {
            required("program", &patch.program)?;
        }
        if patch.official_email.is_some() {
            email_shaped("officialEmail", &patch.official_email)?;
        }
        email_shaped("personalEmail", &patch.personal_email)?;
        check_lengths(&patch)?;
        Ok(Self(patch.without_legacy_fields()))
    }

    pub fn into_patch(self) -> TeacherProfile {
        self.0
    }
}
