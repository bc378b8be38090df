//! Behavioural coverage for the profile merge.

use super::*;
use crate::domain::teacher_profile::{EducationEntry, SocialLinks};
use crate::domain::EmployeeId;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

type MergeInput = (Employee, Option<TeacherProfile>, AdminSet);

#[fixture]
fn jane() -> Employee {
    Employee::try_from_strings("EMP001", "Jane").expect("valid employee")
}

fn admins_of(ids: &[&str]) -> AdminSet {
    ids.iter()
        .map(|id| EmployeeId::new(id).expect("valid id"))
        .collect()
}

fn with_program(program: &str) -> TeacherProfile {
    TeacherProfile {
        program: Some(program.to_owned()),
        ..TeacherProfile::default()
    }
}

#[given("an admin employee whose profile only has the legacy email")]
fn an_admin_with_a_legacy_profile() -> MergeInput {
    let profile = TeacherProfile {
        program: Some("CSE".into()),
        email: Some("jane@x.com".into()),
        ..TeacherProfile::default()
    };
    (jane(), Some(profile), admins_of(&["EMP001"]))
}

#[given("an employee who has not started onboarding")]
fn an_employee_without_a_profile() -> MergeInput {
    (jane(), None, AdminSet::default())
}

#[when("the records are merged")]
fn the_records_are_merged(input: MergeInput) -> Result<UserProfile, ProfileIncomplete> {
    let (employee, profile, admins) = input;
    merge_profile(&employee, profile.as_ref(), &admins)
}

#[then("the merged view falls back to the legacy email and flags the admin")]
fn the_view_uses_legacy_email_and_admin_flag(result: Result<UserProfile, ProfileIncomplete>) {
    let merged = result.expect("complete profile merges");
    assert_eq!(merged.official_email, "jane@x.com");
    assert!(merged.is_admin);
    assert_eq!(merged.education, Vec::<EducationEntry>::new());
    assert_eq!(merged.full_name, "Jane");
}

#[then("onboarding is required")]
fn onboarding_is_required(result: Result<UserProfile, ProfileIncomplete>) {
    assert_eq!(result, Err(ProfileIncomplete::Missing));
}

#[rstest]
fn merges_legacy_profile_for_admin() {
    let input = an_admin_with_a_legacy_profile();
    let result = the_records_are_merged(input);
    the_view_uses_legacy_email_and_admin_flag(result);
}

#[rstest]
fn missing_profile_requires_onboarding() {
    let input = an_employee_without_a_profile();
    let result = the_records_are_merged(input);
    onboarding_is_required(result);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn blank_program_is_incomplete(jane: Employee, #[case] program: Option<&str>) {
    let profile = TeacherProfile {
        program: program.map(str::to_owned),
        official_email: Some("jane@x.com".into()),
        ..TeacherProfile::default()
    };
    let result = merge_profile(&jane, Some(&profile), &AdminSet::default());
    assert_eq!(result, Err(ProfileIncomplete::ProgramMissing));
}

#[rstest]
fn every_list_defaults_to_empty(jane: Employee) {
    let merged = merge_profile(&jane, Some(&with_program("ECE")), &AdminSet::default())
        .expect("complete profile merges");

    assert!(merged.education.is_empty());
    assert!(merged.experience_teaching.is_empty());
    assert!(merged.experience_admin.is_empty());
    assert!(merged.publications.is_empty());
    assert!(merged.projects.is_empty());
    assert!(merged.awards.is_empty());
    assert!(merged.events.is_empty());
    assert!(merged.memberships.is_empty());
    assert_eq!(merged.social_links, SocialLinks::default());
    assert_eq!(merged.student_interaction.mentoring, "");
    assert_eq!(merged.teaching_experience_years, 0);
    assert_eq!(merged.phone, "");
    assert!(!merged.is_admin);
}

#[rstest]
#[case(Some("new@x.com"), Some("old@x.com"), "new@x.com")]
#[case(None, Some("old@x.com"), "old@x.com")]
#[case(Some("  "), Some("old@x.com"), "old@x.com")]
#[case(Some("new@x.com"), None, "new@x.com")]
#[case(None, None, "")]
fn official_email_prefers_the_split_field(
    jane: Employee,
    #[case] official: Option<&str>,
    #[case] legacy: Option<&str>,
    #[case] expected: &str,
) {
    let profile = TeacherProfile {
        official_email: official.map(str::to_owned),
        email: legacy.map(str::to_owned),
        ..with_program("CSE")
    };
    let merged =
        merge_profile(&jane, Some(&profile), &AdminSet::default()).expect("profile merges");
    assert_eq!(merged.official_email, expected);
}

#[rstest]
fn both_addresses_fall_back_to_the_legacy_address(jane: Employee) {
    let profile = TeacherProfile {
        address: Some("12 College Road".into()),
        permanent_address: Some("Home Town".into()),
        ..with_program("CSE")
    };
    let merged =
        merge_profile(&jane, Some(&profile), &AdminSet::default()).expect("profile merges");

    assert_eq!(merged.communication_address, "12 College Road");
    assert_eq!(merged.permanent_address, "Home Town");
}

#[rstest]
fn profile_name_wins_over_employee_name(jane: Employee) {
    let profile = TeacherProfile {
        full_name: Some("Dr. Jane Doe".into()),
        ..with_program("CSE")
    };
    let merged =
        merge_profile(&jane, Some(&profile), &AdminSet::default()).expect("profile merges");
    assert_eq!(merged.full_name, "Dr. Jane Doe");
    assert_eq!(merged.employee_id, "EMP001");
}

#[rstest]
fn merge_is_deterministic(jane: Employee) {
    let profile = TeacherProfile {
        publications: Some(vec![Default::default()]),
        ..with_program("MBA")
    };
    let admins = admins_of(&["EMP001"]);

    let first = merge_profile(&jane, Some(&profile), &admins);
    let second = merge_profile(&jane, Some(&profile), &admins);
    assert_eq!(first, second);
}
