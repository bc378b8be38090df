//! Diesel row structs. Internal to the persistence layer; repositories
//! convert them to domain types before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use super::schema::{admins, contact_submissions, employees, notifications, teacher_profiles};

// ---------------------------------------------------------------------------
// Employees and admins
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub employee_id: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub employee_id: &'a str,
    pub full_name: &'a str,
    pub password_hash: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = admins)]
pub(crate) struct NewAdminRow<'a> {
    pub employee_id: &'a str,
    pub role: &'a str,
}

// ---------------------------------------------------------------------------
// Teacher profiles
// ---------------------------------------------------------------------------

/// Full profile row. Used for reads, inserts and whole-row replacement, so
/// `None` writes `NULL` rather than skipping the column. Timestamps are left
/// to the database.
#[derive(Debug, Clone, Default, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = teacher_profiles)]
#[diesel(primary_key(employee_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TeacherProfileRow {
    pub employee_id: String,
    pub full_name: Option<String>,
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
    pub official_email: Option<String>,
    pub email: Option<String>,
    pub personal_email: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub address: Option<String>,
    pub communication_address: Option<String>,
    pub permanent_address: Option<String>,
    pub pan_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub orcid_id: Option<String>,
    pub scopus_id: Option<String>,
    pub vidwan_id: Option<String>,
    pub teaching_experience_years: Option<i32>,
    pub industry_experience_years: Option<i32>,
    pub research_experience_years: Option<i32>,
    pub education: Option<Value>,
    pub experience_teaching: Option<Value>,
    pub experience_admin: Option<Value>,
    pub publications: Option<Value>,
    pub projects: Option<Value>,
    pub awards: Option<Value>,
    pub events: Option<Value>,
    pub memberships: Option<Value>,
    pub student_interaction: Option<Value>,
    pub social_links: Option<Value>,
}

// ---------------------------------------------------------------------------
// Notifications and contact submissions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NotificationRow {
    pub id: Uuid,
    pub recipient_id: String,
    pub sender_id: String,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contact_submissions)]
pub(crate) struct NewContactSubmissionRow<'a> {
    pub id: Uuid,
    pub full_name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
