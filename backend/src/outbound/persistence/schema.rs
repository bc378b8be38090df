//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Login identities. `employee_id` is stored upper-cased.
    employees (employee_id) {
        employee_id -> Varchar,
        full_name -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per administrator.
    admins (employee_id) {
        employee_id -> Varchar,
        role -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Sparse teacher profile; lists and nested objects are JSONB documents.
    teacher_profiles (employee_id) {
        employee_id -> Varchar,
        full_name -> Nullable<Text>,
        program -> Nullable<Text>,
        designation -> Nullable<Text>,
        department -> Nullable<Text>,
        date_of_joining -> Nullable<Text>,
        date_of_birth -> Nullable<Text>,
        gender -> Nullable<Text>,
        blood_group -> Nullable<Text>,
        nationality -> Nullable<Text>,
        highest_qualification -> Nullable<Text>,
        specialization -> Nullable<Text>,
        about -> Nullable<Text>,
        photo_url -> Nullable<Text>,
        official_email -> Nullable<Text>,
        email -> Nullable<Text>,
        personal_email -> Nullable<Text>,
        phone -> Nullable<Text>,
        alternate_phone -> Nullable<Text>,
        address -> Nullable<Text>,
        communication_address -> Nullable<Text>,
        permanent_address -> Nullable<Text>,
        pan_number -> Nullable<Text>,
        aadhaar_number -> Nullable<Text>,
        orcid_id -> Nullable<Text>,
        scopus_id -> Nullable<Text>,
        vidwan_id -> Nullable<Text>,
        teaching_experience_years -> Nullable<Int4>,
        industry_experience_years -> Nullable<Int4>,
        research_experience_years -> Nullable<Int4>,
        education -> Nullable<Jsonb>,
        experience_teaching -> Nullable<Jsonb>,
        experience_admin -> Nullable<Jsonb>,
        publications -> Nullable<Jsonb>,
        projects -> Nullable<Jsonb>,
        awards -> Nullable<Jsonb>,
        events -> Nullable<Jsonb>,
        memberships -> Nullable<Jsonb>,
        student_interaction -> Nullable<Jsonb>,
        social_links -> Nullable<Jsonb>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per recipient; broadcasts are fanned out on insert.
    notifications (id) {
        id -> Uuid,
        recipient_id -> Varchar,
        sender_id -> Varchar,
        title -> Text,
        message -> Text,
        #[sql_name = "type"]
        kind -> Text,
        is_read -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Archived contact form messages.
    contact_submissions (id) {
        id -> Uuid,
        full_name -> Text,
        email -> Text,
        message -> Text,
        status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(admins -> employees (employee_id));
diesel::joinable!(teacher_profiles -> employees (employee_id));

diesel::allow_tables_to_appear_in_same_query!(
    admins,
    contact_submissions,
    employees,
    notifications,
    teacher_profiles,
);
