//! `define_port_error!`: error enums for driven ports.
//!
//! Each variant carries named fields and a display template. The macro
//! derives `thiserror::Error` and adds a snake_case constructor per variant
//! whose parameters take `impl Into<FieldType>`, so adapters can write
//! `EmployeeRepositoryError::connection(err.to_string())` or pass a `&str`.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),+ },
            )+
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $($field : $ty,)+);
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::ports::{
        EmployeeRepositoryError, MailerError, TeacherProfileRepositoryError,
    };

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = EmployeeRepositoryError::duplicate_employee_id("EMP001");
        assert_eq!(
            err,
            EmployeeRepositoryError::DuplicateEmployeeId {
                employee_id: "EMP001".to_owned()
            }
        );
        assert_eq!(err.to_string(), "employee EMP001 already exists");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        let err = MailerError::rejected(422_u16, "unknown sender");
        assert!(matches!(err, MailerError::Rejected { status: 422, .. }));
        assert_eq!(
            err.to_string(),
            "mail API rejected the message with status 422: unknown sender"
        );
    }

    #[test]
    fn constructor_parameters_follow_field_order() {
        let err = TeacherProfileRepositoryError::document("education", "expected array");
        assert_eq!(
            err.to_string(),
            "profile document `education` is malformed: expected array"
        );
    }
}
