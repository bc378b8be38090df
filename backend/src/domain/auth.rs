//! Authentication primitives: login credentials, signup requests and stored
//! password hashes.
//!
//! Inbound payload parsing stays outside the domain; handlers call these
//! constructors before talking to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::{EmployeeId, EmployeeValidationError, FullName};

/// Minimum accepted password length at signup.
pub const PASSWORD_MIN: usize = 8;
/// Maximum accepted password length at signup.
pub const PASSWORD_MAX: usize = 128;

/// Domain error returned when authentication payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Employee id or full name failed validation.
    Employee(EmployeeValidationError),
    /// Password was blank.
    EmptyPassword,
    /// Password shorter than [`PASSWORD_MIN`].
    PasswordTooShort { min: usize },
    /// Password longer than [`PASSWORD_MAX`].
    PasswordTooLong { max: usize },
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::PasswordTooLong { max } => {
                write!(f, "password must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for CredentialValidationError {}

impl From<EmployeeValidationError> for CredentialValidationError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Employee(value)
    }
}

impl CredentialValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Employee(err) => err.field(),
            _ => "password",
        }
    }

    /// Stable machine-readable code for inline form errors.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Employee(err) => err.code(),
            Self::EmptyPassword => "empty",
            Self::PasswordTooShort { .. } => "too_short",
            Self::PasswordTooLong { .. } => "too_long",
        }
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `employee_id` is a normalised [`EmployeeId`].
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("emp001", "s3cret-pass").unwrap();
/// assert_eq!(creds.employee_id().as_ref(), "EMP001");
/// assert_eq!(creds.password(), "s3cret-pass");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    employee_id: EmployeeId,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw employee id and password inputs.
    pub fn try_from_parts(
        employee_id: &str,
        password: &str,
    ) -> Result<Self, CredentialValidationError> {
        let employee_id = EmployeeId::new(employee_id)?;
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }
        Ok(Self {
            employee_id,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Plaintext password that satisfies the signup length policy.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(Zeroizing<String>);

impl NewPassword {
    pub fn new(password: &str) -> Result<Self, CredentialValidationError> {
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }
        let length = password.chars().count();
        if length < PASSWORD_MIN {
            return Err(CredentialValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        if length > PASSWORD_MAX {
            return Err(CredentialValidationError::PasswordTooLong { max: PASSWORD_MAX });
        }
        Ok(Self(Zeroizing::new(password.to_owned())))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewPassword(..)")
    }
}

/// Self-service signup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub employee_id: EmployeeId,
    pub full_name: FullName,
    pub password: NewPassword,
    /// Opt-in admin membership requested at signup.
    pub request_admin: bool,
}

impl SignupRequest {
    pub fn try_from_parts(
        employee_id: &str,
        full_name: &str,
        password: &str,
        request_admin: bool,
    ) -> Result<Self, CredentialValidationError> {
        Ok(Self {
            employee_id: EmployeeId::new(employee_id)?,
            full_name: FullName::new(full_name)?,
            password: NewPassword::new(password)?,
            request_admin,
        })
    }
}

/// Stored credential digest (PHC string, e.g. `$argon2id$v=19$...`).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
