//! Employee identity primitives.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`EmployeeId`] and [`FullName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyEmployeeId,
    EmployeeIdTooLong { max: usize },
    EmployeeIdInvalidCharacters,
    EmptyFullName,
    FullNameTooLong { max: usize },
}

impl fmt::Display for EmployeeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmployeeId => write!(f, "employee id must not be empty"),
            Self::EmployeeIdTooLong { max } => {
                write!(f, "employee id must be at most {max} characters")
            }
            Self::EmployeeIdInvalidCharacters => write!(
                f,
                "employee id may only contain letters, numbers, hyphens, or underscores",
            ),
            Self::EmptyFullName => write!(f, "full name must not be empty"),
            Self::FullNameTooLong { max } => {
                write!(f, "full name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for EmployeeValidationError {}

impl EmployeeValidationError {
    /// Request field the error refers to, in wire (camelCase) form.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmployeeId
            | Self::EmployeeIdTooLong { .. }
            | Self::EmployeeIdInvalidCharacters => "employeeId",
            Self::EmptyFullName | Self::FullNameTooLong { .. } => "fullName",
        }
    }

    /// Stable machine-readable code for inline form errors.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyEmployeeId | Self::EmptyFullName => "empty",
            Self::EmployeeIdTooLong { .. } | Self::FullNameTooLong { .. } => "too_long",
            Self::EmployeeIdInvalidCharacters => "invalid_characters",
        }
    }
}

/// Maximum length of an employee identifier.
pub const EMPLOYEE_ID_MAX: usize = 32;
/// Maximum length of a full name.
pub const FULL_NAME_MAX: usize = 120;

static EMPLOYEE_ID_RE: OnceLock<Regex> = OnceLock::new();

fn employee_id_regex() -> &'static Regex {
    EMPLOYEE_ID_RE.get_or_init(|| {
        Regex::new("^[A-Za-z0-9_-]+$")
            .unwrap_or_else(|error| panic!("employee id regex failed to compile: {error}"))
    })
}

/// Natural key of an employee, e.g. `EMP001`.
///
/// Input is trimmed and upper-cased so `emp001` and `EMP001` address the same
/// record.
///
/// # Examples
/// ```
/// use backend::domain::EmployeeId;
///
/// let id = EmployeeId::new("  emp001 ").unwrap();
/// assert_eq!(id.as_ref(), "EMP001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and normalise an employee identifier.
    pub fn new(id: impl AsRef<str>) -> Result<Self, EmployeeValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmployeeValidationError::EmptyEmployeeId);
        }
        if trimmed.chars().count() > EMPLOYEE_ID_MAX {
            return Err(EmployeeValidationError::EmployeeIdTooLong {
                max: EMPLOYEE_ID_MAX,
            });
        }
        if !employee_id_regex().is_match(trimmed) {
            return Err(EmployeeValidationError::EmployeeIdInvalidCharacters);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = EmployeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of an employee as entered at signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    /// Validate a full name, trimming surrounding whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self, EmployeeValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmployeeValidationError::EmptyFullName);
        }
        if trimmed.chars().count() > FULL_NAME_MAX {
            return Err(EmployeeValidationError::FullNameTooLong { max: FULL_NAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FullName {
    type Error = EmployeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Employee record as exposed to the domain. The password hash never leaves
/// the persistence adapter through this type.
///
/// ## Invariants
/// - `employee_id` is upper-cased and matches `[A-Z0-9_-]{1,32}`.
/// - `full_name` is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(value_type = String, example = "EMP001")]
    employee_id: EmployeeId,
    #[schema(value_type = String, example = "Jane Doe")]
    full_name: FullName,
}

impl Employee {
    pub fn new(employee_id: EmployeeId, full_name: FullName) -> Self {
        Self {
            employee_id,
            full_name,
        }
    }

    /// Build an employee from unvalidated strings.
    pub fn try_from_strings(
        employee_id: impl AsRef<str>,
        full_name: impl AsRef<str>,
    ) -> Result<Self, EmployeeValidationError> {
        Ok(Self::new(
            EmployeeId::new(employee_id)?,
            FullName::new(full_name)?,
        ))
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }
}
