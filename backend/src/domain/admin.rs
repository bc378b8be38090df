//! Administrator membership.
//!
//! A row in the admin store marks an employee as an administrator; the role
//! string is informational and defaults to [`AdminRole::DEFAULT`].

use std::collections::BTreeSet;

use super::EmployeeId;

/// Role label stored next to an admin membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRole(String);

impl AdminRole {
    pub const DEFAULT: &'static str = "admin";

    /// Build a role, falling back to [`Self::DEFAULT`] when blank.
    pub fn new(role: impl AsRef<str>) -> Self {
        let trimmed = role.as_ref().trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_owned())
        }
    }
}

impl Default for AdminRole {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl AsRef<str> for AdminRole {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Set of employee identifiers that hold admin membership.
///
/// # Examples
/// ```
/// use backend::domain::{AdminSet, EmployeeId};
///
/// let admin = EmployeeId::new("EMP001").unwrap();
/// let admins: AdminSet = [admin.clone()].into_iter().collect();
/// assert!(admins.contains(&admin));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSet(BTreeSet<EmployeeId>);

impl AdminSet {
    pub fn contains(&self, employee_id: &EmployeeId) -> bool {
        self.0.contains(employee_id)
    }

    pub fn insert(&mut self, employee_id: EmployeeId) -> bool {
        self.0.insert(employee_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeId> {
        self.0.iter()
    }
}

impl FromIterator<EmployeeId> for AdminSet {
    fn from_iter<I: IntoIterator<Item = EmployeeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "admin")]
    #[case("  ", "admin")]
    #[case(" principal ", "principal")]
    fn blank_roles_fall_back_to_default(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(AdminRole::new(raw).as_ref(), expected);
    }

    #[rstest]
    fn membership_is_case_insensitive_through_employee_id() {
        let admins: AdminSet = [EmployeeId::new("emp001").expect("valid id")]
            .into_iter()
            .collect();
        assert!(admins.contains(&EmployeeId::new("EMP001").expect("valid id")));
        assert!(!admins.contains(&EmployeeId::new("EMP002").expect("valid id")));
        assert_eq!(admins.len(), 1);
    }
}
