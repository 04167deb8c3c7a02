//! Department record shared with the web layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An organisational department.
///
/// Plain value type: fields are set at construction and replaced through the
/// by-value `with_*` updaters. Identity semantics belong to whatever store
/// assigns the `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    id: Option<i32>,
    department_name: String,
}

impl Department {
    pub fn new(id: Option<i32>, department_name: impl Into<String>) -> Self {
        Self {
            id,
            department_name: department_name.into(),
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn department_name(&self) -> &str {
        &self.department_name
    }

    #[must_use]
    pub fn with_id(self, id: Option<i32>) -> Self {
        Self { id, ..self }
    }

    #[must_use]
    pub fn with_department_name(self, department_name: impl Into<String>) -> Self {
        Self {
            department_name: department_name.into(),
            ..self
        }
    }
}

/// `Department{id=<id>, departmentName='<name>'}`, with `null` for a missing id.
impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Department{{id={}, ", id)?,
            None => write!(f, "Department{{id=null, ")?,
        }
        write!(f, "departmentName='{}'}}", self.department_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_department_when_displayed_then_matches_record_format() {
        let dept = Department::new(Some(101), "Finance");
        assert_eq!(dept.to_string(), "Department{id=101, departmentName='Finance'}");
    }

    #[test]
    fn given_missing_id_when_displayed_then_prints_null() {
        let dept = Department::new(None, "Ops");
        assert_eq!(dept.to_string(), "Department{id=null, departmentName='Ops'}");
    }

    #[test]
    fn given_default_department_when_displayed_then_fields_are_empty() {
        assert_eq!(
            Department::default().to_string(),
            "Department{id=null, departmentName=''}"
        );
    }

    #[test]
    fn given_department_when_updated_then_original_fields_kept() {
        let dept = Department::new(Some(1), "Sales").with_id(Some(2));
        assert_eq!(dept.id(), Some(2));
        assert_eq!(dept.department_name(), "Sales");

        let renamed = dept.with_department_name("Marketing");
        assert_eq!(renamed.id(), Some(2));
        assert_eq!(renamed.department_name(), "Marketing");
    }
}
