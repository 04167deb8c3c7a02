//! Tests for the Department record

use bstseq::domain::Department;

#[test]
fn given_department_when_serialized_then_uses_camel_case_fields() {
    let dept = Department::new(Some(7), "Research");
    let toml = toml::to_string(&dept).unwrap();

    assert!(toml.contains("id = 7"), "{toml}");
    assert!(toml.contains("departmentName = \"Research\""), "{toml}");
}

#[test]
fn given_record_without_id_when_deserialized_then_id_is_none() {
    let dept: Department = toml::from_str("departmentName = \"Legal\"\n").unwrap();

    assert_eq!(dept.id(), None);
    assert_eq!(dept.department_name(), "Legal");
    assert_eq!(dept.to_string(), "Department{id=null, departmentName='Legal'}");
}

#[test]
fn given_equal_fields_when_compared_then_equal() {
    assert_eq!(
        Department::new(Some(1), "HR"),
        Department::default().with_id(Some(1)).with_department_name("HR")
    );
}
