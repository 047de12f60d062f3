//! Tests for Student and StudentPatch
//!
//! Tests verify:
//! - Construction and accessors
//! - Id-only equality
//! - Aligned single-line rendering
//! - Sentinel-based patches

use studentdb::record::{Student, StudentPatch, UNCHANGED_NUMBER};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample() -> Student {
    Student::new(20210001, "张三", 20, "男", "计算机科学", 3.8)
}

// =============================================================================
// Student Tests
// =============================================================================

#[test]
fn test_accessors_return_constructed_values() {
    let s = sample();

    assert_eq!(s.id(), 20210001);
    assert_eq!(s.name(), "张三");
    assert_eq!(s.age(), 20);
    assert_eq!(s.gender(), "男");
    assert_eq!(s.major(), "计算机科学");
    assert_eq!(s.gpa(), 3.8);
}

#[test]
fn test_setters_change_only_their_field() {
    let mut s = sample();

    s.set_gpa(3.95);
    s.set_major("数据科学");

    assert_eq!(s.gpa(), 3.95);
    assert_eq!(s.major(), "数据科学");
    assert_eq!(s.name(), "张三");
    assert_eq!(s.age(), 20);
}

#[test]
fn test_equality_ignores_non_id_fields() {
    let a = sample();
    let mut b = sample();
    b.set_name("李四");
    b.set_gpa(1.0);

    assert_eq!(a, b);
    assert!(!a.same_fields(&b));

    b.set_id(20210002);
    assert_ne!(a, b);
}

#[test]
fn test_display_shows_all_fields_on_one_line() {
    let s = Student::new(7, "Ada", 36, "F", "Mathematics", 4.0);
    let line = s.to_string();

    assert_eq!(
        line,
        "ID:        7 | Name:        Ada | Age:  36 | Gender:    F | Major:     Mathematics | GPA: 4.00"
    );
}

#[test]
fn test_display_rounds_gpa_to_two_decimals() {
    let s = Student::new(1, "A", 20, "F", "CS", 3.14159);
    assert!(s.to_string().ends_with("GPA: 3.14"));
}

// =============================================================================
// Patch Tests
// =============================================================================

#[test]
fn test_sentinels_leave_fields_unchanged() {
    let patch = StudentPatch::from_sentinels("", UNCHANGED_NUMBER, "", "", -1.0);

    assert!(patch.is_empty());

    let mut s = sample();
    patch.apply_to(&mut s);
    assert!(s.same_fields(&sample()));
}

#[test]
fn test_sentinel_patch_changes_only_given_fields() {
    let patch = StudentPatch::from_sentinels("", 21, "", "软件工程", -1.0);

    assert_eq!(patch.name, None);
    assert_eq!(patch.age, Some(21));
    assert_eq!(patch.major.as_deref(), Some("软件工程"));
    assert_eq!(patch.gpa, None);

    let mut s = sample();
    patch.apply_to(&mut s);

    assert_eq!(s.name(), "张三");
    assert_eq!(s.age(), 21);
    assert_eq!(s.gender(), "男");
    assert_eq!(s.major(), "软件工程");
    assert_eq!(s.gpa(), 3.8);
}

#[test]
fn test_builder_style_patch() {
    let patch = StudentPatch::default().name("王五").gpa(3.6);

    assert!(!patch.is_empty());

    let mut s = sample();
    patch.apply_to(&mut s);
    assert_eq!(s.name(), "王五");
    assert_eq!(s.gpa(), 3.6);
    assert_eq!(s.id(), 20210001);
}
