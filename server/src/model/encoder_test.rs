use super::*;

#[test]
fn classes_are_sorted_and_unique() {
    let enc = LabelEncoder::new(["Male", "Female", "Male", "Other"]);
    assert_eq!(enc.classes(), ["Female", "Male", "Other"]);
    assert_eq!(enc.len(), 3);
    assert!(!enc.is_empty());
}

#[test]
fn transform_returns_sorted_index() {
    let enc = LabelEncoder::new(["PhD", "Bachelor's", "Master's"]);
    assert_eq!(enc.transform("Bachelor's"), Some(0));
    assert_eq!(enc.transform("Master's"), Some(1));
    assert_eq!(enc.transform("PhD"), Some(2));
}

#[test]
fn transform_is_exact_match() {
    let enc = LabelEncoder::new(["Male", "Female"]);
    assert_eq!(enc.transform("male"), None);
    assert_eq!(enc.transform(" Male"), None);
    assert_eq!(enc.transform(""), None);
}

#[test]
fn classes_display_quotes_like_a_list_literal() {
    let enc = LabelEncoder::new(["Male", "Female"]);
    assert_eq!(enc.classes_display(), "['Female', 'Male']");

    let enc = LabelEncoder::new(["PhD", "Bachelor's"]);
    assert_eq!(enc.classes_display(), "[\"Bachelor's\", 'PhD']");
}

#[test]
fn empty_encoder_displays_empty_list() {
    let enc = LabelEncoder::new(Vec::<String>::new());
    assert!(enc.is_empty());
    assert_eq!(enc.classes_display(), "[]");
}
