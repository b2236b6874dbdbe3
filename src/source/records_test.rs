use super::*;
use serde_json::json;

fn none() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn test_single_text_field() {
    let records = vec![json!({"id": 1, "name": "Apple"}), json!({"id": 2, "name": "Banana"})];
    let text = TextField::parse("name").unwrap();

    let options = records_to_options(&records, "id", &text, &none()).unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].value, "1");
    assert_eq!(options[0].text, "Apple");
    assert!(!options[0].selected);
}

#[test]
fn test_composite_text_field_joined_by_space() {
    let records = vec![json!({"id": "u1", "first": "Ada", "last": "Lovelace"})];
    let text = TextField::parse("first:last").unwrap();

    let options = records_to_options(&records, "id", &text, &none()).unwrap();

    assert_eq!(options[0].text, "Ada Lovelace");
}

#[test]
fn test_missing_text_field_is_empty_segment() {
    let records = vec![json!({"id": "u1", "first": "Ada"})];
    let text = TextField::parse("first:last").unwrap();

    let options = records_to_options(&records, "id", &text, &none()).unwrap();

    assert_eq!(options[0].text, "Ada ");
}

#[test]
fn test_missing_value_field_is_error() {
    let records = vec![json!({"id": 1, "name": "Apple"}), json!({"name": "Banana"})];
    let text = TextField::parse("name").unwrap();

    let err = records_to_options(&records, "id", &text, &none()).unwrap_err();

    assert!(matches!(err, DlbError::InvalidRecord { index: 1, .. }));
}

#[test]
fn test_non_object_record_is_error() {
    let records = vec![json!("Apple")];
    let text = TextField::parse("name").unwrap();

    assert!(records_to_options(&records, "id", &text, &none()).is_err());
}

#[test]
fn test_preselected_subset() {
    let records = vec![
        json!({"id": 1, "name": "Apple"}),
        json!({"id": 2, "name": "Banana"}),
        json!({"id": 3, "name": "cherry"}),
    ];
    let text = TextField::parse("name").unwrap();
    let preselected: HashSet<String> = ["2".to_string()].into_iter().collect();

    let options = records_to_options(&records, "id", &text, &preselected).unwrap();

    let selected: Vec<&str> = options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.text.as_str())
        .collect();
    assert_eq!(selected, vec!["Banana"]);
}

#[test]
fn test_bool_and_number_text_stringified() {
    let records = vec![json!({"id": 7, "name": 3.5, "ripe": true})];
    let text = TextField::parse("name:ripe").unwrap();

    let options = records_to_options(&records, "id", &text, &none()).unwrap();

    assert_eq!(options[0].text, "3.5 true");
}
