// Tests for JSON export of captures
use crate::serde::{captures_to_json, captures_to_json_string};
use crate::*;

#[test]
fn test_captures_to_json() {
    let caps = match_exact(
        &sequence(mark("x", literal_str("ab")), star(mark("y", char_range('0', '9')))),
        "ab12",
    )
    .unwrap();
    let json = captures_to_json(&caps).unwrap();
    assert_eq!(json, serde_json::json!({ "x": ["ab"], "y": ["1", "2"] }));
}

#[test]
fn test_captures_to_json_string() {
    let caps = Captures::single("x", "ab");
    assert_eq!(captures_to_json_string(&caps, false).unwrap(), r#"{"x":["ab"]}"#);
    assert_eq!(
        captures_to_json_string(&Captures::new(), false).unwrap(),
        "{}"
    );
    assert!(captures_to_json_string(&caps, true).unwrap().contains('\n'));
}
