use crate::event::{DecodeError, decode, strip_delimiter};
use crate::identity::{EntityIdentity, EntityKind};
use pretty_assertions::assert_eq;

const LINE: &str = r#"{"function":"relations","part":"intersects","check":"box","outer_id":12,"outer_type":"area","inner_id":7,"inner_type":"way","duration_ns":1500,"result":true}"#;

#[test]
fn decodes_a_full_record() {
    // Act
    let event = decode(LINE.as_bytes()).unwrap();

    // Assert
    assert_eq!(event.function, "relations");
    assert_eq!(event.part, "intersects");
    assert_eq!(event.check, "box");
    assert_eq!(event.outer, EntityIdentity::way(6));
    assert_eq!(event.inner, EntityIdentity::way(7));
    assert_eq!(event.duration_ns, 1500);
    assert!(event.result);
}

#[test]
fn extra_fields_are_ignored() {
    let line = r#"{"function":"f","part":"p","check":"c","outer_id":1,"outer_type":"relation","inner_id":3,"inner_type":"area","duration_ns":0,"result":false,"thread":4}"#;

    let event = decode(line.as_bytes()).unwrap();

    assert_eq!(event.outer, EntityIdentity::relation(1));
    assert_eq!(event.inner, EntityIdentity::relation(1));
    assert!(!event.result);
}

#[test]
fn unknown_type_tag_still_decodes() {
    let line = r#"{"function":"f","part":"p","check":"c","outer_id":1,"outer_type":"node","inner_id":2,"inner_type":"way","duration_ns":5,"result":true}"#;

    let event = decode(line.as_bytes()).unwrap();

    assert_eq!(event.outer.kind, EntityKind::Other("node".to_string()));
}

#[test]
fn missing_field_is_malformed() {
    let line = r#"{"function":"f","part":"p","check":"c","outer_id":1,"outer_type":"way","inner_id":2,"inner_type":"way","result":true}"#;

    let err = decode(line.as_bytes()).unwrap_err();

    assert!(matches!(err, DecodeError::MalformedRecord { .. }));
}

#[test]
fn mistyped_or_negative_fields_are_malformed() {
    let wrong_type = r#"{"function":"f","part":"p","check":"c","outer_id":"1","outer_type":"way","inner_id":2,"inner_type":"way","duration_ns":5,"result":true}"#;
    let negative = r#"{"function":"f","part":"p","check":"c","outer_id":1,"outer_type":"way","inner_id":2,"inner_type":"way","duration_ns":-5,"result":true}"#;

    assert!(decode(wrong_type.as_bytes()).is_err());
    assert!(decode(negative.as_bytes()).is_err());
}

#[test]
fn truncated_json_is_malformed() {
    let truncated = &LINE.as_bytes()[..LINE.len() / 2];

    assert!(decode(truncated).is_err());
}

#[test]
fn strip_delimiter_removes_exactly_one_separator() {
    assert_eq!(strip_delimiter(b"{}\n"), b"{}");
    assert_eq!(strip_delimiter(b"{}\r\n"), b"{}");
    assert_eq!(strip_delimiter(b"{},\n"), b"{}");
    assert_eq!(strip_delimiter(b"{},,"), b"{},");
    assert_eq!(strip_delimiter(b"{}"), b"{}");
}

#[test]
fn decodes_record_with_trailing_separator() {
    let line = format!("{LINE},\n");

    let event = decode(strip_delimiter(line.as_bytes())).unwrap();

    assert_eq!(event.duration_ns, 1500);
}
