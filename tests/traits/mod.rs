use rule_rail::message::ViolationMessage;
use rule_rail::traits::{OptionExt, ResultExt};
use rule_rail::validated::Merge;
use rule_rail::violation::{Arg, Violation};

#[test]
fn into_validated_keeps_error_text() {
    let parsed = "12x".parse::<i32>().into_validated("count");
    let violation = &parsed.errors()[0];
    assert_eq!(violation.field_name(), "count");
    assert_eq!(violation.message_key(), "conversion");
    assert_eq!(violation.violated_value(), &Arg::from("invalid digit found in string"));
    assert_eq!(
        violation.message(),
        "\"count\" could not be converted: invalid digit found in string"
    );

    assert_eq!("12".parse::<i32>().into_validated("count").into_value(), Some(12));
}

#[test]
fn into_validated_as_uses_given_message() {
    const PORT: ViolationMessage = ViolationMessage::new("net.port", "\"{0}\" is not a port ({1})");
    let port = "99999".parse::<u16>().into_validated_as("port", &PORT);
    assert_eq!(port.errors()[0].message(), "\"port\" is not a port (number too large to fit in target type)");
}

#[test]
fn into_validated_with_builds_custom_violation() {
    let result: Result<u8, &str> = Err("missing");
    let checked = result.into_validated_with(|e| Violation::of("flag", &ViolationMessage::NOT_NULL, Arg::from(e)));
    assert_eq!(checked.errors()[0].violated_value(), &Arg::from("missing"));
}

#[test]
fn required_accumulates_with_other_results() {
    let merged = (None::<u8>.required("width"), "x".parse::<u8>().into_validated("height")).merge();
    assert_eq!(merged.errors().field_names(), vec!["width", "height"]);
    assert_eq!(merged.errors()[0].message(), "\"width\" must not be null");
}
