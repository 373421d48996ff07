use rule_rail::message::{CatalogMessageFormatter, MessageFormatter, SimpleMessageFormatter, ViolationMessage};
use rule_rail::violation::{Arg, Violation};

use crate::common::{person, person_validator};

#[test]
fn messages_are_rendered_on_demand() {
    let violations = person_validator().validate(&person("", 20, ""));
    assert_eq!(
        violations.messages(),
        vec!["\"name\" must not be blank", "\"address.city\" must not be blank"]
    );
}

#[test]
fn catalog_overrides_by_key_and_locale() {
    let catalog = CatalogMessageFormatter::new()
        .with_template(Some("fr"), "charSequence.notBlank", "« {0} » ne doit pas être vide")
        .with_template(None, "charSequence.notBlank", "{0} is blank");

    let violations = person_validator().validate(&person("", 20, "Paris"));
    assert_eq!(violations.messages_with(&catalog, Some("fr")), vec!["« name » ne doit pas être vide"]);
    assert_eq!(violations.messages_with(&catalog, Some("de")), vec!["name is blank"]);
    assert_eq!(violations[0].message_with(&catalog, None), "name is blank");
}

#[test]
fn catalog_falls_back_to_default_template() {
    let catalog = CatalogMessageFormatter::new();
    let violation = Violation::of("id", &ViolationMessage::NOT_NULL, Arg::Null);
    assert_eq!(violation.message_with(&catalog, Some("ko")), "\"id\" must not be null");
}

#[test]
fn custom_formatter_sees_key_and_args() {
    struct KeyOnly;

    impl MessageFormatter for KeyOnly {
        fn format(&self, key: &str, _template: &str, args: &[Arg], _locale: Option<&str>) -> String {
            format!("{key}:{}", args.len())
        }
    }

    let violation = Violation::of("id", &ViolationMessage::IS_NULL, Arg::UInt(4));
    assert_eq!(violation.message_with(&KeyOnly, None), "object.isNull:2");
    assert_eq!(violation.message_with(&SimpleMessageFormatter, None), "\"id\" must be null");
}

#[test]
fn owned_messages_and_template_override() {
    let message = ViolationMessage::owned(String::from("custom.key"), String::from("{0}: custom"));
    let violation = Violation::of("field", &message.with_template("{0} replaced"), Arg::Null);
    assert_eq!(violation.message_key(), "custom.key");
    assert_eq!(violation.message(), "field replaced");
}
