pub mod fail_fast;
pub mod groups;

use rule_rail::message::ViolationMessage;
use rule_rail::validator::Validator;
use rule_rail::violation::{Arg, ToArg};
use rule_rail::args;

use crate::common::{person, person_validator, MAX, NOT_BLANK};

#[test]
fn valid_object_produces_no_violations() {
    let violations = person_validator().validate(&person("Ada", 36, "London"));
    assert!(violations.is_valid());
    assert!(person_validator().validated(person("Ada", 36, "London")).is_valid());
}

#[test]
fn collect_all_reports_every_violation_in_declaration_order() {
    let violations = person_validator().validate(&person(" ", 200, ""));
    assert_eq!(violations.field_names(), vec!["name", "age", "address.city"]);
    assert_eq!(violations[1].message(), "\"age\" must be between 0 and 150");
    assert_eq!(violations[1].violated_value(), &Arg::Int(200));
}

#[test]
fn predicates_on_one_field_run_in_order() {
    struct Code {
        value: String,
    }

    let validator = Validator::<Code>::builder()
        .constraint("value", |c| &c.value, |c| {
            c.predicate(|s| !s.is_empty(), NOT_BLANK)
                .predicate_with_args(|s| s.len() <= 3, MAX, |_| args![3])
                .predicate(
                    |s| s.chars().all(|ch| ch.is_ascii_uppercase()),
                    ViolationMessage::new("code.upper", "\"{0}\" must be upper case"),
                )
        })
        .build();

    let violations = validator.validate(&Code { value: "abcd".into() });
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].message_key(), "numeric.max");
    assert_eq!(violations[1].message_key(), "code.upper");
}

#[test]
fn message_override_keeps_key() {
    struct Tag {
        label: String,
    }

    let validator = Validator::<Tag>::builder()
        .constraint("label", |t| &t.label, |c| c.predicate(|s| !s.is_empty(), NOT_BLANK).message("{0} is required"))
        .build();

    let violations = validator.validate(&Tag { label: String::new() });
    assert_eq!(violations[0].message_key(), "charSequence.notBlank");
    assert_eq!(violations[0].message(), "label is required");
}

#[test]
fn constraint_if_present_skips_none() {
    struct Profile {
        nickname: Option<String>,
    }

    let validator = Validator::<Profile>::builder()
        .constraint_if_present("nickname", |p| p.nickname.as_ref(), |c| {
            c.predicate(|s| !s.trim().is_empty(), NOT_BLANK)
        })
        .build();

    assert!(validator.validate(&Profile { nickname: None }).is_valid());
    assert!(validator.validate(&Profile { nickname: Some("ace".into()) }).is_valid());
    assert_eq!(validator.validate(&Profile { nickname: Some(" ".into()) }).field_names(), vec!["nickname"]);
}

#[test]
fn not_null_and_is_null_use_builtin_messages() {
    struct Entity {
        id: Option<u64>,
        deleted_at: Option<u64>,
    }

    let validator = Validator::<Entity>::builder()
        .constraint("id", |e| &e.id, |c| c.not_null())
        .constraint("deletedAt", |e| &e.deleted_at, |c| c.is_null())
        .build();

    let violations = validator.validate(&Entity { id: None, deleted_at: Some(9) });
    assert_eq!(violations.messages(), vec!["\"id\" must not be null", "\"deletedAt\" must be null"]);
    assert_eq!(violations[0].violated_value(), &Arg::Null);
    assert_eq!(violations[1].violated_value(), &Arg::UInt(9));
}

#[test]
fn constraint_on_target_sees_the_whole_object() {
    const ORDERED: ViolationMessage = ViolationMessage::new("range.ordered", "\"{0}\" must start before it ends: {1}");

    #[derive(Debug)]
    struct Window {
        start: u32,
        end: u32,
    }

    impl ToArg for Window {
        fn to_arg(&self) -> Arg {
            Arg::debug(self)
        }
    }

    let validator = Validator::<Window>::builder()
        .constraint_on_target("window", |c| {
            c.predicate_with_args(|w| w.start < w.end, ORDERED, |w| args![format!("{}..{}", w.start, w.end)])
        })
        .build();

    assert!(validator.validate(&Window { start: 1, end: 2 }).is_valid());
    let violations = validator.validate(&Window { start: 5, end: 2 });
    assert_eq!(violations[0].message(), "\"window\" must start before it ends: 5..2");
    assert_eq!(violations[0].violated_value(), &Arg::Debug("Window { start: 5, end: 2 }".into()));
}

#[test]
fn validating_twice_gives_equal_results() {
    let validator = person_validator();
    let target = person("", -1, "");
    assert_eq!(validator.validate(&target), validator.validate(&target));
}

#[test]
fn validator_is_shared_across_threads() {
    let validator = person_validator();
    let people = [person("", 1, "Paris"), person("Bo", 300, "Oslo"), person("Cy", 30, "")];

    let results: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = people
            .iter()
            .map(|p| {
                let validator = &validator;
                scope.spawn(move || {
                    validator
                        .validate(p)
                        .field_names()
                        .into_iter()
                        .map(String::from)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![vec!["name".to_string()], vec!["age".to_string()], vec!["address.city".to_string()]]);
}

#[test]
fn validator_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Validator<crate::common::Person>>();
}
