use std::sync::Arc;

use rule_rail::traits::ResultExt;
use rule_rail::validated::Validated;
use rule_rail::value::{self, BoxValueValidator, ValueValidator};

use crate::common::{address_validator, in_range, not_blank, Address, Calls};

#[test]
fn from_fn_wraps_a_closure() {
    let age = in_range("age", 0, 150);
    assert_eq!(age.validate(30).into_value(), Some(30));
    let errors = age.validate(151).into_errors().unwrap();
    assert_eq!(errors[0].message(), "\"age\" must be between 0 and 150");
}

#[test]
fn pass_through_accepts_anything() {
    let any = value::pass_through::<Vec<u8>>();
    assert_eq!(any.validate(vec![1, 2]).into_value(), Some(vec![1, 2]));
}

#[test]
fn compose_pre_transforms_input() {
    let trimmed = not_blank("name").compose(|raw: &str| raw.trim().to_string());
    assert_eq!(trimmed.validate("  ada ").into_value(), Some("ada".to_string()));
    assert!(trimmed.validate("   ").is_invalid());
}

#[test]
fn compose_validated_reports_conversion_failures() {
    let age = in_range("age", 0, 150).compose_validated(|raw: &str| raw.parse::<i64>().into_validated("age"));

    assert_eq!(age.validate("42").into_value(), Some(42));

    let unparsable = age.validate("forty");
    assert_eq!(unparsable.errors().len(), 1);
    assert_eq!(unparsable.errors()[0].message_key(), "conversion");

    let out_of_range = age.validate("-1");
    assert_eq!(out_of_range.errors()[0].message_key(), "numeric.range");
}

#[test]
fn and_then_post_transforms_valid_output() {
    #[derive(Debug, PartialEq)]
    struct Age(i64);

    let age = in_range("age", 0, 150).and_then(Age);
    assert_eq!(age.validate(7).into_value(), Some(Age(7)));
    assert!(age.validate(-7).is_invalid());
}

#[test]
fn and_then_skips_transform_on_invalid_input() {
    let calls = Calls::default();
    let doubled = in_range("n", 0, 10).and_then(|n| {
        calls.record();
        n * 2
    });

    let rejected = doubled.validate(11);
    assert_eq!(rejected.errors().field_names(), vec!["n"]);
    assert_eq!(calls.count(), 0);

    assert_eq!(doubled.validate(4).into_value(), Some(8));
    assert_eq!(calls.count(), 1);
}

#[test]
fn then_chains_validators() {
    let even = value::from_fn(|n: i64| {
        if n % 2 == 0 {
            Validated::valid(n / 2)
        } else {
            Validated::invalid_one(rule_rail::violation::Violation::of(
                "half",
                &rule_rail::message::ViolationMessage::new("even", "\"{0}\" must be even"),
                rule_rail::violation::Arg::from(n),
            ))
        }
    });
    let halved = in_range("n", 0, 100).then(even);
    assert_eq!(halved.validate(42).into_value(), Some(21));
    assert_eq!(halved.validate(41).errors().field_names(), vec!["half"]);
    assert_eq!(halved.validate(1000).errors().field_names(), vec!["n"]);
}

#[test]
fn object_validator_is_a_value_validator() {
    let address = address_validator();
    let good = Address { street: "1 Main".into(), city: "Rome".into() };
    let bad = Address { street: String::new(), city: "Rome".into() };

    assert_eq!(ValueValidator::validate(&address, good.clone()).into_value(), Some(good));
    assert_eq!(address.validated(bad).errors().field_names(), vec!["street"]);
}

#[test]
fn lift_vec_prefixes_each_index() {
    let names = not_blank("").lift_vec("names");
    let result = names.validate(vec!["a".into(), " ".into(), "c".into(), "".into()]);
    assert_eq!(result.errors().field_names(), vec!["names[1]", "names[3]"]);

    assert_eq!(names.validate(Vec::new()).into_value(), Some(Vec::new()));
}

#[test]
fn lift_option_passes_none() {
    let nickname = not_blank("nickname").lift_option();
    assert_eq!(nickname.validate(None).into_value(), Some(None));
    assert!(nickname.validate(Some(" ".into())).is_invalid());
}

#[test]
fn boxed_and_shared_validators_still_validate() {
    let boxed: BoxValueValidator<i64, i64> = in_range("n", 1, 9).boxed();
    assert!(boxed.validate(5).is_valid());

    let shared = Arc::new(in_range("n", 1, 9));
    let by_ref = &shared;
    assert!(by_ref.validate(10).is_invalid());
    assert!(shared.validate(1).is_valid());
}
