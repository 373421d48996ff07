
use rule_rail::message::ViolationMessage;
use rule_rail::validated::Validated;
use rule_rail::violation::{Arg, Violation, Violations};

const BAD: ViolationMessage = ViolationMessage::new("bad", "\"{0}\" is bad");

fn bad(field: &str) -> Violation {
    Violation::of(field, &BAD, Arg::Null)
}

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Validated::valid(5);
    assert!(valid.is_valid());
    assert_eq!(valid.as_value(), Some(&5));
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Validated::<i32>::invalid_one(bad("x"));
    assert!(invalid.is_invalid());
    assert!(invalid.as_value().is_none());
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field_name(), "x");
}

#[test]
fn from_violations_only_builds_value_when_empty() {
    let mut built = false;
    let invalid = Validated::from_violations(Violations::from(bad("x")), || {
        built = true;
        1
    });
    assert!(invalid.is_invalid());
    assert!(!built);

    let valid = Validated::from_violations(Violations::new(), || 2);
    assert_eq!(valid.into_value(), Some(2));
}

#[test]
fn fold_takes_the_matching_branch() {
    let described = Validated::<i32>::invalid_one(bad("x"))
        .fold(|errors| format!("{} errors", errors.len()), |v| format!("value {v}"));
    assert_eq!(described, "1 errors");
}

#[test]
fn map_and_and_then_chain_success_values() {
    let result = Validated::valid(4)
        .map(|x| x * 2)
        .and_then(|x| if x == 8 { Validated::valid(x + 1) } else { Validated::invalid_one(bad("x")) });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn map_is_skipped_when_invalid() {
    let mut called = false;
    let result = Validated::<i32>::invalid_one(bad("x")).map(|x| {
        called = true;
        x
    });
    assert!(result.is_invalid());
    assert!(!called);
}

#[test]
fn map_errors_rewrites_violations() {
    let result = Validated::<i32>::invalid_one(bad("city")).map_errors(|errors| errors.with_prefix("address"));
    assert_eq!(result.errors().field_names(), vec!["address.city"]);
}

#[test]
fn or_else_recovers() {
    let recovered = Validated::<i32>::invalid_one(bad("x")).or_else(|_| Validated::valid(0));
    assert_eq!(recovered.into_value(), Some(0));
}

#[test]
fn zip_accumulates_both_sides() {
    let zipped = Validated::<i32>::invalid_one(bad("a")).zip(Validated::<&str>::invalid_one(bad("b")));
    assert_eq!(zipped.errors().field_names(), vec!["a", "b"]);

    let both = Validated::valid(1).zip(Validated::valid("one"));
    assert_eq!(both.into_value(), Some((1, "one")));
}

#[test]
fn into_result_and_back() {
    let result = Validated::<i32>::invalid_one(bad("x")).into_result();
    let errors = result.clone().unwrap_err();
    assert_eq!(errors.len(), 1);

    let back = Validated::from_result(result);
    assert!(back.is_invalid());
    assert_eq!(Validated::from(Ok::<_, Violations>(3)).into_value(), Some(3));
}

#[test]
fn ok_or_else_maps_into_caller_error() {
    #[derive(Debug, PartialEq)]
    struct Rejected(usize);

    let rejected = Validated::<i32>::invalid_one(bad("x")).ok_or_else(|errors| Rejected(errors.len()));
    assert_eq!(rejected, Err(Rejected(1)));
    assert_eq!(Validated::valid(5).ok_or_else(|errors| Rejected(errors.len())), Ok(5));
}

#[test]
fn violations_compose_with_question_mark() {
    fn parse(valid: bool) -> Result<i32, Box<dyn std::error::Error>> {
        let value = if valid {
            Validated::valid(1)
        } else {
            Validated::invalid_one(bad("x"))
        };
        Ok(value.into_result()?)
    }

    assert_eq!(parse(true).unwrap(), 1);
    assert_eq!(parse(false).unwrap_err().to_string(), "\"x\" is bad");
}

#[test]
#[should_panic]
fn value_panics_on_invalid() {
    let invalid = Validated::<i32>::invalid_one(bad("x"));
    let _ = invalid.value();
}

#[test]
#[should_panic]
fn errors_panics_on_valid() {
    let valid = Validated::valid(1);
    let _ = valid.errors();
}

#[test]
fn peek_only_sees_its_branch() {
    let mut seen = Vec::new();
    let _ = Validated::valid(1).peek(|v| seen.push(*v)).peek_errors(|_| seen.push(-1));
    let _ = Validated::<i32>::invalid_one(bad("x"))
        .peek(|v| seen.push(*v))
        .peek_errors(|e| seen.push(-(e.len() as i32)));
    assert_eq!(seen, vec![1, -1]);
}

#[test]
fn collecting_validated_accumulates_every_failure() {
    let items = vec![
        Validated::valid(10),
        Validated::invalid_one(bad("first")),
        Validated::valid(20),
        Validated::invalid_one(bad("second")),
    ];
    let collected: Validated<Vec<i32>> = items.into_iter().collect();
    assert_eq!(collected.errors().field_names(), vec!["first", "second"]);

    let all_valid: Validated<Vec<i32>> = vec![Validated::valid(1), Validated::valid(2)].into_iter().collect();
    assert_eq!(all_valid.into_value(), Some(vec![1, 2]));
}

#[test]
fn iterators_over_values_and_violations() {
    let valid = Validated::valid(3);
    assert_eq!(valid.iter().copied().collect::<Vec<_>>(), vec![3]);
    assert_eq!(valid.iter_errors().count(), 0);

    let invalid = Validated::<i32>::invalid(vec![bad("a"), bad("b")].into());
    assert_eq!(invalid.iter().count(), 0);
    let names: Vec<_> = invalid.iter_errors().map(|v| v.field_name().to_string()).collect();
    assert_eq!(names, vec!["a", "b"]);
}
