use rule_rail::validator::Validator;

use crate::common::{
    address_validator, item, item_validator, person, person_validator, Order, Person, NOT_BLANK, NOT_EMPTY,
};

#[test]
fn fail_fast_stops_at_first_violation() {
    let validator = person_validator().with_fail_fast(true);
    let violations = validator.validate(&person("", 999, ""));
    assert_eq!(violations.field_names(), vec!["name"]);
}

#[test]
fn fail_fast_result_is_prefix_of_collect_all() {
    let target = person(" ", -3, "");
    let all = person_validator().validate(&target);
    let first = person_validator().with_fail_fast(true).validate(&target);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0], all[0]);
}

#[test]
fn fail_fast_applies_inside_nested_validators() {
    let validator = Validator::<Person>::builder()
        .nest("address", |p| &p.address, address_validator())
        .constraint("name", |p| &p.name, |c| c.predicate(|s| !s.is_empty(), NOT_BLANK))
        .fail_fast(true)
        .build();

    let mut target = person("", 1, "");
    target.address.street = String::new();
    assert_eq!(validator.validate(&target).field_names(), vec!["address.street"]);
}

#[test]
fn fail_fast_applies_inside_for_each() {
    let validator = Validator::<Order>::builder()
        .for_each("items", |o| &o.items, item_validator())
        .fail_fast(true)
        .build();

    let order = Order {
        id: None,
        items: vec![item("a", 1), item("", 0), item("", 0)],
    };
    assert_eq!(validator.validate(&order).field_names(), vec!["items[1].sku"]);
}

#[test]
fn fail_fast_child_only_truncates_its_own_subtree() {
    let validator = Validator::<Order>::builder()
        .for_each("items", |o| &o.items, item_validator().with_fail_fast(true))
        .constraint("items", |o| &o.items, |c| c.predicate(|items| items.len() < 3, NOT_EMPTY))
        .build();

    let order = Order {
        id: None,
        items: vec![item("", 0), item("", 0), item("ok", 1)],
    };
    assert_eq!(
        validator.validate(&order).field_names(),
        vec!["items[0].sku", "items[1].sku", "items"]
    );
}

#[test]
fn collect_all_is_the_default() {
    let validator = person_validator();
    assert!(!validator.is_fail_fast());
    assert_eq!(validator.validate(&person("", 999, "")).len(), 3);
}
