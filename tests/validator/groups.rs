use std::collections::BTreeMap;

use rule_rail::args;
use rule_rail::validator::{ConstraintGroup, Validator};

use crate::common::{item, Order, MIN, NOT_BLANK};

const CREATE: ConstraintGroup = ConstraintGroup::new("CREATE");
const UPDATE: ConstraintGroup = ConstraintGroup::new("UPDATE");

fn order_by_group() -> Validator<Order> {
    Validator::<Order>::builder()
        .constraint_on_group(CREATE, |b| b.constraint("id", |o| &o.id, |c| c.is_null()))
        .constraint_on_group(UPDATE, |b| b.constraint("id", |o| &o.id, |c| c.not_null()))
        .build()
}

#[test]
fn default_group_skips_group_rules() {
    let validator = order_by_group();
    let with_id = Order { id: Some(1), items: Vec::new() };
    let without_id = Order { id: None, items: Vec::new() };
    assert!(validator.validate(&with_id).is_valid());
    assert!(validator.validate(&without_id).is_valid());
}

#[test]
fn create_requires_missing_id() {
    let validator = order_by_group();
    let violations = validator.validate_with_group(&Order { id: Some(7), items: Vec::new() }, &CREATE);
    assert_eq!(violations.field_names(), vec!["id"]);
    assert_eq!(violations[0].message(), "\"id\" must be null");
    assert!(validator
        .validate_with_group(&Order { id: None, items: Vec::new() }, &CREATE)
        .is_valid());
}

#[test]
fn update_requires_present_id() {
    let validator = order_by_group();
    let violations = validator.validate_with_group(&Order { id: None, items: Vec::new() }, &UPDATE);
    assert_eq!(violations.messages(), vec!["\"id\" must not be null"]);
    assert!(validator
        .validate_with_group(&Order { id: Some(3), items: Vec::new() }, &UPDATE)
        .is_valid());
}

#[test]
fn groups_compare_by_name() {
    let validator = order_by_group();
    let dynamic = ConstraintGroup::named(String::from("UPDATE"));
    assert_eq!(dynamic, UPDATE);
    assert!(!validator
        .validate_with_group(&Order { id: None, items: Vec::new() }, &dynamic)
        .is_valid());
    assert_eq!(ConstraintGroup::default(), ConstraintGroup::DEFAULT);
}

#[test]
fn unconditioned_rules_apply_under_every_group() {
    let validator = Validator::<Order>::builder()
        .constraint("items", |o| &o.items, |c| c.predicate(|items| !items.is_empty(), crate::common::NOT_EMPTY))
        .constraint_on_group(UPDATE, |b| b.constraint("id", |o| &o.id, |c| c.not_null()))
        .build();

    let empty = Order { id: None, items: Vec::new() };
    assert_eq!(validator.validate(&empty).field_names(), vec!["items"]);
    assert_eq!(validator.validate_with_group(&empty, &UPDATE).field_names(), vec!["items", "id"]);
}

#[test]
fn condition_sees_the_target() {
    struct Shipment {
        express: bool,
        courier: String,
    }

    let validator = Validator::<Shipment>::builder()
        .constraint_on_condition(
            |s, _| s.express,
            |b| b.constraint("courier", |s| &s.courier, |c| c.predicate(|v| !v.trim().is_empty(), NOT_BLANK)),
        )
        .build();

    let standard = Shipment { express: false, courier: String::new() };
    let express = Shipment { express: true, courier: String::new() };
    assert!(validator.validate(&standard).is_valid());
    assert_eq!(validator.validate(&express).field_names(), vec!["courier"]);
}

#[test]
fn condition_is_evaluated_per_call() {
    let validator = Validator::<Order>::builder()
        .constraint_on_condition(
            |o, g| g == &UPDATE && o.items.len() > 1,
            |b| b.constraint("id", |o| &o.id, |c| c.not_null()),
        )
        .build();

    let single = Order { id: None, items: vec![item("a", 1)] };
    let many = Order { id: None, items: vec![item("a", 1), item("b", 1)] };
    assert!(validator.validate_with_group(&single, &UPDATE).is_valid());
    assert!(!validator.validate_with_group(&many, &UPDATE).is_valid());
    assert!(validator.validate(&many).is_valid());
}

#[test]
fn active_group_reaches_nested_children() {
    struct Leaf {
        v: i32,
    }
    struct Tree {
        root: Leaf,
        leaves: Vec<Leaf>,
        by_id: BTreeMap<u32, Leaf>,
    }

    let leaf = Validator::<Leaf>::builder()
        .constraint_on_group(UPDATE, |b| {
            b.constraint("v", |l| &l.v, |c| c.predicate_with_args(|v| *v >= 1, MIN, |_| args![1]))
        })
        .build();
    let tree = Validator::<Tree>::builder()
        .nest("root", |t| &t.root, leaf.clone())
        .for_each("leaves", |t| &t.leaves, leaf.clone())
        .for_each_value("by_id", |t| &t.by_id, leaf)
        .build();

    let mut by_id = BTreeMap::new();
    by_id.insert(3, Leaf { v: 2 });
    by_id.insert(7, Leaf { v: 0 });
    let target = Tree {
        root: Leaf { v: 0 },
        leaves: vec![Leaf { v: 0 }, Leaf { v: 5 }],
        by_id,
    };

    assert!(tree.validate(&target).is_valid());
    assert!(tree.validate_with_group(&target, &CREATE).is_valid());
    assert_eq!(
        tree.validate_with_group(&target, &UPDATE).field_names(),
        vec!["root.v", "leaves[0].v", "by_id[7].v"]
    );
}
