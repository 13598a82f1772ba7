//! End-to-end behavior of a stateful class and a subclass of it.

use statecraft::{json, Class, DispatchError, InvalidStateError, Value};
use std::sync::{Arc, OnceLock};
use std::thread;

fn stateful() -> &'static Arc<Class<()>> {
    static CLASS: OnceLock<Arc<Class<()>>> = OnceLock::new();
    CLASS.get_or_init(|| {
        Class::<()>::builder("Stateful")
            .operation("helper", |_, _| Ok(json!(14)))
            .operation("outer", |_, _| Ok(json!(10)))
            .state("start", |s| {
                s.operation("add", |_, args| {
                    args.expect_len(2)?;
                    Ok(json!(args.i64(0)? + args.i64(1)?))
                })
                .operation("use_helper", |this, _| this.call("helper", &[]))
            })
            .state("next", |s| {
                s.operation("add", |_, args| Ok(json!(args.i64(0)? - args.i64(1)?)))
                    .operation("outer", |_, _| Ok(json!(20)))
            })
            .state("last", |s| {
                s.operation("add", |_, args| Ok(json!(args.i64(0)? * args.i64(1)?)))
            })
            .build()
            .expect("Stateful should build")
    })
}

fn sub_state() -> Arc<Class<()>> {
    Class::builder("SubState")
        .extends(stateful())
        .state("another", |s| {
            s.operation("add", |_, args| Ok(json!(args.i64(0)? % args.i64(1)?)))
        })
        .starting_state("another")
        .build()
        .expect("SubState should build")
}

fn add(obj: &mut statecraft::Instance<()>, a: i64, b: i64) -> Result<Value, DispatchError> {
    obj.call("add", &[json!(a), json!(b)])
}

#[test]
fn fresh_object_has_no_state() {
    let mut obj = stateful().instantiate(());
    assert_eq!(obj.current_state(), None);

    obj.change_state("start").unwrap();
    assert_eq!(obj.current_state().unwrap(), "start");
}

#[test]
fn change_state_switches_current_state() {
    let mut obj = stateful().instantiate(());
    obj.change_state("next").unwrap();
    assert_eq!(obj.current_state().unwrap(), "next");
}

#[test]
fn invalid_state_errors_and_keeps_current() {
    let mut obj = stateful().instantiate(());
    obj.change_state("next").unwrap();

    let err = obj.change_state("fail_state").unwrap_err();
    assert_eq!(
        err,
        InvalidStateError {
            class: "Stateful".to_string(),
            name: "fail_state".to_string(),
        }
    );
    assert_eq!(obj.current_state().unwrap(), "next");
}

#[test]
fn starting_state_is_reported_without_transition() {
    let started = Class::builder("Started")
        .extends(stateful())
        .starting_state("start")
        .build()
        .unwrap();

    let mut obj = started.instantiate(());
    assert_eq!(obj.current_state().unwrap(), "start");
}

#[test]
fn operations_follow_current_state() {
    let mut obj = stateful().instantiate(());

    obj.change_state("start").unwrap();
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!(6));

    obj.change_state("next").unwrap();
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!(-2));

    obj.change_state("last").unwrap();
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!(8));
}

#[test]
fn states_reach_own_operations() {
    let mut obj = stateful().instantiate(());
    obj.change_state("start").unwrap();

    assert_eq!(obj.call("use_helper", &[]).unwrap(), json!(14));
    assert_eq!(obj.call("helper", &[]).unwrap(), json!(14));
}

#[test]
fn operation_from_other_state_is_unreachable() {
    let mut obj = stateful().instantiate(());
    obj.change_state("next").unwrap();

    let err = obj.call("use_helper", &[]).unwrap_err();
    assert_eq!(
        err,
        DispatchError::OperationNotFound {
            operation: "use_helper".to_string(),
            class: "Stateful".to_string(),
            state: "next".to_string(),
        }
    );
    assert_eq!(obj.call("helper", &[]).unwrap(), json!(14));
}

#[test]
fn own_operation_wins_over_state_operation() {
    let mut obj = stateful().instantiate(());
    obj.change_state("next").unwrap();

    assert_eq!(obj.call("outer", &[]).unwrap(), json!(10));
}

#[test]
fn state_operations_fail_before_any_state() {
    let mut obj = stateful().instantiate(());

    let err = add(&mut obj, 2, 4).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("unset"));
}

#[test]
fn arity_errors_come_from_the_behavior() {
    let mut obj = stateful().instantiate(());
    obj.change_state("start").unwrap();

    let err = obj.call("add", &[json!(1)]).unwrap_err();
    assert_eq!(
        err,
        DispatchError::ArityMismatch {
            operation: "add".to_string(),
            expected: 2,
            got: 1,
        }
    );
}

#[test]
fn subclass_uses_its_own_starting_state() {
    let mut obj = sub_state().instantiate(());

    assert_eq!(obj.current_state().unwrap(), "another");
    assert_eq!(add(&mut obj, 5, 2).unwrap(), json!(1));
}

#[test]
fn subclass_reaches_base_states() {
    let mut obj = sub_state().instantiate(());

    obj.change_state("next").unwrap();
    assert_eq!(add(&mut obj, 5, 2).unwrap(), json!(3));
    assert_eq!(obj.call("outer", &[]).unwrap(), json!(10));
}

#[test]
fn base_does_not_see_subclass_states() {
    let _sub = sub_state();
    let mut obj = stateful().instantiate(());

    assert!(obj.change_state("another").is_err());
    assert_eq!(obj.current_state(), None);
}

#[test]
fn subclass_override_replaces_base_state() {
    let overriding = Class::builder("Overriding")
        .extends(stateful())
        .state("start", |s| {
            s.operation("add", |_, args| Ok(json!(args.i64(0)? * 100 + args.i64(1)?)))
        })
        .build()
        .unwrap();

    let mut obj = overriding.instantiate(());
    obj.change_state("start").unwrap();
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!(204));

    // The override replaced the whole state, not only `add`.
    assert!(obj.call("use_helper", &[]).unwrap_err().is_not_found());

    let mut base_obj = stateful().instantiate(());
    base_obj.change_state("start").unwrap();
    assert_eq!(add(&mut base_obj, 2, 4).unwrap(), json!(6));
}

#[test]
fn grandchild_resolves_nearest_declaration() {
    let middle = Class::builder("Middle")
        .extends(stateful())
        .state("last", |s| s.operation("add", |_, _| Ok(json!("middle"))))
        .build()
        .unwrap();
    let leaf = Class::builder("Leaf").extends(&middle).build().unwrap();

    let mut obj = leaf.instantiate(());
    obj.change_state("last").unwrap();
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!("middle"));

    obj.change_state("start").unwrap();
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!(6));
}

#[test]
fn responds_to_tracks_state() {
    let mut obj = stateful().instantiate(());
    assert!(obj.responds_to("helper"));
    assert!(!obj.responds_to("add"));

    obj.change_state("last").unwrap();
    assert!(obj.responds_to("add"));
    assert!(!obj.responds_to("use_helper"));
}

#[test]
fn shared_class_serves_many_threads() {
    let handles: Vec<_> = ["start", "next", "last"]
        .into_iter()
        .map(|state| {
            thread::spawn(move || {
                let mut obj = stateful().instantiate(());
                obj.change_state(state).unwrap();
                add(&mut obj, 2, 4).unwrap()
            })
        })
        .collect();

    let results: Vec<Value> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, vec![json!(6), json!(-2), json!(8)]);
}

fn started() -> Arc<Class<()>> {
    Class::builder("Started")
        .extends(stateful())
        .starting_state("start")
        .build()
        .expect("Started should build")
}

#[test]
fn subclass_inherits_base_starting_state() {
    let sub = Class::builder("StartedChild")
        .extends(&started())
        .build()
        .unwrap();

    assert_eq!(sub.starting_state().unwrap(), "start");

    let mut obj = sub.instantiate(());
    assert_eq!(obj.current_state().unwrap(), "start");
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!(6));
}

#[test]
fn subclass_redeclared_start_wins_over_inherited() {
    let sub = Class::builder("StartedChild")
        .extends(&started())
        .state("start", |s| {
            s.operation("add", |_, args| Ok(json!(args.i64(0)? * 10 + args.i64(1)?)))
        })
        .build()
        .unwrap();

    let mut obj = sub.instantiate(());
    assert_eq!(obj.current_state().unwrap(), "start");
    assert_eq!(add(&mut obj, 2, 4).unwrap(), json!(24));

    let mut base_obj = started().instantiate(());
    assert_eq!(add(&mut base_obj, 2, 4).unwrap(), json!(6));
}

#[test]
fn subclass_own_helper_wins_in_base_state_behaviors() {
    let sub = Class::builder("Helped")
        .extends(stateful())
        .operation("helper", |_, _| Ok(json!(99)))
        .build()
        .unwrap();

    let mut obj = sub.instantiate(());
    obj.change_state("start").unwrap();
    assert_eq!(obj.call("helper", &[]).unwrap(), json!(99));
    assert_eq!(obj.call("use_helper", &[]).unwrap(), json!(99));
    assert_eq!(obj.call("outer", &[]).unwrap(), json!(10));

    let mut base_obj = stateful().instantiate(());
    base_obj.change_state("start").unwrap();
    assert_eq!(base_obj.call("use_helper", &[]).unwrap(), json!(14));
}
