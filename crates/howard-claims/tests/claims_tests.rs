//! Integration tests for claims built through the factory
//!
//! Registry entries must behave like any other claim: compose, navigate
//! properties and bind to state under both strategies.

use std::cell::Cell;

use howard_claims::{
    claims, name_for_guard, name_for_predicate, Claims, ClaimsConfig, ClaimsError, ClaimsInput,
};
use howard_core::{Checkable, Claim, Conditional};
use serde_json::{json, Value};

fn number_claims() -> Claims<i64> {
    claims(
        ClaimsInput::new()
            .predicate("isPositive", |v: &i64| *v > 0)
            .predicate("isEven", |v: &i64| v % 2 == 0)
            .predicate("isZero", |v: &i64| *v == 0),
    )
    .unwrap()
}

fn shop_claims() -> Claims<Value> {
    claims(
        ClaimsInput::new()
            .guard("isUser", |v: &Value| {
                v.get("id").map(Value::is_number).unwrap_or(false)
                    && v.get("email").map(Value::is_string).unwrap_or(false)
            })
            .guard("hasCart", |v: &Value| {
                v.as_object().map(|obj| obj.contains_key("cart")).unwrap_or(false)
            })
            .guard("isObject", |v: &Value| v.is_object()),
    )
    .unwrap()
}

#[test]
fn test_eager_evaluates_on_each_call() {
    let registry = number_claims();
    let state = Cell::new(5);
    let eager = registry.claim("IsPositive").unwrap().given(|| state.get()).eager();

    assert!(eager.evaluate());
    state.set(-1);
    assert!(!eager.evaluate());
}

#[test]
fn test_eager_and_composition() {
    let registry = number_claims();
    let state = Cell::new(4);
    let eager = registry
        .claim("IsPositive")
        .unwrap()
        .given(|| state.get())
        .eager()
        .and(registry.claim("IsEven").unwrap());

    assert!(eager.evaluate());
    state.set(3);
    assert!(!eager.evaluate());
}

#[test]
fn test_eager_or_composition() {
    let registry = number_claims();
    let state = Cell::new(0);
    let eager = registry
        .claim("IsZero")
        .unwrap()
        .given(|| state.get())
        .eager()
        .or(registry.claim("IsPositive").unwrap());

    assert!(eager.evaluate());
    state.set(5);
    assert!(eager.evaluate());
    state.set(-1);
    assert!(!eager.evaluate());
}

#[test]
fn test_lazy_matches_eager() {
    let registry = number_claims();
    let reads = [5, -1, -1];

    let eager_cursor = Cell::new(0);
    let lazy_cursor = Cell::new(0);
    let next = |cursor: &Cell<usize>| {
        let idx = cursor.get();
        cursor.set(idx + 1);
        reads[idx]
    };

    let is_positive = registry.claim("IsPositive").unwrap();
    let condition = is_positive.given(|| next(&eager_cursor));
    let eager = condition.eager();
    let lazy = registry
        .claim("IsPositive")
        .unwrap()
        .given(|| next(&lazy_cursor))
        .lazy();

    let eager_results: Vec<bool> = reads.iter().map(|_| eager.evaluate()).collect();
    let lazy_results: Vec<bool> = reads.iter().map(|_| lazy.evaluate()).collect();

    assert_eq!(eager_results, vec![true, false, false]);
    assert_eq!(eager_results, lazy_results);
}

#[test]
fn test_lazy_and_or_composition() {
    let registry = number_claims();
    let state = Cell::new(4);

    let both = registry
        .claim("IsPositive")
        .unwrap()
        .given(|| state.get())
        .lazy()
        .and(registry.claim("IsEven").unwrap());
    let either = registry
        .claim("IsZero")
        .unwrap()
        .given(|| state.get())
        .lazy()
        .or(registry.claim("IsEven").unwrap());

    assert!(both.evaluate());
    assert!(either.evaluate());

    state.set(-3);
    assert!(!both.evaluate());
    assert!(!either.evaluate());
}

#[test]
fn test_user_with_cart() {
    let registry = shop_claims();
    let shopper = registry
        .claim("aUser")
        .unwrap()
        .and(registry.claim("HasCart").unwrap());

    let full = json!({ "id": 1, "email": "a@b.com", "cart": { "items": {} } });
    let no_cart = json!({ "id": 1, "email": "a@b.com" });

    assert!(shopper.check(&full));
    assert!(!shopper.check(&no_cart));
}

#[test]
fn test_registry_claims_navigate_properties() {
    let registry = shop_claims();
    let cart_is_object = registry
        .claim("HasCart")
        .unwrap()
        .on("cart", registry.claim("anObject").unwrap());

    assert!(cart_is_object.check(&json!({ "cart": { "items": {} } })));
    assert!(!cart_is_object.check(&json!({ "cart": [] })));
    assert!(!cart_is_object.check(&json!({ "basket": {} })));
    assert!(!cart_is_object.check(&Value::Null));
}

#[test]
fn test_registry_claims_mix_with_plain_claims() {
    let registry = number_claims();
    let is_small = Claim::new(|v: &i64| *v < 10);

    let small_positive = registry.claim("IsPositive").unwrap().and(is_small);
    assert!(small_positive.check(&9));
    assert!(!small_positive.check(&10));
}

#[test]
fn test_names_follow_conventions() {
    assert_eq!(name_for_guard("isObject"), "anObject");
    assert_eq!(name_for_guard("isUser"), "aUser");
    assert_eq!(name_for_predicate("hasLength"), "HasLength");

    let registry = shop_claims();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["HasCart", "aUser", "anObject"]);
}

#[test]
fn test_config_file_drives_collisions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("howard.toml");
    std::fs::write(&path, "[claims]\non_collision = \"reject\"\n").unwrap();

    let config = ClaimsConfig::load(&path).unwrap();
    let input = ClaimsInput::new()
        .predicate("hasValue", |v: &i64| *v != 0)
        .guard("hasValue", |v: &i64| *v == 0);

    let result = Claims::build(input, &config);
    assert!(matches!(result, Err(ClaimsError::DuplicateName { .. })));
}
