#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn system_preference_is_light_outside_browser() {
    assert!(!system_prefers_dark());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
