use super::*;
use pretty_assertions::assert_eq;

#[test]
fn define_and_lookup_in_root() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn inner_scope_sees_outer_bindings() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    env.push_scope();
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
    assert!(!env.is_local("x"));
}

#[test]
fn inner_binding_shadows_and_disappears_on_pop() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    env.push_scope();
    env.define("x", Value::Int(2));
    assert_eq!(env.lookup("x"), Some(&Value::Int(2)));
    env.pop_scope();
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
}

#[test]
fn redefinition_replaces_in_same_scope() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    env.define("x", Value::string("one"));
    assert_eq!(env.lookup("x"), Some(&Value::string("one")));
}

#[test]
fn parents_chain_to_root() {
    let mut env = Environment::new();
    let first = env.push_scope();
    let second = env.push_scope();
    assert_eq!(env.parent_of(second), Some(first));
    assert_eq!(env.parent_of(first), Some(ScopeId::ROOT));
    assert_eq!(env.parent_of(ScopeId::ROOT), None);
    assert_eq!(env.depth(), 3);
}

#[test]
fn root_is_never_popped() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.current(), ScopeId::ROOT);
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
}

#[test]
fn define_global_reaches_root_from_nested_scope() {
    let mut env = Environment::new();
    env.push_scope();
    env.define_global("g", Value::Bool(true));
    env.pop_scope();
    assert_eq!(env.lookup("g"), Some(&Value::Bool(true)));
}
