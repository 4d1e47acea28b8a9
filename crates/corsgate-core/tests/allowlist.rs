//! Allow-list compilation tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use corsgate_core::policy::compile_origins;

#[test]
fn compile_accepts_wellformed_origins() {
    let raw = vec![
        "http://localhost:3000".to_string(),
        "https://exporthaven.vercel.app".to_string(),
    ];
    let list = compile_origins(&raw).expect("must compile");
    assert_eq!(list.len(), 2);
    assert!(list.contains("http://localhost:3000"));
    assert!(!list.contains("http://localhost:3001"));
}

#[test]
fn compile_rejects_empty_entry() {
    let raw = vec!["".to_string()];
    let err = compile_origins(&raw).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn compile_rejects_missing_scheme() {
    let raw = vec!["localhost:3000".to_string()];
    let err = compile_origins(&raw).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn empty_list_compiles() {
    let list = compile_origins(&[]).expect("must compile");
    assert!(list.is_empty());
}
