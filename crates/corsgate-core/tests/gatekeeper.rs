//! Origin gatekeeper decision tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use corsgate_core::policy::{compile_origins, Decision, OriginGatekeeper, DENY_REASON};

fn gatekeeper(origins: &[&str]) -> OriginGatekeeper {
    let raw: Vec<String> = origins.iter().map(|s| s.to_string()).collect();
    OriginGatekeeper::new(compile_origins(&raw).expect("must compile"))
}

fn reference() -> OriginGatekeeper {
    gatekeeper(&["http://localhost:3000", "https://exporthaven.vercel.app"])
}

#[test]
fn absent_origin_is_allowed() {
    assert_eq!(reference().decide(None), Decision::Allowed);
}

#[test]
fn listed_origins_are_allowed() {
    let gk = reference();
    assert_eq!(gk.decide(Some("http://localhost:3000")), Decision::Allowed);
    assert_eq!(
        gk.decide(Some("https://exporthaven.vercel.app")),
        Decision::Allowed
    );
}

#[test]
fn unlisted_origin_is_denied_with_reason() {
    let d = reference().decide(Some("http://evil.com"));
    assert_eq!(d, Decision::Denied { reason: DENY_REASON });
    match d {
        Decision::Denied { reason } => assert_eq!(reason, "Not allowed by CORS"),
        Decision::Allowed => panic!("must deny"),
    }
}

#[test]
fn matching_is_case_sensitive() {
    // Differs from an allowed entry only in case; still denied.
    let d = reference().decide(Some("HTTP://LOCALHOST:3000"));
    assert!(!d.is_allowed());
}

#[test]
fn trailing_slash_is_not_normalized() {
    let d = reference().decide(Some("http://localhost:3000/"));
    assert!(!d.is_allowed());
}

#[test]
fn empty_string_origin_is_not_absent() {
    // `Some("")` is a present-but-empty header, distinct from no header.
    let d = reference().decide(Some(""));
    assert_eq!(d, Decision::Denied { reason: DENY_REASON });
}

#[test]
fn empty_allowlist_still_allows_absent() {
    let gk = OriginGatekeeper::new(compile_origins(&[]).expect("must compile"));
    assert_eq!(gk.decide(None), Decision::Allowed);
    assert!(!gk.decide(Some("http://localhost:3000")).is_allowed());
}
