#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(strata::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!strata::VERSION.is_empty());
}
