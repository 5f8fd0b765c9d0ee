// Compile-fail fixtures for the dimension-mismatch compile-time-rejection
// regime, using trybuild to assert that mismatched-dimension operations
// fail at compile time rather than at runtime.

#[test]
fn dimension_mismatches_fail_to_compile() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}

#[cfg(feature = "strict")]
#[test]
fn strict_feature_rejects_cross_scale_addition() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail_strict/*.rs");
}
