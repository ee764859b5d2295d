//! Compile-fail cases for `#[derive(Describe)]`.

#[test]
#[cfg_attr(
    miri,
    ignore = "trybuild launches subprocesses and is unsupported under miri"
)]
fn derive_rejects_unsupported_input() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
