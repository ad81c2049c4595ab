#[test]
fn skit_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/skit_error_pass.rs");
}
