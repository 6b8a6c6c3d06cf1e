//! 派生宏编译期测试

#[test]
fn trybuild_injectable() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/injectable_ok.rs");
    t.pass("tests/trybuild/injectable_tuple_ok.rs");
}

#[test]
fn trybuild_injection_target() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/injection_target_ok.rs");
}
