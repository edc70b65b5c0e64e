use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn root_flag_scaffolds_into_given_directory() {
    let ctx = TestContext::new();
    let target = ctx.sibling_dir("site");

    ctx.cli()
        .args(["--root", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Created file: {}",
            target.join("src/styles/theme.ts").display()
        )));

    ctx.assert_layout_exists_in(&target);
    assert_eq!(ctx.file_count(), 0);
}

#[test]
fn root_flag_rejects_missing_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["-C", "does-not-exist"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Target directory not found"));

    assert_eq!(ctx.file_count(), 0);
}

#[test]
fn positional_arguments_are_rejected() {
    let ctx = TestContext::new();

    ctx.cli().arg("extra").assert().failure();

    assert_eq!(ctx.file_count(), 0);
}
