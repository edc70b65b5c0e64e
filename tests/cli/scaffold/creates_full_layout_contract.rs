use crate::harness::{BUILTIN_DIRECTORIES, TestContext};
use predicates::prelude::*;

#[test]
fn scaffold_creates_every_file_empty_in_empty_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::ends_with("File structure creation complete!\n"));

    ctx.assert_layout_empty();
    assert_eq!(ctx.file_count(), 21);
    for dir in BUILTIN_DIRECTORIES {
        assert!(ctx.abs(dir).is_dir(), "{} should be a directory", dir);
    }
}

#[test]
fn scaffold_creates_dynamic_route_directory_literally() {
    let ctx = TestContext::new();

    ctx.cli().assert().success();

    assert!(ctx.abs("src/app/api/auth/[...nextauth]/route.ts").is_file());
}
