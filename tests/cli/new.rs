use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn new_writes_template_files_into_work_dir() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "--template", "python-app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created build context"));

    let dockerfile = ctx.read_file("Dockerfile");
    assert!(dockerfile.contains("FROM python"));
    assert!(dockerfile.contains("COPY"));
    assert!(ctx.work_dir().join("requirements.txt").exists());
}

#[test]
fn new_honours_configured_context_dir() {
    let ctx = TestContext::new();
    ctx.write_config("[context]\ndir = \"build\"\n");

    ctx.cli().args(["n", "-t", "Node.js App"]).assert().success();

    assert!(ctx.work_dir().join("build/Dockerfile").exists());
    assert!(ctx.work_dir().join("build/package.json").exists());
    assert!(!ctx.work_dir().join("Dockerfile").exists());
}

#[test]
fn new_rejects_unknown_template() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "--template", "ruby-app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template 'ruby-app'"))
        .stderr(predicate::str::contains("Java App"));

    assert!(!ctx.work_dir().join("Dockerfile").exists());
}

#[test]
fn malformed_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("[context]\nunknown = 1\n");

    ctx.cli()
        .args(["new", "--template", "custom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config parse error"));
}
