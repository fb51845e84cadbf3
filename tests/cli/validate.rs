use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn validate_names_missing_instruction() {
    let ctx = TestContext::new();
    ctx.write_file("Dockerfile", "FROM alpine\nRUN echo hi\n");

    ctx.cli()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required instructions: COPY"));
}

#[test]
fn validate_accepts_scaffolded_dockerfile() {
    let ctx = TestContext::new();
    ctx.cli().args(["new", "--template", "java-app"]).assert().success();

    ctx.cli()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("is a valid Dockerfile"));
}

#[test]
fn validate_explicit_path() {
    let ctx = TestContext::new();
    ctx.write_file("docker/Dockerfile.dev", "FROM alpine\nCOPY . /srv\n");

    ctx.cli().args(["validate", "docker/Dockerfile.dev"]).assert().success();
}

#[test]
fn validate_missing_file_names_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["validate", "nowhere/Dockerfile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("nowhere"));
}
