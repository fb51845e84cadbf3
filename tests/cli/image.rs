use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn build_rejects_dockerfile_outside_context() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["image", "build", "--tag", "demo:latest", "--file", "../Dockerfile"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be inside the build context"));
}

#[test]
fn build_requires_dockerfile() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["image", "build", "--tag", "demo:latest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dockerfile"));
}

#[test]
fn pull_rejects_flag_like_image() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["image", "pull", "--", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid image name '--all'"));
}

#[cfg(unix)]
#[test]
fn list_prints_short_ids_and_references() {
    let ctx = TestContext::new();
    ctx.use_fake_docker(
        r#"echo '{"ID":"sha256:0123456789abcdef","Repository":"ubuntu","Tag":"latest","Size":"77MB"}'"#,
    );

    ctx.cli()
        .args(["image", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0123456789ab: ubuntu:latest"));
}

#[cfg(unix)]
#[test]
fn list_reports_no_images() {
    let ctx = TestContext::new();
    ctx.use_fake_docker("exit 0");

    ctx.cli()
        .args(["img", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No images found."));
}

#[cfg(unix)]
#[test]
fn build_passes_argument_vector_to_docker() {
    let ctx = TestContext::new();
    ctx.use_fake_docker(r#"printf '%s\n' "$@" > "$(dirname "$0")/docker-args""#);
    ctx.write_file("Dockerfile", "FROM alpine\nCOPY . /srv\n");

    ctx.cli().args(["image", "build", "-t", "demo:1"]).assert().success();

    let args = std::fs::read_to_string(ctx.home().join("docker-args")).unwrap();
    let args: Vec<&str> = args.lines().collect();
    assert_eq!(args[..4], ["build", "-t", "demo:1", "-f"]);
    assert!(args[4].ends_with("Dockerfile"));
}
