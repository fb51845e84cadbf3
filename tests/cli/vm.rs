use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn vm_create_rejects_zero_size() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["vm", "create", "debian", "--size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
}

#[test]
fn vm_create_rejects_path_in_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["vm", "create", "a/b", "--size", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filename 'a/b'"));
}

#[test]
fn vm_boot_requires_existing_image() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["vm", "boot", "--ram", "512", "--cores", "1", "--image", "missing.img"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.img"));
}
