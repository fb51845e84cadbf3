use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn stop_rejects_name_with_whitespace() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["container", "stop", "my box"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid container name 'my box'"));
}

#[cfg(unix)]
#[test]
fn stop_reports_missing_container() {
    let ctx = TestContext::new();
    ctx.use_fake_docker("echo 'Error response from daemon: No such container: ghost' >&2; exit 1");

    ctx.cli()
        .args(["container", "stop", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Container 'ghost' not found"));
}

#[cfg(unix)]
#[test]
fn list_reports_no_running_containers() {
    let ctx = TestContext::new();
    ctx.use_fake_docker("exit 0");

    ctx.cli()
        .args(["c", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No running containers found."));
}

#[cfg(unix)]
#[test]
fn search_filters_by_name() {
    let ctx = TestContext::new();
    ctx.use_fake_docker(
        r#"echo '{"ID":"aaaaaaaaaaaaaaaa","Names":"web","Image":"nginx","Status":"Up 1 hour"}'
echo '{"ID":"bbbbbbbbbbbbbbbb","Names":"db","Image":"postgres","Status":"Exited (0)"}'"#,
    );

    ctx.cli()
        .args(["container", "search", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aaaaaaaaaaaa: web [nginx] Up 1 hour"))
        .stdout(predicate::str::contains("db").not());
}
