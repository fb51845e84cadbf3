use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn templates_lists_every_builtin_template() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("custom - Custom"))
        .stdout(predicate::str::contains("python-app - Python App"))
        .stdout(predicate::str::contains("node-app - Node.js App"))
        .stdout(predicate::str::contains("java-app - Java App"));
}

#[test]
fn templates_short_alias() {
    let ctx = TestContext::new();
    ctx.cli().arg("t").assert().success().stdout(predicate::str::contains("python-app"));
}
