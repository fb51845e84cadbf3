use assert_fs::TempDir;
use assert_fs::prelude::*;
use dockctx::{AppError, CleanupOutcome, open_session_at, scaffold_at, validate_at};
use predicates::prelude::*;

#[test]
fn public_api_session_lifecycle_contract() {
    let temp = TempDir::new().unwrap();
    let (_config, mut session) = open_session_at(temp.path()).expect("open session failed");

    session.select_template("Python App").expect("select template failed");
    let body = session.dockerfile().to_string();
    assert!(session.validate_dockerfile(&body).is_valid());

    session.save_dockerfile(&body).expect("save Dockerfile failed");
    session.add_file("notes.txt").expect("add file failed");
    session.save_active_file("remember COPY").expect("save file failed");

    let written = std::fs::read_to_string(temp.child("Dockerfile").path()).unwrap();
    assert!(written.contains("FROM python"));
    temp.child("notes.txt").assert("remember COPY");
    assert_eq!(session.persisted_paths().len(), 2);

    let first = session.cleanup();
    assert_eq!(first.deleted(), 2);
    temp.child("Dockerfile").assert(predicate::path::missing());
    temp.child("notes.txt").assert(predicate::path::missing());

    let second = session.cleanup();
    assert!(second.entries.iter().all(|(_, outcome)| *outcome == CleanupOutcome::AlreadyAbsent));
}

#[test]
fn cleanup_leaves_unrelated_files_alone() {
    let temp = TempDir::new().unwrap();
    temp.child("other.txt").write_str("untouched").unwrap();
    let (_config, mut session) = open_session_at(temp.path()).unwrap();

    session.add_file("a.txt").unwrap();
    session.save_active_file("a").unwrap();
    session.cleanup();

    temp.child("a.txt").assert(predicate::path::missing());
    temp.child("other.txt").assert("untouched");
}

#[test]
fn scaffold_then_validate_contract() {
    let temp = TempDir::new().unwrap();
    temp.child("dockctx.toml").write_str("[context]\ndir = \"ctx\"\n").unwrap();

    let written = scaffold_at(temp.path(), "java-app").expect("scaffold failed");
    assert_eq!(written.len(), 2);
    temp.child("ctx/pom.xml").assert(predicate::path::exists());

    let validated = validate_at(temp.path(), None).expect("validate failed");
    assert!(validated.ends_with("ctx/Dockerfile"));
}

#[test]
fn validate_reports_missing_instructions() {
    let temp = TempDir::new().unwrap();
    temp.child("Dockerfile").write_str("RUN true\n").unwrap();

    let err = validate_at(temp.path(), None).unwrap_err();
    assert!(matches!(err, AppError::ValidationFailed { ref missing } if missing == &["FROM", "COPY"]));
}
