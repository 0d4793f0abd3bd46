//! Integration tests for the jobs commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{crewboard_cmd, init_board, init_unlocked_board, stored};

fn add_junior(dir: &std::path::Path) {
    crewboard_cmd()
        .current_dir(dir)
        .args([
            "jobs",
            "add",
            "--title",
            "Junior Cabin Crew",
            "--airline",
            "TestAir",
            "--location",
            "London, UK",
            "--contract",
            "Part-time",
            "--requirement",
            "Fluent in English",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added job"))
        .stdout(predicate::str::contains("(junior-cabin-crew)"));
}

#[test]
fn test_list_shows_seed_job() {
    let temp = TempDir::new().unwrap();
    init_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Senior Cabin Crew"));

    // Reading never writes the collection
    assert!(!temp.path().join(".crewboard/jobs.json").exists());
}

#[test]
fn test_add_requires_admin() {
    let temp = TempDir::new().unwrap();
    init_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "add", "--title", "Purser", "--airline", "TestAir"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("admin login"));

    assert!(!temp.path().join(".crewboard/jobs.json").exists());
}

#[test]
fn test_add_appends_after_seed() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    add_junior(temp.path());

    let jobs = stored(temp.path(), "jobs");
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0]["id"], "1");
    assert_eq!(jobs[1]["slug"], "junior-cabin-crew");
    assert_eq!(jobs[1]["airline"], "TestAir");
    assert_eq!(jobs[1]["requirements"][0], "Fluent in English");
    assert_eq!(
        jobs[1]["logoUrl"],
        "https://api.dicebear.com/7.x/initials/svg?seed=TestAir"
    );
    assert_eq!(jobs[1]["id"].as_str().unwrap().len(), 9);
}

#[test]
fn test_add_missing_airline_is_rejected() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "add", "--title", "Purser"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("missing required field 'airline'"));
}

#[test]
fn test_update_keeps_id_and_recomputes_slug() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "update", "1", "--title", "Purser"])
        .assert()
        .success();

    let jobs = stored(temp.path(), "jobs");
    assert_eq!(jobs[0]["id"], "1");
    assert_eq!(jobs[0]["title"], "Purser");
    assert_eq!(jobs[0]["slug"], "purser");
    // Fields not given on the command line keep their values
    assert_eq!(jobs[0]["airline"], "SkyWings Airlines");

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "show", "purser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Airline:   SkyWings Airlines"));
}

#[test]
fn test_update_unknown_id_is_noop() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "update", "nope", "--title", "Purser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No job with id nope; nothing updated"));

    assert!(!temp.path().join(".crewboard/jobs.json").exists());
}

#[test]
fn test_update_airline_regenerates_logo() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());
    add_junior(temp.path());
    let id = stored(temp.path(), "jobs")[1]["id"]
        .as_str()
        .unwrap()
        .to_string();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "update", &id, "--airline", "NewAir"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated job {}", id)));

    let jobs = stored(temp.path(), "jobs");
    assert_eq!(jobs[1]["airline"], "NewAir");
    assert_eq!(
        jobs[1]["logoUrl"],
        "https://api.dicebear.com/7.x/initials/svg?seed=NewAir"
    );
}

#[test]
fn test_delete_nonexistent_is_noop() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "delete", "nonexistent-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));

    assert!(!temp.path().join(".crewboard/jobs.json").exists());
}

#[test]
fn test_delete_twice() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted job 1"));

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));

    assert_eq!(stored(temp.path(), "jobs"), serde_json::json!([]));

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No jobs found"));
}

#[test]
fn test_list_filters() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());
    add_junior(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "list", "--contract", "Part-time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Junior Cabin Crew"))
        .stdout(predicate::str::contains("Senior Cabin Crew").not());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "list", "--airline", "skywings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Senior Cabin Crew"))
        .stdout(predicate::str::contains("Junior Cabin Crew").not());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "list", "--search", "testair", "--location", "Dubai, UAE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No jobs found"));
}

#[test]
fn test_show_by_slug_and_id() {
    let temp = TempDir::new().unwrap();
    init_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "show", "senior-cabin-crew"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum 3 years experience"));

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Senior Cabin Crew"));

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "show", "pilot"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No job found matching 'pilot'"));
}

#[test]
fn test_corrupt_jobs_fall_back_to_seed() {
    let temp = TempDir::new().unwrap();
    init_board(temp.path());
    fs::write(temp.path().join(".crewboard/jobs.json"), "not json").unwrap();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Senior Cabin Crew"))
        .stderr(predicate::str::contains("unreadable"));
}

#[test]
fn test_corrupt_jobs_error_when_configured() {
    let temp = TempDir::new().unwrap();
    init_board(temp.path());
    fs::write(temp.path().join(".crewboard/jobs.json"), "not json").unwrap();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["config", "on_corrupt_data", "error"])
        .assert()
        .success();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "list"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Stored data for 'jobs' is corrupt"));
}

#[test]
fn test_reject_slug_policy() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["config", "slug_policy", "reject"])
        .assert()
        .success();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["jobs", "add", "--title", "Senior Cabin Crew", "--airline", "TestAir"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Slug already in use: senior-cabin-crew"));
}
