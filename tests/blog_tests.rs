//! Integration tests for the blog commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{crewboard_cmd, init_board, init_unlocked_board, stored};

const IMPORT_PAYLOAD: &str = r#"[
  {
    "title": "Article Title",
    "content": "Article content...",
    "author": "Author Name",
    "tags": ["tag1", "tag2"],
    "imageUrl": "https://example.com/cover.png"
  },
  {
    "title": "Second Article",
    "content": "<p>More content</p>",
    "author": "Author Name",
    "tags": ["tag2"]
  }
]"#;

#[test]
fn test_show_seed_post() {
    let temp = TempDir::new().unwrap();
    init_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "show", "top-10-tips-cabin-crew-interview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By Career Coach on 2024-03-20"))
        .stdout(predicate::str::contains("Dress professionally"))
        .stdout(predicate::str::contains("<li>").not());
}

#[test]
fn test_add_post_with_defaults() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args([
            "blog",
            "add",
            "--title",
            "Layover Survival Guide",
            "--content",
            "Sleep whenever you can.",
            "--author",
            "Crew Life",
            "--tag",
            "Lifestyle, Tips",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Published post"));

    let posts = stored(temp.path(), "blog_posts");
    let post = &posts[1];
    assert_eq!(post["slug"], "layover-survival-guide");
    assert_eq!(post["excerpt"], "Sleep whenever you can....");
    assert_eq!(post["tags"], serde_json::json!(["Lifestyle", "Tips"]));
    assert_eq!(
        post["imageUrl"],
        "https://images.unsplash.com/photo-1540555700478-4be289fbecef?w=800"
    );
}

#[test]
fn test_add_post_from_content_file() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());
    let body = temp.path().join("post.md");
    fs::write(&body, "# Packing\n\nRoll, don't fold.").unwrap();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "add", "--title", "Packing", "--author", "Crew Life"])
        .arg("--content-file")
        .arg(&body)
        .assert()
        .success();

    let posts = stored(temp.path(), "blog_posts");
    assert_eq!(posts[1]["excerpt"], "Packing Roll, don't fold....");
}

#[test]
fn test_add_post_missing_author() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "add", "--title", "Untitled", "--content", "Body"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("author"));
}

#[test]
fn test_import_from_file() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());
    let payload = temp.path().join("posts.json");
    fs::write(&payload, IMPORT_PAYLOAD).unwrap();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "import"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 posts"));

    let posts = stored(temp.path(), "blog_posts");
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[1]["slug"], "article-title");
    assert_eq!(posts[2]["excerpt"], "More content...");

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "list", "--tag", "tag2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Article Title"))
        .stdout(predicate::str::contains("Second Article"))
        .stdout(predicate::str::contains("Top 10 Tips").not());
}

#[test]
fn test_import_from_stdin() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "import", "-"])
        .write_stdin(IMPORT_PAYLOAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 posts"));
}

#[test]
fn test_import_malformed_json_adds_nothing() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "import", "-"])
        .write_stdin("[{\"title\": \"Half")
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "Failed to parse blog posts. Please check the JSON format.",
        ));

    assert!(!temp.path().join(".crewboard/blog_posts.json").exists());
}

#[test]
fn test_import_requires_admin() {
    let temp = TempDir::new().unwrap();
    init_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "import", "-"])
        .write_stdin(IMPORT_PAYLOAD)
        .assert()
        .code(6);
}

#[test]
fn test_posts_survive_restart() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "import", "-"])
        .write_stdin(IMPORT_PAYLOAD)
        .assert()
        .success();
    let before = stored(temp.path(), "blog_posts");

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "update", "1", "--title", "Ten Interview Tips"])
        .assert()
        .success();
    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "delete", "1"])
        .assert()
        .success();

    let after = stored(temp.path(), "blog_posts");
    assert_eq!(after.as_array().unwrap().len(), 2);
    assert_eq!(after[0], before[1]);
    assert_eq!(after[1], before[2]);
}

#[test]
fn test_update_content_regenerates_excerpt() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args([
            "blog",
            "add",
            "--title",
            "Jet Lag",
            "--content",
            "Drink water.",
            "--author",
            "Crew Life",
        ])
        .assert()
        .success();
    let id = stored(temp.path(), "blog_posts")[1]["id"]
        .as_str()
        .unwrap()
        .to_string();

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "update", &id, "--content", "Sleep on local time."])
        .assert()
        .success();

    let posts = stored(temp.path(), "blog_posts");
    assert_eq!(posts[1]["excerpt"], "Sleep on local time....");
}

#[test]
fn test_update_unknown_post_is_noop() {
    let temp = TempDir::new().unwrap();
    init_unlocked_board(temp.path());

    crewboard_cmd()
        .current_dir(temp.path())
        .args(["blog", "update", "missing", "--title", "Nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No post with id missing; nothing updated"));
}
