use predicates::str::contains;
use serde_json::Value;

mod common;
use common::{add_vote, hm, init_db, init_db_with_data, setup_test_db};

fn register(db_path: &str, post_id: &str, title: &str, published: &str) {
    hm().args([
        "--db",
        db_path,
        "--test",
        "register",
        post_id,
        title,
        "--url",
        &format!("https://example.org/?p={post_id}"),
        "--published",
        published,
    ])
    .assert()
    .success();
}

fn feed_json(db_path: &str, args: &[&str]) -> Vec<Value> {
    let mut full = vec!["--db", db_path, "--test"];
    full.extend_from_slice(args);

    let output = hm().args(&full).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("feed output is a JSON array")
}

#[test]
fn test_top_ranks_by_net_score() {
    let db_path = setup_test_db("top_ranks");
    init_db_with_data(&db_path);
    register(&db_path, "1", "Getting started", "2026-02-20");
    register(&db_path, "2", "Troubleshooting", "2026-02-25");

    // post 1: 3 pro / 1 contra (+2), post 2: 1 pro / 2 contra (-1)
    let feed = feed_json(&db_path, &["top"]);

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0]["ID"], 1);
    assert_eq!(feed[0]["name"], "Getting started");
    assert_eq!(feed[0]["url"], "https://example.org/?p=1");
    assert!(
        feed[0]["time"].as_str().expect("time string").starts_with("Published "),
        "ranking entries carry a publication age"
    );
    assert_eq!(feed[1]["ID"], 2);
}

#[test]
fn test_top_least_inverts_the_ranking() {
    let db_path = setup_test_db("top_least");
    init_db_with_data(&db_path);
    register(&db_path, "1", "Getting started", "2026-02-20");
    register(&db_path, "2", "Troubleshooting", "2026-02-25");

    let feed = feed_json(&db_path, &["top", "--least"]);
    assert_eq!(feed[0]["ID"], 2);
}

#[test]
fn test_top_skips_zero_score_posts() {
    let db_path = setup_test_db("top_zero");
    init_db(&db_path);
    register(&db_path, "1", "Balanced", "2026-02-20");
    register(&db_path, "2", "Unvoted", "2026-02-20");
    register(&db_path, "3", "Liked", "2026-02-20");

    add_vote(&db_path, "1", true, "2026-03-01 08:00");
    add_vote(&db_path, "1", false, "2026-03-01 09:00");
    add_vote(&db_path, "3", true, "2026-03-01 10:00");

    let feed = feed_json(&db_path, &["top"]);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["ID"], 3);
}

#[test]
fn test_top_honors_limit() {
    let db_path = setup_test_db("top_limit");
    init_db_with_data(&db_path);
    register(&db_path, "1", "Getting started", "2026-02-20");
    register(&db_path, "2", "Troubleshooting", "2026-02-25");

    let feed = feed_json(&db_path, &["top", "--limit", "1"]);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["ID"], 1);
}

#[test]
fn test_recent_lists_pro_votes_newest_first() {
    let db_path = setup_test_db("recent_pro");
    init_db_with_data(&db_path);
    register(&db_path, "2", "Troubleshooting", "2026-02-25");

    // pro votes newest first: post 2 (Mar 5), post 1 (Mar 4), post 1 (Mar 2)
    let feed = feed_json(&db_path, &["recent"]);

    assert_eq!(feed.len(), 3);
    assert_eq!(feed[0]["ID"], 2);
    assert_eq!(feed[0]["name"], "Troubleshooting");
    assert_eq!(feed[1]["ID"], 1);
    // post 1 was never registered, so the feed falls back
    assert_eq!(feed[1]["name"], "Post 1");
    assert_eq!(feed[1]["url"], "");
    assert!(feed[0]["time"].as_str().expect("time string").starts_with("Submitted "));
}

#[test]
fn test_recent_contra_switches_polarity() {
    let db_path = setup_test_db("recent_contra");
    init_db_with_data(&db_path);

    // contra votes newest first: post 2 (Mar 7), post 2 (Mar 6), post 1 (Mar 4)
    let feed = feed_json(&db_path, &["recent", "--contra"]);

    assert_eq!(feed.len(), 3);
    assert_eq!(feed[0]["ID"], 2);
    assert_eq!(feed[2]["ID"], 1);
}

#[test]
fn test_recent_honors_limit() {
    let db_path = setup_test_db("recent_limit");
    init_db_with_data(&db_path);

    let feed = feed_json(&db_path, &["recent", "--limit", "2"]);
    assert_eq!(feed.len(), 2);
}

#[test]
fn test_posts_lists_registered_posts() {
    let db_path = setup_test_db("posts_list");
    init_db_with_data(&db_path);
    register(&db_path, "1", "Getting started", "2026-02-20");
    register(&db_path, "2", "Troubleshooting", "2026-02-25");

    hm().args(["--db", &db_path, "--test", "posts"])
        .assert()
        .success()
        .stdout(contains("Getting started"))
        .stdout(contains("Troubleshooting"));
}

#[test]
fn test_register_rejects_bad_date() {
    let db_path = setup_test_db("register_bad_date");
    init_db(&db_path);

    hm().args([
        "--db",
        &db_path,
        "--test",
        "register",
        "1",
        "Guide",
        "--published",
        "last tuesday",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date"));
}
