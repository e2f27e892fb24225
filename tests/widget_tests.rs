use predicates::str::contains;

mod common;
use common::{hm, init_db, setup_test_db};

#[test]
fn test_widget_renders_vote_fragment() {
    let db_path = setup_test_db("widget_vote");
    init_db(&db_path);

    hm().args(["--db", &db_path, "--test", "widget", "42"])
        .assert()
        .success()
        .stdout(contains(r#"data-post="42""#))
        .stdout(contains(r#"data-value="pro""#))
        .stdout(contains(r#"data-value="contra""#));
}

#[test]
fn test_widget_is_empty_for_hidden_posts() {
    let db_path = setup_test_db("widget_hidden");
    init_db(&db_path);

    hm().args([
        "--db", &db_path, "--test", "register", "9", "Internal notes", "--hidden",
    ])
    .assert()
    .success();

    let output = hm()
        .args(["--db", &db_path, "--test", "widget", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(output.is_empty(), "hidden posts render nothing");
}

#[test]
fn test_widget_shows_exists_fragment_after_voting() {
    let db_path = setup_test_db("widget_exists");
    init_db(&db_path);

    hm().args([
        "--db", &db_path, "--test", "vote", "5", "--pro", "--user", "token-abc",
    ])
    .assert()
    .success();

    hm().args(["--db", &db_path, "--test", "widget", "5", "--user", "token-abc"])
        .assert()
        .success()
        .stdout(contains("helpful-exists"));
}

#[test]
fn test_widget_ignores_other_users_votes() {
    let db_path = setup_test_db("widget_other_user");
    init_db(&db_path);

    hm().args([
        "--db", &db_path, "--test", "vote", "5", "--pro", "--user", "token-abc",
    ])
    .assert()
    .success();

    // a different token still gets the voting fragment
    hm().args(["--db", &db_path, "--test", "widget", "5", "--user", "token-xyz"])
        .assert()
        .success()
        .stdout(contains(r#"data-value="pro""#));
}

#[test]
fn test_widget_without_user_never_matches_anonymous_votes() {
    let db_path = setup_test_db("widget_anonymous");
    init_db(&db_path);

    // anonymous vote stores an empty token
    hm().args(["--db", &db_path, "--test", "vote", "5", "--pro"])
        .assert()
        .success();

    hm().args(["--db", &db_path, "--test", "widget", "5"])
        .assert()
        .success()
        .stdout(contains(r#"data-value="pro""#));
}
