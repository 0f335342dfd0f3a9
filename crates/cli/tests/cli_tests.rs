use std::io::{BufRead, BufReader, Write};
use std::process::Stdio;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_body() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "mealId": "m1",
            "mealimageurl": "https://file.b18a.io/default_meal_image.jpg",
            "mealName": "Chicken Salad",
            "foodType": "Salad",
            "cooking_method": "Raw",
            "mealTargetCalories": 420.0,
            "mealTargetProtein": 35.0,
            "mealTargetCarbs": 12.0,
            "mealTargetFats": 22.0,
            "description": "Grilled chicken over greens.",
            "mealTypes": ["Lunch"],
            "mealIngredients": [
                {"ingredient": {"name": "Chicken breast"}, "portion": 150.0, "unit": "g"}
            ],
            "score": 0.92
        }],
        "total": 1
    })
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search meals by free text"));
}

#[test]
fn test_cli_search_help() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.arg("search").arg("--help").assert().success().stdout(predicate::str::contains("top-k"));
}

#[test]
fn test_cli_rejects_zero_top_k() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.args(["--top-k", "0", "search", "soup"]).assert().failure();
}

#[test]
fn test_cli_blank_search_fails() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.args(["--base-url", "http://127.0.0.1:1", "search", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("query is blank"));
}

#[test]
fn test_cli_unreachable_service_fails() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.args(["--base-url", "http://127.0.0.1:1", "search", "soup"]).assert().failure();
}

#[test]
fn test_cli_interactive_help_and_quit() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.args(["--base-url", "http://127.0.0.1:1"])
        .write_stdin(":help\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(":open N"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_search_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/search"))
        .and(query_param("query", "chicken salad"))
        .and(query_param("top_k", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("mealsearch")
            .unwrap()
            .env_remove("MEALSEARCH_TOP_K")
            .args(["--base-url", uri.as_str(), "search", "chicken salad"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"mealName\": \"Chicken Salad\""))
            .stdout(predicate::str::contains("\"total\": 1"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_show_prints_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/search"))
        .and(query_param("top_k", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("mealsearch")
            .unwrap()
            .args(["--base-url", uri.as_str(), "--top-k", "3", "show", "salad", "--index", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chicken Salad"))
            .stdout(predicate::str::contains("Chicken breast (150g)"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_show_server_error_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("mealsearch")
            .unwrap()
            .args(["--base-url", uri.as_str(), "show", "salad"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("search request failed"));
    })
    .await
    .unwrap();
}

#[test]
fn test_cli_rust_log_overrides_default_level() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.env("RUST_LOG", "debug")
        .args(["--base-url", "http://127.0.0.1:1", "search", "soup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("client configured"));
}

#[test]
fn test_cli_default_log_level_hides_debug() {
    let mut cmd = Command::cargo_bin("mealsearch").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["--base-url", "http://127.0.0.1:1", "search", "soup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("client configured").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_base_url_from_env() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("mealsearch")
            .unwrap()
            .env("MEALSEARCH_BASE_URL", uri.as_str())
            .args(["search", "salad"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chicken Salad"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_interactive_waits_for_search_after_input_ends() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/search"))
        .and(query_param("query", "chicken salad"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_body())
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("mealsearch")
            .unwrap()
            .args(["--base-url", uri.as_str()])
            .write_stdin("chicken salad\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Searching…"))
            .stdout(predicate::str::contains(" 1. Chicken Salad (0.92)"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_interactive_failed_search_shows_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/search"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(100)))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        Command::cargo_bin("mealsearch")
            .unwrap()
            .args(["--base-url", uri.as_str()])
            .write_stdin("soup\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("No meals found."));
    })
    .await
    .unwrap();
}

/// Reads stdout lines until one contains `needle`, returning everything read.
fn read_until(reader: &mut impl BufRead, needle: &str) -> String {
    let mut seen = String::new();
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).unwrap();
        assert!(n > 0, "stdout closed before {needle:?}, got:\n{seen}");
        seen.push_str(&line);
        if line.contains(needle) {
            return seen;
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_interactive_search_open_close() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meals/search"))
        .and(query_param("query", "chicken salad"))
        .and(query_param("top_k", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_mealsearch"))
            .env_remove("MEALSEARCH_TOP_K")
            .args(["--base-url", uri.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();
        let mut stdin = child.stdin.take().unwrap();
        let mut stdout = BufReader::new(child.stdout.take().unwrap());

        // The blank line must not reach the server.
        writeln!(stdin, "   ").unwrap();
        writeln!(stdin, "chicken salad").unwrap();
        let listing = read_until(&mut stdout, "Chicken Salad (0.92)");
        assert!(listing.contains(" 1. Chicken Salad"));

        writeln!(stdin, ":open 1").unwrap();
        let details = read_until(&mut stdout, "Chicken breast (150g)");
        assert!(details.contains("Id:             m1"));

        writeln!(stdin, ":close").unwrap();
        read_until(&mut stdout, " 1. Chicken Salad (0.92)");

        writeln!(stdin, ":open 2").unwrap();
        read_until(&mut stdout, "No result #2.");

        writeln!(stdin, ":quit").unwrap();
        drop(stdin);
        assert!(child.wait().unwrap().success());
    })
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
