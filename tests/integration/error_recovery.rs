//! Error recovery and edge case tests.
//!
//! Tests how the widget handles failed requests and out-of-order responses.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use anime_lookup::dropdown::{Phase, ERROR_LABEL};
use anime_lookup::metrics::Endpoint;
use anime_lookup::page::{
    PageOptions, PageOutcome, LOOKUP_FAILED_MESSAGE, RANDOM_FAILED_MESSAGE,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::{anime_json, envelope, mount_page};

#[tokio::test]
async fn test_failed_suggestion_query_shows_error_row_then_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("q", "Akira"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("q", "Akira 1988"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(vec![anime_json(47, "Akira")])),
        )
        .mount(&server)
        .await;

    let t = mount_page(&server, PageOptions::default());
    let dropdown = t.page.hero_dropdown();

    t.hero.type_text("Akira");
    dropdown.on_input().await;
    assert_eq!(t.hero_list().labels(), vec![ERROR_LABEL]);
    assert_eq!(dropdown.phase(), Phase::Error);
    assert!(!dropdown.on_row_selected(0));

    t.hero.type_text("Akira 1988");
    dropdown.on_input().await;
    assert_eq!(t.hero_list().labels(), vec!["Akira"]);
    assert_eq!(dropdown.phase(), Phase::Open);

    let summary = t.metrics.summary();
    let search = &summary.by_endpoint[Endpoint::Search.as_str()];
    assert_eq!(search.failed, 1);
    assert_eq!(search.successful, 1);
}

#[tokio::test]
async fn test_error_status_with_valid_body_is_still_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(envelope(vec![anime_json(1, "Trigun")])),
        )
        .mount(&server)
        .await;

    let t = mount_page(&server, PageOptions::default());
    t.hero.type_text("Trigun");
    t.page.hero_dropdown().on_input().await;
    assert_eq!(t.hero_list().labels(), vec![ERROR_LABEL]);

    let outcome = t.page.on_search().await;
    assert_eq!(
        outcome,
        PageOutcome::Message {
            text: LOOKUP_FAILED_MESSAGE.into()
        }
    );
}

#[tokio::test]
async fn test_slow_stale_response_is_not_rendered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("q", "Nar"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(vec![anime_json(16, "Nana")]))
                .set_delay(Duration::from_millis(400)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("q", "Naruto"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(vec![anime_json(20, "Naruto")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let t = mount_page(&server, PageOptions::default());

    t.hero.type_text("Nar");
    let first = {
        let dropdown = Arc::clone(t.page.hero_dropdown());
        tokio::spawn(async move { dropdown.on_input().await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    t.hero.type_text("Naruto");
    t.page.hero_dropdown().on_input().await;
    assert_eq!(t.hero_list().labels(), vec!["Naruto"]);

    first.await.unwrap();
    assert_eq!(t.hero_list().labels(), vec!["Naruto"]);
}

#[tokio::test]
async fn test_random_failure_is_logged_only_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random/anime"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let t = mount_page(&server, PageOptions::default());

    assert_eq!(t.page.on_random().await, PageOutcome::Unchanged);
    assert!(t.display.markup().is_none());
    assert_eq!(
        t.metrics.summary().by_endpoint[Endpoint::Random.as_str()].failed,
        1
    );
}

#[tokio::test]
async fn test_random_failure_surfaced_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let t = mount_page(
        &server,
        PageOptions {
            surface_random_errors: true,
        },
    );

    assert_eq!(
        t.page.on_random().await,
        PageOutcome::Message {
            text: RANDOM_FAILED_MESSAGE.into()
        }
    );
    assert!(t
        .display
        .markup()
        .unwrap()
        .contains(RANDOM_FAILED_MESSAGE));
}
