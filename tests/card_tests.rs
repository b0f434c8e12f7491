mod common;

use common::{local_fetcher, spawn_proxy, spawn_proxy_with_delays};
use link_preview_card::{LinkPreviewCard, MetadataResolver, NO_DESCRIPTION};
use std::time::Duration;

#[tokio::test]
async fn set_web_link_populates_the_card() {
    let addr = spawn_proxy(vec![(
        "200 OK",
        r#"{"data":{"og:title":"Example","og:description":"A page"}}"#,
    )])
    .await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)));

    card.set_web_link("https://example.com/page").await;

    let state = card.state().await;
    assert_eq!(state.model.title, "Example");
    assert_eq!(state.model.description, "A page");
    assert!(!state.loading);
    assert!(state.error_message.is_empty());
}

#[tokio::test]
async fn setting_the_same_link_does_not_refetch() {
    let addr = spawn_proxy(vec![
        ("200 OK", r#"{"data":{"og:title":"First"}}"#),
        ("200 OK", r#"{"data":{"og:title":"Second"}}"#),
    ])
    .await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)));

    card.set_web_link("https://example.com/").await;
    card.set_web_link("https://example.com/").await;

    assert_eq!(card.state().await.model.title, "First");
}

#[tokio::test]
async fn failure_keeps_the_model_unchanged() {
    let addr = spawn_proxy(vec![
        ("200 OK", r#"{"data":{"og:title":"Kept","og:description":"Still here"}}"#),
        ("500 Internal Server Error", "oops"),
    ])
    .await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)));

    card.set_web_link("https://example.com/good").await;
    let before = card.state().await.model;

    card.set_web_link("https://example.com/bad").await;

    let state = card.state().await;
    // Every field stays as it was; only the error indicator is set.
    assert_eq!(state.model, before);
    assert_eq!(state.model.title, "Kept");
    assert_eq!(state.error_message, "Error");
    assert!(!state.loading);
}

#[tokio::test]
async fn refresh_after_failure_clears_the_error() {
    let addr = spawn_proxy(vec![
        ("500 Internal Server Error", "oops"),
        ("200 OK", r#"{"data":{"og:title":"Recovered"}}"#),
    ])
    .await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)));

    card.set_web_link("https://example.com/").await;
    assert_eq!(card.state().await.error_message, "Error");

    card.refresh().await;
    let state = card.state().await;
    assert_eq!(state.model.title, "Recovered");
    assert!(state.error_message.is_empty());
}

#[tokio::test]
async fn superseded_resolution_cannot_overwrite_newer_one() {
    // The first request is answered late; without the generation guard its
    // stale body would clobber the result of the request that followed it.
    let addr = spawn_proxy_with_delays(vec![
        (300, ("200 OK", r#"{"data":{"og:title":"Old"}}"#)),
        (0, ("200 OK", r#"{"data":{"og:title":"New"}}"#)),
    ])
    .await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)));

    let slow = {
        let card = card.clone();
        tokio::spawn(async move { card.set_web_link("https://example.com/old").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    card.set_web_link("https://example.com/new").await;
    slow.await.unwrap();

    let state = card.state().await;
    assert_eq!(state.model.title, "New");
    assert!(!state.loading);
}

#[tokio::test]
async fn overlapping_refreshes_settle_the_loading_flag() {
    // The slow resolution finishes after the fast one has already failed and
    // been applied; once it is dropped no fetch remains in flight, so the
    // loading flag must end up cleared and the newer error must survive.
    let addr = spawn_proxy_with_delays(vec![
        (300, ("200 OK", r#"{"data":{"og:title":"Old"}}"#)),
        (0, ("500 Internal Server Error", "oops")),
    ])
    .await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)));

    let slow = {
        let card = card.clone();
        tokio::spawn(async move { card.set_web_link("https://example.com/old").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    card.set_web_link("https://example.com/new").await;
    slow.await.unwrap();

    let state = card.state().await;
    assert!(!state.loading);
    assert_eq!(state.error_message, "Error");
    assert_eq!(state.model.title, "");
}

#[tokio::test]
async fn consumer_attributes_are_settable() {
    let card = LinkPreviewCard::new();

    card.set_title("Manual").await;
    card.set_description("Set by hand").await;
    card.set_theme_color("#112233").await;
    card.set_logo("logo.png").await;
    card.set_status_code("418").await;

    let state = card.state().await;
    assert_eq!(state.model.title, "Manual");
    assert_eq!(state.model.description, "Set by hand");
    assert_eq!(state.model.theme_color, "#112233");
    assert_eq!(state.model.logo.as_deref(), Some("logo.png"));
    assert_eq!(state.model.status_code, "418");
}

#[tokio::test]
async fn render_emits_the_card_fragment() {
    let addr = spawn_proxy(vec![(
        "200 OK",
        r#"{"data":{"og:title":"A <b>Title</b>","ld+json":{"logo":"https://example.com/logo.png"}}}"#,
    )])
    .await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)));

    card.set_web_link("https://example.com/page").await;
    let html = card.render().await;

    assert!(html.contains(r#"<a href="https://example.com/page" target="_blank">"#));
    assert!(html.contains("A &lt;b&gt;Title&lt;/b&gt;"));
    assert!(html.contains("<details><summary>More details</summary>"));
    assert!(html.contains(NO_DESCRIPTION));
    assert!(html.contains(r#"<img src="https://example.com/logo.png" class="logo" />"#));
}

#[tokio::test]
async fn render_uses_localized_labels() {
    let addr = spawn_proxy(vec![("200 OK", r#"{"data":{"og:title":"Example"}}"#)]).await;
    let card =
        LinkPreviewCard::new_with_resolver(MetadataResolver::new_with_fetcher(local_fetcher(addr)))
            .with_language("es");

    card.set_web_link("https://example.com/").await;
    let html = card.render().await;

    assert!(html.contains("Más detalles"));
    assert!(html.contains("Visitar"));
}
