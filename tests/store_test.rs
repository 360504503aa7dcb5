mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use serial_test::serial;
use snipcli::{management::LinkStore, types::CreateLinkRequest};

use common::StubBackend;

#[tokio::test]
#[serial]
async fn listing_is_cached_between_reads() {
    let (stub, addr) = StubBackend::new()
        .with_link(common::make_link("abc123", None, "example.com"))
        .serve()
        .await;
    common::point_client_at(addr);

    let mut store = LinkStore::new();
    let first = store.links().await.unwrap();
    let second = store.links().await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(stub.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
#[serial]
async fn successful_create_invalidates_the_cached_collection() {
    let (stub, addr) = StubBackend::new().serve().await;
    common::point_client_at(addr);

    let mut store = LinkStore::new();
    assert!(store.links().await.unwrap().is_empty());

    let created = store
        .create(&CreateLinkRequest {
            original_url: "example.com/page".to_string(),
            custom_name: None,
        })
        .await
        .unwrap();

    // Mutation completed, cache went stale, the next read refetches.
    let links = store.links().await.unwrap();
    assert_eq!(stub.list_calls.load(Ordering::SeqCst), 2);
    assert!(links.iter().any(|l| l.id == created.id));
}

#[tokio::test]
#[serial]
async fn successful_delete_invalidates_the_cached_collection() {
    let (stub, addr) = StubBackend::new()
        .with_link(common::make_link("abc123", None, "example.com"))
        .serve()
        .await;
    common::point_client_at(addr);

    let mut store = LinkStore::new();
    assert_eq!(store.links().await.unwrap().len(), 1);

    store.delete("abc123").await.unwrap();

    let links = store.links().await.unwrap();
    assert_eq!(stub.list_calls.load(Ordering::SeqCst), 2);
    assert!(links.is_empty());
}

#[tokio::test]
#[serial]
async fn failed_mutation_leaves_the_cache_untouched() {
    let (stub, addr) = StubBackend::new()
        .with_link(common::make_link("abc123", None, "example.com"))
        .mutation_status(StatusCode::INTERNAL_SERVER_ERROR)
        .serve()
        .await;
    common::point_client_at(addr);

    let mut store = LinkStore::new();
    assert_eq!(store.links().await.unwrap().len(), 1);

    assert!(store.delete("abc123").await.is_err());

    // The listing the user saw is still what the backend holds; no refetch.
    let links = store.links().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(stub.list_calls.load(Ordering::SeqCst), 1);
    assert!(stub.contains("abc123").await);
}

#[tokio::test]
#[serial]
async fn record_reads_go_through_the_cache() {
    let (stub, addr) = StubBackend::new()
        .with_link(common::make_link("abc123", None, "example.com"))
        .serve()
        .await;
    common::point_client_at(addr);

    let mut store = LinkStore::new();
    store.link("abc123").await.unwrap();
    store.link("abc123").await.unwrap();

    assert_eq!(stub.lookup_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
#[serial]
async fn created_alias_is_the_preferred_identifier_afterwards() {
    let (stub, addr) = StubBackend::new().serve().await;
    common::point_client_at(addr);

    let mut store = LinkStore::new();
    let created = store
        .create(&CreateLinkRequest {
            original_url: "example.com/page".to_string(),
            custom_name: Some("my-page".to_string()),
        })
        .await
        .unwrap();

    // The record's preferred display identifier is the alias, and subsequent
    // lookups address the link by it rather than by the generated code.
    assert_eq!(created.display_ident(), "my-page");
    assert_ne!(created.code, "my-page");

    let looked_up = store.link("my-page").await.unwrap();
    assert_eq!(looked_up.id, created.id);
    assert_eq!(stub.lookup_calls.load(Ordering::SeqCst), 1);
}
