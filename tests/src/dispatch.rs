#![cfg(test)]
//! Full-stack dispatch tests: request envelope in, response envelope out,
//! with the logging decorator sitting between the endpoints and the backend.

use fleetr_common::error::ServiceError;
use fleetr_common::host::HostStatus;
use fleetr_common::options::{ListOptions, OrderDirection};
use fleetr_core::endpoint::{
    DeleteHostRequest, GetHostRequest, GetHostSummaryRequest, HostEndpoints,
    ListHostsPaginatedRequest, ListHostsRequest,
};
use fleetr_core::logging::LoggedHostService;
use fleetr_core::store::InMemoryHostService;

use crate::support::{self, BrokenService};

/// Endpoints over the decorated seeded backend, assembled the way an
/// embedding transport would assemble them.
fn stack() -> HostEndpoints {
    HostEndpoints::new(Box::new(LoggedHostService::new(Box::new(
        support::seeded_service(),
    ))))
}

#[tokio::test]
async fn get_host_returns_an_online_view() {
    let endpoints = stack();

    let view = endpoints
        .get_host(GetHostRequest { id: 42 })
        .await
        .expect("host 42 is enrolled");

    assert_eq!(view.host.id, 42);
    assert_eq!(view.status, HostStatus::Online);
    assert_eq!(view.display_text, "batch-42");
}

#[tokio::test]
async fn get_unknown_host_reports_not_found_in_band() {
    let endpoints = stack();

    let response = endpoints.get_host(GetHostRequest { id: 99 }).await;

    assert!(matches!(response, Err(ServiceError::NotFound { id: 99 })));
}

#[tokio::test]
async fn listing_preserves_backend_order() {
    let endpoints = stack();

    let options = ListOptions {
        order_key: Some(String::from("hostname")),
        order_direction: OrderDirection::Descending,
        ..ListOptions::default()
    };
    let views = endpoints
        .list_hosts(ListHostsRequest { options })
        .await
        .expect("listing succeeds");

    let names: Vec<&str> = views.iter().map(|v| v.display_text.as_str()).collect();
    assert_eq!(names, vec!["web-2", "web-1", "batch-42"]);
}

#[tokio::test]
async fn listing_an_empty_inventory_yields_an_empty_vec() {
    let endpoints = HostEndpoints::new(Box::new(InMemoryHostService::new()));

    let views = endpoints
        .list_hosts(ListHostsRequest::default())
        .await
        .expect("listing succeeds");

    assert!(views.is_empty());
}

#[tokio::test]
async fn paginated_listing_windows_through_the_stack() {
    let endpoints = stack();

    let views = endpoints
        .list_hosts_paginated(ListHostsPaginatedRequest {
            options: ListOptions {
                page: 1,
                per_page: 2,
                ..ListOptions::default()
            },
        })
        .await
        .expect("listing succeeds");

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].host.id, 42);
}

#[tokio::test]
async fn rejected_order_key_travels_inside_the_envelope() {
    let endpoints = stack();

    let response = endpoints
        .list_hosts(ListHostsRequest {
            options: ListOptions {
                order_key: Some(String::from("uptime")),
                ..ListOptions::default()
            },
        })
        .await;

    assert!(matches!(
        response,
        Err(ServiceError::InvalidArgument { .. })
    ));
}

#[tokio::test]
async fn summary_reflects_the_seeded_fleet() {
    let endpoints = stack();

    let summary = endpoints
        .get_host_summary(GetHostSummaryRequest)
        .await
        .expect("summary succeeds");

    assert_eq!(summary.online_count, 3);
    assert_eq!(summary.offline_count, 0);
    assert_eq!(summary.mia_count, 0);
    assert_eq!(summary.new_count, 0);
}

#[tokio::test]
async fn delete_then_get_observes_the_removal() {
    let endpoints = stack();

    endpoints
        .delete_host(DeleteHostRequest { id: 1 })
        .await
        .expect("delete succeeds");

    let response = endpoints.get_host(GetHostRequest { id: 1 }).await;
    assert!(matches!(response, Err(ServiceError::NotFound { id: 1 })));

    let views = endpoints
        .list_hosts(ListHostsRequest::default())
        .await
        .expect("listing succeeds");
    assert_eq!(views.len(), 2);
}

#[tokio::test]
async fn storage_failures_surface_as_envelope_errors_everywhere() {
    let endpoints = HostEndpoints::new(Box::new(LoggedHostService::new(Box::new(
        BrokenService,
    ))));

    assert!(matches!(
        endpoints.list_hosts(ListHostsRequest::default()).await,
        Err(ServiceError::Storage(_))
    ));
    assert!(matches!(
        endpoints.get_host(GetHostRequest { id: 1 }).await,
        Err(ServiceError::Storage(_))
    ));
    assert!(matches!(
        endpoints.get_host_summary(GetHostSummaryRequest).await,
        Err(ServiceError::Storage(_))
    ));
    assert!(matches!(
        endpoints.delete_host(DeleteHostRequest { id: 1 }).await,
        Err(ServiceError::Storage(_))
    ));
}
