//! Presentation projections of domain hosts.

use std::time::SystemTime;

use fleetr_common::host::{Host, HostStatus};

/// A read-only projection of a [`Host`] for display purposes.
///
/// The view freezes the host data and its derived status at construction
/// time; it is never re-synchronized with the underlying entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostView {
    pub host: Host,
    /// Liveness classification as of view construction.
    pub status: HostStatus,
    /// Human-facing label; defaults to the host's name.
    pub display_text: String,
}

/// Builds the view of a single host as of `now`. Pure and infallible.
pub fn build_host_view(host: Host, now: SystemTime) -> HostView {
    let status = host.status(now);
    let display_text = host.hostname.clone();
    HostView {
        host,
        status,
        display_text,
    }
}

/// Builds views for a batch of hosts, preserving input order.
///
/// Every view in the batch is classified against the same `now`, so one
/// response never mixes observation instants.
pub fn build_host_views(hosts: Vec<Host>, now: SystemTime) -> Vec<HostView> {
    hosts
        .into_iter()
        .map(|host| build_host_view(host, now))
        .collect()
}
