//! The central **abstraction** for host-inventory operations.
//!
//! This module defines the unified contract that concrete backends, test
//! doubles, and decorators all implement. Higher-level modules depend
//! strictly on this trait rather than any concrete implementation, which is
//! what lets cross-cutting wrappers (see [`crate::logging`]) stack freely.

use async_trait::async_trait;
use fleetr_common::error::ServiceError;
use fleetr_common::host::Host;
use fleetr_common::options::ListOptions;
use fleetr_common::summary::HostSummary;

/// The host-inventory capability set.
///
/// Implementations may suspend on IO inside any operation. Cancellation is
/// the caller's business: dropping the returned future abandons the call.
///
/// Domain-level failures (unknown ID, rejected parameter, storage trouble)
/// are always reported through [`ServiceError`], never by panicking.
#[async_trait]
pub trait HostService: Send + Sync {
    /// Lists enrolled hosts. How `options` is interpreted is up to the
    /// implementation; the returned order is the order callers will see.
    async fn list_hosts(&self, options: ListOptions) -> Result<Vec<Host>, ServiceError>;

    /// Like [`list_hosts`](Self::list_hosts), but constrained to the page
    /// window described by `options`.
    async fn list_hosts_paginated(
        &self,
        options: ListOptions,
    ) -> Result<Vec<Host>, ServiceError>;

    /// Fetches a single host by its enrollment ID.
    async fn get_host(&self, id: u64) -> Result<Host, ServiceError>;

    /// Computes fleet-wide status counts.
    async fn get_host_summary(&self) -> Result<HostSummary, ServiceError>;

    /// Removes a host from the inventory.
    async fn delete_host(&self, id: u64) -> Result<(), ServiceError>;
}
