//! # Logging Decorator
//!
//! Wraps any [`HostService`] in the same contract, recording one structured
//! event per call: method name, outcome, elapsed time.
//!
//! The decorator is strictly transparent. It never retries, rewrites, or
//! swallows what the delegate returns, so stacking further same-shaped
//! wrappers (metrics, tracing, auth) composes without surprises.

use std::time::Instant;

use async_trait::async_trait;
use fleetr_common::error::ServiceError;
use fleetr_common::host::Host;
use fleetr_common::options::ListOptions;
use fleetr_common::summary::HostSummary;
use tracing::info;

use crate::service::HostService;

/// A [`HostService`] that logs every call made through it.
pub struct LoggedHostService {
    inner: Box<dyn HostService>,
}

impl LoggedHostService {
    pub fn new(inner: Box<dyn HostService>) -> Self {
        Self { inner }
    }
}

/// Emits the call record when it goes out of scope.
///
/// Tying emission to `Drop` guarantees exactly one record per call on every
/// exit path, including a panicking delegate.
struct CallTimer {
    method: &'static str,
    start: Instant,
    error: Option<String>,
}

impl CallTimer {
    fn start(method: &'static str) -> Self {
        Self {
            method,
            start: Instant::now(),
            error: None,
        }
    }

    fn observe<T>(&mut self, result: &Result<T, ServiceError>) {
        if let Err(err) = result {
            self.error = Some(err.to_string());
        }
    }
}

impl Drop for CallTimer {
    fn drop(&mut self) {
        info!(
            method = self.method,
            err = self.error.as_deref(),
            took_ms = self.start.elapsed().as_millis() as u64,
            "service call finished"
        );
    }
}

#[async_trait]
impl HostService for LoggedHostService {
    async fn list_hosts(&self, options: ListOptions) -> Result<Vec<Host>, ServiceError> {
        let mut timer = CallTimer::start("list_hosts");
        let result = self.inner.list_hosts(options).await;
        timer.observe(&result);
        result
    }

    async fn list_hosts_paginated(
        &self,
        options: ListOptions,
    ) -> Result<Vec<Host>, ServiceError> {
        let mut timer = CallTimer::start("list_hosts_paginated");
        let result = self.inner.list_hosts_paginated(options).await;
        timer.observe(&result);
        result
    }

    async fn get_host(&self, id: u64) -> Result<Host, ServiceError> {
        let mut timer = CallTimer::start("get_host");
        let result = self.inner.get_host(id).await;
        timer.observe(&result);
        result
    }

    async fn get_host_summary(&self) -> Result<HostSummary, ServiceError> {
        let mut timer = CallTimer::start("get_host_summary");
        let result = self.inner.get_host_summary().await;
        timer.observe(&result);
        result
    }

    async fn delete_host(&self, id: u64) -> Result<(), ServiceError> {
        let mut timer = CallTimer::start("delete_host");
        let result = self.inner.delete_host(id).await;
        timer.observe(&result);
        result
    }
}
