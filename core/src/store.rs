//! In-memory implementation of the host-inventory contract.
//!
//! This is the reference backend: tests run against it, and embedders can
//! use it as a stand-in while wiring a real storage layer. It keeps the
//! whole inventory in process memory with no durability.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

use anyhow::anyhow;
use async_trait::async_trait;
use fleetr_common::error::ServiceError;
use fleetr_common::host::{Host, HostStatus};
use fleetr_common::options::{ListOptions, OrderDirection};
use fleetr_common::summary::HostSummary;

use crate::service::HostService;

/// A [`HostService`] backed by an in-process map keyed by host ID.
pub struct InMemoryHostService {
    hosts: RwLock<BTreeMap<u64, Host>>,
}

impl InMemoryHostService {
    pub fn new() -> Self {
        Self {
            hosts: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn with_hosts(hosts: impl IntoIterator<Item = Host>) -> Self {
        let service = Self::new();
        for host in hosts {
            service.insert(host);
        }
        service
    }

    /// Adds or replaces a host under its ID.
    pub fn insert(&self, host: Host) {
        if let Ok(mut table) = self.hosts.write() {
            table.insert(host.id, host);
        }
    }

    fn table(&self) -> Result<RwLockReadGuard<'_, BTreeMap<u64, Host>>, ServiceError> {
        self.hosts
            .read()
            .map_err(|_| ServiceError::Storage(anyhow!("host table lock poisoned")))
    }

    fn table_mut(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<u64, Host>>, ServiceError> {
        self.hosts
            .write()
            .map_err(|_| ServiceError::Storage(anyhow!("host table lock poisoned")))
    }

    /// Materializes the inventory in the order the options ask for.
    ///
    /// Supported order keys: `id` (default) and `hostname`.
    fn ordered(&self, options: &ListOptions) -> Result<Vec<Host>, ServiceError> {
        let table = self.table()?;
        // BTreeMap iteration is already ascending by ID.
        let mut hosts: Vec<Host> = table.values().cloned().collect();
        drop(table);

        match options.order_key.as_deref() {
            None | Some("id") => {}
            Some("hostname") => hosts.sort_by(|a, b| a.hostname.cmp(&b.hostname)),
            Some(other) => {
                return Err(ServiceError::InvalidArgument {
                    reason: format!("unsupported order key: {other}"),
                });
            }
        }
        if options.order_direction == OrderDirection::Descending {
            hosts.reverse();
        }
        Ok(hosts)
    }
}

impl Default for InMemoryHostService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostService for InMemoryHostService {
    async fn list_hosts(&self, options: ListOptions) -> Result<Vec<Host>, ServiceError> {
        self.ordered(&options)
    }

    async fn list_hosts_paginated(
        &self,
        options: ListOptions,
    ) -> Result<Vec<Host>, ServiceError> {
        let hosts = self.ordered(&options)?;
        if options.per_page == 0 {
            return Ok(hosts);
        }
        let start = options.page as usize * options.per_page as usize;
        Ok(hosts
            .into_iter()
            .skip(start)
            .take(options.per_page as usize)
            .collect())
    }

    async fn get_host(&self, id: u64) -> Result<Host, ServiceError> {
        self.table()?
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound { id })
    }

    async fn get_host_summary(&self) -> Result<HostSummary, ServiceError> {
        let table = self.table()?;
        let now = SystemTime::now();
        let mut summary = HostSummary::default();
        for host in table.values() {
            match host.status(now) {
                HostStatus::Online => summary.online_count += 1,
                HostStatus::Offline => summary.offline_count += 1,
                HostStatus::Mia => summary.mia_count += 1,
            }
            if host.is_new(now) {
                summary.new_count += 1;
            }
        }
        Ok(summary)
    }

    async fn delete_host(&self, id: u64) -> Result<(), ServiceError> {
        self.table_mut()?
            .remove(&id)
            .map(|_| ())
            .ok_or(ServiceError::NotFound { id })
    }
}
