//! # Endpoint Adapters
//!
//! Lifts every [`HostService`] operation into a uniform
//! `(request) -> response` calling convention for transports to consume.
//!
//! Two rules hold for every adapter:
//! * Requests are statically typed, one struct per operation. There is no
//!   "malformed request" at this boundary; a transport that can construct
//!   the struct has already produced a well-formed call.
//! * Service failures are part of the response value. An adapter never
//!   panics on a domain error and never signals failure out-of-band, so a
//!   transport can match on `response.err()` the same way for every
//!   operation.

use std::time::SystemTime;

use fleetr_common::error::ServiceError;
use fleetr_common::options::ListOptions;
use fleetr_common::summary::HostSummary;

use crate::service::HostService;
use crate::view::{HostView, build_host_view, build_host_views};

/// The per-operation adapters, bound to one service instance.
///
/// The service is held behind the contract trait, so endpoints compose with
/// any stack of decorators the embedder assembled.
pub struct HostEndpoints {
    svc: Box<dyn HostService>,
}

/*************************************************************
                        Get Host
**************************************************************/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetHostRequest {
    pub id: u64,
}

pub type GetHostResponse = Result<HostView, ServiceError>;

/*************************************************************
                        List Hosts
**************************************************************/

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListHostsRequest {
    pub options: ListOptions,
}

pub type ListHostsResponse = Result<Vec<HostView>, ServiceError>;

/*************************************************************
                   List Hosts Paginated
**************************************************************/

/// Kept distinct from [`ListHostsRequest`]: the two listing contracts may
/// diverge upstream even though their shapes currently coincide. The page
/// window itself travels in [`ListOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListHostsPaginatedRequest {
    pub options: ListOptions,
}

pub type ListHostsPaginatedResponse = Result<Vec<HostView>, ServiceError>;

/*************************************************************
                      Get Host Summary
**************************************************************/

/// Summary takes no parameters; the unit request keeps the calling
/// convention uniform across operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetHostSummaryRequest;

pub type GetHostSummaryResponse = Result<HostSummary, ServiceError>;

/*************************************************************
                        Delete Host
**************************************************************/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteHostRequest {
    pub id: u64,
}

pub type DeleteHostResponse = Result<(), ServiceError>;

/*************************************************************
                         Adapters
**************************************************************/

impl HostEndpoints {
    pub fn new(svc: Box<dyn HostService>) -> Self {
        Self { svc }
    }

    pub async fn get_host(&self, req: GetHostRequest) -> GetHostResponse {
        let host = self.svc.get_host(req.id).await?;
        Ok(build_host_view(host, SystemTime::now()))
    }

    pub async fn list_hosts(&self, req: ListHostsRequest) -> ListHostsResponse {
        let hosts = self.svc.list_hosts(req.options).await?;
        Ok(build_host_views(hosts, SystemTime::now()))
    }

    pub async fn list_hosts_paginated(
        &self,
        req: ListHostsPaginatedRequest,
    ) -> ListHostsPaginatedResponse {
        let hosts = self.svc.list_hosts_paginated(req.options).await?;
        Ok(build_host_views(hosts, SystemTime::now()))
    }

    pub async fn get_host_summary(&self, _req: GetHostSummaryRequest) -> GetHostSummaryResponse {
        self.svc.get_host_summary().await
    }

    pub async fn delete_host(&self, req: DeleteHostRequest) -> DeleteHostResponse {
        self.svc.delete_host(req.id).await
    }
}
