//! # Fleetr Core
//!
//! Transport-agnostic dispatch layer for a host-inventory service.
//!
//! ## Architecture Overview
//! The crate is organized into layers to keep the calling convention
//! independent of any particular transport or backend:
//!
//! * **[`service`]**: The capability contract every host-inventory backend
//!   satisfies. *Boundary towards storage.*
//! * **[`endpoint`]**: Per-operation request/response envelopes and the
//!   adapters that lift contract calls into them. *Boundary towards
//!   transports.*
//! * **[`view`]**: Read-only presentation projections of domain hosts.
//! * **[`logging`]**: A same-shaped decorator recording method, outcome and
//!   duration for every contract call.
//! * **[`store`]**: An in-memory reference implementation of the contract,
//!   used as a test double and embedder stand-in.
//!
//! Domain failures never escape as panics or transport errors: every
//! response envelope carries them as values.

pub mod endpoint;
pub mod logging;
pub mod service;
pub mod store;
pub mod view;
