//! # Host Model
//!
//! The inventory's central entity: a machine that periodically checks in.
//!
//! Liveness is not stored, it is *derived*: [`Host::status`] classifies a
//! host against a point in time, so two observers asking at different
//! instants may legitimately disagree.

use std::fmt;
use std::time::{Duration, SystemTime};

/// A host is considered missing-in-action once it has been silent this long.
pub const MIA_THRESHOLD: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Grace period added on top of the check-in interval before a host counts
/// as offline. Absorbs scheduling jitter on the reporting side.
pub const ONLINE_BUFFER: Duration = Duration::from_secs(60);

/// Hosts enrolled within this window count as "new" in fleet summaries.
pub const NEW_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Fallback check-in interval for hosts that never reported one.
pub const DEFAULT_CHECK_IN_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Derived liveness classification of a [`Host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostStatus {
    Online,
    Offline,
    Mia,
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStatus::Online => write!(f, "online"),
            HostStatus::Offline => write!(f, "offline"),
            HostStatus::Mia => write!(f, "mia"),
        }
    }
}

/// An enrolled machine as the storage layer hands it out.
///
/// The ID is immutable for the lifetime of the enrollment. This crate never
/// mutates a host; it only reads and classifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub id: u64,
    pub hostname: String,
    pub created_at: SystemTime,
    pub last_seen_at: SystemTime,
    /// How often this host is expected to report in.
    pub check_in_interval: Duration,
}

impl Host {
    /// Classifies the host's liveness as of `now`.
    ///
    /// Total and deterministic: the same `(host, now)` pair always yields
    /// the same status.
    pub fn status(&self, now: SystemTime) -> HostStatus {
        if self.last_seen_at + MIA_THRESHOLD < now {
            HostStatus::Mia
        } else if self.last_seen_at + self.check_in_interval + ONLINE_BUFFER < now {
            HostStatus::Offline
        } else {
            HostStatus::Online
        }
    }

    /// Whether the host enrolled recently enough to count as "new".
    pub fn is_new(&self, now: SystemTime) -> bool {
        // A creation time ahead of `now` (clock skew) still counts as new.
        now.duration_since(self.created_at)
            .map(|age| age < NEW_WINDOW)
            .unwrap_or(true)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
