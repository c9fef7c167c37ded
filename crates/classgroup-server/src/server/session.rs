//! Per-client session storage.
//!
//! The browser only holds a signed cookie carrying a random [`SessionId`]; the
//! grouping itself stays server-side in a [`SessionStore`]. Entries expire
//! after a fixed TTL and are overwritten by the client's next grouping. The
//! store holds at most `capacity` sessions; a new session arriving at a full
//! store evicts the one closest to expiry.

use classgroup::GroupSet;
use core::{fmt, str::FromStr, time::Duration};
use parking_lot::Mutex;
use rand::Rng;
use std::{collections::HashMap, sync::Arc, time::Instant};
use tokio_util::sync::CancellationToken;

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "classgroup_session";

/// Opaque 128-bit session identifier, rendered as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u128);

impl SessionId {
    /// Draws a fresh identifier from the thread-local CSPRNG.
    pub fn random() -> Self {
        Self(rand::rng().random())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSessionId;

impl FromStr for SessionId {
    type Err = InvalidSessionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(InvalidSessionId);
        }
        u128::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| InvalidSessionId)
    }
}

/// What a session remembers between the results page and the download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub groups: GroupSet,
    pub total_students: usize,
}

struct Entry {
    data: Arc<SessionData>,
    expires_at: Instant,
}

/// Thread-safe map of live sessions with a fixed time-to-live.
///
/// Expired entries are invisible to [`load`](Self::load) immediately and are
/// reclaimed by [`purge_expired`](Self::purge_expired).
pub struct SessionStore {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<SessionId, Entry>>,
}

impl SessionStore {
    /// Creates an empty store. `capacity` is clamped to at least one.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Saves `groups` for `id`, replacing whatever the session held before
    /// and restarting its TTL.
    pub fn store(&self, id: SessionId, groups: GroupSet) {
        self.store_at(id, groups, Instant::now());
    }

    /// Returns the session's grouping unless it is missing or expired.
    pub fn load(&self, id: SessionId) -> Option<Arc<SessionData>> {
        self.load_at(id, Instant::now())
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn store_at(&self, id: SessionId, groups: GroupSet, now: Instant) {
        let data = Arc::new(SessionData {
            total_students: groups.total_members(),
            groups,
        });
        let entry = Entry {
            data,
            expires_at: now + self.ttl,
        };
        let mut entries = self.entries.lock();
        if !entries.contains_key(&id) && entries.len() >= self.capacity {
            entries.retain(|_, entry| entry.expires_at > now);
            if entries.len() >= self.capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.expires_at)
                    .map(|(id, _)| *id);
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                    tracing::debug!(
                        capacity = self.capacity,
                        "Session store full; evicted oldest"
                    );
                }
            }
        }
        entries.insert(id, entry);
    }

    fn load_at(&self, id: SessionId, now: Instant) -> Option<Arc<SessionData>> {
        let entries = self.entries.lock();
        entries
            .get(&id)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| Arc::clone(&entry.data))
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }
}

/// Periodically purges expired sessions until `shutdown` is cancelled.
///
/// Designed to be spawned as a Tokio task next to the HTTP server.
pub async fn sweep_expired(
    store: Arc<SessionStore>,
    period: Duration,
    shutdown: CancellationToken,
) {
    tracing::trace!("Session sweeper started");
    let mut ticker = tokio::time::interval(period);

    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                let purged = store.purge_expired();
                if purged > 0 {
                    tracing::debug!(purged, remaining = store.len(), "Expired sessions purged");
                }
            }
        }
    }

    tracing::trace!("Session sweeper stopped");
}
