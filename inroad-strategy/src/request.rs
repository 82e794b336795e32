//! Request tokens for stale-result discard.
//!
//! A user can switch targets mid-search; the prior result must then be
//! discardable. Every pathfinding invocation carries a monotonically
//! increasing token, and callers keep only results whose token still matches
//! the latest issued one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque, totally ordered request identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw token value, for logging.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic token source. One issuer per engine instance.
#[derive(Debug, Default)]
pub struct TokenIssuer {
    next: AtomicU64,
}

impl TokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token. Each call supersedes all earlier tokens.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True while `token` is the most recently issued one.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.next.load(Ordering::Relaxed) == token.0
    }
}
