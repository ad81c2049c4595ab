use tokio::time::{Duration, Instant};

/// Options for [`DismissalTracker::dismiss`](crate::DismissalTracker::dismiss).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissOptions {
    /// Seconds until the dismissal lapses. `0` keeps it forever.
    pub expires_in_seconds: u64,
}

impl DismissOptions {
    #[must_use]
    pub const fn expiring_in(seconds: u64) -> Self {
        Self { expires_in_seconds: seconds }
    }
}

/// A dismissal made in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissalRecord {
    dismissed_at: Instant,
    expires_in_seconds: u64,
}

impl DismissalRecord {
    /// Record dismissed now.
    #[must_use]
    pub fn new(expires_in_seconds: u64) -> Self {
        Self { dismissed_at: Instant::now(), expires_in_seconds }
    }

    #[must_use]
    pub const fn expires_in_seconds(&self) -> u64 {
        self.expires_in_seconds
    }

    #[must_use]
    pub const fn dismissed_at(&self) -> Instant {
        self.dismissed_at
    }

    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        self.expires_in_seconds == 0
    }

    /// `None` for permanent records (and for expiries too far out to represent).
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        if self.is_permanent() {
            return None;
        }
        self.dismissed_at.checked_add(Duration::from_secs(self.expires_in_seconds))
    }

    #[must_use]
    pub fn is_active_at(&self, now: Instant) -> bool {
        self.expires_at().is_none_or(|at| now < at)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn expiring_record_lapses() {
        let record = DismissalRecord::new(3);
        assert!(record.is_active());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(record.is_active());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(!record.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_record_never_lapses() {
        let record = DismissalRecord::new(0);
        tokio::time::advance(Duration::from_secs(60 * 60 * 24 * 365)).await;
        assert!(record.is_active());
        assert_eq!(record.expires_at(), None);
    }
}
