/// Monotonic sequence of update-table tickets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue the next ticket. Tickets start at 1.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// A response is stale when a newer request has been issued since.
    pub fn is_stale(&self, ticket: u64) -> bool {
        ticket < self.latest
    }
}

/// Produces the cache-busting query for the spectrogram image.
///
/// Values follow the wall clock in milliseconds, bumped by one whenever the
/// clock has not moved past the previous value so two reloads never share a URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct CacheBuster {
    last: Option<u64>,
}

impl CacheBuster {
    pub fn next(&mut self, now_ms: u64) -> u64 {
        let stamp = match self.last {
            Some(prev) if now_ms <= prev => prev + 1,
            _ => now_ms,
        };
        self.last = Some(stamp);
        stamp
    }
}

/// `<base>?<stamp>`
pub fn cache_busted_url(base: &str, stamp: u64) -> String {
    format!("{base}?{stamp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut seq = RequestSeq::default();
        let a = seq.issue();
        let b = seq.issue();
        assert_eq!((a, b), (1, 2));
        assert!(seq.is_stale(a));
        assert!(!seq.is_stale(b));
    }

    #[test]
    fn test_cache_buster_is_strictly_increasing() {
        let mut cb = CacheBuster::default();
        assert_eq!(cb.next(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(cb.next(1_700_000_000_000), 1_700_000_000_001);
        // clock stepped backwards
        assert_eq!(cb.next(1_699_999_999_000), 1_700_000_000_002);
        assert_eq!(cb.next(1_700_000_000_500), 1_700_000_000_500);
    }

    #[test]
    fn test_cache_busted_url() {
        assert_eq!(cache_busted_url("/spectrogram", 42), "/spectrogram?42");
    }
}
