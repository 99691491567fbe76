/// Monotonic token handed out per list request.
///
/// A response is applied only if its token is still the latest one issued;
/// anything older lost the race and is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the token for a new request
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }

    /// Invalidates every outstanding token without starting a request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut seq = RequestSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        // second request resolves first and is applied
        assert!(seq.is_current(second));
        // the slower first response arrives later and is dropped
        assert!(!seq.is_current(first));
    }

    #[test]
    fn test_invalidate_drops_in_flight() {
        let mut seq = RequestSequence::new();
        let token = seq.begin();
        seq.invalidate();
        assert!(!seq.is_current(token));
    }
}
