use error_stack::{ResultExt, report};
use rand::Rng;

use crate::error::{Error, QuoterResult};

/// Environment variable holding the comma separated 1inch API keys.
pub const ONEINCH_API_KEYS_ENV: &str = "ONEINCH_API_KEYS";

/// Fixed set of interchangeable API keys for the upstream aggregator.
///
/// Loaded once at startup; selection is uniform per request with no
/// affinity, so the same key may serve consecutive calls.
#[derive(Debug, Clone)]
pub struct CredentialPool {
    keys: Vec<String>,
}

impl CredentialPool {
    /// Builds a pool from an explicit key list.
    pub fn new(keys: Vec<String>) -> QuoterResult<Self> {
        if keys.is_empty() {
            return Err(report!(Error::EmptyCredentialPool));
        }

        Ok(Self { keys })
    }

    /// Parses a comma separated credential list. Entries are trimmed and
    /// blanks dropped.
    pub fn from_delimited(raw: &str) -> QuoterResult<Self> {
        let keys: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .collect();

        Self::new(keys)
    }

    /// Loads the pool from the given environment variable; an unset variable
    /// counts as an empty list.
    pub fn from_env(var: &str) -> QuoterResult<Self> {
        let raw = std::env::var(var).unwrap_or_default();

        Self::from_delimited(&raw).attach_printable(format!("No API keys found in {var}"))
    }

    /// Picks one credential uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.keys[rng.gen_range(0..self.keys.len())]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_rejects_empty_list() {
        let result = CredentialPool::new(Vec::new());
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().current_context(),
            &Error::EmptyCredentialPool
        );
    }

    #[test]
    fn test_from_delimited() {
        let pool = CredentialPool::from_delimited("key1,key2,key3").unwrap();
        assert_eq!(pool.len(), 3);
        // Construction guarantees at least one key
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_from_delimited_trims_and_drops_blanks() {
        let pool = CredentialPool::from_delimited(" key1 , ,key2,").unwrap();
        assert_eq!(pool.len(), 2);

        let mut rng = StdRng::seed_from_u64(1);
        let picked = pool.pick(&mut rng);
        assert!(picked == "key1" || picked == "key2");
    }

    #[test]
    fn test_from_delimited_rejects_blank_input() {
        assert!(CredentialPool::from_delimited("").is_err());
        assert!(CredentialPool::from_delimited(" , ,").is_err());
    }

    #[test]
    fn test_pick_is_roughly_uniform() {
        let pool = CredentialPool::from_delimited("key0,key1,key2,key3").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut counts: HashMap<String, u32> = HashMap::new();
        let samples: u32 = 40_000;
        for _ in 0..samples {
            *counts.entry(pool.pick(&mut rng).to_string()).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        let expected = samples / 4;
        for (key, count) in counts {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "selection skewed for {key}: {count} of {samples}"
            );
        }
    }

    #[test]
    fn test_pick_allows_repeats() {
        let pool = CredentialPool::new(vec!["only".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(pool.pick(&mut rng), "only");
        assert_eq!(pool.pick(&mut rng), "only");
    }
}
