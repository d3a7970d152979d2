//! Limit and offset parsing for list commands
//!
//! Raw values come straight from the command line. Nothing here fails:
//! unusable input falls back to a default instead.

use crate::config::AppConfig;

/// Clamping rules for `--limit` and `--offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    default_limit: u32,
    max_limit: u32,
}

impl Pagination {
    pub fn new(default_limit: u32, max_limit: u32) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    /// Resolve a raw limit
    ///
    /// Missing, non-numeric, zero or negative values give the default limit.
    /// Values above the maximum are lowered to the maximum.
    pub fn limit(&self, raw: Option<&str>) -> u32 {
        let Some(parsed) = raw.and_then(|s| s.trim().parse::<i64>().ok()) else {
            return self.default_limit;
        };

        if parsed <= 0 {
            self.default_limit
        } else if parsed > i64::from(self.max_limit) {
            self.max_limit
        } else {
            // in range 1..=max_limit
            parsed as u32
        }
    }

    /// Resolve a raw offset
    ///
    /// Missing, non-numeric or negative values give 0.
    pub fn offset(&self, raw: Option<&str>) -> u32 {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n >= 0)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }
}

impl From<&AppConfig> for Pagination {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.default_limit, config.max_limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults() {
        let p = Pagination::default();

        assert_eq!(p.limit(None), 20);
        assert_eq!(p.limit(Some("")), 20);
        assert_eq!(p.limit(Some("ten")), 20);
        assert_eq!(p.limit(Some("0")), 20);
        assert_eq!(p.limit(Some("-5")), 20);
    }

    #[test]
    fn test_limit_in_range_and_capped() {
        let p = Pagination::default();

        assert_eq!(p.limit(Some("1")), 1);
        assert_eq!(p.limit(Some("100")), 100);
        assert_eq!(p.limit(Some("101")), 100);
        assert_eq!(p.limit(Some("99999999999999")), 100);
    }

    #[test]
    fn test_offset() {
        let p = Pagination::default();

        assert_eq!(p.offset(None), 0);
        assert_eq!(p.offset(Some("abc")), 0);
        assert_eq!(p.offset(Some("-1")), 0);
        assert_eq!(p.offset(Some("0")), 0);
        assert_eq!(p.offset(Some("40")), 40);
        assert_eq!(p.offset(Some("99999999999")), u32::MAX);
    }

    #[test]
    fn test_custom_bounds() {
        let p = Pagination::new(5, 10);

        assert_eq!(p.limit(None), 5);
        assert_eq!(p.limit(Some("50")), 10);
    }
}
