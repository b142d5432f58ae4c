//! Environment-driven sizing for property-test suites.
//!
//! Suites read one shared profile so CI can raise case counts or shrink
//! generated graphs without touching test code. Invalid overrides are logged
//! and ignored.

use std::env;

use tracing::warn;

/// Environment variable controlling proptest case counts.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const FORK_ENV_KEY: &str = "NODAL_PBT_FORK";
/// Environment variable capping the node count of generated graphs.
pub const MAX_NODES_ENV_KEY: &str = "NODAL_PBT_MAX_NODES";

/// Node ceiling used when no override is present.
pub const DEFAULT_MAX_NODES: usize = 48;

/// Smallest accepted node ceiling; every topology has a valid shape at
/// this size.
pub const MIN_MAX_NODES: usize = 5;

/// Resolved property-test settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyProfile {
    cases: u32,
    fork: bool,
    max_nodes: usize,
}

impl PropertyProfile {
    /// Reads the profile from the process environment.
    ///
    /// # Examples
    /// ```
    /// use nodal_test_support::profile::PropertyProfile;
    ///
    /// let profile = PropertyProfile::from_env(64, false);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_nodes() >= 5);
    /// ```
    #[must_use]
    pub fn from_env(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_cases, default_fork)
    }

    /// Reads the profile through `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        default_cases: u32,
        default_fork: bool,
    ) -> Self {
        Self {
            cases: read(&lookup, CASES_ENV_KEY, default_cases, parse_cases),
            fork: read(&lookup, FORK_ENV_KEY, default_fork, parse_switch),
            max_nodes: read(&lookup, MAX_NODES_ENV_KEY, DEFAULT_MAX_NODES, parse_max_nodes),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }

    /// Largest node count strategies should generate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_nodes(&self) -> usize { self.max_nodes }
}

fn read<T: Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        warn!(env = key, raw = %raw, reason = %reason, "ignoring invalid property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.parse::<u32>() {
        Ok(0) => Err("cases must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(error.to_string()),
    }
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true/false, 1/0, yes/no or on/off".to_owned()),
    }
}

fn parse_max_nodes(raw: &str) -> Result<usize, String> {
    let nodes = raw.parse::<usize>().map_err(|error| error.to_string())?;
    if nodes < MIN_MAX_NODES {
        return Err(format!("node ceiling must be at least {MIN_MAX_NODES}"));
    }
    Ok(nodes)
}
