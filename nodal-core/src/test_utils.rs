//! Shared test utilities for `nodal-core`.

use nodal_test_support::profile::PropertyProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `NODAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = PropertyProfile::from_env(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Largest node count property strategies should generate.
#[must_use]
pub(crate) fn suite_max_nodes() -> usize {
    PropertyProfile::from_env(1, false).max_nodes()
}
