//! test-support: helpers for robust, nextest-friendly tests.
//!
//! Add as a dev-dependency in your top-level `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test_support = { path = "tests/support", features = ["serde"] }
//! ```
//!
//! Then in tests:
//! ```rust,ignore
//! use test_support::{badge_cmd, init_tracing, upstream_fixture};
//!
//! #[test]
//! fn example() {
//!     init_tracing();
//!     let _env = upstream_fixture("github/commits.json");
//!     badge_cmd().arg("github/octocat/Hello-World").assert().success();
//! }
//! ```

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

use std::env;
use std::path::{Path, PathBuf};

/// Binary under test.
pub const BIN: &str = "last-commit-badge";

/// Pinned "now" shared by fixtures; fixture dates are written relative to it.
pub const FIXED_NOW: &str = "2025-08-15T12:00:00Z";

/// Env vars that switch the binary to fixture-backed upstream calls.
pub const UPSTREAM_JSON_VAR: &str = "BADGE_TEST_UPSTREAM_JSON";
pub const UPSTREAM_STATUS_VAR: &str = "BADGE_TEST_UPSTREAM_STATUS";

/// Initialize `tracing` once, honoring `RUST_LOG` and writing via the test writer.
///
/// Safe to call from multiple tests; only the first call configures the global subscriber.
pub fn init_tracing() {
    static INIT: Lazy<()> = Lazy::new(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("warn,test=info"))
            .unwrap();
        // with_test_writer() causes logs to appear alongside failing tests only (cargo/nextest)
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
    Lazy::force(&INIT);
}

/// Return the path to the repository's `tests/fixtures` directory.
///
/// This crate lives in `<repo>/tests/support`, so the fixtures sit next to it.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("tests"))
        .join("fixtures")
}

/// Return the path to the repository's `tests/schemas` directory.
pub fn schemas_dir() -> PathBuf {
    fixtures_dir().with_file_name("schemas")
}

/// Read a UTF-8 text fixture into a string.
pub fn read_fixture_text<P: AsRef<Path>>(rel_path: P) -> String {
    let path = fixtures_dir().join(rel_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// Read a JSON schema from `tests/schemas` (enable `serde` feature).
#[cfg(feature = "serde")]
pub fn read_schema(name: &str) -> serde_json::Value {
    let path = schemas_dir().join(name);
    let data = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read schema {}: {e}", path.display()));
    serde_json::from_slice(&data)
        .unwrap_or_else(|e| panic!("invalid schema JSON {}: {e}", path.display()))
}

/// Serve `rel_path` (under `tests/fixtures`) as the upstream response body.
pub fn upstream_fixture<P: AsRef<Path>>(rel_path: P) -> EnvGuard {
    let body = read_fixture_text(rel_path);
    EnvGuard::set_many(&[(UPSTREAM_JSON_VAR, body.as_str())])
}

/// Make every upstream call fail with HTTP `status` (or `"timeout"`).
pub fn upstream_status(status: &str) -> EnvGuard {
    EnvGuard::set_many(&[(UPSTREAM_STATUS_VAR, status)])
}

/// Run a binary target with `assert_cmd`, returning the ready-to-run `Command`.
///
/// Example:
/// ```ignore
/// use test_support::cmd_bin;
/// use predicates::prelude::*;
///
/// let mut cmd = cmd_bin("my-cli");
/// cmd.arg("--help").assert().success().stdout(predicate::str::contains("Usage"));
/// ```
pub fn cmd_bin(bin: &str) -> assert_cmd::Command {
    init_tracing();
    assert_cmd::Command::cargo_bin(bin).expect("binary target not found")
}

/// The badge binary with "now" pinned to [`FIXED_NOW`] and provider tokens cleared.
///
/// Fixture env vars set through [`EnvGuard`] in the test process are inherited.
pub fn badge_cmd() -> assert_cmd::Command {
    let mut cmd = cmd_bin(BIN);
    cmd.args(["--now-override", FIXED_NOW])
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env_remove("GITLAB_TOKEN")
        .env("RUST_LOG", "warn");
    cmd
}

/// Guard for temporarily setting environment variables.
pub struct EnvGuard {
    prev: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn set_many(kv: &[(&str, &str)]) -> Self {
        let mut prev = Vec::with_capacity(kv.len());
        for (k, v) in kv {
            let k_owned = k.to_string();
            prev.push((k_owned.clone(), env::var(k).ok()));
            env::set_var(k, v);
        }
        Self { prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (k, old) in self.prev.drain(..) {
            match old {
                Some(v) => env::set_var(&k, v),
                None => env::remove_var(&k),
            }
        }
    }
}
