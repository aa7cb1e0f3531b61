use predicates::prelude::*;
use serial_test::serial;

fn badge_status(args: &[&str]) -> (String, String) {
  let out = test_support::badge_cmd().args(args).output().unwrap();
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  (
    v["status"].as_str().unwrap().to_string(),
    v["color"].as_str().unwrap().to_string(),
  )
}

#[test]
#[serial]
fn upstream_status_codes_map_to_phrases() {
  let cases = [
    ("404", "github: repo not found"),
    ("401", "github: unauthorized"),
    ("403", "github: unauthorized"),
    ("429", "github: rate limited"),
    ("502", "github: error"),
    ("timeout", "github: error"),
  ];
  for (code, expected) in cases {
    let _env = test_support::upstream_status(code);
    let (status, color) = badge_status(&["github/owner/missing-repo"]);
    assert_eq!(status, expected, "upstream status {}", code);
    assert_eq!(color, "grey");
  }
}

#[test]
#[serial]
fn provider_prefix_follows_the_tag() {
  let _env = test_support::upstream_status("404");
  assert_eq!(badge_status(&["gitlab/gitlab.com/42"]).0, "gitlab: repo not found");
  assert_eq!(badge_status(&["bitbucket/ws/repo"]).0, "bitbucket: repo not found");
  assert_eq!(badge_status(&["codeberg/o/r"]).0, "codeberg: repo not found");
}

#[test]
#[serial]
fn missing_commit_dates_are_invalid_data() {
  let _env = test_support::upstream_fixture("github/no_dates.json");
  assert_eq!(
    badge_status(&["github/octocat/Hello-World"]),
    ("github: invalid commit data".to_string(), "grey".to_string())
  );
}

#[test]
#[serial]
fn unknown_provider_is_unsupported() {
  assert_eq!(
    badge_status(&["sourceforge/x/y"]),
    ("unsupported type".to_string(), "grey".to_string())
  );
}

#[test]
#[serial]
fn absent_data_is_malformed() {
  assert_eq!(badge_status(&[]), ("malformed args".to_string(), "grey".to_string()));
  assert_eq!(badge_status(&["///"]), ("malformed args".to_string(), "grey".to_string()));
}

#[test]
#[serial]
fn strict_mode_exits_nonzero_on_absent_data() {
  test_support::badge_cmd()
    .arg("--strict")
    .assert()
    .failure()
    .stdout(predicate::str::contains("\"malformed args\""));
}

#[test]
#[serial]
fn serve_with_data_is_rejected() {
  test_support::badge_cmd()
    .args(["--serve", "github/o/r"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--serve"));
}
