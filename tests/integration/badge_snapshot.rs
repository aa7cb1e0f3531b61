use serial_test::serial;

#[test]
#[serial]
fn github_default_badge_snapshot() {
  test_support::init_tracing();
  let _env = test_support::upstream_fixture("github/commits.json");

  let out = test_support::badge_cmd()
    .arg("github/octocat/Hello-World")
    .output()
    .unwrap();
  assert!(out.status.success());
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

  insta::with_settings!({ sort_maps => true }, {
    insta::assert_json_snapshot!(v, @r###"
  {
    "color": "brightgreen",
    "status": "3 days ago",
    "subject": "last commit"
  }
  "###);
  });
}

#[test]
#[serial]
fn shields_error_badge_snapshot() {
  let _env = test_support::upstream_status("404");

  let out = test_support::badge_cmd()
    .args(["bitbucket/ws/gone", "--user-agent", "Shields.io/2003a"])
    .output()
    .unwrap();
  assert!(out.status.success());
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

  insta::with_settings!({ sort_maps => true }, {
    insta::assert_json_snapshot!(v, @r###"
  {
    "color": "grey",
    "label": "last commit",
    "message": "bitbucket: repo not found",
    "schemaVersion": 1
  }
  "###);
  });
}
