use jsonschema::validator_for;
use serial_test::serial;

fn compile_schema(name: &str) -> jsonschema::Validator {
  let schema = test_support::read_schema(name);
  validator_for(&schema).expect("compile schema")
}

fn render(args: &[&str]) -> serde_json::Value {
  let out = test_support::badge_cmd().args(args).output().unwrap();
  assert!(out.status.success());
  serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
#[serial]
fn default_output_conforms_to_schema() {
  let compiled = compile_schema("badge.schema.json");

  let _env = test_support::upstream_fixture("gitlab/commits.json");
  for args in [
    vec!["gitlab/gitlab.example.com/42"],
    vec!["sourceforge/x/y"],
    vec![],
  ] {
    let v = render(&args);
    compiled.validate(&v).expect("schema validation failed for default badge");
  }
}

#[test]
#[serial]
fn shields_output_conforms_to_endpoint_schema() {
  let compiled = compile_schema("shields-endpoint.schema.json");

  let _env = test_support::upstream_fixture("codeberg/commits.json");
  let v = render(&["codeberg/forgejo/forgejo", "--user-agent", "Shields.io/2003a"]);
  compiled.validate(&v).expect("schema validation failed for shields badge");

  let _status = test_support::upstream_status("429");
  let v = render(&["codeberg/forgejo/forgejo", "--user-agent", "Shields.io/2003a"]);
  compiled.validate(&v).expect("schema validation failed for shields error badge");
  assert_eq!(v["message"], "codeberg: rate limited");
}
