//! GitLab REST v4: `GET https://{host}/api/v4/projects/{id}/repository/commits`.
//!
//! Args: `[host, project, ...rest]`. A non-numeric project followed by another
//! argument is a namespaced path (`group/project`, sent as `group%2Fproject`).
//! Whatever remains is passed through as percent-decoded `key=value` query
//! fragments, e.g. `ref_name=main`.

use serde::Deserialize;

use super::{decode, required, DataError, MissingArgs};
use crate::fetch::UpstreamRequest;
use crate::util::{decode_uri_component, is_numeric};

pub const NAME: &str = "gitlab";

#[derive(Debug, Deserialize)]
struct GitlabCommit {
  committed_date: Option<String>,
}

pub fn build_request(args: &[String], token: Option<&str>) -> Result<UpstreamRequest, MissingArgs> {
  let host = required(args, 0, NAME, "host")?;
  let mut project = required(args, 1, NAME, "project id")?.to_string();
  let mut rest = args.iter().skip(2);

  if !is_numeric(&project) {
    if let Some(name) = rest.next() {
      project = format!("{}%2F{}", project, name);
    }
  }

  let mut url = format!("https://{}/api/v4/projects/{}/repository/commits", host, project);
  let query: Vec<String> = rest.map(|fragment| decode_uri_component(fragment)).collect();

  if !query.is_empty() {
    url.push('?');
    url.push_str(&query.join("&"));
  }

  Ok(UpstreamRequest::json(url).with_bearer(token))
}

pub fn commit_timestamp(body: serde_json::Value) -> Result<String, DataError> {
  let commits: Vec<GitlabCommit> = decode(body)?;
  let first = commits.into_iter().next().ok_or(DataError::NoCommits)?;

  first.committed_date.ok_or(DataError::InvalidCommitData)
}
