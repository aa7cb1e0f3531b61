//! Codeberg (Forgejo/Gitea API v1): `GET https://codeberg.org/api/v1/repos/{owner}/{repo}/commits`.

use serde::Deserialize;

use super::{decode, optional, required, DataError, MissingArgs};
use crate::fetch::UpstreamRequest;

pub const NAME: &str = "codeberg";

#[derive(Debug, Deserialize)]
struct CodebergCommit {
  #[serde(default)]
  created: Option<String>,
}

pub fn build_request(args: &[String]) -> Result<UpstreamRequest, MissingArgs> {
  let owner = required(args, 0, NAME, "owner")?;
  let repo = required(args, 1, NAME, "repo")?;

  // stat/verification/files are expensive server-side and unused here
  let mut url = format!(
    "https://codeberg.org/api/v1/repos/{}/{}/commits?stat=false&verification=false&files=false&limit=1",
    owner, repo
  );

  if let Some(sha) = optional(args, 2) {
    url.push_str("&sha=");
    url.push_str(sha);
  }

  Ok(UpstreamRequest::json(url))
}

pub fn commit_timestamp(body: serde_json::Value) -> Result<String, DataError> {
  let commits: Vec<CodebergCommit> = decode(body)?;
  let first = commits.into_iter().next().ok_or(DataError::NoCommits)?;

  first.created.ok_or(DataError::InvalidCommitData)
}
