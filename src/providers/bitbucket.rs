//! Bitbucket Cloud 2.0: `GET https://api.bitbucket.org/2.0/repositories/{workspace}/{repo}/commits/{branch}?pagelen=1`.

use serde::Deserialize;

use super::{decode, optional, required, DataError, MissingArgs};
use crate::fetch::UpstreamRequest;

pub const NAME: &str = "bitbucket";

const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Deserialize)]
struct BitbucketPage {
  #[serde(default)]
  values: Option<Vec<BitbucketCommit>>,
}

#[derive(Debug, Deserialize)]
struct BitbucketCommit {
  #[serde(default)]
  date: Option<String>,
}

pub fn build_request(args: &[String]) -> Result<UpstreamRequest, MissingArgs> {
  let workspace = required(args, 0, NAME, "workspace")?;
  let repo = required(args, 1, NAME, "repo")?;
  let branch = optional(args, 2).unwrap_or(DEFAULT_BRANCH);

  Ok(UpstreamRequest::json(format!(
    "https://api.bitbucket.org/2.0/repositories/{}/{}/commits/{}?pagelen=1",
    workspace, repo, branch
  )))
}

pub fn commit_timestamp(body: serde_json::Value) -> Result<String, DataError> {
  // paged responses are always objects; serde would otherwise read a sequence as the struct
  if !body.is_object() {
    return Err(DataError::InvalidCommitData);
  }

  let page: BitbucketPage = decode(body)?;
  let first = page
    .values
    .unwrap_or_default()
    .into_iter()
    .next()
    .ok_or(DataError::NoCommits)?;

  first.date.ok_or(DataError::InvalidCommitData)
}
