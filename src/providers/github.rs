//! GitHub REST: `GET https://api.github.com/repos/{owner}/{repo}/commits?per_page=1[&sha=branch]`.

use serde::Deserialize;

use super::{decode, optional, required, DataError, MissingArgs};
use crate::fetch::UpstreamRequest;
use crate::util::encode_uri_component;

pub const NAME: &str = "github";

const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Deserialize)]
struct GithubCommit {
  #[serde(default)]
  commit: Option<GithubCommitDetail>,
}

#[derive(Debug, Deserialize)]
struct GithubCommitDetail {
  #[serde(default)]
  committer: Option<GitSignature>,
  #[serde(default)]
  author: Option<GitSignature>,
}

#[derive(Debug, Deserialize)]
struct GitSignature {
  #[serde(default)]
  date: Option<String>,
}

pub fn build_request(args: &[String], token: Option<&str>) -> Result<UpstreamRequest, MissingArgs> {
  let owner = required(args, 0, NAME, "owner")?;
  let repo = required(args, 1, NAME, "repo")?;

  let mut url = format!("https://api.github.com/repos/{}/{}/commits?per_page=1", owner, repo);

  if let Some(branch) = optional(args, 2) {
    url.push_str("&sha=");
    url.push_str(&encode_uri_component(branch));
  }

  Ok(UpstreamRequest::json(url).with_accept(ACCEPT).with_bearer(token))
}

/// Committer date, falling back to author date.
pub fn commit_timestamp(body: serde_json::Value) -> Result<String, DataError> {
  let commits: Vec<GithubCommit> = decode(body)?;
  let first = commits.into_iter().next().ok_or(DataError::NoCommits)?;
  let detail = first.commit.ok_or(DataError::InvalidCommitData)?;

  detail
    .committer
    .and_then(|s| s.date)
    .or_else(|| detail.author.and_then(|s| s.date))
    .ok_or(DataError::InvalidCommitData)
}
