/// Parsed `data` command: provider tag plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
  pub provider_tag: String,
  pub args: Vec<String>,
}

/// Split a slash-delimited command into a descriptor.
///
/// Empty segments are dropped, so `github//octocat/` and `github/octocat` parse
/// the same. Returns `None` when nothing but separators (or nothing at all) was
/// supplied.
pub fn parse(raw: Option<&str>) -> Option<RequestDescriptor> {
  let mut segments = raw?.split('/').filter(|s| !s.is_empty()).map(str::to_string);
  let provider_tag = segments.next()?;

  Some(RequestDescriptor {
    provider_tag,
    args: segments.collect(),
  })
}
