use std::{fmt, path::PathBuf};

use anyhow::{Context, Result};

/// Where a dataset comes from: a local file, or an HTTP(S) URL when built
/// with the `fetch` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Classify a CLI argument: anything with an http:// or https:// scheme is
    /// a URL, everything else a local path.
    pub fn parse(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            Source::Url(spec.to_string())
        } else {
            Source::Path(PathBuf::from(spec))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// Load a dataset's raw bytes. No retry: one attempt, the caller decides how
/// to degrade on failure.
pub fn load_bytes(source: &Source) -> Result<Vec<u8>> {
    match source {
        Source::Path(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        Source::Url(url) => fetch_bytes(url),
    }
}

#[cfg(feature = "fetch")]
fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    use std::time::Duration;

    let client = reqwest::blocking::Client::builder()
        .user_agent("choroscope/0.1 (+https://github.com/choroscope/choroscope)")
        .timeout(Duration::from_secs(30))
        .build()?;

    let resp = client.get(url).send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url} returned error status"))?;

    Ok(resp.bytes().with_context(|| format!("read body of {url}"))?.to_vec())
}

#[cfg(not(feature = "fetch"))]
fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    anyhow::bail!("{url}: built without the `fetch` feature; pass a local path instead")
}
