//! File download headers and responses.

use bytes::Bytes;
use chrono::Utc;

const GZIP_MEDIA_TYPE: &str = "application/x-gzip";

const NO_CACHE_CONTROL: &str =
    "no-store, no-cache, must-revalidate, pre-check=0, post-check=0, max-age=0";

/// Ordered list of headers for a file download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadHeaders {
    headers: Vec<(&'static str, String)>,
}

impl DownloadHeaders {
    fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.headers.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.headers.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Declared `Content-Length`, if present and numeric.
    pub fn content_length(&self) -> Option<usize> {
        self.get("Content-Length").and_then(|v| v.parse().ok())
    }
}

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn http_date_now() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Headers telling the browser to save the body as `filename`.
///
/// `length` must be the body size in bytes.
pub fn download_headers(
    filename: &str,
    media_type: &str,
    length: usize,
    no_cache: bool,
) -> DownloadHeaders {
    let mut headers = DownloadHeaders::default();

    if no_cache {
        let now = http_date_now();
        headers.set("Expires", now.clone());
        headers.set("Last-Modified", now);
        headers.set("Cache-Control", NO_CACHE_CONTROL);
        headers.set("Pragma", "no-cache");
    }

    let filename = sanitize_filename(filename);
    if !filename.is_empty() {
        headers.set("Content-Description", "File Transfer");
        headers.set(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        );
    }

    headers.set("Content-Type", media_type);

    // Compressed downloads keep whatever encoding the server negotiates
    if media_type != GZIP_MEDIA_TYPE {
        headers.set("Content-Encoding", "identity");
    }

    headers.set("Content-Transfer-Encoding", "binary");
    headers.set("Content-Length", length.to_string());

    headers
}

/// A complete attachment response: headers plus raw body bytes.
#[derive(Debug, Clone)]
pub struct DownloadResponse {
    pub headers: DownloadHeaders,
    pub body: Bytes,
}

impl DownloadResponse {
    /// Build a no-cache download whose `Content-Length` is the body's byte length.
    pub fn attachment(filename: &str, media_type: &str, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            headers: download_headers(filename, media_type, body.len(), true),
            body,
        }
    }
}
