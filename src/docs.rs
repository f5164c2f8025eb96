//! Links into the product documentation.

pub const DEFAULT_DOCS_BASE_URL: &str = "https://docs.phpmyadmin.net/en/latest";

/// Builds documentation links against a configurable base URL.
#[derive(Debug, Clone)]
pub struct DocLinks {
    base_url: String,
}

impl Default for DocLinks {
    fn default() -> Self {
        Self::new(DEFAULT_DOCS_BASE_URL)
    }
}

impl DocLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, page: &str, anchor: &str) -> String {
        if anchor.is_empty() {
            format!("{}/{}.html", self.base_url, page)
        } else {
            format!("{}/{}.html#{}", self.base_url, page, anchor)
        }
    }

    /// Documentation hint for `page#anchor`.
    ///
    /// With `bbcode` set this returns a `[doc@page@anchor]` tag meant to be embedded in a
    /// [`Message`](crate::response::Message), which expands it when displayed.
    pub fn show_documentation(&self, page: &str, anchor: &str, bbcode: bool) -> String {
        if bbcode {
            format!("[doc@{}@{}]Documentation[/doc]", page, anchor)
        } else {
            format!("{}Documentation</a>", self.anchor_open(page, anchor))
        }
    }

    pub(crate) fn anchor_open(&self, page: &str, anchor: &str) -> String {
        format!(
            "<a href=\"{}\" target=\"documentation\">",
            self.url(page, anchor)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbcode_hint_names_page_and_anchor() {
        let docs = DocLinks::default();
        assert_eq!(
            docs.show_documentation("faq", "faqmissingparameters", true),
            "[doc@faq@faqmissingparameters]Documentation[/doc]"
        );
    }

    #[test]
    fn html_hint_links_to_base_url() {
        let docs = DocLinks::new("https://docs.example.org/");
        assert_eq!(
            docs.show_documentation("faq", "faqmissingparameters", false),
            "<a href=\"https://docs.example.org/faq.html#faqmissingparameters\" \
             target=\"documentation\">Documentation</a>"
        );
    }

    #[test]
    fn url_without_anchor() {
        let docs = DocLinks::new("http://localhost/doc");
        assert_eq!(docs.url("setup", ""), "http://localhost/doc/setup.html");
    }
}
