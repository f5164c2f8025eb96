//! Request-scoped response state and user-facing messages.

use serde::{Serialize, Serializer};

use crate::docs::DocLinks;

/// Per-request status and HTML body shared between handler and framework.
///
/// The framework creates one for every request and serializes it when the handler
/// has no download to send.
#[derive(Debug, Clone)]
pub struct ResponseRenderer {
    success: bool,
    html: Vec<String>,
}

impl Default for ResponseRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseRenderer {
    pub fn new() -> Self {
        Self {
            success: true,
            html: Vec::new(),
        }
    }

    pub fn set_request_status(&mut self, success: bool) {
        self.success = success;
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn add_html(&mut self, fragment: impl Into<String>) {
        self.html.push(fragment.into());
    }

    pub fn html(&self) -> String {
        self.html.concat()
    }
}

#[derive(Serialize)]
struct RenderedBody<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl Serialize for ResponseRenderer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let html = self.html();
        let (error, message) = if self.success {
            (None, Some(html.as_str()))
        } else {
            (Some(html.as_str()), None)
        };
        RenderedBody {
            success: self.success,
            error,
            message,
        }
        .serialize(serializer)
    }
}

/// A user-facing error that may carry `[br]` and `[doc@..]` markup.
#[derive(Debug, Clone)]
pub struct Message {
    text: String,
    markup: bool,
}

impl Message {
    /// Error text written by this crate; markup tags are expanded.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: true,
        }
    }

    /// Error text from outside the crate; shown literally, brackets included.
    pub fn raw_error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render as an HTML alert. Text is escaped before markup is expanded.
    pub fn display(&self, docs: &DocLinks) -> String {
        let escaped = escape_html(&self.text);
        let body = if self.markup {
            convert_bbcode(&escaped, docs)
        } else {
            escaped
        };
        format!("<div class=\"alert alert-danger\" role=\"alert\">{}</div>", body)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

fn is_doc_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn convert_bbcode(escaped: &str, docs: &DocLinks) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;
    let mut doc_open = false;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix("[br]") {
            out.push_str("<br>");
            rest = after;
            continue;
        }
        if doc_open {
            if let Some(after) = tail.strip_prefix("[/doc]") {
                out.push_str("</a>");
                doc_open = false;
                rest = after;
                continue;
            }
        }
        if let Some(tag) = tail.strip_prefix("[doc@").filter(|_| !doc_open) {
            if let Some(end) = tag.find(']') {
                let mut parts = tag[..end].splitn(2, '@');
                let page = parts.next().unwrap_or("");
                let anchor = parts.next().unwrap_or("");
                if is_doc_token(page) && (anchor.is_empty() || is_doc_token(anchor)) {
                    out.push_str(&docs.anchor_open(page, anchor));
                    doc_open = true;
                    rest = &tag[end + 1..];
                    continue;
                }
            }
        }

        out.push('[');
        rest = &tail[1..];
    }

    out.push_str(rest);
    if doc_open {
        out.push_str("</a>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_starts_successful_and_empty() {
        let renderer = ResponseRenderer::new();
        assert!(renderer.is_success());
        assert_eq!(renderer.html(), "");
    }

    #[test]
    fn renderer_concatenates_fragments() {
        let mut renderer = ResponseRenderer::new();
        renderer.add_html("<p>one</p>");
        renderer.add_html(String::from("<p>two</p>"));
        assert_eq!(renderer.html(), "<p>one</p><p>two</p>");
    }

    #[test]
    fn failed_renderer_serializes_error_key() {
        let mut renderer = ResponseRenderer::new();
        renderer.set_request_status(false);
        renderer.add_html("boom");
        let json = serde_json::to_value(&renderer).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn successful_renderer_serializes_message_key() {
        let mut renderer = ResponseRenderer::new();
        renderer.add_html("done");
        let json = serde_json::to_value(&renderer).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "message": "done" }));
    }

    #[test]
    fn error_display_wraps_in_danger_alert() {
        let html = Message::error("Bad type!").display(&DocLinks::default());
        assert_eq!(
            html,
            "<div class=\"alert alert-danger\" role=\"alert\">Bad type!</div>"
        );
    }

    #[test]
    fn raw_error_keeps_markup_literal() {
        let message = Message::raw_error("see [doc@faq@x]here[/doc][br]");
        assert_eq!(message.text(), "see [doc@faq@x]here[/doc][br]");
        assert_eq!(
            message.display(&DocLinks::default()),
            "<div class=\"alert alert-danger\" role=\"alert\">see [doc@faq@x]here[/doc][br]</div>"
        );
    }

    #[test]
    fn unmatched_doc_tags_stay_balanced() {
        let docs = DocLinks::new("https://docs.example.org");
        let html = Message::error("a [/doc] b").display(&docs);
        assert!(html.contains("a [/doc] b"));
        assert!(!html.contains("</a>"));

        let html = Message::error("[doc@faq@x]open").display(&docs);
        assert_eq!(html.matches("<a ").count(), 1);
        assert_eq!(html.matches("</a>").count(), 1);
        assert!(html.ends_with("open</a></div>"));
    }

    #[test]
    fn display_escapes_text() {
        let html =
            Message::error("<script>alert('x')</script> & more").display(&DocLinks::default());
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn display_expands_line_breaks_and_doc_links() {
        let docs = DocLinks::new("https://docs.example.org");
        let text = format!(
            "Missing parameter: db{}[br]",
            docs.show_documentation("faq", "faqmissingparameters", true)
        );
        let html = Message::error(text).display(&docs);
        assert_eq!(
            html,
            "<div class=\"alert alert-danger\" role=\"alert\">Missing parameter: db\
             <a href=\"https://docs.example.org/faq.html#faqmissingparameters\" \
             target=\"documentation\">Documentation</a><br></div>"
        );
    }

    #[test]
    fn unknown_brackets_pass_through() {
        let html = Message::error("[x] [doc@bad page@a] done").display(&DocLinks::default());
        assert!(html.contains("[x] [doc@bad page@a] done"));
    }
}
