use entity::ShortenedEntry;
use shortener_service::ShortenerPanel;
use std::fmt::Write;

/// Render the whole panel. `alert` becomes a blocking browser alert.
pub fn render(panel: &ShortenerPanel, alert: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(concat!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
        "<meta charset=\"utf-8\">\n<title>URL Shortener</title>\n",
        "</head>\n<body>\n<main>\n<h1>URL Shortener</h1>\n",
        "<section class=\"card\">\n<h2>URL Shortener</h2>\n",
        "<form method=\"post\" action=\"/shorten\">\n",
    ));

    field(&mut html, "url", "Original URL", "text", panel.url());
    field(
        &mut html,
        "validity",
        "Validity (minutes, default 30)",
        "number",
        panel.validity(),
    );
    field(
        &mut html,
        "custom_code",
        "Custom Shortcode (optional)",
        "text",
        panel.custom_code(),
    );

    if !panel.error().is_empty() {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", escape(panel.error()));
    }

    html.push_str(concat!(
        "<button type=\"submit\">Shorten URL</button>\n</form>\n</section>\n",
        "<section class=\"card\">\n<h2>URL Statistics</h2>\n<ul>\n",
    ));

    for entry in panel.entries() {
        entry_item(&mut html, entry);
    }

    html.push_str("</ul>\n</section>\n</main>\n");

    if let Some(message) = alert {
        // JSON string literals are valid JS string literals.
        let literal = serde_json::to_string(message).unwrap_or_default();
        let _ = writeln!(
            html,
            "<script>alert({});</script>",
            literal.replace("</", "<\\/")
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn field(html: &mut String, name: &str, label: &str, kind: &str, value: &str) {
    let _ = writeln!(
        html,
        "<label>{label}<input name=\"{name}\" type=\"{kind}\" value=\"{}\"></label>",
        escape(value)
    );
}

fn entry_item(html: &mut String, entry: &ShortenedEntry) {
    let short_url = escape(&entry.short_url);
    let _ = writeln!(
        html,
        concat!(
            "<li>\n<p><b>Original:</b> {}</p>\n",
            "<p><b>Shortened:</b> <a href=\"{short}\" target=\"_blank\" rel=\"noreferrer\">{short}</a></p>\n",
            "<p><b>Expiry:</b> {}</p>\n</li>",
        ),
        escape(&entry.original_url),
        escape(&entry.expiry),
        short = short_url,
    );
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_panel_has_form_and_no_error() {
        let html = render(&ShortenerPanel::new(), None);
        assert!(html.contains("<form method=\"post\" action=\"/shorten\">"));
        assert!(html.contains("URL Statistics"));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn retained_input_and_error_are_rendered_escaped() {
        let mut panel = ShortenerPanel::new();
        panel.set_url("<bad>");
        let _ = panel.shorten("http://localhost:3000");

        let html = render(&panel, None);
        assert!(html.contains("value=\"&lt;bad&gt;\""));
        assert!(html.contains("<p class=\"error\">Invalid URL format</p>"));
    }

    #[test]
    fn entries_link_opens_in_new_context() {
        let mut panel = ShortenerPanel::new();
        panel.set_url("https://example.com/?a=1&b=2");
        panel.set_custom_code("abc123");
        panel.shorten("http://localhost:3000").unwrap();

        let html = render(&panel, None);
        assert!(html.contains("<b>Original:</b> https://example.com/?a=1&amp;b=2"));
        assert!(html.contains(
            "<a href=\"http://localhost:3000/abc123\" target=\"_blank\" rel=\"noreferrer\">"
        ));
        assert!(html.contains(&escape(&panel.entries()[0].expiry)));
    }

    #[test]
    fn alert_is_emitted_as_script() {
        let html = render(&ShortenerPanel::new(), Some("Limit \"reached\""));
        assert!(html.contains(r#"<script>alert("Limit \"reached\"");</script>"#));
    }
}
