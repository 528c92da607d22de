/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Link that opens in a new browsing context without leaking the referrer.
pub fn external_link(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noreferrer">{}</a>"#,
        escape(href),
        escape(label)
    )
}

/// `<ul>` of escaped items; empty string when there are no items.
pub fn bullet_list(class: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = format!(r#"<ul class="{class}">"#);
    for item in items {
        out.push_str(&format!("<li>{}</li>", escape(item)));
    }
    out.push_str("</ul>");
    out
}
