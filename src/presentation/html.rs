//! Sticky header panel markup

/// Render the header panel document for a group.
///
/// The panel is a single 24px strip filled with the group color, showing a
/// pinned, ellipsized group name.
pub fn header_panel_html(name: &str, color: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
body {{
    padding: 0;
    margin: 0;
    background-color: {color};
    height: 24px;
    display: flex;
    align-items: center;
}}
.header {{
    padding: 0 10px;
    font-size: 12px;
    font-weight: bold;
    color: var(--vscode-editor-foreground);
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}}
</style>
</head>
<body>
<div class="header">📌 {name}</div>
</body>
</html>
"#,
        color = escape(color),
        name = escape(name),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
