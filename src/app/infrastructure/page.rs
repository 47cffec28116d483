//! The HTML document the application is served in.

/// Wrap a rendered body in a minimal document, inside the mount element.
pub fn page_shell(title: &str, mount_id: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n</head>\n<body>\n<div id=\"{}\">{}</div>\n</body>\n</html>\n",
        html_escape::encode_text(title),
        html_escape::encode_double_quoted_attribute(mount_id),
        body
    )
}
