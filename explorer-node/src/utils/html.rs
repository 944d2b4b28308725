use strum::Display;

/// HTML shells served by the page routes. The browser client takes over once
/// loaded; the server only hands it the initial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Page {
    #[strum(to_string = "PerfKit Explorer")]
    Explore,
    #[strum(to_string = "PerfKit Explorer - Dashboard Administration")]
    DashboardAdmin,
}

impl Page {
    /// Name of the client module bootstrapped on the page.
    pub const fn client_module(self) -> &'static str {
        match self {
            Self::Explore => "explorer",
            Self::DashboardAdmin => "dashboard-admin",
        }
    }
}

/// Renders `page` with `initial_config` (already encoded JSON) exposed to the
/// client as `INITIAL_CONFIG`.
pub fn render_page(page: Page, initial_config: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script>
        var INITIAL_CONFIG = {config};
    </script>
</head>
<body data-module="{module}">
    <div id="{module}-root"></div>
    <script src="/static/{module}.js"></script>
</body>
</html>"#,
        title = html_escape::encode_text(&page.to_string()),
        config = escape_script_json(initial_config),
        module = page.client_module(),
    )
}

/// Body sent along with a redirect, for clients that do not follow it.
pub fn render_redirect(target: &str) -> String {
    let href = html_escape::encode_double_quoted_attribute(target);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Moved Permanently</title>
</head>
<body>
    <p>This page has moved to <a href="{href}">{text}</a>.</p>
</body>
</html>"#,
        text = html_escape::encode_text(target),
    )
}

/// JSON is valid JavaScript, but `</script>` inside a string would still end
/// the script element early.
fn escape_script_json(json: &str) -> String {
    json.replace("</", r"<\/")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_titles() {
        assert_eq!(Page::Explore.to_string(), "PerfKit Explorer");
        assert_eq!(
            Page::DashboardAdmin.to_string(),
            "PerfKit Explorer - Dashboard Administration"
        );
    }

    #[test]
    fn test_render_page_embeds_config() {
        let html = render_page(Page::Explore, r#"{"default_table":"results"}"#);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"var INITIAL_CONFIG = {"default_table":"results"};"#));
        assert!(html.contains("<title>PerfKit Explorer</title>"));
    }

    #[test]
    fn test_render_page_cannot_close_script_early() {
        let html = render_page(Page::DashboardAdmin, r#"{"analytics_key":"</script><b>"}"#);
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#"<\/script><b>"#));
    }

    #[test]
    fn test_render_redirect_escapes_target() {
        let html = render_redirect(r#"/explore?a="b"&c=<d>"#);
        assert!(html.contains("&quot;b&quot;"));
        assert!(!html.contains(r#"href="/explore?a="b""#));
        assert!(html.contains("/explore?a=\"b\"&amp;c=&lt;d&gt;"));
    }
}
