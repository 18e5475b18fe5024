// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! Rebuilds legacy pages into the standard site shell: shared navigation,
//! breadcrumb, footer, and script includes. Inline styles are extracted and
//! returned to the caller for consolidation; nothing is accumulated in
//! module state.
use crate::classes::{class_display_name, class_order};
use crate::locate::locate_between;
use std::error::Error;

/// One standardized page: the rebuilt document plus any inline style blocks
/// that were stripped out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardizedPage {
    pub html: String,
    pub styles: Vec<String>,
}

/// Strips every `<style>` block from a document, returning the stripped
/// document and the block contents in order.
pub fn extract_style_blocks(html: &str) -> (String, Vec<String>) {
    let mut remaining = html.to_owned();
    let mut styles = Vec::new();

    while let Some(at) = remaining.find("<style") {
        let Some(open_end) = remaining[at..].find('>') else {
            break;
        };
        let inner_start = at + open_end + 1;
        let Some(close) = remaining[inner_start..].find("</style>") else {
            break;
        };
        let inner_end = inner_start + close;
        styles.push(remaining[inner_start..inner_end].trim().to_owned());
        remaining.replace_range(at..inner_end + "</style>".len(), "");
    }

    (remaining, styles)
}

/// Removes every `<tag ...>...</tag>` element. Nested same-name elements
/// are not expected in our pages and are not handled.
fn remove_elements(html: &str, tag: &str) -> String {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut remaining = html.to_owned();

    while let Some(at) = remaining.find(&open) {
        let Some(end) = remaining[at..].find(&close) else {
            break;
        };
        remaining.replace_range(at..at + end + close.len(), "");
    }
    remaining
}

fn extract_body_inner(html: &str) -> Option<&str> {
    let at = html.find("<body")?;
    let open_end = html[at..].find('>')? + at + 1;
    let end = html.rfind("</body>")?;
    if end < open_end {
        return None;
    }
    Some(&html[open_end..end])
}

/// Page title from the document, falling back to a humanized file stem.
pub fn page_title(html: &str, file_name: &str) -> String {
    locate_between(html, "<title>", "</title>")
        .map(|range| html[range].trim().to_owned())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| title_from_stem(file_stem(file_name)))
}

fn file_stem(file_name: &str) -> &str {
    file_name.strip_suffix(".html").unwrap_or(file_name)
}

fn title_from_stem(stem: &str) -> String {
    stem.split('_')
        .map(class_display_name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rebuilds one page into the standard shell.
///
/// Old navigation, scripts, inline styles, and footers are dropped; the
/// remaining body content is preserved as-is. A page without a body tag is
/// a per-file error for the caller to record.
pub fn standardize_page(
    file_name: &str,
    html: &str,
) -> Result<StandardizedPage, Box<dyn Error + Send + Sync>> {
    let title = page_title(html, file_name);
    let (stripped, styles) = extract_style_blocks(html);

    let body = extract_body_inner(&stripped)
        .ok_or_else(|| format!("{file_name}: no body tag found"))?;

    let mut content = body.to_owned();
    for tag in ["nav", "script", "footer"] {
        content = remove_elements(&content, tag);
    }
    let content = content.trim();

    let stem = file_stem(file_name);
    let keywords = stem.replace('_', ", ");
    let html = format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{title} - Comprehensive guide for World War Z: Aftermath">
    <meta name="keywords" content="World War Z, Aftermath, zombie, guide, {keywords}">
    <meta name="author" content="WWZ Guide Team">
    <title>{title}</title>
    <link rel="icon" href="favicon.ico" type="image/x-icon">
    <link rel="stylesheet" href="styles/main.css">
    <script type="module">
        import mermaid from 'https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs';
        mermaid.initialize({{
            startOnLoad: true,
            theme: 'default'
        }});
    </script>
</head>
<body>
    <!-- Skip to main content for accessibility -->
    <a href="#main-content" class="skip-to-main">Skip to main content</a>

    <!-- Progress indicator -->
    <div class="progress-indicator" role="progressbar" aria-label="Page scroll progress">
        <div class="progress-bar"></div>
    </div>

{nav}

{breadcrumb}

    <!-- Main Content -->
    <main id="main-content">
        {content}
    </main>

    <!-- Footer -->
    <footer class="site-footer">
        <div class="footer-content">
            <p>&copy; 2024 WWZ: Aftermath Guide. Unofficial fan resource.</p>
            <p><small>Use alongside in-game tutorials | <a href="printables.html">Print Cheatsheets</a> | Press ? for shortcuts</small></p>
        </div>
    </footer>

    <!-- JavaScript -->
    <script src="js/clipboard.js"></script>
    <script src="js/course-enhancements.js"></script>
</body>
</html>"##,
        nav = standard_nav(),
        breadcrumb = breadcrumb(file_name),
    );

    Ok(StandardizedPage { html, styles })
}

/// The shared top navigation, with a dropdown entry per class.
pub fn standard_nav() -> String {
    let class_links = class_order()
        .iter()
        .map(|key| {
            format!(
                r#"                        <a href="class_{key}.html">{}</a>"#,
                class_display_name(key)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"    <!-- Navigation -->
    <nav class="main-nav">
        <div class="nav-container">
            <a href="index.html" class="nav-logo">⚔️ WWZ: Aftermath Guide</a>
            <button id="mobile-menu-toggle" class="mobile-menu-toggle" aria-expanded="false">☰</button>
            <div class="nav-links" id="nav-links">
                <a href="index.html">Home</a>
                <a href="beginner_guide.html">Beginner Guide</a>
                <div class="dropdown">
                    <a href="classes_overview.html" class="dropdown-toggle">Classes ▼</a>
                    <div class="dropdown-content">
                        <a href="classes_overview.html">Overview</a>
{class_links}
                    </div>
                </div>
                <a href="weapons_upgrades.html">Weapons</a>
                <a href="currencies_progression.html">Progression</a>
                <a href="horde_endgame.html">Endgame</a>
                <button id="theme-toggle" aria-label="Toggle theme">🌙</button>
            </div>
        </div>
    </nav>"#
    )
}

/// Breadcrumb trail for one page. The homepage and pages outside the known
/// set get none.
pub fn breadcrumb(file_name: &str) -> String {
    let stem = file_stem(file_name);

    let (trail, current): (Vec<(&str, &str)>, String) = if stem == "index" {
        return String::new();
    } else if let Some(class_key) = stem.strip_prefix("class_") {
        (
            vec![
                ("Home", "index.html"),
                ("Classes", "classes_overview.html"),
            ],
            class_display_name(class_key),
        )
    } else if stem == "controls_xbox_pc" {
        (
            vec![
                ("Home", "index.html"),
                ("Beginner Guide", "beginner_guide.html"),
            ],
            title_from_stem(stem),
        )
    } else if [
        "beginner_guide",
        "classes_overview",
        "weapons_upgrades",
        "currencies_progression",
        "horde_endgame",
        "missions_maps",
        "team_tactics",
        "troubleshooting_performance",
        "printables",
    ]
    .contains(&stem)
    {
        (vec![("Home", "index.html")], title_from_stem(stem))
    } else {
        return String::new();
    };

    let mut html = String::from(
        "    <!-- Breadcrumb Navigation -->\n    <nav class=\"breadcrumb\" aria-label=\"Breadcrumb\">\n        <ul>\n",
    );
    for (text, href) in trail {
        html.push_str(&format!(
            "            <li><a href=\"{href}\">{text}</a></li>\n"
        ));
    }
    html.push_str(&format!(
        "            <li aria-current=\"page\">{current}</li>\n        </ul>\n    </nav>"
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_style_blocks() {
        let html = "<head><style>a { color: red; }</style></head>\
                    <body><style type=\"text/css\">b { color: blue; }</style><p>x</p></body>";
        let (stripped, styles) = extract_style_blocks(html);

        assert_eq!(styles, ["a { color: red; }", "b { color: blue; }"]);
        assert!(!stripped.contains("<style"));
        assert!(stripped.contains("<p>x</p>"));
    }

    #[test]
    fn test_remove_elements() {
        let html = r#"<nav class="x"><a href="y">l</a></nav><p>keep</p><nav>another</nav>"#;
        assert_eq!(remove_elements(html, "nav"), "<p>keep</p>");
    }

    #[test]
    fn test_page_title_fallback() {
        assert_eq!(page_title("<p>no title</p>", "team_tactics.html"), "Team Tactics");
        assert_eq!(
            page_title("<title>WWZ Weapons</title>", "weapons_upgrades.html"),
            "WWZ Weapons"
        );
    }

    #[test]
    fn test_standardize_page_rebuilds_shell() {
        let html = "<html><head><title>Endgame</title><style>.x { color: red; }</style></head>\
                    <body><nav>old nav</nav><h1>Horde Mode</h1><script>evil()</script></body></html>";
        let page = standardize_page("horde_endgame.html", html).unwrap();

        assert!(page.html.contains("<title>Endgame</title>"));
        assert!(page.html.contains("<h1>Horde Mode</h1>"));
        assert!(!page.html.contains("old nav"));
        assert!(!page.html.contains("evil()"));
        assert!(page.html.contains("Skip to main content"));
        assert!(page.html.contains(r#"nav class="main-nav""#));
        assert!(page.html.contains("mermaid.initialize"));
        assert_eq!(page.styles, [".x { color: red; }"]);
    }

    #[test]
    fn test_standardize_page_requires_body() {
        let err = standardize_page("broken.html", "<html><head></head></html>").unwrap_err();
        assert!(err.to_string().contains("broken.html"));
    }

    #[test]
    fn test_standard_nav_lists_every_class() {
        let nav = standard_nav();
        assert!(nav.contains(r#"<a href="classes_overview.html">Overview</a>"#));
        for key in class_order() {
            assert!(nav.contains(&format!(r#"class_{key}.html"#)), "{key}");
        }
    }

    #[test]
    fn test_breadcrumb_trails() {
        assert_eq!(breadcrumb("index.html"), "");
        assert_eq!(breadcrumb("lesson_weird.html"), "");

        let class_crumb = breadcrumb("class_medic.html");
        assert!(class_crumb.contains(r#"<a href="classes_overview.html">Classes</a>"#));
        assert!(class_crumb.contains(r#"<li aria-current="page">Medic</li>"#));

        let controls = breadcrumb("controls_xbox_pc.html");
        assert!(controls.contains("beginner_guide.html"));

        let top_level = breadcrumb("weapons_upgrades.html");
        assert!(top_level.contains(r#"<li aria-current="page">Weapons Upgrades</li>"#));
    }
}
