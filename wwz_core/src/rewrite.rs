// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! Rewrites existing class pages in place of the old hand-edited markup:
//! per-class header gradient, skill tree styling, and header markup. Only
//! pages produced by our own templates are supported; every section that
//! cannot be located is reported, never silently dropped.
use crate::locate::{locate_between, locate_declaration, locate_enclosing, locate_rule_body};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Per-class styling and header metadata for the restyle pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStyle {
    pub key: String,
    pub gradient: String,
    pub primary_color: String,
    pub name: String,
    pub icon: String,
    pub roles: Vec<String>,
    pub core_role: String,
}

impl ClassStyle {
    fn new(
        key: &str,
        gradient: &str,
        primary_color: &str,
        icon: &str,
        roles: &[&str],
        core_role: &str,
    ) -> Self {
        Self {
            key: key.to_owned(),
            gradient: gradient.to_owned(),
            primary_color: primary_color.to_owned(),
            name: crate::classes::class_display_name(key),
            icon: icon.to_owned(),
            roles: roles.iter().map(|r| (*r).to_owned()).collect(),
            core_role: core_role.to_owned(),
        }
    }

    /// Regenerated page header carrying the title, role badges, and core role.
    pub fn header_html(&self) -> String {
        let badges = self
            .roles
            .iter()
            .map(|role| format!(r#"<span class="role-badge">{role}</span>"#))
            .collect::<Vec<_>>()
            .join("");
        format!(
            r#"<header class="class-header">
            <h1>{} {} Class Guide</h1>
            <div class="role-badges">
                {badges}
            </div>
            <p><strong>Core Role:</strong> {}</p>
        </header>"#,
            self.icon, self.name, self.core_role
        )
    }
}

/// Styling records for every class whose page needs restyling. Slasher is
/// the layout donor and is excluded.
pub fn class_styles() -> IndexMap<String, ClassStyle> {
    let mut styles = IndexMap::new();
    for style in [
        ClassStyle::new(
            "medic",
            "linear-gradient(135deg, #28a745 0%, #20c997 100%)",
            "#28a745",
            "🏥",
            &["Combat Medic", "Team Support", "Healing Specialist"],
            "Keep your team alive with healing stims and protective equipment",
        ),
        ClassStyle::new(
            "fixer",
            "linear-gradient(135deg, #6f42c1 0%, #563d7c 100%)",
            "#6f42c1",
            "🔧",
            &["Support Specialist", "Equipment Master", "Team Buffer"],
            "Supply team with explosive ammo and masking gas for tactical advantages",
        ),
        ClassStyle::new(
            "gunslinger",
            "linear-gradient(135deg, #dc3545 0%, #c82333 100%)",
            "#dc3545",
            "🔫",
            &["DPS Specialist", "Precision Shooter", "Ammo Efficient"],
            "Maximize damage output with enhanced weapon handling and headshot bonuses",
        ),
        ClassStyle::new(
            "exterminator",
            "linear-gradient(135deg, #fd7e14 0%, #e8590c 100%)",
            "#fd7e14",
            "💥",
            &["Crowd Control", "Explosive Expert", "Defense Specialist"],
            "Clear swarms with molotovs, claymores, and defensive bonuses",
        ),
        ClassStyle::new(
            "hellraiser",
            "linear-gradient(135deg, #e83e8c 0%, #d91a72 100%)",
            "#e83e8c",
            "🔥",
            &["Explosive DPS", "Area Denial", "Heavy Weapons"],
            "Rain destruction with C4, improved explosives, and heavy weapons",
        ),
        ClassStyle::new(
            "dronemaster",
            "linear-gradient(135deg, #4a90e2 0%, #357abd 100%)",
            "#4a90e2",
            "🤖",
            &["Support DPS", "Tactical Control", "Team Buffer"],
            "Deploy an autonomous Quadrocopter drone for continuous support fire and team advantages",
        ),
        ClassStyle::new(
            "vanguard",
            "linear-gradient(135deg, #17a2b8 0%, #138496 100%)",
            "#17a2b8",
            "🛡️",
            &["Tank", "Shield Bearer", "Team Protector"],
            "Lead from the front with an electric shield that stuns and blocks zombies",
        ),
    ] {
        styles.insert(style.key.clone(), style);
    }
    styles
}

/// A page section the restyle pass touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum PageSection {
    #[strum(to_string = "class-header gradient")]
    HeaderGradient,
    #[strum(to_string = "skill tree styles")]
    SkillStyles,
    #[strum(to_string = "class header markup")]
    ClassHeader,
}

/// Result of restyling one page: the updated text plus every section that
/// could not be located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestyleOutcome {
    pub html: String,
    pub skipped: Vec<PageSection>,
}

impl RestyleOutcome {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Applies the three restyle steps to one page. Sections that cannot be
/// located are skipped, logged, and reported in the outcome so the caller
/// can decide whether a partial update is acceptable.
pub fn restyle_class_page(html: &str, style: &ClassStyle) -> RestyleOutcome {
    let mut skipped = Vec::new();

    let html = match replace_header_gradient(html, &style.gradient) {
        Some(updated) => updated,
        None => {
            log::warn!("{}: {} not found", style.key, PageSection::HeaderGradient);
            skipped.push(PageSection::HeaderGradient);
            html.to_owned()
        }
    };

    let html = match inject_skill_styles(&html, &style.primary_color) {
        Some(updated) => updated,
        None => {
            log::warn!("{}: {} not found", style.key, PageSection::SkillStyles);
            skipped.push(PageSection::SkillStyles);
            html
        }
    };

    let html = match replace_class_header(&html, style) {
        Some(updated) => updated,
        None => {
            log::warn!("{}: {} not found", style.key, PageSection::ClassHeader);
            skipped.push(PageSection::ClassHeader);
            html
        }
    };

    RestyleOutcome { html, skipped }
}

/// Swaps the background gradient declaration inside the `.class-header`
/// CSS rule. Only a declaration that already holds a linear-gradient is
/// replaced.
fn replace_header_gradient(html: &str, gradient: &str) -> Option<String> {
    let style_range = locate_between(html, "<style>", "</style>")?;
    let rule = locate_rule_body(&html[style_range.clone()], ".class-header")?;
    let rule = rule.start + style_range.start..rule.end + style_range.start;
    let declaration = locate_declaration(html, rule, "background:")?;
    if !html[declaration.clone()].contains("linear-gradient") {
        return None;
    }

    let mut updated = String::with_capacity(html.len());
    updated.push_str(&html[..declaration.start]);
    updated.push_str(&format!("background: {gradient};"));
    updated.push_str(&html[declaration.end..]);
    Some(updated)
}

/// Drops any previous skill tree styling block from the page's style
/// section and appends the shared segment/perk/prestige rules with the
/// class's primary colour substituted in.
fn inject_skill_styles(html: &str, primary_color: &str) -> Option<String> {
    const OLD_BLOCK_MARKER: &str = "/* Skill Tree Styling */";

    let style_range = locate_between(html, "<style>", "</style>")?;
    let mut inner = html[style_range.clone()].to_owned();

    if let Some(at) = inner.find(OLD_BLOCK_MARKER) {
        // The old block runs up to the next top-level comment, or to the
        // end of the style section.
        let after = at + OLD_BLOCK_MARKER.len();
        let to = inner[after..]
            .find("/*")
            .map_or(inner.len(), |next| after + next);
        inner.replace_range(at..to, "");
    }

    inner.push('\n');
    inner.push_str(&SKILL_STYLE_TEMPLATE.replace("{PRIMARY_COLOR}", primary_color));
    inner.push_str("\n    ");

    let mut updated = String::with_capacity(html.len() + inner.len());
    updated.push_str(&html[..style_range.start]);
    updated.push_str(&inner);
    updated.push_str(&html[style_range.end..]);
    Some(updated)
}

/// Replaces the page header markup with a regenerated one.
fn replace_class_header(html: &str, style: &ClassStyle) -> Option<String> {
    let range = locate_enclosing(html, r#"<header class="class-header">"#, "</header>")?;
    let mut updated = String::with_capacity(html.len());
    updated.push_str(&html[..range.start]);
    updated.push_str(&style.header_html());
    updated.push_str(&html[range.end..]);
    Some(updated)
}

/// Page layout generations, recognized by their marker CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Layout {
    #[strum(to_string = "old layout")]
    Old,
    #[strum(to_string = "new layout")]
    New,
    #[strum(to_string = "unknown layout")]
    Unknown,
}

/// Diagnostic classification of a page's skill tree layout generation.
/// Never modifies anything.
pub fn classify_layout(html: &str) -> Layout {
    let has_new = html.contains("skill-segment") || html.contains("perk-card");
    let has_old = html.contains("skill-tree-grid") || html.contains("skill-column");
    if has_new {
        Layout::New
    } else if has_old {
        Layout::Old
    } else {
        Layout::Unknown
    }
}

/// Segment-based skill tree and prestige styling shared by every class
/// page, with a colour token substituted per class. Lifted from the
/// Slasher page, which is the layout donor.
const SKILL_STYLE_TEMPLATE: &str = r#"        /* Skill Tree Styling */
        .skill-tree-container {
            background: #f8f9fa;
            border-radius: 12px;
            padding: 2rem;
            margin: 2rem 0;
            overflow-x: auto;
        }

        .skill-segment {
            background: white;
            border-radius: 8px;
            padding: 1rem;
            margin: 1.5rem 0;
            border-left: 4px solid {PRIMARY_COLOR};
        }

        .skill-segment h4 {
            color: #495057;
            margin-bottom: 1rem;
            font-size: 1.1rem;
        }

        .perk-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 1rem;
        }

        .perk-card {
            background: white;
            border: 2px solid #e9ecef;
            border-radius: 8px;
            padding: 1rem;
            transition: transform 0.2s;
        }

        .perk-card:hover {
            transform: translateY(-2px);
            box-shadow: 0 4px 12px rgba(0,0,0,0.1);
        }

        .perk-level {
            display: inline-block;
            padding: 0.25rem 0.5rem;
            background: {PRIMARY_COLOR};
            color: white;
            border-radius: 4px;
            font-size: 0.8rem;
            font-weight: bold;
            margin-bottom: 0.5rem;
        }

        .perk-name {
            font-weight: bold;
            color: #495057;
            margin: 0.5rem 0;
        }

        .perk-desc {
            color: #6c757d;
            font-size: 0.9rem;
            line-height: 1.4;
        }

        .perk-cost {
            display: flex;
            justify-content: space-between;
            margin-top: 0.75rem;
            padding-top: 0.75rem;
            border-top: 1px solid #e9ecef;
            font-size: 0.85rem;
        }

        .core-perk {
            background: #ffe4e1;
            border: 2px solid {PRIMARY_COLOR};
        }

        .prestige-section {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 2rem;
            border-radius: 12px;
            margin: 2rem 0;
        }

        .prestige-section h3 {
            color: white;
            margin-bottom: 1.5rem;
        }

        .prestige-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 1rem;
        }

        .prestige-perk {
            background: rgba(255, 255, 255, 0.95);
            color: #333;
            padding: 1rem;
            border-radius: 8px;
            border: 2px solid #9b59b6;
        }

        .prestige-rank {
            display: inline-block;
            padding: 0.25rem 0.5rem;
            background: #9b59b6;
            color: white;
            border-radius: 4px;
            font-size: 0.8rem;
            font-weight: bold;
            margin-bottom: 0.5rem;
        }"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> String {
        r##"<!DOCTYPE html>
<html>
<head>
    <style>
        .class-header {
            background: linear-gradient(135deg, #000 0%, #111 100%);
            padding: 2rem;
        }
        /* Skill Tree Styling */
        .skill-table { border: 1px solid red; }
        /* Footer */
        .site-footer { margin: 0; }
    </style>
</head>
<body>
    <header class="class-header">
        <h1>Old Title</h1>
    </header>
    <p>content</p>
</body>
</html>"##
            .to_owned()
    }

    #[test]
    fn test_restyle_replaces_all_sections() {
        let styles = class_styles();
        let outcome = restyle_class_page(&sample_page(), &styles["medic"]);

        assert!(outcome.is_complete(), "skipped: {:?}", outcome.skipped);
        assert!(outcome
            .html
            .contains("background: linear-gradient(135deg, #28a745 0%, #20c997 100%);"));
        assert!(outcome.html.contains("border-left: 4px solid #28a745;"));
        assert!(outcome.html.contains("🏥 Medic Class Guide"));
        assert!(outcome
            .html
            .contains(r#"<span class="role-badge">Combat Medic</span>"#));
        assert!(!outcome.html.contains("Old Title"));
    }

    #[test]
    fn test_restyle_drops_previous_skill_styles() {
        let styles = class_styles();
        let outcome = restyle_class_page(&sample_page(), &styles["vanguard"]);

        assert!(!outcome.html.contains(".skill-table { border: 1px solid red; }"));
        // Unrelated comments after the old block survive.
        assert!(outcome.html.contains("/* Footer */"));
        // The new block carries the marker exactly once.
        assert_eq!(outcome.html.matches("/* Skill Tree Styling */").count(), 1);
    }

    #[test]
    fn test_restyle_is_reapplicable() {
        let styles = class_styles();
        let first = restyle_class_page(&sample_page(), &styles["medic"]);
        let second = restyle_class_page(&first.html, &styles["medic"]);
        assert!(second.is_complete());
        assert_eq!(second.html.matches("/* Skill Tree Styling */").count(), 1);
    }

    #[test]
    fn test_restyle_reports_missing_sections() {
        let styles = class_styles();
        let outcome = restyle_class_page("<p>not one of our pages</p>", &styles["fixer"]);

        assert_eq!(
            outcome.skipped,
            vec![
                PageSection::HeaderGradient,
                PageSection::SkillStyles,
                PageSection::ClassHeader
            ]
        );
        assert_eq!(outcome.html, "<p>not one of our pages</p>");
    }

    #[test]
    fn test_restyle_without_gradient_declaration() {
        let page = r#"<style>.class-header { background: red; }</style>
<header class="class-header"><h1>x</h1></header>"#;
        let styles = class_styles();
        let outcome = restyle_class_page(page, &styles["medic"]);

        assert!(outcome.skipped.contains(&PageSection::HeaderGradient));
        assert!(!outcome.skipped.contains(&PageSection::SkillStyles));
        assert!(!outcome.skipped.contains(&PageSection::ClassHeader));
    }

    #[test]
    fn test_class_styles_excludes_slasher() {
        let styles = class_styles();
        assert_eq!(styles.len(), 7);
        assert!(!styles.contains_key("slasher"));
        assert_eq!(styles["dronemaster"].name, "Dronemaster");
    }

    #[test]
    fn test_classify_layout() {
        assert_eq!(
            classify_layout(r#"<div class="perk-card"></div>"#),
            Layout::New
        );
        assert_eq!(
            classify_layout(r#"<div class="skill-column"></div>"#),
            Layout::Old
        );
        assert_eq!(classify_layout("<p>plain page</p>"), Layout::Unknown);
        // A half-migrated page counts as new.
        assert_eq!(
            classify_layout(r#"<div class="skill-tree-grid"><div class="skill-segment">"#),
            Layout::New
        );
    }
}
