// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
use crate::classes::{Build, ClassRecord, SkillTree, SpecialEnemy, SpecialStrategy, Stat, Synergy};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::error::Error;
use strum::IntoEnumIterator as _;

/// Unlock levels for skill tiers 1 through 5. The capstone unlocks at 27.
const TIER_LEVELS: [&str; 5] = ["2", "7", "12", "17", "22"];

/// Renders one complete, self-contained class guide page.
///
/// Pure and deterministic: the same record and table always produce a
/// byte-identical document. Writing the result to disk is the caller's
/// responsibility.
///
/// Previous/next links follow the table's insertion order. The first class
/// falls back to the classes overview link and the last to the weapons page;
/// a record whose key is not in the table at all is an error.
pub fn render_class_page(
    record: &ClassRecord,
    table: &IndexMap<String, ClassRecord>,
) -> Result<String, Box<dyn Error + Send + Sync>> {
    let (prev_link, next_link) = lesson_nav_links(&record.key, table)?;
    let skill_tree = render_skill_tree(&record.skill_tree)?;

    let role_badges = record
        .roles
        .iter()
        .map(|role| format!(r#"<span class="role-badge">{role}</span>"#))
        .collect::<Vec<_>>()
        .join(" ");

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{name} Class Guide - Master the {name} in World War Z: Aftermath">
    <title>{name} Class Guide - World War Z: Aftermath</title>
    <link rel="icon" href="favicon.ico" type="image/x-icon">
    <link rel="stylesheet" href="styles/main.css">
    <link rel="stylesheet" href="styles/class-enhanced.css">
</head>
<body>
    <a href="#main-content" class="skip-to-main">Skip to main content</a>

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
    </nav>

    <nav class="breadcrumb" aria-label="Breadcrumb">
        <ul>
            <li><a href="index.html">Home</a></li>
            <li><a href="classes_overview.html">Classes</a></li>
            <li aria-current="page">{name}</li>
        </ul>
    </nav>

    <main id="main-content">
        <header class="class-header">
            <h1>{icon} {name} Class Guide</h1>
            <div class="role-badges">
                {role_badges}
            </div>
            <div class="difficulty-stars">
                Difficulty: {difficulty} ({difficulty_text})
            </div>
            <p><strong>Core Role:</strong> {core_role}</p>
        </header>

        <section class="card">
            <h2>📊 Quick Stats</h2>
            <div class="equipment-grid">
                {stats}
            </div>
        </section>

        <section class="card">
            <h2>📚 Complete Skill Tree (All 30 Perks)</h2>
            <div class="skill-tree-container">
                {skill_tree}
            </div>
        </section>

        <section class="card">
            <h2>🎯 Recommended Builds</h2>
            <div class="build-tabs">
                <button class="build-tab active" onclick="showBuild('beginner')">🌟 Beginner</button>
                <button class="build-tab" onclick="showBuild('support')">💚 Support/Specialized</button>
                <button class="build-tab" onclick="showBuild('combat')">⚔️ Advanced/Combat</button>
            </div>
            {builds}
        </section>

        <section class="card">
            <h2>🤝 Class Synergies</h2>
            <div class="synergy-grid">
                {synergies}
            </div>
        </section>

        <section class="card">
            <h2>🧟 Special Zombie Counter-Strategies ({name}-Specific)</h2>
            {special_strategies}
        </section>

        {extra_sections}

    </main>

    <nav class="lesson-nav" aria-label="Class Navigation">
        {prev_link}
        <a href="index.html">🏠 Home</a>
        {next_link}
    </nav>

    <footer class="site-footer">
        <div class="footer-content">
            <p>&copy; 2024 WWZ: Aftermath Guide. Unofficial fan resource.</p>
            <p><small>Use alongside in-game tutorials | Press ? for shortcuts</small></p>
        </div>
    </footer>

    <script src="js/clipboard.js"></script>
    <script src="js/course-enhancements.js"></script>
    <script src="js/class-interactions.js"></script>
</body>
</html>"##,
        name = record.name,
        icon = record.icon,
        difficulty = record.difficulty,
        difficulty_text = record.difficulty_text,
        core_role = record.core_role,
        class_links = render_class_dropdown(&record.key, table),
        stats = render_stats(&record.stats),
        builds = render_builds(&record.builds),
        synergies = render_synergies(&record.synergies),
        special_strategies = render_special_strategies(&record.special_strategies),
        extra_sections = EXTRA_SECTIONS,
    ))
}

/// Previous/next anchors for the bottom lesson navigation.
fn lesson_nav_links(
    key: &str,
    table: &IndexMap<String, ClassRecord>,
) -> Result<(String, String), Box<dyn Error + Send + Sync>> {
    let index = table
        .get_index_of(key)
        .ok_or_else(|| format!("class '{key}' is not in the data table"))?;

    let prev = if index > 0 {
        let (prev_key, prev_record) = table
            .get_index(index - 1)
            .ok_or_else(|| format!("no class at position {}", index - 1))?;
        format!(
            r#"<a href="class_{prev_key}.html">← Previous: {}</a>"#,
            prev_record.name
        )
    } else {
        r#"<a href="classes_overview.html">← Classes Overview</a>"#.to_owned()
    };

    let next = match table.get_index(index + 1) {
        Some((next_key, next_record)) => format!(
            r#"<a href="class_{next_key}.html">Next: {} →</a>"#,
            next_record.name
        ),
        None => r#"<a href="weapons_upgrades.html">Next: Weapons →</a>"#.to_owned(),
    };

    Ok((prev, next))
}

/// Dropdown links for every class, marking the current one.
fn render_class_dropdown(current_key: &str, table: &IndexMap<String, ClassRecord>) -> String {
    table
        .iter()
        .map(|(key, record)| {
            let current = if key == current_key {
                r#" class="current""#
            } else {
                ""
            };
            format!(r#"<a href="class_{key}.html"{current}>{}</a>"#, record.name)
        })
        .collect::<Vec<_>>()
        .join("\n                        ")
}

/// Quick-stat cards for the equipment grid.
pub fn render_stats(stats: &[Stat]) -> String {
    let mut html = String::new();
    for stat in stats {
        html.push_str(&format!(
            r#"
                <div class="equipment-item">
                    <div class="equipment-icon">{}</div>
                    <strong>{}</strong>
                    <p>{}</p>
                </div>"#,
            stat.icon, stat.title, stat.description
        ));
    }
    html
}

/// The fixed 4-column skill tree table: one core row, five tier rows at
/// levels 2/7/12/17/22, and one capstone row at level 27.
///
/// Fails fast if any tier does not hold exactly 3 perks, since the column
/// count is fixed.
pub fn render_skill_tree(tree: &SkillTree) -> Result<String, Box<dyn Error + Send + Sync>> {
    for (i, tier) in tree.tiers.iter().enumerate() {
        if tier.len() != 3 {
            return Err(format!(
                "skill tree tier {} holds {} perks, expected exactly 3",
                i + 1,
                tier.len()
            )
            .into());
        }
    }

    let mut html = format!(
        r#"
                <table class="skill-table">
                    <thead>
                        <tr>
                            <th>Tier</th>
                            <th>Column 1</th>
                            <th>Column 2</th>
                            <th>Column 3</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr class="tier-header">
                            <td>CORE<br><small>Unlocked at Start</small></td>
                            <td colspan="3" style="text-align: center;">
                                <strong>{}</strong>
                            </td>
                        </tr>"#,
        tree.core
    );

    for (i, tier) in tree.tiers.iter().enumerate() {
        html.push_str(&format!(
            r#"
                        <tr>
                            <td class="tier-header">Tier {}<br><small>Level {}</small></td>"#,
            i + 1,
            TIER_LEVELS[i]
        ));
        for perk in tier {
            html.push_str(&format!(
                r#"
                            <td>
                                <div class="perk-option">
                                    <span class="perk-name">{}</span>
                                    <span class="perk-desc">{}</span>
                                </div>
                            </td>"#,
                perk.name, perk.description
            ));
        }
        html.push_str(
            r#"
                        </tr>"#,
        );
    }

    html.push_str(&format!(
        r#"
                        <tr class="tier-header">
                            <td>Tier 6<br><small>Level 27</small></td>
                            <td colspan="3" style="text-align: center;">
                                <div class="perk-option">
                                    <strong>{}</strong>
                                </div>
                            </td>
                        </tr>
                    </tbody>
                </table>"#,
        tree.capstone
    ));

    Ok(html)
}

/// Tabbed build panels. The first panel is marked active by convention.
pub fn render_builds(builds: &[Build]) -> String {
    let mut html = String::new();
    for (i, build) in builds.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        let build_id = build.name.to_lowercase();
        html.push_str(&format!(
            r#"
            <div id="{build_id}-build" class="build-content{active}">
                <h3>{}</h3>
                <div class="difficulty-indicator">
                    <span>Execution Difficulty: {}</span>
                    <span>Gear Dependency: {}</span>
                </div>
                <p>{}</p>
                <ul class="perk-list">"#,
            build.title, build.difficulty, build.gear, build.description
        ));
        for (perk_name, tier) in &build.perks {
            html.push_str(&format!(
                r#"
                    <li>{perk_name} <span class="perk-tier">{tier}</span></li>"#
            ));
        }
        html.push_str(&format!(
            r#"
                </ul>
                <div class="tip-box">
                    <strong>💡 Pro Tip:</strong> {}
                </div>
            </div>"#,
            build.tip
        ));
    }
    html
}

/// Synergy cards with a rating badge class derived from the rating.
pub fn render_synergies(synergies: &[Synergy]) -> String {
    let mut html = String::new();
    for synergy in synergies {
        html.push_str(&format!(
            r#"
                <div class="synergy-card">
                    <h3>{} {}</h3>
                    <p>{}</p>
                    <span class="synergy-rating synergy-{}">{}</span>
                </div>"#,
            synergy.icon,
            synergy.combo,
            synergy.why,
            synergy.rating.badge_class(),
            synergy.rating
        ));
    }
    html
}

/// Counter-strategy blocks, iterating the special enemies in their fixed
/// display order and emitting nothing for absent keys.
pub fn render_special_strategies(
    strategies: &HashMap<SpecialEnemy, SpecialStrategy>,
) -> String {
    let mut html = String::new();
    for enemy in SpecialEnemy::iter() {
        let Some(strategy) = strategies.get(&enemy) else {
            continue;
        };
        html.push_str(&format!(
            r#"
            <div class="special-zombie">
                <div class="special-header">
                    <span class="special-icon">{}</span>
                    <span class="special-name">{}</span>
                </div>
                <div class="counter-strategy">
                    <h4>Strategy:</h4>
                    <ul>"#,
            enemy.icon(),
            enemy
        ));
        for point in &strategy.tactics {
            html.push_str(&format!(
                r#"
                        <li>{point}</li>"#
            ));
        }
        html.push_str(&format!(
            r#"
                    </ul>
                    <p><strong>Equipment:</strong> {}</p>
                </div>
            </div>"#,
            strategy.equipment
        ));
    }
    html
}

/// Situational tactics and prestige sections shared by every class page.
const EXTRA_SECTIONS: &str = r#"<section class="card">
            <h2>📍 Situational Tactics</h2>
            <div class="situation-tabs">
                <button class="tab active" onclick="showSituation('swarm')">🌊 Swarm Defense</button>
                <button class="tab" onclick="showSituation('running')">🏃 Running Section</button>
                <button class="tab" onclick="showSituation('boss')">👹 Boss Fight</button>
                <button class="tab" onclick="showSituation('escort')">🛡️ Escort Mission</button>
            </div>

            <div id="swarm-situation" class="situation-content active">
                <h4>Swarm Defense Priorities:</h4>
                <ol>
                    <li>Position according to class role</li>
                    <li>Use abilities before swarm hits</li>
                    <li>Focus fire on special zombies</li>
                    <li>Manage resources for multiple waves</li>
                    <li>Coordinate with team abilities</li>
                </ol>
            </div>

            <div id="running-situation" class="situation-content">
                <h4>Running Section Priorities:</h4>
                <ol>
                    <li>Maintain formation based on class</li>
                    <li>Save abilities for checkpoints</li>
                    <li>Clear path for slower teammates</li>
                    <li>Call out special spawns</li>
                    <li>Prepare for ambush points</li>
                </ol>
            </div>

            <div id="boss-situation" class="situation-content">
                <h4>Boss Fight Priorities:</h4>
                <ol>
                    <li>Assign roles based on class strengths</li>
                    <li>Manage ability cooldowns for phases</li>
                    <li>Focus adds then boss</li>
                    <li>Save resources for final phase</li>
                    <li>Coordinate burst damage windows</li>
                </ol>
            </div>

            <div id="escort-situation" class="situation-content">
                <h4>Escort Mission Priorities:</h4>
                <ol>
                    <li>Establish defensive positions</li>
                    <li>Rotate abilities for continuous protection</li>
                    <li>Clear path ahead of escort</li>
                    <li>Manage special spawns</li>
                    <li>Maintain perimeter defense</li>
                </ol>
            </div>
        </section>

        <section class="prestige-info">
            <h3>⭐ Prestige System</h3>
            <p>After reaching max level (30), you can prestige to unlock exclusive rewards:</p>
            <div class="prestige-grid">
                <div class="prestige-level">
                    <strong>Prestige 1</strong>
                    <p>Blue weapon skin</p>
                </div>
                <div class="prestige-level">
                    <strong>Prestige 2</strong>
                    <p>Character outfit</p>
                </div>
                <div class="prestige-level">
                    <strong>Prestige 3</strong>
                    <p>Gold weapon skin</p>
                </div>
                <div class="prestige-level">
                    <strong>Prestige 4</strong>
                    <p>Unique emblem</p>
                </div>
                <div class="prestige-level">
                    <strong>Prestige 5</strong>
                    <p>Red weapon skin</p>
                </div>
            </div>
            <p><strong>Note:</strong> Prestiging resets your level but keeps unlocked perks. Each prestige gives permanent XP bonuses!</p>
        </section>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{class_order, class_table, Perk};

    #[test]
    fn test_prev_next_links_follow_table_order() {
        let table = class_table();
        let order = class_order();
        for (i, key) in order.iter().enumerate() {
            let page = render_class_page(&table[*key], &table).unwrap();
            if i == 0 {
                assert!(page.contains(r#"<a href="classes_overview.html">← Classes Overview</a>"#));
            } else {
                let expected = format!(r#"<a href="class_{}.html">← Previous:"#, order[i - 1]);
                assert!(page.contains(&expected), "{key} prev link");
            }
            if i == order.len() - 1 {
                assert!(page.contains(r#"<a href="weapons_upgrades.html">Next: Weapons →</a>"#));
            } else {
                let expected = format!(r#"<a href="class_{}.html">Next:"#, order[i + 1]);
                assert!(page.contains(&expected), "{key} next link");
            }
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let table = class_table();
        let first = render_class_page(&table["medic"], &table).unwrap();
        let second = render_class_page(&table["medic"], &table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let table = class_table();
        let mut stray = table["medic"].clone();
        stray.key = "chaplain".to_owned();
        assert!(render_class_page(&stray, &table).is_err());
    }

    #[test]
    fn test_skill_tree_shape() {
        let table = class_table();
        let html = render_skill_tree(&table["medic"].skill_tree).unwrap();

        // Column header row plus core + five tiers + capstone.
        assert_eq!(html.matches("<tr").count(), 8);
        // Core and capstone rows span the three perk columns.
        assert_eq!(html.matches(r#"colspan="3""#).count(), 2);
        // 2 cells each for core/capstone rows, 4 for each tier row.
        assert_eq!(html.matches("<td").count(), 2 + 5 * 4 + 2);
        assert!(html.contains("Level 2<"));
        assert!(html.contains("Level 22<"));
        assert!(html.contains("Level 27<"));
    }

    #[test]
    fn test_skill_tree_rejects_short_tier() {
        let table = class_table();
        let mut tree = table["medic"].skill_tree.clone();
        tree.tiers[2].pop();
        let err = render_skill_tree(&tree).unwrap_err();
        assert!(err.to_string().contains("tier 3"));
    }

    #[test]
    fn test_skill_tree_rejects_long_tier() {
        let table = class_table();
        let mut tree = table["medic"].skill_tree.clone();
        tree.tiers[0].push(Perk::new("Extra", "One too many"));
        assert!(render_skill_tree(&tree).is_err());
    }

    #[test]
    fn test_first_build_tab_is_active() {
        let table = class_table();
        let html = render_builds(&table["medic"].builds);
        assert!(html.contains(r#"<div id="beginner-build" class="build-content active">"#));
        assert_eq!(html.matches("build-content active").count(), 1);
        assert!(html.contains(r#"<div id="combat-build" class="build-content">"#));
    }

    #[test]
    fn test_synergy_badge_class_is_lowercased_rating() {
        let table = class_table();
        let html = render_synergies(&table["medic"].synergies);
        assert!(html.contains(r#"synergy-rating synergy-excellent">EXCELLENT"#));
        assert!(html.contains(r#"synergy-rating synergy-moderate">MODERATE"#));
    }

    #[test]
    fn test_special_strategies_fixed_order_and_skipping() {
        let table = class_table();
        let mut strategies = table["medic"].special_strategies.clone();
        let html = render_special_strategies(&strategies);
        let bull = html.find("BULL").unwrap();
        let gasbag = html.find("GASBAG").unwrap();
        let lurker = html.find("LURKER").unwrap();
        let screamer = html.find("SCREAMER").unwrap();
        assert!(bull < gasbag && gasbag < lurker && lurker < screamer);

        strategies.remove(&SpecialEnemy::Lurker);
        let html = render_special_strategies(&strategies);
        assert!(!html.contains("LURKER"));
        assert!(html.contains("SCREAMER"));
    }

    #[test]
    fn test_two_entry_table_end_to_end() {
        // Only medic and fixer present, medic first: fixer's previous link
        // points at the medic page and its next link falls back to the
        // weapons page.
        let full = class_table();
        let mut table = IndexMap::new();
        table.insert("medic".to_owned(), full["medic"].clone());
        table.insert("fixer".to_owned(), full["fixer"].clone());

        let page = render_class_page(&table["fixer"], &table).unwrap();
        assert!(page.contains(r#"<a href="class_medic.html">← Previous: Medic</a>"#));
        assert!(page.contains(r#"<a href="weapons_upgrades.html">Next: Weapons →</a>"#));

        for marker in ["BULL", "GASBAG", "LURKER", "SCREAMER"] {
            assert!(page.contains(marker), "fixer page should cover {marker}");
        }
    }

    #[test]
    fn test_page_carries_shared_sections() {
        let table = class_table();
        let page = render_class_page(&table["medic"], &table).unwrap();
        assert!(page.contains("Situational Tactics"));
        assert!(page.contains("Prestige System"));
        assert!(page.contains(r#"class="current""#));
    }
}
