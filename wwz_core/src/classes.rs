// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};

/// A single quick-stat card shown at the top of a class page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Stat {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// One selectable perk in a skill tree tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub name: String,
    pub description: String,
}

impl Perk {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// The fixed-shape class progression: one core ability, five tiers of
/// three perks each, and one capstone ability.
///
/// Tier lengths are validated by the renderer, not the constructor, so a
/// malformed table fails at render time with a clear message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTree {
    pub core: String,
    pub tiers: [Vec<Perk>; 5],
    pub capstone: String,
}

/// A curated perk loadout representing one recommended playstyle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Short identifier used for the tab element id (lowercased).
    pub name: String,
    pub title: String,
    /// Execution difficulty as a fixed-length icon string.
    pub difficulty: String,
    /// Gear dependency as a fixed-length icon string.
    pub gear: String,
    pub description: String,
    /// Ordered (perk name, tier label) pairs.
    pub perks: Vec<(String, String)>,
    pub tip: String,
}

/// Qualitative pairing rating between two classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum SynergyRating {
    #[strum(to_string = "EXCELLENT")]
    Excellent,
    #[strum(to_string = "GOOD")]
    Good,
    #[strum(to_string = "MODERATE")]
    Moderate,
}

impl SynergyRating {
    /// CSS badge class suffix, the lowercased rating name.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synergy {
    pub combo: String,
    pub rating: SynergyRating,
    pub why: String,
    pub icon: String,
}

impl Synergy {
    pub fn new(combo: &str, rating: SynergyRating, why: &str, icon: &str) -> Self {
        Self {
            combo: combo.to_owned(),
            rating,
            why: why.to_owned(),
            icon: icon.to_owned(),
        }
    }
}

/// The four special zombie archetypes, in their fixed display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum SpecialEnemy {
    #[strum(to_string = "BULL")]
    Bull,
    #[strum(to_string = "GASBAG")]
    Gasbag,
    #[strum(to_string = "LURKER")]
    Lurker,
    #[strum(to_string = "SCREAMER")]
    Screamer,
}

impl SpecialEnemy {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Bull => "🐂",
            Self::Gasbag => "🤢",
            Self::Lurker => "👻",
            Self::Screamer => "😱",
        }
    }
}

/// Per-class tactical guidance against one special enemy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialStrategy {
    pub tactics: Vec<String>,
    pub equipment: String,
}

impl SpecialStrategy {
    pub fn new(tactics: &[&str], equipment: &str) -> Self {
        Self {
            tactics: tactics.iter().map(|t| (*t).to_owned()).collect(),
            equipment: equipment.to_owned(),
        }
    }
}

/// One playable class, read-only after construction.
///
/// `special_strategies` is not required to contain all four enemy keys;
/// the renderer skips absent ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub difficulty: String,
    pub difficulty_text: String,
    pub roles: Vec<String>,
    pub core_role: String,
    pub stats: Vec<Stat>,
    pub skill_tree: SkillTree,
    pub builds: Vec<Build>,
    pub synergies: Vec<Synergy>,
    pub special_strategies: HashMap<SpecialEnemy, SpecialStrategy>,
}

/// The canonical class sequence. Drives prev/next navigation and the
/// dropdown ordering, so the order is a contract.
pub fn class_order() -> [&'static str; 8] {
    [
        "medic",
        "fixer",
        "gunslinger",
        "exterminator",
        "slasher",
        "hellraiser",
        "dronemaster",
        "vanguard",
    ]
}

/// Display name for a class key (keys are lowercase single words).
pub fn class_display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the full class table in canonical order.
///
/// Medic and Fixer carry complete hand-written content; the remaining
/// classes get fully-populated placeholder records until their guides are
/// written up.
pub fn class_table() -> IndexMap<String, ClassRecord> {
    let mut table = IndexMap::new();
    table.insert("medic".to_owned(), medic_record());
    table.insert("fixer".to_owned(), fixer_record());
    for (key, icon) in [
        ("gunslinger", "🔫"),
        ("exterminator", "🔥"),
        ("slasher", "🗡️"),
        ("hellraiser", "💥"),
        ("dronemaster", "🤖"),
        ("vanguard", "🛡️"),
    ] {
        table.insert(key.to_owned(), placeholder_record(key, icon));
    }
    table
}

fn medic_record() -> ClassRecord {
    ClassRecord {
        key: "medic".to_owned(),
        name: "Medic".to_owned(),
        icon: "🏥".to_owned(),
        difficulty: "⭐⭐☆☆☆".to_owned(),
        difficulty_text: "Beginner Friendly".to_owned(),
        roles: vec![
            "Healer".to_owned(),
            "Support".to_owned(),
            "Team Survival".to_owned(),
        ],
        core_role: "Keep your team alive through heals, buffs, and clutch revives".to_owned(),
        stats: vec![
            Stat::new("❤️", "Health Bonus", "+25% team health when mastered"),
            Stat::new("💉", "Stim Pistol", "Instant heals from range"),
            Stat::new("⚡", "Revive Speed", "Up to 50% faster"),
            Stat::new("🛡️", "Damage Resist", "Team buff after healing"),
        ],
        skill_tree: SkillTree {
            core: "Stim Pistol: Heal teammates from a distance (60s cooldown)".to_owned(),
            tiers: [
                vec![
                    Perk::new("Triage", "Apply medkits 50% faster"),
                    Perk::new("Paramedic", "Stim Pistol cooldown -10s"),
                    Perk::new("SMG Specialist", "SMG reload speed +25%"),
                ],
                vec![
                    Perk::new("Efficiency", "25% chance not to consume medkits"),
                    Perk::new("Free Hugs", "Heal self when healing others"),
                    Perk::new("In the Zone", "Kills during Stim extend duration"),
                ],
                vec![
                    Perk::new("Sugar Coated", "Healing grants temp health"),
                    Perk::new("Pickpocket", "Healed players may drop supplies"),
                    Perk::new("Swapping Mags", "Faster reload for all weapons"),
                ],
                vec![
                    Perk::new("Combat Medic", "Kills reset Stim Pistol cooldown"),
                    Perk::new("Good Karma", "Healing grants firearm damage buff"),
                    Perk::new("Secret Ingredient", "Medkits grant damage resistance"),
                ],
                vec![
                    Perk::new("Fighting Fit", "+25% health for entire team"),
                    Perk::new("Lobotomy", "Stim headshots instantly kill"),
                    Perk::new("Big Pharma", "Carry +1 medkit"),
                ],
            ],
            capstone: "Masking Gas: Become invisible while reviving teammates".to_owned(),
        },
        builds: vec![
            Build {
                name: "Beginner".to_owned(),
                title: "Stay Alive".to_owned(),
                difficulty: "🎮⚪⚪⚪⚪".to_owned(),
                gear: "🔧⚪⚪⚪⚪".to_owned(),
                description: "Focus on survivability and basic healing.".to_owned(),
                perks: vec![
                    ("Triage".to_owned(), "T1".to_owned()),
                    ("Free Hugs".to_owned(), "T2".to_owned()),
                    ("Sugar Coated".to_owned(), "T3".to_owned()),
                    ("Secret Ingredient".to_owned(), "T4".to_owned()),
                    ("Fighting Fit".to_owned(), "T5".to_owned()),
                ],
                tip: "This build maximizes team survival. Focus on staying near teammates."
                    .to_owned(),
            },
            Build {
                name: "Support".to_owned(),
                title: "Team Backbone".to_owned(),
                difficulty: "🎮🎮⚪⚪⚪".to_owned(),
                gear: "🔧🔧⚪⚪⚪".to_owned(),
                description: "Maximum healing output and team buffs.".to_owned(),
                perks: vec![
                    ("Paramedic".to_owned(), "T1".to_owned()),
                    ("Efficiency".to_owned(), "T2".to_owned()),
                    ("Pickpocket".to_owned(), "T3".to_owned()),
                    ("Good Karma".to_owned(), "T4".to_owned()),
                    ("Big Pharma".to_owned(), "T5".to_owned()),
                ],
                tip: "Coordinate with your team. Call out buffs and manage medkit economy."
                    .to_owned(),
            },
            Build {
                name: "Combat".to_owned(),
                title: "Battle Angel".to_owned(),
                difficulty: "🎮🎮🎮🎮⚪".to_owned(),
                gear: "🔧🔧🔧⚪⚪".to_owned(),
                description: "Aggressive playstyle with self-sustain.".to_owned(),
                perks: vec![
                    ("SMG Specialist".to_owned(), "T1".to_owned()),
                    ("In the Zone".to_owned(), "T2".to_owned()),
                    ("Swapping Mags".to_owned(), "T3".to_owned()),
                    ("Combat Medic".to_owned(), "T4".to_owned()),
                    ("Lobotomy".to_owned(), "T5".to_owned()),
                ],
                tip: "Chain kills to reset Stim Pistol. Use SMGs for consistent damage."
                    .to_owned(),
            },
        ],
        synergies: vec![
            Synergy::new(
                "Medic + Fixer",
                SynergyRating::Excellent,
                "Ultimate support duo. Never run out of resources.",
                "🔧",
            ),
            Synergy::new(
                "Medic + Slasher",
                SynergyRating::Good,
                "Keep aggressive Slasher alive for maximum damage.",
                "🗡️",
            ),
            Synergy::new(
                "Medic + Hellraiser",
                SynergyRating::Moderate,
                "Good balance but both need protection during reloads.",
                "💥",
            ),
        ],
        special_strategies: [
            (
                SpecialEnemy::Bull,
                SpecialStrategy::new(
                    &[
                        "<strong>Pre-heal teammates</strong> in Bull's path for damage reduction",
                        "Save Stim Pistol for <strong>instant recovery</strong> after charge",
                        "Position yourself <strong>perpendicular</strong> to team - never in line",
                        "If teammate grabbed, <strong>stun grenade</strong> interrupts slam",
                    ],
                    "Stun Grenades or Molotovs to stop charges",
                ),
            ),
            (
                SpecialEnemy::Gasbag,
                SpecialStrategy::new(
                    &[
                        "Maintain <strong>maximum distance</strong> - gas cloud devastates teams",
                        "Pre-apply <strong>temp health</strong> before engaging",
                        "Have Stim ready for teammates caught in gas",
                        "<strong>Never melee</strong> - instant gas explosion",
                    ],
                    "Stay back and use ranged weapons only",
                ),
            ),
            (
                SpecialEnemy::Lurker,
                SpecialStrategy::new(
                    &[
                        "<strong>Listen for growls</strong> - audio cue before pounce",
                        "Travel in <strong>buddy system</strong> - immediate rescue possible",
                        "Masking gas makes you <strong>invisible during revives</strong>",
                        "Stim Pistol can <strong>headshot Lurkers</strong> with Lobotomy perk",
                    ],
                    "Flashbangs reveal hiding spots",
                ),
            ),
            (
                SpecialEnemy::Screamer,
                SpecialStrategy::new(
                    &[
                        "<strong>Priority target #1</strong> - scream triggers swarm",
                        "Use Stim Pistol for <strong>silent ranged kills</strong>",
                        "Always carry <strong>silenced weapon</strong> as Medic",
                        "If scream starts, immediately prep <strong>AoE healing</strong>",
                    ],
                    "Silenced weapons mandatory",
                ),
            ),
        ]
        .into_iter()
        .collect(),
    }
}

fn fixer_record() -> ClassRecord {
    ClassRecord {
        key: "fixer".to_owned(),
        name: "Fixer".to_owned(),
        icon: "🔧".to_owned(),
        difficulty: "⭐⭐☆☆☆".to_owned(),
        difficulty_text: "Beginner Friendly".to_owned(),
        roles: vec![
            "Support".to_owned(),
            "Ammo Supply".to_owned(),
            "Team Utility".to_owned(),
        ],
        core_role: "Keep team supplied with ammo and equipment while providing utility"
            .to_owned(),
        stats: vec![
            Stat::new("💼", "Supply Bags", "Instant ammo refill for team"),
            Stat::new("🔋", "Explosive Ammo", "Boost team damage output"),
            Stat::new("🛠️", "Equipment Bags", "Restore team equipment"),
            Stat::new("💨", "Masking Gas", "Team invisibility grenades"),
        ],
        skill_tree: SkillTree {
            core: "Supply Bags: Drop ammo bags that refill team ammunition (90s cooldown)"
                .to_owned(),
            tiers: [
                vec![
                    Perk::new("Sapper", "Start with breaching charges"),
                    Perk::new("Coffee Break", "+1 equipment charge"),
                    Perk::new("Wheatgrass", "Temp health from equipment"),
                ],
                vec![
                    Perk::new("Explosive Ammo", "Supply bags grant explosive rounds"),
                    Perk::new("Side Pockets", "10% chance to keep equipment"),
                    Perk::new("Lucky", "Equipment boxes give 2 charges"),
                ],
                vec![
                    Perk::new("Pickpocket", "Kills near bags drop supplies"),
                    Perk::new("Heavy Metal", "Heavy weapons +1 magazine"),
                    Perk::new("Third Hand", "Faster interaction speed"),
                ],
                vec![
                    Perk::new("Armory", "Start with primary upgraded"),
                    Perk::new("Night Owl", "See items through walls"),
                    Perk::new("Power Shot", "Penetration rounds in bags"),
                ],
                vec![
                    Perk::new("Masking Grenades", "Equipment becomes masking gas"),
                    Perk::new("Artisan", "Equipment affects larger area"),
                    Perk::new("Shadow Walker", "Gain speed after equipment"),
                ],
            ],
            capstone: "Equipment Master: All equipment bonuses enhanced".to_owned(),
        },
        builds: vec![
            Build {
                name: "Beginner".to_owned(),
                title: "Resource Manager".to_owned(),
                difficulty: "🎮⚪⚪⚪⚪".to_owned(),
                gear: "🔧⚪⚪⚪⚪".to_owned(),
                description: "Focus on keeping team supplied.".to_owned(),
                perks: vec![
                    ("Coffee Break".to_owned(), "T1".to_owned()),
                    ("Side Pockets".to_owned(), "T2".to_owned()),
                    ("Lucky".to_owned(), "T3".to_owned()),
                    ("Night Owl".to_owned(), "T4".to_owned()),
                    ("Artisan".to_owned(), "T5".to_owned()),
                ],
                tip: "Drop supply bags before every major fight.".to_owned(),
            },
            Build {
                name: "Support".to_owned(),
                title: "Team Backbone".to_owned(),
                difficulty: "🎮🎮⚪⚪⚪".to_owned(),
                gear: "🔧🔧⚪⚪⚪".to_owned(),
                description: "Maximum team utility.".to_owned(),
                perks: vec![
                    ("Wheatgrass".to_owned(), "T1".to_owned()),
                    ("Explosive Ammo".to_owned(), "T2".to_owned()),
                    ("Pickpocket".to_owned(), "T3".to_owned()),
                    ("Power Shot".to_owned(), "T4".to_owned()),
                    ("Masking Grenades".to_owned(), "T5".to_owned()),
                ],
                tip: "Coordinate explosive ammo timing with team.".to_owned(),
            },
            Build {
                name: "Combat".to_owned(),
                title: "Battle Support".to_owned(),
                difficulty: "🎮🎮🎮🎮⚪".to_owned(),
                gear: "🔧🔧🔧⚪⚪".to_owned(),
                description: "Aggressive support style.".to_owned(),
                perks: vec![
                    ("Sapper".to_owned(), "T1".to_owned()),
                    ("Explosive Ammo".to_owned(), "T2".to_owned()),
                    ("Heavy Metal".to_owned(), "T3".to_owned()),
                    ("Armory".to_owned(), "T4".to_owned()),
                    ("Shadow Walker".to_owned(), "T5".to_owned()),
                ],
                tip: "Use breaching charges offensively.".to_owned(),
            },
        ],
        synergies: vec![
            Synergy::new(
                "Fixer + Hellraiser",
                SynergyRating::Excellent,
                "Unlimited explosives. Maximum destruction.",
                "💥",
            ),
            Synergy::new(
                "Fixer + Gunslinger",
                SynergyRating::Good,
                "Constant ammo for sustained DPS.",
                "🔫",
            ),
            Synergy::new(
                "Fixer + Vanguard",
                SynergyRating::Moderate,
                "Good support but lacks damage.",
                "🛡️",
            ),
        ],
        special_strategies: [
            (
                SpecialEnemy::Bull,
                SpecialStrategy::new(
                    &[
                        "Drop <strong>explosive ammo</strong> before Bull",
                        "Place equipment <strong>in path</strong>",
                        "Masking gas for <strong>invisibility</strong>",
                        "Save bags for <strong>after charge</strong>",
                    ],
                    "Claymores in path",
                ),
            ),
            (
                SpecialEnemy::Gasbag,
                SpecialStrategy::new(
                    &[
                        "<strong>Explosive ammo</strong> pops faster",
                        "Drop bags <strong>before engagement</strong>",
                        "Masking prevents <strong>gas damage</strong>",
                        "<strong>Maximum range</strong> always",
                    ],
                    "Fire grenades",
                ),
            ),
            (
                SpecialEnemy::Lurker,
                SpecialStrategy::new(
                    &[
                        "Night Owl <strong>sees through walls</strong>",
                        "Masking for <strong>invisible revives</strong>",
                        "Equipment helps <strong>flush corners</strong>",
                        "Explosive ammo <strong>one-shots</strong>",
                    ],
                    "Flashbangs",
                ),
            ),
            (
                SpecialEnemy::Screamer,
                SpecialStrategy::new(
                    &[
                        "<strong>Silenced weapons</strong> mandatory",
                        "Breaching charge <strong>silent kill</strong>",
                        "Drop bags <strong>after scream</strong>",
                        "Masking helps <strong>escape swarm</strong>",
                    ],
                    "Stun guns",
                ),
            ),
        ]
        .into_iter()
        .collect(),
    }
}

/// Fully-populated placeholder record for a class whose guide content has
/// not been written yet. Everything the renderer touches is present, so a
/// placeholder page renders identically in shape to a finished one.
pub fn placeholder_record(key: &str, icon: &str) -> ClassRecord {
    let name = class_display_name(key);
    let tier = |offset: usize| {
        vec![
            Perk::new(&format!("Skill {}", offset + 1), "Description"),
            Perk::new(&format!("Skill {}", offset + 2), "Description"),
            Perk::new(&format!("Skill {}", offset + 3), "Description"),
        ]
    };
    let build = |build_name: &str, title: &str, difficulty: &str, gear: &str, desc: &str, tip: &str| Build {
        name: build_name.to_owned(),
        title: title.to_owned(),
        difficulty: difficulty.to_owned(),
        gear: gear.to_owned(),
        description: desc.to_owned(),
        perks: (1..=5)
            .map(|i| (format!("Perk {i}"), format!("T{i}")))
            .collect(),
        tip: tip.to_owned(),
    };
    let strategy = SpecialStrategy::new(
        &["Strategy 1", "Strategy 2", "Strategy 3", "Strategy 4"],
        "Recommended gear",
    );
    ClassRecord {
        key: key.to_owned(),
        name: name.clone(),
        icon: icon.to_owned(),
        difficulty: "⭐⭐⭐☆☆".to_owned(),
        difficulty_text: "Moderate".to_owned(),
        roles: vec!["DPS".to_owned(), "Damage".to_owned(), "Combat".to_owned()],
        core_role: format!("Master of {key} combat tactics"),
        stats: vec![
            Stat::new("⚔️", "Primary Ability", "Class special ability"),
            Stat::new("💪", "Core Strength", "Main advantage"),
            Stat::new("🎯", "Focus Area", "Specialization"),
            Stat::new("⭐", "Ultimate", "Max level power"),
        ],
        skill_tree: SkillTree {
            core: format!("{name} Core Ability"),
            tiers: [tier(0), tier(3), tier(6), tier(9), tier(12)],
            capstone: format!("{name} Mastery"),
        },
        builds: vec![
            build(
                "Beginner",
                "Basic Build",
                "🎮⚪⚪⚪⚪",
                "🔧⚪⚪⚪⚪",
                "Easy to play build.",
                "Focus on basics.",
            ),
            build(
                "Support",
                "Specialized Build",
                "🎮🎮🎮⚪⚪",
                "🔧🔧⚪⚪⚪",
                "Focused playstyle.",
                "Master the mechanics.",
            ),
            build(
                "Combat",
                "Advanced Build",
                "🎮🎮🎮🎮⚪",
                "🔧🔧🔧⚪⚪",
                "High skill ceiling.",
                "Requires practice.",
            ),
        ],
        synergies: vec![
            Synergy::new(
                &format!("{name} + Medic"),
                SynergyRating::Good,
                "Strong combination.",
                "🏥",
            ),
            Synergy::new(
                &format!("{name} + Fixer"),
                SynergyRating::Good,
                "Works well together.",
                "🔧",
            ),
            Synergy::new(
                &format!("{name} + {name}"),
                SynergyRating::Moderate,
                "Double up strategy.",
                "⚔️",
            ),
        ],
        special_strategies: [
            (SpecialEnemy::Bull, strategy.clone()),
            (SpecialEnemy::Gasbag, strategy.clone()),
            (SpecialEnemy::Lurker, strategy.clone()),
            (SpecialEnemy::Screamer, strategy),
        ]
        .into_iter()
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_class_table_matches_canonical_order() {
        let table = class_table();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, class_order());
    }

    #[test]
    fn test_full_records_have_three_perks_per_tier() {
        let table = class_table();
        for record in table.values() {
            for (i, tier) in record.skill_tree.tiers.iter().enumerate() {
                assert_eq!(
                    tier.len(),
                    3,
                    "{} tier {} should hold 3 perks",
                    record.key,
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_every_record_has_three_builds() {
        for record in class_table().values() {
            assert_eq!(record.builds.len(), 3, "{} builds", record.key);
            assert_eq!(record.builds[0].name, "Beginner");
        }
    }

    #[test]
    fn test_placeholder_record_is_fully_populated() {
        let record = placeholder_record("vanguard", "🛡️");
        assert_eq!(record.name, "Vanguard");
        assert_eq!(record.stats.len(), 4);
        assert_eq!(record.synergies.len(), 3);
        for enemy in SpecialEnemy::iter() {
            assert!(record.special_strategies.contains_key(&enemy));
        }
    }

    #[test]
    fn test_special_enemy_display_order() {
        let order: Vec<String> = SpecialEnemy::iter().map(|e| e.to_string()).collect();
        assert_eq!(order, ["BULL", "GASBAG", "LURKER", "SCREAMER"]);
    }

    #[test]
    fn test_synergy_rating_badge_class() {
        assert_eq!(SynergyRating::Excellent.badge_class(), "excellent");
        assert_eq!(SynergyRating::Excellent.to_string(), "EXCELLENT");
    }

    #[test]
    fn test_class_display_name() {
        assert_eq!(class_display_name("dronemaster"), "Dronemaster");
        assert_eq!(class_display_name(""), "");
    }
}
