//! Hint extraction
//!
//! Turns a ship's raw bonus text into the ordered clue list for a round.
//! Bonus lines are split on hyphens, whitespace is tidied, and any
//! "Race Class:" style prefix that would give the answer away is dropped.
//! The race and class hints always close the list.

use lazy_regex::regex;
use log::debug;

use crate::models::constants::{CLASS_HINT_PREFIX, RACE_HINT_PREFIX};
use crate::models::ship::ShipRecord;

/// The forced race hint for a ship.
pub fn race_hint(ship: &ShipRecord) -> String {
    format!("{}{}", RACE_HINT_PREFIX, ship.race_or_unknown())
}

/// The forced class hint for a ship.
pub fn class_hint(ship: &ShipRecord) -> String {
    format!("{}{}", CLASS_HINT_PREFIX, ship.class_or_unknown())
}

/// Collapse runs of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    regex!(r"\s+").replace_all(s, " ").trim().to_string()
}

/// Lower-case, tidy whitespace and drop one trailing plural `s`.
pub fn normalize_label(s: &str) -> String {
    let collapsed = collapse_whitespace(&s.to_lowercase());
    match collapsed.strip_suffix('s') {
        Some(singular) => singular.to_string(),
        None => collapsed,
    }
}

/// Split one raw bonus on hyphens into its tidied, non-empty parts.
pub fn split_bonus(raw: &str) -> Vec<String> {
    regex!(r"\s*-\s*")
        .split(raw)
        .map(collapse_whitespace)
        .filter(|part| !part.is_empty())
        .collect()
}

/// True when `prefix` names the ship's race or class, in either direction.
fn is_spoiler_prefix(prefix: &str, ship: &ShipRecord) -> bool {
    let prefix = normalize_label(prefix);
    [&ship.race, &ship.class]
        .into_iter()
        .map(|label| normalize_label(label))
        .filter(|label| !label.is_empty())
        .any(|label| prefix.contains(&label) || label.contains(&prefix))
}

/// Clean a single bonus part, stripping a spoiler prefix if it has one.
fn sanitize_part(part: String, ship: &ShipRecord) -> String {
    if regex!(r"(?i)^role bonus:").is_match(&part) {
        return part;
    }

    let stripped = regex!(r"^([^:]+):\s*(.*)$").captures(&part).and_then(|caps| {
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str()).trim();
        // an empty body keeps the whole part
        (is_spoiler_prefix(prefix, ship) && !body.is_empty()).then(|| body.to_string())
    });
    stripped.unwrap_or(part)
}

/// Build the ordered, de-duplicated hint list for a ship.
///
/// The result always ends with `"Race: …"` then `"Class: …"`, and never
/// contains the same string twice.
pub fn derive_hints(ship: &ShipRecord) -> Vec<String> {
    let race = race_hint(ship);
    let class = class_hint(ship);

    let mut hints: Vec<String> = Vec::new();
    for part in ship.bonuses.iter().flat_map(|raw| split_bonus(raw)) {
        let hint = sanitize_part(part, ship);
        if hint != race && hint != class && !hints.contains(&hint) {
            hints.push(hint);
        }
    }
    hints.push(race);
    hints.push(class);

    debug!("derived {} hints for {}", hints.len(), ship.name);
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rifter() -> ShipRecord {
        ShipRecord::new(
            "Rifter",
            "Minmatar",
            "Frigate",
            &["Minmatar Frigate: 5% bonus to shield", "Role Bonus: 99% reduction"],
        )
    }

    #[test]
    fn rifter_prefix_is_stripped() {
        assert_eq!(
            derive_hints(&rifter()),
            vec![
                "5% bonus to shield",
                "Role Bonus: 99% reduction",
                "Race: Minmatar",
                "Class: Frigate",
            ]
        );
    }

    #[test]
    fn empty_bonuses_yield_only_forced_hints() {
        let ship = ShipRecord::new("Ibis", "", "", &[]);
        assert_eq!(derive_hints(&ship), vec!["Race: Unknown", "Class: Unknown"]);
    }

    #[test]
    fn plain_bonus_is_kept_verbatim() {
        let ship = ShipRecord::new("Ibis", "Caldari", "Frigate", &["Can fit a cloak"]);
        assert_eq!(derive_hints(&ship)[0], "Can fit a cloak");
    }

    #[test]
    fn hyphenated_bonus_is_split_and_tidied() {
        let ship = ShipRecord::new(
            "Vexor",
            "Gallente",
            "Cruiser",
            &["10% drone damage  -   5%   armor hp- -"],
        );
        let hints = derive_hints(&ship);
        assert_eq!(&hints[..2], &["10% drone damage", "5% armor hp"]);
        assert_eq!(hints.len(), 4);
    }

    #[test]
    fn role_bonus_is_never_sanitized() {
        let ship = ShipRecord::new("Role", "Role", "Bonus", &["ROLE BONUS: cloaking"]);
        assert_eq!(derive_hints(&ship)[0], "ROLE BONUS: cloaking");
    }

    #[test]
    fn unrelated_prefix_is_kept() {
        let ship = ShipRecord::new("Drake", "Caldari", "Battlecruiser", &["Command Ships: 10% bonus"]);
        assert_eq!(derive_hints(&ship)[0], "Command Ships: 10% bonus");
    }

    #[test]
    fn plural_class_prefix_is_stripped() {
        let ship = ShipRecord::new("Drake", "Caldari", "Battlecruiser", &["Battlecruisers: 4% shield resist"]);
        assert_eq!(derive_hints(&ship)[0], "4% shield resist");
    }

    #[test]
    fn prefix_contained_in_class_is_stripped() {
        let ship = ShipRecord::new("Sabre", "Minmatar", "Interdictor Destroyer", &["Destroyer: 5% rof"]);
        assert_eq!(derive_hints(&ship)[0], "5% rof");
    }

    #[test]
    fn spoiler_prefix_with_empty_body_keeps_whole_part() {
        let ship = ShipRecord::new("Punisher", "Amarr", "Frigate", &["Amarr Frigate:"]);
        assert_eq!(derive_hints(&ship)[0], "Amarr Frigate:");
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let ship = ShipRecord::new(
            "Atron",
            "Gallente",
            "Frigate",
            &["Gallente Frigate: 5% damage", "Frigate: 5% damage - Extra"],
        );
        assert_eq!(
            derive_hints(&ship),
            vec!["5% damage", "Extra", "Race: Gallente", "Class: Frigate"]
        );
    }

    #[test]
    fn forced_hint_in_bonuses_is_moved_to_the_end() {
        let ship = ShipRecord::new("Slasher", "Minmatar", "Frigate", &["Race: Minmatar", "Fast"]);
        assert_eq!(
            derive_hints(&ship),
            vec!["Fast", "Race: Minmatar", "Class: Frigate"]
        );
    }

    #[test]
    fn normalize_label_is_tolerant() {
        assert_eq!(normalize_label("  Heavy   Assault Cruisers "), "heavy assault cruiser");
        assert_eq!(normalize_label("Frigate"), "frigate");
        assert_eq!(normalize_label("ss"), "s");
    }

    #[test]
    fn split_bonus_drops_empty_parts() {
        assert_eq!(split_bonus(" - a -b- "), vec!["a", "b"]);
        assert!(split_bonus("   ").is_empty());
    }
}
