//! Mapping of noisy free-text nationality and amateur-league values onto a
//! small fixed vocabulary

use std::fmt;

use crate::parser::text::{primary_value, trailing_parenthesised};

pub const OTHER_NATIONALITY: &str = "other";

/// Canonical nations and their two-letter codes
pub static NATIONS: &[(&str, &str)] = &[
    ("Canada", "CA"),
    ("USA", "US"),
    ("Sweden", "SE"),
    ("Finland", "FI"),
    ("Russia", "RU"),
    ("Czechia", "CZ"),
    ("Slovakia", "SK"),
    ("Switzerland", "CH"),
    ("Germany", "DE"),
];

pub static EUROPEAN_LEAGUES: &[&str] = &[
    "Sweden", "Sweden-2", "Sweden-3", "Sweden-Jr.", "SHL", "SEL", "Allsvenskan", "SuperElit",
    "Finland", "Finland-2", "Finland-Jr.", "Liiga", "SM-liiga", "Mestis",
    "Czech", "Czech-2", "Czech-Jr.", "Czech Republic", "Czechoslovakia", "Extraliga",
    "Slovakia", "Slovakia-2", "Slovakia-Jr.",
    "Switzerland", "Switzerland-2", "Swiss", "NLA", "NLB",
    "Germany", "Germany-2", "DEL", "DEL2",
    "Austria", "EBEL", "Norway", "Denmark", "France", "Latvia", "Belarus",
    "Ukraine", "Italy", "Poland", "Slovenia", "Great Britain",
];

pub static NORTH_AMERICAN_LEAGUES: &[&str] = &[
    "OHL", "WHL", "QMJHL", "CHL", "OHA", "OHA-Jr.", "WCJHL", "QJHL",
    "USHL", "USDP", "NTDP", "NAHL", "EJHL", "USA",
    "NCAA", "WCHA", "CCHA", "ECAC", "H-East", "Hockey East", "Big Ten", "NCHC",
    "AHL", "IHL", "ECHL", "CHL-Pro",
    "BCHL", "AJHL", "SJHL", "MJHL", "OJHL", "OPJHL", "CCHL", "MJAHL", "QJAHL", "CJHL",
    "Canada",
];

pub static RUSSIAN_LEAGUES: &[&str] = &[
    "Russia", "Russia-2", "Russia-3", "Russia-Jr.", "USSR", "Soviet", "CIS",
    "KHL", "RSL", "MHL", "VHL",
];

/// Prefixes of North American high-school and junior circuits, lower case
pub static JUNIOR_PREFIXES: &[&str] = &["hs-", "ushs", "high-", "jr."];

/// Resolve a player's nationality: the spelled-out value if it is canonical,
/// else the code mapped to its nation, else [`OTHER_NATIONALITY`]
pub fn classify_nationality(spelled: Option<&str>, code: Option<&str>) -> &'static str {
    if let Some(spelled) = spelled.map(primary_value) {
        if let Some((name, _)) = NATIONS.iter().find(|(name, _)| name.eq_ignore_ascii_case(spelled)) {
            return *name;
        }
    }
    if let Some(code) = code.map(primary_value) {
        if let Some((name, _)) = NATIONS.iter().find(|(_, c)| c.eq_ignore_ascii_case(code)) {
            return *name;
        }
    }
    OTHER_NATIONALITY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmateurLeague {
    Europe,
    NorthAmerica,
    Russia,
    Other,
    /// No amateur league on record
    NotDrafted,
}

impl AmateurLeague {
    pub fn label(self) -> &'static str {
        match self {
            AmateurLeague::Europe => "Europe",
            AmateurLeague::NorthAmerica => "North America",
            AmateurLeague::Russia => "Russia",
            AmateurLeague::Other => "other",
            AmateurLeague::NotDrafted => "not drafted",
        }
    }
}

impl fmt::Display for AmateurLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// League embedded in an amateur team, e.g. `"Erie Otters (OHL)"` -> `"OHL"`
pub fn extract_amateur_league(amateur_team: &str) -> Option<&str> {
    trailing_parenthesised(amateur_team)
}

/// Geographic bucket of an extracted league; `None` means nothing on record
pub fn classify_amateur_league(league: Option<&str>) -> AmateurLeague {
    let Some(league) = league.map(primary_value).filter(|l| !l.is_empty()) else {
        return AmateurLeague::NotDrafted;
    };

    let member = |list: &[&str]| list.iter().any(|l| l.eq_ignore_ascii_case(league));
    let lowered = league.to_ascii_lowercase();

    if member(EUROPEAN_LEAGUES) {
        AmateurLeague::Europe
    } else if member(RUSSIAN_LEAGUES) {
        AmateurLeague::Russia
    } else if member(NORTH_AMERICAN_LEAGUES) || JUNIOR_PREFIXES.iter().any(|p| lowered.starts_with(*p)) {
        AmateurLeague::NorthAmerica
    } else {
        AmateurLeague::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelled_out_name_wins() {
        assert_eq!(classify_nationality(Some("Sweden"), Some("CA")), "Sweden");
        assert_eq!(classify_nationality(Some("Sweden"), None), "Sweden");
    }

    #[test]
    fn test_code_used_when_name_unmapped() {
        assert_eq!(classify_nationality(Some("Kazakhstan"), Some("CA")), "Canada");
        assert_eq!(classify_nationality(None, Some("CA")), "Canada");
    }

    #[test]
    fn test_unrecognized_pair_is_other() {
        assert_eq!(classify_nationality(Some("Kazakhstan"), Some("KZ")), "other");
        assert_eq!(classify_nationality(None, None), "other");
    }

    #[test]
    fn test_secondary_nationality_is_ignored() {
        assert_eq!(classify_nationality(Some("Canada/USA"), None), "Canada");
        assert_eq!(classify_nationality(Some("Norway/Sweden"), None), "other");
    }

    #[test]
    fn test_extract_amateur_league() {
        assert_eq!(extract_amateur_league("Erie Otters (OHL)"), Some("OHL"));
        assert_eq!(extract_amateur_league("Frolunda HC"), None);
    }

    #[test]
    fn test_classify_amateur_league() {
        assert_eq!(classify_amateur_league(Some("OHL")), AmateurLeague::NorthAmerica);
        assert_eq!(classify_amateur_league(Some("Sweden")), AmateurLeague::Europe);
        assert_eq!(classify_amateur_league(Some("KHL")), AmateurLeague::Russia);
        assert_eq!(classify_amateur_league(Some("USSR")), AmateurLeague::Russia);
        assert_eq!(classify_amateur_league(Some("USDP/USHL")), AmateurLeague::NorthAmerica);
        assert_eq!(classify_amateur_league(Some("HS-MN")), AmateurLeague::NorthAmerica);
        assert_eq!(classify_amateur_league(Some("hs-mn")), AmateurLeague::NorthAmerica);
        assert_eq!(classify_amateur_league(Some("JR. A")), AmateurLeague::NorthAmerica);
        assert_eq!(classify_amateur_league(Some("Japan")), AmateurLeague::Other);
    }

    #[test]
    fn test_absent_league_is_not_drafted() {
        assert_eq!(classify_amateur_league(None), AmateurLeague::NotDrafted);
        assert_eq!(classify_amateur_league(None).label(), "not drafted");
        assert_ne!(AmateurLeague::NotDrafted.label(), AmateurLeague::Other.label());
    }
}
