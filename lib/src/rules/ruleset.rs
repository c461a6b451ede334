use crate::primitives::*;
use crate::util::*;
use std::path::Path;

/// Constants governing a game (and a match) of Schnapsen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SRuleSet {
    pub n_hand_size: usize,
    pub n_points_to_win: isize,
    pub n_points_marriage: isize,
    pub n_points_marriage_trump: isize,
    pub n_game_points_match: isize,
}

impl Default for SRuleSet {
    fn default() -> Self {
        SRuleSet {
            n_hand_size: N_HAND_SIZE_DEFAULT,
            n_points_to_win: 66,
            n_points_marriage: 20,
            n_points_marriage_trump: 40,
            n_game_points_match: 7,
        }
    }
}

impl SRuleSet {
    pub fn from_string(str_toml: &str) -> Result<SRuleSet, Error> {
        let tomltbl = str_toml.parse::<toml::Table>()?;
        let ruleset_default = SRuleSet::default();
        let read_int = |tomltbl: &toml::Table, str_key: &str, n_min: i64, n_default: i64| -> Result<i64, Error> {
            match tomltbl.get(str_key) {
                None => {
                    info!("SRuleSet: Did not find {}. Falling back to {}.", str_key, n_default);
                    Ok(n_default)
                },
                Some(tomlval) => match tomlval.as_integer() {
                    Some(n) if n_min<=n => Ok(n),
                    Some(n) => bail!("Found {} with invalid value {}. Must be at least {}.", str_key, n, n_min),
                    None => bail!("Found {} with non-integer value {}.", str_key, tomlval),
                },
            }
        };
        let n_hand_size = read_int(&tomltbl, "hand-size", 1, ruleset_default.n_hand_size.as_num())?;
        let n_cards_deck : i64 = ECard::schnapsen_values().count().as_num();
        if n_cards_deck <= 2 * n_hand_size {
            bail!("hand-size {} too large: two hands and a talon must fit into {} cards.", n_hand_size, n_cards_deck);
        }
        let n_game_points_match = match tomltbl.get("match") {
            None => ruleset_default.n_game_points_match.as_num(),
            Some(toml::Value::Table(tomltbl_match)) => read_int(tomltbl_match, "game-points", 1, ruleset_default.n_game_points_match.as_num())?,
            Some(tomlval) => bail!("Found match with invalid value {}. Must be a table.", tomlval),
        };
        Ok(SRuleSet {
            n_hand_size: n_hand_size.as_num(),
            n_points_to_win: read_int(&tomltbl, "points-to-win", 1, ruleset_default.n_points_to_win.as_num())?.as_num(),
            n_points_marriage: read_int(&tomltbl, "marriage-points", 0, ruleset_default.n_points_marriage.as_num())?.as_num(),
            n_points_marriage_trump: read_int(&tomltbl, "trump-marriage-points", 0, ruleset_default.n_points_marriage_trump.as_num())?.as_num(),
            n_game_points_match: n_game_points_match.as_num(),
        })
    }

    pub fn from_file(path: &Path) -> Result<SRuleSet, Error> {
        let str_toml = std::fs::read_to_string(path)
            .map_err(|err| format_err!("Could not read rule set {}: {}", path.display(), err))?;
        Self::from_string(&str_toml)
    }

    pub fn marriage_points(&self, esuit_marriage: ESuit, esuit_trump: ESuit) -> isize {
        if esuit_marriage==esuit_trump {
            self.n_points_marriage_trump
        } else {
            self.n_points_marriage
        }
    }

    /// Game points for the winner, depending on how far the loser got.
    pub fn game_points(&self, n_points_loser: isize) -> isize {
        if 0==n_points_loser {
            3
        } else if n_points_loser < self.n_points_to_win/2 {
            2
        } else {
            1
        }
    }
}

#[test]
fn test_ruleset_defaults() {
    assert_eq!(unwrap!(SRuleSet::from_string("")), SRuleSet::default());
    let ruleset = unwrap!(SRuleSet::from_string(r"
        hand-size = 4
        points-to-win = 50
        [match]
        game-points = 3
    "));
    assert_eq!(ruleset, SRuleSet {
        n_hand_size: 4,
        n_points_to_win: 50,
        n_points_marriage: 20,
        n_points_marriage_trump: 40,
        n_game_points_match: 3,
    });
}

#[test]
fn test_ruleset_invalid() {
    for str_toml in [
        "hand-size = 0",
        "hand-size = 10",
        "hand-size = \"five\"",
        "points-to-win = -3",
        "marriage-points = -1",
        "match = 4",
        "[match]\ngame-points = 0",
        "this is not toml",
    ] {
        assert!(SRuleSet::from_string(str_toml).is_err(), "{}", str_toml);
    }
}

#[test]
fn test_game_points() {
    let ruleset = SRuleSet::default();
    assert_eq!(ruleset.game_points(0), 3);
    assert_eq!(ruleset.game_points(1), 2);
    assert_eq!(ruleset.game_points(32), 2);
    assert_eq!(ruleset.game_points(33), 1);
    assert_eq!(ruleset.game_points(65), 1);
    assert_eq!(ruleset.marriage_points(ESuit::Hearts, ESuit::Hearts), 40);
    assert_eq!(ruleset.marriage_points(ESuit::Clubs, ESuit::Hearts), 20);
}
