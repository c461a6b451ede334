use crate::primitives::*;
use crate::util::*;
use std::{fmt, rc::Rc};

pub mod engine;
pub mod run;
pub mod turn;

pub use self::{engine::*, run::*, turn::*};

#[cfg(test)]
mod tests;

/// Everything the game knows about one seat between two tricks.
///
/// `epi` is the seat the bot occupies; the bot itself is owned by whoever runs the game.
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct SBotState {
    pub epi: EPlayerIndex,
    pub str_bot_id: String,
    pub hand: SHand,
    pub score: SScore,
    pub veccard_won: Vec<ECard>,
}

impl fmt::Display for SBotState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: hand {}, score {}", self.str_bot_id, self.hand, self.score)
    }
}

/// Link from a snapshot to the one before it, together with the trick played in between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SPrevious {
    pub gamestate: Rc<SGameState>,
    pub trick: STrick,
    pub b_leader_remained_leader: bool,
}

/// Snapshot of a game at a trick boundary. Snapshots are never modified; playing a trick yields a
/// new snapshot pointing back to its predecessor.
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct SGameState {
    pub leader: SBotState,
    pub follower: SBotState,
    pub talon: STalon,
    pub oprevious: Option<SPrevious>,
}

impl SGameState {
    pub fn all_cards_played(&self) -> bool {
        self.leader.hand.is_empty() && self.follower.hand.is_empty() && self.talon.is_empty()
    }

    pub fn bot_state(&self, epi: EPlayerIndex) -> &SBotState {
        if self.leader.epi==epi {
            &self.leader
        } else {
            assert_eq!(self.follower.epi, epi);
            &self.follower
        }
    }

    pub fn previous(&self) -> Option<&SGameState> {
        self.oprevious.as_ref().map(|previous| previous.gamestate.as_ref())
    }

    /// Tricks played so far, most recent first.
    pub fn previous_tricks(&self) -> impl Iterator<Item=&STrick> {
        std::iter::successors(self.oprevious.as_ref(), |previous| previous.gamestate.oprevious.as_ref())
            .map(|previous| &previous.trick)
    }
}

impl fmt::Display for SGameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "leader {} | follower {} | talon {}", self.leader, self.follower, self.talon)
    }
}

#[cfg(test)]
pub(crate) fn bot_state_for_test(epi: EPlayerIndex, str_hand: &str, score: SScore, str_won: &str) -> SBotState {
    SBotState::new(
        epi,
        epi.to_string(),
        unwrap!(SHand::new(unwrap!(parse_cards(str_hand)))),
        score,
        unwrap!(parse_cards(str_won)),
    )
}

/// Leader holds `CA C5 H9 C7`, follower holds `SA H5 C9 S7`, talon is `SK HA`.
#[cfg(test)]
pub(crate) fn game_state_for_test() -> SGameState {
    SGameState::new(
        bot_state_for_test(EPlayerIndex::EPI0, "CA C5 H9 C7", SScore::new(4, 2), "DA"),
        bot_state_for_test(EPlayerIndex::EPI1, "SA H5 C9 S7", SScore::new(2, 4), "D9"),
        STalon::new(vec![ECard::SK, ECard::HA], ESuit::Hearts),
        /*oprevious*/None,
    )
}

#[test]
fn test_bot_state_clone() {
    let botstate = bot_state_for_test(EPlayerIndex::EPI0, "CA C5 H9 C7", SScore::new(4, 2), "DA");
    let mut botstate_clone = botstate.clone();
    assert_eq!(botstate_clone, botstate);
    assert_eq!(botstate_clone.str_bot_id, "0");
    unwrap!(botstate_clone.hand.remove(ECard::CA));
    botstate_clone.veccard_won.push(ECard::CA);
    botstate_clone.score = botstate_clone.score.redeem_pending_points();
    assert_eq!(botstate.hand.get_cards(), &[ECard::CA, ECard::C5, ECard::H9, ECard::C7]);
    assert_eq!(botstate.veccard_won, vec![ECard::DA]);
    assert_eq!(botstate.score, SScore::new(4, 2));
}

#[test]
fn test_game_state() {
    let gamestate = game_state_for_test();
    assert!(!gamestate.all_cards_played());
    assert_eq!(gamestate.bot_state(EPlayerIndex::EPI1).str_bot_id, "1");
    assert!(gamestate.previous().is_none());
    assert_eq!(gamestate.previous_tricks().count(), 0);
    let gamestate_done = SGameState::new(
        bot_state_for_test(EPlayerIndex::EPI0, "", SScore::new_direct(70), ""),
        bot_state_for_test(EPlayerIndex::EPI1, "", SScore::new_direct(50), ""),
        STalon::new(vec![], ESuit::Hearts),
        /*oprevious*/None,
    );
    assert!(gamestate_done.all_cards_played());
}
