use crate::primitives::{card::*, moves::*};
use crate::util::*;
use std::fmt;

/// What the leader did in the current trick, awaiting the follower's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SPartialTrick {
    otrumpexchange: Option<STrumpExchange>,
    mv_leader: VMove,
}

impl SPartialTrick {
    pub fn new(otrumpexchange: Option<STrumpExchange>, mv_leader: VMove) -> Result<SPartialTrick, Error> {
        if mv_leader.is_trump_exchange() {
            bail!("Leader must play a card after exchanging trump, got {}", mv_leader);
        }
        Ok(SPartialTrick {otrumpexchange, mv_leader})
    }
    pub fn trump_exchange(&self) -> Option<STrumpExchange> {
        self.otrumpexchange
    }
    pub fn leader_move(&self) -> VMove {
        self.mv_leader
    }
    pub fn card_led(&self) -> ECard {
        unwrap!(self.mv_leader.as_regular_move()).card
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, new)]
pub struct STrick {
    pub partialtrick: SPartialTrick,
    pub mv_follower: SRegularMove,
}

impl STrick {
    pub fn cards(&self) -> [ECard; 2] {
        [self.partialtrick.card_led(), self.mv_follower.card]
    }
}

impl fmt::Display for STrick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(trumpexchange) = self.partialtrick.trump_exchange() {
            write!(f, "{} ", VMove::from(trumpexchange))?;
        }
        write!(f, "{} / {}", self.partialtrick.leader_move(), self.mv_follower.card)
    }
}

#[test]
fn test_partial_trick() {
    let trumpexchange = unwrap!(STrumpExchange::new(ECard::SJ));
    assert!(SPartialTrick::new(None, VMove::from(trumpexchange)).is_err());
    let partialtrick = unwrap!(SPartialTrick::new(Some(trumpexchange), VMove::from(SMarriage::new_for_suit(ESuit::Hearts))));
    assert_eq!(partialtrick.card_led(), ECard::HQ);
    let trick = STrick::new(partialtrick, SRegularMove::new(ECard::HA));
    assert_eq!(trick.cards(), [ECard::HQ, ECard::HA]);
    assert_eq!(trick.to_string(), "TrumpExchange(SJ) Marriage(HQ HK) / HA");
}
