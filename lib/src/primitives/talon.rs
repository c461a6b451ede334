use crate::primitives::{card::*, hand::SDisplayCardSlice};
use crate::util::*;
use std::fmt;

/// Face-down draw pile. Its last card lies face up and determines the trump suit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct STalon {
    veccard: Vec<ECard>,
    esuit_trump: ESuit,
}

impl STalon {
    pub fn new(veccard: Vec<ECard>, esuit_trump: ESuit) -> STalon {
        STalon {veccard, esuit_trump}
    }

    pub fn trump_suit(&self) -> ESuit {
        self.esuit_trump
    }
    /// The face-up card, i.e. the one drawn last.
    pub fn trump_card(&self) -> Option<ECard> {
        self.veccard.last().copied()
    }
    pub fn len(&self) -> usize {
        self.veccard.len()
    }
    pub fn is_empty(&self) -> bool {
        self.veccard.is_empty()
    }
    pub fn get_cards(&self) -> &[ECard] {
        &self.veccard
    }

    pub fn trump_exchange_allowed(&self, card_jack: ECard) -> bool {
        2<=self.len() && card_jack==ECard::new(self.esuit_trump, ERank::Jack)
    }

    /// Puts `card_jack` face up and returns the card previously lying there.
    pub fn trump_exchange(&mut self, card_jack: ECard) -> Result<ECard, Error> {
        if self.len() < 2 {
            bail!("Trump exchange requires at least 2 cards in talon, found {}", self.len());
        }
        if !self.trump_exchange_allowed(card_jack) {
            bail!("Trump exchange requires {}, got {}", ECard::new(self.esuit_trump, ERank::Jack), card_jack);
        }
        let card_trump = unwrap!(self.veccard.pop());
        self.veccard.push(card_jack);
        Ok(card_trump)
    }

    pub fn draw_cards(&mut self, n_cards: usize) -> Result<Vec<ECard>, Error> {
        if self.len() < n_cards {
            bail!("Cannot draw {} cards from talon {}", n_cards, self);
        }
        Ok(self.veccard.drain(0..n_cards).collect())
    }
}

impl fmt::Display for STalon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (trump {})", SDisplayCardSlice(&self.veccard), self.esuit_trump)
    }
}

#[test]
fn test_trump_exchange() {
    use ECard::*;
    let mut talon = STalon::new(vec![CA], ESuit::Clubs);
    assert!(talon.trump_exchange(CJ).is_err());
    assert_eq!(talon.get_cards(), &[CA]);

    let mut talon = STalon::new(vec![CA, C2], ESuit::Clubs);
    assert!(talon.trump_exchange(DJ).is_err());
    assert!(talon.trump_exchange(CQ).is_err());
    assert_eq!(talon.get_cards(), &[CA, C2]);

    assert_eq!(unwrap!(talon.trump_exchange(CJ)), C2);
    assert_eq!(talon.get_cards(), &[CA, CJ]);
    assert_eq!(talon.trump_card(), Some(CJ));
    assert!(talon.draw_cards(3).is_err());
    assert_eq!(unwrap!(talon.draw_cards(1)), vec![CA]);
    assert_eq!(talon.get_cards(), &[CJ]);
    assert_eq!(talon.trump_suit(), ESuit::Clubs);
}

#[test]
fn test_draw_cards() {
    use ECard::*;
    let mut talon = STalon::new(vec![HA, ST, DK, CJ], ESuit::Clubs);
    assert_eq!(unwrap!(talon.draw_cards(2)), vec![HA, ST]);
    assert_eq!(unwrap!(talon.draw_cards(0)), vec![]);
    assert!(talon.draw_cards(3).is_err());
    assert_eq!(talon.len(), 2);
    assert_eq!(unwrap!(talon.draw_cards(2)), vec![DK, CJ]);
    assert!(talon.is_empty());
    assert_eq!(talon.trump_card(), None);
    assert_eq!(talon.trump_suit(), ESuit::Clubs);
}
