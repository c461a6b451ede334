use crate::primitives::card::*;
use crate::util::*;
use std::fmt;

/// Playing a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SRegularMove {
    pub card: ECard,
}

impl SRegularMove {
    pub fn new(card: ECard) -> SRegularMove {
        SRegularMove {card}
    }
}

/// Showing queen and king of one suit; the queen is played to the trick, the king stays in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SMarriage {
    card_queen: ECard,
    card_king: ECard,
}

impl SMarriage {
    pub fn new(card_queen: ECard, card_king: ECard) -> Result<SMarriage, Error> {
        if card_queen.rank()!=ERank::Queen || card_king.rank()!=ERank::King || card_queen.suit()!=card_king.suit() {
            bail!("Marriage requires queen and king of the same suit, got {} and {}", card_queen, card_king);
        }
        Ok(SMarriage {card_queen, card_king})
    }
    pub fn new_for_suit(esuit: ESuit) -> SMarriage {
        SMarriage {
            card_queen: ECard::new(esuit, ERank::Queen),
            card_king: ECard::new(esuit, ERank::King),
        }
    }
    pub fn queen_card(&self) -> ECard {
        self.card_queen
    }
    pub fn king_card(&self) -> ECard {
        self.card_king
    }
    pub fn suit(&self) -> ESuit {
        self.card_queen.suit()
    }
    pub fn cards(&self) -> [ECard; 2] {
        [self.card_queen, self.card_king]
    }
    pub fn as_regular_move(&self) -> SRegularMove {
        SRegularMove::new(self.card_queen)
    }
}

/// Swapping the trump jack for the face-up talon card. Does not play a card to the trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct STrumpExchange {
    card_jack: ECard,
}

impl STrumpExchange {
    pub fn new(card_jack: ECard) -> Result<STrumpExchange, Error> {
        if card_jack.rank()!=ERank::Jack {
            bail!("Trump exchange requires a jack, got {}", card_jack);
        }
        Ok(STrumpExchange {card_jack})
    }
    pub fn jack(&self) -> ECard {
        self.card_jack
    }
}

type_dispatch_enum!(
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum VMove {
        Regular(SRegularMove),
        Marriage(SMarriage),
        TrumpExchange(STrumpExchange),
    }
);

impl VMove {
    pub fn regular(card: ECard) -> VMove {
        VMove::Regular(SRegularMove::new(card))
    }
    pub fn is_regular(&self) -> bool {
        matches!(self, VMove::Regular(_))
    }
    pub fn is_marriage(&self) -> bool {
        matches!(self, VMove::Marriage(_))
    }
    pub fn is_trump_exchange(&self) -> bool {
        matches!(self, VMove::TrumpExchange(_))
    }
    /// Cards the move takes from (or shows from) the hand.
    pub fn cards(&self) -> Vec<ECard> {
        match self {
            VMove::Regular(regularmove) => vec![regularmove.card],
            VMove::Marriage(marriage) => marriage.cards().to_vec(),
            VMove::TrumpExchange(trumpexchange) => vec![trumpexchange.jack()],
        }
    }
    /// The card put into the trick, if any.
    pub fn as_regular_move(&self) -> Option<SRegularMove> {
        match self {
            VMove::Regular(regularmove) => Some(*regularmove),
            VMove::Marriage(marriage) => Some(marriage.as_regular_move()),
            VMove::TrumpExchange(_) => None,
        }
    }
}

impl fmt::Display for VMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VMove::Regular(regularmove) => write!(f, "{}", regularmove.card),
            VMove::Marriage(marriage) => write!(f, "Marriage({} {})", marriage.queen_card(), marriage.king_card()),
            VMove::TrumpExchange(trumpexchange) => write!(f, "TrumpExchange({})", trumpexchange.jack()),
        }
    }
}

#[test]
fn test_trump_exchange_creation() {
    for esuit in ESuit::values() {
        let card_jack = ECard::new(esuit, ERank::Jack);
        let mv = VMove::from(unwrap!(STrumpExchange::new(card_jack)));
        assert!(mv.is_trump_exchange());
        assert!(!mv.is_marriage());
        assert!(!mv.is_regular());
        assert_eq!(mv.cards(), vec![card_jack]);
        assert_eq!(mv.as_regular_move(), None);
    }
}

#[test]
fn test_trump_exchange_creation_fails() {
    for card in ECard::values().filter(|card| card.rank()!=ERank::Jack) {
        assert!(STrumpExchange::new(card).is_err());
    }
}

#[test]
fn test_marriage_creation() {
    for esuit in ESuit::values() {
        let card_queen = ECard::new(esuit, ERank::Queen);
        let card_king = ECard::new(esuit, ERank::King);
        let marriage = unwrap!(SMarriage::new(card_queen, card_king));
        assert_eq!(marriage, SMarriage::new_for_suit(esuit));
        assert_eq!(marriage.suit(), esuit);
        let mv = VMove::from(marriage);
        assert!(mv.is_marriage());
        assert!(!mv.is_trump_exchange());
        assert_eq!(mv.as_regular_move(), Some(SRegularMove::new(card_queen)));
        assert_eq!(mv.cards(), vec![card_queen, card_king]);
    }
}

#[test]
fn test_marriage_creation_fails() {
    use itertools::iproduct;
    for (card_queen, card_king) in iproduct!(ECard::values(), ECard::values()) {
        let b_valid = card_queen.suit()==card_king.suit()
            && card_queen.rank()==ERank::Queen
            && card_king.rank()==ERank::King;
        assert_eq!(SMarriage::new(card_queen, card_king).is_ok(), b_valid);
    }
}

#[test]
fn test_regular_move() {
    let mv = VMove::regular(ECard::HT);
    assert!(mv.is_regular());
    assert_eq!(mv, VMove::Regular(SRegularMove::new(ECard::HT)));
    assert_ne!(mv, VMove::regular(ECard::HA));
    assert_eq!(mv.cards(), vec![ECard::HT]);
    assert_eq!(mv.to_string(), "HT");
    assert_eq!(VMove::from(SMarriage::new_for_suit(ESuit::Diamonds)).to_string(), "Marriage(DQ DK)");
}
