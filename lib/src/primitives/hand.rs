use crate::primitives::card::*;
use crate::util::*;
use itertools::Itertools;
use std::fmt;

pub const N_HAND_SIZE_DEFAULT : usize = 5;

/// Cards held by one player, in the order they were received.
///
/// Unlike a deck, a hand does not assume its cards to be unique: removing a card removes only its
/// first occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SHand {
    veccard: Vec<ECard>,
    n_max_size: usize,
}

impl SHand {
    pub fn new(veccard: Vec<ECard>) -> Result<SHand, Error> {
        Self::new_with_max_size(veccard, N_HAND_SIZE_DEFAULT)
    }

    pub fn new_with_max_size(veccard: Vec<ECard>, n_max_size: usize) -> Result<SHand, Error> {
        if veccard.len() > n_max_size {
            bail!("Hand {} exceeds maximum size {}", SDisplayCardSlice(&veccard), n_max_size);
        }
        Ok(SHand {veccard, n_max_size})
    }

    pub fn max_size(&self) -> usize {
        self.n_max_size
    }
    pub fn len(&self) -> usize {
        self.veccard.len()
    }
    pub fn is_empty(&self) -> bool {
        self.veccard.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.len()==self.n_max_size
    }
    pub fn contains(&self, card_check: ECard) -> bool {
        self.veccard.contains(&card_check)
    }
    /// True iff every card of `slccard` is held, respecting multiplicity.
    pub fn has_cards(&self, slccard: &[ECard]) -> bool {
        slccard.iter().counts().into_iter()
            .all(|(card, n_requested)| {
                self.veccard.iter().filter(|&card_hand| card_hand==card).count() >= n_requested
            })
    }

    pub fn add(&mut self, card: ECard) -> Result<(), Error> {
        if self.is_full() {
            bail!("Cannot add {} to full hand {}", card, self);
        }
        self.veccard.push(card);
        debug_assert!(self.len()<=self.n_max_size);
        Ok(())
    }
    pub fn remove(&mut self, card: ECard) -> Result<(), Error> {
        match self.veccard.iter().position(|&card_hand| card_hand==card) {
            Some(i_card) => {
                verify_eq!(self.veccard.remove(i_card), card);
                Ok(())
            },
            None => bail!("{} not contained in hand {}", card, self),
        }
    }

    pub fn filter_suit(&self, esuit: ESuit) -> Vec<ECard> {
        self.filter(|card| card.suit()==esuit)
    }
    pub fn filter_rank(&self, erank: ERank) -> Vec<ECard> {
        self.filter(|card| card.rank()==erank)
    }
    pub fn filter(&self, pred: impl Fn(ECard)->bool) -> Vec<ECard> {
        self.veccard.iter().copied()
            .filter(|&card| pred(card))
            .collect()
    }

    pub fn get_cards(&self) -> &[ECard] {
        &self.veccard
    }
}

pub struct SDisplayCardSlice<'slccard>(pub &'slccard [ECard]);

impl fmt::Display for SDisplayCardSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(" "))
    }
}

impl fmt::Display for SHand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", SDisplayCardSlice(&self.veccard))
    }
}

#[cfg(test)]
fn ten_cards() -> Vec<ECard> {
    use ECard::*;
    vec![
        C5, HJ, SA, H2, HQ,
        HQ, // hand must cope with duplicates
        SJ, HA, C2, DQ,
    ]
}

#[test]
fn test_too_large_creation_fails() {
    let veccard = ten_cards();
    for n_max_size in 0..veccard.len() {
        for n_too_large in n_max_size+1..veccard.len() {
            assert!(SHand::new_with_max_size(veccard[..n_too_large].to_vec(), n_max_size).is_err());
        }
    }
}

#[test]
fn test_creation() {
    let veccard = ten_cards();
    for n_max_size in 0..veccard.len() {
        for n_size in 0..=n_max_size {
            let hand = unwrap!(SHand::new_with_max_size(veccard[..n_size].to_vec(), n_max_size));
            assert_eq!(hand.is_empty(), n_size==0);
            assert_eq!(hand.len(), n_size);
        }
    }
}

#[test]
fn test_remove() {
    use ECard::*;
    let mut hand = unwrap!(SHand::new(ten_cards()[..5].to_vec()));
    assert!(hand.contains(C5));
    unwrap!(hand.remove(C5));
    assert!(!hand.contains(C5));
    assert_eq!(hand.get_cards(), &[HJ, SA, H2, HQ]);
}

#[test]
fn test_remove_duplicate() {
    use ECard::*;
    let mut hand = unwrap!(SHand::new_with_max_size(ten_cards(), 10));
    unwrap!(hand.remove(HQ));
    assert!(hand.contains(HQ));
    unwrap!(hand.remove(HQ));
    assert!(!hand.contains(HQ));
    assert!(hand.remove(HQ).is_err());
    assert_eq!(hand.len(), 8);
}

#[test]
fn test_remove_absent() {
    let veccard = ten_cards();
    let mut hand = unwrap!(SHand::new_with_max_size(veccard.clone(), 10));
    for card in ECard::values().filter(|card| !veccard.contains(card)) {
        assert!(hand.remove(card).is_err());
    }
    assert_eq!(hand.get_cards(), veccard.as_slice());
}

#[test]
fn test_add() {
    use ECard::*;
    let mut hand = unwrap!(SHand::new(ten_cards()[..4].to_vec()));
    unwrap!(hand.add(SK));
    assert_eq!(hand.get_cards(), &[C5, HJ, SA, H2, SK]);
    assert!(hand.add(H5).is_err());
    assert_eq!(hand.get_cards(), &[C5, HJ, SA, H2, SK]);
}

#[test]
fn test_has_cards() {
    use ECard::*;
    let hand = unwrap!(SHand::new_with_max_size(ten_cards(), 10));
    assert!(hand.has_cards(&[HJ, H2]));
    assert!(hand.has_cards(&[HQ, HQ]));
    assert!(!hand.has_cards(&[C2, C2]));
    assert!(!hand.has_cards(&[HK]));
    assert!(hand.has_cards(&[]));
}

#[test]
fn test_clone_is_independent() {
    use ECard::*;
    let hand = unwrap!(SHand::new_with_max_size(ten_cards(), 10));
    let mut hand_clone = hand.clone();
    assert_eq!(hand_clone.get_cards(), hand.get_cards());
    unwrap!(hand_clone.remove(C5));
    assert_eq!(hand.get_cards(), ten_cards().as_slice());
    assert_ne!(hand, hand_clone);
}

#[test]
fn test_filter() {
    use ECard::*;
    let hand = unwrap!(SHand::new_with_max_size(ten_cards(), 10));
    assert_eq!(hand.filter_suit(ESuit::Hearts), vec![HJ, H2, HQ, HQ, HA]);
    assert_eq!(hand.filter_suit(ESuit::Spades), vec![SA, SJ]);
    assert_eq!(hand.filter_suit(ESuit::Clubs), vec![C5, C2]);
    assert_eq!(hand.filter_suit(ESuit::Diamonds), vec![DQ]);
    assert_eq!(hand.filter_rank(ERank::Ace), vec![SA, HA]);
    assert_eq!(hand.filter_rank(ERank::Two), vec![H2, C2]);
    assert_eq!(hand.filter_rank(ERank::Jack), vec![HJ, SJ]);
    assert_eq!(hand.filter_rank(ERank::Queen), vec![HQ, HQ, DQ]);
    assert_eq!(hand.filter_rank(ERank::King), vec![]);
    assert_eq!(hand.filter_rank(ERank::Three), vec![]);
    assert_eq!(hand.len(), 10);
}
