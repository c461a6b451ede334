pub mod card_points;
pub mod ruleset;

use crate::primitives::*;
use crate::rules::card_points::points_rank;
use crate::util::*;

/// Strength of a card within its suit: card points first, pip order for cards worth nothing.
pub fn rank_strength(erank: ERank) -> (isize, usize) {
    (points_rank(erank), erank.to_usize())
}

pub fn leader_wins_trick(card_leader: ECard, card_follower: ECard, esuit_trump: ESuit) -> bool {
    if card_leader.suit()==card_follower.suit() {
        rank_strength(card_follower.rank()) < rank_strength(card_leader.rank())
    } else {
        card_follower.suit()!=esuit_trump
    }
}

/// Regular moves in hand order, then marriages in suit order, then the trump exchange.
pub fn leader_valid_moves(hand: &SHand, talon: &STalon) -> Vec<VMove> {
    let mut vecmv : Vec<VMove> = hand.get_cards().iter()
        .map(|&card| VMove::regular(card))
        .collect();
    vecmv.extend(ESuit::values()
        .map(SMarriage::new_for_suit)
        .filter(|marriage| hand.has_cards(&marriage.cards()))
        .map(VMove::from)
    );
    let card_jack_trump = ECard::new(talon.trump_suit(), ERank::Jack);
    if hand.contains(card_jack_trump) && talon.trump_exchange_allowed(card_jack_trump) {
        vecmv.push(VMove::from(unwrap!(STrumpExchange::new(card_jack_trump))));
    }
    vecmv
}

/// While the talon is open, anything goes. Afterwards, the follower must beat the led card within
/// its suit if possible, else follow suit, else play trump.
pub fn follower_valid_moves(hand: &SHand, talon: &STalon, card_led: ECard) -> Vec<VMove> {
    let veccard_allowed = if !talon.is_empty() {
        hand.get_cards().to_vec()
    } else {
        let esuit_trump = talon.trump_suit();
        let veccard_same_suit = hand.filter_suit(card_led.suit());
        let veccard_same_suit_higher : Vec<_> = veccard_same_suit.iter().copied()
            .filter(|&card| !leader_wins_trick(card_led, card, esuit_trump))
            .collect();
        if !veccard_same_suit_higher.is_empty() {
            veccard_same_suit_higher
        } else if !veccard_same_suit.is_empty() {
            veccard_same_suit
        } else {
            let veccard_trump = hand.filter_suit(esuit_trump);
            if !veccard_trump.is_empty() {
                veccard_trump
            } else {
                hand.get_cards().to_vec()
            }
        }
    };
    veccard_allowed.into_iter()
        .map(VMove::regular)
        .collect()
}
