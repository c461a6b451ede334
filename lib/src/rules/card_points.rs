use crate::primitives::*;
use crate::util::*;
use std::borrow::Borrow;

pub fn points_rank(erank: ERank) -> isize {
    match erank {
        ERank::Ace => 11,
        ERank::Ten => 10,
        ERank::King => 4,
        ERank::Queen => 3,
        ERank::Jack => 2,
        ERank::Two | ERank::Three | ERank::Four | ERank::Five | ERank::Six
            | ERank::Seven | ERank::Eight | ERank::Nine => 0,
    }
}

pub fn points_card(card: ECard) -> isize {
    points_rank(card.rank())
}

pub fn points_cards<Card: Borrow<ECard>>(itcard: impl IntoIterator<Item=Card>) -> isize {
    itcard.into_iter()
        .map(|card| points_card(*card.borrow()))
        .sum()
}

#[test]
fn test_points() {
    assert_eq!(points_cards(ECard::schnapsen_values()), 120);
    assert_eq!(points_cards(ECard::values()), 120);
    assert_eq!(points_cards(&[ECard::HA, ECard::HT, ECard::C9]), 21);
}
