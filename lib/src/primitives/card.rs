use crate::util::*;
use std::{
    fmt,
    str::FromStr,
};
use serde::Serializer;

plain_enum_mod!(modesuit, derive(Hash,), map_derive(), ESuit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
});

impl fmt::Display for ESuit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Hearts => "H",
            Self::Spades => "S",
        })
    }
}

plain_enum_mod!(moderank, derive(Hash,), map_derive(), ERank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
});

impl fmt::Display for ERank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        })
    }
}

impl ERank {
    /// Ranks dealt in Schnapsen, strongest first.
    pub const SCHNAPSEN : [ERank; 5] = [ERank::Ace, ERank::Ten, ERank::King, ERank::Queen, ERank::Jack];

    pub fn is_schnapsen_rank(self) -> bool {
        Self::SCHNAPSEN.contains(&self)
    }
}

// Variants are laid out suit-major in the order of ESuit and ERank, so that ECard::new can compute
// the index arithmetically.
plain_enum_mod!(modecard, derive(Hash,), map_derive(), ECard {
    CA, C2, C3, C4, C5, C6, C7, C8, C9, CT, CJ, CQ, CK,
    DA, D2, D3, D4, D5, D6, D7, D8, D9, DT, DJ, DQ, DK,
    HA, H2, H3, H4, H5, H6, H7, H8, H9, HT, HJ, HQ, HK,
    SA, S2, S3, S4, S5, S6, S7, S8, S9, ST, SJ, SQ, SK,
});

impl ECard {
    pub fn new(esuit: ESuit, erank: ERank) -> ECard {
        unwrap!(ECard::checked_from_usize(esuit.to_usize() * ERank::SIZE + erank.to_usize()))
    }
    pub fn suit(self) -> ESuit {
        unwrap!(ESuit::checked_from_usize(self.to_usize() / ERank::SIZE))
    }
    pub fn rank(self) -> ERank {
        unwrap!(ERank::checked_from_usize(self.to_usize() % ERank::SIZE))
    }
    /// The 20 cards of a Schnapsen deck, suit by suit.
    pub fn schnapsen_values() -> impl Iterator<Item=ECard>+Clone {
        use itertools::iproduct;
        iproduct!(ESuit::values(), ERank::SCHNAPSEN)
            .map(|(esuit, erank)| ECard::new(esuit, erank))
    }
}

impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.suit(), self.rank())
    }
}

impl FromStr for ECard {
    type Err = Error;
    fn from_str(str_card: &str) -> Result<Self, Self::Err> {
        let str_card = str_card.trim();
        ECard::values()
            .find(|card| card.to_string().eq_ignore_ascii_case(str_card))
            .ok_or_else(|| format_err!("Could not parse card {:?}", str_card))
    }
}

/// Parses whitespace-separated cards such as `"HA HT CQ"`.
pub fn parse_cards(str_cards: &str) -> Result<Vec<ECard>, Error> {
    str_cards.split_whitespace()
        .map(str::parse)
        .collect()
}

impl serde::Serialize for ECard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ECard {
    fn deserialize<D>(deserializer: D) -> Result<ECard, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[test]
fn test_serialization() {
    macro_rules! test_card(($($card:ident)*) => {
        $(
            let card = ECard::$card;
            serde_test::assert_tokens(&card, &[
                serde_test::Token::Str(stringify!($card)),
            ]);
        )*
    });
    test_card!(
        CA CT CK CQ CJ
        DA DT DK DQ DJ
        HA HT HK HQ HJ
        SA ST SK SQ SJ
        C2 D5 H9 S7
    );
}

#[test]
fn test_suit_rank_enumerators() {
    assert_eq!(ESuit::values().count(), 4);
    assert_eq!(ERank::values().count(), 13);
    assert_eq!(ECard::values().count(), 52);
    assert_eq!(ECard::schnapsen_values().count(), 20);
    assert!(ECard::schnapsen_values().all(|card| card.rank().is_schnapsen_rank()));
}

#[test]
fn test_card_ctor() {
    for card in ECard::values() {
        assert_eq!(ECard::new(card.suit(), card.rank()), card);
        assert_eq!(unwrap!(card.to_string().parse::<ECard>()), card);
    }
    macro_rules! explicit_test{($($esuit:ident, $erank:ident, $card:ident)+) => {{
        $({
            let card = ECard::new(ESuit::$esuit, ERank::$erank);
            assert_eq!(card, ECard::$card);
            assert_eq!(card.suit(), ESuit::$esuit);
            assert_eq!(card.rank(), ERank::$erank);
        })+
    }}}
    explicit_test!(
        Clubs, Ace, CA
        Clubs, Ten, CT
        Diamonds, Two, D2
        Diamonds, King, DK
        Hearts, Jack, HJ
        Hearts, Nine, H9
        Spades, Queen, SQ
        Spades, Seven, S7
    );
    assert!("X9".parse::<ECard>().is_err());
    assert_eq!(unwrap!(parse_cards(" CA  d9 ST")), vec![ECard::CA, ECard::D9, ECard::ST]);
    assert!(parse_cards("CA D1").is_err());
    assert_eq!(unwrap!("hq".parse::<ECard>()), ECard::HQ);
}
