use crate::util::*;
use std::{fmt, str::FromStr};

plain_enum_mod!(modepi, derive(Hash,), map_derive(), EPlayerIndex {
    EPI0, EPI1,
});

impl EPlayerIndex {
    pub fn opponent(self) -> EPlayerIndex {
        self.wrapping_add(1)
    }
}

impl fmt::Display for EPlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_usize())
    }
}

impl FromStr for EPlayerIndex {
    type Err = &'static str;
    fn from_str(str_epi: &str) -> Result<Self, Self::Err> {
        usize::from_str(str_epi).ok()
            .and_then(|n_epi| {
                EPlayerIndex::checked_from_usize(n_epi)
            })
            .ok_or("Could not convert to EPlayerIndex")
    }
}

#[test]
fn test_opponent() {
    assert_eq!(EPlayerIndex::EPI0.opponent(), EPlayerIndex::EPI1);
    assert_eq!(EPlayerIndex::EPI1.opponent(), EPlayerIndex::EPI0);
    assert_eq!(unwrap!("1".parse::<EPlayerIndex>()), EPlayerIndex::EPI1);
    assert!("2".parse::<EPlayerIndex>().is_err());
}
