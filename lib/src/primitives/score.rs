use std::{fmt, ops::Add};

/// Points collected in a game. Pending points (from marriages) only count once their holder wins
/// a trick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SScore {
    pub n_direct_points: isize,
    pub n_pending_points: isize,
}

impl SScore {
    pub fn new(n_direct_points: isize, n_pending_points: isize) -> SScore {
        assert!(0<=n_direct_points);
        assert!(0<=n_pending_points);
        SScore {n_direct_points, n_pending_points}
    }
    pub fn new_direct(n_direct_points: isize) -> SScore {
        SScore::new(n_direct_points, /*n_pending_points*/0)
    }
    pub fn new_pending(n_pending_points: isize) -> SScore {
        SScore::new(/*n_direct_points*/0, n_pending_points)
    }

    pub fn redeem_pending_points(self) -> SScore {
        SScore::new(self.n_direct_points + self.n_pending_points, /*n_pending_points*/0)
    }
}

impl Add for SScore {
    type Output = SScore;
    fn add(self, score_other: SScore) -> SScore {
        SScore::new(
            self.n_direct_points + score_other.n_direct_points,
            self.n_pending_points + score_other.n_pending_points,
        )
    }
}

impl fmt::Display for SScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.n_direct_points)?;
        if 0<self.n_pending_points {
            write!(f, " (+{} pending)", self.n_pending_points)?;
        }
        Ok(())
    }
}

#[test]
fn test_score() {
    use crate::util::*;
    use rand::prelude::*;
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let [n0, n1, n2, n3] = [(); 4].map(|()| rng.random_range(0..=10i64).as_num::<isize>());
        let score_lhs = SScore::new(n0, n1);
        let score_rhs = SScore::new(n2, n3);
        let score_sum = score_lhs + score_rhs;
        assert_eq!(score_sum, SScore::new(n0+n2, n1+n3));
        assert_eq!(score_sum, score_rhs + score_lhs);
        let score_redeemed = score_sum.redeem_pending_points();
        assert_eq!(score_redeemed, SScore::new_direct(n0+n1+n2+n3));
        assert_eq!(score_redeemed.redeem_pending_points(), score_redeemed);
    }
    assert_eq!(SScore::default(), SScore::new(0, 0));
    assert_eq!(SScore::new_pending(20).to_string(), "0 (+20 pending)");
    assert_eq!(SScore::new_direct(33).to_string(), "33");
}
