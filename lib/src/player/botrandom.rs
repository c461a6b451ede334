use crate::game::*;
use crate::player::*;
use crate::primitives::*;
use crate::util::*;
use rand::prelude::*;
use std::sync::mpsc;

pub struct SBotRandom {
    rng: StdRng,
}

impl SBotRandom {
    pub fn new(n_seed: u64) -> Self {
        SBotRandom {
            rng: StdRng::seed_from_u64(n_seed),
        }
    }
}

impl TBot for SBotRandom {
    fn ask_for_move(
        &mut self,
        playerperspective: &dyn TPlayerPerspective,
        slcmv: &[VMove],
        txmv: mpsc::Sender<VMove>,
    ) {
        debug_assert_eq!(slcmv, playerperspective.valid_moves().as_slice());
        if let Some(mv) = slcmv.choose(&mut self.rng) {
            trace!("{} chooses {} from {} moves", self.name(), mv, slcmv.len());
            unwrap!(txmv.send(*mv));
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
