use crate::game::*;
use crate::player::*;
use crate::primitives::*;
use crate::util::*;
use std::sync::mpsc;

/// Always plays the first valid move. Deterministic, so useful as a baseline.
#[derive(Default)]
pub struct SBotFirstMove {}

impl TBot for SBotFirstMove {
    fn ask_for_move(
        &mut self,
        _playerperspective: &dyn TPlayerPerspective,
        slcmv: &[VMove],
        txmv: mpsc::Sender<VMove>,
    ) {
        if let Some(mv) = slcmv.first() {
            unwrap!(txmv.send(*mv));
        }
    }

    fn name(&self) -> &str {
        "first"
    }
}
