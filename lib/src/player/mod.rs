pub mod botfirst;
pub mod botrandom;

pub use self::{botfirst::*, botrandom::*};

use crate::game::*;
use crate::primitives::*;
use std::sync::mpsc;

pub trait TBot {
    /// Answers by sending one of `slcmv` through `txmv`. Sending something else, or nothing at
    /// all, forfeits the game.
    fn ask_for_move(
        &mut self,
        playerperspective: &dyn TPlayerPerspective,
        slcmv: &[VMove],
        txmv: mpsc::Sender<VMove>,
    );

    fn name(&self) -> &str;

    /// The opponent, leading the current trick, exchanged the trump jack.
    fn notify_trump_exchange(&mut self, _trumpexchange: STrumpExchange) {}

    fn notify_game_end(&mut self, _b_won: bool, _gamestate: &SGameState) {}
}

macro_rules! forward_bot_to_deref{() => {
    fn ask_for_move(
        &mut self,
        playerperspective: &dyn TPlayerPerspective,
        slcmv: &[VMove],
        txmv: mpsc::Sender<VMove>,
    ) {
        (**self).ask_for_move(playerperspective, slcmv, txmv)
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn notify_trump_exchange(&mut self, trumpexchange: STrumpExchange) {
        (**self).notify_trump_exchange(trumpexchange)
    }
    fn notify_game_end(&mut self, b_won: bool, gamestate: &SGameState) {
        (**self).notify_game_end(b_won, gamestate)
    }
}}

impl<Bot: TBot + ?Sized> TBot for Box<Bot> {
    forward_bot_to_deref!();
}

impl<Bot: TBot + ?Sized> TBot for &mut Bot {
    forward_bot_to_deref!();
}
