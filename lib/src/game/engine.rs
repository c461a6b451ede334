use crate::game::*;
use crate::player::*;
use crate::rules::ruleset::*;
use rand::prelude::*;
use std::{fmt, rc::Rc, sync::mpsc};

/// A bot that answered with a move outside the valid ones (`omv` is `Some`) or did not answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SForfeit {
    pub epi: EPlayerIndex,
    pub omv: Option<VMove>,
}

impl fmt::Display for SForfeit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.omv {
            Some(mv) => write!(f, "player {} played invalid move {}", self.epi, mv),
            None => write!(f, "player {} did not move", self.epi),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SGameResult {
    pub epi_winner: EPlayerIndex,
    pub str_winner_id: String,
    pub n_game_points: isize,
    /// The last snapshot, i.e. after the deciding trick or before the trick that was forfeited.
    pub gamestate: SGameState,
    pub oforfeit: Option<SForfeit>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SGameSummary {
    pub winner: String,
    pub game_points: isize,
    pub scores: Vec<(String, SScore)>,
    pub tricks: usize,
    pub forfeit: Option<String>,
}

impl SGameResult {
    pub fn summary(&self) -> SGameSummary {
        let mut vecbotstate = vec![&self.gamestate.leader, &self.gamestate.follower];
        vecbotstate.sort_by_key(|botstate| botstate.epi.to_usize());
        SGameSummary {
            winner: self.str_winner_id.clone(),
            game_points: self.n_game_points,
            scores: vecbotstate.into_iter()
                .map(|botstate| (botstate.str_bot_id.clone(), botstate.score))
                .collect(),
            tricks: self.gamestate.previous_tricks().count(),
            forfeit: self.oforfeit.map(|forfeit| forfeit.to_string()),
        }
    }
}

impl fmt::Display for SGameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} wins {} game point(s)", self.str_winner_id, self.n_game_points)?;
        if let Some(forfeit) = self.oforfeit {
            write!(f, " ({})", forfeit)?;
        }
        Ok(())
    }
}

fn communicate_via_channel<T>(f: impl FnOnce(mpsc::Sender<T>)) -> Option<T> {
    let (txt, rxt) = mpsc::channel::<T>();
    f(txt);
    // bots answer synchronously, so anything not sent by now will never arrive
    rxt.try_recv().ok()
}

fn ask_for_move(bot: &mut impl TBot, playerperspective: &dyn TPlayerPerspective) -> Result<VMove, Option<VMove>> {
    let vecmv = playerperspective.valid_moves();
    match communicate_via_channel(|txmv| bot.ask_for_move(playerperspective, &vecmv, txmv)) {
        Some(mv) if vecmv.contains(&mv) => Ok(mv),
        omv => Err(omv),
    }
}

#[derive(Clone, Debug, Default)]
pub struct SSchnapsenGamePlayEngine {
    pub ruleset: SRuleSet,
}

impl SSchnapsenGamePlayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_ruleset(ruleset: SRuleSet) -> Self {
        SSchnapsenGamePlayEngine {ruleset}
    }

    /// Shuffles the deck with `n_seed`. The leader gets the first hand, the follower the second one,
    /// the rest forms the talon, whose last card determines trump.
    pub fn deal(&self, n_seed: u64, epi_leader: EPlayerIndex, mapepistr_bot_id: &EnumMap<EPlayerIndex, String>) -> Result<SGameState, Error> {
        let mut veccard : Vec<ECard> = ECard::schnapsen_values().collect();
        veccard.shuffle(&mut StdRng::seed_from_u64(n_seed));
        let n_hand_size = self.ruleset.n_hand_size;
        if veccard.len() <= 2 * n_hand_size {
            bail!("Cannot deal two hands of {} cards and a talon from {} cards", n_hand_size, veccard.len());
        }
        let veccard_talon = veccard.split_off(2 * n_hand_size);
        let veccard_follower = veccard.split_off(n_hand_size);
        let esuit_trump = veccard_talon.last()
            .ok_or_else(|| format_err!("Talon is empty"))?
            .suit();
        let bot_state = |epi: EPlayerIndex, veccard: Vec<ECard>| -> Result<SBotState, Error> {
            Ok(SBotState::new(
                epi,
                mapepistr_bot_id[epi].clone(),
                SHand::new_with_max_size(veccard, n_hand_size)?,
                SScore::default(),
                /*veccard_won*/Vec::new(),
            ))
        };
        let gamestate = SGameState::new(
            bot_state(epi_leader, veccard)?,
            bot_state(epi_leader.opponent(), veccard_follower)?,
            STalon::new(veccard_talon, esuit_trump),
            /*oprevious*/None,
        );
        info!("Dealt (seed {}): {}", n_seed, gamestate);
        Ok(gamestate)
    }

    /// Winner and game points, if the game is over.
    pub fn declare_winner(&self, gamestate: &SGameState) -> Option<(EPlayerIndex, isize)> {
        for (botstate, botstate_other) in [
            (&gamestate.leader, &gamestate.follower),
            (&gamestate.follower, &gamestate.leader),
        ] {
            if self.ruleset.n_points_to_win <= botstate.score.n_direct_points {
                return Some((botstate.epi, self.ruleset.game_points(botstate_other.score.n_direct_points)));
            }
        }
        if_then_some!(gamestate.all_cards_played(), {
            // the leader won the last trick
            (gamestate.leader.epi, self.ruleset.game_points(gamestate.follower.score.n_direct_points))
        })
    }

    /// Plays a game where `bot_leader` sits at `EPI0` and leads the first trick.
    pub fn play_game<'bot>(&self, bot_leader: &'bot mut dyn TBot, bot_follower: &'bot mut dyn TBot, n_seed: u64) -> Result<SGameResult, Error> {
        self.play_game_seated(
            &mut EPlayerIndex::map_from_raw([bot_leader, bot_follower]),
            /*epi_first*/EPlayerIndex::EPI0,
            n_seed,
        )
    }

    pub fn play_game_seated<Bot: TBot>(&self, abot: &mut EnumMap<EPlayerIndex, Bot>, epi_first: EPlayerIndex, n_seed: u64) -> Result<SGameResult, Error> {
        let mapepistr_bot_id = EPlayerIndex::map_from_fn(|epi| format!("{} ({})", abot[epi].name(), epi));
        let gamestate = self.deal(n_seed, epi_first, &mapepistr_bot_id)?;
        self.play_game_from(abot, gamestate)
    }

    /// Continues a game from an arbitrary trick boundary.
    pub fn play_game_from<Bot: TBot>(&self, abot: &mut EnumMap<EPlayerIndex, Bot>, gamestate: SGameState) -> Result<SGameResult, Error> {
        let mut gamestate = gamestate;
        loop {
            if let Some((epi_winner, n_game_points)) = self.declare_winner(&gamestate) {
                return Ok(self.finish_game(abot, gamestate, epi_winner, n_game_points, /*oforfeit*/None));
            }
            let epi_leader = gamestate.leader.epi;
            let epi_follower = gamestate.follower.epi;
            let forfeit = |epi, omv| {
                let forfeit = SForfeit{epi, omv};
                warn!("Forfeit: {}", forfeit);
                forfeit
            };
            let rcgamestate = Rc::new(gamestate);
            let mut leadergamestate = SLeaderGameState::new_shared(rcgamestate.clone(), self);
            let mv_leader = loop {
                match ask_for_move(&mut abot[epi_leader], &leadergamestate) {
                    Ok(VMove::TrumpExchange(trumpexchange)) => {
                        debug!("{} exchanges trump: {}", rcgamestate.leader.str_bot_id, trumpexchange.jack());
                        leadergamestate = leadergamestate.exchange_trump(trumpexchange)?;
                        abot[epi_follower].notify_trump_exchange(trumpexchange);
                    },
                    Ok(mv) => break mv,
                    Err(omv) => {
                        let forfeit = forfeit(epi_leader, omv);
                        return Ok(self.finish_game(abot, (*rcgamestate).clone(), epi_follower, /*n_game_points*/3, Some(forfeit)));
                    },
                }
            };
            let followergamestate = leadergamestate.play(mv_leader)?;
            let mv_follower = match ask_for_move(&mut abot[epi_follower], &followergamestate) {
                Ok(mv) => mv,
                Err(omv) => {
                    let forfeit = forfeit(epi_follower, omv);
                    return Ok(self.finish_game(abot, (*rcgamestate).clone(), epi_leader, /*n_game_points*/3, Some(forfeit)));
                },
            };
            gamestate = followergamestate.play(mv_follower)?;
            if let Some(previous) = gamestate.oprevious.as_ref() {
                debug!("Trick {}: {}, {} wins", previous.trick, previous.gamestate.talon, gamestate.leader.str_bot_id);
            }
            trace!("{}", gamestate);
        }
    }

    fn finish_game<Bot: TBot>(
        &self,
        abot: &mut EnumMap<EPlayerIndex, Bot>,
        gamestate: SGameState,
        epi_winner: EPlayerIndex,
        n_game_points: isize,
        oforfeit: Option<SForfeit>,
    ) -> SGameResult {
        for epi in EPlayerIndex::values() {
            abot[epi].notify_game_end(epi==epi_winner, &gamestate);
        }
        let gameresult = SGameResult {
            epi_winner,
            str_winner_id: gamestate.bot_state(epi_winner).str_bot_id.clone(),
            n_game_points,
            gamestate,
            oforfeit,
        };
        info!("Game over: {}", gameresult);
        gameresult
    }
}
