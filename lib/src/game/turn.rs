use crate::game::*;
use crate::rules::{card_points::points_cards, *};
use std::rc::Rc;

/// What a bot may see when asked for a move: its own hand, both scores, the talon's size and face-up
/// card, won cards and the history of tricks, but never the opponent's hand or the hidden talon.
pub trait TPlayerPerspective {
    fn engine(&self) -> &SSchnapsenGamePlayEngine;
    fn am_i_leader(&self) -> bool;
    fn valid_moves(&self) -> Vec<VMove>;
    /// The leader's part of the current trick, if the leader already moved.
    fn partial_trick(&self) -> Option<&SPartialTrick>;
    fn get_hand(&self) -> &SHand;
    fn my_score(&self) -> SScore;
    fn opponent_score(&self) -> SScore;
    fn won_cards(&self) -> &[ECard];
    fn opponent_won_cards(&self) -> &[ECard];
    fn trump_suit(&self) -> ESuit;
    fn trump_card(&self) -> Option<ECard>;
    fn talon_size(&self) -> usize;
    /// Completed tricks, most recent first.
    fn previous_tricks(&self) -> Vec<STrick>;
}

// Both turn states answer the observable accessors from their crate-private snapshot.
macro_rules! impl_observable_accessors {() => {
    fn get_hand(&self) -> &SHand {
        &self.me().hand
    }
    fn my_score(&self) -> SScore {
        self.me().score
    }
    fn opponent_score(&self) -> SScore {
        self.opponent().score
    }
    fn won_cards(&self) -> &[ECard] {
        &self.me().veccard_won
    }
    fn opponent_won_cards(&self) -> &[ECard] {
        &self.opponent().veccard_won
    }
    fn trump_suit(&self) -> ESuit {
        self.gamestate().talon.trump_suit()
    }
    fn trump_card(&self) -> Option<ECard> {
        self.gamestate().talon.trump_card()
    }
    fn talon_size(&self) -> usize {
        self.gamestate().talon.len()
    }
    fn previous_tricks(&self) -> Vec<STrick> {
        self.gamestate().previous_tricks().copied().collect()
    }
}}

// Crate-private view on the full snapshot, hidden cards included.
macro_rules! impl_snapshot_helpers {($b_leader:expr) => {
    pub(crate) fn gamestate(&self) -> &SGameState {
        &self.rcgamestate
    }
    pub(crate) fn me(&self) -> &SBotState {
        if $b_leader {&self.rcgamestate.leader} else {&self.rcgamestate.follower}
    }
    pub(crate) fn opponent(&self) -> &SBotState {
        if $b_leader {&self.rcgamestate.follower} else {&self.rcgamestate.leader}
    }
}}

fn ensure_valid(vecmv_valid: &[VMove], mv: VMove, str_role: &str) -> Result<(), Error> {
    if !vecmv_valid.contains(&mv) {
        bail!("{} move {} not among valid moves {:?}", str_role, mv, vecmv_valid);
    }
    Ok(())
}

/// The leader's turn: the leader may exchange trump, then plays a card or a marriage.
#[derive(Clone, Debug)]
pub struct SLeaderGameState<'engine> {
    rcgamestate_trick_start: Rc<SGameState>,
    rcgamestate: Rc<SGameState>,
    otrumpexchange: Option<STrumpExchange>,
    engine: &'engine SSchnapsenGamePlayEngine,
}

impl<'engine> SLeaderGameState<'engine> {
    pub fn new(gamestate: SGameState, engine: &'engine SSchnapsenGamePlayEngine) -> Self {
        Self::new_shared(Rc::new(gamestate), engine)
    }

    /// Starts the trick from a snapshot that stays shared with the caller.
    pub fn new_shared(rcgamestate: Rc<SGameState>, engine: &'engine SSchnapsenGamePlayEngine) -> Self {
        SLeaderGameState {
            rcgamestate_trick_start: rcgamestate.clone(),
            rcgamestate,
            otrumpexchange: None,
            engine,
        }
    }

    impl_snapshot_helpers!(true);

    pub fn trump_exchange(&self) -> Option<STrumpExchange> {
        self.otrumpexchange
    }

    /// Swaps the trump jack from the leader's hand with the face-up talon card.
    pub fn exchange_trump(&self, trumpexchange: STrumpExchange) -> Result<SLeaderGameState<'engine>, Error> {
        ensure_valid(&self.valid_moves(), VMove::from(trumpexchange), "Leader")?;
        let mut gamestate = (*self.rcgamestate).clone();
        let card_jack = trumpexchange.jack();
        let card_trump_old = gamestate.talon.trump_exchange(card_jack)?;
        gamestate.leader.hand.remove(card_jack)?;
        gamestate.leader.hand.add(card_trump_old)?;
        Ok(SLeaderGameState {
            rcgamestate_trick_start: self.rcgamestate_trick_start.clone(),
            rcgamestate: Rc::new(gamestate),
            otrumpexchange: Some(trumpexchange),
            engine: self.engine,
        })
    }

    /// Puts the leader's card into the trick. A marriage additionally credits its points as pending.
    pub fn play(&self, mv: VMove) -> Result<SFollowerGameState<'engine>, Error> {
        if mv.is_trump_exchange() {
            bail!("Trump exchange {} must be done via exchange_trump", mv);
        }
        ensure_valid(&self.valid_moves(), mv, "Leader")?;
        let partialtrick = SPartialTrick::new(self.otrumpexchange, mv)?;
        let mut gamestate = (*self.rcgamestate).clone();
        gamestate.leader.hand.remove(partialtrick.card_led())?;
        if let VMove::Marriage(marriage) = mv {
            let n_points = self.engine.ruleset.marriage_points(marriage.suit(), gamestate.talon.trump_suit());
            gamestate.leader.score = gamestate.leader.score + SScore::new_pending(n_points);
        }
        Ok(SFollowerGameState {
            rcgamestate_trick_start: self.rcgamestate_trick_start.clone(),
            rcgamestate: Rc::new(gamestate),
            partialtrick,
            engine: self.engine,
        })
    }
}

impl TPlayerPerspective for SLeaderGameState<'_> {
    fn engine(&self) -> &SSchnapsenGamePlayEngine {
        self.engine
    }
    fn am_i_leader(&self) -> bool {
        true
    }
    fn valid_moves(&self) -> Vec<VMove> {
        leader_valid_moves(&self.rcgamestate.leader.hand, &self.rcgamestate.talon)
    }
    fn partial_trick(&self) -> Option<&SPartialTrick> {
        None
    }
    impl_observable_accessors!();
}

/// The follower's turn, answering the leader's card.
#[derive(Clone, Debug)]
pub struct SFollowerGameState<'engine> {
    rcgamestate_trick_start: Rc<SGameState>,
    rcgamestate: Rc<SGameState>,
    partialtrick: SPartialTrick,
    engine: &'engine SSchnapsenGamePlayEngine,
}

impl<'engine> SFollowerGameState<'engine> {
    /// `gamestate` must not contain the leader's card anymore.
    pub fn new(gamestate: SGameState, partialtrick: SPartialTrick, engine: &'engine SSchnapsenGamePlayEngine) -> Self {
        let rcgamestate = Rc::new(gamestate);
        SFollowerGameState {
            rcgamestate_trick_start: rcgamestate.clone(),
            rcgamestate,
            partialtrick,
            engine,
        }
    }

    impl_snapshot_helpers!(false);

    /// Completes the trick: the winner takes both cards, scores their points (redeeming pending
    /// marriage points), both bots draw (winner first) and the winner leads the next trick.
    pub fn play(&self, mv: VMove) -> Result<SGameState, Error> {
        ensure_valid(&self.valid_moves(), mv, "Follower")?;
        let regularmove_follower = match mv {
            VMove::Regular(regularmove) => regularmove,
            VMove::Marriage(_) | VMove::TrumpExchange(_) => bail!("Follower may only play single cards, got {}", mv),
        };
        let SGameState{leader, mut follower, mut talon, oprevious:_} = (*self.rcgamestate).clone();
        follower.hand.remove(regularmove_follower.card)?;
        let trick = STrick::new(self.partialtrick, regularmove_follower);
        let b_leader_wins = leader_wins_trick(trick.partialtrick.card_led(), regularmove_follower.card, talon.trump_suit());
        let (mut botstate_winner, mut botstate_loser) = tpl_flip_if(!b_leader_wins, (leader, follower));
        botstate_winner.veccard_won.extend(trick.cards());
        botstate_winner.score = (botstate_winner.score + SScore::new_direct(points_cards(trick.cards())))
            .redeem_pending_points();
        if !talon.is_empty() {
            for botstate in [&mut botstate_winner, &mut botstate_loser] {
                for card in talon.draw_cards(1)? {
                    botstate.hand.add(card)?;
                }
            }
        }
        Ok(SGameState::new(
            botstate_winner,
            botstate_loser,
            talon,
            Some(SPrevious {
                gamestate: self.rcgamestate_trick_start.clone(),
                trick,
                b_leader_remained_leader: b_leader_wins,
            }),
        ))
    }
}

impl TPlayerPerspective for SFollowerGameState<'_> {
    fn engine(&self) -> &SSchnapsenGamePlayEngine {
        self.engine
    }
    fn am_i_leader(&self) -> bool {
        false
    }
    fn valid_moves(&self) -> Vec<VMove> {
        follower_valid_moves(&self.rcgamestate.follower.hand, &self.rcgamestate.talon, self.partialtrick.card_led())
    }
    fn partial_trick(&self) -> Option<&SPartialTrick> {
        Some(&self.partialtrick)
    }
    impl_observable_accessors!();
}
