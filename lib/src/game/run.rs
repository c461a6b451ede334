use crate::game::*;
use crate::player::*;

pub struct SMatchResult {
    pub epi_winner: EPlayerIndex,
    pub an_game_points: EnumMap<EPlayerIndex, isize>,
    pub vecgameresult: Vec<SGameResult>,
}

/// Plays games until one bot collects the game points required by the rule set. The first
/// leader alternates, game `i` is dealt with seed `n_seed+i`.
pub fn run_match(
    engine: &SSchnapsenGamePlayEngine,
    abot: &mut EnumMap<EPlayerIndex, Box<dyn TBot>>,
    n_seed: u64,
    mut fn_game_done: impl FnMut(&SGameResult, &EnumMap<EPlayerIndex, isize>),
) -> Result<SMatchResult, Error> {
    let mut an_game_points = EPlayerIndex::map_from_fn(|_epi| 0);
    let mut vecgameresult = Vec::new();
    let mut epi_first = EPlayerIndex::EPI0;
    let mut n_seed_game = n_seed;
    loop {
        let gameresult = engine.play_game_seated(abot, epi_first, n_seed_game)?;
        an_game_points[gameresult.epi_winner] += gameresult.n_game_points;
        fn_game_done(&gameresult, &an_game_points);
        vecgameresult.push(gameresult);
        if let Some(epi_winner) = EPlayerIndex::values()
            .find(|&epi| engine.ruleset.n_game_points_match <= an_game_points[epi])
        {
            info!("Match over after {} games: {} wins", vecgameresult.len(), epi_winner);
            return Ok(SMatchResult {
                epi_winner,
                an_game_points,
                vecgameresult,
            });
        }
        epi_first = epi_first.opponent();
        n_seed_game = n_seed_game.wrapping_add(1);
    }
}
