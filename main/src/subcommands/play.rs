use failure::*;
use itertools::Itertools;
use plain_enum::*;
use schnapsen_lib::{game::*, player::*, primitives::*};

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Play a number of independent games")
        .arg(bot_arg("bot0"))
        .arg(bot_arg("bot1"))
        .arg(clap::Arg::new("numgames")
            .long("numgames")
            .takes_value(true)
            .default_value("1")
            .help("Number of games to play")
            .long_help("Number of games to play. Game i is dealt with seed+i, and bots alternate leading the first trick.")
        )
        .arg(seed_arg())
        .arg(ruleset_arg())
        .arg(json_arg())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let engine = SSchnapsenGamePlayEngine::new_with_ruleset(super::get_ruleset(clapmatches)?);
    let n_seed = super::get_seed(clapmatches)?;
    let n_games : u64 = clapmatches.value_of_t("numgames")
        .map_err(|err| format_err!("Invalid numgames: {}", err))?;
    let b_json = clapmatches.is_present("json");
    let mut abot = super::get_bots(clapmatches, n_seed)?;
    let mut an_game_points = EPlayerIndex::map_from_fn(|_epi| 0isize);
    let mut an_games_won = EPlayerIndex::map_from_fn(|_epi| 0usize);
    let mut epi_first = EPlayerIndex::EPI0;
    for i_game in 0..n_games {
        let gameresult = engine.play_game_seated(&mut abot, epi_first, n_seed.wrapping_add(i_game))?;
        super::print_game_result(&gameresult, b_json)?;
        an_game_points[gameresult.epi_winner] += gameresult.n_game_points;
        an_games_won[gameresult.epi_winner] += 1;
        epi_first = epi_first.opponent();
    }
    if !b_json {
        println!("Results:");
        println!("{}", EPlayerIndex::values()
            .map(|epi| format!("{} ({}): {} games, {} game points", abot[epi].name(), epi, an_games_won[epi], an_game_points[epi]))
            .join("\n")
        );
    }
    Ok(())
}
