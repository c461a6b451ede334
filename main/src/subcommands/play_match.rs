use failure::*;
use itertools::Itertools;
use plain_enum::*;
use schnapsen_lib::{game::*, player::*, primitives::*};

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Play games until one bot reaches the game points of the rule set")
        .arg(bot_arg("bot0"))
        .arg(bot_arg("bot1"))
        .arg(seed_arg())
        .arg(ruleset_arg())
        .arg(json_arg())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let engine = SSchnapsenGamePlayEngine::new_with_ruleset(super::get_ruleset(clapmatches)?);
    let n_seed = super::get_seed(clapmatches)?;
    let b_json = clapmatches.is_present("json");
    let mut abot = super::get_bots(clapmatches, n_seed)?;
    let mut resprint = Ok(());
    let matchresult = run_match(&engine, &mut abot, n_seed, |gameresult, an_game_points| {
        if resprint.is_ok() {
            resprint = super::print_game_result(gameresult, b_json);
        }
        if !b_json {
            println!("Standings: {}", EPlayerIndex::values().map(|epi| an_game_points[epi]).join(" : "));
        }
    })?;
    resprint?;
    if !b_json {
        println!(
            "{} ({}) wins the match after {} games",
            abot[matchresult.epi_winner].name(),
            matchresult.epi_winner,
            matchresult.vecgameresult.len(),
        );
    }
    Ok(())
}
