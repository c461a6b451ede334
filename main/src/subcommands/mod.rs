pub mod play;
pub mod play_match;

use failure::*;
use plain_enum::*;
use schnapsen_lib::{
    game::*,
    player::*,
    primitives::*,
    rules::ruleset::SRuleSet,
};

pub mod shared_args {
    pub fn ruleset_arg() -> clap::Arg<'static> {
        clap::Arg::new("ruleset")
            .long("ruleset")
            .takes_value(true)
            .help("Path to a TOML rule set")
            .long_help("Path to a TOML rule set. Missing keys (and a missing file argument) fall back to the standard rules: hands of 5 cards, 66 points to win, marriages worth 20 (40 in trump), 7 game points per match.")
    }

    pub fn bot_arg(str_name: &'static str) -> clap::Arg<'static> {
        clap::Arg::new(str_name)
            .long(str_name)
            .takes_value(true)
            .possible_values(["random", "first"])
            .default_value("random")
            .help("Bot to play in this seat")
    }

    pub fn seed_arg() -> clap::Arg<'static> {
        clap::Arg::new("seed")
            .long("seed")
            .takes_value(true)
            .default_value("0")
            .help("Seed for dealing and for random bots")
    }

    pub fn json_arg() -> clap::Arg<'static> {
        clap::Arg::new("json")
            .long("json")
            .help("Print one JSON summary per game")
    }
}

pub fn get_ruleset(clapmatches: &clap::ArgMatches) -> Result<SRuleSet, Error> {
    match clapmatches.value_of("ruleset") {
        Some(str_path) => SRuleSet::from_file(std::path::Path::new(str_path)),
        None => Ok(SRuleSet::default()),
    }
}

pub fn get_seed(clapmatches: &clap::ArgMatches) -> Result<u64, Error> {
    clapmatches.value_of_t("seed")
        .map_err(|err| format_err!("Invalid seed: {}", err))
}

fn make_bot(str_bot: &str, n_seed: u64) -> Result<Box<dyn TBot>, Error> {
    match str_bot {
        "random" => Ok(Box::new(SBotRandom::new(n_seed))),
        "first" => Ok(Box::new(SBotFirstMove::default())),
        _ => bail!("Unknown bot {}", str_bot),
    }
}

/// Bots as given by `--bot0` and `--bot1`.
pub fn get_bots(clapmatches: &clap::ArgMatches, n_seed: u64) -> Result<EnumMap<EPlayerIndex, Box<dyn TBot>>, Error> {
    let [bot0, bot1] = [("bot0", 1), ("bot1", 2)].map(|(str_arg, n_seed_offset)| {
        make_bot(
            clapmatches.value_of(str_arg).ok_or_else(|| format_err!("No bot given for {}", str_arg))?,
            n_seed.wrapping_add(n_seed_offset),
        )
    });
    Ok(EPlayerIndex::map_from_raw([bot0?, bot1?]))
}

pub fn print_game_result(gameresult: &SGameResult, b_json: bool) -> Result<(), Error> {
    if b_json {
        println!("{}", serde_json::to_string(&gameresult.summary())?);
    } else {
        println!("{}", gameresult);
    }
    Ok(())
}
