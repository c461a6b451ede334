#![deny(bare_trait_objects)]

mod subcommands;

use failure::Error;

fn main() -> Result<(), Error> {
    schnapsen_util::init_logging("schnapsen", /*olevelfilter*/None)?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::Command::new("schnapsen")
            .about("Plays Schnapsen between bots")
            .subcommand_required(true)
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (play, "play")
        (play_match, "match")
    );
    Ok(())
}
