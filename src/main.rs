// SPDX-License-Identifier: MPL-2.0
use tripshare::app::{self, paths, Flags};

const HELP: &str = "\
TripShare

USAGE:
  tripshare [OPTIONS] [SHARE_LINK]

ARGS:
  <SHARE_LINK>         Share link to load on startup

OPTIONS:
  --person <ID>        Load this person's photos without a share link
  --trip <ID>          Trip id accompanying --person
  --lang <LANG>        Locale override in BCP-47 form (e.g. fr, en-US)
  --config-dir <DIR>   Config directory override (settings.toml)
  --data-dir <DIR>     Data directory override (state.cbor)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    init_logger();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}

/// Parses the command line. `Ok(None)` means help was printed.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        person: args.opt_value_from_str("--person")?,
        trip: args.opt_value_from_str("--trip")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        share_link: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    Ok(Some(flags))
}

fn init_logger() {
    #[cfg(debug_assertions)]
    let default_filter = "info,tripshare=debug";
    #[cfg(not(debug_assertions))]
    let default_filter = "info";

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
