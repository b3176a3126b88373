extern crate error_chain;

use error_chain::ChainedError;

#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Builder, Target};

extern crate prismata_common;

use prismata_common::archive::{self, ArchiveClient, ArchiveConfig, Fetch};
use prismata_common::archive::config::{DEFAULT_EXTENSION, DEFAULT_ROOT, DEFAULT_TIMEOUT_SECS};
use prismata_common::errors::Result;
use prismata_common::replay::{Player, Replay};

use std::env;
use std::process;
use std::time::Duration;

/// Replays used when no codes are passed on the command line
const SAMPLE_CODES: [&'static str; 3] = ["ib0Qt-pp8PL", "VyrET-IGxyL", "yjUKQ-HzFRz"];

fn archive_config() -> ArchiveConfig
{
    let root = env::var("PRISMATA_ARCHIVE_ROOT")
        .unwrap_or(String::from(DEFAULT_ROOT));

    let extension = env::var("PRISMATA_ARCHIVE_EXTENSION")
        .unwrap_or(String::from(DEFAULT_EXTENSION));

    let timeout_secs = match env::var("PRISMATA_TIMEOUT_SECS")
    {
        Ok(secs) => secs.parse::<u64>().unwrap_or(DEFAULT_TIMEOUT_SECS),
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    ArchiveConfig::new(root, extension, Duration::from_secs(timeout_secs))
}

fn seat_name(player: Result<&Player>) -> String
{
    match player
    {
        Ok(player) if player.is_bot() => format!("{} (bot)", player.display_name),
        Ok(player) => player.display_name.clone(),
        Err(error) => format!("<{}>", error),
    }
}

fn summarize(replay: &Replay)
{
    let duration = match replay.duration()
    {
        Ok(duration) => format!("{}m{:02}s", duration.num_minutes(), duration.num_seconds() % 60),
        Err(error) => format!("<{}>", error),
    };

    let advanced_set = match replay.deck.advanced_set()
    {
        Ok(units) => units.join(", "),
        Err(error) => format!("<{}>", error),
    };

    info!("{}: {} vs {}, result: {}, duration: {}", replay.code, seat_name(replay.player_one()), seat_name(replay.player_two()), replay.result, duration);
    info!("{}: advanced set: {}", replay.code, advanced_set);
}

fn download_replays(fetcher: &dyn Fetch, codes: &[String]) -> usize
{
    let mut failures = 0;

    for code in codes
    {
        match archive::load_replay(fetcher, code)
        {
            Ok(replay) =>
            {
                summarize(&replay);
                println!("{:#?}", replay);
            },
            Err(error) =>
            {
                error!("failed to load replay: {} because {}", code, error.display_chain());
                failures += 1;
            },
        }
    }

    failures
}

fn main() {
    /* Logger */
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();

    let mut codes: Vec<String> = env::args().skip(1).collect();
    if codes.is_empty()
    {
        codes = SAMPLE_CODES.iter().map(|code| String::from(*code)).collect();
    }

    let client = match ArchiveClient::new(archive_config())
    {
        Ok(client) => client,
        Err(error) =>
        {
            error!("failed to build archive client: {}", error);
            process::exit(1);
        },
    };
    info!("downloading {} replays from {}", codes.len(), client.config().root);

    let failures = download_replays(&client, &codes);
    if failures > 0
    {
        error!("{} of {} replays failed", failures, codes.len());
        process::exit(1);
    }
}
