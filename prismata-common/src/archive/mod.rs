pub mod config;
pub mod fetch;
pub mod decompress;

pub use self::config::ArchiveConfig;
pub use self::fetch::Fetch;
pub use self::fetch::ArchiveClient;
pub use self::decompress::decompress;

use std::io::Cursor;

use replay::{self, Replay};

use ::errors::*;

/// Fetches, gunzips and decodes one replay, stopping at the first failure.
pub fn load_replay<F>(fetcher: &F, code: &str) -> Result<Replay>
    where F: Fetch + ?Sized
{
    let raw = fetcher.fetch(code)?;
    trace!("fetched {} bytes for replay {}", raw.len(), code);

    let json = decompress(Cursor::new(raw))?;
    trace!("decompressed replay {} to {} bytes", code, json.len());

    replay::decode(Cursor::new(json))
}
