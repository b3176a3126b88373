extern crate prismata_common;

extern crate libflate;

use prismata_common::archive::{self, ArchiveClient, ArchiveConfig, Fetch};
use prismata_common::errors::{ErrorKind, Result};

use libflate::gzip::Encoder;

use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};
use std::time::Duration;

/// Serves gzipped fixtures instead of going to the network.
struct FakeArchive
{
    replays: HashMap<String, Vec<u8>>,
}

impl FakeArchive
{
    fn with_fixture(code: &str) -> FakeArchive
    {
        let json = fs::read(format!("resources/{}.json", code)).unwrap();

        let mut replays = HashMap::new();
        replays.insert(String::from(code), gzip(&json));

        FakeArchive { replays }
    }
}

impl Fetch for FakeArchive
{
    fn fetch(&self, code: &str) -> Result<Vec<u8>>
    {
        match self.replays.get(code)
        {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(ErrorKind::Fetch(String::from(code), 404).into()),
        }
    }
}

fn gzip(bytes: &[u8]) -> Vec<u8>
{
    let mut encoder = Encoder::new(Vec::new()).unwrap();
    encoder.write_all(bytes).unwrap();

    encoder.finish().into_result().unwrap()
}

#[test]
fn test_decompress()
{
    let compressed = gzip(b"{\"code\":\"ib0Qt-pp8PL\"}");

    let decompressed = archive::decompress(Cursor::new(compressed)).unwrap();
    assert_eq!(decompressed, b"{\"code\":\"ib0Qt-pp8PL\"}".to_vec());
}

#[test]
fn test_decompress_not_gzip()
{
    match *archive::decompress(Cursor::new(b"{\"code\":\"plain\"}".to_vec())).unwrap_err().kind()
    {
        ErrorKind::Io(_) => (),
        ref kind => panic!("got: <{:?}>, want: <Io>", kind),
    }
}

#[test]
fn test_load_replay()
{
    let fake = FakeArchive::with_fixture("ib0Qt-pp8PL");

    let replay = archive::load_replay(&fake, "ib0Qt-pp8PL").unwrap();
    assert_eq!(replay.code, "ib0Qt-pp8PL");
    assert_eq!(replay.duration().unwrap().num_seconds(), 626);
}

#[test]
fn test_load_replay_missing_code()
{
    let fake = FakeArchive::with_fixture("ib0Qt-pp8PL");

    match *archive::load_replay(&fake, "VyrET-IGxyL").unwrap_err().kind()
    {
        ErrorKind::Fetch(ref code, 404) => assert_eq!(code, "VyrET-IGxyL"),
        ref kind => panic!("got: <{:?}>, want: <Fetch>", kind),
    }
}

#[test]
fn test_load_replay_through_trait_object()
{
    let fake = FakeArchive::with_fixture("yjUKQ-HzFRz");
    let fetcher: &dyn Fetch = &fake;

    let replay = archive::load_replay(fetcher, "yjUKQ-HzFRz").unwrap();
    assert_eq!(replay.result.to_string(), "Draw");
}

#[test]
fn test_client_keeps_config()
{
    let config = ArchiveConfig::new(String::from("http://localhost:8000/replays"), String::from(".json.gz"), Duration::from_secs(5));

    let client = ArchiveClient::new(config.clone()).unwrap();
    assert_eq!(client.config(), &config);
    assert_eq!(client.config().replay_url("ib0Qt-pp8PL"), "http://localhost:8000/replays/ib0Qt-pp8PL.json.gz");
}
