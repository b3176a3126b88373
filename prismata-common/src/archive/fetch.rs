use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use super::config::ArchiveConfig;

use ::errors::*;

/// Source of raw (still compressed) replay payloads.
pub trait Fetch
{
    fn fetch(&self, code: &str) -> Result<Vec<u8>>;
}

/// Downloads replays over http from the archive in `ArchiveConfig`.
pub struct ArchiveClient
{
    config: ArchiveConfig,
    client: Client,
}

impl ArchiveClient
{
    pub fn new(config: ArchiveConfig) -> Result<ArchiveClient>
    {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(ArchiveClient
        {
            config,
            client,
        })
    }

    pub fn config(&self) -> &ArchiveConfig
    {
        &self.config
    }
}

impl Fetch for ArchiveClient
{
    fn fetch(&self, code: &str) -> Result<Vec<u8>>
    {
        let url = self.config.replay_url(code);
        debug!("fetching replay {} from {}", code, url);

        let mut response = self.client.get(&url)
            .header(ACCEPT, "gzip")
            .send()?;

        let status = response.status();
        if !status.is_success()
        {
            warn!("archive answered {} for {}", status, url);
            bail!(ErrorKind::Fetch(String::from(code), status.as_u16()));
        }

        /* Use .copy_to() so the gzip body isn't mangled as text */
        let mut bytes: Vec<u8> = Vec::new();
        response.copy_to(&mut bytes)?;

        Ok(bytes)
    }
}
