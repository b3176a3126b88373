use std::time::Duration;

/// S3 bucket the game client saves finished matches into
pub const DEFAULT_ROOT: &'static str = "http://saved-games-alpha.s3-website-us-east-1.amazonaws.com/";
pub const DEFAULT_EXTENSION: &'static str = ".json.gz";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where replays are downloaded from.
#[derive(Debug, Clone, PartialEq, new)]
pub struct ArchiveConfig
{
    pub root: String,
    pub extension: String,
    pub timeout: Duration,
}

impl ArchiveConfig
{
    /// `<root>/<code><extension>`
    pub fn replay_url(&self, code: &str) -> String
    {
        if self.root.ends_with('/')
        {
            format!("{}{}{}", self.root, code, self.extension)
        } else
        {
            format!("{}/{}{}", self.root, code, self.extension)
        }
    }
}

impl Default for ArchiveConfig
{
    fn default() -> ArchiveConfig
    {
        ArchiveConfig::new(String::from(DEFAULT_ROOT), String::from(DEFAULT_EXTENSION), Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests
{
    use super::ArchiveConfig;

    use std::time::Duration;

    #[test]
    fn test_default_url()
    {
        let config = ArchiveConfig::default();

        assert_eq!(config.replay_url("ib0Qt-pp8PL"), "http://saved-games-alpha.s3-website-us-east-1.amazonaws.com/ib0Qt-pp8PL.json.gz");
    }

    #[test]
    fn test_root_without_slash()
    {
        let config = ArchiveConfig::new(String::from("http://localhost:8000"), String::from(".json"), Duration::from_secs(1));

        assert_eq!(config.replay_url("VyrET-IGxyL"), "http://localhost:8000/VyrET-IGxyL.json");
    }
}
