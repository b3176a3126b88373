use std::fmt;

/// Outcome of a match as recorded in the `result` field.
///
/// The archive does not promise a closed set of codes, so anything other
/// than 0, 1 or 2 is kept as `Unknown` instead of failing the decode.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Copy, Clone)]
#[serde(from = "i64", into = "i64")]
pub enum MatchResult
{
    PlayerOne,
    PlayerTwo,
    Draw,
    Unknown(i64),
}

impl MatchResult
{
    pub fn code(&self) -> i64
    {
        match *self
        {
            MatchResult::PlayerOne => 0,
            MatchResult::PlayerTwo => 1,
            MatchResult::Draw => 2,
            MatchResult::Unknown(code) => code,
        }
    }

    pub fn is_known(&self) -> bool
    {
        match *self
        {
            MatchResult::Unknown(_) => false,
            _ => true,
        }
    }
}

impl Default for MatchResult
{
    /* An absent `result` decodes as 0 like every other missing number */
    fn default() -> MatchResult
    {
        MatchResult::PlayerOne
    }
}

impl From<i64> for MatchResult
{
    fn from(code: i64) -> MatchResult
    {
        match code
        {
            0 => MatchResult::PlayerOne,
            1 => MatchResult::PlayerTwo,
            2 => MatchResult::Draw,
            _ => MatchResult::Unknown(code),
        }
    }
}

impl From<MatchResult> for i64
{
    fn from(result: MatchResult) -> i64
    {
        result.code()
    }
}

impl fmt::Display for MatchResult
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        let name = match *self
        {
            MatchResult::PlayerOne => "P1",
            MatchResult::PlayerTwo => "P2",
            MatchResult::Draw => "Draw",
            MatchResult::Unknown(_) => "Unknown",
        };

        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests
{
    use super::MatchResult;

    #[test]
    fn test_known_codes()
    {
        assert_eq!(MatchResult::from(0), MatchResult::PlayerOne);
        assert_eq!(MatchResult::from(1), MatchResult::PlayerTwo);
        assert_eq!(MatchResult::from(2), MatchResult::Draw);
        assert_eq!(MatchResult::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_unknown_code_is_kept()
    {
        let result = MatchResult::from(7);

        assert_eq!(result, MatchResult::Unknown(7));
        assert_eq!(result.code(), 7);
        assert!(!result.is_known());
        assert_eq!(result.to_string(), "Unknown");
        assert_eq!(MatchResult::from(-1).to_string(), "Unknown");
    }
}
