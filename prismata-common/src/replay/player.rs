/// A participant in one seat of a match.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub display_name: String,
    pub id: i64,
    /* Empty for humans */
    pub bot: String,
    pub avatar_frame: String,
    pub portrait: String,
    pub trophies: Vec<String>,
    pub loading_completed: bool,
    /* 0.0 to 1.0 */
    pub percent_loaded: f64,
}

impl Player
{
    pub fn is_bot(&self) -> bool
    {
        !self.bot.is_empty()
    }
}
