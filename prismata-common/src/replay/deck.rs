use serde_json::Value;

use ::errors::*;

/// The unit pool a match was played with.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Deck {
    #[serde(rename = "mergedDeck")]
    pub merged_deck: Vec<Unit>,
    /* Mixed unit names and counts, never interpreted */
    pub base: Vec<Vec<Value>>,
    #[serde(rename = "deckName")]
    pub name: String,
    /* One list of unit names per randomizer tier, in draw order */
    pub randomizer: Vec<Vec<String>>,
}

impl Deck
{
    /// Units that were randomly drawn into the match: the first randomizer tier.
    ///
    /// An empty randomizer table is reported as `ErrorKind::OutOfRange` rather than
    /// an empty slice so a malformed deck can't pass for a deck with no advanced units.
    pub fn advanced_set(&self) -> Result<&[String]>
    {
        match self.randomizer.first()
        {
            Some(tier) => Ok(tier.as_slice()),
            None => bail!(ErrorKind::OutOfRange("randomizer", 0, self.randomizer.len())),
        }
    }

    pub fn unit(&self, name: &str) -> Option<&Unit>
    {
        self.merged_deck.iter()
            .find(|unit| unit.name == name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Unit {
    pub name: String,
    #[serde(rename = "UIName", skip_serializing_if = "Option::is_none")]
    pub ui_name: Option<String>,
    #[serde(rename = "baseSet", skip_serializing_if = "Option::is_none")]
    pub base_set: Option<i64>,
}

impl Unit
{
    /// Name shown in the client, falling back to the canonical name.
    pub fn display_name(&self) -> &str
    {
        match self.ui_name
        {
            Some(ref ui_name) if !ui_name.is_empty() => ui_name,
            _ => &self.name,
        }
    }
}
