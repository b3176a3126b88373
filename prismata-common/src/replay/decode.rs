use std::io::Read;
use std::str::FromStr;

use serde_json;
use serde_json::Value;

use super::model::Replay;

use ::errors::*;

/// A key whose value must be a json object (or a list of them when `list` is set).
struct Shape
{
    key: &'static str,
    list: bool,
    fields: &'static [Shape],
}

const DECK_FIELDS: &'static [Shape] = &[
    Shape { key: "mergedDeck", list: true, fields: &[] },
];

const TIME_FIELDS: &'static [Shape] = &[
    Shape { key: "playerTime", list: true, fields: &[] },
];

const RATING_FIELDS: &'static [Shape] = &[
    Shape { key: "initialRatings", list: true, fields: &[] },
    Shape { key: "finalRatings", list: true, fields: &[] },
];

const COMMAND_FIELDS: &'static [Shape] = &[
    Shape { key: "commandList", list: true, fields: &[] },
];

const REPLAY_FIELDS: &'static [Shape] = &[
    Shape { key: "deckInfo", list: false, fields: DECK_FIELDS },
    Shape { key: "playerInfo", list: true, fields: &[] },
    Shape { key: "commandInfo", list: false, fields: COMMAND_FIELDS },
    Shape { key: "timeInfo", list: false, fields: TIME_FIELDS },
    Shape { key: "ratingInfo", list: false, fields: RATING_FIELDS },
    Shape { key: "versionInfo", list: false, fields: &[] },
];

/// Decodes a replay from decompressed json.
///
/// Unknown keys are ignored and missing keys take their defaults. Syntax errors, values
/// of the wrong type and arrays where a record belongs fail the whole decode with
/// `ErrorKind::Decode`, the underlying error is kept as the cause.
pub fn decode<R: Read>(reader: R) -> Result<Replay>
{
    let value: Value = serde_json::from_reader(reader)
        .chain_err(|| ErrorKind::Decode)?;

    from_json(value)
}

pub fn decode_slice(bytes: &[u8]) -> Result<Replay>
{
    let value: Value = serde_json::from_slice(bytes)
        .chain_err(|| ErrorKind::Decode)?;

    from_json(value)
}

fn from_json(value: Value) -> Result<Replay>
{
    /* serde would otherwise fill a record from an array by position */
    check_record(&value, "replay", REPLAY_FIELDS)?;

    let replay: Replay = serde_json::from_value(value)
        .chain_err(|| ErrorKind::Decode)?;

    debug!("decoded replay {:?} with {} players", replay.code, replay.players.len());
    Ok(replay)
}

fn check_record(value: &Value, path: &str, fields: &[Shape]) -> Result<()>
{
    let record = match value.as_object()
    {
        Some(record) => record,
        None => return Err(not_a_record(path)),
    };

    for shape in fields
    {
        let path = format!("{}.{}", path, shape.key);

        match record.get(shape.key)
        {
            /* Absent and null are left to the field defaults */
            None | Some(&Value::Null) => (),
            Some(&Value::Array(ref items)) if shape.list =>
            {
                for (index, item) in items.iter().enumerate()
                {
                    check_record(item, &format!("{}[{}]", path, index), shape.fields)?;
                }
            },
            /* Any other non-array is rejected by serde with a type error */
            Some(list) if shape.list => trace!("{} is not a list: {}", path, list),
            Some(nested) => check_record(nested, &path, shape.fields)?,
        }
    }

    Ok(())
}

fn not_a_record(path: &str) -> Error
{
    Error::with_chain(Error::from(format!("{} is not a json object", path)), ErrorKind::Decode)
}

impl FromStr for Replay
{
    type Err = Error;

    fn from_str(json: &str) -> Result<Replay>
    {
        decode_slice(json.as_bytes())
    }
}
