use std::io::Read;

use libflate::gzip::Decoder;

use ::errors::*;

/// Gunzips a payload fetched from the archive.
pub fn decompress<R: Read>(raw: R) -> Result<Vec<u8>>
{
    let mut decoder = Decoder::new(raw)?;

    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;

    Ok(decompressed)
}
