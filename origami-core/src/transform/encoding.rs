use origami_types::constants::IMPORT_NAME_PREFIX;

/// Encodes an imported symbol name as a plain identifier: `v_` followed by every character's
/// code point as (at least) four lowercase hex digits.
///
/// `encode_import_name("ab") == "v_00610062"`.
pub fn encode_import_name(name: &str) -> String {
    name.chars().fold(IMPORT_NAME_PREFIX.to_string(), |mut acc, c| {
        acc.push_str(&format!("{:04x}", c as u32));
        acc
    })
}

/// Reverses [encode_import_name] for names made of Basic Multilingual Plane characters.
pub fn decode_import_name(encoded: &str) -> Option<String> {
    let digits = encoded.strip_prefix(IMPORT_NAME_PREFIX)?;
    if digits.len() % 4 != 0 || !digits.is_ascii() {
        return None;
    }
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| {
            let chunk = std::str::from_utf8(chunk).ok()?;
            u32::from_str_radix(chunk, 16).ok().and_then(char::from_u32)
        })
        .collect()
}
