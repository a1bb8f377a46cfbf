//! Decoding of backslash escapes found in TXT character-strings.
//!
//! Zone tooling may leave TXT data in presentation format, where a byte is
//! written as `\DDD` (three decimal digits) and any other character may be
//! quoted as `\X`. Digit escapes are resolved in a first pass so that a
//! `\DDD` sequence is never read as `\D` followed by two literal digits.

/// Concatenates the character-strings of one TXT record and resolves escapes.
///
/// Bytes that do not form valid UTF-8 after decoding are replaced with
/// U+FFFD; such values are rejected later as `INVALID_CHARACTER`.
pub fn decode_txt<T: AsRef<[u8]>>(fragments: &[T]) -> String {
    let joined: Vec<u8> = fragments
        .iter()
        .flat_map(|fragment| fragment.as_ref().iter().copied())
        .collect();

    let bytes = replace_generic_escapes(&replace_digit_escapes(&joined));
    String::from_utf8_lossy(&bytes).into_owned()
}

fn replace_digit_escapes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        if input[pos] == b'\\' {
            if let Some(byte) = digit_escape(&input[pos + 1..]) {
                out.push(byte);
                pos += 4;
                continue;
            }
        }
        out.push(input[pos]);
        pos += 1;
    }

    out
}

/// Value of a `DDD` triplet, `None` when it is not three digits or exceeds 255.
fn digit_escape(rest: &[u8]) -> Option<u8> {
    let digits = rest.get(..3)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let value = digits
        .iter()
        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
    u8::try_from(value).ok()
}

fn replace_generic_escapes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut iter = input.iter().copied();

    while let Some(byte) = iter.next() {
        if byte == b'\\' {
            match iter.next() {
                Some(escaped) => out.push(escaped),
                None => out.push(byte),
            }
        } else {
            out.push(byte);
        }
    }

    out
}
