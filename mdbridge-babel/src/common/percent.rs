//! Percent-encoding of link targets.
//!
//! The rich dialect's link tokenizer ends a target at the first raw space, so targets are
//! encoded the way a browser encodes a whole URI: URI punctuation is kept, everything else
//! (spaces, `%`, non-ASCII) is escaped. Parentheses are escaped as well, since an unbalanced
//! `)` would end the link destination early. Decoding mirrors that and keeps escapes of reserved
//! characters intact, so `a%2Fb` does not turn into a path separator.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Characters left alone when encoding a target.
const URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'#');

/// Reserved characters whose escapes survive decoding.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Percent-encodes a link target.
pub fn encode_target(target: &str) -> String {
    utf8_percent_encode(target, URI_SET).to_string()
}

/// Percent-decodes a link target.
///
/// Malformed escapes are kept literally. If the decoded bytes are not UTF-8 the target is
/// returned untouched.
pub fn decode_target(target: &str) -> Cow<'_, str> {
    if !target.contains('%') {
        return Cow::Borrowed(target);
    }

    let mut out = String::with_capacity(target.len());
    let mut rest = target;
    while let Some(idx) = find_reserved_escape(rest) {
        match percent_decode_str(&rest[..idx]).decode_utf8() {
            Ok(segment) => out.push_str(&segment),
            Err(_) => return Cow::Borrowed(target),
        }
        out.push_str(&rest[idx..idx + 3]);
        rest = &rest[idx + 3..];
    }
    match percent_decode_str(rest).decode_utf8() {
        Ok(segment) => out.push_str(&segment),
        Err(_) => return Cow::Borrowed(target),
    }
    Cow::Owned(out)
}

/// Byte offset of the first `%XX` escape that decodes to a reserved character.
fn find_reserved_escape(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len().saturating_sub(2)).find(|&i| {
        bytes[i] == b'%'
            && hex_value(bytes[i + 1])
                .zip(hex_value(bytes[i + 2]))
                .is_some_and(|(hi, lo)| RESERVED.contains(&(hi * 16 + lo)))
    })
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}
