//! Go string literal decoding.

/// Decode a Go string literal, quotes included.
///
/// Raw strings (`` `...` ``) are returned verbatim minus carriage returns.
/// Interpreted strings (`"..."`) have their escape sequences resolved.
/// Returns `None` for anything that is not a well-formed literal.
pub fn unquote(text: &str) -> Option<String> {
    if let Some(raw) = text.strip_prefix('`').and_then(|t| t.strip_suffix('`')) {
        return Some(raw.replace('\r', ""));
    }
    let body = text.strip_prefix('"')?.strip_suffix('"')?;
    if body.len() + 2 != text.len() || body.contains('\n') {
        return None;
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return None,
            '\\' => decode_escape(&mut chars, &mut out)?,
            c => out.push(c),
        }
    }
    Some(out)
}

fn decode_escape(chars: &mut std::str::Chars<'_>, out: &mut String) -> Option<()> {
    let c = match chars.next()? {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        'x' => char::from_u32(read_digits(chars, 2, 16)?)?,
        'u' => char::from_u32(read_digits(chars, 4, 16)?)?,
        'U' => char::from_u32(read_digits(chars, 8, 16)?)?,
        first @ '0'..='7' => {
            let rest = read_digits(chars, 2, 8)?;
            let value = first.to_digit(8)? * 64 + rest;
            if value > 0xff {
                return None;
            }
            char::from_u32(value)?
        }
        _ => return None,
    };
    out.push(c);
    Some(())
}

fn read_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        value = value.checked_mul(radix)? + chars.next()?.to_digit(radix)?;
    }
    Some(value)
}
