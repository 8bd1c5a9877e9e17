//! Directive grammar of documentation lines.
//!
//! A line whose trimmed text is `@keyword` or `@keyword payload` with a known
//! keyword is a directive. Any other line, including prose that mentions a
//! keyword, is documentation.

use flowgen_core::Directive;

/// Documentation split into prose and directives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    pub text: Vec<String>,
    pub directives: Vec<Directive>,
}

/// Parse one documentation line.
///
/// `Ok(None)` means the line is prose. A known keyword with a missing or
/// unexpected payload is an error with a message for the user.
pub fn parse_line(line: &str) -> Result<Option<Directive>, String> {
    let Some(body) = line.trim().strip_prefix('@') else {
        return Ok(None);
    };
    let (keyword, payload) = match body.split_once(char::is_whitespace) {
        Some((keyword, payload)) => (keyword, payload.trim()),
        None => (body, ""),
    };

    let directive = match keyword {
        "ignore" | "flowignore" | "strict" => {
            if !payload.is_empty() {
                return Err(format!("`@{keyword}` takes no argument"));
            }
            if keyword == "strict" {
                Directive::Strict
            } else {
                Directive::Ignore
            }
        }
        "rename" | "retype" | "comment" => {
            if payload.is_empty() {
                return Err(format!("`@{keyword}` requires an argument"));
            }
            match keyword {
                "rename" if payload.contains(char::is_whitespace) => {
                    return Err("`@rename` takes a single name".to_owned());
                }
                "rename" => Directive::Rename(payload.to_owned()),
                "retype" => Directive::Retype(payload.to_owned()),
                _ => Directive::Comment(payload.to_owned()),
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(directive))
}

/// Split documentation lines into prose and directives, in order.
pub fn parse_doc(lines: &[String]) -> Result<ParsedDoc, String> {
    let mut doc = ParsedDoc::default();
    for line in lines {
        match parse_line(line)? {
            Some(directive) => doc.directives.push(directive),
            None => doc.text.push(line.clone()),
        }
    }
    Ok(doc)
}
