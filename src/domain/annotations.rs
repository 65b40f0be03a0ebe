// ============================================================
// LABEL ANNOTATIONS
// ============================================================
// Scanners for the string-encoded structured fields of the label
// export. Parsed once at ingestion; consumers never re-parse.

use crate::domain::error::{AppError, Result};

/// Parse the bracketed, quote-delimited list notation used for
/// dermatologist condition labels, e.g. `['eczema', 'acne']`.
///
/// Quotes are respected, so labels containing commas survive intact.
/// Unquoted tokens are accepted and trimmed.
pub fn parse_label_list(raw: &str) -> Result<Vec<String>> {
    let inner = strip_delimiters(raw, '[', ']')
        .ok_or_else(|| parse_error("label list", raw, "expected a [..] list"))?;

    let mut scanner = Scanner::new(inner);
    let mut labels = Vec::new();

    loop {
        scanner.skip_whitespace();
        if scanner.at_end() {
            break;
        }

        let label = if scanner.at_quote() {
            scanner
                .quoted()
                .map_err(|reason| parse_error("label list", raw, &reason))?
        } else {
            scanner.take_until(&[',']).trim().to_string()
        };

        if !label.is_empty() {
            labels.push(label);
        }

        scanner.skip_whitespace();
        if !scanner.eat(',') && !scanner.at_end() {
            return Err(parse_error("label list", raw, "expected ',' between entries"));
        }
    }

    Ok(labels)
}

/// Parse the map-literal notation used for weighted condition labels,
/// e.g. `{'eczema': 0.75, 'acne': 0.25}`, preserving entry order.
pub fn parse_weight_map(raw: &str) -> Result<Vec<(String, f64)>> {
    let inner = strip_delimiters(raw, '{', '}')
        .ok_or_else(|| parse_error("weighted label map", raw, "expected a {..} map"))?;

    let mut scanner = Scanner::new(inner);
    let mut entries = Vec::new();

    loop {
        scanner.skip_whitespace();
        if scanner.at_end() {
            break;
        }

        let label = if scanner.at_quote() {
            scanner
                .quoted()
                .map_err(|reason| parse_error("weighted label map", raw, &reason))?
        } else {
            scanner.take_until(&[':']).trim().to_string()
        };

        if label.is_empty() {
            return Err(parse_error("weighted label map", raw, "empty label"));
        }

        scanner.skip_whitespace();
        if !scanner.eat(':') {
            return Err(parse_error("weighted label map", raw, "expected ':' after label"));
        }

        let weight_text = scanner.take_until(&[',']).trim().to_string();
        let weight = weight_text.parse::<f64>().map_err(|_| {
            parse_error(
                "weighted label map",
                raw,
                &format!("invalid weight '{}'", weight_text),
            )
        })?;

        entries.push((label, weight));

        scanner.skip_whitespace();
        if !scanner.eat(',') && !scanner.at_end() {
            return Err(parse_error(
                "weighted label map",
                raw,
                "expected ',' between entries",
            ));
        }
    }

    Ok(entries)
}

fn parse_error(what: &str, raw: &str, reason: &str) -> AppError {
    AppError::ParseError(format!("invalid {} '{}': {}", what, raw, reason))
}

/// Strip a single pair of surrounding delimiters from a trimmed value.
fn strip_delimiters(raw: &str, open: char, close: char) -> Option<&str> {
    let trimmed = raw.trim();
    trimmed.strip_prefix(open)?.strip_suffix(close)
}

/// Minimal cursor over the inner text of a list or map literal.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_quote(&self) -> bool {
        matches!(self.peek(), Some('\'') | Some('"'))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Consume `expected` if it is next.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume a quote-delimited token, returning its unquoted content.
    fn quoted(&mut self) -> std::result::Result<String, String> {
        let quote = self.peek().ok_or_else(|| "expected a quote".to_string())?;
        self.pos += quote.len_utf8();

        let rest = self.rest();
        match rest.find(quote) {
            Some(end) => {
                let content = &rest[..end];
                self.pos += end + quote.len_utf8();
                Ok(content.to_string())
            }
            None => Err(format!("unterminated {} quote", quote)),
        }
    }

    /// Consume up to (not including) the first of `stops`, or to the end.
    fn take_until(&mut self, stops: &[char]) -> &'a str {
        let rest = self.rest();
        let end = rest.find(stops).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }
}
