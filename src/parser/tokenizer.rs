//! Quote-aware splitting of a single delimited line into fields

/// The quote character recognised by the tokenizer
pub const QUOTE: char = '"';

/// Fields of one line, plus whether the scan ended inside quotes
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedLine {
    pub fields: Vec<String>,
    pub unterminated_quote: bool,
}

/// Split one line into trimmed fields.
///
/// Quotes toggle the quoted state and are never part of a field; a doubled
/// quote inside a quoted section yields one literal quote. Delimiters inside
/// quotes are ordinary content. A line always yields at least one field.
pub fn tokenize_line(line: &str, delimiter: char) -> Vec<String> {
    tokenize_line_detailed(line, delimiter).fields
}

/// Same scan as [`tokenize_line`], also reporting an unterminated quote.
///
/// An unterminated quote is not an error: the partial field is emitted as-is.
pub fn tokenize_line_detailed(line: &str, delimiter: char) -> TokenizedLine {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == QUOTE {
            if in_quotes && chars.peek() == Some(&QUOTE) {
                current.push(QUOTE);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }

    fields.push(current.trim().to_string());

    TokenizedLine {
        fields,
        unterminated_quote: in_quotes,
    }
}
