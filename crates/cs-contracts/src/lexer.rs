//! Scanning helpers shared by the contract extractors.
//!
//! The extractors do not build a full syntax tree. They blank out comments,
//! find declaration keywords, and use delimiter matching to cut declaration
//! bodies out of the text. Every helper here keeps byte offsets stable so a
//! position in the stripped text is a position in the original file.

/// Lexical rules for the two contract languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `--` comments, `'` strings, `"` quoted identifiers, doubled-quote escapes
    Sql,
    /// `//` comments, `'` `"` and `` ` `` strings, backslash escapes
    TypeScript,
}

impl Dialect {
    fn is_quote(self, b: u8) -> bool {
        match self {
            Dialect::Sql => b == b'\'' || b == b'"',
            Dialect::TypeScript => b == b'\'' || b == b'"' || b == b'`',
        }
    }

    fn starts_line_comment(self, bytes: &[u8], i: usize) -> bool {
        let marker = match self {
            Dialect::Sql => b'-',
            Dialect::TypeScript => b'/',
        };
        bytes[i] == marker && bytes.get(i + 1) == Some(&marker)
    }
}

/// Replace every comment with spaces, keeping newlines and string literals.
///
/// The result has the same length and line structure as `text`.
pub fn strip_comments(text: &str, dialect: Dialect) -> String {
    let bytes = text.as_bytes();
    let mut out = bytes.to_vec();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if dialect.is_quote(b) {
            i = skip_string(bytes, i, dialect);
        } else if dialect.starts_line_comment(bytes, i) {
            while i < bytes.len() && bytes[i] != b'\n' {
                out[i] = b' ';
                i += 1;
            }
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            let end = find_block_comment_end(bytes, i + 2);
            for slot in &mut out[i..end] {
                if *slot != b'\n' {
                    *slot = b' ';
                }
            }
            i = end;
        } else {
            i += 1;
        }
    }

    // Comments start and end on ASCII bytes, so blanking whole comments
    // never splits a multi-byte character.
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn find_block_comment_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// Index just past the string literal opening at `start`, or `None` if the
/// literal runs to end of input
pub fn scan_string(bytes: &[u8], start: usize, dialect: Dialect) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;

    while i < bytes.len() {
        let b = bytes[i];
        match dialect {
            Dialect::Sql => {
                if b == quote {
                    if bytes.get(i + 1) == Some(&quote) {
                        i += 2;
                        continue;
                    }
                    return Some(i + 1);
                }
            }
            Dialect::TypeScript => {
                if b == b'\\' {
                    i += 2;
                    continue;
                }
                if b == quote {
                    return Some(i + 1);
                }
                if quote == b'`' && b == b'$' && bytes.get(i + 1) == Some(&b'{') {
                    i = skip_interpolation(bytes, i + 2)?;
                    continue;
                }
            }
        }
        i += 1;
    }
    None
}

/// Like [`scan_string`], treating an unterminated literal as ending at EOF
pub fn skip_string(bytes: &[u8], start: usize, dialect: Dialect) -> usize {
    scan_string(bytes, start, dialect).unwrap_or(bytes.len())
}

/// Skip the body of a `${ ... }` interpolation whose content starts at `start`
fn skip_interpolation(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' | b'"' | b'`' => {
                i = scan_string(bytes, i, Dialect::TypeScript)?;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Outcome of a matching-delimiter search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimited {
    /// Index of the matching closing delimiter
    Closed(usize),
    /// The interrupt predicate fired at this index before the block closed
    Interrupted(usize),
    /// End of input reached with the block still open
    Unterminated,
}

/// Find the delimiter closing the `(`, `{` or `[` at `open`.
///
/// Nested pairs of the same kind are counted and string literals skipped.
/// `interrupt` is consulted at every other position inside the block; when
/// it returns true the search stops. Expects comment-stripped text.
pub fn find_matching(
    text: &str,
    open: usize,
    dialect: Dialect,
    interrupt: impl Fn(&str, usize) -> bool,
) -> Delimited {
    let bytes = text.as_bytes();
    let Some(&open_byte) = bytes.get(open) else {
        return Delimited::Unterminated;
    };
    let close_byte = match open_byte {
        b'(' => b')',
        b'{' => b'}',
        b'[' => b']',
        _ => return Delimited::Unterminated,
    };

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        if dialect.is_quote(b) {
            i = skip_string(bytes, i, dialect);
            continue;
        }
        if b == open_byte {
            depth += 1;
        } else if b == close_byte {
            depth -= 1;
            if depth == 0 {
                return Delimited::Closed(i);
            }
        } else if interrupt(text, i) {
            return Delimited::Interrupted(i);
        }
        i += 1;
    }
    Delimited::Unterminated
}

/// Split `text` on `separator` bytes that are outside any bracket pair or
/// string literal. Returns `(offset, piece)` pairs with untrimmed pieces.
pub fn split_top_level(text: &str, separator: u8, dialect: Dialect) -> Vec<(usize, &str)> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if dialect.is_quote(b) {
            i = skip_string(bytes, i, dialect);
            continue;
        }
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ if b == separator && depth == 0 => {
                pieces.push((start, &text[start..i]));
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    pieces.push((start, &text[start..]));
    pieces
}

/// Whether `b` can appear inside an identifier
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Whether the word at `pos` equals `keyword` (ASCII case-insensitive) and
/// is delimited on both sides
pub fn keyword_at(text: &str, pos: usize, keyword: &str) -> bool {
    let bytes = text.as_bytes();
    let end = pos + keyword.len();
    if end > bytes.len() || !bytes[pos..end].eq_ignore_ascii_case(keyword.as_bytes()) {
        return false;
    }
    let before_ok = pos == 0 || !is_ident_byte(bytes[pos - 1]);
    let after_ok = !bytes.get(end).is_some_and(|b| is_ident_byte(*b));
    before_ok && after_ok
}

/// Byte offset to 1-based line number lookup
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line containing `offset`
    pub fn line(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }
}

/// Forward-only cursor for reading declaration headers
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    pub fn skip_ws(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Consume `c` after optional whitespace
    pub fn eat_char(&mut self, c: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a case-insensitive keyword after optional whitespace
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_ws();
        if keyword_at(self.text, self.pos, keyword) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    /// Consume a sequence of keywords, or nothing if any one is missing
    pub fn eat_keywords(&mut self, keywords: &[&str]) -> bool {
        let start = self.pos;
        if keywords.iter().all(|kw| self.eat_keyword(kw)) {
            true
        } else {
            self.pos = start;
            false
        }
    }

    /// Consume a bare identifier after optional whitespace
    pub fn ident(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let bytes = self.text.as_bytes();
        let start = self.pos;
        if !bytes
            .get(start)
            .is_some_and(|b| is_ident_byte(*b) && !b.is_ascii_digit())
        {
            return None;
        }
        let mut end = start;
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }
        self.pos = end;
        Some(&self.text[start..end])
    }

    /// Consume a bare or `"quoted"` identifier, returning it unquoted
    pub fn name(&mut self) -> Option<String> {
        self.skip_ws();
        match self.peek() {
            Some(b'"') | Some(b'`') => {
                let bytes = self.text.as_bytes();
                let quote = bytes[self.pos];
                let start = self.pos + 1;
                let end = start + bytes[start..].iter().position(|b| *b == quote)?;
                self.pos = end + 1;
                Some(self.text[start..end].to_string())
            }
            _ => self.ident().map(str::to_string),
        }
    }

    /// Consume a dotted name such as `public.profiles` and return its last part
    pub fn qualified_name(&mut self) -> Option<String> {
        let mut last = self.name()?;
        loop {
            let checkpoint = self.pos;
            if self.eat_char(b'.') {
                if let Some(part) = self.name() {
                    last = part;
                    continue;
                }
            }
            self.pos = checkpoint;
            return Some(last);
        }
    }
}

/// Kind of a token in the endpoint file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier, keyword or number
    Word,
    /// String literal; the token text is the raw content between the quotes
    Str,
    /// Any other single non-whitespace character
    Punct,
}

/// One token with its byte offset in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct && self.text.len() == 1 && self.text.starts_with(c)
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }
}

/// Token stream plus the offset of an unterminated string literal, if any
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pub tokens: Vec<Token<'a>>,
    pub unterminated: Option<usize>,
}

/// Tokenize comment-stripped TypeScript.
///
/// Template literals are kept raw, interpolations included, so `${NAME}`
/// placeholders can be substituted later.
pub fn tokenize(text: &str) -> Tokens<'_> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut unterminated = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            i += 1;
        } else if Dialect::TypeScript.is_quote(b) {
            match scan_string(bytes, i, Dialect::TypeScript) {
                Some(end) => {
                    tokens.push(Token {
                        kind: TokenKind::Str,
                        text: &text[i + 1..end - 1],
                        offset: i,
                    });
                    i = end;
                }
                None => {
                    unterminated = Some(i);
                    break;
                }
            }
        } else if is_ident_byte(b) {
            let start = i;
            while i < bytes.len() && is_ident_byte(bytes[i]) {
                i += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Word,
                text: &text[start..i],
                offset: start,
            });
        } else {
            let width = text[i..].chars().next().map_or(1, char::len_utf8);
            tokens.push(Token {
                kind: TokenKind::Punct,
                text: &text[i..i + width],
                offset: i,
            });
            i += width;
        }
    }

    Tokens {
        tokens,
        unterminated,
    }
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod tests;
