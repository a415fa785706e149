/* Brace-balanced scanner recovering struct definitions from Solidity source
 *
 * This is not a Solidity parser. It tokenizes just enough (identifiers,
 * punctuation, comments and string literals) to find every
 * `struct <Name> { ... }` and split its body into member statements. */

use sol_types::{Field, FieldModifier, SkippedMember, StructDef};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Ident,
    Number,
    Str,
    Punct(char),
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
    line: usize,
}

/* Result of scanning one source text */
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scan {
    /* Complete definitions, in file order */
    pub structs: Vec<StructDef>,
    /* Definitions whose body never closes */
    pub unterminated: Vec<UnterminatedStruct>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedStruct {
    pub name: String,
    pub line: usize,
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        if self.bytes[self.pos] == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek(0) {
            match (c, self.peek(1)) {
                (b'/', Some(b'/')) => {
                    while self.peek(0).is_some_and(|c| c != b'\n') {
                        self.bump();
                    }
                }
                (b'/', Some(b'*')) => {
                    self.bump();
                    self.bump();
                    while self.pos < self.bytes.len() && !(self.peek(0) == Some(b'*') && self.peek(1) == Some(b'/')) {
                        self.bump();
                    }
                    if self.pos < self.bytes.len() {
                        self.bump();
                        self.bump();
                    }
                }
                (c, _) if c.is_ascii_whitespace() => self.bump(),
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_trivia();
        let c = self.peek(0)?;
        let start = self.pos;
        let line = self.line;

        let kind = if is_ident_start(c) {
            while self.peek(0).is_some_and(is_ident_continue) {
                self.bump();
            }
            TokenKind::Ident
        } else if c.is_ascii_digit() {
            while self.peek(0).is_some_and(|c| is_ident_continue(c) || c == b'.') {
                self.bump();
            }
            TokenKind::Number
        } else if c == b'"' || c == b'\'' {
            self.bump();
            while let Some(next) = self.peek(0) {
                if next == b'\\' && self.peek(1).is_some() {
                    self.bump();
                } else if next == c || next == b'\n' {
                    break;
                }
                self.bump();
            }
            if self.peek(0) == Some(c) {
                self.bump();
            }
            TokenKind::Str
        } else {
            /* advance a whole UTF-8 character so slicing stays on char boundaries */
            let ch = self.src[start..].chars().next()?;
            for _ in 0..ch.len_utf8() {
                self.bump();
            }
            TokenKind::Punct(ch)
        };

        Some(Token {
            kind,
            start,
            end: self.pos,
            line,
        })
    }
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}

fn tokenize(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    std::iter::from_fn(|| lexer.next_token()).collect()
}

/* Find every struct definition in `source`, in file order */
pub fn scan_structs(source: &str) -> Scan {
    let tokens = tokenize(source);
    let text = |t: &Token| &source[t.start..t.end];
    let mut scan = Scan::default();

    let mut i = 0;
    while i + 2 < tokens.len() {
        let is_header = tokens[i].kind == TokenKind::Ident
            && text(&tokens[i]) == "struct"
            && tokens[i + 1].kind == TokenKind::Ident
            && tokens[i + 2].kind == TokenKind::Punct('{');
        if !is_header {
            i += 1;
            continue;
        }

        let name = text(&tokens[i + 1]).to_string();
        let body_start = i + 3;
        match matching_brace(&tokens, body_start) {
            Some(close) => {
                let (fields, skipped) = parse_members(source, &tokens[body_start..close], &name);
                scan.structs.push(StructDef {
                    name,
                    fields,
                    span: tokens[i].start..tokens[close].end,
                    skipped,
                });
                i = close + 1;
            }
            None => {
                scan.unterminated.push(UnterminatedStruct {
                    name,
                    line: tokens[i].line,
                });
                /* keep looking inside the unclosed body */
                i = body_start;
            }
        }
    }

    scan
}

/* Index of the `}` closing the body that starts at `from` */
fn matching_brace(tokens: &[Token], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, token) in tokens[from..].iter().enumerate() {
        match token.kind {
            TokenKind::Punct('{') => depth += 1,
            TokenKind::Punct('}') => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/* Split a struct body into `;`-terminated statements and keep the ones shaped like members */
fn parse_members(source: &str, body: &[Token], struct_name: &str) -> (Vec<Field>, Vec<SkippedMember>) {
    let mut fields = Vec::new();
    let mut skipped = Vec::new();

    let mut depth = 0usize;
    let mut stmt_start = 0;
    let mut statements: Vec<&[Token]> = Vec::new();
    for (idx, token) in body.iter().enumerate() {
        match token.kind {
            TokenKind::Punct('{') => depth += 1,
            TokenKind::Punct('}') => depth = depth.saturating_sub(1),
            TokenKind::Punct(';') if depth == 0 => {
                statements.push(&body[stmt_start..idx]);
                stmt_start = idx + 1;
            }
            _ => {}
        }
    }
    /* trailing tokens without a terminator never form a member */
    let trailing = &body[stmt_start..];

    for stmt in statements {
        match member_from_tokens(source, stmt) {
            Some(field) => fields.push(field),
            None if stmt.is_empty() => {}
            None => skipped.push(skipped_member(source, stmt, true)),
        }
    }
    if !trailing.is_empty() {
        skipped.push(skipped_member(source, trailing, false));
    }

    for member in &skipped {
        debug!(struct_name, line = member.line, text = %member.text, "skipping unrecognized struct member");
    }

    (fields, skipped)
}

fn skipped_member(source: &str, stmt: &[Token], terminated: bool) -> SkippedMember {
    let first = stmt[0];
    let last = stmt[stmt.len() - 1];
    let mut text = source[first.start..last.end].to_string();
    if terminated {
        text.push(';');
    }
    SkippedMember {
        text,
        line: first.line,
    }
}

/* `<type> [ '[' ']' ] [payable] <name>` and nothing else */
fn member_from_tokens(source: &str, stmt: &[Token]) -> Option<Field> {
    let text = |t: &Token| &source[t.start..t.end];
    let (ty, mut rest) = stmt.split_first()?;
    if ty.kind != TokenKind::Ident {
        return None;
    }

    let mut is_array = false;
    if let [open, close, tail @ ..] = rest {
        if open.kind == TokenKind::Punct('[') && close.kind == TokenKind::Punct(']') {
            is_array = true;
            rest = tail;
        }
    }

    let (modifier, name) = match rest {
        [modifier, name] if text(modifier) == "payable" && modifier.kind == TokenKind::Ident => (Some(FieldModifier::Payable), name),
        [name] => (None, name),
        _ => return None,
    };
    if name.kind != TokenKind::Ident {
        return None;
    }

    Some(Field {
        base_type: text(ty).to_string(),
        is_array,
        modifier,
        name: text(name).to_string(),
    })
}
