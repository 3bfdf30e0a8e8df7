//! Base tokenization
//!
//!     The scanner is a vanilla logos lexer with exactly two token shapes. A
//!     `Break` groups a run of one or more newlines together with the leading
//!     whitespace of the line that follows it, so the indentation tracker can
//!     read both the break count and the next line's indentation from a single
//!     token. A `Content` token is the remainder of one source line.
//!
//!     Keeping the scanner this small pushes all indentation intelligence into
//!     the tracker stage, which is where the stateful work belongs.

use logos::Logos;

/// Raw tokens produced by the scanner.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum RawToken {
    /// One or more line breaks, each optionally followed by indentation.
    /// The whitespace after the final newline is the next line's indent.
    #[regex(r"(\r?\n[ \t]*)+")]
    Break,

    /// The content of a single line, excluding the terminating newline.
    #[regex(r"[^\r\n]+")]
    Content,
}

/// Scan source text into `(token, slice)` pairs.
///
/// Stray carriage returns that are not part of a `\r\n` pair have no token
/// shape and are dropped.
pub fn scan(source: &str) -> Vec<(RawToken, String)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.slice().to_string()));
        }
    }
    tokens
}
