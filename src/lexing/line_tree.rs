//! Line tree construction
//!
//!     Folds the flat token stream into a tree: lines stay lines, and each
//!     Indent/Dedent pair becomes one nested block. The grammar walks this
//!     tree instead of counting indent tokens itself, which keeps the
//!     per-convention rules declarative.

use super::indentation::Token;

/// One content line together with the break count that terminated it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub text: String,
    /// Newlines between this line and the next content; `> 1` means a blank
    /// line separated them.
    pub breaks: usize,
}

/// A node of the line tree: a line, or a block of deeper-indented nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LineNode {
    Line(SourceLine),
    Block(Vec<LineNode>),
}

impl LineNode {
    /// The line at this node, if it is one.
    pub fn as_line(&self) -> Option<&SourceLine> {
        match self {
            LineNode::Line(line) => Some(line),
            LineNode::Block(_) => None,
        }
    }
}

/// Fold a tracked token stream into a tree of lines and blocks.
pub fn build_line_tree(tokens: Vec<Token>) -> Vec<LineNode> {
    let mut stack: Vec<Vec<LineNode>> = vec![Vec::new()];
    let mut pending: Option<String> = None;

    let flush = |stack: &mut Vec<Vec<LineNode>>, pending: &mut Option<String>, breaks: usize| {
        if let (Some(text), Some(level)) = (pending.take(), stack.last_mut()) {
            level.push(LineNode::Line(SourceLine { text, breaks }));
        }
    };

    for token in tokens {
        match token {
            Token::Line(text) => {
                flush(&mut stack, &mut pending, 1);
                pending = Some(text);
            }
            Token::Newline { breaks } => flush(&mut stack, &mut pending, breaks),
            Token::Indent => {
                flush(&mut stack, &mut pending, 1);
                stack.push(Vec::new());
            }
            Token::Dedent => {
                flush(&mut stack, &mut pending, 1);
                if stack.len() > 1 {
                    let block = stack.pop().unwrap_or_default();
                    if let Some(level) = stack.last_mut() {
                        level.push(LineNode::Block(block));
                    }
                }
            }
        }
    }
    flush(&mut stack, &mut pending, 1);

    while stack.len() > 1 {
        let block = stack.pop().unwrap_or_default();
        if let Some(level) = stack.last_mut() {
            level.push(LineNode::Block(block));
        }
    }

    stack.pop().unwrap_or_default()
}
