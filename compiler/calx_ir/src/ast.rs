//! Abstract syntax tree produced by the parser.
//!
//! The tree is deliberately untyped: a node is its token plus ordered
//! children, and the token kind says how to read the children.
//!
//! | token kind            | children                    |
//! |-----------------------|-----------------------------|
//! | literal / variable    | none                        |
//! | prefix / postfix op   | operand                     |
//! | infix op              | left, right                 |
//! | function              | arguments, in order         |
//! | array open (`[`)      | target, index               |
//! | structure separator   | target, field name (leaf)   |
//!
//! Trees can be as deep as the input is long, so dropping and printing
//! a tree work from a heap worklist instead of recursing.

use std::fmt;

use crate::{Token, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstNode {
    pub token: Token,
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn leaf(token: Token) -> Self {
        AstNode {
            token,
            children: Vec::new(),
        }
    }

    pub fn new(token: Token, children: Vec<AstNode>) -> Self {
        AstNode { token, children }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

enum Piece<'a> {
    Node(&'a AstNode),
    Space,
    Close,
}

/// S-expression rendering: `2+3*4` prints as `(+ 2 (* 3 4))`.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            let node = match piece {
                Piece::Node(node) => node,
                Piece::Space => {
                    f.write_str(" ")?;
                    continue;
                }
                Piece::Close => {
                    f.write_str(")")?;
                    continue;
                }
            };
            if node.children.is_empty() && node.token.kind != TokenKind::Function {
                write!(f, "{}", node.token)?;
                continue;
            }
            let head = match node.token.kind {
                TokenKind::ArrayOpen => "[]",
                TokenKind::StructureSeparator => ".",
                _ => node.token.text.as_str(),
            };
            write!(f, "({head}")?;
            pending.push(Piece::Close);
            for child in node.children.iter().rev() {
                pending.push(Piece::Node(child));
                pending.push(Piece::Space);
            }
        }
        Ok(())
    }
}
