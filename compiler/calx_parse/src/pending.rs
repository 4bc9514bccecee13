//! Entries of the parser's pending stack.

use calx_ir::{Fixity, Token};

/// Something waiting on the pending stack for its operands.
#[derive(Debug)]
pub(crate) enum Pending {
    Operator {
        token: Token,
        fixity: Fixity,
        precedence: u8,
    },
    /// `target.field`, reduced once the field name is on the output stack.
    Structure(Token),
    /// Open `(` of a call. `depth` is the output stack height at the `(`.
    Call {
        function: Token,
        depth: usize,
        commas: usize,
    },
    /// Open `(` of a parenthesized sub-expression.
    Group { open: Token, depth: usize },
    /// Open `[` of an index. The target sits just below `depth`.
    Index { open: Token, depth: usize },
}

impl Pending {
    /// Output stack height this entry's contents start at, for the entries
    /// that delimit a sub-expression.
    pub(crate) fn depth(&self) -> Option<usize> {
        match self {
            Pending::Call { depth, .. }
            | Pending::Group { depth, .. }
            | Pending::Index { depth, .. } => Some(*depth),
            Pending::Operator { .. } | Pending::Structure(_) => None,
        }
    }

    /// Operators and structure accesses are reduced into nodes; delimiters
    /// are only closed explicitly.
    pub(crate) fn is_reducible(&self) -> bool {
        self.depth().is_none()
    }

    pub(crate) fn token(&self) -> &Token {
        match self {
            Pending::Operator { token, .. } | Pending::Structure(token) => token,
            Pending::Call { function, .. } => function,
            Pending::Group { open, .. } | Pending::Index { open, .. } => open,
        }
    }
}
