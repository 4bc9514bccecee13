//! Operator tables.
//!
//! An operator is pure syntax: the table binds its text to a precedence, an
//! associativity, and the *name* of the evaluable that implements it. The
//! name is resolved later against the dispatch registry.
//!
//! Tables compose with [`OperatorTable::and_then`]: a custom table layered
//! over a base table wins on key collisions and passes everything else
//! through, without mutating either table.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Default precedence levels, lowest binding first.
pub mod precedence {
    pub const OR: u8 = 2;
    pub const AND: u8 = 4;
    pub const EQUALITY: u8 = 7;
    pub const COMPARISON: u8 = 10;
    pub const ADDITIVE: u8 = 20;
    pub const MULTIPLICATIVE: u8 = 30;
    pub const POWER: u8 = 40;
    pub const UNARY: u8 = 60;
}

/// Position of an operator relative to its operand(s).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

impl Fixity {
    /// Operand count of an operator with this fixity.
    pub const fn arity(self) -> usize {
        match self {
            Fixity::Prefix | Fixity::Postfix => 1,
            Fixity::Infix => 2,
        }
    }

    pub const fn of(kind: TokenKind) -> Option<Fixity> {
        match kind {
            TokenKind::PrefixOperator => Some(Fixity::Prefix),
            TokenKind::InfixOperator => Some(Fixity::Infix),
            TokenKind::PostfixOperator => Some(Fixity::Postfix),
            _ => None,
        }
    }
}

/// Binds operator text to an evaluable name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorMapping {
    pub precedence: u8,
    pub left_associative: bool,
    /// Name of the evaluable implementing the operator.
    pub target: String,
}

impl OperatorMapping {
    pub fn left(precedence: u8, target: impl Into<String>) -> Self {
        OperatorMapping {
            precedence,
            left_associative: true,
            target: target.into(),
        }
    }

    pub fn right(precedence: u8, target: impl Into<String>) -> Self {
        OperatorMapping {
            precedence,
            left_associative: false,
            target: target.into(),
        }
    }
}

/// Operator text -> mapping, with an optional fallback layer.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    entries: FxHashMap<String, OperatorMapping>,
    fallback: Option<Arc<OperatorTable>>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an entry in this layer.
    #[must_use]
    pub fn with(mut self, text: impl Into<String>, mapping: OperatorMapping) -> Self {
        self.entries.insert(text.into(), mapping);
        self
    }

    /// Look up `text`, consulting this layer before the fallback.
    pub fn get(&self, text: &str) -> Option<&OperatorMapping> {
        self.entries
            .get(text)
            .or_else(|| self.fallback.as_deref().and_then(|base| base.get(text)))
    }

    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Layer `self` over `fallback`.
    ///
    /// If `self` already has a fallback, `fallback` goes underneath it, so
    /// `a.and_then(b).and_then(c)` searches `a`, then `b`, then `c`.
    #[must_use]
    pub fn and_then(mut self, fallback: OperatorTable) -> OperatorTable {
        let base = match self.fallback.take() {
            Some(existing) => Arc::unwrap_or_clone(existing).and_then(fallback),
            None => fallback,
        };
        self.fallback = Some(Arc::new(base));
        self
    }

    /// All visible operator texts, override layer first.
    pub fn texts(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        out.sort_unstable();
        if let Some(base) = self.fallback.as_deref() {
            for text in base.texts() {
                if !self.entries.contains_key(text) {
                    out.push(text);
                }
            }
        }
        out
    }
}

/// The three independent operator tables.
#[derive(Clone, Debug, Default)]
pub struct OperatorMap {
    pub prefix: OperatorTable,
    pub infix: OperatorTable,
    pub postfix: OperatorTable,
}

impl OperatorMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix(mut self, text: impl Into<String>, mapping: OperatorMapping) -> Self {
        self.prefix = self.prefix.with(text, mapping);
        self
    }

    #[must_use]
    pub fn with_infix(mut self, text: impl Into<String>, mapping: OperatorMapping) -> Self {
        self.infix = self.infix.with(text, mapping);
        self
    }

    #[must_use]
    pub fn with_postfix(mut self, text: impl Into<String>, mapping: OperatorMapping) -> Self {
        self.postfix = self.postfix.with(text, mapping);
        self
    }

    pub fn table(&self, fixity: Fixity) -> &OperatorTable {
        match fixity {
            Fixity::Prefix => &self.prefix,
            Fixity::Infix => &self.infix,
            Fixity::Postfix => &self.postfix,
        }
    }

    pub fn get(&self, fixity: Fixity, text: &str) -> Option<&OperatorMapping> {
        self.table(fixity).get(text)
    }

    /// Mapping for an operator token, if the token is an operator.
    pub fn for_kind(&self, kind: TokenKind, text: &str) -> Option<&OperatorMapping> {
        Fixity::of(kind).and_then(|fixity| self.get(fixity, text))
    }

    /// Layer each table of `self` over the matching table of `fallback`.
    #[must_use]
    pub fn and_then(self, fallback: OperatorMap) -> OperatorMap {
        OperatorMap {
            prefix: self.prefix.and_then(fallback.prefix),
            infix: self.infix.and_then(fallback.infix),
            postfix: self.postfix.and_then(fallback.postfix),
        }
    }
}

#[cfg(test)]
mod tests;
