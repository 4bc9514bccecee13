//! Token kind sets for context-sensitive checks.
//!
//! The tokenizer decides what a character means from the kind of the
//! previously emitted token. Those decisions are expressed as membership
//! tests against the named sets below.

use bitflags::bitflags;

bitflags! {
    /// A set of [`TokenKind`](crate::TokenKind)s.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct KindSet: u16 {
        const NUMBER_LITERAL = 1 << 0;
        const STRING_LITERAL = 1 << 1;
        const VARIABLE_OR_CONSTANT = 1 << 2;
        const PREFIX_OPERATOR = 1 << 3;
        const INFIX_OPERATOR = 1 << 4;
        const POSTFIX_OPERATOR = 1 << 5;
        const FUNCTION = 1 << 6;
        const BRACE_OPEN = 1 << 7;
        const BRACE_CLOSE = 1 << 8;
        const ARRAY_OPEN = 1 << 9;
        const ARRAY_CLOSE = 1 << 10;
        const COMMA = 1 << 11;
        const STRUCTURE_SEPARATOR = 1 << 12;

        /// Prefix, infix and postfix operators.
        const OPERATORS = Self::PREFIX_OPERATOR.bits()
            | Self::INFIX_OPERATOR.bits()
            | Self::POSTFIX_OPERATOR.bits();

        /// Tokens after which a prefix operator may appear
        /// (start of input is checked separately).
        const BEFORE_PREFIX = Self::BRACE_OPEN.bits()
            | Self::INFIX_OPERATOR.bits()
            | Self::COMMA.bits()
            | Self::PREFIX_OPERATOR.bits()
            | Self::ARRAY_OPEN.bits();

        /// Tokens that complete an operand: postfix operators may follow them.
        const BEFORE_POSTFIX = Self::BRACE_CLOSE.bits()
            | Self::VARIABLE_OR_CONSTANT.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::STRING_LITERAL.bits()
            | Self::ARRAY_CLOSE.bits()
            | Self::POSTFIX_OPERATOR.bits();

        /// Tokens after which an infix operator may appear.
        const BEFORE_INFIX = Self::BRACE_CLOSE.bits()
            | Self::VARIABLE_OR_CONSTANT.bits()
            | Self::STRING_LITERAL.bits()
            | Self::POSTFIX_OPERATOR.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::ARRAY_CLOSE.bits();

        /// Tokens that can own an index (`x[..]`) or a field (`x.name`).
        const INDEX_OWNERS = Self::BRACE_CLOSE.bits()
            | Self::VARIABLE_OR_CONSTANT.bits()
            | Self::ARRAY_CLOSE.bits()
            | Self::STRING_LITERAL.bits();

        /// Tokens that leave an index expression unfinished, so `]` may
        /// not follow them.
        const OPEN_ENDED = Self::BRACE_OPEN.bits()
            | Self::INFIX_OPERATOR.bits()
            | Self::PREFIX_OPERATOR.bits()
            | Self::FUNCTION.bits()
            | Self::COMMA.bits()
            | Self::ARRAY_OPEN.bits();

        /// Tokens that may not directly follow an infix operator.
        const AFTER_INFIX_FORBIDDEN = Self::INFIX_OPERATOR.bits()
            | Self::BRACE_CLOSE.bits()
            | Self::COMMA.bits();
    }
}
