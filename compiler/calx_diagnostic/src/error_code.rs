use std::fmt;

/// Error codes for all calx diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Tokenizer errors
/// - E1xxx: Parser errors
/// - E2xxx: Tree construction (name resolution) errors
/// - E3xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tokenizer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unknown escape sequence
    E0002,
    /// Malformed number literal
    E0003,
    /// Undefined operator
    E0004,
    /// Undefined function
    E0005,
    /// Missing operator between operands
    E0006,
    /// Unexpected token after infix operator
    E0007,
    /// Unbalanced parentheses
    E0008,
    /// Misplaced or unbalanced array brackets
    E0009,
    /// Misplaced structure separator
    E0010,
    /// Source too large to address
    E0011,

    // Parser Errors (E1xxx)
    /// Structure separator not followed by a field name
    E1001,
    /// Comma outside of a function call
    E1002,
    /// Operator is missing an operand
    E1003,
    /// Function call is missing an argument
    E1004,
    /// Empty parentheses or brackets
    E1005,
    /// Empty expression
    E1006,
    /// Operands not joined by an operator
    E1007,

    // Tree Construction Errors (E2xxx)
    /// Operator has no implementation
    E2001,
    /// Function has no implementation
    E2002,
    /// No overload accepts the argument count
    E2003,
    /// No accessor for indexing or field access
    E2004,
    /// Literal could not be converted to a value
    E2005,

    // Evaluation Errors (E3xxx)
    /// Variable not found
    E3001,
    /// No overload accepts the arguments
    E3002,
    /// Division by zero
    E3003,
    /// Index out of bounds
    E3004,
    /// Structure has no such field
    E3005,
    /// Error raised by an evaluable
    E3006,
}

impl ErrorCode {
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_compile_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Tokenizer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
            ErrorCode::E0011 => "E0011",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            // Tree construction
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            // Evaluation
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
