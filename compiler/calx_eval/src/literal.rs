//! Literal token -> value conversion.

use calx_ir::Token;
use calx_value::errors::invalid_literal;
use calx_value::{EvalResult, Value};

/// Converts literal tokens into values when the evaluation tree is built.
///
/// String tokens arrive with escapes already decoded; number tokens carry
/// their source text (`12`, `1.5e3`, `0xFF`).
pub trait LiteralParser: Send + Sync {
    fn parse_number(&self, token: &Token) -> EvalResult;

    fn parse_string(&self, token: &Token) -> EvalResult {
        Ok(Value::string(token.text.as_str()))
    }
}

/// Numbers as `f64`; hexadecimal literals as unsigned 64-bit integers.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardLiterals;

impl LiteralParser for StandardLiterals {
    #[expect(
        clippy::cast_precision_loss,
        reason = "hex literals above 2^53 round the same way decimal ones do"
    )]
    fn parse_number(&self, token: &Token) -> EvalResult {
        let text = token.text.as_str();
        let hex = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"));
        let number = match hex {
            Some(digits) => u64::from_str_radix(digits, 16)
                .map(|n| n as f64)
                .map_err(|e| invalid_literal(text, e.to_string()))?,
            None => text
                .parse::<f64>()
                .map_err(|e| invalid_literal(text, e.to_string()))?,
        };
        Ok(Value::Number(number))
    }
}
