//! Calx Std - the default catalog.
//!
//! Every entry is an ordinary plug-in built on the public
//! [`Evaluable`](calx_dispatch::Evaluable) contract; nothing here is known
//! to the engine. [`standard_configuration`] returns a fresh
//! [`Configuration`] on every call, ready to be extended with the
//! `with_*` setters.
//!
//! | operators                         | precedence |
//! |-----------------------------------|------------|
//! | `\|\|`                            | 2          |
//! | `&&`                              | 4          |
//! | `==` `!=` `<>`                    | 7          |
//! | `<` `<=` `>` `>=`                 | 10         |
//! | `+` `-`                           | 20         |
//! | `*` `/` `%`                       | 30         |
//! | `^` (right-associative)           | 40         |
//! | prefix `-` `+` `!`                | 60         |

mod access;
mod arithmetic;
mod compare;
mod constants;
mod functions;
mod logic;

use std::sync::Once;

use calx_dispatch::TypedEvaluableByName;
use calx_eval::Configuration;
use calx_ir::operator::precedence;
use calx_ir::{OperatorMap, OperatorMapping};
use calx_value::Value;

pub use access::{array_access, property_access};
pub use constants::standard_constants;

/// Operator text -> evaluable name.
pub fn standard_operators() -> OperatorMap {
    OperatorMap::new()
        .with_prefix("-", OperatorMapping::right(precedence::UNARY, "neg"))
        .with_prefix("+", OperatorMapping::right(precedence::UNARY, "plus"))
        .with_prefix("!", OperatorMapping::right(precedence::UNARY, "not"))
        .with_infix("||", OperatorMapping::left(precedence::OR, "or"))
        .with_infix("&&", OperatorMapping::left(precedence::AND, "and"))
        .with_infix("==", OperatorMapping::left(precedence::EQUALITY, "eq"))
        .with_infix("!=", OperatorMapping::left(precedence::EQUALITY, "ne"))
        .with_infix("<>", OperatorMapping::left(precedence::EQUALITY, "ne"))
        .with_infix("<", OperatorMapping::left(precedence::COMPARISON, "lt"))
        .with_infix("<=", OperatorMapping::left(precedence::COMPARISON, "le"))
        .with_infix(">", OperatorMapping::left(precedence::COMPARISON, "gt"))
        .with_infix(">=", OperatorMapping::left(precedence::COMPARISON, "ge"))
        .with_infix("+", OperatorMapping::left(precedence::ADDITIVE, "add"))
        .with_infix("-", OperatorMapping::left(precedence::ADDITIVE, "sub"))
        .with_infix("*", OperatorMapping::left(precedence::MULTIPLICATIVE, "mul"))
        .with_infix("/", OperatorMapping::left(precedence::MULTIPLICATIVE, "div"))
        .with_infix("%", OperatorMapping::left(precedence::MULTIPLICATIVE, "mod"))
        .with_infix("^", OperatorMapping::right(precedence::POWER, "pow"))
}

/// Operator targets and functions in one registry.
pub fn standard_evaluables() -> TypedEvaluableByName {
    let mut registry = TypedEvaluableByName::new();
    arithmetic::register(&mut registry);
    compare::register(&mut registry);
    logic::register(&mut registry);
    functions::register(&mut registry);
    registry
}

pub fn standard_configuration() -> Configuration {
    let mut config = Configuration::new()
        .with_operators(standard_operators())
        .with_evaluables(standard_evaluables())
        .with_array_access(array_access())
        .with_property_access(property_access());
    config.constants = standard_constants();
    config
}

/// Numeric argument of an overload whose signature declared a number.
#[inline]
pub(crate) fn number(value: &Value) -> f64 {
    value.as_number().unwrap_or(f64::NAN)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `CALX_LOG`
/// (e.g. `CALX_LOG=calx_eval=trace`).
///
/// Does nothing when `CALX_LOG` is unset; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if let Ok(directives) = std::env::var("CALX_LOG") {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::new(directives))
                .try_init();
        }
    });
}
