//! `target[index]` and `target.name`.

use calx_dispatch::{Parameter, Signature, TypedEvaluable, TypedEvaluables, Validator};
use calx_value::errors::{field_not_found, index_out_of_bounds};

use crate::number;

/// Indexes arrays with a non-negative integer.
pub fn array_access() -> TypedEvaluables {
    let index = Parameter::number().validated(Validator::integer().and(Validator::non_negative()));
    TypedEvaluables::new().with(TypedEvaluable::new(
        Signature::new(vec![Parameter::array(), index]),
        |_, _, args| {
            let items = args[0].as_array().unwrap_or_default();
            let index = number(&args[1]);
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "validated as a non-negative integer"
            )]
            let position = index as usize;
            items
                .get(position)
                .cloned()
                .ok_or_else(|| index_out_of_bounds(index, items.len()))
        },
    ))
}

/// Reads a field of a structure.
pub fn property_access() -> TypedEvaluables {
    TypedEvaluables::new().with(TypedEvaluable::new(
        Signature::new(vec![Parameter::structure(), Parameter::string()]),
        |_, _, args| {
            let field = args[1].as_str().unwrap_or_default();
            args[0]
                .as_structure()
                .and_then(|fields| fields.get(field))
                .cloned()
                .ok_or_else(|| field_not_found(field))
        },
    ))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
