//! Optional grammar features.

/// Switches for the parts of the grammar a host may turn off.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SyntaxOptions {
    /// Allow `expr[index]`.
    pub arrays_allowed: bool,
    /// Allow `expr.field`.
    pub structures_allowed: bool,
    /// Read `2x` and `(a)(b)` as multiplications instead of rejecting them.
    pub implicit_multiplication_allowed: bool,
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        SyntaxOptions {
            arrays_allowed: true,
            structures_allowed: true,
            implicit_multiplication_allowed: true,
        }
    }
}

impl SyntaxOptions {
    /// Everything optional switched off.
    pub const fn strict() -> Self {
        SyntaxOptions {
            arrays_allowed: false,
            structures_allowed: false,
            implicit_multiplication_allowed: false,
        }
    }
}
