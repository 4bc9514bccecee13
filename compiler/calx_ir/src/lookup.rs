//! Function name lookup used by the tokenizer.

use rustc_hash::FxHashSet;

/// Answers whether a name is a registered function.
///
/// The tokenizer only needs to know *that* a function exists; resolving it
/// to an implementation happens when the evaluation tree is built.
pub trait FunctionLookup {
    fn has_function(&self, name: &str) -> bool;
}

impl FunctionLookup for FxHashSet<String> {
    fn has_function(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl FunctionLookup for [&str] {
    fn has_function(&self, name: &str) -> bool {
        self.contains(&name)
    }
}

impl<const N: usize> FunctionLookup for [&str; N] {
    fn has_function(&self, name: &str) -> bool {
        self.contains(&name)
    }
}
