//! Scope nesting policy.

/// How a block's scope relates to the scope it was opened in.
///
/// Every `OpenTag` evaluates its children in a fresh scope that is dropped
/// when the tag finishes. The mode decides what names that scope can see.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScopingMode {
    /// Block scopes see every enclosing scope. Declaring a name that is
    /// already visible is rejected, so a block cannot shadow an outer binding.
    #[default]
    Lexical,
    /// Block scopes see only their own bindings. Call names still fall back to
    /// the global scope so native functions stay reachable.
    Isolated,
}

impl ScopingMode {
    /// Whether a new block scope can read its parent's bindings.
    #[inline]
    pub fn links_parent(self) -> bool {
        matches!(self, Self::Lexical)
    }
}
