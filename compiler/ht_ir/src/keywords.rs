//! Reserved tag names.

/// Declaration keyword: `<Let id="x" value=... />`.
pub const LET: &str = "Let";

/// Conditional keyword: `<If condition=...> ... </If>`.
pub const IF: &str = "If";

/// All reserved tag names.
pub const KEYWORDS: [&str; 2] = [LET, IF];

/// Returns `true` if `name` is a reserved tag name.
#[inline]
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}
