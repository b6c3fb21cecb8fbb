//! Native stack guard for recursive evaluation.

/// Run `f`, growing the native stack first if less than the red zone remains.
///
/// Tag bodies, parameters and nested expressions all recurse through
/// `Interpreter::evaluate`, so tree depth is bounded only by the parser.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack segment to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
