//! Stack growth for deep recursion.
//!
//! The evaluator recurses once per syntax-tree level and once per method
//! call, and `require` re-enters the whole pipeline for every loaded unit.
//! Garnet imposes no recursion limit of its own, so the recursive entry
//! points (parser rules, node evaluation, unit loading) wrap themselves in
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! overflowing the initial thread stack.
//!
//! # Configuration
//!
//! - **Red zone**: 100KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.

/// Ensure sufficient stack space is available before executing `f`.
///
/// On native targets this uses `stacker::maybe_grow`; on WASM the closure
/// is called directly.
///
/// ```text
/// fn eval_node(&mut self, node: &Node, context: &Value) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_node_inner(node, context))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
