//! Stack safety for deep recursion.
//!
//! Kiln programs are trees of arbitrary depth and functions may recurse
//! without bound, so both the deserializer and the evaluator recurse on the
//! host stack. Wrapping each recursive step in [`ensure_sufficient_stack`]
//! moves the work onto a freshly allocated segment when the current one runs
//! low.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call.
//!
//! Growth is bounded only by available memory. Callers that need a hard
//! bound on user recursion configure a call-depth limit in `kiln_eval`.

/// Minimum stack space to keep available (128KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// ```text
/// fn eval(&mut self, expr: &Expr) -> Result<i64, EvalError> {
///     ensure_sufficient_stack(|| match expr {
///         // ... recursive evaluation ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
