//! Stack growth for deep object graphs.
//!
//! Measurement recurses once per reference hop, so a long linked chain can
//! exceed the thread's stack. On native targets the walker grows the stack
//! on demand; `wasm32` manages its own stack and recursion runs directly.

/// Grow when less than this remains (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
