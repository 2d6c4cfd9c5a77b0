//! Stack headroom for the recursive type walks.
//!
//! Rendering, concreteness checks and cloning recurse once per nesting
//! level of a type. Deeply nested types (long tuple or reference chains
//! produced by macros) would otherwise overflow the main thread's stack.

/// Remaining stack below which we switch to a fresh segment.
const RED_ZONE: usize = 128 * 1024;

/// Size of each additional stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn with_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn with_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
