use core::alloc::Layout;
use core::fmt;

use std::alloc::handle_alloc_error;

/// The reason a slot array could not be sized or allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity can't be represented as a power-of-two slot count.
    Overflow,
    /// The allocator refused the request.
    AllocatorErr,
}

impl AllocError {
    /// Panics with capacity overflow message.
    #[cold]
    #[inline(never)]
    pub(crate) const fn panic_overflow() -> ! {
        panic!("Allocation Error: capacity overflow")
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::Overflow => f.write_str("capacity overflow"),
            AllocError::AllocatorErr => f.write_str("memory allocation failed"),
        }
    }
}

impl std::error::Error for AllocError {}

/// Decides whether a sizing failure diverges or is handed back to the caller.
///
/// Infallible entry points (`with_capacity`, `insert`, `reserve`) run with `NoReturn`, so their
/// `Err` branches are unreachable. The `try_*` family runs with `ReturnErr`.
#[derive(Clone, Copy)]
pub(crate) enum OnError {
    NoReturn,
    ReturnErr,
}

impl OnError {
    /// Handles `Overflow` according to the current variant.
    #[must_use]
    #[inline(always)]
    pub(crate) const fn overflow(&self) -> AllocError {
        match self {
            OnError::NoReturn => AllocError::panic_overflow(),
            OnError::ReturnErr => AllocError::Overflow,
        }
    }

    /// Handles `AllocatorErr` for the slot array `layout` according to the current variant.
    #[must_use]
    #[inline(always)]
    pub(crate) fn alloc_err(&self, layout: Layout) -> AllocError {
        match self {
            OnError::NoReturn => handle_alloc_error(layout),
            OnError::ReturnErr => AllocError::AllocatorErr,
        }
    }
}
