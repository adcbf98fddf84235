//! Fatal checks and build-mode dependent assertions
//!
//! - [`check`] / [`check!`](crate::check!): halt the process with call-site
//!   coordinates when an invariant does not hold
//! - [`pedantic!`](crate::pedantic!): guard expensive invariant predicates so
//!   they vanish from release builds
//! - [`unreachable_path!`](crate::unreachable_path!): mark code that control
//!   flow can never reach
//!
//! Pedantic builds are debug builds, or any build with the `strict-checks`
//! feature enabled.

use colored::*;
use std::cell::Cell;
use std::io::Write;
use crate::log::{self, LogSeverity};

/// Whether pedantic checks are compiled in
pub const PEDANTIC_ENABLED: bool = cfg!(any(debug_assertions, feature = "strict-checks"));

thread_local! {
    /// Set once this thread has started reporting a failed check
    static FAILING: Cell<bool> = const { Cell::new(false) };
}

/// Fatal check with explicit call-site coordinates
///
/// Returns normally when `condition` holds. Otherwise reports
/// `file:line: function: message` on standard error and aborts the process;
/// control never comes back to the caller.
///
/// Prefer the [`check!`](crate::check!) macro, which fills in the coordinates.
#[inline]
pub fn check(condition: bool, file: &'static str, line: u32, function: &str, message: &str) {
    if !condition {
        check_failed(file, line, function, message);
    }
}

/// Failing half of [`check`]: report and abort
///
/// No destructors run and no cleanup happens after this is called.
#[cold]
#[inline(never)]
pub fn check_failed(file: &'static str, line: u32, function: &str, message: &str) -> ! {
    {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{} {}:{}: {}: {}",
            "Assertion failed:".red().bold(),
            file,
            line,
            function,
            message
        );
        let _ = stderr.flush();
    }

    // A check failing inside a custom logger must not recurse into it
    let first_failure = !FAILING.with(|failing| failing.replace(true));
    if first_failure {
        log::try_log_detailed_custom(
            LogSeverity::Error,
            "galaxy3d::check",
            format!("{}: {}", function, message),
            file,
            line,
        );
    }

    std::process::abort()
}

/// Fully qualified path of the enclosing function, as a `&'static str`
///
/// Closure frames are stripped, so a check inside a closure reports the
/// function that defines the closure.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Fatal check at the current call site
///
/// Evaluates the condition once. On failure the message (a format string
/// with arguments, or the stringified condition when omitted) is reported with
/// `file!()`, `line!()` and the enclosing function, then the process aborts.
/// The message is only formatted on the failing path.
///
/// # Example
///
/// ```no_run
/// let frame_index = 1usize;
/// galaxy_3d_core::check!(frame_index < 3, "frame index {} out of flight range", frame_index);
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::check::check_failed(
                file!(),
                line!(),
                $crate::function_name!(),
                concat!("check failed: ", stringify!($cond)),
            )
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::check::check_failed(
                file!(),
                line!(),
                $crate::function_name!(),
                &format!($($arg)+),
            )
        }
    };
}

/// Debug-only predicate
///
/// In pedantic builds this is the predicate itself. Otherwise it is the
/// constant `false` and the predicate is never evaluated, so the guarded
/// branch folds away.
///
/// # Example
///
/// ```no_run
/// # let (index, capacity) = (3u32, 8usize);
/// if galaxy_3d_core::pedantic!(index as usize >= capacity) {
///     galaxy_3d_core::check::check_failed(file!(), line!(), "bind_slot", "slot out of range");
/// }
/// ```
#[macro_export]
macro_rules! pedantic {
    ($cond:expr) => {
        ($crate::check::PEDANTIC_ENABLED && ($cond))
    };
}

/// Marks a statement that control flow cannot reach
///
/// In pedantic builds reaching it is a fatal check failure. Otherwise it
/// lowers to [`core::hint::unreachable_unchecked`].
///
/// # Safety
///
/// Outside pedantic builds, reaching this macro is undefined behavior. Only
/// use it where an invariant maintained by the surrounding code rules the
/// path out.
#[macro_export]
macro_rules! unreachable_path {
    () => {{
        if $crate::check::PEDANTIC_ENABLED {
            $crate::check::check_failed(
                file!(),
                line!(),
                $crate::function_name!(),
                "entered unreachable code",
            )
        } else {
            // SAFETY: the caller guarantees this path is never taken
            unsafe { ::core::hint::unreachable_unchecked() }
        }
    }};
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
