//! The [`report`](self) module emits the diagnostics of failed matchers.
//!
//! `murf` prints its "No suitable expectation found" report to stdout and
//! renders each expectation before the matcher is evaluated. The diagnostic of
//! a failed assertion is therefore written to stdout by the matcher itself, so
//! it ends up next to murf's report.
//!
//! Use [`capture`] to collect the lines emitted on the current thread.

use std::cell::RefCell;

/// Write the passed diagnostic `line` to stdout and to the active capture of
/// the current thread, if any.
pub fn emit<S>(line: S)
where
    S: Into<String>,
{
    let line = line.into();

    println!("{line}");

    CAPTURE.with(|cell| {
        if let Some(lines) = cell.borrow_mut().as_mut() {
            lines.push(line);
        }
    });
}

/// Execute `f` and return its result together with all lines that were
/// emitted on the current thread in the meantime.
///
/// Captures may be nested. Lines emitted inside a nested capture are also
/// passed to the enclosing one.
pub fn capture<R, F>(f: F) -> (R, Vec<String>)
where
    F: FnOnce() -> R,
{
    let parent = CAPTURE.with(|cell| cell.borrow_mut().replace(Vec::new()));
    let mut restore = Restore {
        parent: Some(parent),
    };

    let ret = f();

    let lines = restore.restore();

    (ret, lines)
}

/// Restores the capture of the enclosing scope, also when `f` panics.
struct Restore {
    parent: Option<Option<Vec<String>>>,
}

impl Restore {
    fn restore(&mut self) -> Vec<String> {
        let Some(parent) = self.parent.take() else {
            return Vec::new();
        };

        CAPTURE.with(|cell| {
            let mut cell = cell.borrow_mut();
            let lines = cell.take().unwrap_or_default();

            *cell = parent.map(|mut parent| {
                parent.extend(lines.iter().cloned());

                parent
            });

            lines
        })
    }
}

impl Drop for Restore {
    fn drop(&mut self) {
        self.restore();
    }
}

thread_local! {
    static CAPTURE: RefCell<Option<Vec<String>>> = RefCell::new(None);
}
