//! The [`quiet`](self) module keeps caught assertion panics off the console.
//!
//! The standard panic hook prints every panic, even if it is caught later on.
//! While a [`Guard`] is alive on the current thread the hook installed by this
//! module swallows panics that carry a string payload (which is what `assert!`
//! and friends produce). All other panics, and all panics on other threads,
//! are forwarded to the previously installed hook.

use std::cell::Cell;
use std::marker::PhantomData;
use std::panic::{set_hook, take_hook};

use once_cell::sync::Lazy;

use crate::{propagate::is_message_payload, settings};

/// Suppresses the output of assertion panics on the current thread as long as
/// it is alive. Guards may be nested.
#[must_use]
#[derive(Debug)]
pub struct Guard {
    active: bool,
    _marker: PhantomData<*const ()>,
}

impl Guard {
    /// Create a new [`Guard`].
    ///
    /// If [`Settings::quiet`](crate::Settings::quiet) is disabled the guard
    /// does nothing.
    pub fn new() -> Self {
        let active = settings::get().quiet;
        if active {
            Lazy::force(&HOOK);
            DEPTH.with(|depth| depth.set(depth.get() + 1));
        }

        Self {
            active,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if a guard is active on the current thread.
    pub fn is_active() -> bool {
        DEPTH.with(|depth| depth.get() > 0)
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        if self.active {
            DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
        }
    }
}

static HOOK: Lazy<()> = Lazy::new(|| {
    let previous = take_hook();

    set_hook(Box::new(move |info| {
        if Guard::is_active() && is_message_payload(info.payload()) {
            return;
        }

        previous(info);
    }));
});

thread_local! {
    static DEPTH: Cell<usize> = Cell::new(0);
}
