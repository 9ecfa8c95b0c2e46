use std::{cell::Cell, fmt::Display};

/// Represents a trait responsible for handling diagnostics produced while processing a source.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);
}

/// Handler that prints every received diagnostic to standard error.
#[derive(Debug, Default)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one diagnostic has been printed.
    #[must_use]
    pub fn has_printed(&self) -> bool {
        self.printed.get()
    }
}

impl<T: Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Handler that only counts the received diagnostics.
#[derive(Debug, Default)]
pub struct SilentHandler {
    received: Cell<usize>,
}

impl SilentHandler {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics received so far.
    #[must_use]
    pub fn received(&self) -> usize {
        self.received.get()
    }
}

impl<T> Handler<T> for SilentHandler {
    fn receive(&self, _error: T) {
        self.received.set(self.received.get() + 1);
    }
}

/// Handler that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive(&self, _error: T) {}
}
