use crate::{ChangeCode, DisplayMode};

/// Selects which mode [`DisplayService::query`] fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeIndex {
    /// The mode the display is currently using (the `ENUM_CURRENT_SETTINGS` sentinel)
    Current,
    /// The n-th supported mode, in whatever order the OS reports them
    Nth(u32),
}

/// The display-configuration capability of the OS.
///
/// Production binds this to the `winuser.h` calls; tests bind a scripted stub.
pub trait DisplayService {
    /// Fetches the mode at `index`. Returns `None` once enumeration indices
    /// are exhausted, or when the OS call fails outright.
    fn query(&self, index: ModeIndex) -> Option<DisplayMode>;

    /// Asks the OS to make `mode` the persistent display configuration.
    /// Returns the raw result code; anything but the success sentinel is a
    /// failure.
    fn apply(&mut self, mode: &DisplayMode) -> ChangeCode;

    /// Iterates the supported modes at indices 0, 1, 2, … until the OS
    /// signals exhaustion. Raw enumeration order, duplicates included.
    fn modes(&self) -> Modes<'_, Self>
    where
        Self: Sized,
    {
        Modes {
            service: self,
            index: 0,
        }
    }
}

/// Iterator over the modes a [`DisplayService`] enumerates
pub struct Modes<'a, S: DisplayService> {
    service: &'a S,
    index: u32,
}

impl<S: DisplayService> Iterator for Modes<'_, S> {
    type Item = DisplayMode;

    fn next(&mut self) -> Option<DisplayMode> {
        let mode = self.service.query(ModeIndex::Nth(self.index))?;
        self.index += 1;
        Some(mode)
    }
}
