//! Discrete input events fed to the session by a front end

/// One player action, applied in the order received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A character key; anything other than an ASCII letter is ignored
    Letter(char),
    Backspace,
    Submit,
    /// Start a fresh game with a new target
    Restart,
    /// Pointer moved over a keyboard key (or off the keyboard)
    Hover(Option<char>),
}
