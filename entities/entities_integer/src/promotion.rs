//! Promotion policy: which storage mode a freshly computed result lands in.

/// Storage mode of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Limbs live in the inline array.
    Static,
    /// Limbs live in an exactly sized heap buffer.
    Dynamic,
}

/// How a kernel places its result into the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Keep the destination's current mode when the result allows it.
    /// A static destination is promoted if the result does not fit; a
    /// dynamic destination stays dynamic, resized to the result.
    KeepMode,
    /// Use static storage whenever the result fits, demoting a dynamic
    /// destination if necessary.
    PreferStatic,
}

impl Placement {
    /// Mode for a result of `len` limbs written into a destination currently
    /// in `current` mode, with static capacity `capacity`.
    pub fn target(self, current: Mode, len: usize, capacity: usize) -> Mode {
        if len > capacity {
            return Mode::Dynamic;
        }
        match self {
            Placement::PreferStatic => Mode::Static,
            Placement::KeepMode => current,
        }
    }
}
