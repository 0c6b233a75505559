//! Logger manipulators
//!
//! Manipulators are pushed into a [`Logger`](crate::Logger) like any other
//! argument, but instead of appending text they act on the logger right away.

use super::priority::Priority;

/// Action applied to a logger in place of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manipulator {
    /// Change the priority of the message being built
    SetPriority(Priority),
    /// Complete the message, see [`Logger::flush`](crate::Logger::flush)
    Flush,
    /// Discard the message, see [`Logger::reset`](crate::Logger::reset)
    Reset,
}

/// Complete the current message.
pub const fn end() -> Manipulator {
    Manipulator::Flush
}

/// Discard the current message.
pub const fn reset() -> Manipulator {
    Manipulator::Reset
}

pub const fn debug() -> Manipulator {
    Manipulator::SetPriority(Priority::Debug)
}

pub const fn info() -> Manipulator {
    Manipulator::SetPriority(Priority::Info)
}

pub const fn warning() -> Manipulator {
    Manipulator::SetPriority(Priority::Warning)
}

pub const fn error() -> Manipulator {
    Manipulator::SetPriority(Priority::Error)
}

impl From<Priority> for Manipulator {
    fn from(priority: Priority) -> Self {
        Manipulator::SetPriority(priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers() {
        assert_eq!(end(), Manipulator::Flush);
        assert_eq!(reset(), Manipulator::Reset);
        assert_eq!(warning(), Manipulator::SetPriority(Priority::Warning));
        assert_eq!(Manipulator::from(Priority::Debug), debug());
        assert_ne!(info(), error());
    }
}
