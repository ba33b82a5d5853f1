//! Error types.
//!
//! All errors are validation failures raised while building or rewiring the
//! control tree. Rendering and updating never fail.

use std::fmt;

/// What kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Control,
    Screen,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Control => f.write_str("control"),
            Self::Screen => f.write_str("screen"),
        }
    }
}

/// Errors raised by the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A control or screen with this name already exists in the relevant scope.
    DuplicateName { kind: Entity, name: String },
    /// No control or screen with this name (or id) exists.
    NotFound { kind: Entity, name: String },
    /// The control already belongs to a screen; drop it from that screen first.
    AlreadyAssigned { control: String, screen: String },
    /// A focus query was made on a control that belongs to no screen.
    Detached { control: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { kind, name } => {
                write!(f, "a {kind} named '{name}' already exists")
            }
            Self::NotFound { kind, name } => write!(f, "no {kind} named '{name}'"),
            Self::AlreadyAssigned { control, screen } => {
                write!(f, "control '{control}' is already assigned to screen '{screen}'")
            }
            Self::Detached { control } => {
                write!(f, "control '{control}' is not attached to any screen")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn duplicate(kind: Entity, name: impl Into<String>) -> Self {
        Self::DuplicateName { kind, name: name.into() }
    }

    pub(crate) fn not_found(kind: Entity, name: impl Into<String>) -> Self {
        Self::NotFound { kind, name: name.into() }
    }
}
