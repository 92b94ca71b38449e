use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    OutOfRange,
    ColumnFull,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            PlayError::OutOfRange => "action index is outside the sixteen columns",
            PlayError::ColumnFull => "cannot drop a piece into a full column",
        })
    }
}

impl Error for PlayError {}
