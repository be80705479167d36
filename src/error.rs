use std::fmt;

/// Everything that can go wrong while loading, editing or saving a data
/// file. None of these are fatal; the caller reports them and the user
/// re-initiates the action.
#[derive(Debug)]
pub enum Error {
    /// The selected file is not valid JSON.
    MalformedInput(serde_json::Error),
    /// The file name does not match any registered class.
    UnsupportedFile(String),
    /// Label grid regeneration was requested with inconsistent string
    /// properties; the grid is left unchanged.
    GridConsistency(String),
    /// `save` was requested while no file is being edited.
    NotEditing,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput(err) => {
                write!(f, "the selected file is not a valid JSON file: {err}")
            }
            Self::UnsupportedFile(name) => {
                write!(f, "'{name}' is not a supported data file (filename unknown)")
            }
            Self::GridConsistency(msg) => f.write_str(msg),
            Self::NotEditing => f.write_str("no file is currently being edited"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedInput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err)
    }
}
