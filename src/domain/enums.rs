use serde::{Deserialize, Serialize};

/// Which list the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Context {
    #[default]
    Work,
    Travel,
}

impl Context {
    /// Parse from the stored "working" flag (true = Work)
    pub fn from_working(working: bool) -> Self {
        if working {
            Self::Work
        } else {
            Self::Travel
        }
    }

    /// Convert to the stored "working" flag
    pub fn is_working(&self) -> bool {
        matches!(self, Self::Work)
    }

    /// Display name for the header
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Travel => "Travel",
        }
    }

    /// Placeholder shown in the empty input field
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Work => "Add a To Do",
            Self::Travel => "Where do you want to go?",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Work => Self::Travel,
            Self::Travel => Self::Work,
        }
    }

    pub fn all() -> &'static [Context] {
        &[Context::Work, Context::Travel]
    }
}

/// Persisted completion marker.
///
/// The names are historical: `Passive` means not yet done, `Active` means done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Check {
    Active,
    Passive,
}

impl Check {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Active
        } else {
            Self::Passive
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Typing,       // Input field has focus
    EditingItem,  // Edit dialog open
    ConfirmDelete,
}
