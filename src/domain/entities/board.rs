use crate::domain::entities::sheet::{QuickLink, SheetSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Priority {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => Priority::Critical,
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unknown,
        }
    }

    /// Higher is more important; `Unknown` ranks below `Low`.
    pub fn importance(self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Unknown => 0,
        }
    }
}

/// What one requirement card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementView {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub document_version: String,
    pub status: String,
    pub priority: Priority,
    pub review_by: String,
    pub note: String,
    pub deliverables: Vec<String>,
    pub stakeholders: Vec<String>,
    pub links: Vec<QuickLink>,
    pub deadline_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Priority,
    Deadline,
}

impl SortKey {
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Priority => SortDirection::Desc,
            SortKey::Deadline => SortDirection::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Priority => "Priority",
            SortKey::Deadline => "Deadline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Priority,
            direction: SortKey::Priority.default_direction(),
        }
    }
}

impl SortState {
    /// Re-selecting the active key flips direction; a new key starts at its default.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: key.default_direction(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(String),
}

impl StatusFilter {
    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(wanted) => wanted == status,
        }
    }
}

/// Lifecycle of the single sheet fetch backing the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready(SheetSnapshot),
    Failed(String),
}

impl LoadState {
    pub fn from_result<E: std::fmt::Display>(result: Result<SheetSnapshot, E>) -> Self {
        match result {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }

    pub fn snapshot(&self) -> Option<&SheetSnapshot> {
        match self {
            LoadState::Ready(snapshot) => Some(snapshot),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }
}
