/// Connection state shown by the dashboard's status badge.
///
/// Live polls drive the badge: a successful latest-reading fetch sets
/// `Live`, any failure sets `Error`. Prediction fetches never touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Connecting,
    Live,
    Error,
}

impl FetchStatus {
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting",
            Self::Live => "Live",
            Self::Error => "Error",
        }
    }

    /// DaisyUI color class for the status dot.
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Connecting => "bg-warning",
            Self::Live => "bg-success",
            Self::Error => "bg-error",
        }
    }
}
