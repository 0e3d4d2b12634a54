use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors raised while loading an incident dataset.
#[derive(Debug, Error)]
pub enum IncidentLoadError {
    /// The dataset could not be opened, read or decoded as CSV.
    #[error("failed to load incident dataset from {}", describe_origin(.path.as_deref()))]
    DataLoad {
        /// Dataset path, when loading from the filesystem.
        path: Option<Utf8PathBuf>,
        /// Underlying reader or decoder failure.
        #[source]
        source: csv::Error,
    },
    /// The header row lacks columns needed to place incidents.
    #[error("incident dataset is missing required columns: {}", .missing.join(", "))]
    Schema {
        /// Names of the absent columns.
        missing: Vec<&'static str>,
    },
}

impl IncidentLoadError {
    pub(crate) const fn from_reader(source: csv::Error) -> Self {
        Self::DataLoad { path: None, source }
    }

    /// Record `at` as the origin of a reader failure.
    pub(crate) fn at_path(self, at: &Utf8Path) -> Self {
        match self {
            Self::DataLoad { path: None, source } => Self::DataLoad {
                path: Some(at.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

fn describe_origin(path: Option<&Utf8Path>) -> &str {
    path.map_or("reader", Utf8Path::as_str)
}
