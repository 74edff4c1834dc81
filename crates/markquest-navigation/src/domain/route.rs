//! The route table.

/// Path patterns for every routed view, in axum's `{param}` syntax.
pub mod paths {
    /// Landing page.
    pub const MAIN: &str = "/";
    /// A single stage.
    pub const STAGE: &str = "/stage/{id}";
    /// The result screen shown after a stage.
    pub const RESULT: &str = "/result/{id}";
    /// End-of-game summary.
    pub const FINAL: &str = "/final";
    /// How to play.
    pub const HELP: &str = "/help";
    /// Sound and language settings.
    pub const SETTINGS: &str = "/settings";
}

/// The view selected for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Main,
    /// `/stage/{id}`
    Stage {
        /// Stage identifier from the path.
        id: String,
    },
    /// `/result/{id}`
    Result {
        /// Stage identifier from the path.
        id: String,
    },
    /// `/final`
    Final,
    /// `/help`
    Help,
    /// `/settings`
    Settings,
    /// Any path not in the table.
    NotFound {
        /// The requested path.
        path: String,
    },
}

impl Route {
    /// Selects the view for `path`. Matching is exact and case-sensitive; a
    /// stage or result `id` is any single non-empty segment, taken as is.
    /// Percent-decoding is the caller's job.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let Some(rest) = path.strip_prefix('/') else {
            return Self::not_found(path);
        };

        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            [""] => Self::Main,
            ["stage", id] if !id.is_empty() => Self::Stage {
                id: (*id).to_owned(),
            },
            ["result", id] if !id.is_empty() => Self::Result {
                id: (*id).to_owned(),
            },
            ["final"] => Self::Final,
            ["help"] => Self::Help,
            ["settings"] => Self::Settings,
            _ => Self::not_found(path),
        }
    }

    /// Returns the href for this route. `NotFound` yields the path it was
    /// resolved from.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Main => paths::MAIN.to_owned(),
            Self::Stage { id } => format!("/stage/{id}"),
            Self::Result { id } => format!("/result/{id}"),
            Self::Final => paths::FINAL.to_owned(),
            Self::Help => paths::HELP.to_owned(),
            Self::Settings => paths::SETTINGS.to_owned(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Route to a numbered stage.
    #[must_use]
    pub fn stage(number: u32) -> Self {
        Self::Stage {
            id: number.to_string(),
        }
    }

    /// Returns `true` for routes in the table.
    #[must_use]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }

    fn not_found(path: &str) -> Self {
        Self::NotFound {
            path: path.to_owned(),
        }
    }
}
