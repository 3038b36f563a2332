//! Presentation styles.

use std::fmt;

/// Where a pushed destination lands inside its navigation container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationPlacement {
    Primary,
    Detail,
}

/// How a child screen is shown on top of its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationType {
    /// Pushed onto the parent's navigation container.
    Navigation { is_detail: bool },
    /// Modal sheet over the parent.
    Sheet,
    /// Modal covering the whole body.
    FullScreenCover,
}

impl PresentationType {
    pub const fn primary_navigation() -> Self {
        Self::Navigation { is_detail: false }
    }

    pub const fn detail_navigation() -> Self {
        Self::Navigation { is_detail: true }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigation { .. })
    }

    /// Modal styles start a new navigation context; pushes share the parent's.
    pub fn starts_navigation_context(&self) -> bool {
        !self.is_navigation()
    }

    pub fn placement(&self) -> Option<NavigationPlacement> {
        match self {
            Self::Navigation { is_detail: true } => Some(NavigationPlacement::Detail),
            Self::Navigation { is_detail: false } => Some(NavigationPlacement::Primary),
            Self::Sheet | Self::FullScreenCover => None,
        }
    }
}

impl fmt::Display for PresentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Navigation { is_detail: false } => "push",
            Self::Navigation { is_detail: true } => "detail",
            Self::Sheet => "sheet",
            Self::FullScreenCover => "cover",
        };
        f.write_str(label)
    }
}

/// Picks a presentation style for a child state.
///
/// Supplied per call site: two parents may show the same child differently.
/// Must be pure; bindings call it on every render.
pub type Resolver<S> = fn(&S) -> PresentationType;
