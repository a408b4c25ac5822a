//! Static routing table mapping URL paths to views.

use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

/// A view reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Submit,
    Tickets,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Submit => "submit",
            Route::Tickets => "tickets",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// Outcome of matching a path against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

impl Resolution {
    /// The view that ends up being shown
    pub fn route(&self) -> Route {
        match self {
            Resolution::Render(route) | Resolution::Redirect(route) => *route,
        }
    }
}

/// Match a path. The empty path redirects to the submission view.
pub fn resolve(path: &str) -> Result<Resolution, DeskError> {
    match path.trim().trim_matches('/') {
        "" => Ok(Resolution::Redirect(Route::Submit)),
        "submit" => Ok(Resolution::Render(Route::Submit)),
        "tickets" => Ok(Resolution::Render(Route::Tickets)),
        other => Err(DeskError::UnknownRoute(other.to_string())),
    }
}

impl FromStr for Route {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).map(|r| r.route())
    }
}
