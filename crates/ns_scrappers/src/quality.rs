//! Heuristics that tell a news article apart from paywalls, cookie walls and
//! legal pages.

use std::fmt;

pub const MIN_TEXT_CHARS: usize = 80;
pub const MIN_TITLE_CHARS: usize = 5;
pub const MAX_BOILERPLATE_MARKERS: usize = 3;

const BOILERPLATE_MARKERS: &[&str] = &[
    "copyright",
    "all rights reserved",
    "cookie",
    "terms of service",
    "privacy policy",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Likely paywalled or blocked
    TooShort(usize),
    /// Navigation or legal text
    Boilerplate(usize),
    MissingTitle,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooShort(chars) => write!(f, "insufficient content ({} chars, likely paywalled or blocked)", chars),
            Rejection::Boilerplate(markers) => write!(f, "looks like navigation/legal text ({} boilerplate markers)", markers),
            Rejection::MissingTitle => write!(f, "no valid title"),
        }
    }
}

pub fn boilerplate_markers(text: &str) -> usize {
    let text = text.to_lowercase();
    BOILERPLATE_MARKERS.iter().filter(|marker| text.contains(*marker)).count()
}

/// Runs every check in order, reporting the first one that fails.
pub fn check(title: &str, text: &str) -> Result<(), Rejection> {
    let chars = text.trim().chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(Rejection::TooShort(chars));
    }

    let markers = boilerplate_markers(text);
    if markers > MAX_BOILERPLATE_MARKERS {
        return Err(Rejection::Boilerplate(markers));
    }

    if title.trim().chars().count() < MIN_TITLE_CHARS {
        return Err(Rejection::MissingTitle);
    }

    Ok(())
}
