//! Token path matching
//!
//! Token endpoints live at `/v1/tokens/{category}/{token}`. The category
//! is one of a closed set of literals and the token is a non-empty run of
//! non-slash characters reaching the end of the path.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::PREFIX;

/// Push notification category. Each has its own backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Quake,
    Foreign,
    Tsunami,
    UserQuake,
    Eew,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Quake,
        Category::Foreign,
        Category::Tsunami,
        Category::UserQuake,
        Category::Eew,
    ];

    /// The literal used for this category in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Quake => "quake",
            Category::Foreign => "foreign",
            Category::Tsunami => "tsunami",
            Category::UserQuake => "userquake",
            Category::Eew => "eew",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the category literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The parts of a matched token path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPath {
    pub category: Category,
    pub token: String,
}

static TOKEN_PATH: Lazy<Regex> = Lazy::new(|| {
    let categories = Category::ALL.map(|c| c.as_str()).join("|");
    let pattern = format!("^{}/({})/([^/]+)$", regex::escape(PREFIX), categories);
    Regex::new(&pattern).expect("token path pattern is a valid regex")
});

/// Match `path` against `/v1/tokens/{category}/{token}`.
///
/// Returns `None` for anything else, including unknown categories, an
/// empty token and trailing slashes.
pub fn match_token_path(path: &str) -> Option<TokenPath> {
    let captures = TOKEN_PATH.captures(path)?;
    let category = captures.get(1)?.as_str().parse().ok()?;
    let token = captures.get(2)?.as_str().to_string();
    Some(TokenPath { category, token })
}
