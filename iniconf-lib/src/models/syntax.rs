use std::str::FromStr;

use crate::ConfigError;

/// Marker placed in front of header lines when writing a configuration out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Comment {
    #[default]
    Hash,
    Semicolon,
}

impl Comment {
    pub fn as_str(self) -> &'static str {
        match self {
            Comment::Hash => "# ",
            Comment::Semicolon => "; ",
        }
    }
}

impl FromStr for Comment {
    type Err = ConfigError;

    fn from_str(marker: &str) -> Result<Self, Self::Err> {
        match marker {
            "# " => Ok(Comment::Hash),
            "; " => Ok(Comment::Semicolon),
            other => Err(ConfigError::InvalidComment(other.to_owned())),
        }
    }
}

/// Marker written between an option name and its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    #[default]
    Colon,
    Equals,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Colon => ":",
            Separator::Equals => "=",
        }
    }
}

impl FromStr for Separator {
    type Err = ConfigError;

    fn from_str(marker: &str) -> Result<Self, Self::Err> {
        match marker {
            ":" => Ok(Separator::Colon),
            "=" => Ok(Separator::Equals),
            other => Err(ConfigError::InvalidSeparator(other.to_owned())),
        }
    }
}

/// Output syntax of a configuration: comment marker, separator, and whether
/// the separator gets a space before and/or after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub comment: Comment,
    pub separator: Separator,
    pub pre_space: bool,
    pub post_space: bool,
}

impl Syntax {
    pub(crate) fn rendered_separator(&self) -> String {
        let mut rendered = String::new();

        if self.pre_space {
            rendered.push(' ');
        }
        rendered.push_str(self.separator.as_str());
        if self.post_space {
            rendered.push(' ');
        }

        rendered
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            comment: Comment::Hash,
            separator: Separator::Colon,
            pre_space: false,
            post_space: true,
        }
    }
}
