use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which kinds of wrapper output a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Service,
    Client,
    #[default]
    Both,
}

/// Output category base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Client,
    Service,
}

/// Output extension kind. Headers always come before sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Header,
    Source,
}

const EXTENSIONS: [Extension; 2] = [Extension::Header, Extension::Source];

impl Mode {
    /// Categories for this mode, client first.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Mode::Service => &[Category::Service],
            Mode::Client => &[Category::Client],
            Mode::Both => &[Category::Client, Category::Service],
        }
    }

    /// Every (category, extension) pair the mode requires, in generation order.
    pub fn outputs(self) -> impl Iterator<Item = (Category, Extension)> {
        self.categories()
            .iter()
            .flat_map(|&category| EXTENSIONS.into_iter().map(move |ext| (category, ext)))
    }
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Client => "client",
            Category::Service => "service",
        }
    }
}

impl Extension {
    pub fn as_str(self) -> &'static str {
        match self {
            Extension::Header => "hpp",
            Extension::Source => "cpp",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "service" => Ok(Mode::Service),
            "client" => Ok(Mode::Client),
            "both" => Ok(Mode::Both),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Service => "service",
            Mode::Client => "client",
            Mode::Both => "both",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
