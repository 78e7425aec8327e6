//! Run configuration
//!
//! A [`Config`] is assembled once per run and never changes afterwards. The
//! shell seeds it from command line flags and environment variables, then
//! [`Config::with_parameter`] applies the protoc plugin parameter on top
//! (`--wrapgen_opt=mode=client,skip_files_without_service=false`).

use crate::context::NamespaceStyle;
use crate::mode::Mode;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// When false, files without services get stub outputs instead of none.
    pub skip_files_without_service: bool,
    pub namespace_style: NamespaceStyle,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Both,
            skip_files_without_service: true,
            namespace_style: NamespaceStyle::Cpp,
        }
    }
}

impl Config {
    /// Apply a comma separated `key=value` plugin parameter.
    ///
    /// Empty segments are ignored. Unknown keys and unparsable values are
    /// configuration errors.
    pub fn with_parameter(mut self, parameter: &str) -> Result<Self, Error> {
        for (key, value) in parse_parameter(parameter)? {
            match key {
                "mode" => self.mode = value.parse()?,
                "skip_files_without_service" => {
                    self.skip_files_without_service = value.parse().map_err(|_| {
                        Error::InvalidParameter(format!(
                            "skip_files_without_service expects true or false, got {:?}",
                            value
                        ))
                    })?
                }
                "namespace_style" => self.namespace_style = value.parse()?,
                _ => {
                    return Err(Error::InvalidParameter(format!(
                        "unknown option {:?}",
                        key
                    )))
                }
            }
        }
        Ok(self)
    }
}

/// Split a plugin parameter into trimmed `(key, value)` pairs.
pub fn parse_parameter(parameter: &str) -> Result<Vec<(&str, &str)>, Error> {
    parameter
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .split_once('=')
                .map(|(key, value)| (key.trim(), value.trim()))
                .ok_or_else(|| {
                    Error::InvalidParameter(format!("expected key=value, got {:?}", segment))
                })
        })
        .collect()
}
