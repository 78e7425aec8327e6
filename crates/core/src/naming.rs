//! Output file naming
//!
//! protoc validates and deduplicates plugin output purely by file name, so
//! everything here is a deterministic function of its arguments.

use crate::mode::{Category, Extension};
use crate::Error;

/// Suffix every input file name carries.
pub const SOURCE_SUFFIX: &str = ".proto";

/// Strip [`SOURCE_SUFFIX`] from a logical file name.
///
/// Converts "pkg/foo.proto" to "pkg/foo".
pub fn stem(file_name: &str) -> Result<&str, Error> {
    file_name
        .strip_suffix(SOURCE_SUFFIX)
        .ok_or_else(|| Error::MalformedInput(file_name.to_string()))
}

/// Output file name for one (category, extension) pair.
///
/// "pkg/foo.proto", client, header -> "pkg/foo_client.generated.pb.hpp"
pub fn destination(
    file_name: &str,
    category: Category,
    extension: Extension,
) -> Result<String, Error> {
    Ok(format!(
        "{}_{}.generated.pb.{}",
        stem(file_name)?,
        category,
        extension
    ))
}

/// Identifier of the template that renders one (category, extension) pair.
pub fn template_id(category: Category, extension: Extension) -> String {
    format!("{}.generated.{}", category, extension)
}
