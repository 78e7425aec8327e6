use crate::prelude::Error;
use log::debug;
use std::fs;
use std::path::Path;
use wrapgen_core::render::TEMPLATE_SUFFIX;

/// Read every `<template-id>.jinja` file of a template directory
///
/// Returns `(template-id, source)` pairs sorted by id. Files without the
/// `.jinja` suffix and subdirectories are ignored.
pub fn read_dir(dir: &Path) -> Result<Vec<(String, String)>, Error> {
    let entries = fs::read_dir(dir).map_err(|source| Error::TemplateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut templates = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| Error::TemplateDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(id) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(TEMPLATE_SUFFIX))
        else {
            continue;
        };

        let source = fs::read_to_string(&path).map_err(|source| Error::TemplateFile {
            path: path.clone(),
            source,
        })?;

        debug!("loaded template {} from {}", id, path.display());
        templates.push((id.to_string(), source));
    }

    if templates.is_empty() {
        return Err(Error::NoTemplates(dir.to_path_buf()));
    }

    templates.sort();
    Ok(templates)
}
