//! Operand loading: resolve input patterns, read JSON documents, optionally
//! narrow them with a JSON pointer or jq filter, and decode fuzzy numbers.
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::number::FuzzyNumber;

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// JSON Pointer selecting the fuzzy number inside each document.
    pub json_pointer: Option<String>,
    /// jq filter applied to each document; every output is one operand.
    pub jq_expr: Option<String>,
    /// Reject grades outside [0, 1] and non-finite values.
    pub strict: bool,
}

/// A decoded fuzzy number together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub source: PathBuf,
    pub number: FuzzyNumber,
}

/// Expand literal paths and glob patterns, preserving argument order.
pub fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                let path = entry.map_err(|e| Error::Io {
                    path: e.path().to_path_buf(),
                    source: e.into_error(),
                })?;
                matched_any = true;
                out.push(path);
            }
            if !matched_any {
                return Err(Error::NoMatch { pattern: pattern.to_string() });
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

/// Load every operand named by `patterns`. Files are read in parallel; the
/// result keeps the order the patterns resolve to.
pub fn load_all<I>(patterns: I, options: &LoadOptions) -> Result<Vec<Operand>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let paths = resolve_file_path_patterns(patterns)?;
    info!(files = paths.len(), "loading operands");
    let per_file = paths
        .par_iter()
        .map(|path| load_file(path, options))
        .collect::<Result<Vec<_>>>()?;
    Ok(per_file.into_iter().flatten().collect())
}

/// Load the operands contained in one file.
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Vec<Operand>> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = serde_json::from_str::<Value>(&source).map_err(|error| Error::Json {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let documents = select(document, path, options)?;
    debug!(path = %path.display(), documents = documents.len(), "decoded input");

    documents
        .into_iter()
        .map(|document| {
            let number = crate::path_de::from_value_with_path::<FuzzyNumber>(document)
                .map_err(|message| Error::Json { path: path.to_path_buf(), message })?;
            if options.strict {
                check_strict(&number, path)?;
            }
            Ok(Operand { source: path.to_path_buf(), number })
        })
        .collect()
}

fn select(document: Value, path: &Path, options: &LoadOptions) -> Result<Vec<Value>> {
    let document = match options.json_pointer.as_deref() {
        None => document,
        Some(pointer) => document
            .pointer(pointer)
            .cloned()
            .ok_or_else(|| Error::Pointer {
                pointer: pointer.to_string(),
                path: path.to_path_buf(),
            })?,
    };
    match options.jq_expr.as_deref() {
        None => Ok(vec![document]),
        Some(jq_expr) => crate::jq_exec::run_jaq(jq_expr, &document, path),
    }
}

/// Boundary validation the arithmetic deliberately skips.
pub fn check_strict(number: &FuzzyNumber, path: &Path) -> Result<()> {
    for (x, grade) in number.iter() {
        if !x.is_finite() {
            return Err(Error::Invalid {
                path: path.to_path_buf(),
                reason: format!("non-finite domain value {x}"),
            });
        }
        if !(0.0..=1.0).contains(&grade) {
            return Err(Error::Invalid {
                path: path.to_path_buf(),
                reason: format!("grade {grade} at {x} is outside [0, 1]"),
            });
        }
    }
    Ok(())
}
