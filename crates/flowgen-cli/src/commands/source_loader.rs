//! Source discovery and loading.
//!
//! Directories are walked for `.go` files, skipping tests (`_test.go`) and
//! the directories the Go tool ignores (`testdata`, names starting with `.`
//! or `_`). Discovered files are loaded in path order.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use flowgen_compiler::SourceMap;
use flowgen_core::SourceDecl;
use flowgen_core::source::from_json;
use log::{debug, info};
use thiserror::Error;

use super::SourceArgs;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("no such file or directory: '{0}'")]
    NotFound(String),

    #[error("no .go files found in '{0}'")]
    NoSources(String),

    #[error("invalid declarations in '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Load every source of a run. No paths means the current directory.
pub fn load_sources(args: &SourceArgs) -> Result<SourceMap, LoadError> {
    let default = [PathBuf::from(".")];
    let paths = if args.paths.is_empty() {
        &default[..]
    } else {
        &args.paths[..]
    };

    let mut map = SourceMap::new();
    for path in paths {
        if path.as_os_str() == "-" {
            map.add_stdin(&read_stdin()?);
            continue;
        }
        if path.is_dir() {
            let files = discover(path, args.recursive)?;
            if files.is_empty() {
                return Err(LoadError::NoSources(path.display().to_string()));
            }
            for file in files {
                load_file(&mut map, &file)?;
            }
            continue;
        }
        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }
        load_file(&mut map, path)?;
    }

    info!("loaded {} source files", map.len());
    Ok(map)
}

/// Go files under `dir`, sorted by path.
pub fn discover(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    walk(dir, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let read_error = |source| LoadError::Read {
        path: dir.display().to_string(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if path.is_dir() {
            if recursive && !is_ignored_dir(&name) {
                walk(&path, recursive, files)?;
            }
        } else if is_go_source(&name) {
            files.push(path);
        } else {
            debug!("skipping {}", path.display());
        }
    }
    Ok(())
}

fn is_go_source(name: &str) -> bool {
    name.ends_with(".go") && !name.ends_with("_test.go")
}

fn is_ignored_dir(name: &str) -> bool {
    name == "testdata" || name.starts_with('.') || name.starts_with('_')
}

fn load_file(map: &mut SourceMap, path: &Path) -> Result<(), LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    map.add_file(&path.to_string_lossy(), &content);
    Ok(())
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

/// Read declarations written by `dump --stage source` (`-` for stdin).
pub fn load_json(path: &Path) -> Result<Vec<SourceDecl>, LoadError> {
    let content = if path.as_os_str() == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?
    };
    from_json(&content).map_err(|source| LoadError::Json {
        path: path.display().to_string(),
        source,
    })
}
