use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the filesystem layer. The codec and parser never fail.
#[derive(Error, Debug)]
pub enum ModError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Name is only a disabled prefix: {}", .0.display())]
    EmptyName(PathBuf),

    #[error("Target already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, ModError>;
