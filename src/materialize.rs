use crate::{
    errors::{FileOperation, IoError},
    tree::{DirectoryNode, FileNode, TreeNode},
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("unable to create directory '{}'", .0.path.display())]
    #[diagnostic(
        code(busease::materialize::mkdir),
        help("The directory and everything below it were skipped.")
    )]
    DirectoryCreation(#[source] IoError),

    #[error("unable to create file '{}'", .path.display())]
    #[diagnostic(code(busease::materialize::write))]
    FileCreation {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}
impl MaterializeError {
    /// The directory or file that could not be created.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryCreation(io) => &io.path,
            Self::FileCreation { path, .. } => path,
        }
    }

    /// The failed filesystem call, which for a file may be on its parent.
    pub fn io(&self) -> &IoError {
        match self {
            Self::DirectoryCreation(io) | Self::FileCreation { source: io, .. } => io,
        }
    }
}

/// Creates every directory and file described by `node` beneath `base_path`.
///
/// Siblings are processed in declaration order, depth-first. A failure is
/// reported and then skipped: a directory that cannot be created abandons its
/// own subtree only, and a file that cannot be written never stops its
/// siblings. Existing directories are reused and existing files are
/// overwritten, so running this twice leaves the same tree as running it once.
pub fn materialize(base_path: &Path, node: &DirectoryNode) {
    for (name, child) in &node.children {
        let child_path = base_path.join(name);

        match child {
            TreeNode::File(file) => {
                if let Err(error) = write_file(&child_path, file) {
                    report(&error);
                }
            }
            TreeNode::Directory(dir) => match create_directory(&child_path) {
                Ok(()) => materialize(&child_path, dir),
                Err(error) => report(&error),
            },
        }
    }
}

/// Creates `path` and any missing parents. Succeeds if it already exists.
fn create_directory(path: &Path) -> Result<(), MaterializeError> {
    log::debug!("creating directory: {}", path.display());

    std::fs::create_dir_all(path).map_err(|error| {
        MaterializeError::DirectoryCreation(IoError::new(
            FileOperation::Mkdir,
            path.to_path_buf(),
            error,
        ))
    })?;

    println!("{} {}", "create".green(), path.display());

    Ok(())
}

/// Writes `file` to `path`, creating its parent directory first if needed.
///
/// A missing parent that cannot be created counts as a failure of this file.
fn write_file(path: &Path, file: &FileNode) -> Result<(), MaterializeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| MaterializeError::FileCreation {
            path: path.to_path_buf(),
            source: IoError::new(FileOperation::Mkdir, parent.to_path_buf(), error),
        })?;
    }

    log::debug!("writing file: {}", path.display());

    std::fs::write(path, &file.content).map_err(|error| MaterializeError::FileCreation {
        path: path.to_path_buf(),
        source: IoError::new(FileOperation::Write, path.to_path_buf(), error),
    })?;

    println!("{} {}", "create".green(), path.display());

    Ok(())
}

fn report(error: &MaterializeError) {
    log::debug!("failed at {}: {error:?}", error.path().display());

    let io = error.io();

    eprintln!("{} {}: {}: {}", "error".red(), error, io, io.source);
}
