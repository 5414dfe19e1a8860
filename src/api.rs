use crate::{
    errors::{FileOperation, IoError},
    layout, materialize, preview,
};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error("unable to determine the default root directory")]
    #[diagnostic(
        code(busease::api::root),
        help("Pass the root directory explicitly, e.g. `busease-scaffold ./my_app`.")
    )]
    ResolveRoot(#[source] IoError),
}

/// Creates the BusEase `lib/` skeleton under `root_dir`, or under the current
/// directory when `None`.
///
/// Failures on individual files or directories are reported on stderr and do
/// not stop the rest of the tree from being created.
pub fn create_file_structure(root_dir: Option<&Path>) {
    let root = root_dir.unwrap_or_else(|| Path::new("."));

    let structure = layout::busease();

    log::debug!(
        "materializing structure under: {}\n{}",
        root.display(),
        preview::render_tree(&structure, root)
    );

    materialize::materialize(root, &structure);

    println!("{}", "File and folder structure creation complete.".bold());
}

/// Prints the BusEase skeleton as it would be created under `root_dir`,
/// without writing anything.
pub fn preview_file_structure(root_dir: Option<&Path>) {
    let root = root_dir.unwrap_or_else(|| Path::new("."));

    preview::preview_as_tree(&layout::busease(), root);
}

/// The directory containing the running executable, falling back to the
/// current working directory.
///
/// # Errors
///
/// Returns [`ScaffoldError::ResolveRoot`] if neither can be determined.
pub fn default_root() -> Result<PathBuf, ScaffoldError> {
    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(parent) = exe.parent() {
                return Ok(parent.to_path_buf());
            }
        }
        Err(error) => {
            log::debug!("unable to locate executable: {error}");
        }
    }

    std::env::current_dir().map_err(|error| {
        ScaffoldError::ResolveRoot(IoError::new(
            FileOperation::Resolve,
            PathBuf::from("."),
            error,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_is_an_existing_directory() {
        let root = default_root().unwrap();

        assert!(root.is_dir());
    }
}
