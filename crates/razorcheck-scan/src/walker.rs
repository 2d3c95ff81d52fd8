use std::path::{Path, PathBuf};

use razorcheck_core::CheckError;

/// Recursively collect every file under `root` whose name ends with `suffix`.
///
/// The walk runs with the standard filters disabled, so hidden files and
/// gitignored files are visited like any other entry; which files qualify is
/// a policy question, not a VCS one. Directories are recursed, never
/// returned. No ordering is guaranteed across runs or platforms. An empty
/// result is valid.
///
/// # Errors
///
/// Returns [`CheckError::DirectoryNotFound`] if `root` is not a directory,
/// or [`CheckError::Io`] if any directory in the tree cannot be read.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use razorcheck_scan::walker::scan_files;
///
/// let files = scan_files(Path::new("src/Pages"), ".razor").unwrap();
/// for f in &files {
///     println!("{}", f.display());
/// }
/// ```
pub fn scan_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, CheckError> {
    if !root.is_dir() {
        return Err(CheckError::DirectoryNotFound(root.to_path_buf()));
    }

    let walker = ignore::WalkBuilder::new(root).standard_filters(false).build();
    let mut files = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|e| CheckError::Io(std::io::Error::other(e)))?;

        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }

        let is_match = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(suffix));
        if is_match {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
