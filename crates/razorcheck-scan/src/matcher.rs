use std::path::PathBuf;

use razorcheck_core::CheckError;

/// Report whether at least one of `files` contains `marker` as a literal,
/// case-sensitive substring.
///
/// Every file is read in full and every match is logged with the file path,
/// even after the verdict is already settled; pipeline logs should name all
/// offending files, not just the first.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if any file cannot be read; the first read
/// failure aborts the whole scan.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use razorcheck_scan::matcher::contains_marker;
///
/// let files = vec![PathBuf::from("Pages/Index.razor")];
/// let found = contains_marker(&files, "@code").unwrap();
/// assert!(!found);
/// ```
pub fn contains_marker(files: &[PathBuf], marker: &str) -> Result<bool, CheckError> {
    let mut found = false;

    for file in files {
        let content = std::fs::read_to_string(file)?;
        if content.contains(marker) {
            println!("Found \"{marker}\" in file: {}", file.display());
            found = true;
        }
    }

    Ok(found)
}
