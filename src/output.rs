//! Output file naming with collision suffixes.

use std::path::{Path, PathBuf};

use tracing::info;

/// Picks the worksheet path: `<level>.pdf` by default, or the explicit path
/// with its extension replaced by `.pdf`. An existing file pushes the name to
/// `<base>0.pdf`, `<base>1.pdf`, ... until a free one turns up.
pub fn resolve_output_path(level: u32, explicit: Option<&Path>) -> PathBuf {
    let base = match explicit {
        Some(path) => path.with_extension(""),
        None => PathBuf::from(level.to_string()),
    };
    next_free_path(&base)
}

fn next_free_path(base: &Path) -> PathBuf {
    let candidate = base.with_extension("pdf");
    if !candidate.exists() {
        return candidate;
    }

    let mut suffix = 0usize;
    loop {
        let mut name = base.as_os_str().to_os_string();
        name.push(suffix.to_string());
        let candidate = PathBuf::from(name).with_extension("pdf");
        if !candidate.exists() {
            info!(path = %candidate.display(), "output file already exists, using fallback name");
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn free_name_is_used_as_is() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = dir.path().join("3");
        assert_eq!(next_free_path(&base), dir.path().join("3.pdf"));
    }

    #[test]
    fn collisions_append_a_counter() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = dir.path().join("3");

        File::create(dir.path().join("3.pdf")).expect("create");
        assert_eq!(next_free_path(&base), dir.path().join("30.pdf"));

        File::create(dir.path().join("30.pdf")).expect("create");
        assert_eq!(next_free_path(&base), dir.path().join("31.pdf"));

        File::create(dir.path().join("31.pdf")).expect("create");
        assert_eq!(next_free_path(&base), dir.path().join("32.pdf"));
    }

    #[test]
    fn explicit_path_gets_a_pdf_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let explicit = dir.path().join("sheet.txt");
        assert_eq!(
            resolve_output_path(5, Some(&explicit)),
            dir.path().join("sheet.pdf")
        );
    }

    #[test]
    fn explicit_path_without_extension_works() {
        let dir = tempfile::tempdir().expect("tempdir");
        let explicit = dir.path().join("sheet");
        assert_eq!(
            resolve_output_path(5, Some(&explicit)),
            dir.path().join("sheet.pdf")
        );
    }
}
