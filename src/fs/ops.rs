//! Filesystem operations

use std::fs;
use std::io;
use std::path::Path;

use super::entry::DirEntryInfo;

/// Read directory contents, ordered by name.
///
/// Symlinks report the kind of their target; a dangling link is a file.
pub fn read_directory(path: &Path) -> io::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_dir = match entry.file_type() {
            Ok(ft) if ft.is_symlink() => fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false),
            Ok(ft) => ft.is_dir(),
            Err(e) => {
                log::debug!("skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        entries.push(DirEntryInfo::new(name, is_dir));
    }

    entries.sort_by(|a, b| a.os_name.cmp(&b.os_name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_directory_sorted_with_kinds() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::write(dir.path().join("alpha.txt"), "a").unwrap();
        fs::write(dir.path().join("gamma"), "g").unwrap();

        let entries = read_directory(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                DirEntryInfo::file("alpha.txt"),
                DirEntryInfo::dir("beta"),
                DirEntryInfo::file("gamma"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling")).unwrap();

        let entries = read_directory(dir.path()).unwrap();
        assert!(entries.contains(&DirEntryInfo::dir("link")));
        assert!(entries.contains(&DirEntryInfo::file("dangling")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_raw_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9");
        fs::create_dir(dir.path().join(raw)).unwrap();

        let entries = read_directory(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "caf\u{FFFD}");
        assert_eq!(entries[0].os_name.as_os_str(), raw);
        assert!(entries[0].is_dir);
        assert!(dir.path().join(&entries[0].os_name).is_dir());
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_directory(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
