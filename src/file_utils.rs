use crate::config::PNG_SUFFIX;
use crate::error::Result;
use std::cmp::Ordering;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

/// Returns true if `name` ends in `.png`, ignoring case. A bare `.png` counts.
pub fn is_png_name(name: &str) -> bool {
    let suffix = PNG_SUFFIX.as_bytes();
    name.len() >= suffix.len()
        && name.as_bytes()[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Case-insensitive name ordering with a byte-wise tie break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Lists the PNG file names directly under `dir`, sorted case-insensitively.
pub fn scan_directory(dir: &Path) -> Result<Vec<String>> {
    let mut image_files: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_png_name(name))
        .collect();

    image_files.sort_by(|a, b| compare_names(a, b));
    Ok(image_files)
}

/// Copies `src` to `dst`, overwriting it, and carries over the access and
/// modification times of the source.
pub fn copy_preserving_times(src: &Path, dst: &Path) -> io::Result<u64> {
    let bytes = fs::copy(src, dst)?;
    copy_times(src, dst)?;
    Ok(bytes)
}

fn copy_times(src: &Path, dst: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    open_for_times(dst)?.set_times(times)
}

/// `dst` already carries the source permissions, which may be read-only.
/// On unix `futimens` only needs ownership, so a read handle is enough.
#[cfg(unix)]
fn open_for_times(dst: &Path) -> io::Result<File> {
    File::open(dst)
}

#[cfg(not(unix))]
fn open_for_times(dst: &Path) -> io::Result<File> {
    File::options().write(true).open(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"not really a png").expect("failed to write test file");
    }

    #[test]
    fn png_names_match_any_case() {
        assert!(is_png_name("a.png"));
        assert!(is_png_name("B.PNG"));
        assert!(is_png_name("c.Png"));
        assert!(is_png_name(".png"));
        assert!(is_png_name(".PNG"));
        assert!(is_png_name("archive.tar.png"));
        assert!(!is_png_name("d.jpg"));
        assert!(!is_png_name("png"));
        assert!(!is_png_name("e.png.bak"));
        assert!(!is_png_name("xpng"));
        assert!(!is_png_name(""));
    }

    #[test]
    fn scan_directory_sorts_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "b.png");
        touch(temp_dir.path(), "A.png");
        touch(temp_dir.path(), "c.PNG");

        let files = scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(files, vec!["A.png", "b.png", "c.PNG"]);
    }

    #[test]
    fn scan_directory_skips_other_files_and_subfolders() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "keep.png");
        touch(temp_dir.path(), "notes.txt");
        touch(temp_dir.path(), "photo.jpg");
        fs::create_dir(temp_dir.path().join("cool")).expect("failed to create folder");
        touch(&temp_dir.path().join("cool"), "nested.png");
        fs::create_dir(temp_dir.path().join("folder.png")).expect("failed to create folder");

        let files = scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(files, vec!["keep.png"]);
    }

    #[test]
    fn scan_directory_lists_bare_png_names() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "a.png");
        touch(temp_dir.path(), ".png");

        let files = scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(files, vec![".png", "a.png"]);
    }

    #[test]
    fn scan_directory_of_missing_path_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(scan_directory(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn copy_preserves_content_and_modified_time() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let src = temp_dir.path().join("src.png");
        let dst = temp_dir.path().join("dst.png");
        fs::write(&src, b"pixels").expect("failed to write source");

        let past = SystemTime::now() - Duration::from_secs(3600 * 24);
        fs::File::options()
            .write(true)
            .open(&src)
            .and_then(|f| f.set_times(FileTimes::new().set_modified(past)))
            .expect("failed to backdate source");

        copy_preserving_times(&src, &dst).expect("copy failed");

        assert_eq!(fs::read(&dst).expect("read dst"), b"pixels");
        let src_time = fs::metadata(&src).and_then(|m| m.modified()).expect("src time");
        let dst_time = fs::metadata(&dst).and_then(|m| m.modified()).expect("dst time");
        assert_eq!(src_time, dst_time);
    }

    #[cfg(unix)]
    #[test]
    fn copy_of_read_only_source_keeps_modified_time() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let src = temp_dir.path().join("locked.png");
        let dst = temp_dir.path().join("copy.png");
        fs::write(&src, b"pixels").expect("failed to write source");

        let past = SystemTime::now() - Duration::from_secs(3600 * 24 * 7);
        fs::File::options()
            .write(true)
            .open(&src)
            .and_then(|f| f.set_times(FileTimes::new().set_modified(past)))
            .expect("failed to backdate source");
        let mut permissions = fs::metadata(&src).expect("src metadata").permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&src, permissions).expect("failed to lock source");

        copy_preserving_times(&src, &dst).expect("copy failed");

        let src_time = fs::metadata(&src).and_then(|m| m.modified()).expect("src time");
        let dst_meta = fs::metadata(&dst).expect("dst metadata");
        assert!(dst_meta.permissions().readonly());
        assert_eq!(dst_meta.modified().expect("dst time"), src_time);
        assert!(src_time < SystemTime::now() - Duration::from_secs(3600 * 24));
    }

    #[test]
    fn copy_overwrites_existing_destination() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let src = temp_dir.path().join("src.png");
        let dst = temp_dir.path().join("dst.png");
        fs::write(&src, b"new").expect("failed to write source");
        fs::write(&dst, b"old and longer").expect("failed to write destination");

        copy_preserving_times(&src, &dst).expect("copy failed");
        assert_eq!(fs::read(&dst).expect("read dst"), b"new");
    }
}
