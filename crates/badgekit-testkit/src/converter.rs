//! Fake converter binaries
//!
//! Shell scripts standing in for Inkscape. They only use shell builtins,
//! so they keep working when `PATH` is isolated.

use std::path::{Path, PathBuf};

/// Write a converter that answers `--version` and writes
/// `converted <input>` to the `--export-filename` target
///
/// Invocation: `<bin> <input> --export-filename <output>`
pub fn write_fake_converter(dir: &Path, name: &str) -> PathBuf {
    write_script(
        dir,
        name,
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "Inkscape 1.3 (fake)"
  exit 0
fi
printf 'converted %s\n' "$1" > "$3"
"#,
    )
}

/// Write a converter that answers `--version` but fails every conversion
pub fn write_failing_converter(dir: &Path, name: &str) -> PathBuf {
    write_script(
        dir,
        name,
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "Inkscape 1.3 (broken)"
  exit 0
fi
echo "cannot export $1" >&2
exit 3
"#,
    )
}

fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    path
}
