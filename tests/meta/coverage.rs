//! Keeps `tests/unit` in step with `src`
//!
//! Every renderer, advisory client and io helper under `src/` has a unit test
//! file at the same relative path under `tests/unit/`, and every file there
//! names a real source file. `lib.rs`, `main.rs` and `mod.rs` only wire
//! modules together and are exempt.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    fn is_wiring(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    /// Relative paths of every `.rs` file and directory below `root`
    fn mirror_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn report(header: &str, paths: &[&String]) -> String {
        let lines: Vec<String> = paths.iter().map(|path| format!("  - {path}")).collect();
        format!("{header}:\n{}", lines.join("\n"))
    }

    // Tests every source file has a unit test file at the same path
    // Verified by deleting tests/unit/render/grid.rs
    #[test]
    fn test_sources_have_unit_tests() {
        let sources = mirror_paths(Path::new(SOURCE_ROOT)).unwrap();
        let units = mirror_paths(Path::new(UNIT_ROOT)).unwrap();

        let missing: Vec<&String> = sources
            .iter()
            .filter(|path| !is_wiring(path) && !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without tests/unit counterparts", &missing)
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/render/marble.rs
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = mirror_paths(Path::new(SOURCE_ROOT)).unwrap();
        let units = mirror_paths(Path::new(UNIT_ROOT)).unwrap();

        let orphaned: Vec<&String> = units
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("tests/unit files without a source file", &orphaned)
        );
    }

    // Tests every test file other than harness wiring defines a test
    // Verified by emptying tests/unit/io/cleanup.rs
    #[test]
    fn test_test_files_define_tests() {
        let files = mirror_paths(Path::new("tests")).unwrap();

        let empty: Vec<&String> = files
            .iter()
            .filter(|path| path.ends_with(".rs"))
            .filter(|path| !path.ends_with("main.rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without any #[test]", &empty)
        );
    }
}
