//! Structural checks keeping tests/unit in step with src/

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Entry points and module files carry no logic of their own
    fn is_organisational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    /// Relative paths of every directory and `.rs` file below `dir`
    fn relative_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("path outside scanned directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(paths)
    }

    fn src_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = relative_paths(Path::new(SRC), Path::new(SRC)).unwrap_or_default();
        let unit = relative_paths(Path::new(UNIT), Path::new(UNIT)).unwrap_or_default();
        assert!(!src.is_empty(), "No sources found under {SRC}");
        (src, unit)
    }

    fn report(header: &str, lines: &[String]) -> String {
        format!("{header}:\n{}", lines.join("\n"))
    }

    // Tests every source file and directory has a unit test counterpart
    #[test]
    fn test_sources_have_unit_tests() {
        let (src, unit) = src_and_unit_paths();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_organisational(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Sources without unit tests", &missing)
        );
    }

    // Tests no unit test outlives the source it covers
    #[test]
    fn test_unit_tests_have_sources() {
        let (src, unit) = src_and_unit_paths();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without sources", &orphaned)
        );
    }

    // Tests every unit test file is declared by its parent module
    #[test]
    fn test_unit_tests_are_declared() {
        let (_, unit) = src_and_unit_paths();
        let mut undeclared = Vec::new();

        for path in unit.iter().filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs")) {
            let file = Path::new(path);
            let module = file.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let parent = file.parent().map(|p| Path::new(UNIT).join(p).join("mod.rs"));
            let declared = parent
                .and_then(|mod_file| fs::read_to_string(mod_file).ok())
                .is_some_and(|text| text.contains(&format!("mod {module};")));

            if !declared {
                undeclared.push(format!("  - {UNIT}/{path}"));
            }
        }

        assert!(
            undeclared.is_empty(),
            "{}",
            report("Unit test files never compiled", &undeclared)
        );
    }

    // Tests every test file contains at least one test function
    #[test]
    fn test_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let files = relative_paths(tests_dir, tests_dir).unwrap_or_default();

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}
