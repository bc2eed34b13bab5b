//! Source tree, make.conf and object directory checks.

use std::path::Path;

use super::CheckResult;

/// The source directory must exist and carry a top-level Makefile.
pub fn check_source_tree(source_dir: &Path) -> CheckResult {
    if !source_dir.is_dir() {
        return CheckResult::fail(
            "Source tree",
            format!("{} does not exist", source_dir.display()),
            "Check out the source tree or pass --src",
        );
    }

    if !source_dir.join("Makefile").is_file() {
        return CheckResult::fail(
            "Source tree",
            format!("No Makefile in {}", source_dir.display()),
            "Point --src at the top of the source tree",
        );
    }

    CheckResult::pass("Source tree", format!("Found at {}", source_dir.display()))
}

/// make tolerates a missing make.conf, so this only warns.
pub fn check_make_conf(make_conf: &Path) -> CheckResult {
    if make_conf.is_file() {
        CheckResult::pass("make.conf", format!("Found at {}", make_conf.display()))
    } else {
        CheckResult::warn(
            "make.conf",
            format!("{} not found, make will use built-in defaults", make_conf.display()),
            "Create it or pass --make-conf",
        )
    }
}

/// make creates the object directory itself, but only if its parent exists.
pub fn check_obj_dir(obj_dir: &Path) -> CheckResult {
    if obj_dir.is_dir() {
        return CheckResult::pass("Object directory", format!("Found at {}", obj_dir.display()));
    }

    match obj_dir.parent() {
        Some(parent) if parent.is_dir() => CheckResult::pass(
            "Object directory",
            format!("{} will be created by make", obj_dir.display()),
        ),
        _ => CheckResult::fail(
            "Object directory",
            format!("Neither {} nor its parent exists", obj_dir.display()),
            "Create the object directory or pass --obj",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_source_tree_with_makefile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Makefile"), "all:\n").unwrap();

        assert!(check_source_tree(temp.path()).passed);
    }

    #[test]
    fn test_source_tree_without_makefile() {
        let temp = TempDir::new().unwrap();

        let result = check_source_tree(temp.path());
        assert!(!result.passed);
        assert!(result.message.contains("No Makefile"));
    }

    #[test]
    fn test_source_tree_missing() {
        let result = check_source_tree(Path::new("/nonexistent/worldbuild/src"));
        assert!(!result.passed);
    }

    #[test]
    fn test_missing_make_conf_is_warning() {
        let result = check_make_conf(Path::new("/nonexistent/make.conf"));
        assert!(result.passed);
        assert!(result.suggestion.is_some());
    }

    #[test]
    fn test_obj_dir_parent_exists() {
        let temp = TempDir::new().unwrap();
        assert!(check_obj_dir(&temp.path().join("obj")).passed);
        assert!(!check_obj_dir(&temp.path().join("a/b/obj")).passed);
    }
}
