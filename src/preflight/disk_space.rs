//! Disk space check for the object directory.
//!
//! A full buildworld plus buildkernel writes several gigabytes of objects.

use super::CheckResult;
use std::path::Path;
use std::process::Command;

/// Minimum required disk space in bytes (8 GB).
const MIN_DISK_SPACE_BYTES: u64 = 8 * 1024 * 1024 * 1024;

/// Check that sufficient disk space is available where objects will land.
pub fn check_disk_space(obj_dir: &Path) -> CheckResult {
    let Some(probe) = existing_ancestor(obj_dir) else {
        return CheckResult::fail(
            "Disk space",
            format!("No existing directory above {}", obj_dir.display()),
            "Create the object directory or pass --obj",
        );
    };

    match available_space(probe) {
        Some(available) => {
            let available_gb = available as f64 / (1024.0 * 1024.0 * 1024.0);
            let required_gb = MIN_DISK_SPACE_BYTES as f64 / (1024.0 * 1024.0 * 1024.0);

            if available >= MIN_DISK_SPACE_BYTES {
                CheckResult::pass(
                    "Disk space",
                    format!("{:.1} GB available (need {:.1} GB)", available_gb, required_gb),
                )
            } else {
                CheckResult::fail(
                    "Disk space",
                    format!(
                        "Only {:.1} GB available, need {:.1} GB",
                        available_gb, required_gb
                    ),
                    "Free up disk space or use a different object directory",
                )
            }
        }
        None => CheckResult::fail(
            "Disk space",
            "Failed to check available disk space",
            "Ensure df command is available",
        ),
    }
}

/// Get available disk space in bytes (for programmatic use).
///
/// Uses POSIX `df -P -k`, which both GNU and BSD df understand.
pub fn available_space(path: &Path) -> Option<u64> {
    let output = Command::new("df").args(["-P", "-k"]).arg(path).output().ok()?;
    if !output.status.success() {
        return None;
    }
    parse_df_available(&String::from_utf8_lossy(&output.stdout))
}

/// Available KiB is the fourth column of the first data line.
fn parse_df_available(stdout: &str) -> Option<u64> {
    stdout
        .lines()
        .nth(1)
        .and_then(|line| line.split_whitespace().nth(3))
        .and_then(|kib| kib.parse::<u64>().ok())
        .map(|kib| kib * 1024)
}

fn existing_ancestor(path: &Path) -> Option<&Path> {
    path.ancestors().find(|p| p.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_disk_space_current_dir() {
        let result = check_disk_space(Path::new("."));
        // Should at least be able to check (pass or fail)
        assert!(!result.name.is_empty());
    }

    #[test]
    fn test_available_space() {
        let space = available_space(Path::new("."));
        assert!(space.is_some());
        assert!(space.unwrap() > 0);
    }

    #[test]
    fn test_parse_df_available() {
        let stdout = "Filesystem     1024-blocks      Used Available Capacity Mounted on\n\
                      /dev/ada0p2       98765432  12345678  80000000      14% /\n";
        assert_eq!(parse_df_available(stdout), Some(80_000_000 * 1024));
        assert_eq!(parse_df_available("header only\n"), None);
    }

    #[test]
    fn test_existing_ancestor() {
        let path = Path::new("/nonexistent/worldbuild/obj");
        assert_eq!(existing_ancestor(path), Some(Path::new("/")));
    }
}
