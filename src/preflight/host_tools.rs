//! Host tool validation.
//!
//! Checks that required external tools are installed and executable.

use super::CheckResult;

/// Required host tools with their install suggestions.
const REQUIRED_TOOLS: &[(&str, &str, &str)] = &[(
    "make",
    "Drive buildworld/buildkernel",
    "Install the system make (bmake) for your platform",
)];

/// Check that all required host tools are installed.
pub fn check_host_tools() -> Vec<CheckResult> {
    REQUIRED_TOOLS
        .iter()
        .map(|(tool, purpose, install)| check_tool(tool, purpose, install))
        .collect()
}

fn check_tool(tool: &str, purpose: &str, install_hint: &str) -> CheckResult {
    match which::which(tool) {
        Ok(path) => CheckResult::pass(
            format!("{} tool", tool),
            format!("Found at {} ({})", path.display(), purpose),
        ),
        Err(_) => CheckResult::fail(
            format!("{} tool", tool),
            format!("Not found (needed for: {})", purpose),
            install_hint,
        ),
    }
}

/// Check if a specific tool is available (returns bool for quick checks).
pub fn has_tool(tool: &str) -> bool {
    which::which(tool).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tool_existing() {
        // sh should exist on any Unix system
        assert!(has_tool("sh"));
    }

    #[test]
    fn test_has_tool_nonexistent() {
        assert!(!has_tool("definitely_not_a_real_command_12345"));
    }

    #[test]
    fn test_check_tool_missing_fails() {
        let result = check_tool("definitely_not_a_real_command_12345", "testing", "install it");
        assert!(!result.passed);
        assert_eq!(result.suggestion.as_deref(), Some("install it"));
    }

    #[test]
    fn test_check_host_tools_returns_results() {
        let results = check_host_tools();
        assert_eq!(results.len(), REQUIRED_TOOLS.len());
    }
}
