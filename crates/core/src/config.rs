//! Configuration for locating the target tool.
//!
//! The command catalog itself is compiled in (see [`crate::catalog`]); the
//! only runtime setting is which executable to hand the assembled arguments to.

/// Program invoked when no binary is given on the command line.
pub const DEFAULT_TARGET_TOOL: &str = "walrus";

/// Resolves the target tool to execute.
///
/// Uses the given path if there is one, otherwise [`DEFAULT_TARGET_TOOL`],
/// which is looked up on `PATH` when executed. Shell expansions like `~`
/// are resolved.
///
/// # Examples
///
/// ```
/// use walrus_prompt_core::config::get_target_tool;
///
/// assert_eq!(get_target_tool(&None), "walrus");
/// assert_eq!(get_target_tool(&Some("/opt/walrus".to_string())), "/opt/walrus");
/// ```
pub fn get_target_tool(binary_arg: &Option<String>) -> String {
    let binary = match binary_arg {
        Some(binary) => binary,
        None => DEFAULT_TARGET_TOOL,
    };

    shellexpand::tilde(binary).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_target_tool_default() {
        assert_eq!(get_target_tool(&None), "walrus");
    }

    #[test]
    fn test_get_target_tool_with_custom_path() {
        let custom = Some("/usr/local/bin/walrus".to_string());
        assert_eq!(get_target_tool(&custom), "/usr/local/bin/walrus");
    }

    #[test]
    fn test_get_target_tool_with_tilde() {
        let tilde_path = Some("~/bin/walrus".to_string());
        let result = get_target_tool(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("bin/walrus"));
    }
}
