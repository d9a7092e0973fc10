//! Terminal capability detection

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_with(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

/// Capabilities from an environment lookup and whether stdout is a tty
pub fn detect_with(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term == "dumb";
    let no_color = get_env("NO_COLOR").is_some_and(|v| !v.is_empty());

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    // Windows terminals render UTF-8 without locale variables.
    if cfg!(windows) {
        return true;
    }
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| get_env(key).filter(|v| !v.is_empty()))
        .map(|v| {
            let v = v.to_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        })
        .unwrap_or(false)
}
