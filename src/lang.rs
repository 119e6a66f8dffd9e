//! Locale-aware runtime messages (English and Chinese).
//!
//! Language is picked from `LANG`, `LC_ALL`, `LC_MESSAGES`; any value
//! containing `zh` or `cn` selects Chinese, everything else English.
//! Only runtime diagnostics are localized; `--help` comes from clap.

/// Message catalog. Templates carry one `{}` placeholder filled by
/// [`fill`].
pub struct Messages {
    pub error_path_not_exists: &'static str,
    pub error_processing: &'static str,
    pub success_processed: &'static str,
    pub no_conf_files: &'static str,
}

const EN: Messages = Messages {
    error_path_not_exists: "Error: Path '{}' not found",
    error_processing: "Error: {}",
    success_processed: "Done: {}",
    no_conf_files: "No .conf files in {}",
};

const ZH: Messages = Messages {
    error_path_not_exists: "错误: 路径 '{}' 不存在",
    error_processing: "处理错误: {}",
    success_processed: "完成: {}",
    no_conf_files: "目录 {} 中无 .conf 文件",
};

/// Detect the message language from the process environment.
pub fn detect() -> &'static Messages {
    for var in ["LANG", "LC_ALL", "LC_MESSAGES"] {
        if let Ok(value) = std::env::var(var) {
            let value = value.to_lowercase();
            if value.contains("zh") || value.contains("cn") {
                return &ZH;
            }
        }
    }
    &EN
}

/// Substitute the template's `{}` placeholder.
pub fn fill(template: &str, arg: &str) -> String {
    template.replacen("{}", arg, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_substitutes_placeholder() {
        assert_eq!(fill("Done: {}", "a.conf"), "Done: a.conf");
        assert_eq!(fill("目录 {} 中无 .conf 文件", "/etc"), "目录 /etc 中无 .conf 文件");
    }

    #[test]
    fn fill_without_placeholder_is_identity() {
        assert_eq!(fill("plain", "x"), "plain");
    }
}
