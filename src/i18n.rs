// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言（用户提示文案以英文为准）
pub const DEFAULT_LOCALE: &str = "en";

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言（不支持的语言回退到默认语言）
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    if is_supported(locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale, "不支持的语言，使用默认语言");
        rust_i18n::set_locale(DEFAULT_LOCALE);
    }
}

pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 翻译消息（当前语言）
///
/// # 示例
/// ```no_run
/// use inventory_threshold::i18n::t;
/// let msg = t("calculator.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（指定语言，不修改全局状态）
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_english_messages() {
        assert_eq!(
            t_in("en", "error.unsupported_format"),
            "Please upload an Excel or CSV file (.xlsx, .xls, or .csv)"
        );
        assert_eq!(
            t_in("en", "error.file_too_large"),
            "File size must be less than 1MB"
        );
        assert_eq!(
            t_in("en", "error.invalid_data"),
            "Invalid data format in file. Please check the sample file for the correct format."
        );
        assert_eq!(
            t_in("en", "error.processing"),
            "An error occurred while processing the file Data"
        );
    }

    #[test]
    fn test_translate_chinese_messages() {
        assert_eq!(t_in("zh-CN", "calculator.success"), "阈值计算成功");
        assert!(t_in("zh-CN", "error.file_too_large").contains("1MB"));
    }

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("en"));
        assert!(is_supported("zh-CN"));
        assert!(!is_supported("fr"));
    }
}
