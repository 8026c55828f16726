//! 主题令牌表 - 语义颜色与圆角刻度
//!
//! 识别哪些字符串算主题令牌是设计系统的约定，不是引擎逻辑，所以
//! 整个识别集合做成可替换的配置，默认值覆盖当前设计系统的写法。

use once_cell::sync::Lazy;

/// 令牌识别配置
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// 语义色令牌（success、danger …）
    pub semantic: Vec<String>,
    /// 透明度令牌前缀（alpha-40 这类）
    pub alpha_prefix: String,
    /// `<hue>-<shade>` 写法里认识的色相名
    pub hues: Vec<String>,
    /// 圆角命名刻度（序数，小到大）
    pub radius_scale: Vec<String>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        let semantic = [
            "primary", "secondary", "tertiary", "emphasis", "muted", "success", "danger",
            "warning", "info", "discovery", "surface", "border",
        ];
        let hues = [
            "gray", "red", "orange", "yellow", "green", "teal", "blue", "indigo", "purple",
            "pink",
        ];
        let radius_scale = ["none", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "full"];
        Self {
            semantic: semantic.iter().map(|s| s.to_string()).collect(),
            alpha_prefix: "alpha-".to_string(),
            hues: hues.iter().map(|s| s.to_string()).collect(),
            radius_scale: radius_scale.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 库默认令牌表
pub static DEFAULT_TOKENS: Lazy<TokenConfig> = Lazy::new(TokenConfig::default);

impl TokenConfig {
    /// 颜色令牌对应的主题变量引用；不认识返回 None
    pub fn color_var(&self, token: &str) -> Option<String> {
        if self.semantic.iter().any(|s| s == token) {
            return Some(format!("var(--color-{})", token));
        }
        if let Some(rest) = token.strip_prefix(self.alpha_prefix.as_str()) {
            if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
                return Some(format!("var(--color-{})", token));
            }
        }
        if let Some((hue, shade)) = token.rsplit_once('-') {
            if self.hues.iter().any(|h| h == hue)
                && !shade.is_empty()
                && shade.chars().all(|c| c.is_ascii_digit())
            {
                return Some(format!("var(--color-{}-{})", hue, shade));
            }
        }
        None
    }

    /// 圆角令牌对应的主题变量引用；不在刻度里返回 None
    pub fn radius_var(&self, token: &str) -> Option<String> {
        if self.radius_scale.iter().any(|s| s == token) {
            Some(format!("var(--radius-{})", token))
        } else {
            None
        }
    }
}

/// 是否是原始颜色字面量（直接透传，不做令牌解析）
pub fn is_raw_color(value: &str) -> bool {
    let v = value.trim();
    v.starts_with('#')
        || v.starts_with("rgb")
        || v.starts_with("hsl")
        || v.starts_with("var(")
        || v.starts_with("color-mix(")
        || v == "transparent"
        || v == "currentColor"
}
