//! 样式描述 - 控件定义里的语义样式字段
//!
//! 定义侧只描述形状（标量/字符串/按边对象），具体表现值由
//! renderer::style_resolver 解析。

use serde::Deserialize;

/// 标量或原始字符串（尺寸、间距等字段的通用形状）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrText {
    Number(f64),
    Text(String),
}

/// 间距 - 标量、字符串或按边对象
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpacingSpec {
    Uniform(f64),
    Raw(String),
    Edges(SpacingEdges),
}

/// 按边间距，x/y 是轴向简写（x 默认 left+right，y 默认 top+bottom）
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SpacingEdges {
    pub top: Option<ScalarOrText>,
    pub right: Option<ScalarOrText>,
    pub bottom: Option<ScalarOrText>,
    pub left: Option<ScalarOrText>,
    pub x: Option<ScalarOrText>,
    pub y: Option<ScalarOrText>,
}

/// 边框 - 标量、单边描述或按边对象
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BorderSpec {
    Uniform(f64),
    Side(BorderSide),
    Edges(BorderEdgesSpec),
}

/// 单边边框描述
// deny_unknown_fields 让 untagged 匹配能区分单边对象和按边对象
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderSide {
    pub size: Option<f64>,
    pub style: Option<String>,
    pub color: Option<ColorSpec>,
}

/// 按边边框，x/y 简写规则与间距一致
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BorderEdgesSpec {
    pub top: Option<BorderEdgeValue>,
    pub right: Option<BorderEdgeValue>,
    pub bottom: Option<BorderEdgeValue>,
    pub left: Option<BorderEdgeValue>,
    pub x: Option<BorderEdgeValue>,
    pub y: Option<BorderEdgeValue>,
}

/// 单条边的值 - 宽度标量或完整单边描述
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BorderEdgeValue {
    Width(f64),
    Side(BorderSide),
}

/// 颜色 - 令牌/字面量字符串，或明暗主题对
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Token(String),
    Scheme { light: String, dark: Option<String> },
}

/// 圆角 - 数值或命名刻度令牌
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RadiusSpec {
    Number(f64),
    Token(String),
}

/// ListView 截断上限 - 数值或 "auto" 哨兵
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LimitSpec {
    Count(u64),
    Keyword(String),
}

impl LimitSpec {
    /// 截断条数，"auto"（及任何非数值写法）表示不截断
    pub fn count(&self) -> Option<usize> {
        match self {
            LimitSpec::Count(n) => Some(*n as usize),
            LimitSpec::Keyword(_) => None,
        }
    }
}

/// 布局/媒体变体上可出现的语义样式字段
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSpec {
    pub padding: Option<SpacingSpec>,
    pub margin: Option<SpacingSpec>,
    pub border: Option<BorderSpec>,
    pub background: Option<ColorSpec>,
    pub radius: Option<RadiusSpec>,
    pub height: Option<ScalarOrText>,
    pub width: Option<ScalarOrText>,
    pub size: Option<ScalarOrText>,
    pub min_height: Option<ScalarOrText>,
    pub min_width: Option<ScalarOrText>,
    pub max_height: Option<ScalarOrText>,
    pub max_width: Option<ScalarOrText>,
    pub min_size: Option<ScalarOrText>,
    pub max_size: Option<ScalarOrText>,
    pub aspect_ratio: Option<f64>,
    pub gap: Option<ScalarOrText>,
    pub align: Option<String>,
    pub justify: Option<String>,
    pub wrap: Option<String>,
}
