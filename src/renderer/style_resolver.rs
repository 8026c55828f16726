//! 样式解析器 - 把语义样式字段解析成具体表现值
//!
//! 全部是纯函数：颜色/圆角令牌解析成主题变量引用，间距/边框解析成
//! 按边长度。暗色替换交给外部主题层，这里遇到明暗对只取 light。

use crate::schema::{
    BorderEdgeValue, BorderEdgesSpec, BorderSide, BorderSpec, ColorSpec, RadiusSpec, ScalarOrText,
    SpacingSpec,
};
use crate::theme::{is_raw_color, TokenConfig};

/// 标量边框的缺省描边颜色
const DEFAULT_BORDER_COLOR: &str = "var(--color-border)";
/// 缺省描边线型
const DEFAULT_BORDER_STYLE: &str = "solid";

/// 解析后的长度 - 数值按 px，字符串原样透传
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Px(f32),
    Raw(String),
}

impl Length {
    pub fn from_scalar(value: &ScalarOrText) -> Length {
        match value {
            ScalarOrText::Number(n) => Length::Px(*n as f32),
            ScalarOrText::Text(s) => Length::Raw(s.clone()),
        }
    }

    /// CSS 文本形式
    pub fn css(&self) -> String {
        match self {
            Length::Px(n) => {
                if n.fract() == 0.0 {
                    format!("{}px", *n as i64)
                } else {
                    format!("{}px", n)
                }
            }
            Length::Raw(s) => s.clone(),
        }
    }
}

/// 按边长度（间距、外边距）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Edges {
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
}

impl Edges {
    pub fn uniform(value: Length) -> Edges {
        Edges {
            top: Some(value.clone()),
            right: Some(value.clone()),
            bottom: Some(value.clone()),
            left: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// 解析后的单边描边
#[derive(Debug, Clone, PartialEq)]
pub struct BorderStroke {
    pub width: Length,
    pub style: String,
    pub color: String,
}

/// 按边描边
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderEdges {
    pub top: Option<BorderStroke>,
    pub right: Option<BorderStroke>,
    pub bottom: Option<BorderStroke>,
    pub left: Option<BorderStroke>,
}

impl BorderEdges {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// 解析颜色：令牌 → 主题变量引用；字面量透传；明暗对取 light
pub fn resolve_color(spec: &ColorSpec, tokens: &TokenConfig) -> String {
    match spec {
        ColorSpec::Token(value) => {
            if is_raw_color(value) {
                return value.clone();
            }
            tokens.color_var(value).unwrap_or_else(|| value.clone())
        }
        ColorSpec::Scheme { light, .. } => resolve_color(&ColorSpec::Token(light.clone()), tokens),
    }
}

/// 解析间距：标量 → 四边等值；对象按边展开，x/y 是轴向缺省，
/// 显式边永远压过轴向简写
pub fn resolve_spacing(spec: &SpacingSpec) -> Edges {
    match spec {
        SpacingSpec::Uniform(n) => Edges::uniform(Length::Px(*n as f32)),
        SpacingSpec::Raw(s) => Edges::uniform(Length::Raw(s.clone())),
        SpacingSpec::Edges(e) => {
            let x = e.x.as_ref().map(Length::from_scalar);
            let y = e.y.as_ref().map(Length::from_scalar);
            Edges {
                top: e.top.as_ref().map(Length::from_scalar).or_else(|| y.clone()),
                bottom: e.bottom.as_ref().map(Length::from_scalar).or(y),
                left: e.left.as_ref().map(Length::from_scalar).or_else(|| x.clone()),
                right: e.right.as_ref().map(Length::from_scalar).or(x),
            }
        }
    }
}

/// 外边距与间距同规则
pub fn resolve_margin(spec: &SpacingSpec) -> Edges {
    resolve_spacing(spec)
}

fn resolve_side(side: &BorderSide, tokens: &TokenConfig) -> BorderStroke {
    BorderStroke {
        width: Length::Px(side.size.unwrap_or(1.0) as f32),
        style: side.style.clone().unwrap_or_else(|| DEFAULT_BORDER_STYLE.to_string()),
        color: side
            .color
            .as_ref()
            .map(|c| resolve_color(c, tokens))
            .unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string()),
    }
}

fn resolve_edge_value(value: &BorderEdgeValue, tokens: &TokenConfig) -> BorderStroke {
    match value {
        BorderEdgeValue::Width(n) => BorderStroke {
            width: Length::Px(*n as f32),
            style: DEFAULT_BORDER_STYLE.to_string(),
            color: DEFAULT_BORDER_COLOR.to_string(),
        },
        BorderEdgeValue::Side(side) => resolve_side(side, tokens),
    }
}

fn resolve_border_edges(e: &BorderEdgesSpec, tokens: &TokenConfig) -> BorderEdges {
    let x = e.x.as_ref().map(|v| resolve_edge_value(v, tokens));
    let y = e.y.as_ref().map(|v| resolve_edge_value(v, tokens));
    BorderEdges {
        top: e.top.as_ref().map(|v| resolve_edge_value(v, tokens)).or_else(|| y.clone()),
        bottom: e.bottom.as_ref().map(|v| resolve_edge_value(v, tokens)).or(y),
        left: e.left.as_ref().map(|v| resolve_edge_value(v, tokens)).or_else(|| x.clone()),
        right: e.right.as_ref().map(|v| resolve_edge_value(v, tokens)).or(x),
    }
}

/// 解析边框：标量 → 四边等宽缺省色；单边描述 → 四边同值；
/// 按边对象独立解析，x/y 简写规则与间距一致
pub fn resolve_border(spec: &BorderSpec, tokens: &TokenConfig) -> BorderEdges {
    match spec {
        BorderSpec::Uniform(n) => {
            let stroke = BorderStroke {
                width: Length::Px(*n as f32),
                style: DEFAULT_BORDER_STYLE.to_string(),
                color: DEFAULT_BORDER_COLOR.to_string(),
            };
            BorderEdges {
                top: Some(stroke.clone()),
                right: Some(stroke.clone()),
                bottom: Some(stroke.clone()),
                left: Some(stroke),
            }
        }
        BorderSpec::Side(side) => {
            let stroke = resolve_side(side, tokens);
            BorderEdges {
                top: Some(stroke.clone()),
                right: Some(stroke.clone()),
                bottom: Some(stroke.clone()),
                left: Some(stroke),
            }
        }
        BorderSpec::Edges(e) => resolve_border_edges(e, tokens),
    }
}

/// 解析圆角：数值按 px；命名刻度 → 主题变量引用；
/// 不认识的令牌原样透传（前向兼容，不当错误）
pub fn resolve_radius(spec: &RadiusSpec, tokens: &TokenConfig) -> Length {
    match spec {
        RadiusSpec::Number(n) => Length::Px(*n as f32),
        RadiusSpec::Token(t) => match tokens.radius_var(t) {
            Some(var) => Length::Raw(var),
            None => Length::Raw(t.clone()),
        },
    }
}
