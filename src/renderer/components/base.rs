//! 视觉元素基础定义
//!
//! 渲染输出树的节点类型、解析后样式，以及容器/叶子共用的
//! taffy 样式装配。

use crate::renderer::style_resolver::{
    resolve_border, resolve_color, resolve_margin, resolve_radius, resolve_spacing, BorderEdges,
    BorderStroke, Edges, Length,
};
use crate::schema::{SelectOption, StyleSpec};
use crate::theme::TokenConfig;
use serde_json::Value as JsonValue;
use taffy::prelude::*;

/// 交互触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTrigger {
    Click,
    Change,
    Submit,
}

/// 文本角色（决定缺省字号/层级）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Body,
    Title,
    Caption,
    Label,
}

impl TextRole {
    pub fn default_font_size(&self) -> f32 {
        match self {
            TextRole::Title => 18.0,
            TextRole::Body => 14.0,
            TextRole::Label => 13.0,
            TextRole::Caption => 12.0,
        }
    }
}

/// 容器角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRole {
    Block,
    Card,
    Form,
    List,
    ListItem,
    Transition,
}

/// 主轴方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// 媒体来源 - 内联源在挂载边界转对象引用
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    Url(String),
    Inline(String),
}

/// 表单控件
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    Button {
        label: String,
        variant: String,
        icon_start: Option<String>,
        icon_end: Option<String>,
        submit: bool,
        disabled: bool,
    },
    Input {
        name: String,
        input_type: String,
        default_value: String,
        placeholder: String,
        required: bool,
        disabled: bool,
    },
    Textarea {
        name: String,
        default_value: String,
        placeholder: String,
        rows: u32,
    },
    Select {
        name: String,
        options: Vec<SelectOption>,
        default_value: String,
        placeholder: String,
    },
    Checkbox {
        name: String,
        label: String,
        default_checked: bool,
        disabled: bool,
    },
    RadioGroup {
        name: String,
        options: Vec<SelectOption>,
        default_value: String,
    },
    DatePicker {
        name: String,
        default_value: String,
        placeholder: String,
        min: String,
        max: String,
    },
}

/// 视觉元素种类
#[derive(Debug, Clone, PartialEq)]
pub enum VisualKind {
    Text { content: String, role: TextRole },
    Markdown { source: String },
    Badge { label: String, color: String, variant: String, pill: bool },
    Container { role: ContainerRole, axis: Axis },
    Image { source: MediaSource, alt: Option<String>, fit: Option<String> },
    Icon { name: String, color: Option<String> },
    Divider,
    Spacer,
    Control(ControlKind),
    /// 外嵌占位（Chart/ComputerUse），载荷原样交给宿主的外嵌层
    Embed { kind: String, config: JsonValue },
    /// 未知/畸形节点的可见占位
    Placeholder { message: String },
    /// ListView 截断后的展开入口，激活后同列表全量重渲
    Reveal { list: String, remaining: usize },
}

/// 解析后样式
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub padding: Edges,
    pub margin: Edges,
    pub border: BorderEdges,
    pub background: Option<String>,
    pub text_color: Option<String>,
    pub radius: Option<Length>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_width: Option<Length>,
    pub min_height: Option<Length>,
    pub max_width: Option<Length>,
    pub max_height: Option<Length>,
    pub aspect_ratio: Option<f32>,
    pub gap: Option<Length>,
    pub align: Option<String>,
    pub justify: Option<String>,
    pub font_size: f32,
    pub font_weight: Option<String>,
    pub text_align: Option<String>,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            padding: Edges::default(),
            margin: Edges::default(),
            border: BorderEdges::default(),
            background: None,
            text_color: None,
            radius: None,
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            aspect_ratio: None,
            gap: None,
            align: None,
            justify: None,
            font_size: 14.0,
            font_weight: None,
            text_align: None,
        }
    }
}

/// 视觉元素 - 渲染输出树的节点
#[derive(Debug, Clone)]
pub struct VisualElement {
    /// 稳定身份：节点 id/key，否则按树路径合成
    pub key: String,
    pub kind: VisualKind,
    pub style: ResolvedStyle,
    /// 同步构建的 taffy 布局节点
    pub layout: NodeId,
    /// 触发方式 → 原始动作载荷
    pub actions: Vec<(ActionTrigger, JsonValue)>,
    pub children: Vec<VisualElement>,
}

// 布局节点 id 不参与相等性：两次渲染同一定义应当视作相同输出
impl PartialEq for VisualElement {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.kind == other.kind
            && self.style == other.style
            && self.actions == other.actions
            && self.children == other.children
    }
}

impl VisualElement {
    pub fn new(key: impl Into<String>, kind: VisualKind, style: ResolvedStyle, layout: NodeId) -> Self {
        Self {
            key: key.into(),
            kind,
            style,
            layout,
            actions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// 某个触发方式上的动作载荷
    pub fn action(&self, trigger: ActionTrigger) -> Option<&JsonValue> {
        self.actions
            .iter()
            .find(|(t, _)| *t == trigger)
            .map(|(_, payload)| payload)
    }

    /// 按身份查找（含自身）
    pub fn find(&self, key: &str) -> Option<&VisualElement> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }
}

/// 组件构建上下文
pub struct ComponentContext<'a> {
    pub tokens: &'a TokenConfig,
    pub taffy: &'a mut TaffyTree,
}

/// 文本尺寸估算（无字体栈，按等宽近似）
pub fn estimate_text_size(text: &str, font_size: f32) -> (f32, f32) {
    let width = text.chars().count() as f32 * font_size * 0.6;
    (width, font_size + 4.0)
}

/// Length → taffy 尺寸
pub fn dimension_of(value: &Length) -> Dimension {
    match value {
        Length::Px(n) => length(*n),
        Length::Raw(s) => raw_dimension(s),
    }
}

fn raw_dimension(raw: &str) -> Dimension {
    let t = raw.trim();
    if let Some(p) = t.strip_suffix('%') {
        if let Ok(n) = p.parse::<f32>() {
            return percent(n / 100.0);
        }
    }
    if let Some(p) = t.strip_suffix("px") {
        if let Ok(n) = p.parse::<f32>() {
            return length(n);
        }
    }
    auto()
}

/// Length → taffy LengthPercentage（解析不了的字符串按 0 处理）
pub fn lp_of(value: &Length) -> LengthPercentage {
    match value {
        Length::Px(n) => length(*n),
        Length::Raw(s) => {
            let t = s.trim();
            if let Some(p) = t.strip_suffix('%') {
                if let Ok(n) = p.parse::<f32>() {
                    return percent(n / 100.0);
                }
            }
            if let Some(p) = t.strip_suffix("px") {
                if let Ok(n) = p.parse::<f32>() {
                    return length(n);
                }
            }
            length(0.0)
        }
    }
}

fn edges_to_rect(edges: &Edges) -> Rect<LengthPercentage> {
    Rect {
        top: edges.top.as_ref().map(lp_of).unwrap_or(length(0.0)),
        right: edges.right.as_ref().map(lp_of).unwrap_or(length(0.0)),
        bottom: edges.bottom.as_ref().map(lp_of).unwrap_or(length(0.0)),
        left: edges.left.as_ref().map(lp_of).unwrap_or(length(0.0)),
    }
}

fn edges_to_margin(edges: &Edges) -> Rect<LengthPercentageAuto> {
    fn one(v: Option<&Length>) -> LengthPercentageAuto {
        match v {
            Some(Length::Px(n)) => length(*n),
            Some(Length::Raw(s)) => {
                let t = s.trim();
                if let Some(p) = t.strip_suffix('%') {
                    if let Ok(n) = p.parse::<f32>() {
                        return percent(n / 100.0);
                    }
                }
                if let Some(p) = t.strip_suffix("px") {
                    if let Ok(n) = p.parse::<f32>() {
                        return length(n);
                    }
                }
                length(0.0)
            }
            None => length(0.0),
        }
    }
    Rect {
        top: one(edges.top.as_ref()),
        right: one(edges.right.as_ref()),
        bottom: one(edges.bottom.as_ref()),
        left: one(edges.left.as_ref()),
    }
}

fn border_to_rect(border: &BorderEdges) -> Rect<LengthPercentage> {
    fn one(stroke: Option<&BorderStroke>) -> LengthPercentage {
        stroke.map(|s| lp_of(&s.width)).unwrap_or(length(0.0))
    }
    Rect {
        top: one(border.top.as_ref()),
        right: one(border.right.as_ref()),
        bottom: one(border.bottom.as_ref()),
        left: one(border.left.as_ref()),
    }
}

fn align_items_of(value: &str) -> Option<AlignItems> {
    match value {
        "center" => Some(AlignItems::Center),
        "end" | "flex-end" => Some(AlignItems::FlexEnd),
        "start" | "flex-start" => Some(AlignItems::FlexStart),
        "stretch" => Some(AlignItems::Stretch),
        "baseline" => Some(AlignItems::Baseline),
        _ => None,
    }
}

fn justify_content_of(value: &str) -> Option<JustifyContent> {
    match value {
        "center" => Some(JustifyContent::Center),
        "end" | "flex-end" => Some(JustifyContent::FlexEnd),
        "start" | "flex-start" => Some(JustifyContent::FlexStart),
        "between" | "space-between" => Some(JustifyContent::SpaceBetween),
        "around" | "space-around" => Some(JustifyContent::SpaceAround),
        "evenly" | "space-evenly" => Some(JustifyContent::SpaceEvenly),
        _ => None,
    }
}

/// 语义样式 → (taffy 布局样式, 解析后样式)
///
/// 宽高优先级：显式 width/height 压过 size；min/max 同理。
pub fn resolve_style_spec(spec: &StyleSpec, axis: Axis, ctx: &ComponentContext) -> (Style, ResolvedStyle) {
    let tokens = ctx.tokens;
    let mut rs = ResolvedStyle::default();
    let mut ts = Style {
        display: Display::Flex,
        flex_direction: match axis {
            Axis::Vertical => FlexDirection::Column,
            Axis::Horizontal => FlexDirection::Row,
        },
        ..Default::default()
    };

    if let Some(p) = &spec.padding {
        rs.padding = resolve_spacing(p);
        ts.padding = edges_to_rect(&rs.padding);
    }
    if let Some(m) = &spec.margin {
        rs.margin = resolve_margin(m);
        ts.margin = edges_to_margin(&rs.margin);
    }
    if let Some(b) = &spec.border {
        rs.border = resolve_border(b, tokens);
        ts.border = border_to_rect(&rs.border);
    }
    if let Some(c) = &spec.background {
        rs.background = Some(resolve_color(c, tokens));
    }
    if let Some(r) = &spec.radius {
        rs.radius = Some(resolve_radius(r, tokens));
    }

    let size = spec.size.as_ref().map(Length::from_scalar);
    rs.width = spec.width.as_ref().map(Length::from_scalar).or_else(|| size.clone());
    rs.height = spec.height.as_ref().map(Length::from_scalar).or(size);
    let min_size = spec.min_size.as_ref().map(Length::from_scalar);
    rs.min_width = spec.min_width.as_ref().map(Length::from_scalar).or_else(|| min_size.clone());
    rs.min_height = spec.min_height.as_ref().map(Length::from_scalar).or(min_size);
    let max_size = spec.max_size.as_ref().map(Length::from_scalar);
    rs.max_width = spec.max_width.as_ref().map(Length::from_scalar).or_else(|| max_size.clone());
    rs.max_height = spec.max_height.as_ref().map(Length::from_scalar).or(max_size);

    if let Some(w) = &rs.width {
        ts.size.width = dimension_of(w);
    }
    if let Some(h) = &rs.height {
        ts.size.height = dimension_of(h);
    }
    if let Some(w) = &rs.min_width {
        ts.min_size.width = dimension_of(w);
    }
    if let Some(h) = &rs.min_height {
        ts.min_size.height = dimension_of(h);
    }
    if let Some(w) = &rs.max_width {
        ts.max_size.width = dimension_of(w);
    }
    if let Some(h) = &rs.max_height {
        ts.max_size.height = dimension_of(h);
    }

    if let Some(ratio) = spec.aspect_ratio {
        rs.aspect_ratio = Some(ratio as f32);
        ts.aspect_ratio = Some(ratio as f32);
    }
    if let Some(g) = &spec.gap {
        let gap = Length::from_scalar(g);
        ts.gap = Size { width: lp_of(&gap), height: lp_of(&gap) };
        rs.gap = Some(gap);
    }
    if let Some(a) = &spec.align {
        rs.align = Some(a.clone());
        ts.align_items = align_items_of(a);
    }
    if let Some(j) = &spec.justify {
        rs.justify = Some(j.clone());
        ts.justify_content = justify_content_of(j);
    }
    if let Some(w) = &spec.wrap {
        ts.flex_wrap = match w.as_str() {
            "wrap" => FlexWrap::Wrap,
            "wrap-reverse" => FlexWrap::WrapReverse,
            _ => FlexWrap::NoWrap,
        };
    }

    (ts, rs)
}
