//! 控件定义数据模型
//!
//! 控件树是以 `type` 字段区分的标签联合。反序列化是全量的：任何 JSON
//! 值都能映射到某个 WidgetNode。未识别的 `type` 落到 Unknown，载荷
//! 解不开落到 Malformed，`type` 缺失或不是字符串落到 Invalid，由渲染
//! 器在单个节点边界内收场。

mod style;

pub use style::{
    BorderEdgeValue, BorderEdgesSpec, BorderSide, BorderSpec, ColorSpec, LimitSpec, RadiusSpec,
    ScalarOrText, SpacingEdges, SpacingSpec, StyleSpec,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 交互动作载荷，原样转发给外部分发器，引擎不解释
pub type ActionConfig = Value;

/// 绑定 - 标识符到外部表达式的映射
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub identifier: String,
    pub expression: String,
}

/// 文本族节点（Text/Title/Caption/Label 共用）
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub value: String,
    pub color: Option<ColorSpec>,
    pub size: Option<String>,
    pub weight: Option<String>,
    pub text_align: Option<String>,
}

/// Markdown 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkdownNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub value: String,
}

/// Badge 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BadgeNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub label: String,
    pub color: Option<ColorSpec>,
    pub variant: Option<String>,
    pub pill: bool,
}

/// 容器节点（Box/Row/Col/Card/Transition 共用，方向由变体决定）
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub children: Vec<WidgetNode>,
    pub direction: Option<String>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

/// Form 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub children: Vec<WidgetNode>,
    pub on_submit_action: Option<ActionConfig>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

/// ListView 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListViewNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub children: Vec<WidgetNode>,
    pub limit: Option<LimitSpec>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

/// ListViewItem 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListViewItemNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub children: Vec<WidgetNode>,
    pub on_click_action: Option<ActionConfig>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

/// Image 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub src: String,
    pub alt: Option<String>,
    pub fit: Option<String>,
    #[serde(flatten)]
    pub style: StyleSpec,
}

/// Icon 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    pub color: Option<ColorSpec>,
    pub size: Option<ScalarOrText>,
}

/// Divider 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub color: Option<ColorSpec>,
    pub size: Option<ScalarOrText>,
    pub spacing: Option<SpacingSpec>,
}

/// Spacer 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub min_size: Option<ScalarOrText>,
}

/// Button 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub label: String,
    pub on_click_action: Option<ActionConfig>,
    pub variant: Option<String>,
    pub color: Option<ColorSpec>,
    pub icon_start: Option<String>,
    pub icon_end: Option<String>,
    pub submit: bool,
    pub block: bool,
    pub disabled: bool,
}

/// Input 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    pub input_type: Option<String>,
    pub default_value: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub on_change_action: Option<ActionConfig>,
}

/// Textarea 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextareaNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    pub default_value: String,
    pub placeholder: Option<String>,
    pub rows: Option<u32>,
    pub on_change_action: Option<ActionConfig>,
}

/// 选项（Select/RadioGroup 共用）
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub value: String,
    pub label: Option<String>,
}

impl SelectOption {
    /// 展示文案，缺省回落到 value
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Select 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    pub options: Vec<SelectOption>,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub on_change_action: Option<ActionConfig>,
}

/// Checkbox 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    pub label: Option<String>,
    pub default_checked: bool,
    pub disabled: bool,
    pub on_change_action: Option<ActionConfig>,
}

/// RadioGroup 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioGroupNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    pub options: Vec<SelectOption>,
    pub default_value: Option<String>,
    pub on_change_action: Option<ActionConfig>,
}

/// DatePicker 节点
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatePickerNode {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: String,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub on_change_action: Option<ActionConfig>,
}

/// 外嵌节点（Chart/ComputerUse），载荷保持不透明
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedNode {
    pub id: Option<String>,
    pub key: Option<String>,
    #[serde(flatten)]
    pub config: serde_json::Map<String, Value>,
}

/// 控件节点 - `type` 区分的标签联合，带前向兼容兜底
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetNode {
    Text(TextNode),
    Title(TextNode),
    Caption(TextNode),
    Markdown(MarkdownNode),
    Label(TextNode),
    Badge(BadgeNode),
    Box(ContainerNode),
    Row(ContainerNode),
    Col(ContainerNode),
    Card(ContainerNode),
    Form(FormNode),
    ListView(ListViewNode),
    ListViewItem(ListViewItemNode),
    Transition(ContainerNode),
    Image(ImageNode),
    Icon(IconNode),
    Divider(DividerNode),
    Spacer(SpacerNode),
    Button(ButtonNode),
    Input(InputNode),
    Textarea(TextareaNode),
    Select(SelectNode),
    Checkbox(CheckboxNode),
    RadioGroup(RadioGroupNode),
    DatePicker(DatePickerNode),
    Chart(EmbedNode),
    ComputerUse(EmbedNode),
    /// 编译期未知的 `type`，渲染为占位符
    Unknown { kind: String },
    /// `type` 认识但载荷解不开（必填字段缺失或类型不对）
    Malformed { kind: String },
    /// `type` 缺失或不是字符串
    Invalid,
}

fn decode<T, F>(value: &Value, kind: &str, wrap: F) -> WidgetNode
where
    T: DeserializeOwned,
    F: FnOnce(T) -> WidgetNode,
{
    match serde_json::from_value::<T>(value.clone()) {
        Ok(node) => wrap(node),
        Err(_) => WidgetNode::Malformed { kind: kind.to_string() },
    }
}

impl WidgetNode {
    /// 从任意 JSON 值构建节点，永不失败
    pub fn from_value(value: &Value) -> WidgetNode {
        let kind = match value.get("type") {
            Some(Value::String(s)) => s.as_str(),
            _ => return WidgetNode::Invalid,
        };

        match kind {
            "Text" => decode(value, kind, WidgetNode::Text),
            "Title" => decode(value, kind, WidgetNode::Title),
            "Caption" => decode(value, kind, WidgetNode::Caption),
            "Markdown" => decode(value, kind, WidgetNode::Markdown),
            "Label" => decode(value, kind, WidgetNode::Label),
            "Badge" => decode(value, kind, WidgetNode::Badge),
            "Box" => decode(value, kind, WidgetNode::Box),
            "Row" => decode(value, kind, WidgetNode::Row),
            "Col" => decode(value, kind, WidgetNode::Col),
            "Card" => decode(value, kind, WidgetNode::Card),
            "Form" => decode(value, kind, WidgetNode::Form),
            "ListView" => decode(value, kind, WidgetNode::ListView),
            "ListViewItem" => decode(value, kind, WidgetNode::ListViewItem),
            "Transition" => decode(value, kind, WidgetNode::Transition),
            "Image" => decode(value, kind, WidgetNode::Image),
            "Icon" => decode(value, kind, WidgetNode::Icon),
            "Divider" => decode(value, kind, WidgetNode::Divider),
            "Spacer" => decode(value, kind, WidgetNode::Spacer),
            "Button" => decode(value, kind, WidgetNode::Button),
            "Input" => decode(value, kind, WidgetNode::Input),
            "Textarea" => decode(value, kind, WidgetNode::Textarea),
            "Select" => decode(value, kind, WidgetNode::Select),
            "Checkbox" => decode(value, kind, WidgetNode::Checkbox),
            "RadioGroup" => decode(value, kind, WidgetNode::RadioGroup),
            "DatePicker" => decode(value, kind, WidgetNode::DatePicker),
            "Chart" => decode(value, kind, WidgetNode::Chart),
            "ComputerUse" => decode(value, kind, WidgetNode::ComputerUse),
            _ => WidgetNode::Unknown { kind: kind.to_string() },
        }
    }

    /// 变体名（Unknown/Malformed 返回原始 `type` 值）
    pub fn kind(&self) -> &str {
        match self {
            WidgetNode::Text(_) => "Text",
            WidgetNode::Title(_) => "Title",
            WidgetNode::Caption(_) => "Caption",
            WidgetNode::Markdown(_) => "Markdown",
            WidgetNode::Label(_) => "Label",
            WidgetNode::Badge(_) => "Badge",
            WidgetNode::Box(_) => "Box",
            WidgetNode::Row(_) => "Row",
            WidgetNode::Col(_) => "Col",
            WidgetNode::Card(_) => "Card",
            WidgetNode::Form(_) => "Form",
            WidgetNode::ListView(_) => "ListView",
            WidgetNode::ListViewItem(_) => "ListViewItem",
            WidgetNode::Transition(_) => "Transition",
            WidgetNode::Image(_) => "Image",
            WidgetNode::Icon(_) => "Icon",
            WidgetNode::Divider(_) => "Divider",
            WidgetNode::Spacer(_) => "Spacer",
            WidgetNode::Button(_) => "Button",
            WidgetNode::Input(_) => "Input",
            WidgetNode::Textarea(_) => "Textarea",
            WidgetNode::Select(_) => "Select",
            WidgetNode::Checkbox(_) => "Checkbox",
            WidgetNode::RadioGroup(_) => "RadioGroup",
            WidgetNode::DatePicker(_) => "DatePicker",
            WidgetNode::Chart(_) => "Chart",
            WidgetNode::ComputerUse(_) => "ComputerUse",
            WidgetNode::Unknown { kind } => kind,
            WidgetNode::Malformed { kind } => kind,
            WidgetNode::Invalid => "",
        }
    }

    /// 节点自带的稳定身份（id 优先于 key）
    pub fn identity(&self) -> Option<&str> {
        let (id, key) = match self {
            WidgetNode::Text(n) | WidgetNode::Title(n) | WidgetNode::Caption(n) | WidgetNode::Label(n) => {
                (&n.id, &n.key)
            }
            WidgetNode::Markdown(n) => (&n.id, &n.key),
            WidgetNode::Badge(n) => (&n.id, &n.key),
            WidgetNode::Box(n) | WidgetNode::Row(n) | WidgetNode::Col(n) | WidgetNode::Card(n)
            | WidgetNode::Transition(n) => (&n.id, &n.key),
            WidgetNode::Form(n) => (&n.id, &n.key),
            WidgetNode::ListView(n) => (&n.id, &n.key),
            WidgetNode::ListViewItem(n) => (&n.id, &n.key),
            WidgetNode::Image(n) => (&n.id, &n.key),
            WidgetNode::Icon(n) => (&n.id, &n.key),
            WidgetNode::Divider(n) => (&n.id, &n.key),
            WidgetNode::Spacer(n) => (&n.id, &n.key),
            WidgetNode::Button(n) => (&n.id, &n.key),
            WidgetNode::Input(n) => (&n.id, &n.key),
            WidgetNode::Textarea(n) => (&n.id, &n.key),
            WidgetNode::Select(n) => (&n.id, &n.key),
            WidgetNode::Checkbox(n) => (&n.id, &n.key),
            WidgetNode::RadioGroup(n) => (&n.id, &n.key),
            WidgetNode::DatePicker(n) => (&n.id, &n.key),
            WidgetNode::Chart(n) | WidgetNode::ComputerUse(n) => (&n.id, &n.key),
            WidgetNode::Unknown { .. } | WidgetNode::Malformed { .. } | WidgetNode::Invalid => {
                return None;
            }
        };
        id.as_deref().or(key.as_deref())
    }

    /// 容器变体的子节点（按渲染顺序）
    pub fn children(&self) -> Option<&[WidgetNode]> {
        match self {
            WidgetNode::Box(n) | WidgetNode::Row(n) | WidgetNode::Col(n) | WidgetNode::Card(n)
            | WidgetNode::Transition(n) => Some(&n.children),
            WidgetNode::Form(n) => Some(&n.children),
            WidgetNode::ListView(n) => Some(&n.children),
            WidgetNode::ListViewItem(n) => Some(&n.children),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for WidgetNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(WidgetNode::from_value(&value))
    }
}
