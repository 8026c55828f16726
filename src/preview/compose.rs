//! 预览合成 - 把覆盖值代进定义树
//!
//! 产出结构同形的派生树，原定义不动。覆盖值只认绑定表里登记过的
//! 槽位；值缺失或形状不可用时槽位保持字面量原样（字面量就是样本，
//! 回落等于不动）。派生树短生命周期，每次重算丢弃，不落盘。

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::schema::{SelectOption, WidgetNode};

use super::bindings::{BindingInfo, Counters};

/// 派生出的预览树，与输入定义同构
pub type PreviewDefinition = WidgetNode;

/// 规整后的覆盖值
enum OverrideValue {
    Text(String),
    List(Vec<String>),
}

impl OverrideValue {
    fn as_text(&self) -> String {
        match self {
            OverrideValue::Text(s) => s.clone(),
            OverrideValue::List(items) => items.join(", "),
        }
    }

    fn as_list(&self) -> Vec<String> {
        match self {
            OverrideValue::Text(s) => vec![s.clone()],
            OverrideValue::List(items) => items.clone(),
        }
    }
}

/// 覆盖值规整：字符串先试 JSON 解码（解不开按原文），数字/布尔转
/// 字符串，原始类型数组转有序字符串列表，其余形状丢弃
fn coerce_override(value: &JsonValue) -> Option<OverrideValue> {
    match value {
        JsonValue::String(s) => Some(coerce_text(s)),
        JsonValue::Number(n) => Some(OverrideValue::Text(n.to_string())),
        JsonValue::Bool(b) => Some(OverrideValue::Text(b.to_string())),
        JsonValue::Array(items) => Some(OverrideValue::List(primitive_strings(items))),
        JsonValue::Object(_) | JsonValue::Null => None,
    }
}

fn coerce_text(text: &str) -> OverrideValue {
    match serde_json::from_str::<JsonValue>(text) {
        Ok(JsonValue::Array(items)) => OverrideValue::List(primitive_strings(&items)),
        Ok(JsonValue::String(inner)) => OverrideValue::Text(inner),
        Ok(JsonValue::Number(n)) => OverrideValue::Text(n.to_string()),
        Ok(JsonValue::Bool(b)) => OverrideValue::Text(b.to_string()),
        _ => OverrideValue::Text(text.to_string()),
    }
}

fn primitive_strings(items: &[JsonValue]) -> Vec<String> {
    // 非原始类型条目丢弃
    items
        .iter()
        .filter_map(|v| match v {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

/// 把覆盖值代入定义，得到预览树
pub fn apply_values(
    definition: &WidgetNode,
    values: &BTreeMap<String, JsonValue>,
    bindings: &BTreeMap<String, BindingInfo>,
) -> PreviewDefinition {
    let mut tree = definition.clone();
    let mut counters = Counters::default();
    apply_node(&mut tree, &mut counters, values, bindings);
    tree
}

fn override_for(
    identifier: &str,
    values: &BTreeMap<String, JsonValue>,
    bindings: &BTreeMap<String, BindingInfo>,
) -> Option<OverrideValue> {
    if !bindings.contains_key(identifier) {
        return None;
    }
    values.get(identifier).and_then(coerce_override)
}

/// 按位改写选项文案：多出来的条目补成新选项，不够的保留字面量。
/// 文案没变就不动，保证样本代回去是严格的空操作
fn apply_labels(options: &mut Vec<SelectOption>, labels: &[String]) {
    for (i, label) in labels.iter().enumerate() {
        match options.get_mut(i) {
            Some(opt) => {
                if opt.label() != label {
                    opt.label = Some(label.clone());
                }
            }
            None => {
                options.push(SelectOption { value: label.clone(), label: Some(label.clone()) });
            }
        }
    }
}

/// 子树里第一段可编辑文本的写入口，与 primary_text 的读取对称
fn set_primary_text(node: &mut WidgetNode, value: &str) -> bool {
    match node {
        WidgetNode::Text(n) | WidgetNode::Title(n) | WidgetNode::Caption(n)
        | WidgetNode::Label(n) => {
            n.value = value.to_string();
            true
        }
        WidgetNode::Markdown(n) => {
            n.value = value.to_string();
            true
        }
        WidgetNode::Box(n) | WidgetNode::Row(n) | WidgetNode::Col(n) | WidgetNode::Card(n)
        | WidgetNode::Transition(n) => set_in_children(&mut n.children, value),
        WidgetNode::Form(n) => set_in_children(&mut n.children, value),
        WidgetNode::ListViewItem(n) => set_in_children(&mut n.children, value),
        _ => false,
    }
}

fn set_in_children(children: &mut [WidgetNode], value: &str) -> bool {
    for child in children {
        if set_primary_text(child, value) {
            return true;
        }
    }
    false
}

fn apply_node(
    node: &mut WidgetNode,
    counters: &mut Counters,
    values: &BTreeMap<String, JsonValue>,
    bindings: &BTreeMap<String, BindingInfo>,
) {
    // 槽位判定、序数分配必须与 collect_bindings 的遍历完全一致
    match node {
        WidgetNode::Text(_) | WidgetNode::Title(_) | WidgetNode::Caption(_)
        | WidgetNode::Label(_) => {
            let identifier = counters.next(node);
            if let Some(v) = override_for(&identifier, values, bindings) {
                let text = v.as_text();
                match node {
                    WidgetNode::Text(n) | WidgetNode::Title(n) | WidgetNode::Caption(n)
                    | WidgetNode::Label(n) => n.value = text,
                    _ => unreachable!(),
                }
            }
        }
        WidgetNode::Markdown(_) => {
            let identifier = counters.next(node);
            if let Some(v) = override_for(&identifier, values, bindings) {
                if let WidgetNode::Markdown(n) = node {
                    n.value = v.as_text();
                }
            }
        }
        WidgetNode::Badge(_) => {
            let identifier = counters.next(node);
            if let Some(v) = override_for(&identifier, values, bindings) {
                if let WidgetNode::Badge(n) = node {
                    n.label = v.as_text();
                }
            }
        }
        WidgetNode::Button(_) => {
            let has_label = matches!(node, WidgetNode::Button(n) if !n.label.is_empty());
            if has_label {
                let identifier = counters.next(node);
                if let Some(v) = override_for(&identifier, values, bindings) {
                    if let WidgetNode::Button(n) = node {
                        n.label = v.as_text();
                    }
                }
            }
        }
        WidgetNode::Select(_) => {
            let identifier = counters.next(node);
            if let Some(v) = override_for(&identifier, values, bindings) {
                if let WidgetNode::Select(n) = node {
                    apply_labels(&mut n.options, &v.as_list());
                }
            }
        }
        WidgetNode::RadioGroup(_) => {
            let identifier = counters.next(node);
            if let Some(v) = override_for(&identifier, values, bindings) {
                if let WidgetNode::RadioGroup(n) = node {
                    apply_labels(&mut n.options, &v.as_list());
                }
            }
        }
        WidgetNode::Image(_) => {
            if node.identity().is_some() {
                let identifier = counters.next(node);
                if let Some(v) = override_for(&identifier, values, bindings) {
                    if let WidgetNode::Image(n) = node {
                        n.src = v.as_text();
                    }
                }
            }
        }
        WidgetNode::ListView(_) => {
            if node.identity().is_some() {
                let identifier = counters.next(node);
                if let Some(v) = override_for(&identifier, values, bindings) {
                    if let WidgetNode::ListView(n) = node {
                        for (child, text) in n.children.iter_mut().zip(v.as_list()) {
                            set_primary_text(child, &text);
                        }
                    }
                }
            }
            // 列表项里的槽位有自己的标识符，显式覆盖仍然生效
            if let WidgetNode::ListView(n) = node {
                for child in &mut n.children {
                    apply_node(child, counters, values, bindings);
                }
            }
        }
        WidgetNode::Box(n) | WidgetNode::Row(n) | WidgetNode::Col(n) | WidgetNode::Card(n)
        | WidgetNode::Transition(n) => {
            for child in &mut n.children {
                apply_node(child, counters, values, bindings);
            }
        }
        WidgetNode::Form(n) => {
            for child in &mut n.children {
                apply_node(child, counters, values, bindings);
            }
        }
        WidgetNode::ListViewItem(n) => {
            for child in &mut n.children {
                apply_node(child, counters, values, bindings);
            }
        }
        _ => {}
    }
}
