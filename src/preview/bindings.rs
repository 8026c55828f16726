//! 绑定发现与样本合成
//!
//! 一次遍历找出定义里所有可覆盖的槽位：可编辑文本、选项/列表、带
//! 身份的媒体来源。样本严格取自定义里已写好的字面量，从不造数据；
//! 同一棵定义重复发现得到完全相同的绑定表。

use std::collections::{BTreeMap, HashMap};

use serde_json::Value as JsonValue;

use crate::schema::WidgetNode;

/// 槽位样本 - 单值或有序多值
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Text(String),
    List(Vec<String>),
}

impl Sample {
    pub fn to_value(&self) -> JsonValue {
        match self {
            Sample::Text(s) => JsonValue::String(s.clone()),
            Sample::List(items) => {
                JsonValue::Array(items.iter().cloned().map(JsonValue::String).collect())
            }
        }
    }
}

/// 发现出的槽位
#[derive(Debug, Clone, PartialEq)]
pub struct BindingInfo {
    pub identifier: String,
    /// 槽位所在的变体名
    pub variant: String,
    pub sample: Sample,
}

/// 槽位标识符分配器
///
/// 节点自带 id/key 就用它，否则按 `<变体名>#<序数>` 合成。序数按
/// 变体统计所有可记录槽位（含带身份的），发现与合成两条遍历用同
/// 一套规则，保证对位。
#[derive(Default)]
pub(super) struct Counters(HashMap<String, usize>);

impl Counters {
    pub(super) fn next(&mut self, node: &WidgetNode) -> String {
        let n = self.bump(node.kind());
        match node.identity() {
            Some(id) => id.to_string(),
            None => format!("{}#{}", node.kind(), n),
        }
    }

    fn bump(&mut self, kind: &str) -> usize {
        let entry = self.0.entry(kind.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }
}

/// 子树里第一段可编辑文本（列表项的代表文案）
pub(super) fn primary_text(node: &WidgetNode) -> Option<String> {
    match node {
        WidgetNode::Text(n) | WidgetNode::Title(n) | WidgetNode::Caption(n)
        | WidgetNode::Label(n) => Some(n.value.clone()),
        WidgetNode::Markdown(n) => Some(n.value.clone()),
        _ => node.children()?.iter().find_map(primary_text),
    }
}

/// 发现定义里全部可覆盖槽位
pub fn collect_bindings(definition: &WidgetNode) -> BTreeMap<String, BindingInfo> {
    let mut out = BTreeMap::new();
    let mut counters = Counters::default();
    walk(definition, &mut counters, &mut out);
    out
}

fn record(
    node: &WidgetNode,
    sample: Sample,
    counters: &mut Counters,
    out: &mut BTreeMap<String, BindingInfo>,
) {
    let identifier = counters.next(node);
    out.insert(
        identifier.clone(),
        BindingInfo { identifier, variant: node.kind().to_string(), sample },
    );
}

fn walk(node: &WidgetNode, counters: &mut Counters, out: &mut BTreeMap<String, BindingInfo>) {
    match node {
        WidgetNode::Text(n) | WidgetNode::Title(n) | WidgetNode::Caption(n)
        | WidgetNode::Label(n) => {
            record(node, Sample::Text(n.value.clone()), counters, out);
        }
        WidgetNode::Markdown(n) => {
            record(node, Sample::Text(n.value.clone()), counters, out);
        }
        WidgetNode::Badge(n) => {
            record(node, Sample::Text(n.label.clone()), counters, out);
        }
        WidgetNode::Button(n) => {
            // 纯图标按钮没有可编辑文案
            if !n.label.is_empty() {
                record(node, Sample::Text(n.label.clone()), counters, out);
            }
        }
        WidgetNode::Select(n) => {
            let labels = n.options.iter().map(|o| o.label().to_string()).collect();
            record(node, Sample::List(labels), counters, out);
        }
        WidgetNode::RadioGroup(n) => {
            let labels = n.options.iter().map(|o| o.label().to_string()).collect();
            record(node, Sample::List(labels), counters, out);
        }
        WidgetNode::Image(n) => {
            // 只有点了名（带身份）的媒体来源才算槽位
            if node.identity().is_some() {
                record(node, Sample::Text(n.src.clone()), counters, out);
            }
        }
        WidgetNode::ListView(n) => {
            if node.identity().is_some() {
                let items = n.children.iter().filter_map(primary_text).collect();
                record(node, Sample::List(items), counters, out);
            }
            for child in &n.children {
                walk(child, counters, out);
            }
        }
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    walk(child, counters, out);
                }
            }
        }
    }
}

/// 按当前定义为每个槽位取样本值
///
/// 样本严格来自字面量；传入的绑定表过期时（定义改过），以当前定义
/// 里重新发现的字面量为准。
pub fn build_sample(
    definition: &WidgetNode,
    bindings: &BTreeMap<String, BindingInfo>,
) -> BTreeMap<String, JsonValue> {
    let fresh = collect_bindings(definition);
    bindings
        .iter()
        .map(|(identifier, info)| {
            let sample = fresh.get(identifier).map(|f| &f.sample).unwrap_or(&info.sample);
            (identifier.clone(), sample.to_value())
        })
        .collect()
}
