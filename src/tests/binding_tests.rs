//! 绑定发现与样本合成测试

use crate::preview::{build_sample, collect_bindings, Sample};
use crate::schema::{Binding, WidgetNode};
use serde_json::{json, Value};

fn node(value: Value) -> WidgetNode {
    WidgetNode::from_value(&value)
}

/// 测试单个带 id 文本槽位的发现与样本
#[test]
fn test_collect_titled_text() {
    let def = node(json!({"type": "Text", "id": "title", "value": "Hello"}));
    let bindings = collect_bindings(&def);

    assert_eq!(bindings.len(), 1);
    let info = &bindings["title"];
    assert_eq!(info.identifier, "title");
    assert_eq!(info.variant, "Text");
    assert_eq!(info.sample, Sample::Text("Hello".to_string()));

    let sample = build_sample(&def, &bindings);
    assert_eq!(sample["title"], json!("Hello"));
}

/// 测试重复发现得到完全相同的绑定表（幂等）
#[test]
fn test_discovery_idempotent() {
    let def = node(json!({
        "type": "Card",
        "children": [
            {"type": "Title", "value": "Report"},
            {"type": "Text", "value": "body"},
            {"type": "Badge", "label": "Ready", "color": "success"},
            {"type": "Button", "label": "Run", "onClickAction": {"kind": "run"}}
        ]
    }));
    assert_eq!(collect_bindings(&def), collect_bindings(&def));
}

/// 测试匿名槽位的合成标识符稳定有序
#[test]
fn test_anonymous_identifiers() {
    let def = node(json!({
        "type": "Col",
        "children": [
            {"type": "Text", "value": "first"},
            {"type": "Text", "value": "second"}
        ]
    }));
    let bindings = collect_bindings(&def);
    assert_eq!(bindings["Text#1"].sample, Sample::Text("first".to_string()));
    assert_eq!(bindings["Text#2"].sample, Sample::Text("second".to_string()));
}

/// 测试选项列表是多值槽位，样本取展示文案
#[test]
fn test_select_options_sample() {
    let def = node(json!({
        "type": "Select",
        "id": "city",
        "name": "city",
        "options": [
            {"value": "sh", "label": "Shanghai"},
            {"value": "bj", "label": "Beijing"},
            {"value": "gz"}
        ]
    }));
    let bindings = collect_bindings(&def);
    assert_eq!(
        bindings["city"].sample,
        Sample::List(vec!["Shanghai".to_string(), "Beijing".to_string(), "gz".to_string()])
    );
    let sample = build_sample(&def, &bindings);
    assert_eq!(sample["city"], json!(["Shanghai", "Beijing", "gz"]));
}

/// 测试带身份的列表收集每项代表文案
#[test]
fn test_named_list_sample() {
    let def = node(json!({
        "type": "ListView",
        "id": "orders",
        "children": [
            {"type": "ListViewItem", "children": [{"type": "Text", "value": "Order A"}]},
            {"type": "ListViewItem", "children": [{"type": "Text", "value": "Order B"}]}
        ]
    }));
    let bindings = collect_bindings(&def);
    assert_eq!(
        bindings["orders"].sample,
        Sample::List(vec!["Order A".to_string(), "Order B".to_string()])
    );
    // 列表项里的文本是自己的槽位
    assert_eq!(bindings["Text#1"].sample, Sample::Text("Order A".to_string()));
}

/// 测试媒体来源：带身份才算槽位
#[test]
fn test_media_source_needs_identity() {
    let named = node(json!({"type": "Image", "id": "hero", "src": "https://x/img.png"}));
    let bindings = collect_bindings(&named);
    assert_eq!(bindings["hero"].sample, Sample::Text("https://x/img.png".to_string()));
    assert_eq!(bindings["hero"].variant, "Image");

    let anonymous = node(json!({"type": "Image", "src": "https://x/img.png"}));
    assert!(collect_bindings(&anonymous).is_empty());
}

/// 测试纯图标按钮不出文案槽位
#[test]
fn test_icon_only_button_skipped() {
    let def = node(json!({
        "type": "Row",
        "children": [
            {"type": "Button", "iconStart": "gear"},
            {"type": "Button", "label": "Save"}
        ]
    }));
    let bindings = collect_bindings(&def);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings["Button#1"].sample, Sample::Text("Save".to_string()));
}

/// 测试发现出的标识符能接上外部表达式绑定
#[test]
fn test_binding_pairs_with_expression() {
    let def = node(json!({"type": "Text", "id": "title", "value": "Hello"}));
    let bindings = collect_bindings(&def);

    let wired = Binding {
        identifier: bindings["title"].identifier.clone(),
        expression: "input.title".to_string(),
    };
    let encoded = serde_json::to_value(&wired).unwrap();
    assert_eq!(encoded, json!({"identifier": "title", "expression": "input.title"}));
}

/// 测试样本严格取自字面量，不造数据
#[test]
fn test_sample_never_invents_data() {
    let def = node(json!({"type": "Text", "id": "empty", "value": ""}));
    let bindings = collect_bindings(&def);
    let sample = build_sample(&def, &bindings);
    assert_eq!(sample["empty"], json!(""));
}
