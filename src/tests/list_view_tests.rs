//! ListView 截断与展开测试

use crate::context::RenderContext;
use crate::renderer::components::{VisualElement, VisualKind};
use crate::renderer::Renderer;
use crate::schema::WidgetNode;
use serde_json::{json, Value};

/// 辅助函数：n 个列表项的 ListView 定义
fn list_definition(id: &str, items: usize, limit: Value) -> Value {
    let children: Vec<Value> = (0..items)
        .map(|i| {
            json!({
                "type": "ListViewItem",
                "children": [{"type": "Text", "value": format!("item {}", i)}]
            })
        })
        .collect();
    json!({"type": "ListView", "id": id, "limit": limit, "children": children})
}

fn reveal_of(list: &VisualElement) -> Option<&VisualElement> {
    list.children.iter().find(|c| matches!(c.kind, VisualKind::Reveal { .. }))
}

/// 测试 10 项 limit=3：渲染 3 项加一个展开入口
#[test]
fn test_truncation_renders_limit_plus_reveal() {
    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer.render_value(&list_definition("list", 10, json!(3))).unwrap();

    assert_eq!(root.children.len(), 4);
    let reveal = reveal_of(&root).unwrap();
    match &reveal.kind {
        VisualKind::Reveal { list, remaining } => {
            assert_eq!(list, "list");
            assert_eq!(*remaining, 7);
        }
        _ => unreachable!(),
    }
}

/// 测试激活展开入口后全量重渲且入口消失
#[test]
fn test_reveal_expands_and_removes_affordance() {
    let definition = list_definition("list", 10, json!(3));
    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer.render_value(&definition).unwrap();

    let reveal = reveal_of(&root).unwrap().clone();
    let needs_rerender = renderer.activate(&reveal);
    assert!(needs_rerender);

    let expanded = renderer.render_value(&definition).unwrap();
    assert_eq!(expanded.children.len(), 10);
    assert!(reveal_of(&expanded).is_none());
}

/// 测试 "auto" 哨兵不截断
#[test]
fn test_limit_auto_never_truncates() {
    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer.render_value(&list_definition("list", 6, json!("auto"))).unwrap();
    assert_eq!(root.children.len(), 6);
    assert!(reveal_of(&root).is_none());
}

/// 测试 limit 不小于项数时没有展开入口
#[test]
fn test_limit_at_least_len_no_affordance() {
    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer.render_value(&list_definition("list", 4, json!(4))).unwrap();
    assert_eq!(root.children.len(), 4);
    assert!(reveal_of(&root).is_none());
}

/// 测试展开是本地视图状态，输入定义不动
#[test]
fn test_expansion_is_local_state() {
    let definition = list_definition("list", 5, json!(2));
    let node = WidgetNode::from_value(&definition);
    let before = node.clone();

    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer.render(&node).unwrap();
    let reveal = reveal_of(&root).unwrap().clone();
    renderer.activate(&reveal);
    let _ = renderer.render(&node);

    assert_eq!(node, before);
}

/// 测试没有 id 的列表按路径身份展开，不串到别的列表
#[test]
fn test_anonymous_lists_expand_independently() {
    let definition = json!({
        "type": "Col",
        "children": [
            list_definition_anonymous(5, json!(2)),
            list_definition_anonymous(5, json!(2))
        ]
    });
    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer.render_value(&definition).unwrap();

    let first_reveal = reveal_of(&root.children[0]).unwrap().clone();
    renderer.activate(&first_reveal);

    let again = renderer.render_value(&definition).unwrap();
    assert_eq!(again.children[0].children.len(), 5);
    // 第二个列表仍然截断：2 项 + 展开入口
    assert_eq!(again.children[1].children.len(), 3);
}

fn list_definition_anonymous(items: usize, limit: Value) -> Value {
    let children: Vec<Value> = (0..items)
        .map(|i| {
            json!({
                "type": "ListViewItem",
                "children": [{"type": "Text", "value": format!("item {}", i)}]
            })
        })
        .collect();
    json!({"type": "ListView", "limit": limit, "children": children})
}
