//! 渲染器单元测试
//! 覆盖分派、错误收场、动作派发、表单顺序与布局

use std::cell::RefCell;
use std::rc::Rc;

use crate::context::RenderContext;
use crate::renderer::components::{
    ActionTrigger, Axis, ContainerRole, ControlKind, TextRole, VisualElement, VisualKind,
};
use crate::renderer::Renderer;
use crate::schema::WidgetNode;
use serde_json::{json, Value};

/// 辅助函数：无能力上下文渲染
fn render(value: &Value) -> Option<VisualElement> {
    Renderer::new(RenderContext::new()).render_value(value)
}

/// 测试场景：横排容器 + 文本 + 语义色徽标
#[test]
fn test_row_with_text_and_badge() {
    let root = render(&json!({
        "type": "Row",
        "children": [
            {"type": "Text", "value": "Hi"},
            {"type": "Badge", "label": "New", "color": "success"}
        ]
    }))
    .unwrap();

    assert_eq!(
        root.kind,
        VisualKind::Container { role: ContainerRole::Block, axis: Axis::Horizontal }
    );
    assert_eq!(root.children.len(), 2);

    match &root.children[0].kind {
        VisualKind::Text { content, role } => {
            assert_eq!(content, "Hi");
            assert_eq!(*role, TextRole::Body);
        }
        other => panic!("expected text, got {:?}", other),
    }
    match &root.children[1].kind {
        VisualKind::Badge { label, color, .. } => {
            assert_eq!(label, "New");
            assert_eq!(color, "var(--color-success)");
        }
        other => panic!("expected badge, got {:?}", other),
    }
}

/// 测试未知类型只打坏自己那个位置，兄弟不受影响
#[test]
fn test_unknown_type_contained() {
    let root = render(&json!({
        "type": "Box",
        "children": [
            {"type": "Text", "value": "before"},
            {"type": "Bogus"},
            {"type": "Text", "value": "after"}
        ]
    }))
    .unwrap();

    assert_eq!(root.children.len(), 3);
    match &root.children[1].kind {
        VisualKind::Placeholder { message } => {
            assert_eq!(message, "Unknown widget type: Bogus");
        }
        other => panic!("expected placeholder, got {:?}", other),
    }
    assert!(matches!(&root.children[0].kind, VisualKind::Text { content, .. } if content == "before"));
    assert!(matches!(&root.children[2].kind, VisualKind::Text { content, .. } if content == "after"));
}

/// 测试 type 缺失或不是字符串时返回 None
#[test]
fn test_missing_or_mistyped_type() {
    assert!(render(&json!({"value": "hi"})).is_none());
    assert!(render(&json!({"type": 5, "value": "hi"})).is_none());
    assert!(render(&json!(null)).is_none());
    assert!(render(&json!(42)).is_none());
    assert!(render(&json!(["not", "a", "widget"])).is_none());
}

/// 测试载荷解不开的节点收在自己边界内
#[test]
fn test_malformed_node_contained() {
    let root = render(&json!({
        "type": "Box",
        "children": [
            {"type": "Text", "value": 42},
            {"type": "Text", "value": "ok"}
        ]
    }))
    .unwrap();

    assert_eq!(root.children.len(), 2);
    assert!(matches!(
        &root.children[0].kind,
        VisualKind::Placeholder { message } if message == "Malformed widget: Text"
    ));
    assert!(matches!(&root.children[1].kind, VisualKind::Text { content, .. } if content == "ok"));
}

/// 测试任意 JSON 输入不恐慌（全量性）
#[test]
fn test_totality_over_arbitrary_json() {
    let inputs = vec![
        json!({}),
        json!({"type": "Text"}),
        json!({"type": "ListView", "children": [null, 1, {"type": "Bogus"}]}),
        json!({"type": "Box", "children": {"not": "an array"}}),
        json!({"type": "Image"}),
        json!({"type": "Select", "options": "broken"}),
        json!({"type": "Form", "children": [{"type": "Box", "children": [{"type": "Col", "children": [true]}]}]}),
    ];
    let mut renderer = Renderer::new(RenderContext::new());
    for input in &inputs {
        // 返回 Some 或 None 都行，关键是不 panic
        let _ = renderer.render_value(input);
    }
}

/// 测试子节点顺序就是渲染顺序
#[test]
fn test_children_order_preserved() {
    let root = render(&json!({
        "type": "Col",
        "children": [
            {"type": "Text", "value": "1"},
            {"type": "Text", "value": "2"},
            {"type": "Text", "value": "3"}
        ]
    }))
    .unwrap();
    let texts: Vec<&str> = root
        .children
        .iter()
        .map(|c| match &c.kind {
            VisualKind::Text { content, .. } => content.as_str(),
            _ => "",
        })
        .collect();
    assert_eq!(texts, vec!["1", "2", "3"]);
}

/// 测试按钮点击派发原始动作载荷
#[test]
fn test_button_click_dispatches_payload() {
    let received: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let ctx = RenderContext::new().with_on_action(move |payload| {
        sink.borrow_mut().push(payload.clone());
    });

    let mut renderer = Renderer::new(ctx);
    let root = renderer
        .render_value(&json!({
            "type": "Button",
            "label": "Go",
            "onClickAction": {"kind": "workflow.run", "step": "s1"}
        }))
        .unwrap();

    let rerender = renderer.activate(&root);
    assert!(!rerender);
    assert_eq!(*received.borrow(), vec![json!({"kind": "workflow.run", "step": "s1"})]);
}

/// 测试能力缺失是安全空操作
#[test]
fn test_missing_capabilities_noop() {
    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer
        .render_value(&json!({
            "type": "Button",
            "label": "Go",
            "onClickAction": {"kind": "noop"}
        }))
        .unwrap();
    renderer.activate(&root);
    renderer.change(&root);
    renderer.submit(&root, &json!({}));
}

/// 测试表单提交顺序：先表单数据，后提交动作
#[test]
fn test_form_submit_order() {
    let calls: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let action_sink = calls.clone();
    let data_sink = calls.clone();
    let ctx = RenderContext::new()
        .with_on_action(move |_| action_sink.borrow_mut().push("action".to_string()))
        .with_on_form_data(move |data| {
            data_sink.borrow_mut().push(format!("form:{}", data["name"].as_str().unwrap_or("")));
        });

    let mut renderer = Renderer::new(ctx);
    let form = renderer
        .render_value(&json!({
            "type": "Form",
            "onSubmitAction": {"kind": "submit"},
            "children": [{"type": "Input", "name": "name"}]
        }))
        .unwrap();

    renderer.submit(&form, &json!({"name": "Ada"}));
    assert_eq!(*calls.borrow(), vec!["form:Ada".to_string(), "action".to_string()]);
}

/// 测试 Select 值变化派发 onChangeAction
#[test]
fn test_select_change_dispatch() {
    let received: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let ctx = RenderContext::new().with_on_action(move |p| sink.borrow_mut().push(p.clone()));

    let mut renderer = Renderer::new(ctx);
    let select = renderer
        .render_value(&json!({
            "type": "Select",
            "name": "city",
            "options": [{"value": "sh", "label": "Shanghai"}],
            "onChangeAction": {"kind": "state.set"}
        }))
        .unwrap();

    match &select.kind {
        VisualKind::Control(ControlKind::Select { name, options, .. }) => {
            assert_eq!(name, "city");
            assert_eq!(options.len(), 1);
        }
        other => panic!("expected select, got {:?}", other),
    }

    renderer.change(&select);
    assert_eq!(*received.borrow(), vec![json!({"kind": "state.set"})]);
    assert_eq!(select.action(ActionTrigger::Change), Some(&json!({"kind": "state.set"})));
}

/// 测试 Input 值变化派发 onChangeAction
#[test]
fn test_input_change_dispatch() {
    let received: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let ctx = RenderContext::new().with_on_action(move |p| sink.borrow_mut().push(p.clone()));

    let mut renderer = Renderer::new(ctx);
    let input = renderer
        .render_value(&json!({
            "type": "Input",
            "name": "query",
            "onChangeAction": {"kind": "state.set", "field": "query"}
        }))
        .unwrap();

    renderer.change(&input);
    assert_eq!(*received.borrow(), vec![json!({"kind": "state.set", "field": "query"})]);
}

/// 测试布局传递：横排容器的子元素水平排开
#[test]
fn test_layout_row_positions() {
    let mut renderer = Renderer::new(RenderContext::new());
    let root = renderer
        .render_value(&json!({
            "type": "Row",
            "children": [
                {"type": "Text", "value": "Hello"},
                {"type": "Text", "value": "World"}
            ]
        }))
        .unwrap();

    renderer.compute_layout(&root, 400.0);
    let first = renderer.layout_of(&root.children[0]).unwrap();
    let second = renderer.layout_of(&root.children[1]).unwrap();
    assert!(first.size.width > 0.0);
    assert!(second.location.x >= first.location.x + first.size.width);
    assert_eq!(first.location.y, second.location.y);
}

/// 测试能力包一次注入、整个渲染期可达
#[test]
fn test_context_capabilities_reachable() {
    use crate::context::ApiConfig;

    let ctx = RenderContext::new()
        .with_api_config(ApiConfig { base_url: "https://api.example.com".to_string() })
        .with_auth_token("tok-123");
    let renderer = Renderer::new(ctx);

    let api = renderer.context().api_config.as_ref().unwrap();
    assert_eq!(api.base_url, "https://api.example.com");
    assert_eq!(renderer.context().auth_token.as_deref(), Some("tok-123"));
}

/// 测试输入定义不被渲染修改
#[test]
fn test_definition_not_mutated() {
    let value = json!({
        "type": "Card",
        "children": [{"type": "Text", "value": "stable"}]
    });
    let node = WidgetNode::from_value(&value);
    let before = node.clone();
    let mut renderer = Renderer::new(RenderContext::new());
    let _ = renderer.render(&node);
    let _ = renderer.render(&node);
    assert_eq!(node, before);
}
