//! Form 组件 - 表单容器
//!
//! 提交时先走 on_form_data，再派发 on_submit_action，顺序固定，
//! 派发逻辑在渲染器的 submit 入口。

use super::base::*;
use crate::schema::FormNode;

pub struct FormComponent;

impl FormComponent {
    pub fn build(node: &FormNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let (ts, rs) = resolve_style_spec(&node.style, Axis::Vertical, ctx);
        let tn = ctx.taffy.new_leaf(ts).unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Container { role: ContainerRole::Form, axis: Axis::Vertical },
            rs,
            tn,
        );
        if let Some(action) = &node.on_submit_action {
            el.actions.push((ActionTrigger::Submit, action.clone()));
        }
        el
    }
}
