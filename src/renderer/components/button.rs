//! Button 组件
//!
//! 点击载荷原样挂在元素上，由渲染器的 activate 入口派发；
//! submit 按钮的提交流程走所在 Form 的 submit 入口。

use super::base::*;
use crate::renderer::style_resolver::resolve_color;
use crate::schema::ButtonNode;
use taffy::prelude::*;

/// 控件缺省高度
const CONTROL_HEIGHT: f32 = 32.0;

pub struct ButtonComponent;

impl ButtonComponent {
    pub fn build(node: &ButtonNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let mut rs = ResolvedStyle::default();
        if let Some(color) = &node.color {
            rs.text_color = Some(resolve_color(color, ctx.tokens));
        }

        let (tw, _) = estimate_text_size(&node.label, rs.font_size);
        let width: Dimension = if node.block { percent(1.0) } else { length(tw + 24.0) };
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width, height: length(CONTROL_HEIGHT) },
                ..Default::default()
            })
            .unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Control(ControlKind::Button {
                label: node.label.clone(),
                variant: node.variant.clone().unwrap_or_else(|| "primary".to_string()),
                icon_start: node.icon_start.clone(),
                icon_end: node.icon_end.clone(),
                submit: node.submit,
                disabled: node.disabled,
            }),
            rs,
            tn,
        );
        if let Some(action) = &node.on_click_action {
            el.actions.push((ActionTrigger::Click, action.clone()));
        }
        el
    }
}
