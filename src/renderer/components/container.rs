//! 容器组件 - Box/Row/Col/Card/Transition
//!
//! 只装配自身样式和布局节点，子节点递归由渲染器完成。

use super::base::*;
use crate::renderer::style_resolver::Length;
use crate::schema::ContainerNode;

pub struct ContainerComponent;

impl ContainerComponent {
    pub fn build(
        node: &ContainerNode,
        role: ContainerRole,
        default_axis: Axis,
        key: &str,
        ctx: &mut ComponentContext,
    ) -> VisualElement {
        // direction 改主轴，缺省主轴由变体决定（Row 横、其余竖）
        let axis = match node.direction.as_deref() {
            Some("row") | Some("horizontal") => Axis::Horizontal,
            Some("col") | Some("column") | Some("vertical") => Axis::Vertical,
            _ => default_axis,
        };

        let (ts, mut rs) = resolve_style_spec(&node.style, axis, ctx);
        if role == ContainerRole::Card && rs.background.is_none() {
            rs.background = Some("var(--color-surface)".to_string());
        }
        if role == ContainerRole::Card && rs.radius.is_none() {
            rs.radius = Some(Length::Raw("var(--radius-md)".to_string()));
        }

        let tn = ctx.taffy.new_leaf(ts).unwrap();
        VisualElement::new(key, VisualKind::Container { role, axis }, rs, tn)
    }
}
