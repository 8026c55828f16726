//! ListView 组件 - 列表容器与截断展开入口
//!
//! 截断本身是渲染器的本地视图状态（按列表身份记展开集合），这里
//! 只负责壳子、列表项和展开入口元素。

use super::base::*;
use crate::schema::{ListViewItemNode, ListViewNode};
use taffy::prelude::*;

pub struct ListViewComponent;

impl ListViewComponent {
    pub fn build(node: &ListViewNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let (ts, rs) = resolve_style_spec(&node.style, Axis::Vertical, ctx);
        let tn = ctx.taffy.new_leaf(ts).unwrap();
        VisualElement::new(
            key,
            VisualKind::Container { role: ContainerRole::List, axis: Axis::Vertical },
            rs,
            tn,
        )
    }

    /// 截断后的展开入口；激活（Renderer::activate）后同列表全量重渲
    pub fn reveal_element(list_key: &str, remaining: usize, ctx: &mut ComponentContext) -> VisualElement {
        let rs = ResolvedStyle {
            text_color: Some("var(--color-secondary)".to_string()),
            font_size: 13.0,
            ..Default::default()
        };
        let label = format!("Show {} more", remaining);
        let (tw, th) = estimate_text_size(&label, rs.font_size);
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: length(tw), height: length(th + 8.0) },
                ..Default::default()
            })
            .unwrap();
        VisualElement::new(
            format!("{}#reveal", list_key),
            VisualKind::Reveal { list: list_key.to_string(), remaining },
            rs,
            tn,
        )
    }
}

pub struct ListViewItemComponent;

impl ListViewItemComponent {
    pub fn build(node: &ListViewItemNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let (ts, rs) = resolve_style_spec(&node.style, Axis::Horizontal, ctx);
        let tn = ctx.taffy.new_leaf(ts).unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Container { role: ContainerRole::ListItem, axis: Axis::Horizontal },
            rs,
            tn,
        );
        if let Some(action) = &node.on_click_action {
            el.actions.push((ActionTrigger::Click, action.clone()));
        }
        el
    }
}
