//! Markdown 组件 - 源文本原样交给宿主的 Markdown 渲染层

use super::base::*;
use crate::schema::MarkdownNode;
use taffy::prelude::*;

pub struct MarkdownComponent;

impl MarkdownComponent {
    pub fn build(node: &MarkdownNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let rs = ResolvedStyle::default();
        // 行数按换行估算，宽度交给父容器
        let lines = node.value.lines().count().max(1) as f32;
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: auto(), height: length(lines * (rs.font_size + 6.0)) },
                ..Default::default()
            })
            .unwrap();

        VisualElement::new(key, VisualKind::Markdown { source: node.value.clone() }, rs, tn)
    }
}
