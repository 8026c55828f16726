//! Badge 组件 - 语义色标签

use super::base::*;
use crate::renderer::style_resolver::resolve_color;
use crate::schema::{BadgeNode, ColorSpec};
use taffy::prelude::*;

/// 没给颜色时的缺省语义色
const DEFAULT_COLOR: &str = "secondary";

pub struct BadgeComponent;

impl BadgeComponent {
    pub fn build(node: &BadgeNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let color = node
            .color
            .clone()
            .unwrap_or_else(|| ColorSpec::Token(DEFAULT_COLOR.to_string()));
        let resolved = resolve_color(&color, ctx.tokens);

        let mut rs = ResolvedStyle::default();
        rs.font_size = 12.0;
        rs.text_color = Some(resolved.clone());

        let (tw, th) = estimate_text_size(&node.label, rs.font_size);
        let tn = ctx
            .taffy
            .new_leaf(Style {
                // 左右各 6px 胶囊内边距
                size: Size { width: length(tw + 12.0), height: length(th + 4.0) },
                ..Default::default()
            })
            .unwrap();

        VisualElement::new(
            key,
            VisualKind::Badge {
                label: node.label.clone(),
                color: resolved,
                variant: node.variant.clone().unwrap_or_else(|| "soft".to_string()),
                pill: node.pill,
            },
            rs,
            tn,
        )
    }
}
