//! Icon 组件 - 命名图标

use super::base::*;
use crate::renderer::style_resolver::{resolve_color, Length};
use crate::schema::{IconNode, ScalarOrText};
use taffy::prelude::*;

/// 缺省图标边长
const DEFAULT_SIZE: f32 = 16.0;

pub struct IconComponent;

impl IconComponent {
    pub fn build(node: &IconNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let side = match node.size.as_ref() {
            Some(ScalarOrText::Number(n)) => *n as f32,
            _ => DEFAULT_SIZE,
        };

        let mut rs = ResolvedStyle::default();
        rs.width = Some(Length::Px(side));
        rs.height = Some(Length::Px(side));
        let color = node.color.as_ref().map(|c| resolve_color(c, ctx.tokens));
        rs.text_color = color.clone();

        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: length(side), height: length(side) },
                ..Default::default()
            })
            .unwrap();

        VisualElement::new(key, VisualKind::Icon { name: node.name.clone(), color }, rs, tn)
    }
}
