//! Divider/Spacer 组件 - 分隔线与弹性留白

use super::base::*;
use crate::renderer::style_resolver::{resolve_color, resolve_spacing, Length};
use crate::schema::{DividerNode, ScalarOrText, SpacerNode};
use taffy::prelude::*;

pub struct DividerComponent;

impl DividerComponent {
    pub fn build(node: &DividerNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let thickness = match node.size.as_ref() {
            Some(ScalarOrText::Number(n)) => *n as f32,
            _ => 1.0,
        };

        let mut rs = ResolvedStyle::default();
        rs.height = Some(Length::Px(thickness));
        rs.background = Some(
            node.color
                .as_ref()
                .map(|c| resolve_color(c, ctx.tokens))
                .unwrap_or_else(|| "var(--color-border)".to_string()),
        );
        if let Some(spacing) = &node.spacing {
            rs.margin = resolve_spacing(spacing);
        }

        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: auto(), height: length(thickness) },
                ..Default::default()
            })
            .unwrap();

        VisualElement::new(key, VisualKind::Divider, rs, tn)
    }
}

pub struct SpacerComponent;

impl SpacerComponent {
    pub fn build(node: &SpacerNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let min = node.min_size.as_ref().map(Length::from_scalar);
        let mut rs = ResolvedStyle::default();
        rs.min_height = min.clone();
        rs.min_width = min.clone();

        let min_dim = min.as_ref().map(|l| dimension_of(l)).unwrap_or(auto());
        let tn = ctx
            .taffy
            .new_leaf(Style {
                // 吃掉主轴剩余空间
                flex_grow: 1.0,
                min_size: Size { width: min_dim, height: min_dim },
                ..Default::default()
            })
            .unwrap();

        VisualElement::new(key, VisualKind::Spacer, rs, tn)
    }
}
