//! 文本族组件 - Text/Title/Caption/Label

use super::base::*;
use crate::renderer::style_resolver::resolve_color;
use crate::schema::TextNode;
use taffy::prelude::*;

pub struct TextComponent;

impl TextComponent {
    pub fn build(node: &TextNode, role: TextRole, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let mut rs = ResolvedStyle::default();
        rs.font_size = font_size_of(node.size.as_deref(), role);
        rs.font_weight = node.weight.clone();
        rs.text_align = node.text_align.clone();
        if let Some(color) = &node.color {
            rs.text_color = Some(resolve_color(color, ctx.tokens));
        }

        // 无字体栈，按字符数估算占位尺寸
        let (tw, th) = estimate_text_size(&node.value, rs.font_size);
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: length(tw), height: length(th) },
                ..Default::default()
            })
            .unwrap();

        VisualElement::new(
            key,
            VisualKind::Text { content: node.value.clone(), role },
            rs,
            tn,
        )
    }
}

fn font_size_of(size: Option<&str>, role: TextRole) -> f32 {
    match size {
        Some("xs") => 11.0,
        Some("sm") => 12.0,
        Some("md") => 14.0,
        Some("lg") => 16.0,
        Some("xl") => 18.0,
        Some("2xl") => 22.0,
        _ => role.default_font_size(),
    }
}
