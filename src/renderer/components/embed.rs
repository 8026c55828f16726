//! 外嵌组件 - Chart/ComputerUse 的占位壳
//!
//! 内容由宿主的外嵌层接管，这里只保证布局上有个稳定的框。

use super::base::*;
use crate::schema::EmbedNode;
use taffy::prelude::*;

/// 外嵌框缺省宽高比
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

pub struct EmbedComponent;

impl EmbedComponent {
    pub fn build(node: &EmbedNode, kind: &str, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let mut rs = ResolvedStyle::default();
        rs.aspect_ratio = Some(DEFAULT_ASPECT);
        rs.background = Some("var(--color-surface)".to_string());

        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: percent(1.0), height: auto() },
                aspect_ratio: Some(DEFAULT_ASPECT),
                ..Default::default()
            })
            .unwrap();

        VisualElement::new(
            key,
            VisualKind::Embed {
                kind: kind.to_string(),
                config: serde_json::Value::Object(node.config.clone()),
            },
            rs,
            tn,
        )
    }
}
