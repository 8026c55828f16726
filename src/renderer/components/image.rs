//! Image 组件 - 图片
//!
//! src 可以是外链 URL 或内联 data: URI。内联源不在构建时解码，
//! 留到挂载边界由资源存储转成本地对象引用（见 assets 模块）。

use super::base::*;
use crate::assets::is_inline_source;
use crate::schema::ImageNode;
use taffy::prelude::*;

/// 没给尺寸时的缺省占位宽高
const DEFAULT_WIDTH: f32 = 150.0;
const DEFAULT_HEIGHT: f32 = 100.0;

pub struct ImageComponent;

impl ImageComponent {
    pub fn build(node: &ImageNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let (mut ts, mut rs) = resolve_style_spec(&node.style, Axis::Vertical, ctx);

        if rs.width.is_none() && rs.aspect_ratio.is_none() {
            ts.size.width = length(DEFAULT_WIDTH);
        }
        if rs.height.is_none() && rs.aspect_ratio.is_none() {
            ts.size.height = length(DEFAULT_HEIGHT);
        }
        if rs.background.is_none() {
            rs.background = Some("var(--color-surface)".to_string());
        }

        let tn = ctx.taffy.new_leaf(ts).unwrap();

        let source = if is_inline_source(&node.src) {
            MediaSource::Inline(node.src.clone())
        } else {
            MediaSource::Url(node.src.clone())
        };

        VisualElement::new(
            key,
            VisualKind::Image { source, alt: node.alt.clone(), fit: node.fit.clone() },
            rs,
            tn,
        )
    }
}
