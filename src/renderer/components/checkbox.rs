//! Checkbox 组件

use super::base::*;
use crate::schema::CheckboxNode;
use taffy::prelude::*;

const BOX_SIZE: f32 = 18.0;

pub struct CheckboxComponent;

impl CheckboxComponent {
    pub fn build(node: &CheckboxNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let label = node.label.clone().unwrap_or_default();
        let (lw, _) = estimate_text_size(&label, 14.0);
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: length(BOX_SIZE + 6.0 + lw), height: length(BOX_SIZE + 2.0) },
                ..Default::default()
            })
            .unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Control(ControlKind::Checkbox {
                name: node.name.clone(),
                label,
                default_checked: node.default_checked,
                disabled: node.disabled,
            }),
            ResolvedStyle::default(),
            tn,
        );
        if let Some(action) = &node.on_change_action {
            el.actions.push((ActionTrigger::Change, action.clone()));
        }
        el
    }
}
