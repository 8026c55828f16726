//! RadioGroup 组件 - 单选组

use super::base::*;
use crate::schema::RadioGroupNode;
use taffy::prelude::*;

const ROW_HEIGHT: f32 = 24.0;

pub struct RadioGroupComponent;

impl RadioGroupComponent {
    pub fn build(node: &RadioGroupNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let rows = node.options.len().max(1) as f32;
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: percent(1.0), height: length(rows * ROW_HEIGHT) },
                ..Default::default()
            })
            .unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Control(ControlKind::RadioGroup {
                name: node.name.clone(),
                options: node.options.clone(),
                default_value: node.default_value.clone().unwrap_or_default(),
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
