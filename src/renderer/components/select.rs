//! Select 组件 - 下拉选择

use super::base::*;
use crate::schema::SelectNode;
use taffy::prelude::*;

const CONTROL_HEIGHT: f32 = 32.0;

pub struct SelectComponent;

impl SelectComponent {
    pub fn build(node: &SelectNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: percent(1.0), height: length(CONTROL_HEIGHT) },
                ..Default::default()
            })
            .unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Control(ControlKind::Select {
                name: node.name.clone(),
                options: node.options.clone(),
                default_value: node.default_value.clone().unwrap_or_default(),
                placeholder: node.placeholder.clone().unwrap_or_default(),
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
