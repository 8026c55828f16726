//! Input/Textarea 组件 - 文本录入

use super::base::*;
use crate::schema::{InputNode, TextareaNode};
use taffy::prelude::*;

const INPUT_HEIGHT: f32 = 32.0;
const TEXTAREA_ROW_HEIGHT: f32 = 20.0;

pub struct InputComponent;

impl InputComponent {
    pub fn build(node: &InputNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size { width: percent(1.0), height: length(INPUT_HEIGHT) },
                ..Default::default()
            })
            .unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Control(ControlKind::Input {
                name: node.name.clone(),
                input_type: node.input_type.clone().unwrap_or_else(|| "text".to_string()),
                default_value: node.default_value.clone(),
                placeholder: node.placeholder.clone().unwrap_or_default(),
                required: node.required,
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

pub struct TextareaComponent;

impl TextareaComponent {
    pub fn build(node: &TextareaNode, key: &str, ctx: &mut ComponentContext) -> VisualElement {
        let rows = node.rows.unwrap_or(3).max(1);
        let tn = ctx
            .taffy
            .new_leaf(Style {
                size: Size {
                    width: percent(1.0),
                    height: length(rows as f32 * TEXTAREA_ROW_HEIGHT + 12.0),
                },
                ..Default::default()
            })
            .unwrap();

        let mut el = VisualElement::new(
            key,
            VisualKind::Control(ControlKind::Textarea {
                name: node.name.clone(),
                default_value: node.default_value.clone(),
                placeholder: node.placeholder.clone().unwrap_or_default(),
                rows,
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
