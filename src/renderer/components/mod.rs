//! 聊天控件组件实现
//! 每个组件独立文件，便于维护

mod base;
mod badge;
mod button;
mod checkbox;
mod container;
mod date_picker;
mod divider;
mod embed;
mod form;
mod icon;
mod image;
mod input;
mod list_view;
mod markdown;
mod radio_group;
mod select;
mod text;

pub use base::*;
pub use badge::BadgeComponent;
pub use button::ButtonComponent;
pub use checkbox::CheckboxComponent;
pub use container::ContainerComponent;
pub use date_picker::DatePickerComponent;
pub use divider::{DividerComponent, SpacerComponent};
pub use embed::EmbedComponent;
pub use form::FormComponent;
pub use icon::IconComponent;
pub use image::ImageComponent;
pub use input::{InputComponent, TextareaComponent};
pub use list_view::{ListViewComponent, ListViewItemComponent};
pub use markdown::MarkdownComponent;
pub use radio_group::RadioGroupComponent;
pub use select::SelectComponent;
pub use text::TextComponent;
