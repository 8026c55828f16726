//! 渲染器 - 树求值、样式解析与组件装配

pub mod components;
pub mod style_resolver;
mod tree_renderer;

pub use tree_renderer::Renderer;
