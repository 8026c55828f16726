//! Widget Render Engine - 聊天界面控件渲染引擎
//! 控件定义树渲染、样式令牌解析、绑定发现与 WYSIWYG 预览合成

// 控件定义数据模型
pub mod schema;

// 主题令牌表
pub mod theme;

// 渲染上下文（能力包）
pub mod context;

// 内联媒体对象引用
pub mod assets;

// 树求值与组件装配
pub mod renderer;

// 绑定发现与预览合成
pub mod preview;

pub use assets::{AssetError, AssetStore, ObjectRef};
pub use context::{ApiConfig, RenderContext};
pub use preview::{
    apply_values, build_sample, collect_bindings, BindingInfo, PreviewDefinition, Sample,
};
pub use renderer::components::{
    ActionTrigger, Axis, ContainerRole, ControlKind, MediaSource, ResolvedStyle, TextRole,
    VisualElement, VisualKind,
};
pub use renderer::Renderer;
pub use schema::{Binding, WidgetNode};
pub use theme::TokenConfig;

// 单元测试
#[cfg(test)]
mod tests;
