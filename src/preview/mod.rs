//! 预览 - 绑定发现、样本合成与覆盖合成

mod bindings;
mod compose;

pub use bindings::{build_sample, collect_bindings, BindingInfo, Sample};
pub use compose::{apply_values, PreviewDefinition};
