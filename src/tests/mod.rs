//! 单元测试

mod binding_tests;
mod list_view_tests;
mod renderer_tests;
mod style_resolver_tests;
