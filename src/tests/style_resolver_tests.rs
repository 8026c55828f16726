//! 样式解析器单元测试
//! 纯函数：同输入必同输出，无副作用

use crate::renderer::style_resolver::{
    resolve_border, resolve_color, resolve_radius, resolve_spacing, Length,
};
use crate::schema::{BorderSpec, ColorSpec, RadiusSpec, SpacingSpec};
use crate::theme::TokenConfig;
use serde_json::json;

/// 辅助函数：从 JSON 解析间距形状
fn spacing(value: serde_json::Value) -> SpacingSpec {
    serde_json::from_value(value).unwrap()
}

/// 辅助函数：从 JSON 解析边框形状
fn border(value: serde_json::Value) -> BorderSpec {
    serde_json::from_value(value).unwrap()
}

fn tokens() -> TokenConfig {
    TokenConfig::default()
}

/// 测试标量间距展开为四边等值
#[test]
fn test_spacing_scalar_uniform() {
    let edges = resolve_spacing(&spacing(json!(8)));
    assert_eq!(edges.top, Some(Length::Px(8.0)));
    assert_eq!(edges.right, Some(Length::Px(8.0)));
    assert_eq!(edges.bottom, Some(Length::Px(8.0)));
    assert_eq!(edges.left, Some(Length::Px(8.0)));
}

/// 测试字符串间距原样透传
#[test]
fn test_spacing_string_passthrough() {
    let edges = resolve_spacing(&spacing(json!("1rem")));
    assert_eq!(edges.left, Some(Length::Raw("1rem".to_string())));
    assert_eq!(edges.left.as_ref().unwrap().css(), "1rem");
}

/// 测试显式边压过轴向简写
#[test]
fn test_spacing_axis_shorthand_precedence() {
    let edges = resolve_spacing(&spacing(json!({"x": 8, "left": 4})));
    assert_eq!(edges.left, Some(Length::Px(4.0)));
    assert_eq!(edges.right, Some(Length::Px(8.0)));
    assert_eq!(edges.top, None);
    assert_eq!(edges.bottom, None);
}

/// 测试 y 简写补齐上下两边
#[test]
fn test_spacing_y_shorthand() {
    let edges = resolve_spacing(&spacing(json!({"y": 8})));
    assert_eq!(edges.top, Some(Length::Px(8.0)));
    assert_eq!(edges.bottom, Some(Length::Px(8.0)));
    assert_eq!(edges.left, None);
    assert_eq!(edges.right, None);
}

/// 测试标量边框：四边等宽、缺省色、solid
#[test]
fn test_border_scalar_default_color() {
    let resolved = resolve_border(&border(json!(2)), &tokens());
    for stroke in [&resolved.top, &resolved.right, &resolved.bottom, &resolved.left] {
        let stroke = stroke.as_ref().unwrap();
        assert_eq!(stroke.width, Length::Px(2.0));
        assert_eq!(stroke.style, "solid");
        assert_eq!(stroke.color, "var(--color-border)");
    }
}

/// 测试单边描述展开为四边同值
#[test]
fn test_border_single_side_uniform() {
    let resolved = resolve_border(
        &border(json!({"size": 3, "style": "dashed", "color": "danger"})),
        &tokens(),
    );
    let top = resolved.top.as_ref().unwrap();
    assert_eq!(top.width, Length::Px(3.0));
    assert_eq!(top.style, "dashed");
    assert_eq!(top.color, "var(--color-danger)");
    assert_eq!(resolved.top, resolved.bottom);
    assert_eq!(resolved.left, resolved.right);
}

/// 测试按边边框的 x/y 简写与显式边优先
#[test]
fn test_border_per_edge_shorthand() {
    let resolved = resolve_border(
        &border(json!({"top": {"size": 2, "color": "danger"}, "x": 1})),
        &tokens(),
    );
    assert_eq!(resolved.top.as_ref().unwrap().width, Length::Px(2.0));
    assert_eq!(resolved.top.as_ref().unwrap().color, "var(--color-danger)");
    assert_eq!(resolved.left.as_ref().unwrap().width, Length::Px(1.0));
    assert_eq!(resolved.right.as_ref().unwrap().width, Length::Px(1.0));
    assert!(resolved.bottom.is_none());
}

/// 测试语义色令牌解析为主题变量引用
#[test]
fn test_color_semantic_token() {
    let color = resolve_color(&ColorSpec::Token("success".to_string()), &tokens());
    assert_eq!(color, "var(--color-success)");
}

/// 测试原始字面量透传
#[test]
fn test_color_raw_passthrough() {
    for raw in ["#FF6B35", "rgb(1, 2, 3)", "rgba(0,0,0,0.5)", "transparent"] {
        let color = resolve_color(&ColorSpec::Token(raw.to_string()), &tokens());
        assert_eq!(color, raw);
    }
}

/// 测试色相-色阶写法
#[test]
fn test_color_hue_shade_token() {
    let color = resolve_color(&ColorSpec::Token("blue-400".to_string()), &tokens());
    assert_eq!(color, "var(--color-blue-400)");
}

/// 测试透明度令牌前缀
#[test]
fn test_color_alpha_token() {
    let color = resolve_color(&ColorSpec::Token("alpha-40".to_string()), &tokens());
    assert_eq!(color, "var(--color-alpha-40)");
}

/// 测试不认识的令牌按原值透传
#[test]
fn test_color_unrecognized_passthrough() {
    let color = resolve_color(&ColorSpec::Token("mystery-token".to_string()), &tokens());
    assert_eq!(color, "mystery-token");
}

/// 测试明暗对取 light，暗色替换交给外部主题层
#[test]
fn test_color_scheme_selects_light() {
    let spec: ColorSpec =
        serde_json::from_value(json!({"light": "success", "dark": "#0A0"})).unwrap();
    assert_eq!(resolve_color(&spec, &tokens()), "var(--color-success)");
}

/// 测试圆角：数值按 px，命名刻度转主题变量，未知令牌透传
#[test]
fn test_radius_forms() {
    assert_eq!(resolve_radius(&RadiusSpec::Number(6.0), &tokens()), Length::Px(6.0));
    assert_eq!(
        resolve_radius(&RadiusSpec::Token("md".to_string()), &tokens()),
        Length::Raw("var(--radius-md)".to_string())
    );
    assert_eq!(
        resolve_radius(&RadiusSpec::Token("mystery".to_string()), &tokens()),
        Length::Raw("mystery".to_string())
    );
}

/// 测试解析器确定性：重复调用结果一致
#[test]
fn test_resolvers_deterministic() {
    let spec = spacing(json!({"x": 8, "top": 2}));
    assert_eq!(resolve_spacing(&spec), resolve_spacing(&spec));

    let b = border(json!({"y": {"size": 2, "color": "warning"}}));
    assert_eq!(resolve_border(&b, &tokens()), resolve_border(&b, &tokens()));

    let c = ColorSpec::Token("gray-100".to_string());
    assert_eq!(resolve_color(&c, &tokens()), resolve_color(&c, &tokens()));
}
