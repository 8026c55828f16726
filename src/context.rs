//! 渲染上下文 - 一次渲染传递里所有节点可达的能力包
//!
//! 由调用方在构造 Renderer 时给一次，递归内部由引擎自己传递，
//! 调用方不用逐层接线。缺的能力是安全空操作，不会失败。

use serde_json::Value;

/// 动作分发回调
pub type ActionHandler = Box<dyn Fn(&Value)>;
/// 表单数据回调
pub type FormDataHandler = Box<dyn Fn(&Value)>;

/// 外部接口配置（传给宿主，引擎本身不发请求）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

/// 能力包
#[derive(Default)]
pub struct RenderContext {
    pub on_action: Option<ActionHandler>,
    pub on_form_data: Option<FormDataHandler>,
    pub api_config: Option<ApiConfig>,
    pub auth_token: Option<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_action(mut self, handler: impl Fn(&Value) + 'static) -> Self {
        self.on_action = Some(Box::new(handler));
        self
    }

    pub fn with_on_form_data(mut self, handler: impl Fn(&Value) + 'static) -> Self {
        self.on_form_data = Some(Box::new(handler));
        self
    }

    pub fn with_api_config(mut self, config: ApiConfig) -> Self {
        self.api_config = Some(config);
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// 派发动作载荷；没挂回调就静默跳过
    pub(crate) fn dispatch_action(&self, payload: &Value) {
        if let Some(handler) = &self.on_action {
            handler(payload);
        }
    }

    /// 上报表单数据；没挂回调就静默跳过
    pub(crate) fn dispatch_form_data(&self, data: &Value) {
        if let Some(handler) = &self.on_form_data {
            handler(data);
        }
    }
}
