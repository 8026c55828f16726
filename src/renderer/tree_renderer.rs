//! 控件树渲染器 - 把控件定义分派成视觉元素树
//!
//! 单次深度优先遍历，对 `type` 做穷尽分派。未知/畸形节点收在单个
//! 节点边界内（可见占位符），渲染对任意 JSON 输入是全量的：不会有
//! 异常越过节点边界把整个界面打空。

use std::collections::HashSet;

use serde_json::Value as JsonValue;
use taffy::prelude::*;
use tracing::{debug, warn};

use crate::assets::AssetStore;
use crate::context::RenderContext;
use crate::schema::{ContainerNode, ListViewNode, WidgetNode};
use crate::theme::{TokenConfig, DEFAULT_TOKENS};

use super::components::{
    ActionTrigger, Axis, BadgeComponent, ButtonComponent, CheckboxComponent, ComponentContext,
    ContainerComponent, ContainerRole, DatePickerComponent, DividerComponent, EmbedComponent,
    FormComponent, IconComponent, ImageComponent, InputComponent, ListViewComponent,
    ListViewItemComponent, MarkdownComponent, MediaSource, RadioGroupComponent, ResolvedStyle,
    SelectComponent, SpacerComponent, TextComponent, TextRole, TextareaComponent, VisualElement,
    VisualKind, estimate_text_size,
};

pub struct Renderer {
    ctx: RenderContext,
    tokens: TokenConfig,
    taffy: TaffyTree,
    assets: AssetStore,
    /// 已展开（不再截断）的列表身份，跨重渲保留
    expanded: HashSet<String>,
    /// 已告警过的类型，未知/畸形只告警一次
    warned: HashSet<String>,
}

impl Renderer {
    pub fn new(ctx: RenderContext) -> Self {
        Self::with_tokens(ctx, DEFAULT_TOKENS.clone())
    }

    pub fn with_tokens(ctx: RenderContext, tokens: TokenConfig) -> Self {
        Self {
            ctx,
            tokens,
            taffy: TaffyTree::new(),
            assets: AssetStore::new(),
            expanded: HashSet::new(),
            warned: HashSet::new(),
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// 渲染一棵定义树；`type` 缺失或不是字符串时返回 None
    pub fn render(&mut self, node: &WidgetNode) -> Option<VisualElement> {
        // 布局树每轮重建；展开集合与资源引用跨重渲保留
        self.taffy.clear();
        self.render_node(node, "0")
    }

    /// 直接从 JSON 值渲染
    pub fn render_value(&mut self, value: &JsonValue) -> Option<VisualElement> {
        let node = WidgetNode::from_value(value);
        self.render(&node)
    }

    fn cx(&mut self) -> ComponentContext<'_> {
        ComponentContext { tokens: &self.tokens, taffy: &mut self.taffy }
    }

    fn render_node(&mut self, node: &WidgetNode, path: &str) -> Option<VisualElement> {
        let key = element_key(node, path);
        let element = match node {
            WidgetNode::Invalid => {
                debug!(path, "widget node without a string `type`, skipped");
                return None;
            }
            WidgetNode::Unknown { kind } => {
                if self.warned.insert(format!("unknown:{}", kind)) {
                    warn!(kind = %kind, "unknown widget type");
                }
                let message = format!("Unknown widget type: {}", kind);
                let mut cx = self.cx();
                placeholder(message, &key, &mut cx)
            }
            WidgetNode::Malformed { kind } => {
                if self.warned.insert(format!("malformed:{}", kind)) {
                    warn!(kind = %kind, "malformed widget node");
                }
                let message = format!("Malformed widget: {}", kind);
                let mut cx = self.cx();
                placeholder(message, &key, &mut cx)
            }
            WidgetNode::Text(n) => TextComponent::build(n, TextRole::Body, &key, &mut self.cx()),
            WidgetNode::Title(n) => TextComponent::build(n, TextRole::Title, &key, &mut self.cx()),
            WidgetNode::Caption(n) => {
                TextComponent::build(n, TextRole::Caption, &key, &mut self.cx())
            }
            WidgetNode::Label(n) => TextComponent::build(n, TextRole::Label, &key, &mut self.cx()),
            WidgetNode::Markdown(n) => MarkdownComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Badge(n) => BadgeComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Box(n) => {
                self.render_container(n, ContainerRole::Block, Axis::Vertical, &key, path)
            }
            WidgetNode::Row(n) => {
                self.render_container(n, ContainerRole::Block, Axis::Horizontal, &key, path)
            }
            WidgetNode::Col(n) => {
                self.render_container(n, ContainerRole::Block, Axis::Vertical, &key, path)
            }
            WidgetNode::Card(n) => {
                self.render_container(n, ContainerRole::Card, Axis::Vertical, &key, path)
            }
            WidgetNode::Transition(n) => {
                self.render_container(n, ContainerRole::Transition, Axis::Vertical, &key, path)
            }
            WidgetNode::Form(n) => {
                let mut el = FormComponent::build(n, &key, &mut self.cx());
                self.attach_children(&mut el, &n.children, path);
                el
            }
            WidgetNode::ListView(n) => self.render_list(n, &key, path),
            WidgetNode::ListViewItem(n) => {
                let mut el = ListViewItemComponent::build(n, &key, &mut self.cx());
                self.attach_children(&mut el, &n.children, path);
                el
            }
            WidgetNode::Image(n) => ImageComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Icon(n) => IconComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Divider(n) => DividerComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Spacer(n) => SpacerComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Button(n) => ButtonComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Input(n) => InputComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Textarea(n) => TextareaComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Select(n) => SelectComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Checkbox(n) => CheckboxComponent::build(n, &key, &mut self.cx()),
            WidgetNode::RadioGroup(n) => RadioGroupComponent::build(n, &key, &mut self.cx()),
            WidgetNode::DatePicker(n) => DatePickerComponent::build(n, &key, &mut self.cx()),
            WidgetNode::Chart(n) => EmbedComponent::build(n, "Chart", &key, &mut self.cx()),
            WidgetNode::ComputerUse(n) => {
                EmbedComponent::build(n, "ComputerUse", &key, &mut self.cx())
            }
        };
        Some(element)
    }

    fn render_container(
        &mut self,
        node: &ContainerNode,
        role: ContainerRole,
        default_axis: Axis,
        key: &str,
        path: &str,
    ) -> VisualElement {
        let mut el = ContainerComponent::build(node, role, default_axis, key, &mut self.cx());
        self.attach_children(&mut el, &node.children, path);
        el
    }

    /// 子节点按定义顺序构建并接到布局树上
    fn attach_children(&mut self, parent: &mut VisualElement, children: &[WidgetNode], path: &str) {
        let mut built = Vec::new();
        for (i, child) in children.iter().enumerate() {
            let child_path = format!("{}.{}", path, i);
            if let Some(el) = self.render_node(child, &child_path) {
                built.push(el);
            }
        }
        let ids: Vec<NodeId> = built.iter().map(|c| c.layout).collect();
        self.taffy.set_children(parent.layout, &ids).unwrap();
        parent.children = built;
    }

    fn render_list(&mut self, node: &ListViewNode, key: &str, path: &str) -> VisualElement {
        let mut el = ListViewComponent::build(node, key, &mut self.cx());

        let total = node.children.len();
        let limit = node.limit.as_ref().and_then(|l| l.count());
        let truncated =
            !self.expanded.contains(key) && limit.map(|l| l < total).unwrap_or(false);
        let shown = if truncated { limit.unwrap_or(total) } else { total };

        let mut built = Vec::new();
        for (i, child) in node.children.iter().take(shown).enumerate() {
            let child_path = format!("{}.{}", path, i);
            if let Some(c) = self.render_node(child, &child_path) {
                built.push(c);
            }
        }
        if truncated {
            built.push(ListViewComponent::reveal_element(key, total - shown, &mut self.cx()));
        }

        let ids: Vec<NodeId> = built.iter().map(|c| c.layout).collect();
        self.taffy.set_children(el.layout, &ids).unwrap();
        el.children = built;
        el
    }

    /// 激活元素（点击）。返回 true 表示本地视图状态变了，需要重渲
    pub fn activate(&mut self, element: &VisualElement) -> bool {
        if let VisualKind::Reveal { list, .. } = &element.kind {
            self.expanded.insert(list.clone());
            return true;
        }
        if let Some(payload) = element.action(ActionTrigger::Click) {
            self.ctx.dispatch_action(payload);
        }
        false
    }

    /// 值变化（Select/Checkbox/RadioGroup/DatePicker）
    pub fn change(&self, element: &VisualElement) {
        if let Some(payload) = element.action(ActionTrigger::Change) {
            self.ctx.dispatch_action(payload);
        }
    }

    /// 表单提交：先上报表单数据，再派发提交动作，顺序固定
    pub fn submit(&self, form: &VisualElement, data: &JsonValue) {
        self.ctx.dispatch_form_data(data);
        if let Some(payload) = form.action(ActionTrigger::Submit) {
            self.ctx.dispatch_action(payload);
        }
    }

    /// 展开列表，等价于激活它的展开入口
    pub fn reveal(&mut self, list_key: &str) {
        self.expanded.insert(list_key.to_string());
    }

    /// 挂载：内联媒体在这里转成对象引用（同身份旧引用先释放）
    pub fn mount(&mut self, element: &VisualElement) {
        if let VisualKind::Image { source: MediaSource::Inline(data), .. } = &element.kind {
            if let Err(err) = self.assets.acquire(&element.key, data) {
                // 解码失败：该节点不出资源，不波及兄弟节点
                debug!(key = %element.key, %err, "inline media skipped");
            }
        }
        for child in &element.children {
            self.mount(child);
        }
    }

    /// 卸载：释放子树持有的对象引用
    pub fn unmount(&mut self, element: &VisualElement) {
        if let VisualKind::Image { source: MediaSource::Inline(_), .. } = &element.kind {
            self.assets.release(&element.key);
        }
        for child in &element.children {
            self.unmount(child);
        }
    }

    /// 节点身份当前的对象 URL（挂载后才有）
    pub fn object_url(&self, key: &str) -> Option<&str> {
        self.assets.url_for(key)
    }

    /// 以给定可用宽度跑一遍 flex 布局
    pub fn compute_layout(&mut self, root: &VisualElement, width: f32) {
        let space = Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::MaxContent,
        };
        if let Err(err) = self.taffy.compute_layout(root.layout, space) {
            debug!(%err, "layout pass failed");
        }
    }

    /// 元素在最近一次布局里的几何
    pub fn layout_of(&self, element: &VisualElement) -> Option<&taffy::Layout> {
        self.taffy.layout(element.layout).ok()
    }
}

/// 元素稳定身份：节点 id/key 优先，否则按变体名加树路径合成
fn element_key(node: &WidgetNode, path: &str) -> String {
    match node.identity() {
        Some(id) => id.to_string(),
        None => {
            let kind = node.kind();
            if kind.is_empty() {
                path.to_string()
            } else {
                format!("{}:{}", kind, path)
            }
        }
    }
}

/// 未知/畸形节点的可见占位元素
fn placeholder(message: String, key: &str, cx: &mut ComponentContext) -> VisualElement {
    let rs = ResolvedStyle {
        text_color: Some("var(--color-danger)".to_string()),
        background: Some("var(--color-surface)".to_string()),
        font_size: 12.0,
        ..Default::default()
    };
    let (tw, th) = estimate_text_size(&message, rs.font_size);
    let tn = cx
        .taffy
        .new_leaf(Style {
            size: Size { width: length(tw + 8.0), height: length(th + 8.0) },
            ..Default::default()
        })
        .unwrap();
    VisualElement::new(key, VisualKind::Placeholder { message }, rs, tn)
}
