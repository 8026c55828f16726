//! 资源引用 - 内联媒体的本地对象引用管理
//!
//! 内联（data: URI）图片源不能直接进传输层（URL 长度限制），挂载时
//! 转成短生命周期的本地对象引用。同一节点身份下，旧引用先释放再创建
//! 新引用，这个顺序是硬约束，违反就是引用泄漏。

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unsupported inline source: {0}")]
    UnsupportedSource(String),
    #[error("image decode failed: {0}")]
    Decode(String),
}

/// 本地对象引用
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRef {
    pub id: u64,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// 按节点身份管理对象引用的存储
#[derive(Default)]
pub struct AssetStore {
    refs: HashMap<String, ObjectRef>,
    next_id: u64,
    created: u64,
    released: u64,
    peak_active: usize,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为节点身份创建对象引用；同一身份的旧引用先释放
    pub fn acquire(&mut self, node_key: &str, source: &str) -> Result<ObjectRef, AssetError> {
        use image::GenericImageView;

        let bytes = decode_inline_source(source)?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| AssetError::Decode(e.to_string()))?;
        let (width, height) = decoded.dimensions();

        self.release(node_key);

        self.next_id += 1;
        self.created += 1;
        let obj = ObjectRef {
            id: self.next_id,
            url: format!("mem://assets/{}", self.next_id),
            width,
            height,
        };
        self.refs.insert(node_key.to_string(), obj.clone());
        self.peak_active = self.peak_active.max(self.refs.len());
        Ok(obj)
    }

    /// 释放节点身份当前持有的引用
    pub fn release(&mut self, node_key: &str) -> bool {
        if self.refs.remove(node_key).is_some() {
            self.released += 1;
            true
        } else {
            false
        }
    }

    /// 释放全部引用（整棵树卸载）
    pub fn release_all(&mut self) {
        self.released += self.refs.len() as u64;
        self.refs.clear();
    }

    /// 节点身份当前的对象 URL
    pub fn url_for(&self, node_key: &str) -> Option<&str> {
        self.refs.get(node_key).map(|r| r.url.as_str())
    }

    pub fn active(&self) -> usize {
        self.refs.len()
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn released(&self) -> u64 {
        self.released
    }

    /// 历史同时存活峰值（每个身份释放先于创建时恒为 active 上限）
    pub fn peak_active(&self) -> usize {
        self.peak_active
    }
}

/// 是否是需要转对象引用的内联源
pub fn is_inline_source(src: &str) -> bool {
    src.starts_with("data:")
}

fn decode_inline_source(source: &str) -> Result<Vec<u8>, AssetError> {
    let rest = source
        .strip_prefix("data:")
        .ok_or_else(|| AssetError::UnsupportedSource(preview_of(source)))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| AssetError::UnsupportedSource(preview_of(source)))?;

    if meta.ends_with(";base64") {
        BASE64
            .decode(payload.trim())
            .map_err(|e| AssetError::Decode(e.to_string()))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

fn preview_of(source: &str) -> String {
    source.chars().take(32).collect()
}
