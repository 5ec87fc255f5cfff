//! Statuspage REST API 的请求 / 响应数据结构。
//!
//! 只负责结构与 JSON 编解码，不包含 HTTP 传输、鉴权或重试。
//! - 响应实体的可选字段使用 `Option<T>`；
//! - 请求中的可编辑字段使用 [`Field`]，区分“不改动”和“清空”；
//! - 创建 / 更新请求通过 [`Post`]、[`Patch`]、[`Put`] 套上信封键。

pub mod catalog;
pub mod codec;
pub mod component;
pub mod config;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod field;
pub mod incident;
pub mod metric;
pub mod page;
pub mod page_access;
pub mod subscriber;
pub mod summary;
pub mod user;

/// 带时区偏移的时间戳，原样保留偏移量
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

pub use catalog::Schema;
pub use codec::{decode, encode, encode_pretty};
pub use enums::*;
pub use envelope::{Patch, Post, Put, Resource};
pub use error::{ErrorEntity, SchemaError};
pub use field::Field;
