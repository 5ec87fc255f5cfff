//! 编解码入口：传输层只通过这里把字节和类型化记录互相转换。

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::SchemaError;

/// 从 JSON 字节解码为类型化记录
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SchemaError> {
    serde_json::from_slice(bytes).map_err(|e| {
        debug!("❌ 解码 {} 失败: {}", std::any::type_name::<T>(), e);
        classify(e)
    })
}

/// 从已解析的 JSON 值解码
pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, SchemaError> {
    serde_json::from_value(value).map_err(classify)
}

/// 编码为紧凑 JSON，保留字段存在性（未设置的字段不输出，显式清空输出 null）
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, SchemaError> {
    serde_json::to_vec(value).map_err(classify)
}

/// 编码为缩进格式的 JSON
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, SchemaError> {
    serde_json::to_vec_pretty(value).map_err(classify)
}

/// 读取至多 `limit` 字节；超出即报错，不把剩余数据读进内存。
/// 管道、FIFO 等报告不了长度的来源也走这里
pub fn read_limited<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>, SchemaError> {
    let mut buf = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(SchemaError::MalformedPayload(format!(
            "payload exceeds limit of {} bytes",
            limit
        )));
    }
    Ok(buf)
}

/// 把 serde_json 的错误归入三类本地错误
fn classify(err: serde_json::Error) -> SchemaError {
    if err.is_io() {
        return SchemaError::Io(err.into());
    }
    let message = err.to_string();
    if let Some(field) = missing_field(&message) {
        return SchemaError::required(field);
    }
    if let Some(token) = unknown_variant(&message) {
        return SchemaError::unknown_token(token);
    }
    SchemaError::MalformedPayload(message)
}

/// 字段名来自结构定义，不会含反引号
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.find('`').map(|end| &rest[..end])
}

/// 取值来自载荷，可能含反引号，所以截到最后一个 "`, expected" 为止
fn unknown_variant(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("unknown variant `")?;
    rest.rfind("`, expected").map(|end| &rest[..end])
}
