use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 本地编解码错误
#[derive(Debug, Error)]
pub enum SchemaError {
    /// 必填字段缺失
    #[error("required field `{field}` is missing")]
    RequiredFieldMissing { field: String },

    /// 枚举取值不在声明的集合内
    #[error("unknown enum token `{token}`")]
    UnknownEnumToken { token: String },

    /// JSON 结构与期望不符
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    pub fn required(field: impl Into<String>) -> Self {
        SchemaError::RequiredFieldMissing { field: field.into() }
    }

    pub fn unknown_token(token: impl Into<String>) -> Self {
        SchemaError::UnknownEnumToken { token: token.into() }
    }
}

/// 服务端返回的错误体，内容对本层不透明
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ErrorEntity {
    pub message: String,
}
