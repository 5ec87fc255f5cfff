//! 页面访问控制：访问组与访问用户之间通过 id 互相引用，不存在包含关系。

use serde::{Deserialize, Serialize};

use crate::envelope::{Patch, Post, Put, Resource};
use crate::field::Field;
use crate::metric::EditMetricIds;
use crate::Timestamp;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PageAccessGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 身份提供方中的组标识
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_access_user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl PageAccessGroup {
    /// 该组是否授权访问某个组件
    pub fn grants_component(&self, component_id: &str) -> bool {
        self.component_ids
            .as_ref()
            .map(|ids| ids.iter().any(|id| id == component_id))
            .unwrap_or(false)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditPageAccessGroup {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub external_identifier: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub component_ids: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub metric_ids: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub page_access_user_ids: Field<Vec<String>>,
}

impl Resource for EditPageAccessGroup {
    const ENVELOPE: &'static str = "page_access_group";

    fn missing_required(&self) -> Option<&'static str> {
        self.name.is_missing().then_some("name")
    }
}

pub type PostPageAccessGroup = Post<EditPageAccessGroup>;
pub type PatchPageAccessGroup = Patch<EditPageAccessGroup>;
pub type PutPageAccessGroup = Put<EditPageAccessGroup>;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PageAccessUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_login: Option<String>,
    /// 旧接口只返回单个组
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_access_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_access_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe_to_components: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl PageAccessUser {
    /// 用户所属的全部访问组 id，兼容旧的单值字段
    pub fn group_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .page_access_group_ids
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        if let Some(legacy) = self.page_access_group_id.as_deref() {
            if !ids.contains(&legacy) {
                ids.push(legacy);
            }
        }
        ids
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditPageAccessUser {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub external_login: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub page_access_group_ids: Field<Vec<String>>,
}

impl Resource for EditPageAccessUser {
    const ENVELOPE: &'static str = "page_access_user";

    fn missing_required(&self) -> Option<&'static str> {
        self.email.is_missing().then_some("email")
    }
}

pub type PostPageAccessUser = Post<EditPageAccessUser>;
pub type PatchPageAccessUser = Patch<EditPageAccessUser>;
pub type PutPageAccessUser = Put<EditPageAccessUser>;

/// 组件 id 列表，添加 / 替换 / 删除授权时共用
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ComponentIds {
    pub component_ids: Vec<String>,
}

/// 访问组 id 列表
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PageAccessGroupIds {
    pub page_access_group_ids: Vec<String>,
}

pub type AddPageAccessGroupComponents = ComponentIds;
pub type ReplacePageAccessGroupComponents = ComponentIds;
pub type DeletePageAccessGroupComponents = ComponentIds;
pub type AddPageAccessUserComponents = ComponentIds;
pub type ReplacePageAccessUserComponents = ComponentIds;
pub type DeletePageAccessUserComponents = ComponentIds;
pub type AddPageAccessUserMetrics = EditMetricIds;
pub type ReplacePageAccessUserMetrics = EditMetricIds;
pub type DeletePageAccessUserMetrics = EditMetricIds;
pub type AddPageAccessGroupMetrics = EditMetricIds;
pub type ReplacePageAccessGroupMetrics = EditMetricIds;
pub type DeletePageAccessGroupMetrics = EditMetricIds;
