use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::enums::{ComponentStatus, IncidentImpact, IncidentStatus, TemplateUpdateStatus};
use crate::envelope::{Patch, Post, Put, Resource};
use crate::field::Field;
use crate::Timestamp;

/// 事件元数据，按集成名分组的 JSON 对象
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// 事件（实时事件或计划维护）
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Incident {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<IncidentImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_override: Option<IncidentImpact>,
    /// 受影响的组件
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_updates: Option<Vec<IncidentUpdate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_body_last_updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_ignored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_notified_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_notified_twitter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postmortem_published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_until: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_remind_prior: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_reminded_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_in_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_to_maintenance_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_to_operational_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_deliver_notifications_at_start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_transition_deliver_notifications_at_end: Option<bool>,
    /// 提醒间隔指令，原样保存，不解析
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_intervals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Incident {
    /// 是否为计划维护
    pub fn is_scheduled(&self) -> bool {
        self.status.map(|s| s.is_scheduled()).unwrap_or(false)
    }
}

/// 事件的一条更新记录
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct IncidentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    /// 与所属事件使用同一套状态词汇
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_components: Option<Vec<AffectedComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliver_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wants_twitter_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tweet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// 一次更新中组件的状态变化
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AffectedComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_status: Option<ComponentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status: Option<ComponentStatus>,
}

/// 事件的可编辑字段，创建、局部更新和整体替换共用
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EditIncident {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub status: Field<IncidentStatus>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub impact_override: Field<IncidentImpact>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub body: Field<String>,
    /// 组件 id 到目标状态的映射
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub components: Field<BTreeMap<String, ComponentStatus>>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub component_ids: Field<Vec<String>>,
    /// 清空用 `Field::Null`
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub metadata: Field<Metadata>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub deliver_notifications: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub scheduled_for: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub scheduled_until: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub scheduled_remind_prior: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub scheduled_auto_in_progress: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub scheduled_auto_completed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub scheduled_auto_transition: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_transition_to_maintenance_state: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_transition_to_operational_state: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_transition_deliver_notifications_at_start: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_transition_deliver_notifications_at_end: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_tweet_at_beginning: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_tweet_on_completion: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_tweet_on_creation: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub auto_tweet_one_hour_before: Field<bool>,
    /// `null` 为默认节奏，`"[1,4,8]"` 为指定时点，`"6"` 为每 6 小时，`"[]"` 为关闭
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub reminder_intervals: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub backfilled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub backfill_date: Field<NaiveDate>,
}

impl Resource for EditIncident {
    const ENVELOPE: &'static str = "incident";

    fn missing_required(&self) -> Option<&'static str> {
        self.name.is_missing().then_some("name")
    }
}

pub type PostIncident = Post<EditIncident>;
pub type PatchIncident = Patch<EditIncident>;
pub type PutIncident = Put<EditIncident>;

/// 事件更新的可编辑字段
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EditIncidentUpdate {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub body: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub display_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub deliver_notifications: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub wants_twitter_update: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub tweet_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub custom_tweet: Field<String>,
}

impl Resource for EditIncidentUpdate {
    const ENVELOPE: &'static str = "incident_update";
}

pub type PatchIncidentUpdate = Patch<EditIncidentUpdate>;
pub type PutIncidentUpdate = Put<EditIncidentUpdate>;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Postmortem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_draft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_draft_updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_twitter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tweet: Option<String>,
}

/// 保存复盘草稿
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditPostmortem {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub body_draft: Field<String>,
}

impl Resource for EditPostmortem {
    const ENVELOPE: &'static str = "postmortem";

    fn missing_required(&self) -> Option<&'static str> {
        self.body_draft.is_missing().then_some("body_draft")
    }
}

pub type PutPostmortem = Put<EditPostmortem>;

/// 发布复盘
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PublishPostmortem {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub notify_twitter: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub notify_subscribers: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub custom_tweet: Field<String>,
}

impl Resource for PublishPostmortem {
    const ENVELOPE: &'static str = "postmortem";
}

pub type PutPostmortemPublish = Put<PublishPostmortem>;

/// 事件模板
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct IncidentTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_status: Option<TemplateUpdateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_tweet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_send_notifications: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EditTemplate {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub body: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub group_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub update_status: Field<TemplateUpdateStatus>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub should_tweet: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub should_send_notifications: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub component_ids: Field<Vec<String>>,
}

impl Resource for EditTemplate {
    const ENVELOPE: &'static str = "template";

    fn missing_required(&self) -> Option<&'static str> {
        if self.name.is_missing() {
            Some("name")
        } else if self.title.is_missing() {
            Some("title")
        } else if self.body.is_missing() {
            Some("body")
        } else {
            None
        }
    }
}

pub type PostTemplate = Post<EditTemplate>;
