use serde::{Deserialize, Serialize};

use crate::enums::{SortDirection, SortField, SubscriberState, SubscriberType};
use crate::envelope::{Patch, Post, Resource};
use crate::field::Field;
use crate::Timestamp;

/// 订阅者。按 `mode` 的不同只会用到一组联系方式，但结构上是同一条记录
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Subscriber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SubscriberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated_channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_confirmation_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarantined_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purge_at: Option<Timestamp>,
    /// 订阅的组件 id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_access_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// 订阅者的联系方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact<'a> {
    Email(&'a str),
    Phone { number: &'a str, country: Option<&'a str> },
    Endpoint(&'a str),
    None,
}

impl Subscriber {
    /// 按 mode 取出对应的联系方式；mode 缺失时按 email、电话、endpoint 的顺序查找
    pub fn contact(&self) -> Contact<'_> {
        let email = self.email.as_deref().map(Contact::Email);
        let phone = self.phone_number.as_deref().map(|number| Contact::Phone {
            number,
            country: self.phone_country.as_deref(),
        });
        let endpoint = self.endpoint.as_deref().map(Contact::Endpoint);

        let found = match self.mode {
            Some(SubscriberType::Email) => email,
            Some(SubscriberType::Sms) => phone,
            Some(_) => endpoint,
            None => email.or(phone).or(endpoint),
        };
        found.unwrap_or(Contact::None)
    }

    pub fn is_quarantined(&self) -> bool {
        self.quarantined_at.is_some()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditSubscriber {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub endpoint: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub phone_country: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub phone_number: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub skip_confirmation_notification: Field<bool>,
    /// 访问受限页面时关联的访问用户
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub page_access_user: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub component_ids: Field<Vec<String>>,
}

impl Resource for EditSubscriber {
    const ENVELOPE: &'static str = "subscriber";
}

pub type PostSubscriber = Post<EditSubscriber>;
pub type PatchSubscriber = Patch<EditSubscriber>;

/// 订阅者列表查询参数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct SubscriberQuery {
    /// 按邮箱 / 电话 / endpoint 模糊搜索
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub subscriber_type: Option<SubscriberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SubscriberState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

/// 批量退订 / 恢复 / 重发确认
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct SubscriberBulkAction {
    /// 订阅者 id 列表，`["all"]` 表示全部
    pub subscribers: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_missing")]
    pub subscriber_type: Field<SubscriberType>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub state: Field<SubscriberState>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub skip_unsubscription_notification: Field<bool>,
}

pub type UnsubscribeSubscribers = SubscriberBulkAction;
pub type ReactivateSubscribers = SubscriberBulkAction;
pub type ResendSubscriberConfirmations = SubscriberBulkAction;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriberCountByType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_partner: Option<i64>,
}

impl SubscriberCountByType {
    pub fn get(&self, kind: SubscriberType) -> Option<i64> {
        match kind {
            SubscriberType::Email => self.email,
            SubscriberType::Sms => self.sms,
            SubscriberType::Webhook => self.webhook,
            SubscriberType::Slack => self.slack,
            SubscriberType::Teams => self.teams,
            SubscriberType::IntegrationPartner => self.integration_partner,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriberCountByState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unconfirmed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarantined: Option<i64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriberCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_follows_mode() {
        let sms: Subscriber = serde_json::from_value(json!({
            "id": "s1",
            "mode": "sms",
            "email": "ops@example.com",
            "phone_number": "5555550100",
            "phone_country": "US"
        }))
        .unwrap();
        assert_eq!(
            sms.contact(),
            Contact::Phone { number: "5555550100", country: Some("US") }
        );

        let webhook = Subscriber {
            mode: Some(SubscriberType::Webhook),
            endpoint: Some("https://hooks.example.com/status".into()),
            ..Subscriber::default()
        };
        assert_eq!(webhook.contact(), Contact::Endpoint("https://hooks.example.com/status"));

        assert_eq!(Subscriber::default().contact(), Contact::None);
    }

    #[test]
    fn quarantine_is_read_from_timestamp() {
        let subscriber: Subscriber = serde_json::from_value(json!({
            "mode": "email",
            "email": "a@example.com",
            "quarantined_at": "2024-02-02T00:00:00+00:00",
            "purge_at": "2024-05-02T00:00:00+00:00"
        }))
        .unwrap();
        assert!(subscriber.is_quarantined());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = serde_json::from_value::<Subscriber>(json!({"mode": "pager"})).unwrap_err();
        assert!(err.to_string().contains("unknown variant `pager`"));
    }

    #[test]
    fn query_serializes_sort_tokens() {
        let query = SubscriberQuery {
            state: Some(SubscriberState::Quarantined),
            sort_field: Some(SortField::QuarantinedAt),
            sort_direction: Some(SortDirection::Desc),
            ..SubscriberQuery::default()
        };
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"state": "quarantined", "sort_field": "quarantined_at", "sort_direction": "desc"})
        );
    }

    #[test]
    fn bulk_action_targets_type() {
        let action = UnsubscribeSubscribers {
            subscribers: vec!["all".into()],
            subscriber_type: SubscriberType::Sms.into(),
            skip_unsubscription_notification: true.into(),
            ..SubscriberBulkAction::default()
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"subscribers": ["all"], "type": "sms", "skip_unsubscription_notification": true})
        );
    }

    #[test]
    fn counts_by_type_lookup() {
        let counts: SubscriberCountByType =
            serde_json::from_value(json!({"email": 120, "sms": 3, "teams": 0})).unwrap();
        assert_eq!(counts.get(SubscriberType::Email), Some(120));
        assert_eq!(counts.get(SubscriberType::Teams), Some(0));
        assert_eq!(counts.get(SubscriberType::Slack), None);
    }

    #[test]
    fn post_subscriber_envelope() {
        let post = PostSubscriber::from(EditSubscriber {
            email: "ops@example.com".to_string().into(),
            component_ids: vec!["c1".to_string()].into(),
            ..EditSubscriber::default()
        });
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({"subscriber": {"email": "ops@example.com", "component_ids": ["c1"]}})
        );
    }
}
