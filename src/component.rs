use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ComponentStatus;
use crate::envelope::{Patch, Post, Put, Resource};
use crate::field::Field;
use crate::Timestamp;

/// 组件：页面上被监控的一个服务单元
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    /// 所属组件组，只是引用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// 该组件本身是否是一个组
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComponentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_if_degraded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// 组件的可编辑字段
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EditComponent {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub status: Field<ComponentStatus>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub only_show_if_degraded: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub group_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub showcase: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub start_date: Field<NaiveDate>,
}

impl EditComponent {
    /// 只修改状态的编辑
    pub fn with_status(status: ComponentStatus) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }
}

impl Resource for EditComponent {
    const ENVELOPE: &'static str = "component";

    fn missing_required(&self) -> Option<&'static str> {
        self.name.is_missing().then_some("name")
    }
}

pub type PostComponent = Post<EditComponent>;
pub type PatchComponent = Patch<EditComponent>;
pub type PutComponent = Put<EditComponent>;

/// 组件组
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ComponentGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 成员组件 id，有序且不重复
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// 组件组的编辑投影，只允许修改成员列表和名称
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditComponentGroup {
    pub components: Vec<String>,
    pub name: String,
}

impl EditComponentGroup {
    pub fn new(name: impl Into<String>, components: Vec<String>) -> Self {
        Self {
            components,
            name: name.into(),
        }
    }
}

impl From<&ComponentGroup> for EditComponentGroup {
    fn from(group: &ComponentGroup) -> Self {
        Self {
            components: group.components.clone().unwrap_or_default(),
            name: group.name.clone().unwrap_or_default(),
        }
    }
}

/// 组件组请求体：描述与信封并列放在顶层
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ComponentGroupRequest {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub description: Field<String>,
    pub component_group: EditComponentGroup,
}

pub type PostComponentGroup = ComponentGroupRequest;
pub type PatchComponentGroup = ComponentGroupRequest;
pub type PutComponentGroup = ComponentGroupRequest;

/// 组件或组件组在某个时间段内的可用率
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ComponentUptime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_percentage: Option<f64>,
    /// 重大故障累计秒数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_outage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_outage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_events: Option<Vec<RelatedEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_events_truncated: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct RelatedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sparse_component() {
        let component: Component =
            serde_json::from_value(json!({"status": "major_outage", "id": "abc123", "name": "API"}))
                .unwrap();
        assert_eq!(
            component,
            Component {
                id: Some("abc123".to_string()),
                name: Some("API".to_string()),
                status: Some(ComponentStatus::MajorOutage),
                ..Component::default()
            }
        );
    }

    #[test]
    fn full_component_round_trips() {
        let raw = json!({
            "id": "8kbf7d35c070",
            "page_id": "kctbh9vrtdwd",
            "group_id": "jn3p9rlq7z8c",
            "created_at": "2024-03-01T10:00:00+00:00",
            "updated_at": "2024-03-02T11:30:00+08:00",
            "group": false,
            "name": "API",
            "description": "Public REST API",
            "position": 1,
            "status": "",
            "showcase": true,
            "only_show_if_degraded": false,
            "automation_email": "component+abc@notifications.statuspage.io",
            "start_date": "2024-03-01"
        });
        let component: Component = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(component.status, Some(ComponentStatus::Empty));
        assert_eq!(serde_json::to_value(&component).unwrap(), raw);
    }

    #[test]
    fn post_component_requires_name() {
        let post = PostComponent::from(EditComponent::with_status(ComponentStatus::Operational));
        assert!(serde_json::to_value(&post).is_err());

        let patch = PatchComponent::from(EditComponent::with_status(ComponentStatus::Operational));
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"component": {"status": "operational"}})
        );
    }

    #[test]
    fn group_request_keeps_description_beside_envelope() {
        let cleared = ComponentGroupRequest {
            description: Field::Null,
            component_group: EditComponentGroup::new("Backend", vec!["a".into(), "b".into()]),
        };
        let untouched = ComponentGroupRequest {
            description: Field::Missing,
            ..cleared.clone()
        };

        assert_eq!(
            serde_json::to_value(&cleared).unwrap(),
            json!({
                "description": null,
                "component_group": {"components": ["a", "b"], "name": "Backend"}
            })
        );
        assert_eq!(
            serde_json::to_value(&untouched).unwrap(),
            json!({"component_group": {"components": ["a", "b"], "name": "Backend"}})
        );
    }

    #[test]
    fn edit_group_requires_name_and_components() {
        let err = serde_json::from_value::<EditComponentGroup>(json!({"name": "Backend"}))
            .unwrap_err();
        assert!(err.to_string().contains("components"));
    }

    #[test]
    fn edit_projection_keeps_member_order() {
        let group = ComponentGroup {
            name: Some("Edge".into()),
            components: Some(vec!["z".into(), "a".into(), "m".into()]),
            ..ComponentGroup::default()
        };
        let edit = EditComponentGroup::from(&group);
        assert_eq!(edit.components, vec!["z", "a", "m"]);
        assert_eq!(edit.name, "Edge");
    }
}
