//! 公共状态页摘要（`/api/v2/summary.json`），只读

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::enums::{ComponentStatus, IncidentStatus, StatusIndicator};
use crate::incident::Incident;
use crate::Timestamp;

/// 状态页摘要
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatusPageSummary {
    pub page: SummaryPage,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
    #[serde(default)]
    pub scheduled_maintenances: Vec<Incident>,
    pub status: OverallStatus,
}

/// 摘要中的页面信息
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SummaryPage {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OverallStatus {
    pub indicator: StatusIndicator,
    pub description: String,
}

impl StatusPageSummary {
    /// 非正常运行的组件（不含组容器）
    pub fn degraded_components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| {
            c.group != Some(true)
                && !matches!(
                    c.status,
                    None | Some(ComponentStatus::Operational) | Some(ComponentStatus::Empty)
                )
        })
    }

    /// 尚未解决的实时事件
    pub fn open_incidents(&self) -> impl Iterator<Item = &Incident> {
        self.incidents
            .iter()
            .filter(|i| i.status != Some(IncidentStatus::Resolved))
    }

    pub fn is_all_operational(&self) -> bool {
        self.status.indicator == StatusIndicator::None && self.degraded_components().next().is_none()
    }
}
