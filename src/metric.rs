use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{MetricTransform, MetricsProviderType};
use crate::envelope::{Patch, Post, Put, Resource};
use crate::field::Field;
use crate::Timestamp;

/// 指标
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Metric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 所属指标数据源
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfilled: Option<bool>,
    /// y 轴上下限不保证 min < max，由服务端判断
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_recent_data_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fetched_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<MetricTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EditMetric {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub metric_identifier: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub transform: Field<MetricTransform>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub suffix: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub y_axis_min: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub y_axis_max: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub y_axis_hidden: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub display: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub decimal_places: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub tooltip_description: Field<String>,
}

impl Resource for EditMetric {
    const ENVELOPE: &'static str = "metric";

    fn missing_required(&self) -> Option<&'static str> {
        if self.name.is_missing() {
            Some("name")
        } else if self.metric_identifier.is_missing() {
            Some("metric_identifier")
        } else {
            None
        }
    }
}

pub type PostMetric = Post<EditMetric>;
pub type PatchMetric = Patch<EditMetric>;
pub type PutMetric = Put<EditMetric>;

/// 指标数据源
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct MetricsProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<MetricsProviderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_base_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_revalidated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EditMetricsProvider {
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_missing")]
    pub provider_type: Field<MetricsProviderType>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub password: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub api_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub api_token: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub application_key: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub metric_base_uri: Field<String>,
}

impl Resource for EditMetricsProvider {
    const ENVELOPE: &'static str = "metrics_provider";

    fn missing_required(&self) -> Option<&'static str> {
        self.provider_type.is_missing().then_some("type")
    }
}

pub type PostMetricsProvider = Post<EditMetricsProvider>;
pub type PatchMetricsProvider = Patch<EditMetricsProvider>;
pub type PutMetricsProvider = Put<EditMetricsProvider>;

/// 单个数据点
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct MetricData {
    /// Unix 秒
    pub timestamp: i64,
    pub value: f64,
}

impl Resource for MetricData {
    const ENVELOPE: &'static str = "data";
}

/// 为单个指标提交一个数据点：`{"data": {"timestamp": .., "value": ..}}`
pub type PostMetricData = Post<MetricData>;

/// 批量提交：指标 id 到数据点列表
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PostMetricsData {
    pub data: BTreeMap<String, Vec<MetricData>>,
}

impl PostMetricsData {
    pub fn push(&mut self, metric_id: impl Into<String>, point: MetricData) {
        self.data.entry(metric_id.into()).or_default().push(point);
    }
}

/// 指标 id 列表
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditMetricIds {
    pub metric_ids: Vec<String>,
}
