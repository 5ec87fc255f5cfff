//! 所有可解码载荷的目录，按名称查找对应的类型化记录

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec;
use crate::component::*;
use crate::error::{ErrorEntity, SchemaError};
use crate::incident::*;
use crate::metric::*;
use crate::page::*;
use crate::page_access::*;
use crate::subscriber::*;
use crate::summary::StatusPageSummary;
use crate::user::*;

macro_rules! schemas {
    ($( $variant:ident => $name:literal : $ty:ty, )+) => {
        /// 载荷名称
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Schema {
            $($variant,)+
        }

        impl Schema {
            pub const ALL: &'static [Schema] = &[$(Schema::$variant),+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Schema::$variant => $name,)+
                }
            }

            /// 按该载荷的类型解码再重新编码。`many` 为真时载荷应是一个数组（列表接口）
            pub fn normalize(&self, bytes: &[u8], many: bool, pretty: bool) -> Result<Vec<u8>, SchemaError> {
                debug!("🔄 按 {} 校验载荷 ({} 字节)", self.name(), bytes.len());
                match self {
                    $(Schema::$variant => reencode::<$ty>(bytes, many, pretty),)+
                }
            }
        }

        impl FromStr for Schema {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Schema::$variant),)+
                    other => Err(SchemaError::unknown_token(other)),
                }
            }
        }
    };
}

schemas! {
    Component => "component": Component,
    PostComponent => "post-component": PostComponent,
    PatchComponent => "patch-component": PatchComponent,
    PutComponent => "put-component": PutComponent,
    ComponentGroup => "component-group": ComponentGroup,
    ComponentGroupRequest => "component-group-request": ComponentGroupRequest,
    ComponentUptime => "component-uptime": ComponentUptime,
    Incident => "incident": Incident,
    IncidentUpdate => "incident-update": IncidentUpdate,
    PostIncident => "post-incident": PostIncident,
    PatchIncident => "patch-incident": PatchIncident,
    PutIncident => "put-incident": PutIncident,
    PatchIncidentUpdate => "patch-incident-update": PatchIncidentUpdate,
    PutIncidentUpdate => "put-incident-update": PutIncidentUpdate,
    Postmortem => "postmortem": Postmortem,
    PutPostmortem => "put-postmortem": PutPostmortem,
    PutPostmortemPublish => "publish-postmortem": PutPostmortemPublish,
    IncidentTemplate => "incident-template": IncidentTemplate,
    PostTemplate => "post-template": PostTemplate,
    Metric => "metric": Metric,
    PostMetric => "post-metric": PostMetric,
    PatchMetric => "patch-metric": PatchMetric,
    PutMetric => "put-metric": PutMetric,
    MetricsProvider => "metrics-provider": MetricsProvider,
    PostMetricsProvider => "post-metrics-provider": PostMetricsProvider,
    PatchMetricsProvider => "patch-metrics-provider": PatchMetricsProvider,
    PutMetricsProvider => "put-metrics-provider": PutMetricsProvider,
    MetricData => "metric-data": MetricData,
    PostMetricData => "post-metric-data": PostMetricData,
    PostMetricsData => "post-metrics-data": PostMetricsData,
    MetricIds => "metric-ids": EditMetricIds,
    Page => "page": Page,
    PatchPage => "patch-page": PatchPage,
    PutPage => "put-page": PutPage,
    StatusEmbedConfig => "status-embed-config": StatusEmbedConfig,
    PatchStatusEmbedConfig => "patch-status-embed-config": PatchStatusEmbedConfig,
    PutStatusEmbedConfig => "put-status-embed-config": PutStatusEmbedConfig,
    PageAccessGroup => "page-access-group": PageAccessGroup,
    PostPageAccessGroup => "post-page-access-group": PostPageAccessGroup,
    PatchPageAccessGroup => "patch-page-access-group": PatchPageAccessGroup,
    PutPageAccessGroup => "put-page-access-group": PutPageAccessGroup,
    PageAccessUser => "page-access-user": PageAccessUser,
    PostPageAccessUser => "post-page-access-user": PostPageAccessUser,
    PatchPageAccessUser => "patch-page-access-user": PatchPageAccessUser,
    PutPageAccessUser => "put-page-access-user": PutPageAccessUser,
    ComponentIds => "component-ids": ComponentIds,
    PageAccessGroupIds => "page-access-group-ids": PageAccessGroupIds,
    Subscriber => "subscriber": Subscriber,
    PostSubscriber => "post-subscriber": PostSubscriber,
    PatchSubscriber => "patch-subscriber": PatchSubscriber,
    SubscriberQuery => "subscriber-query": SubscriberQuery,
    SubscriberBulkAction => "subscriber-bulk-action": SubscriberBulkAction,
    SubscriberCountByType => "subscriber-count-by-type": SubscriberCountByType,
    SubscriberCountByState => "subscriber-count-by-state": SubscriberCountByState,
    SubscriberCount => "subscriber-count": SubscriberCount,
    User => "user": User,
    PostUser => "post-user": PostUser,
    PatchUser => "patch-user": PatchUser,
    Error => "error": ErrorEntity,
    Summary => "summary": StatusPageSummary,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn reencode<T>(bytes: &[u8], many: bool, pretty: bool) -> Result<Vec<u8>, SchemaError>
where
    T: DeserializeOwned + Serialize,
{
    if many {
        let records: Vec<T> = codec::decode(bytes)?;
        write(&records, pretty)
    } else {
        let record: T = codec::decode(bytes)?;
        write(&record, pretty)
    }
}

fn write<T: Serialize>(value: &T, pretty: bool) -> Result<Vec<u8>, SchemaError> {
    if pretty {
        codec::encode_pretty(value)
    } else {
        codec::encode(value)
    }
}
