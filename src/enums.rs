use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::SchemaError;

/// 声明一个封闭的字符串枚举，每个成员显式对应一个线上取值
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(SchemaError::unknown_token(other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token
                    .parse()
                    .map_err(|_| de::Error::unknown_variant(&token, Self::TOKENS))
            }
        }
    };
}

wire_enum! {
    /// 组件状态
    pub enum ComponentStatus {
        Operational => "operational",
        UnderMaintenance => "under_maintenance",
        DegradedPerformance => "degraded_performance",
        PartialOutage => "partial_outage",
        MajorOutage => "major_outage",
        /// 未设置
        Empty => "",
    }
}

wire_enum! {
    /// 事件影响等级，同时用于 impact 与 impact_override
    pub enum IncidentImpact {
        None => "none",
        Maintenance => "maintenance",
        Minor => "minor",
        Major => "major",
        Critical => "critical",
    }
}

wire_enum! {
    /// 事件状态：前四个属于实时事件，后四个属于计划维护
    pub enum IncidentStatus {
        Investigating => "investigating",
        Identified => "identified",
        Monitoring => "monitoring",
        Resolved => "resolved",
        Scheduled => "scheduled",
        InProgress => "in_progress",
        Verifying => "verifying",
        Completed => "completed",
    }
}

impl IncidentStatus {
    /// 是否属于计划维护的状态集合
    pub fn is_scheduled(&self) -> bool {
        matches!(
            self,
            IncidentStatus::Scheduled
                | IncidentStatus::InProgress
                | IncidentStatus::Verifying
                | IncidentStatus::Completed
        )
    }

    /// 两个状态是否来自同一套词汇（实时 / 计划维护）。仅供参考，不做校验
    pub fn same_vocabulary(&self, other: IncidentStatus) -> bool {
        self.is_scheduled() == other.is_scheduled()
    }
}

wire_enum! {
    /// 事件模板更新后的目标状态
    pub enum TemplateUpdateStatus {
        Investigating => "investigating",
        Identified => "identified",
        Monitoring => "monitoring",
        Resolved => "resolved",
        Scheduled => "scheduled",
        InProgress => "in_progress",
        Verifying => "verifying",
        Completed => "completed",
    }
}

wire_enum! {
    /// 订阅者的通知渠道
    pub enum SubscriberType {
        Email => "email",
        Sms => "sms",
        Webhook => "webhook",
        Slack => "slack",
        Teams => "teams",
        IntegrationPartner => "integration_partner",
    }
}

wire_enum! {
    /// 订阅者生命周期状态；`all` 只用于列表过滤
    pub enum SubscriberState {
        Active => "active",
        Unconfirmed => "unconfirmed",
        Quarantined => "quarantined",
        All => "all",
    }
}

wire_enum! {
    pub enum SortField {
        Primary => "primary",
        CreatedAt => "created_at",
        QuarantinedAt => "quarantined_at",
        Relevance => "relevance",
    }
}

wire_enum! {
    pub enum SortDirection {
        Asc => "asc",
        Desc => "desc",
    }
}

wire_enum! {
    /// 指标数据的聚合方式
    pub enum MetricTransform {
        Average => "average",
        Count => "count",
        Max => "max",
        Min => "min",
        Sum => "sum",
        ResponseTime => "response_time",
        Uptime => "uptime",
    }
}

wire_enum! {
    /// 指标数据来源，线上取值首字母大写
    pub enum MetricsProviderType {
        Pingdom => "Pingdom",
        NewRelic => "NewRelic",
        Librato => "Librato",
        Datadog => "Datadog",
        SelfHosted => "Self",
    }
}

wire_enum! {
    /// 公共状态摘要中的总体指示
    pub enum StatusIndicator {
        None => "none",
        Minor => "minor",
        Major => "major",
        Critical => "critical",
        Maintenance => "maintenance",
    }
}
