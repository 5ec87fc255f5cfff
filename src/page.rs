use serde::{Deserialize, Serialize};

use crate::envelope::{Patch, Put, Resource};
use crate::field::Field;
use crate::Timestamp;

/// 页面元信息
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_from_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_page_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_incident_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_email_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sms_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rss_atom_feeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_webhook_subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_email_footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewers_must_be_team_members: Option<bool>,
    /// 逗号分隔的 CIDR 列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_body_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_light_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_greens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_yellows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_oranges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_blues: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_reds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_graph_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_link_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_no_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_logo: Option<PageLogoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactional_logo: Option<PageLogoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_cover: Option<PageLogoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_logo: Option<PageLogoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_logo: Option<PageLogoItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// 页面上的一张图片及其不同尺寸的地址
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PageLogoItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// 字节数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retina_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditPage {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub domain: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub subdomain: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub branding: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_body_background_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_font_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_light_font_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_greens: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_yellows: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_oranges: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_blues: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_reds: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_border_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_graph_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_link_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub css_no_data: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub hidden_from_search: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub viewers_must_be_team_members: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub allow_page_subscribers: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub allow_incident_subscribers: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub allow_email_subscribers: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub allow_sms_subscribers: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub allow_rss_atom_feeds: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub allow_webhook_subscribers: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub notifications_from_email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub time_zone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub notifications_email_footer: Field<String>,
}

impl Resource for EditPage {
    const ENVELOPE: &'static str = "page";
}

pub type PatchPage = Patch<EditPage>;
pub type PutPage = Put<EditPage>;

/// 嵌入式状态组件的配色
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct StatusEmbedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_text_color: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditStatusEmbedConfig {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub position: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub incident_background_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub incident_text_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub maintenance_background_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub maintenance_text_color: Field<String>,
}

impl Resource for EditStatusEmbedConfig {
    const ENVELOPE: &'static str = "status_embed_config";
}

pub type PatchStatusEmbedConfig = Patch<EditStatusEmbedConfig>;
pub type PutStatusEmbedConfig = Put<EditStatusEmbedConfig>;
