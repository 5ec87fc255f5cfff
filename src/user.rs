use serde::{Deserialize, Serialize};

use crate::envelope::{Patch, Post, Resource};
use crate::field::Field;
use crate::Timestamp;

/// 组织内的团队成员
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct EditUser {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub password: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub last_name: Field<String>,
}

impl Resource for EditUser {
    const ENVELOPE: &'static str = "user";

    fn missing_required(&self) -> Option<&'static str> {
        self.email.is_missing().then_some("email")
    }
}

pub type PostUser = Post<EditUser>;
pub type PatchUser = Patch<EditUser>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_user_clears_last_name() {
        let patch = PatchUser::from(EditUser {
            last_name: Field::Null,
            ..EditUser::default()
        });
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"user": {"last_name": null}})
        );
    }

    #[test]
    fn post_user_decodes_with_email() {
        let post: PostUser = serde_json::from_value(json!({
            "user": {"email": "jo@example.com", "first_name": "Jo"}
        }))
        .unwrap();
        assert_eq!(post.0.email.value().map(String::as_str), Some("jo@example.com"));
        assert!(post.0.password.is_missing());
    }
}
