use std::fmt;

use serde::{Deserialize, Serialize};

/// Order identifier. The service returns either numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        OrderId::Number(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        OrderId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        username: impl Into<String>,
        status: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            status: status.into(),
            created_at: created_at.into(),
        }
    }

    /// Update payload carrying every editable field
    pub fn to_patch(&self) -> OrderPatch {
        OrderPatch {
            username: Some(self.username.clone()),
            status: Some(self.status.clone()),
            created_at: Some(self.created_at.clone()),
        }
    }

    pub fn apply(&mut self, patch: &OrderPatch) {
        if let Some(ref username) = patch.username {
            self.username = username.clone();
        }
        if let Some(ref status) = patch.status {
            self.status = status.clone();
        }
        if let Some(ref created_at) = patch.created_at {
            self.created_at = created_at.clone();
        }
    }
}

/// Column / form field of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    Id,
    Username,
    Status,
    CreatedAt,
}

impl OrderField {
    pub const ALL: [OrderField; 4] = [
        OrderField::Id,
        OrderField::Username,
        OrderField::Status,
        OrderField::CreatedAt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderField::Id => "ID",
            OrderField::Username => "Username",
            OrderField::Status => "Status",
            OrderField::CreatedAt => "Created",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Order being created. Only the username is client-supplied; the service
/// assigns id, status and creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub username: String,
}

/// Create payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub username: String,
}

/// Update payload; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl OrderPatch {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }
}
