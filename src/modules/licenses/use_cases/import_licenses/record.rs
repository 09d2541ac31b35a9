// Lenient transport shape for license files produced before the registry validated its input.
//
// Purpose
// - Accept ids written as numbers or strings and fill in fields older files never had.

use serde::Deserialize;

use crate::modules::licenses::core::license::{DEFAULT_MAX_USERS, License, User};

const UNNAMED_LICENSE: &str = "Unnamed";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(text) => text,
            RecordId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedUser {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub default_password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedLicense {
    pub id: RecordId,
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub activation_email: String,
    #[serde(default)]
    pub activation_password: String,
    #[serde(default)]
    pub default_password: String,
    pub max_users: Option<u32>,
    #[serde(default)]
    pub users: Vec<ImportedUser>,
}

impl From<ImportedUser> for User {
    fn from(user: ImportedUser) -> Self {
        User {
            id: user.id.into(),
            name: user.name,
            email: user.email,
            password: user.password,
            default_password: user.default_password,
        }
    }
}

impl From<ImportedLicense> for License {
    fn from(license: ImportedLicense) -> Self {
        License {
            id: license.id.into(),
            name: license.name.unwrap_or_else(|| UNNAMED_LICENSE.to_string()),
            email: license.email,
            activation_email: license.activation_email,
            activation_password: license.activation_password,
            default_password: license.default_password,
            max_users: license.max_users.unwrap_or(DEFAULT_MAX_USERS),
            users: license.users.into_iter().map(User::from).collect(),
        }
    }
}

pub fn parse_license_file(raw: &str) -> Result<Vec<License>, serde_json::Error> {
    let records: Vec<ImportedLicense> = serde_json::from_str(raw)?;
    Ok(records.into_iter().map(License::from).collect())
}
