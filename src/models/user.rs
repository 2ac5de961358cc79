use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member account row. `password` is stored in plaintext, login compares it
/// verbatim.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub tubarao_id: Option<String>,
    pub full_name: Option<String>,
    pub cpf: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberProfileResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub tubarao_id: Option<String>,
    pub full_name: Option<String>,
    pub cpf: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
}

impl From<User> for MemberProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            tubarao_id: user.tubarao_id,
            full_name: user.full_name,
            cpf: user.cpf,
            birth_date: user.birth_date,
            gender: user.gender,
            phone: user.phone,
        }
    }
}

pub fn serialize_secret_string<S>(
    _: &secrecy::SecretString,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str("[REDACTED]")
}

pub fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<secrecy::SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(secrecy::SecretString::new(s.into_boxed_str()))
}
