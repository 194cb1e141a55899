use serde::Deserialize;

/// Login form. Fields are optional so presence is validated in the action,
/// not by deserialization.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckAccountForm {
    pub subdomain: Option<String>,
}
