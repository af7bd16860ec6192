use serde::Serialize;

/// The profile name and email handed to a single invocation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GitIdentity {
    #[serde(rename = "arg1")]
    pub profile_name: String,
    #[serde(rename = "arg2")]
    pub email: String,
}

impl GitIdentity {
    pub fn new(profile_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            email: email.into(),
        }
    }
}
