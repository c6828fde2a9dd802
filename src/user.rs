//! User account operations.

use std::sync::Arc;

use serde::Deserialize;

use crate::ClientError;
use crate::client::Connection;
use crate::wire::{
    YesNo, deserialize_to_i64, deserialize_to_option_f64, deserialize_to_option_i64,
};

/// Details of the account owning the login token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub email_verified: Option<YesNo>,
    #[serde(default)]
    pub telephone_verified: Option<YesNo>,
    #[serde(default)]
    pub weixin_binded: Option<YesNo>,
    #[serde(default)]
    pub agent_pending: bool,
    #[serde(default, deserialize_with = "deserialize_to_option_f64")]
    pub balance: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub smsbalance: Option<i64>,
    #[serde(default)]
    pub user_grade: Option<String>,
}

/// Fields changed by [UserApi::update_profile]. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub real_name: Option<String>,
    pub nick: Option<String>,
    pub telephone: Option<String>,
}

/// A phone verification code and the binding it authorises.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhoneVerification {
    #[serde(rename = "verify_code")]
    pub code: String,
    #[serde(rename = "verify_desc")]
    pub description: String,
}

/// User operations, reached through [Client::user](crate::Client::user).
pub struct UserApi {
    connection: Arc<Connection>,
}

impl UserApi {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    pub fn detail(&self) -> Result<User, ClientError> {
        let payload = self.connection.payload();

        #[derive(Deserialize)]
        struct Info {
            user: User,
        }

        #[derive(Deserialize)]
        struct Response {
            info: Info,
        }

        Ok(self
            .connection
            .send_request::<Response>("User.Detail", payload)?
            .info
            .user)
    }

    pub fn update_profile(&self, update: ProfileUpdate) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add_if_some("real_name", update.real_name)
            .add_if_some("nick", update.nick)
            .add_if_some("telephone", update.telephone);

        self.connection
            .send_request::<serde::de::IgnoredAny>("User.Modify", payload)?;
        Ok(())
    }

    pub fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add("old_password", old_password)
            .add("new_password", new_password);

        self.connection
            .send_request::<serde::de::IgnoredAny>("Userpasswd.Modify", payload)?;
        Ok(())
    }

    /// Changes the account email, re-authenticating with the current password.
    pub fn change_email(
        &self,
        password: &str,
        old_email: &str,
        new_email: &str,
    ) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add("password", password)
            .add("old_email", old_email)
            .add("new_email", new_email);

        self.connection
            .send_request::<serde::de::IgnoredAny>("Useremail.Modify", payload)?;
        Ok(())
    }

    pub fn request_phone_verification(
        &self,
        telephone: &str,
    ) -> Result<PhoneVerification, ClientError> {
        let payload = self.connection.payload().add("telephone", telephone);

        #[derive(Deserialize)]
        struct Response {
            user: PhoneVerification,
        }

        Ok(self
            .connection
            .send_request::<Response>("Telephoneverify.Code", payload)?
            .user)
    }

    /// Returns the account's action log.
    pub fn log(&self) -> Result<Vec<String>, ClientError> {
        let payload = self.connection.payload();

        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            log: Vec<String>,
        }

        Ok(self
            .connection
            .send_request::<Response>("User.Log", payload)?
            .log)
    }
}
