//! Domain (zone) operations.

use std::sync::Arc;

use serde::Deserialize;
use strum_macros::IntoStaticStr;

use crate::client::Connection;
use crate::wire::{
    EnableDisable, Timestamp, YesNo, deserialize_to_i64, deserialize_to_option_i64,
};
use crate::{ClientError, ValidationError};

/// A domain managed by the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Domain {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub punycode: Option<String>,
    pub status: EnableDisable,
    #[serde(default)]
    pub ext_status: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub grade_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub searchengine_push: Option<YesNo>,
    #[serde(default)]
    pub is_mark: Option<YesNo>,
    #[serde(default)]
    pub is_vip: Option<YesNo>,
    #[serde(default)]
    pub cname_speedup: Option<EnableDisable>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub records: Option<i64>,
    #[serde(default)]
    pub auth_to_anquanbao: bool,
    #[serde(default)]
    pub created_on: Option<Timestamp>,
    #[serde(default)]
    pub updated_on: Option<Timestamp>,
}

/// Per-category totals returned alongside a domain list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainCounts {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub domain_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub all_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub mine_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub share_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub vip_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub ismark_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub pause_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub error_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub lock_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub spam_total: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub vip_expire: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub share_out_total: i64,
}

/// A page of domains together with the account's totals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainListing {
    #[serde(default)]
    pub info: DomainCounts,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// Restricts [DomainApi::list] to one category of domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum ListType {
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "mine")]
    Mine,
    /// Domains shared with the account.
    #[strum(serialize = "share")]
    Share,
    #[strum(serialize = "ismark")]
    Marked,
    #[strum(serialize = "pause")]
    Paused,
    #[strum(serialize = "vip")]
    Vip,
    /// Most recently operated domains.
    #[strum(serialize = "recent")]
    Recent,
    /// Domains the account shares with others.
    #[strum(serialize = "share_out")]
    ShareOut,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDomainOptions {
    pub group_id: Option<i64>,
    pub is_mark: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainListOptions {
    pub list_type: Option<ListType>,
    pub offset: Option<u32>,
    pub length: Option<u32>,
    pub group_id: Option<i64>,
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainLogOptions {
    pub offset: Option<u32>,
    pub length: Option<u32>,
}

/// Domain operations, reached through [Client::domain](crate::Client::domain).
pub struct DomainApi {
    connection: Arc<Connection>,
}

impl DomainApi {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Adds a domain to the account and returns its ID.
    ///
    /// # Errors
    ///
    /// Will return a `Validation` error without sending anything if `name` is empty.
    pub fn create(&self, name: &str, options: CreateDomainOptions) -> Result<i64, ClientError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyDomainName.into());
        }

        let payload = self
            .connection
            .payload()
            .add("domain", name)
            .add_if_some("group_id", options.group_id)
            .add_if_some("is_mark", options.is_mark.map(YesNo::from));

        #[derive(Deserialize)]
        struct Created {
            #[serde(deserialize_with = "deserialize_to_i64")]
            id: i64,
        }

        #[derive(Deserialize)]
        struct Response {
            domain: Created,
        }

        Ok(self
            .connection
            .send_request::<Response>("Domain.Create", payload)?
            .domain
            .id)
    }

    /// Lists the domains matching the options, in the order the API returns them.
    pub fn list(&self, options: DomainListOptions) -> Result<Vec<Domain>, ClientError> {
        Ok(self.listing(options)?.domains)
    }

    /// Like [list](Self::list), but keeps the totals the API sends with the page.
    pub fn listing(&self, options: DomainListOptions) -> Result<DomainListing, ClientError> {
        let payload = self
            .connection
            .payload()
            .add_if_some("type", options.list_type.map(|t| t.as_str()))
            .add_if_some("offset", options.offset)
            .add_if_some("length", options.length)
            .add_if_some("group_id", options.group_id)
            .add_if_some("keyword", options.keyword);

        self.connection.send_request("Domain.List", payload)
    }

    pub fn remove(&self, name: &str) -> Result<(), ClientError> {
        let payload = self.connection.payload().add("domain", name);

        self.connection
            .send_request::<serde::de::IgnoredAny>("Domain.Remove", payload)?;
        Ok(())
    }

    /// Turns resolution of the domain on or off, without removing it.
    pub fn set_status(&self, name: &str, enabled: bool) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add("domain", name)
            .add("status", EnableDisable::from(enabled));

        self.connection
            .send_request::<serde::de::IgnoredAny>("Domain.Status", payload)?;
        Ok(())
    }

    pub fn info(&self, name: &str) -> Result<Domain, ClientError> {
        let payload = self.connection.payload().add("domain", name);

        #[derive(Deserialize)]
        struct Response {
            domain: Domain,
        }

        Ok(self
            .connection
            .send_request::<Response>("Domain.Info", payload)?
            .domain)
    }

    /// Returns the operation log of the domain, newest first.
    pub fn log(&self, name: &str, options: DomainLogOptions) -> Result<Vec<String>, ClientError> {
        let payload = self
            .connection
            .payload()
            .add("domain", name)
            .add_if_some("offset", options.offset)
            .add_if_some("length", options.length);

        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            log: Vec<String>,
        }

        Ok(self
            .connection
            .send_request::<Response>("Domain.Log", payload)?
            .log)
    }
}
