//! Record operations and the type-safe DNS record.
//!
//! Every call addresses the zone by its name, and the record by its ID.

use std::sync::Arc;

use serde::Deserialize;
use strum_macros::{EnumString, IntoStaticStr};

use crate::client::Connection;
use crate::wire::{
    EnableDisable, OneZero, Timestamp, YesNo, deserialize_to_i64, deserialize_to_option_i64,
};
use crate::{ClientError, ValidationError};

/// Routing line used when none is given.
///
/// This is a protocol token, not a display string.
pub const DEFAULT_LINE: &str = "默认";

/// Range of valid MX priorities.
pub const MX_PRIORITY_RANGE: core::ops::RangeInclusive<u8> = 1..=20;

/// Possible types a DNS record can have.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Type {
    A,
    Cname,
    Mx,
    Txt,
    Ns,
    Aaaa,
    Srv,
}

impl Type {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A DNS record.
///
/// `Record.List` and `Record.Info` name some fields differently, both spellings
/// are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub id: i64,
    #[serde(alias = "sub_domain")]
    pub name: String,
    #[serde(rename = "type", alias = "record_type")]
    pub type_: Type,
    pub value: String,
    #[serde(alias = "record_line")]
    pub line: String,
    #[serde(default, alias = "record_line_id")]
    pub line_id: Option<String>,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub ttl: i64,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub weight: Option<i64>,
    /// Only meaningful for MX records.
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub mx: Option<i64>,
    pub enabled: OneZero,
    #[serde(default)]
    pub monitor_status: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub use_aqb: Option<YesNo>,
    #[serde(default)]
    pub updated_on: Option<Timestamp>,
}

/// Summary of the zone a record list belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordDomain {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub punycode: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub ext_status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub ttl: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub min_ttl: Option<i64>,
    #[serde(default)]
    pub dnspod_ns: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordCounts {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub sub_domains: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub record_total: i64,
}

/// All records of a zone, with the zone summary and counts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordListing {
    pub domain: RecordDomain,
    #[serde(default)]
    pub info: RecordCounts,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Optional fields of [RecordApi::create] and [RecordApi::modify].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordOptions {
    /// Host part of the record, the API uses `@` when absent.
    pub sub_domain: Option<String>,
    /// Routing line, [DEFAULT_LINE] when absent.
    pub line: Option<String>,
    pub disabled: Option<bool>,
    /// MX priority, required for MX records.
    pub mx: Option<u8>,
    pub ttl: Option<u32>,
    /// 0-100, only honoured for enterprise VIP domains.
    pub weight: Option<u8>,
}

impl RecordOptions {
    /// Checks the options against the record type.
    pub fn validate(&self, type_: Type) -> Result<(), ValidationError> {
        if type_ != Type::Mx {
            return Ok(());
        }
        match self.mx {
            None => Err(ValidationError::MissingMxPriority),
            Some(mx) if !MX_PRIORITY_RANGE.contains(&mx) => {
                Err(ValidationError::MxPriorityOutOfRange(mx))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Optional fields of [RecordApi::dynamic_update].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicUpdateOptions {
    pub sub_domain: Option<String>,
    /// Routing line, [DEFAULT_LINE] when absent.
    pub line: Option<String>,
    /// New value, left unchanged by the API when absent.
    pub value: Option<String>,
}

/// Record operations, reached through [Client::record](crate::Client::record).
pub struct RecordApi {
    connection: Arc<Connection>,
}

impl RecordApi {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Lists the records of the zone.
    ///
    /// # Errors
    ///
    /// Will return a `Decode` error if the zone holds a record whose type isn't
    /// one of [Type]'s variants, such as `CAA` or a URL forward.
    pub fn list(&self, domain: &str) -> Result<Vec<Record>, ClientError> {
        Ok(self.listing(domain)?.records)
    }

    /// Like [list](Self::list), but keeps the zone summary and counts.
    pub fn listing(&self, domain: &str) -> Result<RecordListing, ClientError> {
        let payload = self.connection.payload().add("domain", domain);

        self.connection.send_request("Record.List", payload)
    }

    /// Creates a record and returns its ID.
    ///
    /// # Errors
    ///
    /// Will return a `Validation` error without sending anything if an MX
    /// record lacks a priority in 1-20.
    pub fn create(
        &self,
        domain: &str,
        type_: Type,
        value: &str,
        options: RecordOptions,
    ) -> Result<i64, ClientError> {
        options.validate(type_)?;

        let payload = self
            .connection
            .payload()
            .add("record_type", type_.as_str())
            .add_if_some("mx", options.mx)
            .add("value", value)
            .add("domain", domain)
            .add_if_some("sub_domain", options.sub_domain)
            .add("record_line", options.line.as_deref().unwrap_or(DEFAULT_LINE))
            .add_if_some("status", options.disabled.map(|d| EnableDisable::from(!d)))
            .add_if_some("ttl", options.ttl)
            .add_if_some("weight", options.weight);

        #[derive(Deserialize)]
        struct Created {
            #[serde(deserialize_with = "deserialize_to_i64")]
            id: i64,
        }

        #[derive(Deserialize)]
        struct Response {
            record: Created,
        }

        Ok(self
            .connection
            .send_request::<Response>("Record.Create", payload)?
            .record
            .id)
    }

    /// Replaces the record's type, value and whichever options are given.
    ///
    /// Only the given options are sent. Whether the API keeps or resets the
    /// fields left out is up to the API.
    ///
    /// # Errors
    ///
    /// Same validation as [create](Self::create).
    pub fn modify(
        &self,
        domain: &str,
        record_id: i64,
        type_: Type,
        value: &str,
        options: RecordOptions,
    ) -> Result<(), ClientError> {
        options.validate(type_)?;

        let payload = self
            .connection
            .payload()
            .add("record_type", type_.as_str())
            .add_if_some("mx", options.mx)
            .add("value", value)
            .add("domain", domain)
            .add("record_id", record_id)
            .add_if_some("sub_domain", options.sub_domain)
            .add("record_line", options.line.as_deref().unwrap_or(DEFAULT_LINE))
            .add_if_some("status", options.disabled.map(|d| EnableDisable::from(!d)))
            .add_if_some("ttl", options.ttl)
            .add_if_some("weight", options.weight);

        self.connection
            .send_request::<serde::de::IgnoredAny>("Record.Modify", payload)?;
        Ok(())
    }

    pub fn remove(&self, domain: &str, record_id: i64) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add("domain", domain)
            .add("record_id", record_id);

        self.connection
            .send_request::<serde::de::IgnoredAny>("Record.Remove", payload)?;
        Ok(())
    }

    /// Sets the remark of the record, an empty `remark` clears it.
    pub fn remark(&self, domain: &str, record_id: i64, remark: &str) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add("domain", domain)
            .add("record_id", record_id)
            .add("remark", remark);

        self.connection
            .send_request::<serde::de::IgnoredAny>("Record.Remark", payload)?;
        Ok(())
    }

    pub fn info(&self, domain: &str, record_id: i64) -> Result<Record, ClientError> {
        let payload = self
            .connection
            .payload()
            .add("domain", domain)
            .add("record_id", record_id);

        #[derive(Deserialize)]
        struct Response {
            record: Record,
        }

        Ok(self
            .connection
            .send_request::<Response>("Record.Info", payload)?
            .record)
    }

    /// Turns the record on or off. A disabled record isn't served.
    pub fn set_status(
        &self,
        domain: &str,
        record_id: i64,
        enabled: bool,
    ) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add("domain", domain)
            .add("record_id", record_id)
            .add("status", EnableDisable::from(enabled));

        self.connection
            .send_request::<serde::de::IgnoredAny>("Record.Status", payload)?;
        Ok(())
    }

    /// Updates the value of a record, for dynamic DNS.
    ///
    /// Without a value the call succeeds and changes nothing.
    pub fn dynamic_update(
        &self,
        domain: &str,
        record_id: i64,
        options: DynamicUpdateOptions,
    ) -> Result<(), ClientError> {
        let payload = self
            .connection
            .payload()
            .add("domain", domain)
            .add("record_id", record_id)
            .add("record_line", options.line.as_deref().unwrap_or(DEFAULT_LINE))
            .add_if_some("value", options.value)
            .add_if_some("sub_domain", options.sub_domain);

        self.connection
            .send_request::<serde::de::IgnoredAny>("Record.Ddns", payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
