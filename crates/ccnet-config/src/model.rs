// crates/ccnet-config/src/model.rs

//! Internal `serde` structures that map directly to the settings document.
//! These are deserialized first and then resolved into `Settings`.

#![allow(clippy::pedantic)] // XML attribute names are not idiomatic Rust

use serde::Deserialize;

/// `<settings targetVersion="1.5" indent="4" declaration="false"/>`
///
/// Every attribute is optional; absent ones fall back to the defaults of
/// `Settings`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "settings")]
pub struct SettingsModel {
    #[serde(rename = "@targetVersion", default)]
    pub target_version: Option<String>,

    #[serde(rename = "@indent", default)]
    pub indent: Option<usize>,

    #[serde(rename = "@declaration", default)]
    pub declaration: Option<bool>,
}
