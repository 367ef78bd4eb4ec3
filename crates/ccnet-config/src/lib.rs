// src/lib.rs

#![doc = "Typed model of CruiseControl.NET `ccnet.config` elements."]
#![doc = ""]
#![doc = "Source control providers, labellers, state managers, modification filters"]
#![doc = "and `<project>` blocks map to and from XML fragments. Every property knows"]
#![doc = "the schema versions it belongs to, so one model can be saved for any"]
#![doc = "server release."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_element_from_str`: Parsing any supported fragment, dispatched on its root and `type`."]
#![doc = "- `load_project_from_str`: Parsing a `<project>` block."]
#![doc = "- `save_element_to_string` / `save_project_to_string`: Writing for a target schema version."]

// --- Crate Modules ---

mod builder;
mod descriptor;
mod dispatch;
mod element;
mod error;
mod model;
mod parser;
mod resolver;
mod scalars;
mod settings;
mod version;
mod xml;

pub mod filter;
pub mod labeller;
pub mod project;
pub mod source_control;
pub mod state;

// --- Public API Re-exports ---

pub use builder::{save_element_to_string, save_project_to_string, ElementBuilder};
pub use descriptor::{BoolStyle, Placement, PropertyDescriptor};
pub use dispatch::{discriminator, supported_types};
pub use element::{Category, ConfigurationElement};
pub use error::{ConfigError, Result};
pub use filter::{Filter, FilterGroup};
pub use labeller::Labeller;
pub use parser::{load_element_from_str, load_project_from_str};
pub use project::{ConfigElement, ProjectBlock};
pub use resolver::ElementResolver;
pub use scalars::{NameValuePair, Password, TimeUnits, Timeout};
pub use settings::{Settings, DEFAULT_INDENT};
pub use source_control::SourceControl;
pub use state::StateManager;
pub use version::{SchemaVersion, VersionProvider};
pub use xml::XmlElement;
