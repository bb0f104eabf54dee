//! Translation aggregation pipeline.
//!
//! The stages run strictly in order, each one feeding the next:
//!
//! 1. `resolve`: expand lookup roots and patterns into candidate sources
//! 2. `loader`: parse one candidate into `locale -> phrase tree`
//! 3. `collect`: fold candidates into locale tables, per package and side
//! 4. `locales`: derive and validate the enabled locale set
//! 5. `registrar`: install merged phrases into the runtime translator
//! 6. `bundle`: compile one artifact per package and enabled locale
//!
//! `pipeline` wires the stages together behind a [`PipelineContext`].

use std::fmt;

use indexmap::IndexMap;

pub mod bundle;
pub mod collect;
pub mod loader;
pub mod locales;
pub mod merge;
pub mod pipeline;
pub mod registrar;
pub mod resolve;
pub mod translator;

pub use bundle::{WrittenBundle, compile_all, render_bundle};
pub use collect::{build_package_tree, collect_translations};
pub use loader::{SourceFormat, load_source};
pub use locales::{LocaleSet, resolve_locales};
pub use merge::{deep_merge, merge_locale_tables};
pub use pipeline::{PipelineContext, PipelineOutput, PreparedTranslations};
pub use registrar::register_runtime;
pub use resolve::{Candidate, resolve_candidates};
pub use translator::{CompiledTable, PhraseEngine, Translator};

/// Nested phrase data. Objects are branches, every other value is an
/// opaque leaf handed to the phrase engine as is.
pub type PhraseTree = serde_json::Value;

/// `scope -> phrases` for one locale.
pub type ScopeTable = IndexMap<String, PhraseTree>;

/// `locale -> scope -> phrases`, in first-seen order.
pub type LocaleTable = IndexMap<String, ScopeTable>;

/// Phrases collected for one package, split by where they are served.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackagePhrases {
    pub client: LocaleTable,
    pub server: LocaleTable,
}

impl PackagePhrases {
    pub fn side(&self, side: Side) -> &LocaleTable {
        match side {
            Side::Client => &self.client,
            Side::Server => &self.server,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut LocaleTable {
        match side {
            Side::Client => &mut self.client,
            Side::Server => &mut self.server,
        }
    }
}

/// `package -> {client, server}`, in configuration order.
pub type PackageTree = IndexMap<String, PackagePhrases>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Client,
    Server,
}

impl Side {
    /// Collection order. Client first, then server.
    pub const ALL: [Side; 2] = [Side::Client, Side::Server];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Client => "client",
            Side::Server => "server",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
