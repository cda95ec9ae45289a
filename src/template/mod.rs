//! # Template Catalog
//!
//! The fixed, ordered set of ten visual templates. `TemplateId` is the sole
//! key every renderer switches on, so an id that parsed is an id every
//! renderer can handle — invalid ids are rejected here, at the boundary,
//! not deep inside a renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FactureError;

/// Stable key selecting one of the ten visual layouts, shared bit-exact
/// across the HTML, PDF, and preview renderers and the external selector UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Classic,
    Modern,
    Minimal,
    Professional,
    Elegant,
    Corporate,
    Simple,
    Bold,
    Compact,
    Premium,
}

impl TemplateId {
    /// All ids, in catalog display order.
    pub const ALL: [TemplateId; 10] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Minimal,
        TemplateId::Professional,
        TemplateId::Elegant,
        TemplateId::Corporate,
        TemplateId::Simple,
        TemplateId::Bold,
        TemplateId::Compact,
        TemplateId::Premium,
    ];

    /// The wire/filename form of the id.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
            TemplateId::Elegant => "elegant",
            TemplateId::Corporate => "corporate",
            TemplateId::Simple => "simple",
            TemplateId::Bold => "bold",
            TemplateId::Compact => "compact",
            TemplateId::Premium => "premium",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = FactureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FactureError::UnknownTemplate(s.to_string()))
    }
}

/// Catalog metadata for one template: the id plus what the selector UI shows.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

static CATALOG: [TemplateDescriptor; 10] = [
    TemplateDescriptor {
        id: TemplateId::Classic,
        name: "Classic",
        description: "Traditional invoice layout with clean lines",
    },
    TemplateDescriptor {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Contemporary design with subtle colors",
    },
    TemplateDescriptor {
        id: TemplateId::Minimal,
        name: "Minimal",
        description: "Clean and simple with minimal styling",
    },
    TemplateDescriptor {
        id: TemplateId::Professional,
        name: "Professional",
        description: "Business-focused with detailed sections",
    },
    TemplateDescriptor {
        id: TemplateId::Elegant,
        name: "Elegant",
        description: "Sophisticated design with refined typography",
    },
    TemplateDescriptor {
        id: TemplateId::Corporate,
        name: "Corporate",
        description: "Formal layout for enterprise use",
    },
    TemplateDescriptor {
        id: TemplateId::Simple,
        name: "Simple",
        description: "Basic layout focusing on essentials",
    },
    TemplateDescriptor {
        id: TemplateId::Bold,
        name: "Bold",
        description: "Strong visual hierarchy with bold headers",
    },
    TemplateDescriptor {
        id: TemplateId::Compact,
        name: "Compact",
        description: "Space-efficient layout for many items",
    },
    TemplateDescriptor {
        id: TemplateId::Premium,
        name: "Premium",
        description: "High-end design with premium feel",
    },
];

/// The fixed ordered catalog of all ten templates.
pub fn catalog() -> &'static [TemplateDescriptor; 10] {
    &CATALOG
}

/// Look up a descriptor by its string id. This is the fail-fast point for
/// caller-supplied ids.
pub fn lookup(id: &str) -> Result<&'static TemplateDescriptor, FactureError> {
    CATALOG
        .iter()
        .find(|d| d.id.as_str() == id)
        .ok_or_else(|| FactureError::UnknownTemplate(id.to_string()))
}
