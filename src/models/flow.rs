//! Flow and step definitions
//!
//! A flow is one end-to-end request scenario (signup, login, ...) made of an
//! ordered list of steps. Both are immutable once the catalog is loaded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, UnknownFlowId};

/// Identifier of a flow in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowId {
    Signup,
    Login,
    AuthRequest,
    InterService,
    Query,
}

impl FlowId {
    /// Every recognized flow id, in declaration order
    pub const ALL: [FlowId; 5] = [
        FlowId::Signup,
        FlowId::Login,
        FlowId::AuthRequest,
        FlowId::InterService,
        FlowId::Query,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowId::Signup => "signup",
            FlowId::Login => "login",
            FlowId::AuthRequest => "authRequest",
            FlowId::InterService => "interService",
            FlowId::Query => "query",
        }
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowId {
    type Err = UnknownFlowId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownFlowId(s.to_string()))
    }
}

/// RGB colour written as `#rrggbb` in the catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One stage of a flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Architectural layer the request is passing through (e.g. "Gateway :8000")
    pub layer_label: String,
    /// Example payload or code, shown verbatim
    pub snippet: String,
    pub description: String,
    pub accent_color: HexColor,
}

/// A named end-to-end scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: FlowId,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub steps: Vec<Step>,
}

impl Flow {
    /// Index of the last step (flows are validated to be non-empty)
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Tab / header label, e.g. "🔐 Login"
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}
