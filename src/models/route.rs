//! Route declarations and the compiled route table.
//!
//! Routes are declared statically in `config::ROUTES` as [`RouteDef`]s and
//! compiled once at startup into a [`RouteTable`]. The table is immutable
//! and shared by reference count; there is no dynamic registration.

use std::collections::HashSet;
use std::sync::Arc;

use super::navigation::{Params, decode_segment, encode_segment};
use crate::core::error::RouteTableError;

/// The views a route can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    PlatformList,
    PlatformDetail,
    HistoryQuery,
}

impl ViewId {
    /// Human-readable title for headers and the document title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::PlatformList => "Platforms",
            Self::PlatformDetail => "Platform",
            Self::HistoryQuery => "History",
        }
    }
}

/// A static route declaration: `(pattern, view, name?, props?)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Path pattern, e.g. `/platform/:name`.
    pub pattern: &'static str,
    pub view: ViewId,
    /// Unique symbolic name, used by `Router::href_for`.
    pub name: Option<&'static str>,
    /// Forward bound path parameters to the view as its input.
    pub props: bool,
}

impl RouteDef {
    pub const fn new(pattern: &'static str, view: ViewId) -> Self {
        Self {
            pattern,
            view,
            name: None,
            props: false,
        }
    }

    pub const fn named(self, name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    pub const fn with_props(self) -> Self {
        Self {
            props: true,
            ..self
        }
    }
}

/// One segment of a compiled pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly (case-sensitive).
    Static(&'static str),
    /// `:name` - matches any non-empty segment.
    Param(&'static str),
}

/// A compiled path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw: &'static str) -> Result<Self, RouteTableError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(RouteTableError::InvalidPattern(raw.to_string()));
        };

        let mut segments = Vec::new();
        let mut seen = HashSet::new();
        for part in split_segments(rest) {
            match part.strip_prefix(':') {
                Some("") => return Err(RouteTableError::EmptyParamName(raw.to_string())),
                Some(name) => {
                    if !seen.insert(name) {
                        return Err(RouteTableError::DuplicateParam {
                            pattern: raw.to_string(),
                            param: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name));
                }
                None => segments.push(Segment::Static(part)),
            }
        }

        Ok(Self { segments })
    }

    /// Match already-split path segments, returning the bound parameters.
    ///
    /// Parameter values are percent-decoded; static segments compare raw.
    pub fn matches(&self, path: &[&str]) -> Option<Params> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(expected) if expected == value => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if value.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert((*name).to_string(), decode_segment(value));
                }
            }
        }
        Some(params)
    }

    /// Substitute `params` into the pattern, percent-encoding each value so
    /// it stays one segment.
    ///
    /// Returns the name of the first missing parameter on failure.
    pub fn build(&self, params: &Params) -> Result<String, &'static str> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(name) => match params.get(*name) {
                    Some(value) if !value.is_empty() => path.push_str(&encode_segment(value)),
                    _ => return Err(*name),
                },
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

/// Split the part of a path after its leading `/` into segments.
///
/// The root path has no segments.
pub(crate) fn split_segments(rest: &str) -> Vec<&str> {
    if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    }
}

/// A route declaration together with its compiled pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledRoute {
    pub def: RouteDef,
    pub pattern: RoutePattern,
}

/// The validated, ordered route table.
///
/// Order matters: resolution is first-match-wins.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Arc<[CompiledRoute]>,
}

impl RouteTable {
    pub fn new(defs: &[RouteDef]) -> Result<Self, RouteTableError> {
        let mut names = HashSet::new();
        let mut routes = Vec::with_capacity(defs.len());

        for def in defs {
            if let Some(name) = def.name
                && !names.insert(name)
            {
                return Err(RouteTableError::DuplicateName(name.to_string()));
            }
            routes.push(CompiledRoute {
                def: *def,
                pattern: RoutePattern::parse(def.pattern)?,
            });
        }

        Ok(Self {
            routes: routes.into(),
        })
    }

    pub fn routes(&self) -> &[CompiledRoute] {
        &self.routes
    }

    pub fn find_named(&self, name: &str) -> Option<&CompiledRoute> {
        self.routes.iter().find(|r| r.def.name == Some(name))
    }
}
