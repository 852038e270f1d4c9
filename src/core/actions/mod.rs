//! Lab action definitions: name resolution, parameter typing, and rendering.
//!
//! One [`ActionDefinition`] is produced per slot and renders as
//! `action <Name>(<type> param1, ...) : <index>;`.

use std::fmt;

use crate::core::defs::CommandDescriptor;
use crate::core::error::GenerateError;
use crate::core::sizes::DELETED;

/// Argument tag that maps to a float parameter. Every other tag is an int.
const FLOAT_TAG: &str = "single";

/// Type of one action parameter in the definition language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgType {
    Int,
    Float,
}

impl ArgType {
    pub fn from_tag(tag: &serde_json::Value) -> Self {
        if tag.as_str() == Some(FLOAT_TAG) {
            ArgType::Float
        } else {
            ArgType::Int
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ArgType::Int => "int",
            ArgType::Float => "float",
        }
    }
}

/// A fully resolved action slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionDefinition {
    pub index: usize,
    pub name: String,
    pub params: Vec<ArgType>,
    pub deleted: bool,
    pub documented: bool,
}

impl ActionDefinition {
    /// Resolve a slot from its parameter count and optional descriptor.
    ///
    /// The descriptor must list a type tag for every parameter. The last
    /// parameter is always emitted as `int`, whatever its tag says; existing
    /// consumers of the definition file rely on that.
    pub fn resolve(
        index: usize,
        param_count: i64,
        descriptor: Option<&CommandDescriptor>,
    ) -> Result<Self, GenerateError> {
        let deleted = param_count == DELETED;
        let mut name = match descriptor {
            Some(d) => d.name.clone(),
            None => unknown_name(index),
        };
        if deleted {
            name.push_str("_DELETED");
        }

        let count = usize::try_from(param_count).unwrap_or(0);
        let mut params = Vec::with_capacity(count);
        if let Some(d) = descriptor {
            if d.arguments.len() < count {
                return Err(GenerateError::MissingArgument {
                    index,
                    name: d.name.clone(),
                    count,
                    available: d.arguments.len(),
                });
            }
            if count > 0 && d.arguments.len() > count {
                log::warn!(
                    "Action {} ({}) lists {} argument types for {} parameters; extra types ignored",
                    index,
                    d.name,
                    d.arguments.len(),
                    count
                );
            }
            params.extend(d.arguments[..count].iter().map(ArgType::from_tag));
        } else {
            params.resize(count, ArgType::Int);
        }
        if let Some(last) = params.last_mut() {
            *last = ArgType::Int;
        }

        Ok(Self {
            index,
            name,
            params,
            deleted,
            documented: descriptor.is_some(),
        })
    }
}

impl fmt::Display for ActionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action {}(", self.name)?;
        for (i, ty) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} param{}", ty.keyword(), i + 1)?;
        }
        write!(f, ") : {};", self.index)
    }
}

/// Placeholder name for slots without a descriptor.
pub fn unknown_name(index: usize) -> String {
    format!("AUnknown_{}", index)
}
