use crate::{geo::*, id::*};

/// Shown instead of a missing or empty name.
pub const PLACEHOLDER_NAME: &str = "(No name)";

#[derive(Debug, Clone, PartialEq)]
pub struct Pizzeria {
    pub id: Option<Id>,
    pub name: Option<String>,
    pub pos: MapPoint,
}

impl Pizzeria {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => PLACEHOLDER_NAME,
        }
    }
}
