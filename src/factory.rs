//! Named element constructors with parent validation.
//!
//! Declarative scenes name an element type, pass a list of parents and an
//! attribute object. [`ElementRegistry`] maps the type name to a constructor;
//! each constructor validates its parents and reports the offending parent
//! types in an `InvalidParent` error when they do not fit.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::angle::{Angle, AngleAttributes};
use crate::board::{Board, Registry};
use crate::coords::Coords;
use crate::element::{ElementError, ElementId, ElementKind};
use crate::point::PointAttributes;

/// Signature shared by all element constructors.
pub type ElementConstructor = fn(&mut Board, &[Value], &Value) -> Result<ElementId, ElementError>;

/// Type name -> constructor table.
pub struct ElementRegistry {
    constructors: HashMap<String, ElementConstructor>,
}

impl ElementRegistry {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { constructors: HashMap::new() }
    }

    /// A table with the built-in `"point"` and `"angle"` constructors.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("point", create_point);
        registry.register("angle", create_angle);
        registry
    }

    /// Register `constructor` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, constructor: ElementConstructor) {
        self.constructors.insert(name.into().to_lowercase(), constructor);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&name.to_lowercase())
    }

    /// Build an element of type `name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownElementType` for unregistered names, otherwise whatever
    /// the constructor returns.
    pub fn create(
        &self,
        board: &mut Board,
        name: &str,
        parents: &[Value],
        attributes: &Value,
    ) -> Result<ElementId, ElementError> {
        let Some(constructor) = self.constructors.get(&name.to_lowercase()) else {
            return Err(ElementError::UnknownElementType(name.to_string()));
        };
        constructor(board, parents, attributes)
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// =============================================================
// Constructors
// =============================================================

/// Create an angle from three point parents.
///
/// Parents are point ids or point names. Recognised attributes: `radius`,
/// `text`, `id`, `name`, `withLabel`, `layer`, `visible`.
///
/// # Errors
///
/// Returns `InvalidParent` unless exactly three parents are given and all of
/// them resolve to points, `InvalidAttributes` if an attribute has the wrong
/// type, and `DuplicateId` if the requested id is taken.
pub fn create_angle(board: &mut Board, parents: &[Value], attributes: &Value) -> Result<ElementId, ElementError> {
    let resolved: Vec<Option<ElementId>> = parents.iter().map(|p| resolve_point(board, p)).collect();
    let [Some(p1), Some(p2), Some(p3)] = resolved.as_slice() else {
        return Err(invalid_parents(board, "angle", parents, 3));
    };
    let attrs: AngleAttributes = parse_attributes(attributes)?;
    Angle::create(board, p1, p2, p3, &attrs)
}

/// Create a free point from two numeric parents `[x, y]`.
///
/// # Errors
///
/// Returns `InvalidParent` unless exactly two numbers are given, plus the
/// errors of [`Board::create_point`].
pub fn create_point(board: &mut Board, parents: &[Value], attributes: &Value) -> Result<ElementId, ElementError> {
    let [Value::Number(x), Value::Number(y)] = parents else {
        return Err(invalid_parents(board, "point", parents, 2));
    };
    let (Some(x), Some(y)) = (x.as_f64(), y.as_f64()) else {
        return Err(invalid_parents(board, "point", parents, 2));
    };
    let attrs: PointAttributes = parse_attributes(attributes)?;
    board.create_point(Coords::new(x, y), &attrs)
}

// =============================================================
// Helpers
// =============================================================

/// A parent string naming a point on `board`, by id or by name.
fn resolve_point(board: &Board, parent: &Value) -> Option<ElementId> {
    let key = parent.as_str()?;
    match board.resolve(key) {
        Some((ElementKind::Point, id)) if board.point(&id).is_some() => Some(id),
        _ => None,
    }
}

/// Runtime type name of a parent as it appears in error messages.
#[must_use]
pub fn parent_type_name(board: &Board, parent: Option<&Value>) -> String {
    match parent {
        None => "undefined".into(),
        Some(Value::Null) => "null".into(),
        Some(Value::Bool(_)) => "boolean".into(),
        Some(Value::Number(_)) => "number".into(),
        Some(Value::Array(_)) => "array".into(),
        Some(Value::Object(_)) => "object".into(),
        Some(Value::String(s)) => match board.resolve(s) {
            Some((kind, _)) => kind.type_name().into(),
            None => "string".into(),
        },
    }
}

fn invalid_parents(board: &Board, element: &'static str, parents: &[Value], expected: usize) -> ElementError {
    let types = (0..parents.len().max(expected))
        .map(|i| parent_type_name(board, parents.get(i)))
        .collect();
    ElementError::InvalidParent { element, types }
}

/// `null` means "all defaults"; anything else must deserialize as `T`.
fn parse_attributes<T: DeserializeOwned + Default>(attributes: &Value) -> Result<T, ElementError> {
    if attributes.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(attributes.clone())?)
}
