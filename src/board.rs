//! Board: element registry, dependency links and the render pass.
//!
//! DESIGN
//! ======
//! The board exclusively owns every element. Points and angles live in
//! separate maps so a render pass can borrow all points immutably while
//! updating one angle mutably. Dependency links are stored on the parent
//! point as a list of child ids; moving a point re-dirties exactly those
//! children. Deeper propagation is left to hosts.
//!
//! Names need not be unique. A name index maps each name to the element most
//! recently registered under it, so name lookup never depends on map order.
//!
//! Elements reach the board only through the [`Registry`] trait, which is
//! also what [`Angle::create`] is written against.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashMap;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::angle::Angle;
use crate::consts::{ANGLE_ID_TAG, BOARD_ID_LEN, POINT_ID_TAG};
use crate::coords::Coords;
use crate::element::{ElementError, ElementId, ElementKind, GeometryElement, NoPoints};
use crate::options::Options;
use crate::point::{Point, PointAttributes};
use crate::render::Renderer;

/// What an angle needs from the board it is created on.
pub trait Registry {
    fn options(&self) -> &Options;

    fn point(&self, id: &ElementId) -> Option<&Point>;

    /// Texts of every registered angle.
    fn angle_texts(&self) -> Vec<&str>;

    /// Store `angle`, assigning its final id and name. Returns the id.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the angle requests an id that is taken.
    fn add_angle(&mut self, angle: Angle) -> Result<ElementId, ElementError>;

    /// Record `child` as a dependent of `parent`.
    fn add_child(&mut self, parent: &ElementId, child: &ElementId);
}

pub struct Board {
    id: String,
    options: Options,
    points: HashMap<ElementId, Point>,
    angles: HashMap<ElementId, Angle>,
    /// Name -> id of the latest element registered under that name.
    names: HashMap<String, ElementId>,
    num_objects: u64,
}

impl Board {
    /// Create an empty board with a generated id.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        let short: String = uuid.chars().take(BOARD_ID_LEN).collect();
        Self::with_id(format!("b{short}"), options)
    }

    /// Create an empty board with a fixed id prefix for element ids.
    #[must_use]
    pub fn with_id(id: impl Into<String>, options: Options) -> Self {
        Self {
            id: id.into(),
            options,
            points: HashMap::new(),
            angles: HashMap::new(),
            names: HashMap::new(),
            num_objects: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    // --- Element creation ---

    /// Add a point at `coords`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` for non-finite input and `DuplicateId` if
    /// the requested id is taken.
    pub fn create_point(&mut self, coords: Coords, attrs: &PointAttributes) -> Result<ElementId, ElementError> {
        if !coords.is_finite() {
            return Err(ElementError::InvalidCoordinates { x: coords.x(), y: coords.y() });
        }
        let mut point = Point::new(coords, &self.options, attrs);
        let id = self.claim_id(point.id(), ElementKind::Point)?;
        let name = if point.name().is_empty() {
            self.generate_name(ElementKind::Point)
        } else {
            point.name().to_string()
        };
        point.base_mut().id = id.clone();
        point.base_mut().name = name.clone();
        debug!(%id, %name, x = coords.x(), y = coords.y(), "point registered");
        self.points.insert(id.clone(), point);
        self.index_name(name, &id);
        Ok(id)
    }

    // --- Mutation ---

    /// Move a point and re-dirty its direct dependents.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not a point and `InvalidCoordinates` for
    /// non-finite input.
    pub fn move_point(&mut self, id: &ElementId, coords: Coords) -> Result<(), ElementError> {
        if !coords.is_finite() {
            return Err(ElementError::InvalidCoordinates { x: coords.x(), y: coords.y() });
        }
        let Some(point) = self.points.get_mut(id) else {
            return Err(ElementError::NotFound(id.clone()));
        };
        point.set_coords(coords);
        let children = point.children().to_vec();
        for child in &children {
            if let Some(angle) = self.angles.get_mut(child) {
                angle.mark_dirty();
            }
        }
        debug!(%id, dependents = children.len(), "point moved");
        Ok(())
    }

    /// Show or hide an element.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no element has `id`.
    pub fn set_visible(&mut self, id: &ElementId, visible: bool) -> Result<(), ElementError> {
        if let Some(point) = self.points.get_mut(id) {
            point.set_visible(visible);
        } else if let Some(angle) = self.angles.get_mut(id) {
            angle.set_visible(visible);
        } else {
            return Err(ElementError::NotFound(id.clone()));
        }
        debug!(%id, visible, "visibility changed");
        Ok(())
    }

    // --- Rendering ---

    /// Visit every element in `(layer, id)` order and let it update `renderer`.
    pub fn update_renderer(&mut self, renderer: &mut dyn Renderer) {
        for (_, kind, id) in self.draw_order() {
            match kind {
                ElementKind::Point => {
                    if let Some(point) = self.points.get_mut(&id) {
                        point.update_renderer(&NoPoints, renderer);
                    }
                }
                ElementKind::Angle => {
                    if let Some(angle) = self.angles.get_mut(&id) {
                        angle.update_renderer(&self.points, renderer);
                    }
                }
            }
        }
    }

    /// Every element as `(layer, kind, id)`, sorted for drawing.
    #[must_use]
    pub fn draw_order(&self) -> Vec<(i64, ElementKind, ElementId)> {
        let mut order: Vec<(i64, ElementKind, ElementId)> = self
            .points
            .values()
            .map(|p| (p.base().layer, ElementKind::Point, p.id().clone()))
            .chain(self.angles.values().map(|a| (a.base().layer, ElementKind::Angle, a.id().clone())))
            .collect();
        order.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.2.cmp(&b.2)));
        order
    }

    // --- Queries ---

    #[must_use]
    pub fn angle(&self, id: &ElementId) -> Option<&Angle> {
        self.angles.get(id)
    }

    pub fn angle_mut(&mut self, id: &ElementId) -> Option<&mut Angle> {
        self.angles.get_mut(id)
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    pub fn angles(&self) -> impl Iterator<Item = &Angle> {
        self.angles.values()
    }

    /// Kind of the element with `id`, if any.
    #[must_use]
    pub fn kind_of(&self, id: &ElementId) -> Option<ElementKind> {
        if self.points.contains_key(id) {
            Some(ElementKind::Point)
        } else if self.angles.contains_key(id) {
            Some(ElementKind::Angle)
        } else {
            None
        }
    }

    /// Look an element up by id first, then by display name. A shared name
    /// resolves to the element registered last under it.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<(ElementKind, ElementId)> {
        let id = ElementId::new(key);
        if let Some(kind) = self.kind_of(&id) {
            return Some((kind, id));
        }
        let id = self.names.get(key)?;
        self.kind_of(id).map(|kind| (kind, id.clone()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len() + self.angles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- Ids and names ---

    /// Use `requested` if set and free, otherwise generate `{board}{tag}{n}`.
    fn claim_id(&mut self, requested: &ElementId, kind: ElementKind) -> Result<ElementId, ElementError> {
        if !requested.is_empty() {
            if self.kind_of(requested).is_some() {
                return Err(ElementError::DuplicateId(requested.clone()));
            }
            self.num_objects += 1;
            return Ok(requested.clone());
        }
        let tag = match kind {
            ElementKind::Point => POINT_ID_TAG,
            ElementKind::Angle => ANGLE_ID_TAG,
        };
        loop {
            self.num_objects += 1;
            let candidate = ElementId::new(format!("{}{tag}{}", self.id, self.num_objects));
            if self.kind_of(&candidate).is_none() {
                return Ok(candidate);
            }
        }
    }

    /// First free single letter (upper case for points, lower case otherwise),
    /// then `{letter}_{n}`.
    fn generate_name(&self, kind: ElementKind) -> String {
        let letters = match kind {
            ElementKind::Point => 'A'..='Z',
            ElementKind::Angle => 'a'..='z',
        };
        let taken = |name: &str| self.names.contains_key(name);

        for letter in letters.clone() {
            let name = letter.to_string();
            if !taken(&name) {
                return name;
            }
        }
        let mut index: u64 = 1;
        loop {
            for letter in letters.clone() {
                let name = format!("{letter}_{{{index}}}");
                if !taken(&name) {
                    return name;
                }
            }
            index += 1;
        }
    }

    fn index_name(&mut self, name: String, id: &ElementId) {
        if let Some(previous) = self.names.insert(name, id.clone()) {
            debug!(%id, %previous, "name now refers to a newer element");
        }
    }
}

impl Registry for Board {
    fn options(&self) -> &Options {
        &self.options
    }

    fn point(&self, id: &ElementId) -> Option<&Point> {
        self.points.get(id)
    }

    fn angle_texts(&self) -> Vec<&str> {
        self.angles.values().map(Angle::text).collect()
    }

    fn add_angle(&mut self, mut angle: Angle) -> Result<ElementId, ElementError> {
        let id = self.claim_id(angle.id(), ElementKind::Angle)?;
        let name = if angle.name().is_empty() {
            self.generate_name(ElementKind::Angle)
        } else {
            angle.name().to_string()
        };
        angle.assign_identity(id.clone(), name.clone());
        debug!(%id, text = angle.text(), "angle registered");
        self.angles.insert(id.clone(), angle);
        self.index_name(name, &id);
        Ok(id)
    }

    fn add_child(&mut self, parent: &ElementId, child: &ElementId) {
        match self.points.get_mut(parent) {
            Some(point) => point.add_child(child.clone()),
            None => warn!(%parent, %child, "dependency parent is not a point on this board"),
        }
    }
}
