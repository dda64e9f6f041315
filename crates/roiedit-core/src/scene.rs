//! Ordered collection of graphics objects.

use crate::error::{CanvasError, CanvasResult};
use crate::shapes::{Graphics, GraphicsObject, ObjectId};
use kurbo::{Point, Rect};

/// All graphics objects on the overlay, back to front.
///
/// The last object is the topmost and most recently added one.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Graphics>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object on top of all others.
    pub fn add(&mut self, object: impl Into<Graphics>) -> CanvasResult<ObjectId> {
        let object = object.into();
        let id = object.id();
        if self.contains_id(id) {
            return Err(CanvasError::DuplicateObject(id));
        }
        self.objects.push(object);
        Ok(id)
    }

    /// Remove an object by id.
    pub fn remove(&mut self, id: ObjectId) -> Option<Graphics> {
        let index = self.index_of(id)?;
        Some(self.objects.remove(index))
    }

    /// Remove every object that matches a predicate, returning how many went.
    pub fn remove_where(&mut self, mut f: impl FnMut(&Graphics) -> bool) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !f(o));
        before - self.objects.len()
    }

    /// Clear all objects from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by z-order index.
    pub fn get(&self, index: usize) -> Option<&Graphics> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Graphics> {
        self.objects.get_mut(index)
    }

    /// Get an object by id.
    pub fn find(&self, id: ObjectId) -> Option<&Graphics> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn find_mut(&mut self, id: ObjectId) -> Option<&mut Graphics> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    pub fn contains_id(&self, id: ObjectId) -> bool {
        self.index_of(id).is_some()
    }

    /// The topmost (most recently added) object.
    pub fn last_mut(&mut self) -> Option<&mut Graphics> {
        self.objects.last_mut()
    }

    /// Objects back to front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Graphics> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Graphics> {
        self.objects.iter_mut()
    }

    /// Selected objects, back to front.
    pub fn selection(&self) -> impl Iterator<Item = &Graphics> {
        self.objects.iter().filter(|o| o.is_selected())
    }

    pub fn selection_mut(&mut self) -> impl Iterator<Item = &mut Graphics> {
        self.objects.iter_mut().filter(|o| o.is_selected())
    }

    /// Number of selected objects.
    pub fn selection_count(&self) -> usize {
        self.selection().count()
    }

    /// Ids of objects intersecting a rectangle, back to front.
    pub fn intersecting(&self, rect: Rect) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.intersects_with(rect))
            .map(|o| o.id())
            .collect()
    }

    /// Ids of objects containing a point, front to back.
    pub fn objects_at_point(&self, point: Point) -> Vec<ObjectId> {
        self.objects
            .iter()
            .rev()
            .filter(|o| o.hit_test(point).is_hit())
            .map(|o| o.id())
            .collect()
    }

    /// Ids of objects changed since the last call, back to front.
    pub fn take_invalidated(&mut self) -> Vec<ObjectId> {
        self.objects
            .iter_mut()
            .filter_map(|o| o.take_needs_redraw().then(|| o.id()))
            .collect()
    }
}
