use super::Shape;

/// Ordered collection of shapes.
///
/// Draw order is insertion order; there is no z-index or sorting. Mutable
/// access raises the "scene changed" flag consumed by the render loop.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    changed: bool,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Appends a shape; it is drawn after every shape already present.
    pub fn push(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.changed = true;
        self.shapes.len() - 1
    }

    /// Removes every shape. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.changed = true;
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Mutable access to one shape; marks the scene changed.
    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        let shape = self.shapes.get_mut(index)?;
        self.changed = true;
        Some(shape)
    }

    /// Raises the "scene changed" signal without touching any shape.
    #[inline]
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    #[inline]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Returns and clears the "scene changed" flag.
    #[inline]
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

impl FromIterator<Shape> for Scene {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
            changed: true,
        }
    }
}
