//! # Scene Ownership
//!
//! The list of live objects is an explicit value owned by the caller. Every
//! mutation receives the [`Renderer`] that created the handles, so disposal
//! always goes back through it.

use primitive_mapper::PrimitiveSpec;

/// The rendering collaborator.
///
/// `create` builds a placed, lit mesh for a primitive and returns an opaque
/// handle; `dispose` releases the mesh and its GPU resources.
pub trait Renderer {
    type Handle;

    fn create(&mut self, spec: &PrimitiveSpec) -> Self::Handle;

    fn dispose(&mut self, handle: Self::Handle);
}

/// One live object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject<H> {
    pub spec: PrimitiveSpec,
    pub handle: H,
}

/// Objects currently shown, in creation order.
///
/// ## Example
///
/// ```rust
/// use primitive_mapper::{to_primitive, PrimitiveSpec};
/// use prompt_parser::extract;
/// use text_cad_pipeline::{Renderer, Scene};
///
/// struct Counter(usize);
///
/// impl Renderer for Counter {
///     type Handle = usize;
///     fn create(&mut self, _spec: &PrimitiveSpec) -> usize {
///         self.0 += 1;
///         self.0
///     }
///     fn dispose(&mut self, _handle: usize) {}
/// }
///
/// let mut renderer = Counter(0);
/// let mut scene = Scene::new();
/// scene.add(&mut renderer, to_primitive(&extract("a cube").unwrap()));
/// assert_eq!(scene.len(), 1);
/// scene.clear(&mut renderer);
/// assert!(scene.is_empty());
/// ```
#[derive(Debug)]
pub struct Scene<H> {
    objects: Vec<SceneObject<H>>,
}

impl<H> Default for Scene<H> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

impl<H> Scene<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the primitive through `renderer` and keep it.
    pub fn add<R>(&mut self, renderer: &mut R, spec: PrimitiveSpec) -> &SceneObject<H>
    where
        R: Renderer<Handle = H>,
    {
        let handle = renderer.create(&spec);
        self.objects.push(SceneObject { spec, handle });
        &self.objects[self.objects.len() - 1]
    }

    /// Add every primitive in order. Returns how many were added.
    pub fn add_all<R, I>(&mut self, renderer: &mut R, specs: I) -> usize
    where
        R: Renderer<Handle = H>,
        I: IntoIterator<Item = PrimitiveSpec>,
    {
        let before = self.objects.len();
        for spec in specs {
            self.add(renderer, spec);
        }
        self.objects.len() - before
    }

    /// Dispose the most recent object. Returns its spec.
    pub fn remove_last<R>(&mut self, renderer: &mut R) -> Option<PrimitiveSpec>
    where
        R: Renderer<Handle = H>,
    {
        let object = self.objects.pop()?;
        renderer.dispose(object.handle);
        Some(object.spec)
    }

    /// Dispose every object. Returns how many were removed.
    pub fn clear<R>(&mut self, renderer: &mut R) -> usize
    where
        R: Renderer<Handle = H>,
    {
        let count = self.objects.len();
        for object in self.objects.drain(..) {
            renderer.dispose(object.handle);
        }
        tracing::debug!(count, "cleared scene");
        count
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject<H>> {
        self.objects.iter()
    }

    pub fn last(&self) -> Option<&SceneObject<H>> {
        self.objects.last()
    }
}

#[cfg(test)]
mod tests {
    use prompt_parser::Shape;

    use super::*;
    use crate::interpret::Interpreter;

    /// Hands out sequential ids and remembers what it disposed.
    #[derive(Default)]
    struct RecordingRenderer {
        next: u32,
        created: Vec<Shape>,
        disposed: Vec<u32>,
    }

    impl Renderer for RecordingRenderer {
        type Handle = u32;

        fn create(&mut self, spec: &PrimitiveSpec) -> u32 {
            self.next += 1;
            self.created.push(spec.kind());
            self.next
        }

        fn dispose(&mut self, handle: u32) {
            self.disposed.push(handle);
        }
    }

    fn primitives(text: &str) -> Vec<PrimitiveSpec> {
        Interpreter::local().interpret(text).unwrap().primitives
    }

    #[test]
    fn test_add_all_in_order() {
        let mut renderer = RecordingRenderer::default();
        let mut scene = Scene::new();
        let added = scene.add_all(&mut renderer, primitives("a sphere and a cube and a cone"));
        assert_eq!(added, 3);
        assert_eq!(renderer.created, vec![Shape::Sphere, Shape::Cube, Shape::Cone]);
        let handles: Vec<u32> = scene.iter().map(|o| o.handle).collect();
        assert_eq!(handles, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_last_disposes_newest() {
        let mut renderer = RecordingRenderer::default();
        let mut scene = Scene::new();
        scene.add_all(&mut renderer, primitives("3 cubes"));
        let removed = scene.remove_last(&mut renderer).unwrap();
        assert_eq!(removed.kind(), Shape::Cube);
        assert_eq!(renderer.disposed, vec![3]);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.last().map(|o| o.handle), Some(2));
    }

    #[test]
    fn test_remove_last_on_empty_scene() {
        let mut renderer = RecordingRenderer::default();
        let mut scene: Scene<u32> = Scene::new();
        assert!(scene.remove_last(&mut renderer).is_none());
        assert!(renderer.disposed.is_empty());
    }

    #[test]
    fn test_clear_disposes_everything() {
        let mut renderer = RecordingRenderer::default();
        let mut scene = Scene::new();
        scene.add_all(&mut renderer, primitives("a table with 4 legs"));
        assert_eq!(scene.clear(&mut renderer), 5);
        assert!(scene.is_empty());
        assert_eq!(renderer.disposed, vec![1, 2, 3, 4, 5]);
    }
}
