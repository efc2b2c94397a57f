pub mod graphic;
pub mod layer;

pub use graphic::Graphic;
pub use layer::{Layer, LayerId};

use slotmap::SlotMap;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::geometry::Shape;
use crate::math::{Matrix3, Point2};
use crate::render::{paint_shape, Color, ShapeStyle, Surface};

/// Which ordered collection a layer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Background graphics, drawn first.
    Default,
    /// Committed shapes and other active graphics.
    Active,
    /// Development guides, drawn last.
    Dev,
}

/// Editing context owning every layer and the pending shape.
///
/// Layers live in a single arena and are referenced by [`LayerId`]; the three
/// collections only hold ids, in draw order. The pending shape is the one being
/// drawn or edited and is not part of any collection until committed.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    style: ShapeStyle,
    width: f64,
    height: f64,
    layers: SlotMap<LayerId, Layer>,
    defaults: Vec<LayerId>,
    graphics: Vec<LayerId>,
    devs: Vec<LayerId>,
    pending: Option<Shape>,
}

impl Editor {
    /// Creates an editor for a `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: EditorConfig, width: f64, height: f64) -> Result<Self> {
        config.validate()?;
        let style = ShapeStyle::new(config.centroid_radius, ShapeStyle::default().marker_radius())?;
        Ok(Self {
            config,
            style,
            width,
            height,
            layers: SlotMap::with_key(),
            defaults: Vec::new(),
            graphics: Vec::new(),
            devs: Vec::new(),
            pending: None,
        })
    }

    /// Updates the surface size used to clear each frame.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    // --- Layer collections ---

    /// Adds a layer to the active collection.
    pub fn add_graphic(&mut self, layer: Layer) -> LayerId {
        self.insert(layer, Collection::Active)
    }

    /// Adds a layer to the default (background) collection.
    pub fn add_graphic_default(&mut self, layer: Layer) -> LayerId {
        self.insert(layer, Collection::Default)
    }

    /// Adds a layer to the dev (guide) collection.
    pub fn add_graphic_dev(&mut self, layer: Layer) -> LayerId {
        self.insert(layer, Collection::Dev)
    }

    /// Inserts a layer into the arena and appends it to `collection`.
    pub fn insert(&mut self, layer: Layer, collection: Collection) -> LayerId {
        let id = self.layers.insert(layer);
        self.ids_mut(collection).push(id);
        id
    }

    /// Adds a blue dot at the centre of the surface as a dev guide.
    pub fn install_origin_marker(&mut self) -> LayerId {
        let layer = Layer::new(
            self.width / 2.0,
            self.height / 2.0,
            Graphic::OriginMarker {
                radius: 3.0,
                color: Color::BLUE,
            },
        );
        self.add_graphic_dev(layer)
    }

    /// Ids in `collection`, in draw order.
    #[must_use]
    pub fn ids(&self, collection: Collection) -> &[LayerId] {
        match collection {
            Collection::Default => &self.defaults,
            Collection::Active => &self.graphics,
            Collection::Dev => &self.devs,
        }
    }

    fn ids_mut(&mut self, collection: Collection) -> &mut Vec<LayerId> {
        match collection {
            Collection::Default => &mut self.defaults,
            Collection::Active => &mut self.graphics,
            Collection::Dev => &mut self.devs,
        }
    }

    /// Returns the layer, or an error if it is not in the editor.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::LayerNotFound` for a stale or foreign id.
    pub fn layer(&self, id: LayerId) -> Result<&Layer> {
        self.layers
            .get(id)
            .ok_or_else(|| EditorError::LayerNotFound.into())
    }

    /// Returns the layer mutably, or an error if it is not in the editor.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::LayerNotFound` for a stale or foreign id.
    pub fn layer_mut(&mut self, id: LayerId) -> Result<&mut Layer> {
        self.layers
            .get_mut(id)
            .ok_or_else(|| EditorError::LayerNotFound.into())
    }

    /// Removes a layer from the arena and from whichever collection holds it.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::LayerNotFound` for a stale or foreign id.
    pub fn remove_layer(&mut self, id: LayerId) -> Result<Layer> {
        let layer = self.layers.remove(id).ok_or(EditorError::LayerNotFound)?;
        for ids in [&mut self.defaults, &mut self.graphics, &mut self.devs] {
            ids.retain(|&other| other != id);
        }
        Ok(layer)
    }

    /// Number of layers across all collections.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn clear_collection(&mut self, collection: Collection) {
        let ids = std::mem::take(self.ids_mut(collection));
        for id in ids {
            self.layers.remove(id);
        }
    }

    pub fn reset_graphics(&mut self) {
        self.clear_collection(Collection::Active);
    }

    pub fn reset_defaults(&mut self) {
        self.clear_collection(Collection::Default);
    }

    pub fn reset_devs(&mut self) {
        self.clear_collection(Collection::Dev);
    }

    /// Clears every collection and discards the pending shape.
    pub fn reset(&mut self) {
        self.reset_graphics();
        self.reset_defaults();
        self.reset_devs();
        self.reset_pending();
        tracing::info!("editor reset");
    }

    // --- Pending shape ---

    /// Replaces the pending shape.
    pub fn set_pending(&mut self, shape: Shape) {
        self.pending = Some(shape);
    }

    #[must_use]
    pub fn pending(&self) -> Option<&Shape> {
        self.pending.as_ref()
    }

    pub fn pending_mut(&mut self) -> Option<&mut Shape> {
        self.pending.as_mut()
    }

    /// Discards the pending shape, returning it if there was one.
    pub fn reset_pending(&mut self) -> Option<Shape> {
        self.pending.take()
    }

    /// Moves the pending shape into the active collection as a layer at the
    /// canvas origin.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NoPendingShape` if nothing is pending.
    pub fn commit_pending(&mut self) -> Result<LayerId> {
        let shape = self.pending.take().ok_or(EditorError::NoPendingShape)?;
        let vertices = shape.len();
        let id = self.add_graphic(Layer::new(0.0, 0.0, Graphic::Shape(shape)));
        tracing::info!(?id, vertices, "committed pending shape");
        Ok(id)
    }

    /// Maps the pending shape through `matrix`.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NoPendingShape` if nothing is pending.
    pub fn transform_pending(&mut self, matrix: &Matrix3) -> Result<()> {
        let shape = self.pending.as_mut().ok_or(EditorError::NoPendingShape)?;
        shape.transform(matrix);
        Ok(())
    }

    // --- Queries ---

    /// Returns the topmost active layer whose graphic contains `point`.
    #[must_use]
    pub fn pick(&self, point: &Point2) -> Option<LayerId> {
        self.graphics
            .iter()
            .rev()
            .copied()
            .find(|&id| self.layers.get(id).is_some_and(|layer| layer.contains(point)))
    }

    // --- Rendering ---

    /// Draws one frame: clears the surface, then draws the default layers, the
    /// active layers, the pending shape and the dev layers, in that order.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear_rect(0.0, 0.0, self.width, self.height);
        for &id in self.defaults.iter().chain(&self.graphics) {
            if let Some(layer) = self.layers.get(id) {
                layer.draw(surface, &self.style);
            }
        }
        if let Some(shape) = &self.pending {
            paint_shape(surface, shape, &self.style);
        }
        for &id in &self.devs {
            if let Some(layer) = self.layers.get(id) {
                layer.draw(surface, &self.style);
            }
        }
    }
}
