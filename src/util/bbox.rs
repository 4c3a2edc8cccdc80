//! Axis-aligned bounding boxes for meshes and whole scenes.
//!
//! Boxes are folded together per primitive with [`BoundingBox::merge`] and then
//! centered once with [`BoundingBox::center`]. The resulting
//! `center_translation` moves the model so that its midpoint sits at the
//! origin, which is what the viewer's camera orbits around.

use cgmath::Vector3;

/// Min/max extent of an object plus the translation that centers it.
///
/// The default box is all-zero rather than +inf/-inf. Merging into a default
/// box therefore pulls the result towards the origin; seed an accumulator from
/// the first real box instead (or use [`BoundingBox::merged`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
    /// Only valid after [`center`](Self::center); stale once `min`/`max` change.
    pub center_translation: Vector3<f32>,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vector3::new(0.0, 0.0, 0.0),
            max: Vector3::new(0.0, 0.0, 0.0),
            center_translation: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

impl BoundingBox {
    pub fn new<V: Into<Vector3<f32>>>(min: V, max: V) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            ..Default::default()
        }
    }

    /// Bounds of a primitive's `POSITION` accessor.
    pub fn from_primitive(primitive: &gltf::mesh::Primitive) -> Self {
        primitive.bounding_box().into()
    }

    /// Grow `self` to enclose `other`, one axis at a time.
    ///
    /// `center_translation` is left alone; call [`center`](Self::center) once
    /// all boxes have been merged.
    pub fn merge(&mut self, other: &BoundingBox) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.min.z = self.min.z.min(other.min.z);

        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
        self.max.z = self.max.z.max(other.max.z);
    }

    /// Recompute `center_translation` as the negated midpoint of the box.
    pub fn center(&mut self) {
        self.center_translation = -((self.min + self.max) * 0.5);
    }

    pub fn extent(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /**
     * Fold `boxes` into one centered box.
     *
     * The accumulator starts from the first box, never from the zero default.
     * Returns `None` when there is nothing to merge.
     */
    pub fn merged<I>(boxes: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = BoundingBox>,
    {
        let mut boxes = boxes.into_iter();
        let mut acc = boxes.next()?;
        for other in boxes {
            acc.merge(&other);
        }
        acc.center();
        Some(acc)
    }

    /// Centered box around every primitive of `mesh`.
    pub fn for_mesh(mesh: &gltf::Mesh) -> Option<BoundingBox> {
        Self::merged(mesh.primitives().map(|p| Self::from_primitive(&p)))
    }

    /// Centered box around every mesh in `document`.
    ///
    /// Node transforms are not applied; this is the extent of the raw mesh data.
    pub fn for_document(document: &gltf::Document) -> Option<BoundingBox> {
        Self::merged(document.meshes().filter_map(|mesh| Self::for_mesh(&mesh)))
    }
}

impl From<gltf::mesh::BoundingBox> for BoundingBox {
    fn from(bounds: gltf::mesh::BoundingBox) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}
