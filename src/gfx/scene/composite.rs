use cgmath::Vector3;

use crate::gfx::shading::{Primitive, TransformComposer};

/// A scene item assembled from several primitives around one anchor
///
/// Part transforms are stored relative to the anchor. The world position of
/// every part is `anchor + local position`, so moving the whole object only
/// ever means changing the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeObject {
    pub name: &'static str,
    pub anchor: Vector3<f32>,
    parts: Vec<Primitive>,
}

impl CompositeObject {
    pub fn new(name: &'static str, anchor: Vector3<f32>) -> Self {
        Self {
            name,
            anchor,
            parts: Vec::new(),
        }
    }

    /// Appends a part whose transform is relative to the anchor
    pub fn push(&mut self, part: Primitive) {
        self.parts.push(part);
    }

    /// Builder pattern: append a part
    pub fn with_part(mut self, part: Primitive) -> Self {
        self.push(part);
        self
    }

    /// The same object placed at a different anchor
    pub fn with_anchor(mut self, anchor: Vector3<f32>) -> Self {
        self.anchor = anchor;
        self
    }

    /// Parts in draw order, relative to the anchor
    pub fn local_parts(&self) -> &[Primitive] {
        &self.parts
    }

    /// Parts in draw order with the anchor applied
    pub fn world_parts(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.parts.iter().map(move |part| Primitive {
            transform: part.transform.translated(self.anchor),
            ..part.clone()
        })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn draw(&self, composer: &mut TransformComposer<'_>) {
        for part in self.world_parts() {
            composer.draw_part(&part);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::ShapeMesh;
    use crate::gfx::shading::{ShadingAttributes, Transform};

    #[test]
    fn test_world_parts_offset_by_anchor() {
        let object = CompositeObject::new("stack", Vector3::new(1.0, 2.0, 3.0))
            .with_part(Primitive::new(
                "base",
                ShapeMesh::Box,
                Transform::new([2.0, 1.0, 2.0], [0.0, 15.0, 0.0], [0.0, 0.5, 0.0]),
                ShadingAttributes::default(),
            ))
            .with_part(Primitive::new(
                "top",
                ShapeMesh::Sphere,
                Transform::new([1.0; 3], [0.0; 3], [0.0, 1.5, 0.0]),
                ShadingAttributes::default(),
            ));

        let world: Vec<Primitive> = object.world_parts().collect();
        assert_eq!(world.len(), 2);
        assert_eq!(world[0].transform.position, Vector3::new(1.0, 2.5, 3.0));
        assert_eq!(world[0].transform.rotation_degrees, Vector3::new(0.0, 15.0, 0.0));
        assert_eq!(world[1].transform.position, Vector3::new(1.0, 3.5, 3.0));
        assert_eq!(object.local_parts()[1].transform.position, Vector3::new(0.0, 1.5, 0.0));
    }
}
