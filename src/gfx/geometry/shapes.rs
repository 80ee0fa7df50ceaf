//! # Primitive Shape Selection
//!
//! The scene never builds geometry itself. Each primitive draw names a
//! [`ShapeMesh`], and a [`MeshProvider`] owns the uploaded buffers for every
//! [`ShapeKind`] and issues the actual draw call.

/// Which faces of a cylinder-like mesh to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CylinderCaps {
    pub top: bool,
    pub bottom: bool,
    pub sides: bool,
}

impl CylinderCaps {
    /// Both end discs and the side wall
    pub const SOLID: Self = Self::new(true, true, true);
    /// Side wall only, open at both ends
    pub const HOLLOW: Self = Self::new(false, false, true);
    /// Both end discs, no side wall
    pub const ENDS: Self = Self::new(true, true, false);
    /// Bottom disc only
    pub const BOTTOM: Self = Self::new(false, true, false);

    pub const fn new(top: bool, bottom: bool, sides: bool) -> Self {
        Self { top, bottom, sides }
    }
}

impl Default for CylinderCaps {
    fn default() -> Self {
        Self::SOLID
    }
}

/// Geometry that has to be uploaded once before it can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Plane,
    Box,
    Cylinder,
    Sphere,
    HalfSphere,
    Torus,
    HalfTorus,
    TaperedCylinder,
    Cone,
    Pyramid3,
    Pyramid4,
    Prism,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 12] = [
        ShapeKind::Plane,
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::HalfSphere,
        ShapeKind::Torus,
        ShapeKind::HalfTorus,
        ShapeKind::TaperedCylinder,
        ShapeKind::Cone,
        ShapeKind::Pyramid3,
        ShapeKind::Pyramid4,
        ShapeKind::Prism,
    ];
}

/// A primitive draw request, including per-draw face selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMesh {
    Plane,
    Box,
    Cylinder(CylinderCaps),
    Sphere,
    HalfSphere,
    Torus,
    HalfTorus,
    TaperedCylinder(CylinderCaps),
    Cone { bottom: bool },
    Pyramid3,
    Pyramid4,
    Prism,
    /// Draws nothing
    None,
}

impl ShapeMesh {
    /// Solid cylinder with both caps.
    pub const CYLINDER: Self = ShapeMesh::Cylinder(CylinderCaps::SOLID);
    /// Open tube.
    pub const HOLLOW_CYLINDER: Self = ShapeMesh::Cylinder(CylinderCaps::HOLLOW);
    pub const TAPERED_CYLINDER: Self = ShapeMesh::TaperedCylinder(CylinderCaps::SOLID);

    /// The uploaded geometry this draw uses, `None` for [`ShapeMesh::None`].
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            ShapeMesh::Plane => Some(ShapeKind::Plane),
            ShapeMesh::Box => Some(ShapeKind::Box),
            ShapeMesh::Cylinder(_) => Some(ShapeKind::Cylinder),
            ShapeMesh::Sphere => Some(ShapeKind::Sphere),
            ShapeMesh::HalfSphere => Some(ShapeKind::HalfSphere),
            ShapeMesh::Torus => Some(ShapeKind::Torus),
            ShapeMesh::HalfTorus => Some(ShapeKind::HalfTorus),
            ShapeMesh::TaperedCylinder(_) => Some(ShapeKind::TaperedCylinder),
            ShapeMesh::Cone { .. } => Some(ShapeKind::Cone),
            ShapeMesh::Pyramid3 => Some(ShapeKind::Pyramid3),
            ShapeMesh::Pyramid4 => Some(ShapeKind::Pyramid4),
            ShapeMesh::Prism => Some(ShapeKind::Prism),
            ShapeMesh::None => None,
        }
    }
}

/// External owner of primitive geometry.
///
/// `load` uploads the buffers for one kind; the scene calls it at most once
/// per kind. `draw` consumes whatever model matrix and shading uniforms are
/// currently set in the shader and issues the GPU draw.
pub trait MeshProvider {
    fn load(&mut self, kind: ShapeKind);
    fn draw(&mut self, shape: &ShapeMesh);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_variants_share_geometry() {
        assert_eq!(ShapeMesh::CYLINDER.kind(), Some(ShapeKind::Cylinder));
        assert_eq!(ShapeMesh::HOLLOW_CYLINDER.kind(), Some(ShapeKind::Cylinder));
        assert_eq!(
            ShapeMesh::Cylinder(CylinderCaps::BOTTOM).kind(),
            Some(ShapeKind::Cylinder)
        );
        assert_ne!(ShapeMesh::CYLINDER, ShapeMesh::HOLLOW_CYLINDER);
    }

    #[test]
    fn test_none_has_no_geometry() {
        assert_eq!(ShapeMesh::None.kind(), None);
    }

    #[test]
    fn test_all_kinds_unique() {
        let mut kinds = ShapeKind::ALL.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), ShapeKind::ALL.len());
    }
}
