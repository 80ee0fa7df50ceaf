//! The kitchen still life
//!
//! Composite objects are pure functions of their anchor. Every part carries
//! its full shading attributes, including UV scale, so the draw order of
//! parts never changes how any part looks.

use cgmath::Vector3;

use super::composite::CompositeObject;
use crate::gfx::geometry::{CylinderCaps, ShapeMesh};
use crate::gfx::shading::{Primitive, ShadingAttributes, Transform, TransformComposer};

/// Something the scene draws each frame
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    Primitive(Primitive),
    Composite(CompositeObject),
}

impl SceneItem {
    pub fn name(&self) -> &'static str {
        match self {
            SceneItem::Primitive(part) => part.label,
            SceneItem::Composite(object) => object.name,
        }
    }

    /// Number of primitive draws this item issues
    pub fn part_count(&self) -> usize {
        match self {
            SceneItem::Primitive(_) => 1,
            SceneItem::Composite(object) => object.len(),
        }
    }

    pub fn draw(&self, composer: &mut TransformComposer<'_>) {
        match self {
            SceneItem::Primitive(part) => composer.draw_part(part),
            SceneItem::Composite(object) => object.draw(composer),
        }
    }
}

/// Image file and tag of every texture the scene uses
pub const KITCHEN_TEXTURES: [(&str, &str); 10] = [
    ("tile.jpg", "backdrop"),
    ("counter.jpg", "counter"),
    ("knife_handle.jpg", "wood"),
    ("metal.jpg", "metal"),
    ("marble.jpg", "marble"),
    ("drywall.jpg", "plastic"),
    ("cucumber_outer.jpeg", "cucumber_outer"),
    ("cucumber_inner.jpg", "cucumber_inner"),
    ("glass10.png", "glass10"),
    ("glass13.png", "glass13"),
];

/// Glass jar with a two-tier lid
pub fn jar(anchor: Vector3<f32>) -> CompositeObject {
    let glass = |texture: &str, u: f32, v: f32| {
        ShadingAttributes::new([0.7, 0.7, 0.9, 0.8])
            .with_texture(texture)
            .with_uv_scale(u, v)
            .with_material("glass")
    };
    let body = |u, v| glass("glass13", u, v);
    let lid = |u, v| glass("glass10", u, v);

    CompositeObject::new("jar", anchor)
        .with_part(Primitive::new(
            "jar base bottom",
            ShapeMesh::Sphere,
            Transform::new([2.0, 0.3, 2.0], [0.0, 0.0, 0.0], [0.0, 0.15, 0.0]),
            body(1.0, 0.35),
        ))
        .with_part(Primitive::new(
            "jar base",
            ShapeMesh::CYLINDER,
            Transform::new([2.0, 4.05, 2.0], [0.0, 0.0, 0.0], [0.0, 0.15, 0.0]),
            body(1.0, 0.35),
        ))
        .with_part(Primitive::new(
            "jar shoulder",
            ShapeMesh::Sphere,
            Transform::new([2.02, 0.7, 2.02], [0.0, -10.0, 0.0], [0.0, 4.2, 0.0]),
            body(1.0, 0.25),
        ))
        .with_part(Primitive::new(
            "jar neck",
            ShapeMesh::CYLINDER,
            Transform::new([1.6, 0.8, 1.6], [0.0, 8.0, 0.0], [0.0, 4.4, 0.0]),
            body(0.8, 0.1),
        ))
        .with_part(Primitive::new(
            "jar neck ring",
            ShapeMesh::Torus,
            Transform::new([1.48, 1.48, 0.65], [90.0, 0.0, 0.0], [0.0, 5.1, 0.0]),
            body(1.5, 0.3),
        ))
        .with_part(Primitive::new(
            "lid ring",
            ShapeMesh::Torus,
            Transform::new([1.5, 1.5, 0.5], [90.0, 0.0, 0.0], [0.0, 5.25, 0.0]),
            lid(2.0, 1.0),
        ))
        .with_part(Primitive::new(
            "lid dome",
            ShapeMesh::Sphere,
            Transform::new([1.6, 0.16, 1.6], [0.0, 0.0, 0.0], [0.0, 5.25, 0.0]),
            lid(2.0, 1.0),
        ))
        .with_part(Primitive::new(
            "lid plug",
            ShapeMesh::CYLINDER,
            Transform::new([0.9, 0.5, 0.9], [0.0, 0.0, 0.0], [0.0, 5.2, 0.0]),
            lid(2.0, 1.0),
        ))
        .with_part(Primitive::new(
            "lid knob ring",
            ShapeMesh::Torus,
            Transform::new([1.1, 1.1, 0.5], [90.0, 0.0, 0.0], [0.0, 5.7, 0.0]),
            lid(1.5, 1.0),
        ))
        .with_part(Primitive::new(
            "lid knob",
            ShapeMesh::Sphere,
            Transform::new([1.1, 0.2, 1.1], [0.0, 0.0, 0.0], [0.0, 5.65, 0.0]),
            lid(1.5, 1.0),
        ))
}

/// Plastic tumbler with a metal rim and straw
pub fn cup(anchor: Vector3<f32>) -> CompositeObject {
    const RED: [f32; 4] = [0.6, 0.1, 0.1, 1.0];
    let metal = |u, v| {
        ShadingAttributes::new(RED)
            .with_texture("metal")
            .with_uv_scale(u, v)
            .with_material("metal")
    };

    CompositeObject::new("cup", anchor)
        .with_part(Primitive::new(
            "cup body",
            ShapeMesh::TAPERED_CYLINDER,
            // upside down so the wide end is on top
            Transform::new([1.5, 6.49, 1.5], [0.0, 0.0, 180.0], [0.0, 4.5, 0.0]),
            ShadingAttributes::new(RED)
                .with_uv_scale(3.0, 0.8)
                .with_material("plastic"),
        ))
        .with_part(Primitive::new(
            "cup rim",
            ShapeMesh::HOLLOW_CYLINDER,
            Transform::new([1.5, 1.0, 1.5], [0.0, 0.0, 0.0], [0.0, 4.5, 0.0]),
            metal(3.0, 0.8),
        ))
        .with_part(Primitive::new(
            "straw",
            ShapeMesh::HOLLOW_CYLINDER,
            Transform::new([0.2, 7.5, 0.2], [14.6, 0.0, 10.5], [0.35, 0.0, -0.35]),
            metal(1.0, 5.0),
        ))
}

/// Half a cucumber lying on its side plus five loose slices
///
/// Each piece is an open outer-skin tube with its cut faces drawn again as
/// discs using the flesh texture.
pub fn cucumber(anchor: Vector3<f32>) -> CompositeObject {
    let shading = |texture: &str| {
        ShadingAttributes::new([0.2, 0.5, 0.2, 1.0])
            .with_texture(texture)
            .with_material("organic")
    };
    let skin = || shading("cucumber_outer");
    let flesh = || shading("cucumber_inner");

    let half = Transform::new([0.7, 2.8, 0.7], [0.0, -25.0, 90.0], [0.0, 0.7, 0.0]);
    let mut object = CompositeObject::new("cucumber", anchor)
        .with_part(Primitive::new("cucumber half", ShapeMesh::HOLLOW_CYLINDER, half, skin()))
        .with_part(Primitive::new(
            "cucumber half cut face",
            ShapeMesh::Cylinder(CylinderCaps::BOTTOM),
            half,
            flesh(),
        ))
        .with_part(Primitive::new(
            "cucumber end",
            ShapeMesh::Sphere,
            Transform::new([1.0, 0.7, 0.7], [0.0, -25.0, 0.0], [-2.538, 0.7, -1.183]),
            skin(),
        ));

    // scale, rotation, offset; hand placed to look scattered
    let slices = [
        ([0.7, 0.15, 0.7], [0.0, 0.0, 0.0], [0.9, 0.0, 0.2]),
        ([0.7, 0.15, 0.7], [-3.5, 0.0, 0.0], [1.35, 0.02, 2.0]),
        ([0.75, 0.17, 0.7], [0.0, -5.0, 0.0], [1.3, 0.15, 0.9]),
        ([0.7, 0.13, 0.65], [0.0, -1.0, -1.5], [1.2, 0.3, 0.7]),
        ([0.7, 0.2, 0.65], [0.0, -1.0, -3.0], [0.7, 0.45, 0.4]),
    ];
    for (scale, rotation, offset) in slices {
        let transform = Transform::new(scale, rotation, offset);
        object.push(Primitive::new(
            "cucumber slice",
            ShapeMesh::HOLLOW_CYLINDER,
            transform,
            skin(),
        ));
        object.push(Primitive::new(
            "cucumber slice faces",
            ShapeMesh::Cylinder(CylinderCaps::ENDS),
            transform,
            flesh(),
        ));
    }

    object
}

/// Chef's knife with a wooden handle, lying flat
pub fn knife(anchor: Vector3<f32>) -> CompositeObject {
    const COLOR: [f32; 4] = [0.3, 0.3, 0.2, 1.0];
    let steel = || {
        ShadingAttributes::new(COLOR)
            .with_texture("metal")
            .with_material("metal")
    };

    CompositeObject::new("knife", anchor)
        .with_part(Primitive::new(
            "knife handle",
            ShapeMesh::TAPERED_CYLINDER,
            Transform::new([0.45, 2.9, 0.35], [90.0, 178.0, 80.0], [-3.0, 0.35, 0.0]),
            ShadingAttributes::new(COLOR)
                .with_texture("wood")
                .with_material("wood"),
        ))
        .with_part(Primitive::new(
            "knife handle cap",
            ShapeMesh::CYLINDER,
            Transform::new([0.451, 0.1, 0.351], [90.0, 178.0, 80.0], [-3.01, 0.35, 0.0]),
            steel(),
        ))
        .with_part(Primitive::new(
            "knife bolster",
            ShapeMesh::CYLINDER,
            Transform::new([0.27, 0.35, 0.2], [90.0, 178.0, 80.0], [-0.4, 0.27, 0.45]),
            steel(),
        ))
        .with_part(Primitive::new(
            "knife blade",
            ShapeMesh::CYLINDER,
            // flattened on Z into a blade cross-section
            Transform::new([0.65, 4.5, 0.02], [88.0, 178.0, 80.0], [-0.05, 0.27, 0.1]),
            steel(),
        ))
        .with_part(Primitive::new(
            "knife tip",
            ShapeMesh::Pyramid4,
            Transform::new([1.43, 1.25, 0.02], [88.0, 178.0, 105.0], [4.65, 0.125, 0.675]),
            steel().with_uv_scale(0.3, 0.3),
        ))
}

fn standalone(
    label: &'static str,
    shape: ShapeMesh,
    transform: Transform,
    shading: ShadingAttributes,
) -> SceneItem {
    SceneItem::Primitive(Primitive::new(label, shape, transform, shading))
}

/// Every item of the still life, in draw order
///
/// The jar is translucent and drawn after the surfaces behind it, which is
/// correct from the default viewpoint but not from every angle.
pub fn kitchen_layout() -> Vec<SceneItem> {
    const GREY: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
    const LIGHT_GREY: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

    vec![
        standalone(
            "backdrop",
            ShapeMesh::Plane,
            Transform::new([22.5, 1.0, 3.5], [90.0, 0.0, 0.0], [0.0, 3.5, -10.0]),
            ShadingAttributes::from_tags(GREY, "backdrop", [3.0, 0.7], "stone"),
        ),
        standalone(
            "ledge",
            ShapeMesh::Box,
            Transform::new([45.0, 1.0, 3.5], [0.0, 0.0, 0.0], [0.0, 7.0, -9.5]),
            ShadingAttributes::from_tags(GREY, "wood", [6.0, 0.4], "wood"),
        ),
        standalone(
            "countertop",
            ShapeMesh::Box,
            Transform::new([45.0, 2.0, 13.0], [0.0, 0.0, 0.0], [0.0, -1.0, -3.5]),
            ShadingAttributes::from_tags(GREY, "counter", [4.0, 2.0], "stone"),
        ),
        SceneItem::Composite(jar(Vector3::new(6.0, 0.0, -6.2))),
        SceneItem::Composite(cup(Vector3::new(-3.0, 0.0, -4.2))),
        standalone(
            "coaster",
            ShapeMesh::CYLINDER,
            Transform::new([1.6, 0.3, 1.6], [0.0, 0.0, 0.0], [-3.0, 0.0, -4.0]),
            ShadingAttributes::from_tags(LIGHT_GREY, "marble", [2.0, 0.5], "stone"),
        ),
        standalone(
            "cutting board",
            ShapeMesh::Box,
            Transform::new([8.0, 0.3, 5.5], [0.0, -20.0, 0.0], [3.0, 0.15, -1.5]),
            ShadingAttributes::from_tags(LIGHT_GREY, "plastic", [4.0, 2.0], "plastic"),
        ),
        SceneItem::Composite(cucumber(Vector3::new(3.8, 0.3, -3.0))),
        SceneItem::Composite(knife(Vector3::new(0.6, 0.25, -0.7))),
    ]
}
