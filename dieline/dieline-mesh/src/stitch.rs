//! Panel surface and hinge-bridge stitching.

// Vertex counts fit in u32; bridge subdivision counts fit in f64.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use std::collections::HashMap;

use dieline_atlas::AtlasRegion;
use dieline_skeleton::Skeleton;
use dieline_types::{
    Joint, JointOrientation, Panel, PanelId, PanelImage, PanelTree, Point2, Point3, Rect, Vector2,
    Vector3,
};
use tracing::{debug, warn};

use crate::mesh::{SkinnedMesh, SkinnedVertex, VertexRange};
use crate::outline;
use crate::params::MeshParams;

/// Stitch one skinned mesh from a panel tree, its atlas regions, and
/// its fold skeleton.
///
/// Panels are visited in tree pre-order. Each panel emits a flat
/// surface bound to its own bone, then a hinge bridge spanning the
/// joint to its parent, blended linearly between the two bones. Both
/// land in the panel's [`VertexRange`].
///
/// Stitching is total: a panel with no atlas region or no bone is
/// logged and skipped (yielding an empty range) without failing the
/// rest of the mesh.
#[must_use]
pub fn stitch_mesh(
    tree: &PanelTree,
    regions: &HashMap<PanelId, AtlasRegion>,
    skeleton: &Skeleton,
    params: &MeshParams,
) -> SkinnedMesh {
    let mut mesh = SkinnedMesh::default();

    for id in tree.pre_order() {
        let Some(panel) = tree.get(id) else {
            continue;
        };
        let start = mesh.vertices.len() as u32;
        let Some(bone) = skeleton.bone_index(panel.id) else {
            warn!(panel = %panel.id, "no bone for panel, skipping");
            mesh.ranges.insert(panel.id, VertexRange { start, count: 0 });
            continue;
        };

        if let Some(region) = regions.get(&panel.id) {
            emit_surface(&mut mesh, panel, region, bone as u32, params);
        } else {
            warn!(panel = %panel.id, "no atlas region for panel, skipping surface");
        }

        if let (Some(parent_id), Some(joint)) = (panel.parent, panel.joint.as_ref()) {
            emit_bridge_for(&mut mesh, tree, regions, skeleton, panel, parent_id, joint, bone as u32, params);
        }

        let count = mesh.vertices.len() as u32 - start;
        mesh.ranges.insert(panel.id, VertexRange { start, count });
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        panels = mesh.ranges.len(),
        "mesh stitched"
    );
    mesh
}

/// Layout plane to 3D: X carries over, layout Y (down) becomes world -Y.
#[inline]
fn to_world(p: Point2<f64>, scale: f64, z: f64) -> Point3<f64> {
    Point3::new(p.x * scale, -p.y * scale, z)
}

/// Emit a panel's flat surface, front face and (optionally) back face.
fn emit_surface(
    mesh: &mut SkinnedMesh,
    panel: &Panel,
    region: &AtlasRegion,
    bone: u32,
    params: &MeshParams,
) {
    let bounds = &panel.bounds;
    let half = params.thickness * 0.5;
    let (points, triangles) = surface_shape(panel, params);

    let uvs: Vec<[f64; 2]> = points
        .iter()
        .map(|p| {
            let fu = ((p.x - bounds.x) / bounds.width.max(f64::EPSILON)).clamp(0.0, 1.0);
            let fv = ((p.y - bounds.y) / bounds.height.max(f64::EPSILON)).clamp(0.0, 1.0);
            [
                region.u0 + fu * (region.u1 - region.u0),
                region.v0 + fv * (region.v1 - region.v0),
            ]
        })
        .collect();

    push_face(mesh, &points, &uvs, &triangles, half, Vector3::z(), bone, params.layout_scale);
    if params.double_sided {
        let reversed: Vec<[usize; 3]> = triangles.iter().map(|t| [t[0], t[2], t[1]]).collect();
        push_face(mesh, &points, &uvs, &reversed, -half, -Vector3::z(), bone, params.layout_scale);
    }
}

/// The surface footprint for one panel: its vector outline fitted to
/// its bounds when the artwork carries one, a rounded rectangle when a
/// corner radius is set, a plain quad otherwise.
fn surface_shape(panel: &Panel, params: &MeshParams) -> (Vec<Point2<f64>>, Vec<[usize; 3]>) {
    if let Some(PanelImage::Outline(outline)) = &panel.image {
        if outline.len() >= 3 {
            let points = fit_outline(outline, &panel.bounds);
            if let Some(triangles) = triangulate_layout(&points) {
                return (points, triangles);
            }
        }
        warn!(panel = %panel.id, "degenerate outline, using bounding quad");
    }
    if params.corner_radius > 0.0 {
        let points = outline::rounded_rect(&panel.bounds, params.corner_radius);
        if let Some(triangles) = triangulate_layout(&points) {
            return (points, triangles);
        }
    }
    let bounds = &panel.bounds;
    let quad = vec![
        Point2::new(bounds.x, bounds.y),
        Point2::new(bounds.right(), bounds.y),
        Point2::new(bounds.right(), bounds.bottom()),
        Point2::new(bounds.x, bounds.bottom()),
    ];
    (quad, vec![[0, 3, 2], [0, 2, 1]])
}

/// Triangulate layout-space points in world orientation, so the
/// triangles face +Z after the Y flip.
fn triangulate_layout(points: &[Point2<f64>]) -> Option<Vec<[usize; 3]>> {
    let flipped: Vec<Point2<f64>> = points.iter().map(|p| Point2::new(p.x, -p.y)).collect();
    let triangles = outline::triangulate(&flipped);
    (!triangles.is_empty()).then_some(triangles)
}

/// Scale an outline's own bounding box onto the panel's layout bounds.
///
/// Outline points arrive in arbitrary 2D units; the same normalization
/// places them in the atlas, so surface UVs line up with the drawn fill.
fn fit_outline(outline: &[Point2<f64>], bounds: &Rect) -> Vec<Point2<f64>> {
    let min_x = outline.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = outline.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = outline.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = outline.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);
    outline
        .iter()
        .map(|p| {
            Point2::new(
                bounds.x + (p.x - min_x) / span_x * bounds.width,
                bounds.y + (p.y - min_y) / span_y * bounds.height,
            )
        })
        .collect()
}

/// Push one planar face: vertices in `points` order, then triangles.
#[allow(clippy::too_many_arguments)]
fn push_face(
    mesh: &mut SkinnedMesh,
    points: &[Point2<f64>],
    uvs: &[[f64; 2]],
    triangles: &[[usize; 3]],
    z: f64,
    normal: Vector3<f64>,
    bone: u32,
    scale: f64,
) {
    let base = mesh.vertices.len() as u32;
    for (p, uv) in points.iter().zip(uvs) {
        mesh.vertices.push(SkinnedVertex {
            position: to_world(*p, scale, z),
            normal,
            uv: *uv,
            bones: [bone, bone],
            weights: [1.0, 0.0],
        });
    }
    for tri in triangles {
        mesh.indices
            .push([base + tri[0] as u32, base + tri[1] as u32, base + tri[2] as u32]);
    }
}

/// Resolve the parent side of a joint, then emit the bridge strip.
#[allow(clippy::too_many_arguments)]
fn emit_bridge_for(
    mesh: &mut SkinnedMesh,
    tree: &PanelTree,
    regions: &HashMap<PanelId, AtlasRegion>,
    skeleton: &Skeleton,
    panel: &Panel,
    parent_id: PanelId,
    joint: &Joint,
    child_bone: u32,
    params: &MeshParams,
) {
    let Some(parent) = tree.get(parent_id) else {
        warn!(panel = %panel.id, parent = %parent_id, "joint parent not in tree, skipping bridge");
        return;
    };
    let Some(parent_bone) = skeleton.bone_index(parent_id) else {
        warn!(panel = %panel.id, parent = %parent_id, "no bone for joint parent, skipping bridge");
        return;
    };
    let Some(parent_region) = regions.get(&parent_id) else {
        warn!(panel = %panel.id, parent = %parent_id, "no atlas region for joint parent, skipping bridge");
        return;
    };
    emit_bridge(
        mesh,
        panel,
        parent,
        joint,
        parent_region,
        [parent_bone as u32, child_bone],
        params,
    );
}

/// Emit the ruled strip spanning a hinge, blended between two bones.
///
/// Cross-sections run from the parent side (weight fully on the parent
/// bone) to the child side (weight fully on the child bone); texture
/// samples the parent's atlas edge nearest the hinge, so the strip
/// continues the parent artwork across the gap.
fn emit_bridge(
    mesh: &mut SkinnedMesh,
    panel: &Panel,
    parent: &Panel,
    joint: &Joint,
    parent_region: &AtlasRegion,
    bones: [u32; 2],
    params: &MeshParams,
) {
    let (axis, across) = match joint.orientation {
        JointOrientation::Horizontal => (Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)),
        JointOrientation::Vertical => (Vector2::new(0.0, 1.0), Vector2::new(1.0, 0.0)),
    };
    let a = joint.position;
    let b = a + axis * joint.length;

    // Which side of the hinge the child sits on, in layout space.
    let side = if (panel.center - a).dot(&across) >= 0.0 {
        1.0
    } else {
        -1.0
    };
    let width = panel
        .connector_width
        .unwrap_or_else(|| joint.effective_width());

    // Texture the strip from the parent edge facing the hinge.
    let uv_of = |p: Point2<f64>| -> [f64; 2] {
        match joint.orientation {
            JointOrientation::Horizontal => {
                let v = if side > 0.0 { parent_region.v1 } else { parent_region.v0 };
                let f = ((p.x - parent.bounds.x) / parent.bounds.width.max(f64::EPSILON))
                    .clamp(0.0, 1.0);
                [parent_region.u0 + f * (parent_region.u1 - parent_region.u0), v]
            }
            JointOrientation::Vertical => {
                let u = if side > 0.0 { parent_region.u1 } else { parent_region.u0 };
                let f = ((p.y - parent.bounds.y) / parent.bounds.height.max(f64::EPSILON))
                    .clamp(0.0, 1.0);
                [u, parent_region.v0 + f * (parent_region.v1 - parent_region.v0)]
            }
        }
    };

    // Winding of the (hinge, step) frame after the Y flip.
    let u_vec = Vector2::new(axis.x, -axis.y);
    let v_vec = Vector2::new(across.x, -across.y) * side;
    let flip = v_vec.x * u_vec.y - v_vec.y * u_vec.x < 0.0;

    let segments = params.joint_segments.max(1);
    let half = params.thickness * 0.5;
    emit_strip(mesh, a, b, across, side, width, segments, half, Vector3::z(), false, flip, bones, &uv_of, params);
    if params.double_sided {
        emit_strip(mesh, a, b, across, side, width, segments, -half, -Vector3::z(), true, flip, bones, &uv_of, params);
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_strip(
    mesh: &mut SkinnedMesh,
    a: Point2<f64>,
    b: Point2<f64>,
    across: Vector2<f64>,
    side: f64,
    width: f64,
    segments: usize,
    z: f64,
    normal: Vector3<f64>,
    reversed: bool,
    flip: bool,
    bones: [u32; 2],
    uv_of: &dyn Fn(Point2<f64>) -> [f64; 2],
    params: &MeshParams,
) {
    let base = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let offset = across * (side * width * (t - 0.5));
        for p in [a + offset, b + offset] {
            mesh.vertices.push(SkinnedVertex {
                position: to_world(p, params.layout_scale, z),
                normal,
                uv: uv_of(p),
                bones,
                weights: [1.0 - t, t],
            });
        }
    }
    for i in 0..segments as u32 {
        let (a0, b0) = (base + 2 * i, base + 2 * i + 1);
        let (a1, b1) = (a0 + 2, b0 + 2);
        let mut quad = [[a0, a1, b1], [a0, b1, b0]];
        if flip != reversed {
            for tri in &mut quad {
                tri.swap(1, 2);
            }
        }
        mesh.indices.extend_from_slice(&quad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dieline_skeleton::build_skeleton;
    use dieline_types::Rect;

    fn id(raw: u32) -> PanelId {
        PanelId::new(raw)
    }

    fn region(u0: f64, v0: f64, u1: f64, v1: f64) -> AtlasRegion {
        AtlasRegion {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            u0,
            v0,
            u1,
            v1,
        }
    }

    fn full_regions(tree: &PanelTree) -> HashMap<PanelId, AtlasRegion> {
        tree.panels()
            .map(|p| (p.id, region(0.0, 0.0, 0.5, 0.5)))
            .collect()
    }

    fn two_panel_tree() -> PanelTree {
        let mut tree = PanelTree::new(Panel::new(
            id(0),
            "base",
            Rect::new(0.0, 0.0, 100.0, 60.0),
        ));
        tree.attach(
            id(0),
            Panel::new(id(1), "flap", Rect::new(0.0, 62.0, 100.0, 30.0)),
            Joint::horizontal(Point2::new(0.0, 61.0), 100.0, 2.0),
        )
        .unwrap();
        tree
    }

    #[test]
    fn single_panel_is_a_two_sided_quad() {
        let tree = PanelTree::new(Panel::new(id(0), "base", Rect::new(0.0, 0.0, 10.0, 10.0)));
        let skeleton = build_skeleton(&tree, 1.0);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &MeshParams::default());
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 4);
        let range = mesh.range(id(0)).unwrap();
        assert_eq!(range.start, 0);
        assert_eq!(range.count, 8);
    }

    #[test]
    fn single_sided_halves_the_geometry() {
        let tree = two_panel_tree();
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default();
        let double = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);
        let single = stitch_mesh(
            &tree,
            &full_regions(&tree),
            &skeleton,
            &params.with_double_sided(false),
        );
        assert_eq!(double.vertex_count(), 2 * single.vertex_count());
        assert_eq!(double.triangle_count(), 2 * single.triangle_count());
    }

    #[test]
    fn surface_vertices_bind_fully_to_their_own_bone() {
        let tree = two_panel_tree();
        let skeleton = build_skeleton(&tree, 1.0);
        let mesh = stitch_mesh(
            &tree,
            &full_regions(&tree),
            &skeleton,
            &MeshParams::default().with_double_sided(false),
        );
        let flap_bone = skeleton.bone_index(id(1)).unwrap() as u32;
        let range = mesh.range(id(1)).unwrap();
        // First four vertices of the flap's range are its quad.
        for v in &mesh.vertices[range.start as usize..range.start as usize + 4] {
            assert_eq!(v.bones, [flap_bone, flap_bone]);
            assert_eq!(v.weights, [1.0, 0.0]);
        }
    }

    #[test]
    fn bridge_blends_between_parent_and_child_bones() {
        let tree = two_panel_tree();
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default().with_double_sided(false);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);

        let base_bone = skeleton.bone_index(id(0)).unwrap() as u32;
        let flap_bone = skeleton.bone_index(id(1)).unwrap() as u32;
        let range = mesh.range(id(1)).unwrap();
        // After the 4-vertex quad comes the bridge strip.
        let bridge = &mesh.vertices[range.start as usize + 4..(range.start + range.count) as usize];
        assert_eq!(bridge.len(), 2 * (params.joint_segments + 1));
        for v in bridge {
            assert_eq!(v.bones, [base_bone, flap_bone]);
            assert!((v.weights[0] + v.weights[1] - 1.0).abs() < 1e-12);
        }
        // Parent edge fully on the parent bone, child edge fully on the child.
        assert_eq!(bridge[0].weights, [1.0, 0.0]);
        assert_eq!(bridge[bridge.len() - 1].weights, [0.0, 1.0]);
    }

    #[test]
    fn bridge_spans_the_connector_width() {
        let tree = two_panel_tree();
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default().with_double_sided(false);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);

        let range = mesh.range(id(1)).unwrap();
        let bridge = &mesh.vertices[range.start as usize + 4..(range.start + range.count) as usize];
        // Horizontal hinge at layout y = 61, width 2: the strip runs
        // from y = 60 to y = 62, which is world y = -60 down to -62.
        let first = bridge[0].position;
        let last = bridge[bridge.len() - 1].position;
        assert!((first.y - -60.0).abs() < 1e-12);
        assert!((last.y - -62.0).abs() < 1e-12);
    }

    #[test]
    fn panel_connector_width_overrides_the_joint() {
        let mut tree = PanelTree::new(Panel::new(
            id(0),
            "base",
            Rect::new(0.0, 0.0, 100.0, 60.0),
        ));
        tree.attach(
            id(0),
            Panel::new(id(1), "flap", Rect::new(0.0, 62.0, 100.0, 30.0))
                .with_connector_width(6.0),
            Joint::horizontal(Point2::new(0.0, 61.0), 100.0, 2.0),
        )
        .unwrap();
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default().with_double_sided(false);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);

        let range = mesh.range(id(1)).unwrap();
        let bridge = &mesh.vertices[range.start as usize + 4..(range.start + range.count) as usize];
        let span = bridge[0].position.y - bridge[bridge.len() - 1].position.y;
        assert!((span - 6.0).abs() < 1e-12);
    }

    #[test]
    fn missing_region_skips_surface_but_keeps_bridge() {
        let tree = two_panel_tree();
        let skeleton = build_skeleton(&tree, 1.0);
        let mut regions = full_regions(&tree);
        regions.remove(&id(1));
        let params = MeshParams::default().with_double_sided(false);
        let mesh = stitch_mesh(&tree, &regions, &skeleton, &params);

        let range = mesh.range(id(1)).unwrap();
        // No quad, only the bridge strip.
        assert_eq!(range.count as usize, 2 * (params.joint_segments + 1));
    }

    #[test]
    fn missing_bone_yields_an_empty_range() {
        let tree = two_panel_tree();
        // Skeleton built from a different tree knows nothing about panel 1.
        let lone = PanelTree::new(Panel::new(id(0), "base", Rect::new(0.0, 0.0, 100.0, 60.0)));
        let skeleton = build_skeleton(&lone, 1.0);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &MeshParams::default());
        assert_eq!(mesh.range(id(1)).unwrap().count, 0);
    }

    #[test]
    fn outline_panel_surface_follows_its_path() {
        let tree = PanelTree::new(
            Panel::new(id(0), "wedge", Rect::new(0.0, 0.0, 40.0, 20.0)).with_image(
                PanelImage::Outline(vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(2.0, 0.0),
                    Point2::new(1.0, 2.0),
                ]),
            ),
        );
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default().with_double_sided(false);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);

        // A triangle, not the bounding quad.
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        // Outline fitted onto the panel bounds: apex at the bottom
        // center of the panel, world y flipped.
        let apex = &mesh.vertices[2];
        assert!((apex.position.x - 20.0).abs() < 1e-12);
        assert!((apex.position.y - -20.0).abs() < 1e-12);
        // UVs from the same normalization, inside the panel region.
        assert!((apex.uv[0] - 0.25).abs() < 1e-12);
        assert!((apex.uv[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn outline_panel_keeps_its_winding_front_facing() {
        // Whichever way the host wound the path, front faces come out
        // counter-clockwise.
        let tree = PanelTree::new(
            Panel::new(id(0), "wedge", Rect::new(0.0, 0.0, 40.0, 20.0)).with_image(
                PanelImage::Outline(vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(1.0, 2.0),
                    Point2::new(2.0, 0.0),
                ]),
            ),
        );
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default().with_double_sided(false);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize].position);
            assert!((b - a).cross(&(c - a)).z > 0.0);
        }
    }

    #[test]
    fn degenerate_outline_falls_back_to_bounding_quad() {
        let tree = PanelTree::new(
            Panel::new(id(0), "dot", Rect::new(0.0, 0.0, 40.0, 20.0)).with_image(
                PanelImage::Outline(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]),
            ),
        );
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default().with_double_sided(false);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn corner_radius_emits_more_than_a_quad() {
        let tree = PanelTree::new(Panel::new(id(0), "base", Rect::new(0.0, 0.0, 40.0, 20.0)));
        let skeleton = build_skeleton(&tree, 1.0);
        let params = MeshParams::default()
            .with_double_sided(false)
            .with_corner_radius(3.0);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);
        assert!(mesh.vertex_count() > 4);
        assert!(mesh.triangle_count() > 2);
    }

    #[test]
    fn uvs_stay_inside_the_panel_region() {
        let tree = two_panel_tree();
        let skeleton = build_skeleton(&tree, 1.0);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &MeshParams::default());
        for v in &mesh.vertices {
            assert!((0.0..=0.5).contains(&v.uv[0]));
            assert!((0.0..=0.5).contains(&v.uv[1]));
        }
    }

    #[test]
    fn layout_scale_and_thickness_place_vertices() {
        let tree = PanelTree::new(Panel::new(id(0), "base", Rect::new(0.0, 0.0, 10.0, 10.0)));
        let skeleton = build_skeleton(&tree, 0.5);
        let params = MeshParams::default()
            .with_layout_scale(0.5)
            .with_thickness(1.0)
            .with_double_sided(false);
        let mesh = stitch_mesh(&tree, &full_regions(&tree), &skeleton, &params);
        // Bottom-right corner of the quad.
        let v = &mesh.vertices[2];
        assert!((v.position.x - 5.0).abs() < 1e-12);
        assert!((v.position.y - -5.0).abs() < 1e-12);
        assert!((v.position.z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn front_triangles_face_forward() {
        let tree = two_panel_tree();
        let skeleton = build_skeleton(&tree, 1.0);
        let mesh = stitch_mesh(
            &tree,
            &full_regions(&tree),
            &skeleton,
            &MeshParams::default().with_double_sided(false),
        );
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize].position);
            let n = (b - a).cross(&(c - a));
            assert!(n.z > 0.0, "triangle {tri:?} faces backwards");
        }
    }
}
