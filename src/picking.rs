//! Pointer picking: viewport → ray → nearest placed object → tooltip.
//!
//! Everything here is plain math over glam types so hover resolution can be
//! tested without a window or a GPU. The bevy handler lives in `input`.

use bevy::math::Ray3d;
use bevy::prelude::*;

use crate::neo::NeoMetadata;
use crate::types::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, TOOLTIP_OFFSET_PX};

/// Convert a cursor position (pixels, origin top-left) to normalized device
/// coordinates in [-1, 1], y up.
///
/// Returns `None` for an empty viewport.
pub fn cursor_to_ndc(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        -(cursor.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Perspective camera snapshot used for casting and projecting.
#[derive(Clone, Copy, Debug)]
pub struct PointerCamera {
    world_from_view: Mat4,
    clip_from_view: Mat4,
    viewport: Vec2,
}

impl PointerCamera {
    /// Camera with the scene's projection at the given transform.
    pub fn new(camera: &Transform, viewport: Vec2) -> Self {
        let world_from_view =
            Mat4::from_scale_rotation_translation(camera.scale, camera.rotation, camera.translation);
        Self::with_projection(
            world_from_view,
            CAMERA_FOV_DEGREES.to_radians(),
            viewport,
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn with_projection(
        world_from_view: Mat4,
        fov_y: f32,
        viewport: Vec2,
        near: f32,
        far: f32,
    ) -> Self {
        let aspect = if viewport.y > 0.0 {
            viewport.x / viewport.y
        } else {
            1.0
        };
        Self {
            world_from_view,
            clip_from_view: Mat4::perspective_rh(fov_y, aspect, near, far),
            viewport,
        }
    }

    /// Ray from the near plane through the given NDC point.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray3d> {
        let world_from_clip = self.world_from_view * self.clip_from_view.inverse();
        let near = world_from_clip.project_point3(ndc.extend(0.0));
        let far = world_from_clip.project_point3(ndc.extend(1.0));
        if !near.is_finite() || !far.is_finite() {
            return None;
        }
        let direction = Dir3::new(far - near).ok()?;
        Some(Ray3d::new(near, direction))
    }

    /// Ray through a cursor position in pixels.
    pub fn ray_from_cursor(&self, cursor: Vec2) -> Option<Ray3d> {
        self.ray_from_ndc(cursor_to_ndc(cursor, self.viewport)?)
    }

    /// NDC of a world point; `None` when the point is behind the camera.
    pub fn project_to_ndc(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.clip_from_view * self.world_from_view.inverse() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// Pixel position of an NDC point, origin top-left.
    pub fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        let half = self.viewport * 0.5;
        Vec2::new(ndc.x * half.x + half.x, -ndc.y * half.y + half.y)
    }

    /// Where a tooltip for an object at `world` is anchored: the projected
    /// point lifted by a fixed offset so the label does not cover the object.
    pub fn tooltip_anchor(&self, world: Vec3) -> Option<Vec2> {
        let ndc = self.project_to_ndc(world)?;
        Some(self.ndc_to_screen(ndc.truncate()) - Vec2::new(0.0, TOOLTIP_OFFSET_PX))
    }
}

/// Distance along `ray` to its first intersection with a sphere.
///
/// A ray starting inside the sphere hits the far side.
pub fn ray_sphere_distance(ray: Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let dir = *ray.direction;
    let oc = ray.origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let near = -b - root;
    let t = if near >= 0.0 { near } else { -b + root };
    (t >= 0.0).then_some(t)
}

/// A hit-testable sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickCandidate {
    pub entity: Entity,
    pub center: Vec3,
    pub radius: f32,
}

/// Result of a successful pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub center: Vec3,
    pub distance: f32,
}

/// Nearest candidate along the ray (first hit). Linear scan; an empty
/// candidate set yields `None`. Equal distances keep the earlier candidate.
pub fn pick_nearest(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = PickCandidate>,
) -> Option<PickHit> {
    candidates
        .into_iter()
        .filter_map(|c| {
            ray_sphere_distance(ray, c.center, c.radius).map(|distance| PickHit {
                entity: c.entity,
                center: c.center,
                distance,
            })
        })
        .fold(None, |best: Option<PickHit>, hit| match best {
            Some(b) if b.distance <= hit.distance => Some(b),
            _ => Some(hit),
        })
}

/// Display-ready tooltip fields.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipFields {
    pub name: String,
    pub size_meters_min: String,
    pub size_meters_max: String,
    pub size_miles_min: String,
    pub size_miles_max: String,
    /// Kilometers to two decimals, or `N/A`.
    pub miss_distance_km: String,
    pub is_hazardous: bool,
}

/// What the tooltip shows for the hovered object.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipContent {
    Details(TooltipFields),
    /// The object has no metadata in the registry.
    Unavailable,
}

impl TooltipContent {
    pub fn from_metadata(metadata: Option<&NeoMetadata>) -> Self {
        let Some(meta) = metadata else {
            return Self::Unavailable;
        };
        Self::Details(TooltipFields {
            name: meta.name.clone(),
            size_meters_min: format!("{:.2}", meta.diameter_meters.estimated_diameter_min),
            size_meters_max: format!("{:.2}", meta.diameter_meters.estimated_diameter_max),
            size_miles_min: format!("{:.2}", meta.diameter_miles.estimated_diameter_min),
            size_miles_max: format!("{:.2}", meta.diameter_miles.estimated_diameter_max),
            miss_distance_km: meta
                .miss_distance_km
                .map_or_else(|| "N/A".to_string(), |km| format!("{km:.2}")),
            is_hazardous: meta.is_hazardous,
        })
    }
}

/// The hovered object and everything the tooltip needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    pub entity: Entity,
    /// Tooltip anchor in window pixels.
    pub anchor: Vec2,
    pub content: TooltipContent,
}

/// Current hover target, replaced wholesale each time it is resolved.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct HoverState(Option<Hover>);

impl HoverState {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.0.as_ref()
    }

    pub fn entity(&self) -> Option<Entity> {
        self.0.as_ref().map(|h| h.entity)
    }

    pub fn is_hovering(&self) -> bool {
        self.0.is_some()
    }

    /// Resolve the hover state for a cursor position.
    ///
    /// `lookup` maps a picked entity to its metadata; a miss clears the state.
    pub fn resolve<'a>(
        camera: &PointerCamera,
        cursor: Vec2,
        candidates: impl IntoIterator<Item = PickCandidate>,
        lookup: impl FnOnce(Entity) -> Option<&'a NeoMetadata>,
    ) -> Self {
        let Some(ray) = camera.ray_from_cursor(cursor) else {
            return Self::none();
        };
        let Some(hit) = pick_nearest(ray, candidates) else {
            return Self::none();
        };
        let anchor = camera
            .tooltip_anchor(hit.center)
            .unwrap_or(cursor - Vec2::new(0.0, TOOLTIP_OFFSET_PX));
        Self(Some(Hover {
            entity: hit.entity,
            anchor,
            content: TooltipContent::from_metadata(lookup(hit.entity)),
        }))
    }
}
