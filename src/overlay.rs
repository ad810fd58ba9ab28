//! Skeleton overlay rendering.
//!
//! Draws a detected hand's skeleton onto anything implementing
//! [`DrawTarget`], using the joint-adjacency table from
//! [`mesh`][crate::hand::mesh]. A [`Viewport`] maps normalized landmark
//! coordinates into pixel coordinates, including the horizontal flip the
//! display applies to the camera feed.

use embedded_graphics::{
    draw_target::DrawTarget,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
};
use nalgebra::Point2;

use crate::hand::{landmark::Landmarks, mesh};

/// Maps normalized landmark coordinates to pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u32,
    height: u32,
    mirror: bool,
}

impl Viewport {
    /// Creates a viewport covering a `width` × `height` pixel image.
    ///
    /// The viewport starts out mirrored, matching a webcam feed that is
    /// flipped horizontally for display.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mirror: true,
        }
    }

    /// Sets whether X coordinates are flipped.
    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Maps a normalized landmark position into pixel space.
    pub fn to_pixels(&self, position: [f32; 2]) -> Point2<f32> {
        let x = if self.mirror {
            1.0 - position[0]
        } else {
            position[0]
        };
        Point2::new(x * self.width as f32, position[1] * self.height as f32)
    }
}

/// Visual parameters of the skeleton overlay.
#[derive(Debug, Clone, Copy)]
pub struct OverlayStyle<C> {
    bone_color: C,
    joint_color: C,
    stroke_width: u32,
    joint_diameter: u32,
}

impl<C: PixelColor> OverlayStyle<C> {
    pub fn new(bone_color: C, joint_color: C) -> Self {
        Self {
            bone_color,
            joint_color,
            stroke_width: 2,
            joint_diameter: 9,
        }
    }

    /// Sets the bone stroke width.
    ///
    /// By default, a stroke width of 2 is used.
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Sets the diameter of the circles marking each joint.
    ///
    /// The default diameter is 9.
    pub fn joint_diameter(mut self, diameter: u32) -> Self {
        self.joint_diameter = diameter;
        self
    }
}

fn pixel(point: Point2<f32>) -> Point {
    Point::new(point.x.round() as i32, point.y.round() as i32)
}

/// Draws one hand's skeleton onto `target`.
///
/// Bones are drawn first, part by part, then a filled circle per joint on
/// top, so joints stay visible where bones meet.
pub fn draw_hand<D>(
    target: &mut D,
    landmarks: &Landmarks,
    viewport: &Viewport,
    style: &OverlayStyle<D::Color>,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let bones = PrimitiveStyle::with_stroke(style.bone_color, style.stroke_width);
    for (start, end) in mesh::segments(landmarks) {
        Line::new(
            pixel(viewport.to_pixels(start)),
            pixel(viewport.to_pixels(end)),
        )
        .into_styled(bones)
        .draw(target)?;
    }

    let joints = PrimitiveStyle::with_fill(style.joint_color);
    for &position in landmarks.positions() {
        Circle::with_center(pixel(viewport.to_pixels(position)), style.joint_diameter)
            .into_styled(joints)
            .draw(target)?;
    }

    Ok(())
}
