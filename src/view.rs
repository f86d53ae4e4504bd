// Projection between drawing space (Y up) and view space (pixels, Y down).

use kurbo::{Affine, Point, Vec2};

use crate::config::EditorConfig;
use crate::geometry::Bound;

/// Builds the projection that fits `bound` into a `view_width` x `view_height`
/// view, leaving `margin` pixels on every side.
///
/// The scale is uniform, Y is flipped, and the bound's midpoint lands on the
/// view's midpoint. A zero-width or zero-height bound would need an infinite
/// scale on that axis; the scale is capped at `max_scale` instead.
pub fn compute_zoom_extents(
    view_width: f64,
    view_height: f64,
    margin: f64,
    bound: &Bound,
    max_scale: f64,
) -> Affine {
    let avail_w = (view_width - 2.0 * margin).max(1.0);
    let avail_h = (view_height - 2.0 * margin).max(1.0);
    let scale_x = if bound.width() > 0.0 { avail_w / bound.width() } else { max_scale };
    let scale_y = if bound.height() > 0.0 { avail_h / bound.height() } else { max_scale };
    let mut scale = scale_x.min(scale_y);
    if scale > max_scale {
        log::debug!("Zoom scale {scale} clamped to {max_scale}");
        scale = max_scale;
    }

    let scaling = Affine::scale_non_uniform(scale, -scale);
    let projected_mid = scaling * bound.mid();
    let view_mid = Point::new(view_width / 2.0, view_height / 2.0);
    Affine::translate(view_mid - projected_mid) * scaling
}

/// Current projection of the canvas and its cached inverse
#[derive(Debug, Clone)]
pub struct ViewTransform {
    proj: Affine,
    inv_proj: Affine,
    view_width: f64,
    view_height: f64,
    margin: f64,
    max_scale: f64,
    wheel_zoom_factor: f64,
}

impl ViewTransform {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            proj: Affine::IDENTITY,
            inv_proj: Affine::IDENTITY,
            view_width: 0.0,
            view_height: 0.0,
            margin: config.view_margin,
            max_scale: config.max_zoom_scale,
            wheel_zoom_factor: config.wheel_zoom_factor,
        }
    }

    pub fn projection(&self) -> Affine {
        self.proj
    }

    pub fn inverse(&self) -> Affine {
        self.inv_proj
    }

    pub fn view_size(&self) -> (f64, f64) {
        (self.view_width, self.view_height)
    }

    /// Records the canvas size. Returns true if it changed.
    pub fn set_view_size(&mut self, width: f64, height: f64) -> bool {
        if self.view_width == width && self.view_height == height {
            return false;
        }
        self.view_width = width;
        self.view_height = height;
        true
    }

    pub fn to_view(&self, pt: Point) -> Point {
        self.proj * pt
    }

    pub fn to_drawing(&self, pt: Point) -> Point {
        self.inv_proj * pt
    }

    /// Fits `bound` into the view. An empty bound leaves the view untouched.
    pub fn zoom_to_fit(&mut self, bound: &Bound) {
        if bound.is_empty() {
            log::debug!("Zoom to fit skipped: nothing to fit");
            return;
        }
        let proj = compute_zoom_extents(
            self.view_width,
            self.view_height,
            self.margin,
            bound,
            self.max_scale,
        );
        self.set_projection(proj);
    }

    /// Shifts the view by `delta` pixels
    pub fn pan(&mut self, delta: Vec2) {
        self.set_projection(Affine::translate(delta) * self.proj);
    }

    /// Zooms one wheel notch about the pointer.
    ///
    /// The visible area (the margin-inset view corners mapped back into the
    /// drawing) is inflated about the pointer's drawing position, then fitted
    /// again. A positive delta zooms in.
    pub fn wheel_zoom(&mut self, view_pos: Point, delta: f64) {
        let factor = if delta > 0.0 {
            1.0 / self.wheel_zoom_factor
        } else {
            self.wheel_zoom_factor
        };
        let anchor = self.to_drawing(view_pos);
        let visible = self.visible_bound().inflated(anchor, factor);
        self.zoom_to_fit(&visible);
    }

    /// Drawing-space area inside the view margins
    pub fn visible_bound(&self) -> Bound {
        let corner_a = self.to_drawing(Point::new(self.margin, self.margin));
        let corner_b = self.to_drawing(Point::new(
            self.view_width - self.margin,
            self.view_height - self.margin,
        ));
        Bound::from_corners(corner_a, corner_b)
    }

    fn set_projection(&mut self, proj: Affine) {
        if proj.determinant() == 0.0 {
            log::warn!("Ignoring singular projection {proj:?}");
            return;
        }
        self.proj = proj;
        self.inv_proj = proj.inverse();
    }
}

/// Middle-button drag that pans the view
#[derive(Debug, Default, Clone)]
pub struct PanGesture {
    prev: Option<Point>,
}

impl PanGesture {
    pub fn is_panning(&self) -> bool {
        self.prev.is_some()
    }

    pub fn start(&mut self, pos: Point) {
        self.prev = Some(pos);
    }

    /// Delta since the last position, if a pan is in progress
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let prev = self.prev?;
        self.prev = Some(pos);
        Some(pos - prev)
    }

    /// Finishes the pan, yielding the final delta
    pub fn end(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.update(pos);
        self.prev = None;
        delta
    }

    pub fn cancel(&mut self) {
        self.prev = None;
    }
}
