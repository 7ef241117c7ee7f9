//! Zooming and panning the model's viewport in response to input.

use log::debug;

use crate::{model::FractalModel, point::Point};

/// An input event, with positions given as proportions of the pixel grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    /// Centre the view on the tapped point.
    Tap { x: f64, y: f64 },
    /// `dy > 0` zooms in towards the pointer, anything else zooms out.
    Scroll { x: f64, y: f64, dy: f64 },
    ZoomIn,
    ZoomOut,
    /// Centre the view on a world-space point.
    Pan(Point<f64>),
    /// Return to the viewport the model started with.
    Reset,
}

impl FractalModel {
    /// Resize both axes by `factor`, keeping the centre and the aspect ratio.
    fn rescale(&mut self, factor: f64) {
        if factor != 1.0 {
            let size = self.viewport.size() * factor;
            self.viewport = self.viewport.resized_around_centre(size);
        }
    }

    /// Magnify by `zoom_scale`, keeping the centre. Stops once the shorter axis reaches `min_extent`.
    pub fn zoom_in(&mut self) {
        let size = self.viewport.size();
        let shortest = size.x.abs().min(size.y.abs());
        if !(shortest > self.params.min_extent) {
            return;
        }
        let factor = (1.0 / self.params.zoom_scale).max(self.params.min_extent / shortest);
        self.rescale(factor);
    }

    /// Shrink by `zoom_scale`, keeping the centre. Stops once the longer axis reaches `max_extent`.
    pub fn zoom_out(&mut self) {
        let size = self.viewport.size();
        let longest = size.x.abs().max(size.y.abs());
        if !(longest < self.params.max_extent) {
            return;
        }
        let factor = if longest > 0.0 {
            self.params.zoom_scale.min(self.params.max_extent / longest)
        } else {
            self.params.zoom_scale
        };
        self.rescale(factor);
    }

    pub fn pan(&mut self, centre: Point<f64>) {
        self.viewport = self.viewport.recentred(centre);
    }

    pub fn on_tap(&mut self, x_proportion: f64, y_proportion: f64) {
        debug!("tapped: x {} y {}", x_proportion, y_proportion);
        let centre = self.to_world(x_proportion, y_proportion);
        self.pan(centre);
    }

    /// Zooming in follows the pointer; zooming out recedes from the current centre.
    pub fn on_scroll(&mut self, x_proportion: f64, y_proportion: f64, dy: f64) {
        debug!(
            "scrolled: x {} y {} dy {}, old view {:?}",
            x_proportion, y_proportion, dy, self.viewport
        );
        if dy > 0.0 {
            let centre = self.to_world(x_proportion, y_proportion);
            self.pan(centre);
            self.zoom_in();
        } else {
            self.zoom_out();
        }
        debug!("scrolled: new view {:?}", self.viewport);
    }

    pub fn reset_view(&mut self) {
        self.viewport = self.initial_viewport;
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::Tap { x, y } => self.on_tap(x, y),
            NavEvent::Scroll { x, y, dy } => self.on_scroll(x, y, dy),
            NavEvent::ZoomIn => self.zoom_in(),
            NavEvent::ZoomOut => self.zoom_out(),
            NavEvent::Pan(centre) => self.pan(centre),
            NavEvent::Reset => self.reset_view(),
        }
    }
}
