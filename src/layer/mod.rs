//! Ad-hoc layered composition.
//!
//! A [`Compositor`] collects drawing callbacks tagged with a z-index and
//! replays them onto a fresh canvas, lowest z-index first. Layers with equal
//! z-index keep their insertion order. The fixed logo pipeline does not use
//! it; it is meant for custom designs mixing the crate's building blocks.
//!
//! # Example
//!
//! ```
//! use logoforge::{Color, Compositor, Pattern};
//! use logoforge::canvas::{Style, pt};
//!
//! let mut compositor = Compositor::new(200, 200);
//! compositor.add_layer(10, |canvas| {
//!     canvas.circle(pt(100.0, 100.0), 60.0, &Style::fill(Color::WHITE));
//! });
//! compositor.add_layer(0, |canvas| Pattern::Grid.draw(canvas, Color::GRAY));
//!
//! let canvas = compositor.compose(Color::BLACK).unwrap();
//! assert_eq!(canvas.width(), 200);
//! ```

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Result;

/// Callback that paints one layer.
pub type DrawFn = Box<dyn Fn(&mut Canvas)>;

/// A drawing callback and its stacking position.
pub struct Layer {
    pub z_index: i32,
    draw: DrawFn,
}

impl Layer {
    pub fn new(z_index: i32, draw: impl Fn(&mut Canvas) + 'static) -> Self {
        Self {
            z_index,
            draw: Box::new(draw),
        }
    }

    /// Paints this layer onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        (self.draw)(canvas)
    }
}

impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer").field("z_index", &self.z_index).finish_non_exhaustive()
    }
}

// ============================================================================
// Compositor
// ============================================================================

/// An ordered stack of layers for a fixed canvas size.
#[derive(Debug)]
pub struct Compositor {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
}

impl Compositor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Appends a layer. Higher `z_index` paints later, on top.
    pub fn add_layer(&mut self, z_index: i32, draw: impl Fn(&mut Canvas) + 'static) -> &mut Self {
        self.layers.push(Layer::new(z_index, draw));
        self
    }

    /// Paints every layer in ascending z-index onto a canvas filled with
    /// `background`.
    ///
    /// Layers are kept, so the same stack can be composed again.
    pub fn compose(&self, background: Color) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height, background)?;
        let mut ordered: Vec<&Layer> = self.layers.iter().collect();
        // stable: equal z-indices keep insertion order
        ordered.sort_by_key(|layer| layer.z_index);
        tracing::debug!(layers = ordered.len(), "composing");
        for layer in ordered {
            layer.draw(&mut canvas);
        }
        Ok(canvas)
    }

    /// Removes all layers.
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Style, pt};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> impl Fn(&mut Canvas) + 'static {
        let log = Rc::clone(log);
        move |_| log.borrow_mut().push(name)
    }

    #[test]
    fn layers_compose_in_z_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut compositor = Compositor::new(4, 4);
        compositor
            .add_layer(3, recorder(&log, "three"))
            .add_layer(1, recorder(&log, "one"))
            .add_layer(2, recorder(&log, "two"));

        compositor.compose(Color::BLACK).unwrap();
        assert_eq!(*log.borrow(), vec!["one", "two", "three"]);
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut compositor = Compositor::new(4, 4);
        compositor
            .add_layer(0, recorder(&log, "a"))
            .add_layer(-1, recorder(&log, "first"))
            .add_layer(0, recorder(&log, "b"))
            .add_layer(0, recorder(&log, "c"));

        compositor.compose(Color::BLACK).unwrap();
        assert_eq!(*log.borrow(), vec!["first", "a", "b", "c"]);
    }

    #[test]
    fn top_layer_paints_last() {
        let mut compositor = Compositor::new(10, 10);
        compositor.add_layer(5, |canvas| {
            canvas.rectangle(pt(5.0, 5.0), 10.0, 10.0, 0.0, &Style::fill(Color::WHITE));
        });
        compositor.add_layer(1, |canvas| {
            canvas.rectangle(pt(5.0, 5.0), 10.0, 10.0, 0.0, &Style::fill(Color::rgb(1.0, 0.0, 0.0)));
        });
        let canvas = compositor.compose(Color::BLACK).unwrap();
        assert_eq!(canvas.to_image().get_pixel(5, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn compose_is_repeatable_and_clear_empties() {
        let mut compositor = Compositor::new(8, 8);
        assert!(compositor.is_empty());
        compositor.add_layer(0, |canvas| {
            canvas.circle(pt(4.0, 4.0), 3.0, &Style::fill(Color::WHITE));
        });
        assert_eq!(compositor.len(), 1);

        let a = compositor.compose(Color::BLACK).unwrap();
        let b = compositor.compose(Color::BLACK).unwrap();
        assert_eq!(a.data(), b.data());

        compositor.clear();
        assert!(compositor.is_empty());
        let empty = compositor.compose(Color::gray(0.5)).unwrap();
        assert!(empty.to_image().pixels().all(|p| p.0 == [128, 128, 128, 255]));
    }

    #[test]
    fn zero_size_compose_fails() {
        assert!(Compositor::new(0, 5).compose(Color::BLACK).is_err());
    }
}
