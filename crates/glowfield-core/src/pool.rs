use crate::paint::Surface;
use crate::shape::Shape;
use rand::prelude::*;

/// Fixed, ordered collection of shapes plus the random source they draw from.
pub struct ShapePool {
    shapes: Vec<Shape>,
    rng: StdRng,
}

impl ShapePool {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            shapes: Vec::new(),
            rng,
        }
    }

    /// Replace the whole pool with `count` fresh shapes. The new set is
    /// built before it is swapped in.
    pub fn initialize(&mut self, width: f64, height: f64, count: usize) {
        let fresh = (0..count)
            .map(|_| Shape::new(&mut self.rng, width, height))
            .collect::<Vec<_>>();
        self.shapes = fresh;
        log::debug!(
            "[pool] initialized {} shapes for {:.0}x{:.0}",
            count,
            width,
            height
        );
    }

    pub fn reset_all(&mut self, width: f64, height: f64) {
        for shape in &mut self.shapes {
            shape.reset(&mut self.rng, width, height);
        }
    }

    /// Draw every shape in pool order.
    pub fn draw_all<S: Surface + ?Sized>(&mut self, surface: &mut S, time: f64) {
        for shape in &mut self.shapes {
            shape.draw(surface, &mut self.rng, time);
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
