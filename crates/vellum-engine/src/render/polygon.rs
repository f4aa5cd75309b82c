use std::cell::RefCell;
use std::collections::HashMap;
use std::f32::consts::TAU;
use std::rc::Rc;

/// Rounds a fractional side count down to two decimals; whole counts pass through.
#[inline]
pub fn round_sides(sides: f32) -> f32 {
    if sides.fract() != 0.0 {
        (sides * 100.0).floor() * 0.01
    } else {
        sides
    }
}

/// Unit polygon with `sides` sides as flat `[x0, y0, x1, y1, ..]`.
///
/// Vertex `i` sits at angle `i * 2π / sides` for `i` in `0..=floor(sides)`, so
/// whole counts repeat the first vertex at the end and fractional counts stop
/// short of a full turn.
pub fn create_polygon(sides: f32) -> Vec<f32> {
    let count = sides.floor().max(0.0) as usize;
    let step = TAU / sides;
    (0..=count)
        .flat_map(|i| {
            let a = step * i as f32;
            [a.cos(), a.sin()]
        })
        .collect()
}

/// Shared cache of unit polygons keyed by side count in hundredths.
///
/// Cloning yields another handle to the same cache, so renderers built from
/// one factory can share their vertex data.
#[derive(Debug, Clone, Default)]
pub struct PolygonCache {
    polygons: Rc<RefCell<HashMap<i64, Rc<[f32]>>>>,
}

impl PolygonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex data for `sides` (already rounded by the caller or not).
    pub fn get(&self, sides: f32) -> Rc<[f32]> {
        let sides = round_sides(sides);
        let key = (sides * 100.0).round() as i64;
        let mut polygons = self.polygons.borrow_mut();
        Rc::clone(polygons.entry(key).or_insert_with(|| {
            log::debug!("polygon cache miss: {sides} sides");
            create_polygon(sides).into()
        }))
    }

    pub fn len(&self) -> usize {
        self.polygons.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.borrow().is_empty()
    }

    /// True when both handles point at the same cache.
    pub fn ptr_eq(&self, other: &PolygonCache) -> bool {
        Rc::ptr_eq(&self.polygons, &other.polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_sides(6.0), 6.0);
        assert!(approx(round_sides(5.129), 5.12));
    }

    #[test]
    fn square_repeats_first_vertex() {
        let v = create_polygon(4.0);
        assert_eq!(v.len(), 10);
        assert!(approx(v[0], 1.0) && approx(v[1], 0.0));
        assert!(approx(v[2], 0.0) && approx(v[3], 1.0));
        assert!(approx(v[8], 1.0) && approx(v[9], 0.0));
    }

    #[test]
    fn same_rounded_count_shares_vertex_data() {
        let cache = PolygonCache::new();
        let a = cache.get(5.123);
        let b = cache.get(5.128);
        let c = cache.get(5.13);
        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clones_share_storage() {
        let cache = PolygonCache::new();
        let other = cache.clone();
        let a = cache.get(3.0);
        let b = other.get(3.0);
        assert!(Rc::ptr_eq(&a, &b));
        assert!(cache.ptr_eq(&other));
        assert!(!cache.ptr_eq(&PolygonCache::new()));
    }
}
