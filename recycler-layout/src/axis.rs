use recycler::Point;

pub(crate) fn main_of(point: Point, horizontal: bool) -> f64 {
    if horizontal { point.x } else { point.y }
}

pub(crate) fn cross_of(point: Point, horizontal: bool) -> f64 {
    if horizontal { point.y } else { point.x }
}

/// Number of whole `step`s before `pos` (the line covering `pos`).
pub(crate) fn floor_index(pos: f64, step: f64) -> usize {
    if step <= 0.0 || pos <= 0.0 {
        return 0;
    }
    (pos / step) as usize
}

/// Number of lines starting strictly before `pos`.
pub(crate) fn ceil_index(pos: f64, step: f64) -> usize {
    if step <= 0.0 || pos <= 0.0 {
        return 0;
    }
    let q = (pos / step) as usize;
    if (q as f64) * step < pos { q + 1 } else { q }
}
