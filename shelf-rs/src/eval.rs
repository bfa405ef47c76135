use crate::entities::SPInstance;

/// Area-based lower bound on the optimal strip height: no packing can fit more
/// total rectangle area into the strip than `height * strip_width`.
pub fn area_lower_bound(instance: &SPInstance) -> f32 {
    instance.rect_area() / instance.strip_width
}

/// Approximation ratio achieved by a packing: `achieved_height / lower_bound`.
///
/// Only defined for a positive lower bound; an empty instance (lower bound 0,
/// height 0) counts as exact and yields 1. The result is deliberately not
/// clamped to `>= 1`: a smaller value indicates a bug in either the bound or
/// the packing and must surface.
pub fn approx_ratio(achieved_height: f32, lower_bound: f32) -> f32 {
    if lower_bound == 0.0 && achieved_height == 0.0 {
        return 1.0;
    }
    achieved_height / lower_bound
}
