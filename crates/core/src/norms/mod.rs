//! WCV severity norms
//!
//! Horizontal and vertical components, the combinators that blend them, and
//! the four top-level variants built from them.

pub mod combinators;
pub mod horizontal;
pub mod penetration;
pub mod variants;
pub mod vertical;

pub use combinators::{complement_product, sympoly2, sympoly3};
pub use horizontal::{horizontal_wcv_xdist, horizontal_wcv_ydist};
pub use penetration::{hmd_pen_dist, range_pen_dist, range_pen_dist2, si};
pub use variants::{
    wcv_norm, wcv_norm_alt, wcv_norm_alt_orig, wcv_norm_alt_other, AltNormPolicy, Combinator,
    NormVariant, RangeTerm,
};
pub use vertical::{vert_pen_dist, vertical_wcv_norm};
