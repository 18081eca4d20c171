//! Root-finding and time-of-approach primitives
//!
//! Pure functions over relative states that locate the events of a straight-line
//! encounter: closest approach, co-altitude and boundary crossings.

pub mod approach;
pub mod quadratic;

pub use approach::{dcpa, delta, tcoa, tcpa, theta_d, timein, TCOA_NEVER};
pub use quadratic::{discr, discr2b, root, root2b};
