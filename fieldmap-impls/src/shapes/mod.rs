mod observable_vec;

pub use observable_vec::*;
