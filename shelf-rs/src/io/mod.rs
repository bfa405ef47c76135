/// All logic for reading problem instances into the library
pub mod import;

/// All logic for writing instances and packings back out
pub mod export;

/// External (serializable) representations of packings
pub mod ext_repr;

/// All logic for creating SVG from [`Packing`](crate::entities::Packing)s
pub mod svg;
