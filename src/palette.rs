/// An 8-bit RGB pixel value. Colors are compared for exact equality.
pub type Rgb = [u8; 3];

/// Background color of traversable pixels and cells.
pub const SAFE: Rgb = [255, 255, 255];

/// Background color of blocked pixels and cells.
pub const UNSAFE: Rgb = [0, 0, 0];

/// Background color of cells containing both safe and unsafe pixels.
pub const MIXED: Rgb = [160, 160, 160];

/// Overlay color of cell borders.
pub const BORDER: Rgb = [64, 64, 64];

/// Overlay color of cells on the chosen path.
pub const PATH: Rgb = [255, 121, 0];

/// Overlay color of cells expanded by the search.
pub const VISITED: Rgb = [175, 216, 248];

/// Overlay color of the start and end markers.
pub const POINT: Rgb = [227, 38, 54];

/// Overlay color of the traced trajectory line.
pub const TRAJECTORY: Rgb = [204, 85, 0];
