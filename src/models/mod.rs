pub mod angle;

mod primitives;
pub use self::primitives::*;

mod sector;
pub use self::sector::*;

mod layout;
pub use self::layout::*;
