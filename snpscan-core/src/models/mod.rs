pub mod region;
pub mod variant;
pub mod window;

// re-export for cleaner imports
pub use self::region::Region;
pub use self::variant::{RawRecord, VariantRecord, VariantSite};
pub use self::window::Window;
