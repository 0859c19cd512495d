pub mod kind;
pub mod prototype;

pub use kind::DetectorKind;
pub use prototype::DetectorFactory;
