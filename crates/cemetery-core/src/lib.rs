pub mod atmosphere;
pub mod constants;
pub mod controller;
pub mod gesture;
pub mod height;
pub mod inscription;
pub mod mapping;
pub mod profile;
pub mod record;
pub mod registry;
pub mod scenery;
pub mod store;

pub use controller::*;
pub use gesture::{GestureTracker, HitTarget};
pub use inscription::*;
pub use mapping::{ContainerRect, DragRect};
pub use profile::Profile;
pub use record::*;
pub use registry::Registry;
pub use store::*;
