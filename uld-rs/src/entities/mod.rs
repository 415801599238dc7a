mod container;
mod free_space;
mod instance;
mod item;
mod layout;
mod placed_item;
#[cfg(feature = "presets")]
mod presets;
mod problem;
mod solution;
mod unit_item;
mod weight;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use item::CargoItem;

#[doc(inline)]
pub use unit_item::UnitItem;

#[doc(inline)]
pub use free_space::FreeSpacePool;

#[doc(inline)]
pub use free_space::Space;

#[doc(inline)]
pub use free_space::guillotine_split;

#[doc(inline)]
pub use weight::WeightTracker;

#[doc(inline)]
pub use placed_item::PlacedItem;

#[doc(inline)]
pub use placed_item::PItemKey;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use problem::LoadingProblem;

#[doc(inline)]
pub use problem::Placement;

#[doc(inline)]
pub use problem::RejectionReason;

#[doc(inline)]
pub use solution::LoadingSolution;

#[doc(inline)]
pub use solution::UnplacedUnit;

#[cfg(feature = "presets")]
#[doc(inline)]
pub use presets::ContainerPreset;
