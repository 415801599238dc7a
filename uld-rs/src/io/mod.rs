/// Serde types for instances and solutions, as read from and written to JSON
pub mod ext_repr;

/// Conversion of external instances into [`Instance`](crate::entities::Instance)s, filtering invalid cargo
pub mod import;

/// Conversion of [`LoadingSolution`](crate::entities::LoadingSolution)s into their external representation
pub mod export;
