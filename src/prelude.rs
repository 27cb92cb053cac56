//! This module simply brings the most common tinct functionality under a single namespace, to
//! prevent excessive imports: the [`Color`] trait and the three color types, the model and its
//! snapshot, the text-entry error, and the synchronization controller with its view trait. Wheel
//! geometry and configuration are not included.

pub use crate::color::{Color, RGBColor};
pub use crate::colors::{CMYKColor, HSLColor};
pub use crate::entry::EntryError;
pub use crate::model::{ColorSyncModel, PickerColor};
pub use crate::snapshot::{CopyFormat, Snapshot};
pub use crate::sync::{Controller, Edit, Surface, View};
