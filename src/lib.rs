//! tinct is the color core of a color picker built from a hue wheel, a saturation slider, a
//! lightness slider and three text fields (hex, RGB and CMYK). Six surfaces edit one color, and
//! they must never disagree about it. The picker keeps exactly one color, whole-degree hue plus
//! whole-percent saturation and lightness, and derives everything else from it on demand; the
//! [`sync`] module makes sure that writing those derived values back into the widgets never
//! triggers another round of updates.
//!
//! Painting, window chrome and the toolkit itself are somebody else's job: they call into a
//! [`sync::Controller`] with user edits and implement [`sync::View`] to display the results.

#![doc(html_root_url = "https://docs.rs/tinct/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

extern crate geo;
extern crate num;
extern crate regex;
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate float_cmp;
extern crate thiserror;

pub mod color;
pub mod colors;
pub mod config;
pub mod entry;
pub mod model;
pub mod prelude;
pub mod snapshot;
pub mod sync;
pub mod wheel;
