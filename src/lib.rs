//! gif-ascii: render animated GIFs as text, one frame at a time.
//!
//! The pipeline turns a decoded RGBA frame into a character grid:
//!
//! - [`ascii`] - grid sizing, bilinear sampling, brightness mapping, assembly
//! - [`decode`] - the [`decode::FrameSource`] trait and its GIF/in-memory sources
//! - [`sequencer`] - frame requests, index wrapping and delay conversion
//! - [`session`] - background worker answering [`protocol`] requests
//!
//! ```no_run
//! use gif_ascii::ascii::DetailTier;
//! use gif_ascii::decode::GifSource;
//! use gif_ascii::sequencer::AnimationSequencer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = GifSource::open("anim.gif")?;
//! let mut sequencer = AnimationSequencer::new(source, DetailTier::Standard.profile())?;
//! let first = sequencer.render_initial()?;
//! print!("{}", first.art);
//! let next = sequencer.request_frame(1)?;
//! println!("show for {} ms", next.delay_ms);
//! # Ok(())
//! # }
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod frame;
pub mod protocol;
pub mod sequencer;
pub mod session;

pub use error::{ConfigurationError, RenderError};
