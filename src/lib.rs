//! Styled tooltips
//!
//! Attaches popups with a directional arrow to target elements, positioned
//! from one of twelve gravity directions and shown on hover or click.

pub mod config;
pub mod dump;
pub mod error;
pub mod event;
pub mod tooltip;
pub mod widget;

pub use config::{Options, TooltipOptions, Trigger};
pub use error::{Error, Result};
pub use tooltip::{StyledTooltip, TooltipRegistry};
pub use widget::{Document, ElementId, Gravity, SimDocument};
