//! # spark-widgets
//!
//! Retained-mode widget toolkit: screens of fixed-rectangle controls with
//! keyboard focus and pre-rendered, state-dependent layers.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals):
//! each screen's focus target and the current/previous screen are signals.
//!
//! ## Architecture
//!
//! A [`Ui`] context owns every [`Control`] (in an arena addressed by
//! [`ControlId`]) and every [`Screen`]. Each control carries three
//! [`LayerSet`]s rebuilt by `update()`; `render()` only blits:
//!
//! ```text
//! update():  background (state colors) → midground (content + border) → foreground
//! render():  pick VisualState → blit bg, mid, fg → focus outline
//! ```
//!
//! Drawing goes through the [`Canvas`] trait, text through [`Font`];
//! [`Surface`] and [`MonoFont`] are the built-in implementations.
//!
//! ## Modules
//!
//! - [`types`] - Colors, geometry, mouse buttons, alignment, font sizes
//! - [`surface`] / [`canvas`] / [`font`] - Drawing collaborators
//! - [`layer`] - Visual states, layer sets, borders
//! - [`control`] - The control record and its behaviors
//! - [`screen`] / [`registry`] - Focus arbitration and screen switching
//! - [`ui`] - The application context
//! - [`input`] - Event types, crossterm bridge
//! - [`config`] / [`error`] / [`logging`] - Ambient plumbing

pub mod canvas;
pub mod config;
pub mod control;
pub mod error;
pub mod font;
pub mod input;
pub mod layer;
pub mod logging;
pub mod registry;
pub mod screen;
pub mod surface;
pub mod types;
pub mod ui;

pub use types::*;

pub use canvas::{Canvas, PointerState};
pub use config::{NameScope, UiConfig};
pub use control::{
    Button, CheckBox, Click, Control, ControlId, ControlKind, FocusDirection, FocusExits,
    FocusRequest, Image, Label, SliderV, SliderZone, TextBox,
};
pub use error::{Entity, Error, Result};
pub use font::{Font, MonoFont};
pub use input::{
    InputEvent, KeyState, KeyboardEvent, Modifiers, MouseAction, MouseEvent,
    cell_center, convert_key_event, convert_mouse_event, poll_event, read_event, enable_mouse,
    disable_mouse,
};
pub use layer::{Border, BorderStyle, LayerSet, VisualState};
pub use logging::init_logging;
pub use registry::ScreenRegistry;
pub use screen::{Screen, ScreenBackground, ScreenId};
pub use surface::Surface;
pub use ui::Ui;
