mod controller;
mod session;
mod simulation;
mod view;

pub use controller::{
    Command, InputController, InputEvent, InteractionState, Mode, PointerButton, Propagation,
    ScrollDirection,
};
pub use session::Session;
pub use simulation::SimulationLoop;
pub use view::{MAX_ZOOM, MIN_ZOOM, ViewTransform, ZOOM_IN_STEP, ZOOM_OUT_STEP};
