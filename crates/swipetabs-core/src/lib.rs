pub mod clock;
pub mod config;
pub mod driver;
pub mod easing;
pub mod error;
pub mod gesture;
pub mod group;
pub mod projection;
pub mod reducer;
pub mod script;
pub mod service;
pub mod state;
pub mod timing;
pub mod tween;

pub use clock::{FrameClock, IntervalClock};
pub use config::{AnimationConfig, AppConfig, GestureConfig};
pub use driver::AnimationDriver;
pub use easing::EasingType;
pub use error::{Error, Result};
pub use gesture::{resolve_index, Direction, GesturePayload, IndexResolver, PanEvent};
pub use group::TabGroup;
pub use projection::{Projection, Translate};
pub use reducer::{reduce, Reducer};
pub use script::{simulate, Script, ScriptStep, SimulatedFrame};
pub use service::{TabGroupHandle, TabGroupService};
pub use state::{StateInput, TabState};
pub use tween::Tween;
