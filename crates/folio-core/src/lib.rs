pub mod card;
pub mod constants;
pub mod contact;
pub mod drift;
pub mod easing;
pub mod hub;
pub mod keyframes;
pub mod mapper;
pub mod menu;
pub mod pointer;
pub mod random;
pub mod scroll;
pub mod signal;
pub mod spring;
pub mod viewport;

pub use card::*;
pub use constants::*;
pub use contact::*;
pub use drift::*;
pub use easing::*;
pub use hub::*;
pub use keyframes::*;
pub use mapper::*;
pub use menu::*;
pub use pointer::*;
pub use random::*;
pub use scroll::*;
pub use signal::*;
pub use spring::*;
pub use viewport::*;
