//! Activity signup board: a Yew front-end that lists activities, lets
//! students sign up, and removes participants, re-fetching the full list
//! from the server after every change.

pub mod api;
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod flash;
pub mod initials;
pub mod model;
pub mod view;

pub use api::{ActivitiesApi, ApiReply, HttpApi};
pub use board::{ActivityBoard, ListState, Mutation};
pub use config::BoardConfig;
pub use error::ApiError;
pub use flash::{Flash, FlashStyle};
pub use model::{ActivitiesSnapshot, Activity, ParticipantRow};
pub use view::{BoardAction, BoardView};
