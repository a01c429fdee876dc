mod activity_card;
mod activity_list;
mod app;
mod message_banner;
mod signup_form;

pub use activity_card::{ActivityCard, ActivityCardProps};
pub use activity_list::{ActivityList, ActivityListProps};
pub use app::{App, AppProps};
pub use message_banner::{MessageBanner, MessageBannerProps};
pub use signup_form::{SignupForm, SignupFormProps};
