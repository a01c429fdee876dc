use yew::prelude::*;

use crate::board::{ListState, LOADING_TEXT, LOAD_FAILED_TEXT};
use crate::components::ActivityCard;

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub state: ListState,
    pub on_remove: Callback<(String, String)>,
}

#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    let body = match &props.state {
        ListState::Loading => html! { <p>{ LOADING_TEXT }</p> },
        ListState::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        ListState::Ready(snapshot) => html! {
            <>
              { for snapshot.iter().map(|(name, activity)| html! {
                  <ActivityCard
                    key={name.clone()}
                    name={name.clone()}
                    activity={activity.clone()}
                    on_remove={props.on_remove.clone()}
                  />
              }) }
            </>
        },
    };

    html! {
        <div id="activities-list">
          { body }
        </div>
    }
}
