use yew::prelude::*;

use crate::model::{Activity, ParticipantRow, NO_PARTICIPANTS_TEXT};

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: String,
    pub activity: Activity,
    /// Emits `(activity, email)` when a removal control is clicked.
    pub on_remove: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let a = &props.activity;

    let rows = a.participant_rows().into_iter().map(|row| match row {
        ParticipantRow::Member { email, initials } => {
            let onclick = {
                let on_remove = props.on_remove.clone();
                let name = props.name.clone();
                let email = email.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    on_remove.emit((name.clone(), email.clone()));
                })
            };
            html! {
              <li class="participant">
                <span class="participant-badge">{ initials }</span>
                <span class="participant-name">{ email.clone() }</span>
                <button
                  type="button"
                  class="participant-delete"
                  title="Remove participant"
                  aria-label={format!("Remove {email}")}
                  {onclick}
                >
                  { "×" }
                </button>
              </li>
            }
        }
        ParticipantRow::Placeholder => html! {
            <li class="no-participants">{ NO_PARTICIPANTS_TEXT }</li>
        },
    });

    html! {
        <div class="activity-card">
          <h4>{ props.name.clone() }</h4>
          <p>{ a.description.clone() }</p>
          <p><strong>{ "Schedule:" }</strong>{ " " }{ a.schedule.clone() }</p>
          <p><strong>{ "Availability:" }</strong>{ " " }{ a.availability_text() }</p>

          <div class="participants-section">
            <h5>{ "Participants" }</h5>
            <ul class="participants-list">
              { for rows }
            </ul>
          </div>
        </div>
    }
}
