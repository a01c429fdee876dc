use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::board::SELECT_PLACEHOLDER;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names, in snapshot order.
    pub options: Vec<String>,
    pub email: String,
    /// Empty string selects the placeholder.
    pub selected: String,
    pub on_email: Callback<String>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let select_ref = use_node_ref();

    // The option list is rebuilt on every load, so push the selection into
    // the element after the options exist.
    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (props.selected.clone(), props.options.clone()),
            move |(selected, _)| {
                if let Some(sel) = select_ref.cast::<HtmlSelectElement>() {
                    sel.set_value(selected);
                }
                || ()
            },
        );
    }

    let oninput = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            on_select.emit(sel.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
          <div class="form-group">
            <label for="email">{ "Student Email:" }</label>
            <input
              type="email"
              id="email"
              required=true
              placeholder="your-email@mergington.edu"
              value={props.email.clone()}
              {oninput}
            />
          </div>
          <div class="form-group">
            <label for="activity">{ "Select Activity:" }</label>
            <select id="activity" required=true ref={select_ref} {onchange}>
              <option value="">{ SELECT_PLACEHOLDER }</option>
              { for props.options.iter().map(|name| html! {
                  <option key={name.clone()} value={name.clone()}>{ name.clone() }</option>
              }) }
            </select>
          </div>
          <button type="submit">{ "Sign Up" }</button>
        </form>
    }
}
