use yew::prelude::*;

use crate::flash::Flash;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub flash: Option<Flash>,
    pub hidden: bool,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    let style = props.flash.as_ref().map(|f| f.style.class());
    let text = props.flash.as_ref().map(|f| f.text.clone()).unwrap_or_default();
    let role = match &props.flash {
        Some(f) if f.style.is_error() => "alert",
        _ => "status",
    };

    html! {
        <div
          id="message"
          class={classes!(style, props.hidden.then_some("hidden"))}
          {role}
        >
          { text }
        </div>
    }
}
