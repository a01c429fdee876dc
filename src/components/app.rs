use std::rc::Rc;

use gloo::console::error;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpApi;
use crate::board::{ActivityBoard, Mutation};
use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::BoardConfig;
use crate::view::{apply_mutation, BoardAction, BoardView};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: BoardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let board: Rc<ActivityBoard<HttpApi>> = {
        let config = props.config.clone();
        use_memo((), move |_| {
            ActivityBoard::new(HttpApi::new(config.api_base.clone()), config)
        })
    };

    // List, selector, form fields and banner
    let view = use_reducer(BoardView::default);

    // The pending hide timer is dropped (cancelled) when replaced
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let reload = {
        let board = board.clone();
        let dispatcher = view.dispatcher();
        Callback::from(move |_: ()| {
            let board = board.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let (action, diagnostic) = BoardAction::from_load(board.load().await);
                if let Some(d) = diagnostic {
                    error!(d);
                }
                dispatcher.dispatch(action);
            });
        })
    };

    let apply = {
        let dispatcher = view.dispatcher();
        let hide_timer = hide_timer.clone();
        let reload = reload.clone();
        Callback::from(move |m: Mutation| {
            let ms = m.flash.hide_after_ms;
            let diagnostic = apply_mutation(m, |a| dispatcher.dispatch(a), || reload.emit(()));
            if let Some(d) = diagnostic {
                error!(d);
            }

            let dispatcher = dispatcher.clone();
            *hide_timer.borrow_mut() =
                Some(Timeout::new(ms, move || dispatcher.dispatch(BoardAction::HideFlash)));
        })
    };

    let on_remove = {
        let board = board.clone();
        let apply = apply.clone();
        Callback::from(move |(activity, participant): (String, String)| {
            let board = board.clone();
            let apply = apply.clone();
            spawn_local(async move {
                let outcome = board
                    .remove_participant(&activity, &participant, gloo::dialogs::confirm)
                    .await;
                if let Some(m) = outcome {
                    apply.emit(m);
                }
            });
        })
    };

    let on_submit = {
        let board = board.clone();
        let apply = apply.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            let board = board.clone();
            let apply = apply.clone();
            let email = view.email.clone();
            let activity = view.selected.clone();
            spawn_local(async move {
                apply.emit(board.submit_signup(&email, &activity).await);
            });
        })
    };

    let on_email = {
        let dispatcher = view.dispatcher();
        Callback::from(move |v: String| dispatcher.dispatch(BoardAction::EmailChanged(v)))
    };

    let on_select = {
        let dispatcher = view.dispatcher();
        Callback::from(move |v: String| dispatcher.dispatch(BoardAction::ActivitySelected(v)))
    };

    // Load once on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    html! {
        <main class="activity-board">
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <ActivityList state={view.list.clone()} {on_remove} />
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <SignupForm
              options={view.options.clone()}
              email={view.email.clone()}
              selected={view.selected.clone()}
              {on_email}
              {on_select}
              {on_submit}
            />
            <MessageBanner flash={view.flash.clone()} hidden={view.flash_hidden} />
          </section>
        </main>
    }
}
