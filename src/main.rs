use activity_board::components::{App, AppProps};
use activity_board::config::BoardConfig;
use gloo::console::log;

fn main() {
    // index.html provides: <div id="app"></div>
    let config = BoardConfig::default();
    let root = gloo::utils::document()
        .get_element_by_id(&config.mount_id)
        .unwrap_or_else(|| panic!("missing #{} mount point", config.mount_id));

    let config = config.with_mount_attrs(&root);
    log!(
        "activity board: api base",
        if config.api_base.is_empty() { "(same origin)" } else { config.api_base.as_str() }
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
