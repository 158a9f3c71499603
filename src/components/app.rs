use super::{drop_zone::DropZoneBanner, tile_strip::TileStrip};
use crate::model::TileCatalog;
use crate::util::{load_config, viewport_height};
use gloo::events::EventListener;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let catalog = use_memo((), |_| TileCatalog::placeholder());
    let screen_height = use_state(viewport_height);

    // Track viewport height for drop detection
    {
        let screen_height = screen_height.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                EventListener::new(&win, "resize", move |_| {
                    screen_height.set(viewport_height());
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#fff;">
            <DropZoneBanner height={config.drop_zone_height} />
            <TileStrip
                catalog={(*catalog).clone()}
                config={*config}
                screen_height={*screen_height}
            />
        </div>
    }
}
