use super::{draggable_tile::DraggableTile, tile_face::TileFace};
use crate::config::InteractionConfig;
use crate::model::{StripAction, StripState, TileCatalog, TileId};
use crate::util::clog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TileStripProps {
    pub catalog: TileCatalog,
    pub config: InteractionConfig,
    pub screen_height: f64,
}

// The strip spans the whole root so the drop zone lies inside its padding
// box; a dragged tile stays visible all the way down to the banner.
fn strip_style(scroll_enabled: bool) -> String {
    let overflow = if scroll_enabled { "auto" } else { "hidden" };
    format!(
        "position:relative; z-index:1; display:flex; flex-direction:row; align-items:flex-start; \
         height:100%; box-sizing:border-box; overflow-x:{overflow}; overflow-y:hidden; padding:150px 0;"
    )
}

#[function_component(TileStrip)]
pub fn tile_strip(props: &TileStripProps) -> Html {
    let strip = use_reducer(StripState::default);

    // Log scroll gate changes
    {
        let scroll_enabled = strip.scroll_enabled();
        use_effect_with(strip.version, move |_| {
            clog(&format!("scroll enabled: {scroll_enabled}"));
            || ()
        });
    }

    let on_drag_start = {
        let strip = strip.clone();
        Callback::from(move |id: TileId| strip.dispatch(StripAction::BeginDrag { id }))
    };
    let on_drag_end = {
        let strip = strip.clone();
        Callback::from(move |id: TileId| strip.dispatch(StripAction::EndDrag { id }))
    };

    let cfg = props.config;
    let any_active = strip.any_active();
    let columns = props.catalog.columns(cfg.skin.layout.rows_per_column());

    html! {
        <div
            id="tile-strip"
            style={strip_style(strip.scroll_enabled())}
        >
            { for columns.into_iter().map(|column| {
                let key = column.first().map(|t| t.id.as_str().to_owned()).unwrap_or_default();
                html! {
                    <div key={key} style="display:flex; flex-direction:column; flex:0 0 auto;">
                        { for column.iter().map(|tile| html! {
                            <DraggableTile
                                key={tile.id.as_str().to_owned()}
                                id={tile.id.clone()}
                                any_active={any_active}
                                screen_height={props.screen_height}
                                config={cfg}
                                on_drag_start={on_drag_start.clone()}
                                on_drag_end={on_drag_end.clone()}
                            >
                                <TileFace tile={tile.clone()} fill={cfg.skin.fill} size={cfg.tile_size} />
                            </DraggableTile>
                        }) }
                    </div>
                }
            }) }
        </div>
    }
}
