use crate::config::Fill;
use crate::model::Tile;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TileFaceProps {
    pub tile: Tile,
    pub fill: Fill,
    pub size: f64,
}

#[function_component(TileFace)]
pub fn tile_face(props: &TileFaceProps) -> Html {
    let size = props.size;
    match props.fill {
        Fill::Image => html! {
            <img
                src={props.tile.image_url.clone()}
                alt={props.tile.id.as_str().to_owned()}
                draggable="false"
                style={format!("display:block; width:{size}px; height:{size}px; pointer-events:none;")}
            />
        },
        Fill::Color => html! {
            <div style={format!("width:{size}px; height:{size}px; background:{}; border-radius:8px;", props.tile.swatch)}></div>
        },
    }
}
