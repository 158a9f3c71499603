use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DropZoneBannerProps {
    pub height: f64,
}

#[function_component(DropZoneBanner)]
pub fn drop_zone_banner(props: &DropZoneBannerProps) -> Html {
    html! {
        <div id="drop-zone" style={format!("position:absolute; bottom:0; left:0; width:100%; height:{}px; background:#00334d; z-index:0;", props.height)}>
            <div style="margin:25px 5px 0 5px; text-align:center; color:#fff; font-size:25px; font-weight:bold;">{"Drop them here!"}</div>
        </div>
    }
}
