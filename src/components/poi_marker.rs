use yew::prelude::*;

use crate::model::Poi;

#[derive(Properties, PartialEq, Clone)]
pub struct PoiMarkerProps {
    pub poi: Poi,
    pub selected: bool,
    pub button_ref: NodeRef,
    pub on_open: Callback<String>,
}

#[function_component]
pub fn PoiMarker(props: &PoiMarkerProps) -> Html {
    let poi = &props.poi;
    let open_cb = {
        let cb = props.on_open.clone();
        let id = poi.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let color = poi.kind.color();
    let ring = if props.selected {
        format!("box-shadow:0 0 0 3px {color};")
    } else {
        String::new()
    };
    // Anchored at the POI's world position; the layer transform does the rest.
    let wrap_style = format!(
        "position:absolute; left:{}px; top:{}px; transform:translate(-50%, -100%);",
        poi.position.x, poi.position.y
    );
    let button_style = "display:flex; flex-direction:column; align-items:center; gap:4px; background:none; \
        border:none; color:#c9d1d9; cursor:pointer; padding:0; font:inherit;";
    let flag_style = format!(
        "display:flex; align-items:center; gap:6px; background:rgba(22,27,34,0.95); border:1px solid {color}; \
         border-radius:999px; padding:2px 10px; font-size:11px; font-weight:600; letter-spacing:0.06em; {ring}"
    );
    let body_style = format!(
        "width:56px; height:40px; border:2px solid {color}; border-radius:4px; \
         background:repeating-linear-gradient(45deg, rgba(88,166,255,0.06) 0 6px, transparent 6px 12px);"
    );

    html! {<div style={wrap_style}>
        <button ref={props.button_ref.clone()} type="button" style={button_style} onclick={open_cb}
            aria-label={format!("Open {}", poi.title)} aria-pressed={props.selected.to_string()}>
            <span style={flag_style}>
                <span style={format!("width:6px; height:6px; border-radius:50%; background:{color};")} aria-hidden="true"></span>
                { poi.short_label.clone() }
            </span>
            <span style={body_style} aria-hidden="true"></span>
            <span style="display:flex; flex-direction:column; align-items:center; max-width:180px; text-align:center;">
                <span style="font-size:13px; font-weight:600;">{ poi.title.clone() }</span>
                <span style="font-size:11px; opacity:0.7;">{ poi.kind.label() }</span>
            </span>
        </button>
    </div>}
}
