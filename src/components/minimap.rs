use std::rc::Rc;
use yew::prelude::*;

use crate::model::PoiRegistry;
use crate::state::{MinimapProjection, MinimapRect, Point};

#[derive(Properties, PartialEq, Clone)]
pub struct MinimapProps {
    pub registry: Rc<PoiRegistry>,
    /// `None` renders an empty frame.
    pub projection: Option<MinimapProjection>,
    pub viewport: Option<MinimapRect>,
    pub selected_id: Option<String>,
    pub on_marker: Callback<String>,
    /// World point under a click on the minimap background.
    pub on_jump: Callback<Point>,
}

#[function_component]
pub fn Minimap(props: &MinimapProps) -> Html {
    let frame_ref = use_node_ref();
    let Some(projection) = props.projection else {
        return html! {};
    };
    let size = projection.size();

    let jump_cb = {
        let cb = props.on_jump.clone();
        let frame_ref = frame_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = frame_ref.cast::<web_sys::Element>() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let mini = Point::new(
                f64::from(e.client_x()) - rect.left(),
                f64::from(e.client_y()) - rect.top(),
            );
            cb.emit(projection.minimap_to_world(mini));
        })
    };

    let markers = props.registry.iter().map(|poi| {
        let p = projection.world_to_minimap(poi.position);
        let selected = props.selected_id.as_deref() == Some(poi.id.as_str());
        let marker_cb = {
            let cb = props.on_marker.clone();
            let id = poi.id.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                cb.emit(id.clone());
            })
        };
        let dot = if selected { 12.0 } else { 8.0 };
        let style = format!(
            "position:absolute; left:{}px; top:{}px; width:{dot}px; height:{dot}px; margin:-{}px 0 0 -{}px; \
             border-radius:50%; border:1px solid #0d1117; padding:0; cursor:pointer; background:{};",
            p.x,
            p.y,
            dot / 2.0,
            dot / 2.0,
            poi.kind.color()
        );
        html! {
            <button key={poi.id.clone()} type="button" style={style} onclick={marker_cb}
                title={poi.title.clone()} aria-label={format!("Go to {}", poi.title)}></button>
        }
    });

    let viewport = props.viewport.map(|r| {
        let style = format!(
            "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; border:1px solid #58a6ff; \
             background:rgba(88,166,255,0.08); pointer-events:none;",
            r.x, r.y, r.width, r.height
        );
        html! { <div style={style}></div> }
    });

    html! {<div data-no-drag="true" style="position:absolute; right:12px; top:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:6px;">
        <div style="font-size:10px; letter-spacing:0.08em; opacity:0.7; margin-bottom:4px;">{"MINIMAP"}</div>
        <div ref={frame_ref} onclick={jump_cb} role="presentation"
            style={format!("position:relative; width:{}px; height:{}px; overflow:hidden; cursor:crosshair; \
                background-image:linear-gradient(#30363d 1px, transparent 1px), linear-gradient(90deg, #30363d 1px, transparent 1px); \
                background-size:20px 20px;", size.width, size.height)}>
            { for markers }
            { viewport.unwrap_or_default() }
        </div>
    </div>}
}
