use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, EventTarget, HtmlElement, KeyboardEvent, MediaQueryList, PointerEvent,
    ResizeObserver, WheelEvent, Window,
};
use yew::prelude::*;

use super::{
    map_hud::MapHud, minimap::Minimap, poi_marker::PoiMarker, poi_modal::PoiModal,
    poi_panel::PoiPanel,
};
use crate::model::{BlueprintData, District};
use crate::state::{Point, PointerMove, Selection, SelectionAction, Stage};
use crate::util::{self, element_size, is_editable_target, is_within_no_drag, now_ms};

#[derive(Properties, PartialEq, Clone)]
pub struct BlueprintMapProps {
    pub data: Rc<BlueprintData>,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling `requestAnimationFrame` chain; dropping it stops the chain.
struct FrameLoop {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    fn start(window: &Window, mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let handle = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let handle = handle.clone();
            let callback_loop = callback.clone();
            let window_loop = window.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                on_frame(now);
                handle.set(request_frame(&window_loop, &callback_loop));
            }) as Box<dyn FnMut(f64)>));
        }
        handle.set(request_frame(window, &callback));
        Self {
            window: window.clone(),
            handle,
            callback,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<i32> {
    let cb = callback.borrow();
    let f = cb.as_ref()?;
    let id = window.request_animation_frame(f.as_ref().unchecked_ref());
    id.ok()
}

fn listen(target: &EventTarget, event: &str, cb: &JsValue) {
    if let Err(err) = target.add_event_listener_with_callback(event, cb.unchecked_ref()) {
        log::warn!("failed to listen for {event}: {err:?}");
    }
}

fn unlisten(target: &EventTarget, event: &str, cb: &JsValue) {
    let _ = target.remove_event_listener_with_callback(event, cb.unchecked_ref());
}

fn remeasure(stage: &RefCell<Stage>, redraw: &UseForceUpdateHandle, el: &HtmlElement) {
    let size = element_size(el);
    if stage.borrow().container() != size {
        stage.borrow_mut().set_container(size);
        redraw.force_update();
    }
}

fn client_point(e: &PointerEvent) -> Point {
    Point::new(f64::from(e.client_x()), f64::from(e.client_y()))
}

/// Everything registered at mount. Dropping removes the listeners and stops
/// the frame loop.
struct StageListeners {
    window: Window,
    stage_el: HtmlElement,
    reduced_motion: Option<MediaQueryList>,
    _frame: FrameLoop,
    pointer_down: Closure<dyn FnMut(PointerEvent)>,
    pointer_move: Closure<dyn FnMut(PointerEvent)>,
    pointer_up: Closure<dyn FnMut(PointerEvent)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
    key_up: Closure<dyn FnMut(KeyboardEvent)>,
    blur: Closure<dyn FnMut(web_sys::Event)>,
    resize: Closure<dyn FnMut(web_sys::Event)>,
    resize_observer: Option<ResizeObserver>,
    _observe_resize: Closure<dyn FnMut(js_sys::Array)>,
    motion_change: Closure<dyn FnMut(web_sys::Event)>,
}

impl StageListeners {
    fn mount(
        stage_ref: &NodeRef,
        stage: Rc<RefCell<Stage>>,
        redraw: UseForceUpdateHandle,
        selection: UseReducerDispatcher<Selection>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let stage_el = stage_ref.cast::<HtmlElement>()?;

        if stage.borrow_mut().set_container(element_size(&stage_el)) {
            redraw.force_update();
        }

        // Reduced motion, kept live
        let reduced_motion = util::reduced_motion_query();
        if let Some(mq) = &reduced_motion {
            stage.borrow_mut().set_reduced_motion(mq.matches());
        }
        let motion_change = {
            let stage = stage.clone();
            let mq = reduced_motion.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                if let Some(mq) = &mq {
                    stage.borrow_mut().set_reduced_motion(mq.matches());
                }
            }) as Box<dyn FnMut(_)>)
        };
        if let Some(mq) = &reduced_motion {
            listen(mq, "change", motion_change.as_ref());
        }

        // Pointer drag
        let pointer_down = {
            let stage = stage.clone();
            let redraw = redraw.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                if is_within_no_drag(e.target()) {
                    // A press on chrome starts a fresh gesture too.
                    stage.borrow_mut().take_click_suppressed();
                    return;
                }
                let (id, button, at) = (e.pointer_id(), e.button(), client_point(&e));
                let started = stage.borrow_mut().pointer_down(id, button, at);
                if started {
                    redraw.force_update();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let pointer_move = {
            let stage = stage.clone();
            let redraw = redraw.clone();
            let stage_el = stage_el.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let id = e.pointer_id();
                let outcome = stage.borrow_mut().pointer_move(id, client_point(&e));
                match outcome {
                    PointerMove::Ignored => return,
                    PointerMove::PannedAndPromoted => {
                        // Without capture the window listeners still see the drag.
                        if let Err(err) = stage_el.set_pointer_capture(id) {
                            log::debug!("pointer capture unavailable: {err:?}");
                        }
                    }
                    PointerMove::Panned => {}
                }
                redraw.force_update();
            }) as Box<dyn FnMut(_)>)
        };
        let pointer_up = {
            let stage = stage.clone();
            let redraw = redraw.clone();
            let stage_el = stage_el.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let id = e.pointer_id();
                let ended = stage.borrow_mut().pointer_up(id);
                if ended {
                    if stage_el.has_pointer_capture(id) {
                        let _ = stage_el.release_pointer_capture(id);
                    }
                    redraw.force_update();
                }
            }) as Box<dyn FnMut(_)>)
        };

        // Wheel zoom around the cursor
        let wheel = {
            let stage = stage.clone();
            let redraw = redraw.clone();
            let stage_el = stage_el.clone();
            Closure::wrap(Box::new(move |e: WheelEvent| {
                if is_within_no_drag(e.target()) {
                    return;
                }
                e.prevent_default();
                let rect = stage_el.get_bounding_client_rect();
                let cursor = Point::new(
                    f64::from(e.client_x()) - rect.left(),
                    f64::from(e.client_y()) - rect.top(),
                );
                stage.borrow_mut().wheel(e.delta_y(), cursor);
                redraw.force_update();
            }) as Box<dyn FnMut(_)>)
        };

        // Keyboard, independent of focus
        let key_down = {
            let stage = stage.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let key = e.key();
                if key == "Escape" {
                    selection.dispatch(SelectionAction::Escape);
                    return;
                }
                if is_editable_target(e.target()) {
                    return;
                }
                stage.borrow_mut().key_down(&key);
            }) as Box<dyn FnMut(_)>)
        };
        let key_up = {
            let stage = stage.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                stage.borrow_mut().key_up(&e.key());
            }) as Box<dyn FnMut(_)>)
        };
        let blur = {
            let stage = stage.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                stage.borrow_mut().clear_keys();
            }) as Box<dyn FnMut(_)>)
        };

        // Container size: observed directly, window resize as the fallback
        let resize = {
            let stage = stage.clone();
            let redraw = redraw.clone();
            let stage_el = stage_el.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                remeasure(&stage, &redraw, &stage_el);
            }) as Box<dyn FnMut(_)>)
        };
        let observe_resize = {
            let stage = stage.clone();
            let redraw = redraw.clone();
            let stage_el = stage_el.clone();
            Closure::wrap(Box::new(move |_entries: js_sys::Array| {
                remeasure(&stage, &redraw, &stage_el);
            }) as Box<dyn FnMut(_)>)
        };
        let resize_observer = match ResizeObserver::new(observe_resize.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&stage_el);
                Some(observer)
            }
            Err(err) => {
                log::debug!("ResizeObserver unavailable, using window resize: {err:?}");
                None
            }
        };

        listen(&stage_el, "pointerdown", pointer_down.as_ref());
        listen(&window, "pointermove", pointer_move.as_ref());
        listen(&window, "pointerup", pointer_up.as_ref());
        listen(&window, "pointercancel", pointer_up.as_ref());
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        if let Err(err) = stage_el.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("failed to listen for wheel: {err:?}");
        }
        listen(&window, "keydown", key_down.as_ref());
        listen(&window, "keyup", key_up.as_ref());
        listen(&window, "blur", blur.as_ref());
        listen(&window, "resize", resize.as_ref());

        // Keyboard pan and camera animation share one frame loop
        let frame = FrameLoop::start(&window, move |now| {
            if stage.borrow_mut().frame(now) {
                redraw.force_update();
            }
        });

        Some(Self {
            window,
            stage_el,
            reduced_motion,
            _frame: frame,
            pointer_down,
            pointer_move,
            pointer_up,
            wheel,
            key_down,
            key_up,
            blur,
            resize,
            resize_observer,
            _observe_resize: observe_resize,
            motion_change,
        })
    }
}

impl Drop for StageListeners {
    fn drop(&mut self) {
        unlisten(&self.stage_el, "pointerdown", self.pointer_down.as_ref());
        unlisten(&self.stage_el, "wheel", self.wheel.as_ref());
        unlisten(&self.window, "pointermove", self.pointer_move.as_ref());
        unlisten(&self.window, "pointerup", self.pointer_up.as_ref());
        unlisten(&self.window, "pointercancel", self.pointer_up.as_ref());
        unlisten(&self.window, "keydown", self.key_down.as_ref());
        unlisten(&self.window, "keyup", self.key_up.as_ref());
        unlisten(&self.window, "blur", self.blur.as_ref());
        unlisten(&self.window, "resize", self.resize.as_ref());
        if let Some(observer) = &self.resize_observer {
            observer.disconnect();
        }
        if let Some(mq) = &self.reduced_motion {
            unlisten(mq, "change", self.motion_change.as_ref());
        }
    }
}

/// Focus `target` on the next frame; returns what is needed to cancel it.
fn focus_next_frame(target: NodeRef) -> Option<(Window, i32)> {
    let window = web_sys::window()?;
    let cb = Closure::once_into_js(move || {
        if let Some(el) = target.cast::<HtmlElement>() {
            let _ = el.focus();
        }
    });
    let id = window.request_animation_frame(cb.unchecked_ref()).ok()?;
    Some((window, id))
}

#[function_component(BlueprintMap)]
pub fn blueprint_map(props: &BlueprintMapProps) -> Html {
    let stage_ref = use_node_ref();
    let close_ref = use_node_ref();
    let stage = use_mut_ref(|| Stage::new(props.data.stage.clone()));
    let selection = use_reducer(Selection::default);
    let redraw = use_force_update();
    let last_opened = use_mut_ref(|| None::<String>);
    let registry = use_memo(props.data.clone(), |data| data.registry());
    let marker_refs = use_memo(registry.clone(), |reg| {
        reg.iter()
            .map(|p| (p.id.clone(), NodeRef::default()))
            .collect::<HashMap<_, _>>()
    });

    // Listeners + frame loop, mount to unmount
    {
        let stage_ref = stage_ref.clone();
        let stage = stage.clone();
        let redraw = redraw.clone();
        let dispatcher = selection.dispatcher();
        use_effect_with((), move |_| {
            let listeners = StageListeners::mount(&stage_ref, stage, redraw, dispatcher);
            if listeners.is_none() {
                log::warn!("blueprint stage not mounted; input disabled");
            }
            move || drop(listeners)
        });
    }

    // Modal open -> close button; modal closed -> the POI that opened it
    {
        let close_ref = close_ref.clone();
        let marker_refs = marker_refs.clone();
        let last_opened = last_opened.clone();
        use_effect_with(selection.active_id.clone(), move |active| {
            let target = if active.is_some() {
                Some(close_ref)
            } else {
                last_opened
                    .borrow()
                    .as_ref()
                    .and_then(|id| marker_refs.get(id))
                    .cloned()
            };
            let pending = target.and_then(focus_next_frame);
            move || {
                if let Some((window, id)) = pending {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        });
    }

    let open_poi = {
        let stage = stage.clone();
        let dispatcher = selection.dispatcher();
        let last_opened = last_opened.clone();
        let registry = registry.clone();
        let redraw = redraw.clone();
        Callback::from(move |(id, focus): (String, bool)| {
            *last_opened.borrow_mut() = Some(id.clone());
            if focus {
                if let Some(poi) = registry.get(&id) {
                    stage.borrow_mut().focus_poi(poi, now_ms());
                    redraw.force_update();
                }
            }
            dispatcher.dispatch(SelectionAction::Open(id));
        })
    };
    let on_marker_click = {
        let stage = stage.clone();
        let open_poi = open_poi.clone();
        let focus_on_open = props.data.stage.focus_on_open;
        Callback::from(move |id: String| {
            if stage.borrow_mut().take_click_suppressed() {
                return;
            }
            open_poi.emit((id, focus_on_open));
        })
    };
    let on_minimap_marker = {
        let open_poi = open_poi.clone();
        Callback::from(move |id: String| open_poi.emit((id, true)))
    };
    let on_panel_open = {
        let open_poi = open_poi.clone();
        Callback::from(move |id: String| open_poi.emit((id, false)))
    };
    let on_jump = {
        let stage = stage.clone();
        let redraw = redraw.clone();
        Callback::from(move |world: Point| {
            stage.borrow_mut().jump_to(world, now_ms());
            redraw.force_update();
        })
    };
    let on_close = {
        let dispatcher = selection.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(SelectionAction::Close))
    };
    let on_reset = {
        let stage = stage.clone();
        let redraw = redraw.clone();
        let dispatcher = selection.dispatcher();
        Callback::from(move |()| {
            dispatcher.dispatch(SelectionAction::Reset);
            stage.borrow_mut().reset_view();
            redraw.force_update();
        })
    };
    let on_focus_selected = {
        let stage = stage.clone();
        let redraw = redraw.clone();
        let registry = registry.clone();
        let selected = selection.selected_id.clone();
        Callback::from(move |()| {
            let Some(poi) = selected.as_deref().and_then(|id| registry.get(id)) else {
                return;
            };
            stage.borrow_mut().focus_poi(poi, now_ms());
            redraw.force_update();
        })
    };
    let zoom_cb = |zoom_in: bool| {
        let stage = stage.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            if stage.borrow_mut().zoom_step(zoom_in) {
                redraw.force_update();
            }
        })
    };
    let on_teleport = {
        let stage = stage.clone();
        let redraw = redraw.clone();
        Callback::from(move |district: District| {
            stage.borrow_mut().focus_district(&district, now_ms());
            redraw.force_update();
        })
    };

    let (camera, dragging, projection, viewport) = {
        let st = stage.borrow();
        let padding = st.config().world_padding;
        let projection = st.minimap_projection(registry.world_bounds(padding));
        let viewport = projection.as_ref().and_then(|p| st.minimap_viewport(p));
        (st.camera(), st.is_dragging(), projection, viewport)
    };
    let selected_id = selection.selected_id.clone();
    let lookup = |id: Option<&str>| id.and_then(|id| registry.get(id)).cloned();
    let selected_poi = lookup(selected_id.as_deref());
    let active_poi = lookup(selection.active_id.as_deref());

    let stage_style = format!(
        "position:relative; width:100%; height:100%; overflow:hidden; touch-action:none; user-select:none; \
         cursor:{}; background-color:#0b1a2e; \
         background-image:linear-gradient(rgba(88,166,255,0.08) 1px, transparent 1px), \
         linear-gradient(90deg, rgba(88,166,255,0.08) 1px, transparent 1px); \
         background-size:{s}px {s}px; background-position:{}px {}px;",
        if dragging { "grabbing" } else { "grab" },
        camera.offset_x,
        camera.offset_y,
        s = 40.0 * camera.zoom,
    );
    let layer_style = format!(
        "position:absolute; left:0; top:0; transform-origin:0 0; will-change:transform; transform:{};",
        camera.transform_css()
    );

    html! {
        <div ref={stage_ref} style={stage_style} role="region" aria-label="Blueprint map">
            <div style="position:absolute; left:12px; top:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 10px; font-size:12px; pointer-events:none;">
                <p style="margin:0; font-weight:600;">{"Blueprint Map"}</p>
                <p style="margin:2px 0 0 0; opacity:0.7;">{"Drag: mouse/touch • Zoom: scroll • Move: WASD / arrows"}</p>
            </div>
            { if registry.is_empty() { html! {
                <p style="position:absolute; left:50%; top:50%; transform:translate(-50%, -50%); margin:0; opacity:0.6;">{"No points of interest"}</p>
            }} else { html! {} }}
            <div style={layer_style} aria-hidden={selection.is_modal_open().to_string()}>
                { for registry.iter().enumerate().map(|(i, poi)| html! {
                    <PoiMarker
                        key={format!("{i}-{}", poi.id)}
                        poi={poi.clone()}
                        selected={selected_id.as_deref() == Some(poi.id.as_str())}
                        button_ref={marker_refs.get(&poi.id).cloned().unwrap_or_default()}
                        on_open={on_marker_click.clone()}
                    />
                })}
            </div>
            <Minimap
                registry={registry.clone()}
                projection={projection}
                viewport={viewport}
                selected_id={selected_id.clone()}
                on_marker={on_minimap_marker}
                on_jump={on_jump}
            />
            <PoiPanel poi={selected_poi.clone()} on_open={on_panel_open} on_focus={on_focus_selected.clone()} />
            <MapHud
                districts={props.data.districts.clone()}
                has_selection={selected_poi.is_some()}
                on_zoom_in={zoom_cb(true)}
                on_zoom_out={zoom_cb(false)}
                on_reset={on_reset}
                on_focus_selected={on_focus_selected}
                on_teleport={on_teleport}
            />
            <PoiModal poi={active_poi} close_ref={close_ref} on_close={on_close} />
        </div>
    }
}
