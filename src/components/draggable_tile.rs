use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use crate::config::InteractionConfig;
use crate::model::TileId;
use crate::state::{DragState, DropOutcome, DropZone, GestureTracker, should_begin, tile_opacity};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct DraggableTileProps {
    pub id: TileId,
    pub any_active: bool,
    pub screen_height: f64,
    pub config: InteractionConfig,
    pub on_drag_start: Callback<TileId>,
    pub on_drag_end: Callback<TileId>,
    #[prop_or_default]
    pub children: Html,
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

// Keeps one animation frame queued while the drag state still animates.
fn ensure_frame(frame: FrameSlot, drag: Rc<RefCell<DragState>>, redraw: UseForceUpdateHandle) {
    if frame.borrow().is_some() {
        return;
    }
    let slot = frame.clone();
    let handle = request_animation_frame(move |timestamp| {
        slot.borrow_mut().take();
        let animating = drag.borrow_mut().tick(timestamp);
        redraw.force_update();
        if animating {
            ensure_frame(slot, drag, redraw);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

#[function_component(DraggableTile)]
pub fn draggable_tile(props: &DraggableTileProps) -> Html {
    let node_ref = use_node_ref();
    let drag = use_mut_ref(DragState::default);
    let tracker = use_mut_ref(GestureTracker::default);
    let frame: FrameSlot = use_mut_ref(|| None::<AnimationFrame>);
    let redraw = use_force_update();

    // Pending frame is cancelled when the tile unmounts.
    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    let onpointerdown = {
        let tracker = tracker.clone();
        Callback::from(move |e: PointerEvent| {
            if !e.is_primary() {
                return;
            }
            tracker.borrow_mut().down(
                e.pointer_id(),
                e.client_x() as f64,
                e.client_y() as f64,
                e.time_stamp(),
            );
        })
    };

    let onpointermove = {
        let props = props.clone();
        let tracker = tracker.clone();
        let drag = drag.clone();
        let frame = frame.clone();
        let redraw = redraw.clone();
        let node_ref = node_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let now = e.time_stamp();
            let (vx, vy, dx, dy) = {
                let mut t = tracker.borrow_mut();
                if !t.update(e.pointer_id(), e.client_x() as f64, e.client_y() as f64, now) {
                    return;
                }
                let (dx, dy) = t.delta();
                (t.vx, t.vy, dx, dy)
            };
            let active = drag.borrow().active;
            if !active {
                let margin = props.config.capture_velocity_margin;
                if !should_begin(props.any_active, active, vx, vy, margin) {
                    return;
                }
                props.on_drag_start.emit(props.id.clone());
                drag.borrow_mut().begin(now, &props.config);
                if let Some(el) = node_ref.cast::<Element>() {
                    let _ = el.set_pointer_capture(e.pointer_id());
                }
                clog(&format!("drag start: {}", props.id.as_str()));
            }
            e.prevent_default();
            drag.borrow_mut().track(dx, dy);
            redraw.force_update();
            ensure_frame(frame.clone(), drag.clone(), redraw.clone());
        })
    };

    let end_gesture = {
        let props = props.clone();
        let tracker = tracker.clone();
        let drag = drag.clone();
        let frame = frame.clone();
        let redraw = redraw.clone();
        move |e: PointerEvent, cancelled: bool| {
            {
                let mut t = tracker.borrow_mut();
                if !t.is_tracking(e.pointer_id()) {
                    return;
                }
                t.clear();
            }
            if !drag.borrow().active {
                return;
            }
            let zone = DropZone::new(props.screen_height, props.config.drop_zone_height);
            let release_y = (!cancelled).then(|| e.client_y() as f64);
            let outcome = drag
                .borrow_mut()
                .release(release_y, &zone, e.time_stamp(), &props.config);
            match outcome {
                DropOutcome::Dropped => clog(&format!("drop succeeded: {}", props.id.as_str())),
                DropOutcome::Missed => clog(&format!(
                    "drop missed: {} released at y={} (zone starts at {})",
                    props.id.as_str(),
                    e.client_y(),
                    zone.top()
                )),
                DropOutcome::Cancelled => clog(&format!("drag cancelled: {}", props.id.as_str())),
            }
            props.on_drag_end.emit(props.id.clone());
            redraw.force_update();
            ensure_frame(frame.clone(), drag.clone(), redraw.clone());
        }
    };
    let onpointerup = {
        let end_gesture = end_gesture.clone();
        Callback::from(move |e: PointerEvent| end_gesture(e, false))
    };
    let onpointercancel = Callback::from(move |e: PointerEvent| end_gesture(e, true));

    let now = gloo::utils::window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_default();
    let (style, active) = {
        let d = drag.borrow();
        let (x, y) = d.offset();
        let scale = d.scale_at(now);
        let opacity = tile_opacity(props.any_active, d.active, props.config.inactive_opacity);
        let z = if d.active { 9999 } else { 1 };
        (
            format!(
                "position:relative; margin:5px; touch-action:pan-x; user-select:none; cursor:grab; \
                 transform:translate({x}px, {y}px) scale({scale}); opacity:{opacity}; z-index:{z};"
            ),
            d.active,
        )
    };

    html! {
        <div
            ref={node_ref}
            class={classes!("tile", active.then_some("tile-active"))}
            data-tile={props.id.as_str().to_owned()}
            style={style}
            onpointerdown={onpointerdown}
            onpointermove={onpointermove}
            onpointerup={onpointerup}
            onpointercancel={onpointercancel}
        >
            { props.children.clone() }
        </div>
    }
}
