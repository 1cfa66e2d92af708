use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use web_sys::{window, Element, Window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;
use crate::config;
use crate::counter;
use crate::simulated::Generation;

#[derive(Properties, PartialEq)]
pub struct FactCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub delay: f64,
}

fn is_in_viewport(node: &NodeRef, window: &Window) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    rect.top() < viewport_height && rect.bottom() > 0.0
}

fn watches_scroll(revealed: bool) -> bool {
    !revealed
}

#[function_component(FactCard)]
pub fn fact_card(props: &FactCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_state(|| false);
    let count = use_state_eq(|| 0u32);
    let generation = use_state(Generation::default);
    let target = counter::parse_target(&props.title);

    // Reveal once, the first time the card enters the viewport. The listener
    // is dropped as soon as `in_view` flips.
    {
        let node = node.clone();
        let revealed_dep = *in_view;
        let in_view = in_view.clone();
        use_effect_with_deps(move |revealed: &bool| {
            let listener = if watches_scroll(*revealed) {
                window().map(|window| {
                    let seen = Rc::new(Cell::new(false));
                    let check_window = window.clone();
                    let check = move || {
                        if !seen.get() && is_in_viewport(&node, &check_window) {
                            seen.set(true);
                            in_view.set(true);
                        }
                    };
                    check();

                    let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                    if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        log::warn!("Failed to attach scroll listener: {:?}", e);
                    }
                    (window, scroll_callback)
                })
            } else {
                None
            };

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, revealed_dep);
    }

    // Count up while visible
    {
        let count = count.clone();
        let generation = (*generation).clone();
        use_effect_with_deps(move |deps: &(bool, u32)| {
            let (visible, target) = *deps;
            if visible {
                match window().and_then(|w| w.performance()) {
                    Some(performance) => {
                        let ticket = generation.issue();
                        let start = performance.now();
                        spawn_local(async move {
                            loop {
                                TimeoutFuture::new(config::COUNTER_FRAME_MS).await;
                                if !ticket.is_current() {
                                    return;
                                }
                                let elapsed = performance.now() - start;
                                count.set(counter::count_at(elapsed, config::COUNTER_DURATION_MS, target));
                                if counter::is_finished(elapsed, config::COUNTER_DURATION_MS) {
                                    break;
                                }
                            }
                        });
                    }
                    None => {
                        log::warn!("Performance timer unavailable, showing final count");
                        count.set(target);
                    }
                }
            }
            move || generation.invalidate()
        }, (*in_view, target));
    }

    let headline = if *in_view {
        format!("{}%", *count)
    } else {
        props.title.to_string()
    };

    html! {
        <div ref={node} class="fact-card" style={format!("animation-delay: {}s;", props.delay)}>
            <div class="fact-card-headline">
                <h3>{headline}</h3>
            </div>
            <div class="fact-card-body">
                <p>{&props.description}</p>
            </div>
            <style>
                {r#"
                .fact-card {
                    overflow: hidden;
                    border: 1px solid #1f2937;
                    border-radius: 8px;
                    background: #000;
                    opacity: 0;
                    animation: factFadeUp 0.6s ease-out forwards;
                }
                @keyframes factFadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .fact-card-headline {
                    background: linear-gradient(135deg, #134e4a, #042f2e);
                    padding: 1.5rem;
                    text-align: center;
                }
                .fact-card-headline h3 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0;
                }
                .fact-card-body {
                    padding: 1.5rem;
                    text-align: center;
                    color: #d1d5db;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_watch_stops_after_reveal() {
        assert!(watches_scroll(false));
        assert!(!watches_scroll(true));
    }
}
