use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Whether `target` lies outside `container`. A missing or non-node target
/// counts as outside.
pub fn is_outside(container: &Node, target: Option<&Node>) -> bool {
    !container.contains(target)
}

/// Calls `on_outside` for every document `mousedown` whose target is not
/// inside the element behind `container`. While `container` is not attached
/// every pointer-down counts as outside.
///
/// The document listener is registered once when the calling component
/// mounts and removed when it unmounts; re-renders only swap the callback.
#[hook]
pub fn use_click_outside(container: NodeRef, on_outside: Callback<()>) {
    let latest = use_mut_ref(|| on_outside.clone());
    *latest.borrow_mut() = on_outside;

    use_effect_with((), move |_| {
        let listener = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| {
                EventListener::new(&document, "mousedown", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let outside = match container.get() {
                        Some(element) => is_outside(&element, target.as_ref()),
                        None => true,
                    };
                    if outside {
                        latest.borrow().emit(());
                    }
                })
            });

        if listener.is_none() {
            Logger::warn_with_component("click-outside", "No document available, outside clicks are not tracked");
        }

        move || drop(listener)
    });
}
