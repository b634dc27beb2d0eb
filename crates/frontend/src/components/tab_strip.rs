//! TabStrip component
//!
//! Рендерит разметку, которую понимает `TabSelectionController`:
//! контейнер с id из конфига, в нём по одному tab node на заголовок,
//! внутри input и label с `for`. После монтирования привязывает контроллер,
//! при размонтировании снимает обработчики.

use crate::binding::{bind_container, TabBinding};
use leptos::html;
use leptos::prelude::*;
use tabs::TabSelectionConfig;

/// Empty slot whose value is dropped when the current owner is cleaned up.
fn slot_for_owner<T: 'static>() -> StoredValue<Option<T>, LocalStorage> {
    let slot = StoredValue::new_local(None::<T>);
    on_cleanup(move || {
        let _ = slot.try_update_value(|value| value.take());
    });
    slot
}

#[component]
pub fn TabStrip(
    /// Заголовки табов, по порядку
    titles: Vec<String>,

    /// Container id, marker class and initial selection
    #[prop(optional)]
    config: TabSelectionConfig,
) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let binding = slot_for_owner::<TabBinding>();
    let container_id = config.container_id.clone();
    let group = format!("{}-tab", container_id);

    // Bind exactly once, when the container node appears
    Effect::new(move |bound: Option<bool>| {
        if bound == Some(true) {
            return true;
        }
        let Some(container) = container_ref.get() else {
            return false;
        };
        match bind_container(container.into(), config.clone()) {
            Ok(tab_binding) => binding.set_value(Some(tab_binding)),
            Err(err) => log::error!("TabStrip binding failed: {}", err),
        }
        true
    });

    let tabs = titles
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let input_id = format!("{}-{}", group, index);
            view! {
                <div class="tab-strip__tab">
                    <input type="radio" id=input_id.clone() name=group.clone() />
                    <label for=input_id>{title}</label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div id=container_id class="tab-strip" node_ref=container_ref>
            {tabs}
        </div>
    }
}
