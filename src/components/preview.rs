//! Basket preview: placeholder message or one block per staged file.

use leptos::*;

use crate::basket::truncate_display_name;
use crate::types::StagedFile;

/// Pure render of the basket state, re-run whole on every change. Empty
/// basket shows the drop message; otherwise one block per file with a
/// kind-specific icon and the truncated name, in insertion order.
#[component]
pub fn FileList(files: ReadSignal<Vec<StagedFile>>) -> impl IntoView {
    view! {
        <Show
            when=move || files.with(|f| !f.is_empty())
            fallback=|| view! {
                <p class="drop-message" id="dropMessage">
                    "Arrastre y suelte los archivos aquí, o haga clic para seleccionarlos"
                </p>
            }
        >
            <div class="file-list" id="fileList">
                <For
                    each=move || files.get().into_iter().enumerate()
                    key=|(idx, staged)| (*idx, staged.name.clone())
                    children=move |(_, staged)| {
                        view! {
                            <div class="file-block">
                                <i class=staged.kind.icon_class()></i>
                                <p class="file-name">{truncate_display_name(&staged.name)}</p>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
