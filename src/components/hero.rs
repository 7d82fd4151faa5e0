//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Adjuntar archivos"</h1>
            <p class="subtitle">
                "Arrastre hasta 4 archivos PDF o 1 archivo ZIP y seleccione "
                "el director de programa responsable antes de guardar."
            </p>
        </div>
    }
}
