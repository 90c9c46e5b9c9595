use gloo::console;
use yew::prelude::*;

use crate::components::icons::UnraisedHandIcon;
use crate::style::InlineStyle;

/// Style preset in the shape the host page stores it.
const PRESET_STYLE_JSON: &str = r#"{"width": 24, "height": 24, "opacity": 0.8}"#;
const BANNER_STYLE_CSS: &str = "width: 48px; height: 48px; color: var(--online-indicator)";

fn preset_style() -> InlineStyle {
    serde_json::from_str(PRESET_STYLE_JSON).unwrap_or_else(|err| {
        console::error!("icon style preset rejected", err.to_string());
        InlineStyle::new()
    })
}

fn banner_style() -> InlineStyle {
    InlineStyle::parse(BANNER_STYLE_CSS).unwrap_or_else(|err| {
        console::error!("banner style rejected", err.to_string());
        InlineStyle::new()
    })
}

#[function_component(IconGallery)]
fn icon_gallery() -> Html {
    let lowered = use_state(|| 0_u32);
    let onclick = {
        let lowered = lowered.clone();
        Callback::from(move |_: MouseEvent| {
            let next = *lowered + 1;
            console::log!("hand lowered", next);
            lowered.set(next);
        })
    };

    html! {
        <main class="icon-gallery">
            <section>
                <h2>{"Default"}</h2>
                <UnraisedHandIcon />
            </section>
            <section>
                <h2>{"Filled"}</h2>
                <UnraisedHandIcon fill="#FF0000" style={preset_style()} />
            </section>
            <section>
                <h2>{"Styled"}</h2>
                <UnraisedHandIcon
                    class={classes!("icon-lg")}
                    style={InlineStyle::new().with("opacity", 0.5)}
                />
            </section>
            <section>
                <h2>{"Interactive"}</h2>
                <UnraisedHandIcon
                    style={banner_style()}
                    title="Lower hand"
                    attrs={vec![("data-testid", AttrValue::from("lower-hand"))]}
                    {onclick}
                />
                <p>{format!("Lowered {} times", *lowered)}</p>
            </section>
        </main>
    }
}

/// Mounts the icon gallery onto the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<IconGallery>::new().render();
}
