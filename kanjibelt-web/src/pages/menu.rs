use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MenuPageProps {
    pub on_start: Callback<()>,
}

#[function_component(MenuPage)]
pub fn menu_page(props: &MenuPageProps) -> Html {
    let onclick = {
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };

    html! {
        <div class="menu-screen" data-testid="menu-screen">
            <h1>{ "Kanjibelt" }</h1>
            <p class="menu-subtitle">
                { "Radicals ride the belts around the stage. Catch them with the arrow keys and assemble the kanji." }
            </p>
            <ul class="menu-howto">
                <li>{ "↑ catches the top belt, ↓ the bottom one" }</li>
                <li>{ "→ catches the right belt, ← the left one" }</li>
                <li>{ "A catch counts when the radical is inside the capture zone" }</li>
            </ul>
            <button class="menu-start" {onclick}>{ "Start" }</button>
        </div>
    }
}
