use gamerec_core::related::{
    NO_RELATED_MESSAGE, RELATED_FAILED_MESSAGE, RELATED_HEADING, RelatedView,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: RelatedView,
    #[prop_or_default]
    pub on_select: Callback<String>,
}

/// Contents of `#relatedGamesContainer`.
#[function_component(RelatedGames)]
pub fn related_games(props: &Props) -> Html {
    if props.view == RelatedView::Failed {
        return html! {
            <p class="related-games-message" style="color: var(--danger-color)">
                { RELATED_FAILED_MESSAGE }
            </p>
        };
    }

    let items = props.view.items().iter().map(|item| {
        let onclick = {
            let id = item.id.clone();
            props.on_select.reform(move |_: MouseEvent| id.clone())
        };
        html! {
            <li key={item.id.clone()} class="related-game-item" {onclick}>{ item.title.clone() }</li>
        }
    });

    html! {
        <>
            <h3>{ RELATED_HEADING }</h3>
            <ul class="related-games-list">{ for items }</ul>
            if props.view == RelatedView::Empty {
                <p class="related-games-message">{ NO_RELATED_MESSAGE }</p>
            }
        </>
    }
}
